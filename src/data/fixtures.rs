//! Hard-coded dashboard content. Nothing here is fetched or persisted.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use super::models::*;

#[allow(clippy::too_many_arguments)]
fn agent(
    id: &str,
    name: &str,
    status: AgentStatus,
    joined: (i32, u32, u32),
    stats: (f32, u32, f32, u32),
    idle_minutes: u32,
    location: &str,
    shift: &str,
    earnings: u32,
    warnings: u32,
    badges: &[&str],
) -> Agent {
    let (rating, total_deliveries, completion_rate, avg_delivery_minutes) = stats;
    let first = name.split_whitespace().next().unwrap_or(name).to_lowercase();
    let last_initial = name
        .split_whitespace()
        .nth(1)
        .and_then(|part| part.chars().next())
        .map(|c| c.to_ascii_lowercase())
        .unwrap_or('x');
    let suffix = id.trim_start_matches('A').parse::<u32>().unwrap_or(0) + 9;
    Agent {
        id: id.to_string(),
        name: name.to_string(),
        status,
        phone: format!("+91 98765 432{suffix:02}"),
        email: format!("{first}.{last_initial}@bigbasket.com"),
        join_date: NaiveDate::from_ymd_opt(joined.0, joined.1, joined.2).unwrap_or_default(),
        rating,
        total_deliveries,
        completion_rate,
        avg_delivery_minutes,
        idle_minutes,
        location: location.to_string(),
        shift: shift.to_string(),
        earnings,
        warnings,
        badges: badges.iter().map(|b| b.to_string()).collect(),
    }
}

pub static AGENTS: Lazy<Vec<Agent>> = Lazy::new(|| {
    vec![
        agent("A001", "Raja Iyer", AgentStatus::Active, (2023, 6, 15), (4.8, 1247, 96.5, 18), 2,
            "Loading Bay #2", "06:00 - 14:00", 45600, 0, &["Top Performer", "Speed Demon"]),
        agent("A002", "Ekbal Hassan", AgentStatus::Delivery, (2023, 4, 20), (4.6, 1089, 94.2, 22), 0,
            "Customer Location", "14:00 - 22:00", 42300, 1, &["Reliable"]),
        agent("A003", "Bharath Anand", AgentStatus::Idle, (2023, 8, 10), (4.2, 756, 89.1, 28), 14,
            "Waiting Area", "22:00 - 06:00", 32800, 2, &["Night Shift"]),
        agent("A004", "Priya Sharma", AgentStatus::Active, (2023, 3, 5), (4.9, 1456, 98.1, 16), 1,
            "Exit Gate", "06:00 - 14:00", 52400, 0, &["Top Performer", "Customer Favorite", "Excellence Award"]),
        agent("A005", "Amit Kumar", AgentStatus::Break, (2023, 7, 12), (4.3, 892, 91.3, 25), 0,
            "Break Room", "14:00 - 22:00", 38700, 1, &["Consistent"]),
        agent("A006", "Rahul Mehta", AgentStatus::Offline, (2023, 5, 18), (3.8, 634, 85.7, 32), 0,
            "Off Duty", "22:00 - 06:00", 29500, 3, &[]),
        agent("A007", "Deepak Rao", AgentStatus::Delivery, (2023, 9, 2), (4.5, 612, 93.0, 21), 0,
            "En Route", "06:00 - 14:00", 30100, 0, &["Rising Star"]),
        agent("A008", "Suresh Varma", AgentStatus::Idle, (2023, 2, 27), (4.1, 1102, 90.4, 26), 22,
            "Waiting Area", "14:00 - 22:00", 40200, 2, &[]),
    ]
});

fn camera(
    id: &str,
    name: &str,
    zone: &str,
    status: FeedStatus,
    alert: &str,
    active_count: u32,
    video: u32,
) -> CameraFeed {
    CameraFeed {
        id: id.to_string(),
        name: name.to_string(),
        zone: zone.to_string(),
        status,
        alert: alert.to_string(),
        active_count,
        resolution: "1920x1080".to_string(),
        video_url: format!("/videos/footage{video}.mp4"),
    }
}

pub static LIVE_CAMERAS: Lazy<Vec<CameraFeed>> = Lazy::new(|| {
    vec![
        camera("waiting-area", "Waiting Area", "Zone A", FeedStatus::Warning, "3 agents idle 15+ mins", 8, 1),
        camera("loading-bay-1", "Loading Bay #1", "Zone B", FeedStatus::Active, "2 active pickups", 2, 3),
        camera("loading-bay-2", "Loading Bay #2", "Zone B", FeedStatus::Normal, "Ready for pickup", 0, 15),
        camera("exit-gate", "Exit Gate", "Zone C", FeedStatus::Active, "1 agent departing", 1, 12),
        camera("entry-gate", "Entry Gate", "Zone D", FeedStatus::Normal, "No current activity", 0, 14),
        camera("parking-area", "Parking Area", "Zone E", FeedStatus::Active, "4 vehicles parked", 4, 7),
    ]
});

pub static PREVIEW_CAMERAS: Lazy<Vec<CameraFeed>> = Lazy::new(|| {
    vec![
        camera("waiting-area", "Waiting Area", "Zone A", FeedStatus::Online, "1 alert", 1, 1),
        camera("loading-bay-1", "Loading Bay #1", "Zone B", FeedStatus::Online, "No alerts", 0, 6),
        camera("loading-bay-2", "Loading Bay #2", "Zone B", FeedStatus::Offline, "1 alert", 1, 3),
        camera("exit-gate", "Exit Gate", "Zone C", FeedStatus::Online, "No alerts", 0, 4),
        camera("entry-gate", "Entry Gate", "Zone D", FeedStatus::Online, "No alerts", 0, 5),
        camera("parking-area", "Parking Area", "Zone E", FeedStatus::Maintenance, "No alerts", 0, 2),
    ]
});

pub static RECORDED_CAMERAS: Lazy<Vec<RecordedCamera>> = Lazy::new(|| {
    [
        ("waiting-area", "Waiting Area", "Zone A", FeedStatus::Online, 7),
        ("loading-bay", "Loading Bay", "Zone B", FeedStatus::Online, 8),
        ("exit-gate", "Exit Gate", "Zone C", FeedStatus::Online, 9),
        ("entry-gate", "Entry Gate", "Zone D", FeedStatus::Maintenance, 10),
    ]
    .into_iter()
    .map(|(id, name, zone, status, video)| RecordedCamera {
        id: id.to_string(),
        name: name.to_string(),
        zone: zone.to_string(),
        status,
        video_url: format!("/videos/footage{video}.mp4"),
    })
    .collect()
});

pub(crate) fn timeline_fixture(camera_id: &str) -> &'static [(f64, &'static str, &'static str)] {
    match camera_id {
        "waiting-area" => &[
            (300.0, "agent-entry", "Agent entered waiting area"),
            (900.0, "idle-start", "Agent idle period started"),
            (2100.0, "alert", "Idle alert triggered"),
            (2400.0, "agent-exit", "Agent left for delivery"),
            (4200.0, "agent-entry", "New agent arrived"),
        ],
        "loading-bay" => &[
            (600.0, "vehicle-arrival", "Delivery vehicle arrived"),
            (1200.0, "loading-start", "Loading process started"),
            (1800.0, "loading-complete", "Loading completed"),
            (2400.0, "vehicle-departure", "Vehicle departed"),
        ],
        "exit-gate" => &[
            (450.0, "agent-exit", "Agent departed for delivery"),
            (1800.0, "agent-return", "Agent returned from delivery"),
            (3600.0, "shift-change", "Shift change detected"),
        ],
        "entry-gate" => &[
            (200.0, "agent-entry", "Agent entered facility"),
            (1500.0, "visitor-arrival", "Visitor checked in"),
            (3000.0, "maintenance", "Maintenance activity"),
        ],
        _ => &[],
    }
}

pub static RECENT_ALERTS: Lazy<Vec<Alert>> = Lazy::new(|| {
    vec![
        Alert {
            id: 1,
            message: "Agent ID #A127 idle for 15+ minutes".to_string(),
            camera: "Waiting Area".to_string(),
            minutes_ago: 2,
            severity: Severity::High,
        },
        Alert {
            id: 2,
            message: "Camera offline: Loading Bay #2".to_string(),
            camera: "Loading Bay".to_string(),
            minutes_ago: 5,
            severity: Severity::Medium,
        },
        Alert {
            id: 3,
            message: "Potential surge pricing detected".to_string(),
            camera: "Multiple".to_string(),
            minutes_ago: 12,
            severity: Severity::High,
        },
    ]
});

fn kpi(label: &str, value: &str, detail: &str, icon: &str, tone: KpiTone) -> Kpi {
    Kpi {
        label: label.to_string(),
        value: value.to_string(),
        detail: detail.to_string(),
        icon: icon.to_string(),
        tone,
    }
}

pub static DASHBOARD_KPIS: Lazy<Vec<Kpi>> = Lazy::new(|| {
    vec![
        kpi("Total Agents", "24", "12/15 cameras online", "users", KpiTone::Neutral),
        kpi("Active Agents", "18", "6 idle", "activity", KpiTone::Positive),
        kpi("Critical Alerts", "3", "2 high severity", "alert", KpiTone::Critical),
        kpi("Efficiency Score", "87%", "Avg delivery 28 min", "trending", KpiTone::Positive),
    ]
});

pub static LIVE_FEED_KPIS: Lazy<Vec<Kpi>> = Lazy::new(|| {
    vec![
        kpi("Total Agents", "22", "+2 today", "users", KpiTone::Neutral),
        kpi("Idle", "5", "3 flagged", "clock", KpiTone::Warning),
        kpi("Engaged", "15", "68% efficiency", "trending", KpiTone::Positive),
        kpi("Surge Alerts", "1", "Active now", "alert", KpiTone::Critical),
    ]
});

fn points(series: &[(&str, f64)]) -> Vec<ChartPoint> {
    series
        .iter()
        .map(|(label, value)| ChartPoint {
            label: label.to_string(),
            value: *value,
        })
        .collect()
}

pub static HOURLY_DELIVERIES: Lazy<Vec<ChartPoint>> = Lazy::new(|| {
    points(&[
        ("00:00", 12.0),
        ("04:00", 8.0),
        ("08:00", 45.0),
        ("12:00", 78.0),
        ("16:00", 65.0),
        ("20:00", 32.0),
    ])
});

pub static WEEKLY_IDLE_PERCENT: Lazy<Vec<ChartPoint>> = Lazy::new(|| {
    points(&[
        ("Mon", 15.0),
        ("Tue", 20.0),
        ("Wed", 12.0),
        ("Thu", 18.0),
        ("Fri", 25.0),
        ("Sat", 30.0),
        ("Sun", 22.0),
    ])
});

pub static WEEKLY_SAVINGS: Lazy<Vec<ChartPoint>> = Lazy::new(|| {
    points(&[
        ("Mon", 1200.0),
        ("Tue", 1800.0),
        ("Wed", 2200.0),
        ("Thu", 1600.0),
        ("Fri", 2800.0),
        ("Sat", 3200.0),
        ("Sun", 2400.0),
    ])
});

pub static PRODUCTIVITY_SPLIT: Lazy<Vec<ChartPoint>> = Lazy::new(|| {
    points(&[
        ("High Performers", 60.0),
        ("Average", 30.0),
        ("Needs Improvement", 10.0),
    ])
});

fn faq(question: &str, answer: &str) -> Faq {
    Faq {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

pub static FAQ_CATEGORIES: Lazy<Vec<FaqCategory>> = Lazy::new(|| {
    vec![
        FaqCategory {
            id: "getting-started".to_string(),
            title: "Getting Started".to_string(),
            icon: "book".to_string(),
            questions: vec![
                faq("How do I access the RiderTrack surveillance system?",
                    "You can access RiderTrack through your web browser using your provided credentials. The system is available 24/7 and supports all modern browsers. Contact your IT administrator if you need login credentials."),
                faq("What are the different dashboard views available?",
                    "RiderTrack offers Dashboard (overview and analytics), Live Feed (real-time camera monitoring), Past Feed (historical footage review), Agents (agent management), Reports (analytics and insights) and Help."),
                faq("How do I switch between different store locations?",
                    "Use the store selector dropdown in the top header to switch between different BigBasket dark store locations. Your permissions determine which stores you can access."),
            ],
        },
        FaqCategory {
            id: "camera-monitoring".to_string(),
            title: "Camera & Monitoring".to_string(),
            icon: "camera".to_string(),
            questions: vec![
                faq("Why is a camera showing as offline?",
                    "Camera offline status can occur due to network connectivity issues, power outages, or hardware failure. Check the system alerts for specific error messages. Contact technical support if the issue persists beyond 5 minutes."),
                faq("How do I view multiple camera feeds simultaneously?",
                    "Use the Live Feed page which displays all active cameras in a grid layout. You can also use the Dashboard page for a thumbnail overview of all cameras with quick status indicators."),
                faq("How do I review past footage?",
                    "Navigate to the Past Feed page where you can select specific cameras, date ranges, and time periods. Footage is typically retained for 30 days."),
            ],
        },
        FaqCategory {
            id: "agent-tracking".to_string(),
            title: "Agent Tracking".to_string(),
            icon: "users".to_string(),
            questions: vec![
                faq("How does the system detect if an agent is idle?",
                    "The system uses movement detection to identify when agents remain stationary for extended periods. Default idle threshold is 15 minutes, which can be configured in alert settings."),
                faq("What triggers surge pricing alerts?",
                    "Surge pricing alerts are triggered when multiple agents (typically 4+) are simultaneously idle during high-demand periods, or when delivery completion rates drop significantly during adverse conditions like rain or traffic."),
                faq("Can I manually override agent status?",
                    "Yes, supervisors can manually update agent status through the Agents page. This is useful for correcting false positives or updating status during system maintenance."),
            ],
        },
        FaqCategory {
            id: "troubleshooting".to_string(),
            title: "Troubleshooting".to_string(),
            icon: "alert".to_string(),
            questions: vec![
                faq("The system is running slowly. What can I do?",
                    "Try refreshing your browser, clearing cache, or switching to a different browser. Ensure you have a stable internet connection with at least 10 Mbps bandwidth for optimal performance."),
                faq("Video playback is choppy or not loading.",
                    "This usually indicates bandwidth or browser issues. Feeds only load once they scroll near the screen; if a preview stays black, click it to start playback manually or contact IT support."),
                faq("I can't access certain features or stores.",
                    "Feature access is role-based. Contact your system administrator to verify your user permissions and access levels."),
            ],
        },
    ]
});

pub static SUPPORT_CHANNELS: Lazy<Vec<SupportChannel>> = Lazy::new(|| {
    [
        ("Technical Support", "24/7 technical assistance for system issues", "+91 80-4040-1234", "24/7"),
        ("Email Support", "Detailed technical queries and documentation", "ridertrack-support@patternai.com", "Response within 4 hours"),
        ("Live Chat", "Quick answers and real-time assistance", "Available in-app", "09:00 - 21:00"),
    ]
    .into_iter()
    .map(|(title, description, contact, availability)| SupportChannel {
        title: title.to_string(),
        description: description.to_string(),
        contact: contact.to_string(),
        availability: availability.to_string(),
    })
    .collect()
});
