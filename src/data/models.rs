use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Delivery,
    Idle,
    Break,
    Offline,
}

impl AgentStatus {
    pub const ALL: [AgentStatus; 5] = [
        AgentStatus::Active,
        AgentStatus::Delivery,
        AgentStatus::Idle,
        AgentStatus::Break,
        AgentStatus::Offline,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AgentStatus::Active => "Active",
            AgentStatus::Delivery => "On Delivery",
            AgentStatus::Idle => "Idle",
            AgentStatus::Break => "On Break",
            AgentStatus::Offline => "Offline",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            AgentStatus::Active => "active",
            AgentStatus::Delivery => "delivery",
            AgentStatus::Idle => "idle",
            AgentStatus::Break => "break",
            AgentStatus::Offline => "offline",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.key() == key)
    }

    pub fn dot_class(self) -> &'static str {
        match self {
            AgentStatus::Active => "bg-green-500",
            AgentStatus::Delivery => "bg-blue-500",
            AgentStatus::Idle => "bg-orange-500",
            AgentStatus::Break => "bg-purple-500",
            AgentStatus::Offline => "bg-zinc-500",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            AgentStatus::Active => "text-green-400",
            AgentStatus::Delivery => "text-blue-400",
            AgentStatus::Idle => "text-orange-400",
            AgentStatus::Break => "text-purple-400",
            AgentStatus::Offline => "text-zinc-400",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub status: AgentStatus,
    pub phone: String,
    pub email: String,
    pub join_date: NaiveDate,
    pub rating: f32,
    pub total_deliveries: u32,
    pub completion_rate: f32,
    pub avg_delivery_minutes: u32,
    pub idle_minutes: u32,
    pub location: String,
    pub shift: String,
    pub earnings: u32,
    pub warnings: u32,
    pub badges: Vec<String>,
}

impl Agent {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedStatus {
    Online,
    Active,
    Warning,
    Normal,
    Offline,
    Maintenance,
}

impl FeedStatus {
    pub fn dot_class(self) -> &'static str {
        match self {
            FeedStatus::Online | FeedStatus::Active => "bg-green-500",
            FeedStatus::Normal => "bg-blue-500",
            FeedStatus::Warning | FeedStatus::Maintenance => "bg-orange-500",
            FeedStatus::Offline => "bg-red-500",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraFeed {
    pub id: String,
    pub name: String,
    pub zone: String,
    pub status: FeedStatus,
    pub alert: String,
    pub active_count: u32,
    pub resolution: String,
    pub video_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn badge_class(self) -> &'static str {
        match self {
            Severity::Low => "bg-zinc-700 text-zinc-200",
            Severity::Medium => "bg-orange-500/20 text-orange-300",
            Severity::High => "bg-red-500/20 text-red-300",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: u32,
    pub message: String,
    pub camera: String,
    pub minutes_ago: u32,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiTone {
    Neutral,
    Warning,
    Critical,
    Positive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: String,
    pub detail: String,
    pub icon: String,
    pub tone: KpiTone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqCategory {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub questions: Vec<Faq>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportChannel {
    pub title: String,
    pub description: String,
    pub contact: String,
    pub availability: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Seconds from the start of the recorded window.
    pub at: f64,
    pub kind: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedCamera {
    pub id: String,
    pub name: String,
    pub zone: String,
    pub status: FeedStatus,
    pub video_url: String,
}

/// One labelled series point for the report charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}
