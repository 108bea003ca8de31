use super::fixtures::timeline_fixture;
use super::models::{Agent, AgentStatus, ChartPoint, FaqCategory, TimelineEvent};

fn matches_query(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Agents whose name or id contains `query` (case-insensitive), optionally
/// restricted to one status. Order is preserved.
pub fn filter_agents<'a>(
    agents: &'a [Agent],
    query: &str,
    status: Option<AgentStatus>,
) -> Vec<&'a Agent> {
    let needle = query.trim().to_lowercase();
    agents
        .iter()
        .filter(|agent| status.map_or(true, |status| agent.status == status))
        .filter(|agent| {
            needle.is_empty() || matches_query(&agent.name, &needle) || matches_query(&agent.id, &needle)
        })
        .collect()
}

pub fn count_with_status(agents: &[Agent], status: AgentStatus) -> usize {
    agents.iter().filter(|agent| agent.status == status).count()
}

/// Questions whose text or answer contains `query`. Categories left with no
/// questions are dropped.
pub fn search_faqs(categories: &[FaqCategory], query: &str) -> Vec<FaqCategory> {
    let needle = query.trim().to_lowercase();
    categories
        .iter()
        .filter_map(|category| {
            let questions: Vec<_> = category
                .questions
                .iter()
                .filter(|faq| {
                    needle.is_empty()
                        || matches_query(&faq.question, &needle)
                        || matches_query(&faq.answer, &needle)
                })
                .cloned()
                .collect();
            if questions.is_empty() {
                None
            } else {
                Some(FaqCategory {
                    questions,
                    ..category.clone()
                })
            }
        })
        .collect()
}

/// Events recorded for a camera, limited to the playable window.
pub fn timeline_for(camera_id: &str, window_seconds: f64) -> Vec<TimelineEvent> {
    timeline_fixture(camera_id)
        .iter()
        .filter(|(at, _, _)| *at <= window_seconds)
        .map(|(at, kind, description)| TimelineEvent {
            at: *at,
            kind: kind.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// Bar heights as percentages of the largest value, for CSS bar charts.
pub fn bar_heights(points: &[ChartPoint]) -> Vec<f64> {
    let max = points
        .iter()
        .map(|p| p.value)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    points
        .iter()
        .map(|p| {
            if max <= 0.0 || !p.value.is_finite() {
                0.0
            } else {
                (p.value.max(0.0) / max * 100.0).clamp(0.0, 100.0)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{AGENTS, FAQ_CATEGORIES};

    fn ids(agents: &[&Agent]) -> Vec<String> {
        agents.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn empty_query_keeps_everyone() {
        assert_eq!(filter_agents(&AGENTS, "  ", None).len(), AGENTS.len());
    }

    #[test]
    fn agent_search_matches_name_or_id() {
        assert_eq!(ids(&filter_agents(&AGENTS, "PRIYA", None)), vec!["A004"]);
        assert_eq!(ids(&filter_agents(&AGENTS, "a00", None)).len(), AGENTS.len());
        assert_eq!(ids(&filter_agents(&AGENTS, "a006", None)), vec!["A006"]);
        assert!(filter_agents(&AGENTS, "nobody", None).is_empty());
    }

    #[test]
    fn status_filter_combines_with_search() {
        let idle = filter_agents(&AGENTS, "", Some(AgentStatus::Idle));
        assert_eq!(ids(&idle), vec!["A003", "A008"]);

        let idle_named = filter_agents(&AGENTS, "bharath", Some(AgentStatus::Idle));
        assert_eq!(ids(&idle_named), vec!["A003"]);

        assert!(filter_agents(&AGENTS, "priya", Some(AgentStatus::Offline)).is_empty());
        assert_eq!(count_with_status(&AGENTS, AgentStatus::Active), 2);
    }

    #[test]
    fn faq_search_drops_empty_categories() {
        let results = search_faqs(&FAQ_CATEGORIES, "OFFLINE");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "camera-monitoring");
        assert_eq!(results[0].questions.len(), 1);
    }

    #[test]
    fn faq_search_looks_at_answers() {
        let results = search_faqs(&FAQ_CATEGORIES, "10 mbps");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "troubleshooting");
    }

    #[test]
    fn blank_faq_search_returns_everything() {
        assert_eq!(search_faqs(&FAQ_CATEGORIES, ""), (*FAQ_CATEGORIES).clone());
        assert!(search_faqs(&FAQ_CATEGORIES, "zzzz").is_empty());
    }

    #[test]
    fn timeline_is_clipped_to_the_window() {
        assert_eq!(timeline_for("waiting-area", 7200.0).len(), 5);
        assert_eq!(timeline_for("waiting-area", 2100.0).len(), 3);
        assert!(timeline_for("parking-area", 7200.0).is_empty());
    }

    #[test]
    fn bars_scale_to_the_tallest() {
        let points: Vec<ChartPoint> = [("a", 20.0), ("b", 80.0), ("c", 40.0)]
            .iter()
            .map(|(label, value)| ChartPoint {
                label: label.to_string(),
                value: *value,
            })
            .collect();
        assert_eq!(bar_heights(&points), vec![25.0, 100.0, 50.0]);
    }

    #[test]
    fn flat_series_has_no_height() {
        let points = vec![ChartPoint {
            label: "x".into(),
            value: 0.0,
        }];
        assert_eq!(bar_heights(&points), vec![0.0]);
        assert!(bar_heights(&[]).is_empty());
    }
}
