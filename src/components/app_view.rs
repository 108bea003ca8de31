//! Routes for the dashboard pages.

use dioxus::prelude::*;

use crate::components::views::{
    AgentsView, DashboardView, HelpView, LiveFeedView, PastFeedView, ReportsView,
};
use crate::components::AppShell;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/")]
        DashboardView {},
        #[route("/live")]
        LiveFeedView {},
        #[route("/past")]
        PastFeedView {},
        #[route("/agents")]
        AgentsView {},
        #[route("/reports")]
        ReportsView {},
        #[route("/help")]
        HelpView {},
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::DashboardView {} => "Dashboard",
        AppView::LiveFeedView {} => "Live Feed",
        AppView::PastFeedView {} => "Past Feed",
        AppView::AgentsView {} => "Agents",
        AppView::ReportsView {} => "Reports",
        AppView::HelpView {} => "Help & Support",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_round_trip_through_paths() {
        for (path, label) in [
            ("/", "Dashboard"),
            ("/live", "Live Feed"),
            ("/past", "Past Feed"),
            ("/agents", "Agents"),
            ("/reports", "Reports"),
            ("/help", "Help & Support"),
        ] {
            let view: AppView = path.parse().unwrap();
            assert_eq!(view_label(&view), label);
            assert_eq!(view.to_string(), path);
        }
    }
}
