use dioxus::prelude::*;

use crate::components::{AppView, Icon, SidebarOpen};
use crate::data::{count_with_status, AgentStatus, AGENTS, RECENT_ALERTS};

#[component]
pub fn Sidebar() -> Element {
    let view = use_route::<AppView>();
    let mut sidebar_open = use_context::<SidebarOpen>().0;
    let navigator = use_navigator();

    let idle_agents = count_with_status(&AGENTS, AgentStatus::Idle);
    let alert_count = RECENT_ALERTS.len();

    let mut go = move |target: AppView| {
        navigator.push(target);
        sidebar_open.set(false);
    };

    let drawer_class = if sidebar_open() {
        "translate-x-0"
    } else {
        "-translate-x-full lg:translate-x-0"
    };

    rsx! {
        aside { class: "fixed lg:static inset-y-0 left-0 z-40 w-64 bg-zinc-950/90 border-r border-zinc-800/50 flex flex-col backdrop-blur-xl transition-transform {drawer_class}",
            // Navigation
            nav { class: "flex-1 overflow-y-auto p-4 space-y-1",
                div { class: "mb-6",
                    p { class: "text-xs font-semibold text-zinc-500 uppercase tracking-wider mb-3 px-3",
                        "Monitor"
                    }
                    NavItem {
                        icon: "dashboard",
                        label: "Dashboard",
                        active: matches!(view, AppView::DashboardView {}),
                        onclick: move |_| go(AppView::DashboardView {}),
                    }
                    NavItem {
                        icon: "video",
                        label: "Live Feed",
                        active: matches!(view, AppView::LiveFeedView {}),
                        onclick: move |_| go(AppView::LiveFeedView {}),
                    }
                    NavItem {
                        icon: "history",
                        label: "Past Feed",
                        active: matches!(view, AppView::PastFeedView {}),
                        onclick: move |_| go(AppView::PastFeedView {}),
                    }
                }

                div { class: "mb-6",
                    p { class: "text-xs font-semibold text-zinc-500 uppercase tracking-wider mb-3 px-3",
                        "Operations"
                    }
                    NavItem {
                        icon: "users",
                        label: "Agents",
                        badge: idle_agents,
                        active: matches!(view, AppView::AgentsView {}),
                        onclick: move |_| go(AppView::AgentsView {}),
                    }
                    NavItem {
                        icon: "chart",
                        label: "Reports",
                        active: matches!(view, AppView::ReportsView {}),
                        onclick: move |_| go(AppView::ReportsView {}),
                    }
                }
            }

            div { class: "p-4 border-t border-zinc-800/50 space-y-3",
                div { class: "flex items-center gap-2 px-3 text-xs text-zinc-500",
                    Icon { name: "alert".to_string(), class: "w-4 h-4 text-red-400".to_string() }
                    "{alert_count} open alerts"
                }
                NavItem {
                    icon: "help",
                    label: "Help & Support",
                    active: matches!(view, AppView::HelpView {}),
                    onclick: move |_| go(AppView::HelpView {}),
                }
            }
        }
    }
}

#[component]
fn NavItem(
    icon: String,
    label: String,
    active: bool,
    #[props(default)] badge: usize,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let base_class = "flex items-center gap-3 px-3 py-2.5 rounded-xl text-sm font-medium transition-all duration-200 cursor-pointer";
    let active_class = if active {
        "bg-gradient-to-r from-sky-500/20 to-indigo-500/10 text-sky-400 shadow-sm"
    } else {
        "text-zinc-400 hover:text-white hover:bg-zinc-800/50"
    };

    rsx! {
        button {
            class: "{base_class} {active_class} w-full",
            onclick: move |e| onclick.call(e),
            Icon { name: icon.clone(), class: "w-5 h-5".to_string() }
            span { class: "flex-1 text-left", "{label}" }
            if badge > 0 {
                span { class: "px-2 py-0.5 rounded-full bg-orange-500/20 text-orange-300 text-xs",
                    "{badge}"
                }
            }
        }
    }
}
