use dioxus::prelude::*;

use crate::components::{AppView, Icon, KpiGrid, LazyVideoTile, SelectedStore};
use crate::data::{Alert, DASHBOARD_KPIS, PREVIEW_CAMERAS, RECENT_ALERTS};

#[component]
pub fn DashboardView() -> Element {
    let selected_store = use_context::<SelectedStore>().0;
    let navigator = use_navigator();

    rsx! {
        div { class: "space-y-8",
            header { class: "page-header flex flex-wrap items-end justify-between gap-4",
                div {
                    h1 { class: "page-title", "Dashboard" }
                    p { class: "page-subtitle", "{selected_store} · Real-time operations monitor" }
                }
                div { class: "flex items-center gap-2",
                    button {
                        class: "px-3 py-2 rounded-lg border border-zinc-700/60 text-sm text-zinc-300 hover:text-white hover:bg-zinc-800/60 flex items-center gap-2",
                        onclick: move |_| {
                            navigator.push(AppView::LiveFeedView {});
                        },
                        Icon { name: "camera".to_string(), class: "w-4 h-4".to_string() }
                        "View all cameras"
                    }
                    button {
                        class: "px-3 py-2 rounded-lg border border-zinc-700/60 text-sm text-zinc-300 hover:text-white hover:bg-zinc-800/60 flex items-center gap-2",
                        onclick: move |_| {
                            navigator.push(AppView::ReportsView {});
                        },
                        Icon { name: "chart".to_string(), class: "w-4 h-4".to_string() }
                        "Full reports"
                    }
                }
            }

            KpiGrid { kpis: (*DASHBOARD_KPIS).clone() }

            div { class: "grid grid-cols-1 xl:grid-cols-3 gap-6",
                // Camera previews only play while on screen
                section { class: "xl:col-span-2 bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-6",
                    h2 { class: "text-lg font-semibold text-white mb-4 flex items-center gap-2",
                        Icon { name: "camera".to_string(), class: "w-5 h-5".to_string() }
                        "Camera overview"
                    }
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        for camera in PREVIEW_CAMERAS.iter().cloned() {
                            LazyVideoTile { key: "{camera.id}", camera }
                        }
                    }
                }

                section { class: "bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-6",
                    h2 { class: "text-lg font-semibold text-white mb-4 flex items-center gap-2",
                        Icon { name: "alert".to_string(), class: "w-5 h-5 text-red-400".to_string() }
                        "Recent alerts"
                    }
                    div { class: "space-y-3",
                        for alert in RECENT_ALERTS.iter().cloned() {
                            AlertRow { key: "{alert.id}", alert }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AlertRow(alert: Alert) -> Element {
    rsx! {
        div { class: "bg-zinc-900/50 rounded-xl p-4 space-y-2",
            div { class: "flex items-start justify-between gap-3",
                p { class: "text-sm text-white", "{alert.message}" }
                span { class: "px-2 py-0.5 rounded-full text-[11px] uppercase {alert.severity.badge_class()}",
                    "{alert.severity:?}"
                }
            }
            div { class: "flex items-center gap-3 text-xs text-zinc-500",
                span { class: "flex items-center gap-1",
                    Icon { name: "camera".to_string(), class: "w-3.5 h-3.5".to_string() }
                    "{alert.camera}"
                }
                span { class: "flex items-center gap-1",
                    Icon { name: "clock".to_string(), class: "w-3.5 h-3.5".to_string() }
                    "{alert.minutes_ago} min ago"
                }
            }
        }
    }
}
