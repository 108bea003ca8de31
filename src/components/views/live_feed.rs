use dioxus::prelude::*;

use crate::components::{Icon, KpiGrid, LiveFeedPlayer, SelectedStore};
use crate::data::{filter_agents, Agent, AGENTS, LIVE_CAMERAS, LIVE_FEED_KPIS};

#[component]
pub fn LiveFeedView() -> Element {
    let selected_store = use_context::<SelectedStore>().0;
    let mut active_camera = use_signal(|| {
        LIVE_CAMERAS
            .first()
            .map(|camera| camera.id.clone())
            .unwrap_or_default()
    });
    let mut search_query = use_signal(String::new);
    let mut selected_agent = use_signal(|| None::<String>);

    let camera = LIVE_CAMERAS
        .iter()
        .find(|camera| camera.id == active_camera())
        .or_else(|| LIVE_CAMERAS.first())
        .cloned();
    let agents: Vec<Agent> = filter_agents(&AGENTS, &search_query(), None)
        .into_iter()
        .cloned()
        .collect();
    let detail = selected_agent()
        .and_then(|id| AGENTS.iter().find(|agent| agent.id == id).cloned());

    rsx! {
        div { class: "space-y-8",
            header { class: "page-header",
                h1 { class: "page-title flex items-center gap-3",
                    span { class: "live-dot w-2.5 h-2.5 rounded-full bg-red-500" }
                    "Live Feed"
                }
                p { class: "page-subtitle", "{selected_store} · Monitoring in real time" }
            }

            KpiGrid { kpis: (*LIVE_FEED_KPIS).clone() }

            div { class: "grid grid-cols-1 xl:grid-cols-3 gap-6",
                section { class: "xl:col-span-2 space-y-4",
                    // Camera tabs
                    div { class: "flex gap-2 overflow-x-auto pb-1",
                        for cam in LIVE_CAMERAS.iter().cloned() {
                            button {
                                key: "{cam.id}",
                                class: if cam.id == active_camera() { "flex items-center gap-2 px-3 py-2 rounded-lg bg-sky-500/20 text-sky-300 text-sm whitespace-nowrap" } else { "flex items-center gap-2 px-3 py-2 rounded-lg bg-zinc-800/50 text-zinc-400 hover:text-white text-sm whitespace-nowrap" },
                                onclick: {
                                    let id = cam.id.clone();
                                    move |_| active_camera.set(id.clone())
                                },
                                span { class: "w-2 h-2 rounded-full {cam.status.dot_class()}" }
                                "{cam.name}"
                            }
                        }
                    }

                    // Keyed so switching cameras starts a fresh player
                    if let Some(camera) = camera {
                        for player_camera in std::iter::once(camera.clone()) {
                            LiveFeedPlayer { key: "{player_camera.id}", camera: player_camera }
                        }
                        div { class: "bg-orange-500/10 border border-orange-500/30 rounded-xl px-4 py-3 text-sm text-orange-200 flex items-center gap-2",
                            Icon { name: "alert".to_string(), class: "w-4 h-4".to_string() }
                            "{camera.alert}"
                        }
                    }
                }

                aside { class: "bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-5 space-y-4",
                    h2 { class: "text-lg font-semibold text-white flex items-center gap-2",
                        Icon { name: "users".to_string(), class: "w-5 h-5".to_string() }
                        "Agents on camera"
                    }
                    div { class: "relative",
                        Icon { name: "search".to_string(), class: "w-4 h-4 absolute left-3 top-1/2 -translate-y-1/2 text-zinc-500".to_string() }
                        input {
                            class: "w-full pl-9 pr-3 py-2 bg-zinc-900 border border-zinc-700/60 rounded-lg text-sm text-white placeholder-zinc-500 focus:outline-none focus:border-sky-500",
                            placeholder: "Search by name or ID",
                            value: "{search_query}",
                            oninput: move |evt| search_query.set(evt.value()),
                        }
                    }
                    if agents.is_empty() {
                        p { class: "text-sm text-zinc-500 text-center py-6", "No agents match your search" }
                    }
                    div { class: "space-y-2 max-h-96 overflow-y-auto",
                        for agent in agents {
                            button {
                                key: "{agent.id}",
                                class: "w-full flex items-center gap-3 p-3 rounded-xl bg-zinc-900/50 hover:bg-zinc-800/60 text-left transition-colors",
                                onclick: {
                                    let id = agent.id.clone();
                                    move |_| selected_agent.set(Some(id.clone()))
                                },
                                div { class: "w-9 h-9 rounded-full bg-zinc-700 flex items-center justify-center text-xs font-semibold",
                                    "{agent.initials()}"
                                }
                                div { class: "flex-1 min-w-0",
                                    p { class: "text-sm text-white truncate", "{agent.name}" }
                                    p { class: "text-xs text-zinc-500", "{agent.id} · {agent.location}" }
                                }
                                span { class: "text-xs {agent.status.text_class()}", "{agent.status.label()}" }
                            }
                        }
                    }
                    if let Some(agent) = detail {
                        div { class: "border-t border-zinc-700/40 pt-4 space-y-2 text-sm",
                            div { class: "flex items-center justify-between",
                                p { class: "font-semibold text-white", "{agent.name}" }
                                button {
                                    class: "p-1 rounded text-zinc-400 hover:text-white",
                                    aria_label: "Close",
                                    onclick: move |_| selected_agent.set(None),
                                    Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
                                }
                            }
                            p { class: "text-zinc-400", "Idle for {agent.idle_minutes} min · {agent.shift}" }
                            p { class: "text-zinc-400", "{agent.total_deliveries} deliveries · {agent.completion_rate}% completed" }
                        }
                    }
                }
            }
        }
    }
}
