use dioxus::prelude::*;

use crate::components::{Icon, SelectedStore};
use crate::data::{count_with_status, filter_agents, Agent, AgentStatus, AGENTS};

#[derive(Clone, Copy, PartialEq)]
enum Layout {
    Grid,
    List,
}

#[component]
pub fn AgentsView() -> Element {
    let selected_store = use_context::<SelectedStore>().0;
    let mut search_query = use_signal(String::new);
    let mut status_filter = use_signal(|| None::<AgentStatus>);
    let mut layout = use_signal(|| Layout::Grid);
    let mut selected_agent = use_signal(|| None::<String>);

    let agents: Vec<Agent> = filter_agents(&AGENTS, &search_query(), status_filter())
        .into_iter()
        .cloned()
        .collect();
    let detail = selected_agent()
        .and_then(|id| AGENTS.iter().find(|agent| agent.id == id).cloned());
    let filter_key = status_filter().map(AgentStatus::key).unwrap_or("all");

    rsx! {
        div { class: "space-y-8",
            header { class: "page-header",
                h1 { class: "page-title", "Agents" }
                p { class: "page-subtitle", "{selected_store} · {AGENTS.len()} delivery agents" }
            }

            // Status summary
            div { class: "grid grid-cols-2 md:grid-cols-5 gap-3",
                for status in AgentStatus::ALL {
                    div { key: "{status.key()}", class: "bg-zinc-800/30 rounded-xl border border-zinc-700/30 p-4",
                        div { class: "flex items-center gap-2 text-sm text-zinc-400",
                            span { class: "w-2 h-2 rounded-full {status.dot_class()}" }
                            "{status.label()}"
                        }
                        div { class: "text-2xl font-bold text-white mt-1", "{count_with_status(&AGENTS, status)}" }
                    }
                }
            }

            // Toolbar
            div { class: "flex flex-wrap items-center gap-3",
                div { class: "relative flex-1 min-w-56",
                    Icon { name: "search".to_string(), class: "w-4 h-4 absolute left-3 top-1/2 -translate-y-1/2 text-zinc-500".to_string() }
                    input {
                        class: "w-full pl-9 pr-3 py-2 bg-zinc-900 border border-zinc-700/60 rounded-lg text-sm text-white placeholder-zinc-500 focus:outline-none focus:border-sky-500",
                        placeholder: "Search agents by name or ID",
                        value: "{search_query}",
                        oninput: move |evt| search_query.set(evt.value()),
                    }
                }
                select {
                    class: "bg-zinc-900 border border-zinc-700/60 rounded-lg px-3 py-2 text-sm text-white",
                    value: "{filter_key}",
                    onchange: move |evt| status_filter.set(AgentStatus::from_key(&evt.value())),
                    option { value: "all", selected: filter_key == "all", "All Status" }
                    for status in AgentStatus::ALL {
                        option { value: status.key(), selected: filter_key == status.key(), "{status.label()}" }
                    }
                }
                div { class: "flex items-center gap-1 bg-zinc-900 rounded-lg p-1",
                    button {
                        class: if layout() == Layout::Grid { "p-1.5 rounded bg-zinc-700 text-white" } else { "p-1.5 rounded text-zinc-400 hover:text-white" },
                        aria_label: "Grid view",
                        onclick: move |_| layout.set(Layout::Grid),
                        Icon { name: "grid".to_string(), class: "w-4 h-4".to_string() }
                    }
                    button {
                        class: if layout() == Layout::List { "p-1.5 rounded bg-zinc-700 text-white" } else { "p-1.5 rounded text-zinc-400 hover:text-white" },
                        aria_label: "List view",
                        onclick: move |_| layout.set(Layout::List),
                        Icon { name: "list".to_string(), class: "w-4 h-4".to_string() }
                    }
                }
            }

            if agents.is_empty() {
                div { class: "bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-12 text-center text-zinc-500",
                    "No agents match the current filters"
                }
            } else if layout() == Layout::Grid {
                div { class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4",
                    for agent in agents {
                        AgentCard {
                            key: "{agent.id}",
                            agent,
                            onselect: move |id| selected_agent.set(Some(id)),
                        }
                    }
                }
            } else {
                div { class: "bg-zinc-800/30 rounded-2xl border border-zinc-700/30 divide-y divide-zinc-700/30",
                    for agent in agents {
                        AgentRow {
                            key: "{agent.id}",
                            agent,
                            onselect: move |id| selected_agent.set(Some(id)),
                        }
                    }
                }
            }

            if let Some(agent) = detail {
                AgentDetail { agent, onclose: move |_| selected_agent.set(None) }
            }
        }
    }
}

#[component]
fn AgentCard(agent: Agent, onselect: EventHandler<String>) -> Element {
    let id = agent.id.clone();

    rsx! {
        button {
            class: "bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-5 text-left hover:border-zinc-600/60 transition-colors space-y-4",
            onclick: move |_| onselect.call(id.clone()),
            div { class: "flex items-center gap-3",
                div { class: "w-11 h-11 rounded-full bg-zinc-700 flex items-center justify-center font-semibold",
                    "{agent.initials()}"
                }
                div { class: "flex-1 min-w-0",
                    p { class: "text-white font-medium truncate", "{agent.name}" }
                    p { class: "text-xs text-zinc-500", "{agent.id} · {agent.location}" }
                }
                span { class: "flex items-center gap-1.5 text-xs {agent.status.text_class()}",
                    span { class: "w-2 h-2 rounded-full {agent.status.dot_class()}" }
                    "{agent.status.label()}"
                }
            }
            div { class: "grid grid-cols-3 gap-2 text-center",
                div {
                    p { class: "text-lg font-semibold text-white", "{agent.rating}" }
                    p { class: "text-[11px] text-zinc-500", "Rating" }
                }
                div {
                    p { class: "text-lg font-semibold text-white", "{agent.total_deliveries}" }
                    p { class: "text-[11px] text-zinc-500", "Deliveries" }
                }
                div {
                    p { class: "text-lg font-semibold text-white", "{agent.avg_delivery_minutes}m" }
                    p { class: "text-[11px] text-zinc-500", "Avg time" }
                }
            }
        }
    }
}

#[component]
fn AgentRow(agent: Agent, onselect: EventHandler<String>) -> Element {
    let id = agent.id.clone();

    rsx! {
        button {
            class: "w-full flex items-center gap-4 px-5 py-3 text-left hover:bg-zinc-800/40 transition-colors",
            onclick: move |_| onselect.call(id.clone()),
            div { class: "w-9 h-9 rounded-full bg-zinc-700 flex items-center justify-center text-xs font-semibold",
                "{agent.initials()}"
            }
            div { class: "flex-1 min-w-0",
                p { class: "text-sm text-white truncate", "{agent.name}" }
                p { class: "text-xs text-zinc-500", "{agent.id}" }
            }
            span { class: "hidden md:block text-sm text-zinc-400 w-32", "{agent.location}" }
            span { class: "hidden md:block text-sm text-zinc-400 w-20", "{agent.completion_rate}%" }
            span { class: "text-xs w-24 {agent.status.text_class()}", "{agent.status.label()}" }
        }
    }
}

#[component]
fn AgentDetail(agent: Agent, onclose: EventHandler<()>) -> Element {
    let joined = agent.join_date.format("%b %d, %Y").to_string();

    rsx! {
        div {
            class: "fixed inset-0 z-50 bg-black/60 backdrop-blur-sm flex items-center justify-center p-4",
            onclick: move |_| onclose.call(()),
            div {
                class: "w-full max-w-lg bg-zinc-900 rounded-2xl border border-zinc-700/50 p-6 space-y-5",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "flex items-start justify-between",
                    div { class: "flex items-center gap-3",
                        div { class: "w-12 h-12 rounded-full bg-zinc-700 flex items-center justify-center font-semibold",
                            "{agent.initials()}"
                        }
                        div {
                            h2 { class: "text-lg font-semibold text-white", "{agent.name}" }
                            p { class: "text-sm {agent.status.text_class()}", "{agent.status.label()}" }
                        }
                    }
                    button {
                        class: "p-1 rounded text-zinc-400 hover:text-white",
                        aria_label: "Close",
                        onclick: move |_| onclose.call(()),
                        Icon { name: "x".to_string(), class: "w-5 h-5".to_string() }
                    }
                }

                div { class: "grid grid-cols-2 gap-3 text-sm",
                    DetailField { icon: "phone", label: "Phone", value: agent.phone.clone() }
                    DetailField { icon: "mail", label: "Email", value: agent.email.clone() }
                    DetailField { icon: "calendar", label: "Joined", value: joined }
                    DetailField { icon: "clock", label: "Shift", value: agent.shift.clone() }
                    DetailField { icon: "star", label: "Rating", value: format!("{:.1}", agent.rating) }
                    DetailField { icon: "check", label: "Completion", value: format!("{}%", agent.completion_rate) }
                    DetailField { icon: "activity", label: "Idle today", value: format!("{} min", agent.idle_minutes) }
                    DetailField { icon: "trending", label: "Earnings", value: format!("₹{}", agent.earnings) }
                }

                if agent.warnings > 0 {
                    p { class: "text-sm text-orange-300 flex items-center gap-2",
                        Icon { name: "alert".to_string(), class: "w-4 h-4".to_string() }
                        "{agent.warnings} warning(s) on record"
                    }
                }

                if !agent.badges.is_empty() {
                    div { class: "flex flex-wrap gap-2",
                        for badge in agent.badges.iter() {
                            span { key: "{badge}", class: "px-2 py-0.5 rounded-full bg-sky-500/15 text-sky-300 text-xs",
                                "{badge}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DetailField(icon: String, label: String, value: String) -> Element {
    rsx! {
        div { class: "bg-zinc-800/50 rounded-lg p-3",
            p { class: "text-[11px] text-zinc-500 flex items-center gap-1.5",
                Icon { name: icon.clone(), class: "w-3.5 h-3.5".to_string() }
                "{label}"
            }
            p { class: "text-white truncate", "{value}" }
        }
    }
}
