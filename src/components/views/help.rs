use std::collections::HashSet;

use dioxus::prelude::*;
use tracing::info;

use crate::components::Icon;
use crate::data::{search_faqs, FaqCategory, FAQ_CATEGORIES, SUPPORT_CHANNELS};

const TICKET_CATEGORIES: [(&str, &str); 5] = [
    ("technical", "Technical Issue"),
    ("account", "Account & Access"),
    ("feature", "Feature Request"),
    ("training", "Training & Documentation"),
    ("bug", "Bug Report"),
];

fn channel_icon(title: &str) -> &'static str {
    if title.contains("Email") {
        "mail"
    } else if title.contains("Chat") {
        "chat"
    } else {
        "phone"
    }
}

#[component]
pub fn HelpView() -> Element {
    let mut search_query = use_signal(String::new);
    let results = search_faqs(&FAQ_CATEGORIES, &search_query());
    let searching = !search_query().trim().is_empty();

    rsx! {
        div { class: "space-y-8",
            header { class: "page-header",
                h1 { class: "page-title", "Help & Support" }
                p { class: "page-subtitle", "Answers to common questions and ways to reach us" }
            }

            div { class: "relative max-w-xl",
                Icon { name: "search".to_string(), class: "w-4 h-4 absolute left-3 top-1/2 -translate-y-1/2 text-zinc-500".to_string() }
                input {
                    class: "w-full pl-9 pr-3 py-2.5 bg-zinc-900 border border-zinc-700/60 rounded-xl text-sm text-white placeholder-zinc-500 focus:outline-none focus:border-sky-500",
                    placeholder: "Search help articles",
                    value: "{search_query}",
                    oninput: move |evt| search_query.set(evt.value()),
                }
            }

            div { class: "grid grid-cols-1 xl:grid-cols-3 gap-6",
                section { class: "xl:col-span-2 space-y-4",
                    if results.is_empty() {
                        div { class: "bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-10 text-center text-zinc-500",
                            "No articles match \"{search_query}\""
                        }
                    }
                    for category in results {
                        FaqSection { key: "{category.id}", category, expanded: searching }
                    }
                }

                aside { class: "space-y-6",
                    section { class: "bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-5 space-y-3",
                        h2 { class: "text-lg font-semibold text-white", "Contact support" }
                        for channel in SUPPORT_CHANNELS.iter() {
                            div { key: "{channel.title}", class: "bg-zinc-900/50 rounded-xl p-4 flex gap-3",
                                div { class: "p-2 h-fit rounded-lg bg-sky-500/10 text-sky-400",
                                    Icon { name: channel_icon(&channel.title).to_string(), class: "w-4 h-4".to_string() }
                                }
                                div { class: "min-w-0",
                                    p { class: "text-sm font-medium text-white", "{channel.title}" }
                                    p { class: "text-xs text-zinc-500", "{channel.description}" }
                                    p { class: "text-xs text-sky-300 mt-1 break-all", "{channel.contact}" }
                                    p { class: "text-[11px] text-zinc-500", "{channel.availability}" }
                                }
                            }
                        }
                    }
                    TicketForm {}
                }
            }
        }
    }
}

fn chevron_class(open: bool) -> String {
    if open {
        "w-4 h-4 rotate-180 transition-transform".to_string()
    } else {
        "w-4 h-4 transition-transform".to_string()
    }
}

#[component]
fn FaqSection(category: FaqCategory, expanded: bool) -> Element {
    let mut open = use_signal(HashSet::<usize>::new);

    rsx! {
        section { class: "bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-5",
            h2 { class: "text-base font-semibold text-white mb-3 flex items-center gap-2",
                Icon { name: category.icon.clone(), class: "w-5 h-5 text-sky-400".to_string() }
                "{category.title}"
            }
            div { class: "divide-y divide-zinc-700/30",
                for (index, faq) in category.questions.iter().enumerate() {
                    div { key: "{index}", class: "py-3",
                        button {
                            class: "w-full flex items-center justify-between gap-3 text-left text-sm text-zinc-200 hover:text-white",
                            onclick: move |_| {
                                let mut set = open.write();
                                if !set.remove(&index) {
                                    set.insert(index);
                                }
                            },
                            span { "{faq.question}" }
                            Icon {
                                name: "chevron-down".to_string(),
                                class: chevron_class(expanded || open().contains(&index)),
                            }
                        }
                        if expanded || open().contains(&index) {
                            p { class: "mt-2 text-sm text-zinc-400 leading-relaxed", "{faq.answer}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TicketForm() -> Element {
    let mut category = use_signal(|| TICKET_CATEGORIES[0].0.to_string());
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut submitted = use_signal(|| false);

    let ready = !subject().trim().is_empty() && !message().trim().is_empty();

    rsx! {
        section { class: "bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-5 space-y-3",
            h2 { class: "text-lg font-semibold text-white", "Submit a ticket" }
            select {
                class: "w-full bg-zinc-900 border border-zinc-700/60 rounded-lg px-3 py-2 text-sm text-white",
                value: "{category}",
                onchange: move |evt| category.set(evt.value()),
                for (key, label) in TICKET_CATEGORIES {
                    option { value: key, selected: category() == key, "{label}" }
                }
            }
            input {
                class: "w-full bg-zinc-900 border border-zinc-700/60 rounded-lg px-3 py-2 text-sm text-white placeholder-zinc-500",
                placeholder: "Subject",
                value: "{subject}",
                oninput: move |evt| {
                    subject.set(evt.value());
                    submitted.set(false);
                },
            }
            textarea {
                class: "w-full h-28 bg-zinc-900 border border-zinc-700/60 rounded-lg px-3 py-2 text-sm text-white placeholder-zinc-500",
                placeholder: "Describe the issue",
                value: "{message}",
                oninput: move |evt| message.set(evt.value()),
            }
            button {
                class: "w-full px-4 py-2 rounded-lg bg-sky-500 text-white text-sm hover:bg-sky-400 disabled:opacity-50 disabled:cursor-not-allowed",
                disabled: !ready,
                onclick: move |_| {
                    info!(category = %category.peek().as_str(), subject = %subject.peek().as_str(), "support ticket submitted");
                    subject.set(String::new());
                    message.set(String::new());
                    submitted.set(true);
                },
                "Submit ticket"
            }
            if submitted() {
                p { class: "text-sm text-green-400 flex items-center gap-2",
                    Icon { name: "check".to_string(), class: "w-4 h-4".to_string() }
                    "Ticket received. We'll get back to you shortly."
                }
            }
        }
    }
}
