use dioxus::prelude::*;

use crate::components::{Icon, SelectedStore};
use crate::data::RECENT_ALERTS;
use crate::settings::AppSettings;

#[component]
pub fn Header() -> Element {
    let app_settings = use_context::<Signal<AppSettings>>();
    let mut selected_store = use_context::<SelectedStore>().0;
    let stores = app_settings().stores;
    let alert_count = RECENT_ALERTS.len();

    rsx! {
        header { class: "h-16 border-b border-zinc-800/60 bg-zinc-950/80 backdrop-blur-xl flex items-center justify-between px-4 lg:px-6",
            // Logo
            div { class: "flex items-center gap-3",
                div { class: "w-9 h-9 rounded-xl bg-gradient-to-br from-sky-500 to-indigo-600 flex items-center justify-center text-white font-bold shadow-lg shadow-sky-500/20",
                    "R"
                }
                div {
                    h1 { class: "text-lg font-bold text-white leading-tight", "RiderTrack" }
                    p { class: "text-xs text-zinc-500 hidden sm:block", "Delivery agent monitoring" }
                }
            }

            div { class: "flex items-center gap-3",
                // Store selector
                select {
                    class: "bg-zinc-900 border border-zinc-700/60 rounded-lg px-3 py-1.5 text-sm text-white focus:outline-none focus:border-sky-500",
                    value: "{selected_store}",
                    onchange: move |evt| selected_store.set(evt.value()),
                    for store in stores {
                        option { value: "{store}", selected: store == selected_store(), "{store}" }
                    }
                }

                button {
                    class: "relative p-2 rounded-lg text-zinc-300 hover:text-white hover:bg-zinc-800/60 transition-colors",
                    aria_label: "Alerts",
                    Icon { name: "bell".to_string(), class: "w-5 h-5".to_string() }
                    if alert_count > 0 {
                        span { class: "absolute -top-0.5 -right-0.5 min-w-4 h-4 px-1 rounded-full bg-red-500 text-[10px] font-semibold flex items-center justify-center",
                            "{alert_count}"
                        }
                    }
                }
            }
        }
    }
}
