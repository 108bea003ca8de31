use dioxus::prelude::*;

use crate::components::{view_label, AppView, Header, Icon, Sidebar};
use crate::settings::AppSettings;

/// The store every page reports on. Passed down explicitly instead of read
/// from ambient state.
#[derive(Clone, Copy, PartialEq)]
pub struct SelectedStore(pub Signal<String>);

#[derive(Clone, Copy, PartialEq)]
pub struct SidebarOpen(pub Signal<bool>);

#[component]
pub fn AppShell() -> Element {
    let app_settings = use_signal(AppSettings::load);
    let selected_store = use_signal(|| app_settings.peek().default_store.clone());
    let mut sidebar_open = use_signal(|| false);

    // Provide state via context
    use_context_provider(|| app_settings);
    use_context_provider(|| SelectedStore(selected_store));
    use_context_provider(|| SidebarOpen(sidebar_open));

    let view = use_route::<AppView>();

    rsx! {
        div { class: "app-container flex flex-col min-h-screen text-white",
            Header {}

            div { class: "flex flex-1 overflow-hidden",
                if sidebar_open() {
                    div {
                        class: "fixed inset-0 bg-black/60 backdrop-blur-sm z-30 lg:hidden",
                        onclick: move |_| sidebar_open.set(false),
                    }
                }

                Sidebar {}

                // Main scrollable content
                main { class: "flex-1 overflow-y-auto main-scroll",
                    div { class: "lg:hidden flex items-center gap-3 px-4 py-3 border-b border-zinc-800/60",
                        button {
                            class: "p-2 rounded-lg text-zinc-300 hover:text-white hover:bg-zinc-800/60 transition-colors",
                            aria_label: "Open menu",
                            onclick: move |_| sidebar_open.set(true),
                            Icon {
                                name: "menu".to_string(),
                                class: "w-5 h-5".to_string(),
                            }
                        }
                        span { class: "text-sm font-semibold text-white", "{view_label(&view)}" }
                    }
                    div { class: "page-shell", Outlet::<AppView> {} }
                }
            }
        }
    }
}
