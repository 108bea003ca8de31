use dioxus::prelude::*;

mod components;
mod data;
mod error;
mod media;
mod settings;

use components::AppView;

const FAVICON: Asset = asset!("/assets/favicon.ico");
const APP_CSS: Asset = asset!("/assets/styling/app.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Meta { name: "theme-color", content: "#0f172a" }
        document::Meta { name: "apple-mobile-web-app-title", content: "RiderTrack" }
        document::Stylesheet { href: TAILWIND_CSS }
        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
