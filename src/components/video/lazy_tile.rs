use dioxus::prelude::*;

use crate::components::Icon;
use crate::data::CameraFeed;
use crate::media::use_lazy_video;

/// Camera preview that only plays while scrolled into view.
#[component]
pub fn LazyVideoTile(
    camera: CameraFeed,
    #[props(default)] selected: bool,
    #[props(default)] onselect: Option<EventHandler<String>>,
) -> Element {
    let lazy = use_lazy_video(&camera.id);
    let ring = if selected {
        "ring-2 ring-sky-500"
    } else {
        "hover:border-zinc-600/60"
    };
    let camera_id = camera.id.clone();

    rsx! {
        div {
            class: "group bg-zinc-900/60 rounded-2xl border border-zinc-700/30 overflow-hidden cursor-pointer transition-all {ring}",
            onclick: move |_| {
                if let Some(handler) = onselect {
                    handler.call(camera_id.clone());
                }
            },
            div { class: "relative aspect-video bg-black",
                video {
                    class: "feed-video",
                    src: "{camera.video_url}",
                    muted: true,
                    r#loop: true,
                    playsinline: true,
                    preload: "none",
                    onmounted: {
                        let lazy = lazy.clone();
                        move |event| lazy.mount(event)
                    },
                }
                if lazy.is_visible() {
                    span { class: "absolute top-2 left-2 flex items-center gap-1.5 px-2 py-0.5 rounded-full bg-red-600/90 text-[10px] font-semibold uppercase tracking-wide",
                        span { class: "live-dot w-1.5 h-1.5 rounded-full bg-white" }
                        "Live"
                    }
                }
                span { class: "absolute top-2 right-2 px-2 py-0.5 rounded bg-black/60 text-[10px] text-zinc-300",
                    "{camera.resolution}"
                }
            }
            div { class: "p-3 flex items-center justify-between gap-2",
                div { class: "min-w-0",
                    p { class: "text-sm font-medium text-white truncate", "{camera.name}" }
                    p { class: "text-xs text-zinc-500", "{camera.zone} · {camera.alert}" }
                }
                div { class: "flex items-center gap-2 text-xs text-zinc-400",
                    Icon { name: "users".to_string(), class: "w-3.5 h-3.5".to_string() }
                    "{camera.active_count}"
                    span { class: "w-2 h-2 rounded-full {camera.status.dot_class()}" }
                }
            }
        }
    }
}
