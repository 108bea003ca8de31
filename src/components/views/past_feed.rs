use chrono::{Duration, Local, NaiveDate, NaiveTime};
use dioxus::prelude::*;
use tracing::info;

use crate::components::{Icon, RecordedFeedPlayer, SelectedStore};
use crate::data::{timeline_for, RECORDED_CAMERAS};
use crate::media::format_clock;
use crate::settings::AppSettings;

const TIME_FORMAT: &str = "%H:%M";

fn default_start() -> NaiveTime {
    NaiveTime::from_hms_opt(14, 30, 0).unwrap_or(NaiveTime::MIN)
}

/// End of the default range: `window` seconds after the start, or the start
/// itself when the window cannot be represented.
fn default_end(window: f64) -> NaiveTime {
    if !window.is_finite() || window <= 0.0 {
        return default_start();
    }
    Duration::try_seconds(window as i64)
        .map(|span| default_start() + span)
        .unwrap_or_else(default_start)
}

/// Length of the selected range in seconds, or `None` when it is empty or
/// runs backwards.
fn clip_seconds(start: NaiveTime, end: NaiveTime) -> Option<f64> {
    let seconds = (end - start).num_seconds();
    (seconds > 0).then_some(seconds as f64)
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).ok()
}

#[component]
pub fn PastFeedView() -> Element {
    let selected_store = use_context::<SelectedStore>().0;
    let app_settings = use_context::<Signal<AppSettings>>();
    let window = app_settings.peek().recording_window_seconds;

    let mut active_camera = use_signal(|| {
        RECORDED_CAMERAS
            .first()
            .map(|camera| camera.id.clone())
            .unwrap_or_default()
    });
    let mut date = use_signal(|| Local::now().date_naive());
    let mut start = use_signal(default_start);
    let mut end = use_signal(move || default_end(window));

    let today = Local::now().date_naive();
    let clip = clip_seconds(start(), end());
    let camera = RECORDED_CAMERAS
        .iter()
        .find(|camera| camera.id == active_camera())
        .or_else(|| RECORDED_CAMERAS.first())
        .cloned();

    let range_label = format!(
        "{} | {} - {}",
        date().format("%b %d, %Y"),
        start().format(TIME_FORMAT),
        end().format(TIME_FORMAT)
    );

    rsx! {
        div { class: "space-y-8",
            header { class: "page-header",
                h1 { class: "page-title", "Past Feed" }
                p { class: "page-subtitle", "{selected_store} · Review recorded footage" }
            }

            div { class: "grid grid-cols-1 xl:grid-cols-4 gap-6",
                // Selection panel
                aside { class: "bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-5 space-y-5",
                    div { class: "space-y-2",
                        label { class: "text-xs font-semibold text-zinc-500 uppercase tracking-wider", "Camera" }
                        div { class: "space-y-1",
                            for cam in RECORDED_CAMERAS.iter().cloned() {
                                button {
                                    key: "{cam.id}",
                                    class: if cam.id == active_camera() { "w-full flex items-center gap-2 px-3 py-2 rounded-lg bg-sky-500/20 text-sky-300 text-sm" } else { "w-full flex items-center gap-2 px-3 py-2 rounded-lg text-zinc-400 hover:text-white hover:bg-zinc-800/50 text-sm" },
                                    onclick: {
                                        let id = cam.id.clone();
                                        move |_| active_camera.set(id.clone())
                                    },
                                    span { class: "w-2 h-2 rounded-full {cam.status.dot_class()}" }
                                    span { class: "flex-1 text-left", "{cam.name}" }
                                    span { class: "text-xs text-zinc-500", "{cam.zone}" }
                                }
                            }
                        }
                    }

                    div { class: "space-y-2",
                        label { class: "text-xs font-semibold text-zinc-500 uppercase tracking-wider flex items-center gap-2",
                            Icon { name: "calendar".to_string(), class: "w-3.5 h-3.5".to_string() }
                            "Date"
                        }
                        input {
                            r#type: "date",
                            class: "w-full bg-zinc-900 border border-zinc-700/60 rounded-lg px-3 py-2 text-sm text-white",
                            max: "{today}",
                            value: "{date}",
                            onchange: move |evt| {
                                if let Ok(picked) = NaiveDate::parse_from_str(&evt.value(), "%Y-%m-%d") {
                                    date.set(picked.min(today));
                                }
                            },
                        }
                    }

                    div { class: "grid grid-cols-2 gap-3",
                        div { class: "space-y-2",
                            label { class: "text-xs font-semibold text-zinc-500 uppercase tracking-wider", "From" }
                            input {
                                r#type: "time",
                                class: "w-full bg-zinc-900 border border-zinc-700/60 rounded-lg px-2 py-2 text-sm text-white",
                                value: "{start().format(TIME_FORMAT)}",
                                onchange: move |evt| {
                                    if let Some(time) = parse_time(&evt.value()) {
                                        start.set(time);
                                    }
                                },
                            }
                        }
                        div { class: "space-y-2",
                            label { class: "text-xs font-semibold text-zinc-500 uppercase tracking-wider", "To" }
                            input {
                                r#type: "time",
                                class: "w-full bg-zinc-900 border border-zinc-700/60 rounded-lg px-2 py-2 text-sm text-white",
                                value: "{end().format(TIME_FORMAT)}",
                                onchange: move |evt| {
                                    if let Some(time) = parse_time(&evt.value()) {
                                        end.set(time);
                                    }
                                },
                            }
                        }
                    }

                    {
                        match clip {
                            Some(seconds) => rsx! {
                                p { class: "text-xs text-zinc-400 flex items-center gap-2",
                                    Icon { name: "clock".to_string(), class: "w-3.5 h-3.5".to_string() }
                                    "Clip length {format_clock(seconds)}"
                                }
                            },
                            None => rsx! {
                                p { class: "text-xs text-red-400", "End time must be after start time" }
                            },
                        }
                    }

                    button {
                        class: "w-full px-3 py-2 rounded-lg bg-zinc-800 text-sm text-zinc-200 hover:bg-zinc-700 flex items-center justify-center gap-2 disabled:opacity-50",
                        disabled: clip.is_none(),
                        onclick: {
                            let range_label = range_label.clone();
                            move |_| info!(camera = %active_camera.peek().as_str(), range = %range_label, "clip download requested")
                        },
                        Icon { name: "download".to_string(), class: "w-4 h-4".to_string() }
                        "Download clip"
                    }
                }

                section { class: "xl:col-span-3 space-y-4",
                    if let (Some(camera), Some(seconds)) = (camera, clip) {
                        div { class: "flex items-center justify-between",
                            h2 { class: "text-lg font-semibold text-white", "{camera.name}" }
                            span { class: "text-sm text-zinc-400", "{range_label}" }
                        }
                        // Keyed so a new camera or range starts from the beginning
                        for player_camera in std::iter::once(camera.clone()) {
                            RecordedFeedPlayer {
                                key: "{player_camera.id}-{date}-{start}-{end}",
                                timeline: timeline_for(&player_camera.id, seconds),
                                window: seconds,
                                camera: player_camera,
                            }
                        }
                    } else {
                        div { class: "bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-12 text-center text-zinc-500",
                            "Pick a camera and a valid time range to review footage"
                        }
                    }
                }
            }
        }
    }
}
