use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::components::Icon;
use crate::data::{CameraFeed, RecordedCamera, TimelineEvent};
use crate::media::{format_clock, spawn_ticker, PlaybackState, Transport, WebVideo, PLAYBACK_SPEEDS};
use crate::settings::AppSettings;

/// Pushes play/pause and mute onto the bound element. A rejected play flips
/// the transport back to paused so the button reflects reality.
fn push_playback(mut transport: Signal<Transport>, element: Option<WebVideo>) {
    let Some(video) = element else {
        return;
    };
    let applied = transport.peek().apply_playback(&video);
    match applied {
        Ok(Some(request)) => {
            spawn(async move {
                if let Err(err) = request.await {
                    warn!(error = %err, "feed play rejected");
                    transport.write().set_playing(false);
                }
            });
        }
        Ok(None) => {}
        Err(err) => debug!(error = %err, "feed playback not applied"),
    }
}

fn push_position(transport: Signal<Transport>, element: Option<WebVideo>) {
    if let Some(video) = element {
        if let Err(err) = transport.peek().apply_position(&video) {
            debug!(error = %err, "feed position not applied");
        }
    }
}

fn control_button_class(active: bool) -> &'static str {
    if active {
        "p-2 rounded-lg bg-sky-500/20 text-sky-300 transition-colors"
    } else {
        "p-2 rounded-lg text-zinc-300 hover:text-white hover:bg-zinc-800/60 transition-colors"
    }
}

#[component]
pub fn LiveFeedPlayer(camera: CameraFeed) -> Element {
    let app_settings = use_context::<Signal<AppSettings>>();
    let mut transport = use_signal(|| Transport::live(app_settings.peek().live_feed_muted));
    let mut element = use_signal(|| None::<WebVideo>);

    let playing = transport().is_playing();
    let muted = transport().is_muted();
    let play_icon = if playing { "pause" } else { "play" };
    let mute_icon = if muted { "volume-x" } else { "volume" };

    rsx! {
        div { class: "bg-zinc-900/60 rounded-2xl border border-zinc-700/30 overflow-hidden",
            div { class: "relative aspect-video bg-black",
                video {
                    class: "feed-video",
                    src: "{camera.video_url}",
                    muted: muted,
                    autoplay: true,
                    r#loop: true,
                    playsinline: true,
                    onmounted: move |event| {
                        let video = WebVideo::from_mounted(&event.data());
                        element.set(video.clone());
                        push_playback(transport, video);
                    },
                    onplay: move |_| transport.write().set_playing(true),
                    onpause: move |_| transport.write().set_playing(false),
                }
                span { class: "absolute top-3 left-3 flex items-center gap-1.5 px-2.5 py-1 rounded-full bg-red-600/90 text-xs font-semibold uppercase",
                    span { class: "live-dot w-2 h-2 rounded-full bg-white" }
                    "Live"
                }
            }
            div { class: "flex items-center justify-between gap-3 px-4 py-3",
                div { class: "min-w-0",
                    p { class: "text-sm font-semibold text-white truncate", "{camera.name}" }
                    p { class: "text-xs text-zinc-500", "{camera.zone} · {camera.resolution}" }
                }
                div { class: "flex items-center gap-1",
                    button {
                        class: control_button_class(false),
                        aria_label: if playing { "Pause" } else { "Play" },
                        onclick: move |_| {
                            transport.write().toggle_play();
                            push_playback(transport, element());
                        },
                        Icon { name: play_icon.to_string(), class: "w-5 h-5".to_string() }
                    }
                    button {
                        class: control_button_class(muted),
                        aria_label: if muted { "Unmute" } else { "Mute" },
                        onclick: move |_| {
                            transport.write().toggle_mute();
                            push_playback(transport, element());
                        },
                        Icon { name: mute_icon.to_string(), class: "w-5 h-5".to_string() }
                    }
                }
            }
        }
    }
}

#[component]
pub fn RecordedFeedPlayer(
    camera: RecordedCamera,
    timeline: Vec<TimelineEvent>,
    window: f64,
) -> Element {
    let app_settings = use_context::<Signal<AppSettings>>();
    let skip_seconds = app_settings.peek().skip_seconds;
    let mut transport = use_signal(|| Transport::recorded(window));
    let mut element = use_signal(|| None::<WebVideo>);

    use_hook(move || {
        spawn_ticker(1000, move || {
            if transport.peek().is_playing() {
                transport.write().tick(1.0);
            }
        })
    });

    let snapshot = transport();
    let playing = snapshot.is_playing();
    let position = snapshot.position();
    let duration = snapshot.duration();
    let progress = snapshot.progress() * 100.0;
    let speed = snapshot.speed();
    let ended = snapshot.state() == PlaybackState::Ended;
    let play_icon = if playing { "pause" } else { "play" };
    let markers: Vec<(f64, String)> = timeline
        .iter()
        .map(|event| (event.at, format!("{} {}", format_clock(event.at), event.description)))
        .collect();

    let mut seek_to = move |seconds: f64| {
        transport.write().seek(seconds);
        push_position(transport, element());
    };

    rsx! {
        div { class: "bg-zinc-900/60 rounded-2xl border border-zinc-700/30 overflow-hidden",
            div { class: "relative aspect-video bg-black",
                video {
                    class: "feed-video",
                    src: "{camera.video_url}",
                    muted: true,
                    r#loop: true,
                    playsinline: true,
                    preload: "metadata",
                    onmounted: move |event| {
                        let video = WebVideo::from_mounted(&event.data());
                        element.set(video);
                    },
                }
                div { class: "absolute bottom-3 left-3 px-2 py-1 rounded bg-black/70 text-xs font-mono text-zinc-200",
                    "{format_clock(position)} / {format_clock(duration)}"
                }
                if ended {
                    div { class: "absolute inset-0 flex items-center justify-center bg-black/50 text-sm text-zinc-200",
                        "End of recording"
                    }
                }
            }

            div { class: "px-4 pt-4 space-y-2",
                // Scrubber with event markers
                div { class: "relative h-6",
                    input {
                        r#type: "range",
                        class: "absolute inset-x-0 top-2 w-full accent-sky-500",
                        min: "0",
                        max: "{duration}",
                        step: "1",
                        value: "{position}",
                        aria_label: "Seek",
                        oninput: move |evt| {
                            if let Ok(seconds) = evt.value().parse::<f64>() {
                                seek_to(seconds);
                            }
                        },
                    }
                    for (at, title) in markers {
                        button {
                            key: "{at}",
                            class: "absolute top-0 w-1.5 h-2 rounded-sm bg-orange-400 hover:bg-orange-300",
                            style: "left: {marker_offset(at, duration)}%",
                            title: "{title}",
                            onclick: move |_| seek_to(at),
                        }
                    }
                }
                div { class: "h-1 rounded-full bg-zinc-800 overflow-hidden",
                    div { class: "h-full bg-sky-500", style: "width: {progress}%" }
                }
            }

            div { class: "flex flex-wrap items-center justify-between gap-3 px-4 py-3",
                div { class: "flex items-center gap-1",
                    button {
                        class: control_button_class(false),
                        aria_label: "Back {skip_seconds} seconds",
                        onclick: move |_| {
                            transport.write().skip(-skip_seconds);
                            push_position(transport, element());
                        },
                        Icon { name: "skip-back".to_string(), class: "w-5 h-5".to_string() }
                    }
                    button {
                        class: "p-3 rounded-full bg-sky-500 text-white hover:bg-sky-400 transition-colors",
                        aria_label: if playing { "Pause" } else { "Play" },
                        onclick: move |_| {
                            transport.write().toggle_play();
                            push_position(transport, element());
                            push_playback(transport, element());
                        },
                        Icon { name: play_icon.to_string(), class: "w-5 h-5".to_string() }
                    }
                    button {
                        class: control_button_class(false),
                        aria_label: "Forward {skip_seconds} seconds",
                        onclick: move |_| {
                            transport.write().skip(skip_seconds);
                            push_position(transport, element());
                        },
                        Icon { name: "skip-forward".to_string(), class: "w-5 h-5".to_string() }
                    }
                }

                div { class: "flex items-center gap-1",
                    span { class: "text-xs text-zinc-500 mr-1", "Speed" }
                    for option in PLAYBACK_SPEEDS {
                        button {
                            key: "{option}",
                            class: "px-2 py-1 rounded-md text-xs {speed_class(option == speed)}",
                            onclick: move |_| {
                                if transport.write().set_speed(option) {
                                    push_position(transport, element());
                                }
                            },
                            "{option}x"
                        }
                    }
                }
            }
        }
    }
}

fn marker_offset(at: f64, duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        (at / duration * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn speed_class(active: bool) -> &'static str {
    if active {
        "bg-sky-500 text-white"
    } else {
        "bg-zinc-800 text-zinc-300 hover:bg-zinc-700"
    }
}
