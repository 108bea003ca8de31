use dioxus::prelude::*;

/// Stroke icons drawn on a 24x24 grid. Unknown names render a plain circle.
#[component]
pub fn Icon(name: String, class: String) -> Element {
    let glyph = match name.as_str() {
        "dashboard" => rsx! {
            rect { x: "3", y: "3", width: "7", height: "9", rx: "1" }
            rect { x: "14", y: "3", width: "7", height: "5", rx: "1" }
            rect { x: "14", y: "12", width: "7", height: "9", rx: "1" }
            rect { x: "3", y: "16", width: "7", height: "5", rx: "1" }
        },
        "video" => rsx! {
            path { d: "m22 8-6 4 6 4V8Z" }
            rect { x: "2", y: "6", width: "14", height: "12", rx: "2" }
        },
        "camera" => rsx! {
            path { d: "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z" }
            circle { cx: "12", cy: "13", r: "3" }
        },
        "history" => rsx! {
            path { d: "M3 12a9 9 0 1 0 9-9 9.75 9.75 0 0 0-6.74 2.74L3 8" }
            path { d: "M3 3v5h5" }
            path { d: "M12 7v5l4 2" }
        },
        "users" => rsx! {
            path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
            circle { cx: "9", cy: "7", r: "4" }
            path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
            path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
        },
        "chart" => rsx! {
            path { d: "M3 3v18h18" }
            path { d: "M18 17V9" }
            path { d: "M13 17V5" }
            path { d: "M8 17v-3" }
        },
        "trending" => rsx! {
            polyline { points: "22 7 13.5 15.5 8.5 10.5 2 17" }
            polyline { points: "16 7 22 7 22 13" }
        },
        "activity" => rsx! {
            path { d: "M22 12h-4l-3 9L9 3l-3 9H2" }
        },
        "alert" => rsx! {
            path { d: "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z" }
            path { d: "M12 9v4" }
            path { d: "M12 17h.01" }
        },
        "bell" => rsx! {
            path { d: "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" }
            path { d: "M10.3 21a1.94 1.94 0 0 0 3.4 0" }
        },
        "help" => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3" }
            path { d: "M12 17h.01" }
        },
        "book" => rsx! {
            path { d: "M4 19.5v-15A2.5 2.5 0 0 1 6.5 2H20v20H6.5a2.5 2.5 0 0 1 0-5H20" }
        },
        "mail" => rsx! {
            rect { x: "2", y: "4", width: "20", height: "16", rx: "2" }
            path { d: "m22 7-10 5L2 7" }
        },
        "phone" => rsx! {
            path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z" }
        },
        "chat" => rsx! {
            path { d: "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" }
        },
        "play" => rsx! {
            polygon { points: "6 3 20 12 6 21 6 3", fill: "currentColor" }
        },
        "pause" => rsx! {
            rect { x: "6", y: "4", width: "4", height: "16", fill: "currentColor" }
            rect { x: "14", y: "4", width: "4", height: "16", fill: "currentColor" }
        },
        "skip-back" => rsx! {
            path { d: "M3 12a9 9 0 1 0 3-6.7L3 8" }
            path { d: "M3 3v5h5" }
        },
        "skip-forward" => rsx! {
            path { d: "M21 12a9 9 0 1 1-3-6.7L21 8" }
            path { d: "M21 3v5h-5" }
        },
        "volume" => rsx! {
            polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
            path { d: "M15.54 8.46a5 5 0 0 1 0 7.07" }
            path { d: "M19.07 4.93a10 10 0 0 1 0 14.14" }
        },
        "volume-x" => rsx! {
            polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
            line { x1: "22", y1: "9", x2: "16", y2: "15" }
            line { x1: "16", y1: "9", x2: "22", y2: "15" }
        },
        "maximize" => rsx! {
            path { d: "M8 3H5a2 2 0 0 0-2 2v3" }
            path { d: "M21 8V5a2 2 0 0 0-2-2h-3" }
            path { d: "M3 16v3a2 2 0 0 0 2 2h3" }
            path { d: "M16 21h3a2 2 0 0 0 2-2v-3" }
        },
        "grid" => rsx! {
            rect { x: "3", y: "3", width: "7", height: "7" }
            rect { x: "14", y: "3", width: "7", height: "7" }
            rect { x: "14", y: "14", width: "7", height: "7" }
            rect { x: "3", y: "14", width: "7", height: "7" }
        },
        "list" => rsx! {
            path { d: "M8 6h13" }
            path { d: "M8 12h13" }
            path { d: "M8 18h13" }
            path { d: "M3 6h.01" }
            path { d: "M3 12h.01" }
            path { d: "M3 18h.01" }
        },
        "search" => rsx! {
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "M21 21l-4.35-4.35" }
        },
        "menu" => rsx! {
            path { d: "M4 6h16" }
            path { d: "M4 12h16" }
            path { d: "M4 18h16" }
        },
        "calendar" => rsx! {
            rect { x: "3", y: "4", width: "18", height: "18", rx: "2" }
            path { d: "M16 2v4" }
            path { d: "M8 2v4" }
            path { d: "M3 10h18" }
        },
        "clock" => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            polyline { points: "12 6 12 12 16 14" }
        },
        "star" => rsx! {
            polygon { points: "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" }
        },
        "check" => rsx! {
            polyline { points: "20 6 9 17 4 12" }
        },
        "x" => rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
        "chevron-down" => rsx! {
            path { d: "m6 9 6 6 6-6" }
        },
        "download" => rsx! {
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
            polyline { points: "7 10 12 15 17 10" }
            path { d: "M12 15V3" }
        },
        _ => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
        },
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {glyph}
        }
    }
}
