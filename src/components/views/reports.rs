use dioxus::prelude::*;

use crate::components::{Icon, SelectedStore};
use crate::data::{
    bar_heights, ChartPoint, HOURLY_DELIVERIES, PRODUCTIVITY_SPLIT, WEEKLY_IDLE_PERCENT,
    WEEKLY_SAVINGS,
};

const RANGES: [(&str, &str); 3] = [("7-days", "7 Days"), ("30-days", "30 Days"), ("90-days", "90 Days")];

#[component]
pub fn ReportsView() -> Element {
    let selected_store = use_context::<SelectedStore>().0;
    let mut range = use_signal(|| RANGES[0].0.to_string());

    let idle_total: f64 = WEEKLY_IDLE_PERCENT.iter().map(|p| p.value).sum();
    let avg_idle = if WEEKLY_IDLE_PERCENT.is_empty() {
        0.0
    } else {
        idle_total / WEEKLY_IDLE_PERCENT.len() as f64
    };
    let total_savings: f64 = WEEKLY_SAVINGS.iter().map(|p| p.value).sum();

    rsx! {
        div { class: "space-y-8",
            header { class: "page-header flex flex-wrap items-end justify-between gap-4",
                div {
                    h1 { class: "page-title", "Reports & Analytics" }
                    p { class: "page-subtitle", "{selected_store} · Performance overview" }
                }
                div { class: "flex items-center gap-2",
                    Icon { name: "calendar".to_string(), class: "w-4 h-4 text-zinc-500".to_string() }
                    select {
                        class: "bg-zinc-900 border border-zinc-700/60 rounded-lg px-3 py-1.5 text-sm text-white",
                        value: "{range}",
                        onchange: move |evt| range.set(evt.value()),
                        for (key, label) in RANGES {
                            option { value: key, selected: range() == key, "{label}" }
                        }
                    }
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                div { class: "bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-5",
                    div { class: "text-2xl font-bold text-orange-400", "{avg_idle:.1}%" }
                    div { class: "text-sm text-zinc-400", "Average idle time" }
                }
                div { class: "bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-5",
                    div { class: "text-2xl font-bold text-green-400", "₹{total_savings:.0}" }
                    div { class: "text-sm text-zinc-400", "Cost savings this week" }
                }
                div { class: "bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-5",
                    div { class: "text-2xl font-bold text-sky-400", "{HOURLY_DELIVERIES.len()}" }
                    div { class: "text-sm text-zinc-400", "Reporting intervals today" }
                }
            }

            div { class: "grid grid-cols-1 xl:grid-cols-2 gap-6",
                BarChart {
                    title: "Idle time by day (%)",
                    points: (*WEEKLY_IDLE_PERCENT).clone(),
                    bar_class: "bg-orange-500",
                }
                BarChart {
                    title: "Cost savings (₹)",
                    points: (*WEEKLY_SAVINGS).clone(),
                    bar_class: "bg-green-500",
                }
                BarChart {
                    title: "Deliveries by hour",
                    points: (*HOURLY_DELIVERIES).clone(),
                    bar_class: "bg-sky-500",
                }
                ShareList { title: "Agent productivity", points: (*PRODUCTIVITY_SPLIT).clone() }
            }
        }
    }
}

#[component]
fn BarChart(title: String, points: Vec<ChartPoint>, bar_class: String) -> Element {
    let heights = bar_heights(&points);
    let bars: Vec<(ChartPoint, f64)> = points.into_iter().zip(heights).collect();

    rsx! {
        section { class: "bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-6",
            h2 { class: "text-lg font-semibold text-white mb-6 flex items-center gap-2",
                Icon { name: "chart".to_string(), class: "w-5 h-5".to_string() }
                "{title}"
            }
            div { class: "flex items-end gap-3 h-48",
                for (point, height) in bars {
                    div { key: "{point.label}", class: "flex-1 flex flex-col items-center justify-end h-full gap-2",
                        span { class: "text-[11px] text-zinc-400", "{point.value}" }
                        div {
                            class: "w-full rounded-t-md {bar_class}",
                            style: "height: {height}%",
                            title: "{point.label}: {point.value}",
                        }
                        span { class: "text-xs text-zinc-500", "{point.label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ShareList(title: String, points: Vec<ChartPoint>) -> Element {
    let total: f64 = points.iter().map(|p| p.value.max(0.0)).sum();
    let shares: Vec<(String, f64)> = points
        .iter()
        .map(|p| {
            let share = if total > 0.0 { p.value.max(0.0) / total * 100.0 } else { 0.0 };
            (p.label.clone(), share)
        })
        .collect();

    rsx! {
        section { class: "bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-6",
            h2 { class: "text-lg font-semibold text-white mb-6 flex items-center gap-2",
                Icon { name: "users".to_string(), class: "w-5 h-5".to_string() }
                "{title}"
            }
            div { class: "space-y-4",
                for (label, share) in shares {
                    div { key: "{label}", class: "space-y-1",
                        div { class: "flex justify-between text-sm",
                            span { class: "text-zinc-300", "{label}" }
                            span { class: "text-zinc-400", "{share:.0}%" }
                        }
                        div { class: "h-2 rounded-full bg-zinc-800 overflow-hidden",
                            div { class: "h-full bg-gradient-to-r from-sky-500 to-indigo-500", style: "width: {share}%" }
                        }
                    }
                }
            }
        }
    }
}
