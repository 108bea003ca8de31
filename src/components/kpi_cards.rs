use dioxus::prelude::*;

use crate::components::Icon;
use crate::data::{Kpi, KpiTone};

fn tone_classes(tone: KpiTone) -> (&'static str, &'static str) {
    match tone {
        KpiTone::Neutral => ("text-sky-400", "bg-sky-500/10"),
        KpiTone::Positive => ("text-green-400", "bg-green-500/10"),
        KpiTone::Warning => ("text-orange-400", "bg-orange-500/10"),
        KpiTone::Critical => ("text-red-400", "bg-red-500/10"),
    }
}

#[component]
pub fn KpiCard(kpi: Kpi) -> Element {
    let (text, tint) = tone_classes(kpi.tone);

    rsx! {
        div { class: "bg-zinc-800/30 rounded-2xl border border-zinc-700/30 p-5 flex items-start justify-between",
            div {
                p { class: "text-sm text-zinc-400", "{kpi.label}" }
                p { class: "text-3xl font-bold text-white mt-1", "{kpi.value}" }
                p { class: "text-xs mt-2 {text}", "{kpi.detail}" }
            }
            div { class: "p-3 rounded-xl {tint} {text}",
                Icon { name: kpi.icon.clone(), class: "w-6 h-6".to_string() }
            }
        }
    }
}

#[component]
pub fn KpiGrid(kpis: Vec<Kpi>) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-4 gap-4",
            for kpi in kpis {
                KpiCard { key: "{kpi.label}", kpi }
            }
        }
    }
}
