use dioxus::prelude::*;

use crate::domain::Valuation;
use crate::ui::theme::{self, Theme};
use crate::util::format::{format_multiplier, format_number};

#[component]
pub fn ResultPanel(valuation: Valuation, theme: Theme) -> Element {
    let value = format_number(valuation.value);
    let multiplier = format_multiplier(valuation.multiplier);
    let base = format_number(valuation.base);

    rsx! {
        div { class: "space-y-4",
            h2 { class: "{theme::heading(theme)}", "🧮 The total value of the mutated crop" }
            div { class: "text-center",
                div { class: "flex items-center justify-center gap-2 mb-2",
                    span { class: "text-4xl", "🪙" }
                    span { class: "text-5xl font-bold {theme::accent(theme)}", "{value}" }
                }
                p { class: "{theme::text_muted(theme)}",
                    "Total Multiplier: "
                    span { class: "{theme::accent(theme)}", "{multiplier}x" }
                }
                p { class: "mt-1 text-xs {theme::text_muted(theme)}", "Base value: {base}" }
            }
        }
    }
}
