use dioxus::prelude::*;

use crate::{
    domain::{display_name, factor_label, AppState, MutationCategory},
    ui::theme::{self, Theme},
};

/// Read-only sheet of the mutation table the calculator is running with.
#[component]
pub fn MutationsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let theme = use_context::<Signal<Theme>>()();

    let sections = state.with(|st| {
        MutationCategory::ALL
            .iter()
            .map(|category| {
                let rows = st
                    .mutations
                    .definitions(*category)
                    .iter()
                    .map(|definition| {
                        (
                            definition.emoji.clone(),
                            display_name(definition),
                            factor_label(*category, definition),
                        )
                    })
                    .collect::<Vec<_>>();
                (*category, rows)
            })
            .collect::<Vec<_>>()
    });

    rsx! {
        div { class: "space-y-6",
            p { class: "{theme::text_muted(theme)}",
                "Growth and temperature multiply the base value. Environmental mutations add up first, then multiply as one factor."
            }
            div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                for (category, rows) in sections {
                    section { key: "{category:?}", class: "space-y-3",
                        h2 { class: "{theme::heading(theme)}", "{category.emoji()} {category.title()}" }
                        ul { class: "space-y-3",
                            for (emoji, name, factor) in rows {
                                li { key: "{name}", class: "flex items-center justify-between",
                                    span { "{emoji} {name}" }
                                    span { class: "{theme::accent(theme)}", "{factor}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
