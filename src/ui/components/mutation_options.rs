use dioxus::prelude::*;

use crate::domain::{display_name, factor_label, MutationCategory, MutationDefinition};
use crate::ui::theme::{self, Theme};

/// Radio list for a single-choice category (Growth, Temperature).
#[component]
pub fn MutationRadioGroup(
    category: MutationCategory,
    definitions: Vec<MutationDefinition>,
    selected: String,
    theme: Theme,
    onchange: EventHandler<String>,
) -> Element {
    let group = format!("{category:?}").to_lowercase();

    rsx! {
        div { class: "space-y-4",
            h2 { class: "{theme::heading(theme)}", "{category.emoji()} {category.title()}" }
            div { class: "space-y-3",
                for definition in definitions {
                    MutationOption {
                        key: "{group}-{definition.name}",
                        id: format!("{group}-{}", definition.name),
                        group: group.clone(),
                        kind: "radio",
                        checked: definition.name == selected,
                        label: option_label(category, &definition),
                        onchange: {
                            let name = definition.name.clone();
                            move |_checked: bool| onchange.call(name.clone())
                        },
                    }
                }
            }
        }
    }
}

/// Checkbox grid for the additive Environmental category.
#[component]
pub fn EnvironmentalChecklist(
    definitions: Vec<MutationDefinition>,
    selected: Vec<String>,
    theme: Theme,
    ontoggle: EventHandler<(String, bool)>,
) -> Element {
    let category = MutationCategory::Environmental;

    rsx! {
        div { class: "space-y-4",
            h2 { class: "{theme::heading(theme)}", "{category.emoji()} {category.title()}" }
            div { class: "grid grid-cols-2 gap-3",
                for definition in definitions {
                    MutationOption {
                        key: "env-{definition.name}",
                        id: format!("env-{}", definition.name),
                        group: format!("env-{}", definition.name),
                        kind: "checkbox",
                        checked: selected.contains(&definition.name),
                        label: option_label(category, &definition),
                        onchange: {
                            let name = definition.name.clone();
                            move |checked: bool| ontoggle.call((name.clone(), checked))
                        },
                    }
                }
            }
        }
    }
}

fn option_label(category: MutationCategory, definition: &MutationDefinition) -> String {
    let name = display_name(definition);
    let factor = factor_label(category, definition);
    if definition.emoji.is_empty() {
        format!("{name} {factor}")
    } else {
        format!("{} {name} {factor}", definition.emoji)
    }
}

#[component]
fn MutationOption(
    id: String,
    group: String,
    kind: &'static str,
    checked: bool,
    label: String,
    onchange: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "flex items-center gap-3",
            input {
                r#type: kind,
                id: "{id}",
                name: "{group}",
                checked,
                onchange: move |evt: FormEvent| onchange.call(evt.checked()),
            }
            label { r#for: "{id}", class: "flex-1 cursor-pointer", "{label}" }
        }
    }
}
