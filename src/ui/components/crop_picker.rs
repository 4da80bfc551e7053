use dioxus::prelude::*;

use crate::domain::{CatalogStatus, Crop};
use crate::ui::theme::{self, Theme};
use crate::util::format::format_number;

/// Button showing the chosen crop; opens a modal grid of the catalog.
#[component]
pub fn CropPicker(
    crops: Vec<Crop>,
    selected: Option<Crop>,
    status: CatalogStatus,
    theme: Theme,
    onselect: EventHandler<String>,
) -> Element {
    let mut open = use_signal(|| false);

    let label = match (&selected, status) {
        (Some(crop), _) => crop.name.clone(),
        (None, CatalogStatus::Loading) => "Loading crops...".to_string(),
        (None, _) => "Select Crop".to_string(),
    };
    let selected_name = selected.map(|crop| crop.name);

    rsx! {
        button {
            class: "{theme::picker_button(theme)}",
            onclick: move |_| open.set(true),
            "{label}"
        }
        if open() {
            div {
                class: "fixed inset-0 z-50 flex items-center justify-center bg-black-60",
                onclick: move |_| open.set(false),
                div {
                    class: "{theme::modal(theme)}",
                    onclick: move |evt| evt.stop_propagation(),
                    h2 { class: "text-2xl text-center font-semibold mb-2", "Select Your Crop" }
                    if crops.is_empty() {
                        p { class: "text-center {theme::text_muted(theme)}", "No crops available." }
                    }
                    div { class: "grid grid-cols-3 gap-4 p-4",
                        for crop in crops {
                            CropCard {
                                key: "{crop.name}",
                                selected: selected_name.as_deref() == Some(crop.name.as_str()),
                                crop: crop.clone(),
                                theme,
                                onpick: move |name: String| {
                                    onselect.call(name);
                                    open.set(false);
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CropCard(crop: Crop, selected: bool, theme: Theme, onpick: EventHandler<String>) -> Element {
    let value = format_number(crop.value);
    let name = crop.name.clone();

    rsx! {
        div {
            class: "{theme::card(theme, selected)}",
            onclick: move |_| onpick.call(name.clone()),
            div { class: "text-2xl mb-2", "🌱" }
            h3 { class: "font-semibold mb-1", "{crop.name}" }
            p { class: "{theme::text_muted(theme)}", "{value} coins" }
        }
    }
}
