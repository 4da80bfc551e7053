use dioxus::prelude::*;

use crate::{
    domain::{AppState, MutationCategory, OverrideStatus, NONE_MUTATION},
    ui::{
        components::{
            crop_picker::CropPicker,
            mutation_options::{EnvironmentalChecklist, MutationRadioGroup},
            result_panel::ResultPanel,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme::{self, Theme},
    },
};

#[component]
pub fn CalculatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let theme = use_context::<Signal<Theme>>()();

    // Every render re-reads the selection and recomputes from scratch.
    let (crops, selection, mutations, status, valuation, override_status) = state.with(|st| {
        (
            st.crops.clone(),
            st.selection.clone(),
            st.mutations.clone(),
            st.catalog_status,
            st.valuation(),
            st.override_status(),
        )
    });
    let environmental = selection.environmental.iter().cloned().collect::<Vec<_>>();

    let on_select_crop = {
        let mut state = state;
        move |name: String| {
            state.with_mut(|st| {
                if !st.select_crop(&name) {
                    log::warn!("Ignoring unknown crop {name:?}");
                }
            });
        }
    };

    let on_growth = {
        let mut state = state;
        move |name: String| state.with_mut(|st| st.toggle_mutation(MutationCategory::Growth, &name, true))
    };

    let on_temperature = {
        let mut state = state;
        move |name: String| {
            state.with_mut(|st| st.toggle_mutation(MutationCategory::Temperature, &name, true))
        }
    };

    let on_environmental = {
        let mut state = state;
        move |(name, checked): (String, bool)| {
            state.with_mut(|st| st.toggle_mutation(MutationCategory::Environmental, &name, checked))
        }
    };

    let on_override = {
        let mut state = state;
        move |evt: FormEvent| state.with_mut(|st| st.set_override(evt.value()))
    };

    let on_reset = {
        let mut state = state;
        move |_: MouseEvent| {
            state.with_mut(|st| {
                st.set_growth(NONE_MUTATION);
                st.set_temperature(NONE_MUTATION);
                st.clear_environmental();
            });
            push_toast(toasts, ToastKind::Info, "Mutations reset.");
        }
    };

    let placeholder = selection
        .chosen_crop
        .as_ref()
        .map(|crop| crop.value.to_string())
        .unwrap_or_else(|| "248".to_string());

    rsx! {
        div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
            div { class: "space-y-6",
                div { class: "space-y-4",
                    h2 { class: "{theme::heading(theme)}", "Select Crop" }
                    CropPicker {
                        crops,
                        selected: selection.chosen_crop.clone(),
                        status,
                        theme,
                        onselect: on_select_crop,
                    }
                }
                div { class: "space-y-4",
                    h2 { class: "{theme::heading(theme)}", "Minimum Base Value - Enter any value to be calculated" }
                    input {
                        r#type: "number",
                        class: "{theme::input(theme)}",
                        placeholder: "{placeholder}",
                        value: "{selection.override_value}",
                        oninput: on_override,
                    }
                    if override_status == OverrideStatus::Invalid {
                        p { class: "text-sm text-rose-300", "Not a number, the base value counts as 0." }
                    }
                }
                MutationRadioGroup {
                    category: MutationCategory::Growth,
                    definitions: mutations.growth.clone(),
                    selected: selection.growth.clone(),
                    theme,
                    onchange: on_growth,
                }
            }
            div { class: "space-y-6",
                MutationRadioGroup {
                    category: MutationCategory::Temperature,
                    definitions: mutations.temperature.clone(),
                    selected: selection.temperature.clone(),
                    theme,
                    onchange: on_temperature,
                }
                EnvironmentalChecklist {
                    definitions: mutations.environmental.clone(),
                    selected: environmental,
                    theme,
                    ontoggle: on_environmental,
                }
                button { class: "{theme::btn(theme, false)}", onclick: on_reset, "Reset Mutations" }
                ResultPanel { valuation, theme }
            }
        }
    }
}
