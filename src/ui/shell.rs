use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{AppState, CatalogStatus};
use crate::ui::theme::{self, Theme};
use crate::util::version::{version_label, APP_AUTHOR, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let mut theme_signal = use_context::<Signal<Theme>>();
    let theme = theme_signal();

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let catalog_note = match state.with(|st| st.catalog_status) {
        CatalogStatus::Loading => "Loading crop catalog...".to_string(),
        CatalogStatus::Loaded(count) => format!("{count} crops"),
        CatalogStatus::Unavailable => "Crop catalog unavailable".to_string(),
    };

    rsx! {
        div { class: "{theme::page(theme)}",
            header { class: "{theme::header(theme)}",
                div { class: "mx-auto max-w-6xl flex items-center justify-between gap-4",
                    div {
                        h1 { class: "text-xl font-semibold", "🌾 {APP_NAME}" }
                        p { class: "text-xs {theme::text_muted(theme)}", "{catalog_note}" }
                    }

                    nav { class: "flex gap-2",
                        NavButton {
                            active: matches!(current_route, Route::Calculator {}),
                            onclick: move |_| { nav.push(Route::Calculator {}); },
                            label: "🧮 Calculator",
                            theme,
                        }
                        NavButton {
                            active: matches!(current_route, Route::Mutations {}),
                            onclick: move |_| { nav.push(Route::Mutations {}); },
                            label: "📖 Mutations",
                            theme,
                        }
                    }

                    div { class: "flex gap-2",
                        for option in Theme::ALL {
                            NavButton {
                                key: "{option.name()}",
                                active: option == theme,
                                onclick: move |_| theme_signal.set(option),
                                label: option.emoji(),
                                theme,
                            }
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
            footer { class: "mx-auto max-w-6xl px-6 py-4 text-xs {theme::text_muted(theme)}",
                "{APP_NAME} {version_label()} by {APP_AUTHOR}"
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str, theme: Theme) -> Element {
    rsx! {
        button {
            class: "{theme::btn(theme, active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
