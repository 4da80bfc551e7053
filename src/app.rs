use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{AppState, MutationTable},
    infra::catalog::{load_catalog_logged, CatalogClient, CatalogSource},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{CalculatorPage, MutationsPage},
        shell::Shell,
        theme::Theme,
    },
    util::{
        assets,
        config::{load_config, load_mutation_table, AppConfig},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
    #[route("/mutations")]
    Mutations {},
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let (mutations, mutation_source) = use_hook({
        let config = config.clone();
        move || resolve_mutations(&config)
    });
    let state = use_signal(move || AppState::with_mutations(mutations));
    use_context_provider(|| state);

    // Toasts are written after the first render, never while rendering.
    use_effect(move || {
        if let Some((kind, text)) = mutation_source.notice() {
            push_toast(toasts, kind, text);
        }
    });

    let theme = use_signal(Theme::default);
    use_context_provider(|| theme);

    // Fetched once; a failure leaves the catalog empty and is only logged.
    let _catalog = use_resource(move || {
        let source = config.catalog.clone();
        async move { fetch_catalog(state, source).await }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Where the active mutation table came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MutationSource {
    Stock,
    Custom,
    Fallback,
}

impl MutationSource {
    fn notice(self) -> Option<(ToastKind, &'static str)> {
        match self {
            MutationSource::Stock => None,
            MutationSource::Custom => Some((ToastKind::Info, "Using a custom mutation table.")),
            MutationSource::Fallback => Some((
                ToastKind::Warning,
                "Custom mutation table could not be used; showing default figures.",
            )),
        }
    }
}

fn resolve_mutations(config: &AppConfig) -> (MutationTable, MutationSource) {
    match load_mutation_table(config) {
        Ok(Some(table)) => (table, MutationSource::Custom),
        Ok(None) => (MutationTable::default(), MutationSource::Stock),
        Err(err) => {
            log::warn!("Failed to load mutation table: {err}; using defaults");
            (MutationTable::default(), MutationSource::Fallback)
        }
    }
}

async fn fetch_catalog(mut state: Signal<AppState>, source: CatalogSource) -> Option<usize> {
    let client = match CatalogClient::new(source) {
        Ok(client) => client,
        Err(err) => {
            log::error!("Failed to initialise catalog client: {err}");
            state.with_mut(|st| st.mark_catalog_unavailable());
            return None;
        }
    };

    match load_catalog_logged(&client).await {
        Some(crops) => {
            let count = crops.len();
            state.with_mut(|st| st.apply_catalog(crops));
            Some(count)
        }
        None => {
            state.with_mut(|st| st.mark_catalog_unavailable());
            None
        }
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn Mutations() -> Element {
    rsx! { Shell { MutationsPage {} } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::generate_id;

    #[test]
    fn stock_table_raises_no_notice() {
        let (table, source) = resolve_mutations(&AppConfig::default());

        assert_eq!(table, MutationTable::default());
        assert_eq!(source, MutationSource::Stock);
        assert_eq!(source.notice(), None);
    }

    #[test]
    fn unreadable_override_falls_back_with_warning() {
        let missing = std::env::temp_dir().join(format!(
            "{}-{}-missing.json",
            std::process::id(),
            generate_id("mutations")
        ));
        let config = AppConfig {
            mutations_path: Some(missing),
            ..AppConfig::default()
        };
        let (table, source) = resolve_mutations(&config);

        assert_eq!(table, MutationTable::default());
        assert_eq!(source, MutationSource::Fallback);
        assert!(matches!(source.notice(), Some((ToastKind::Warning, _))));
    }

    #[test]
    fn custom_table_is_announced() {
        let path = std::env::temp_dir().join(format!(
            "{}-{}.json",
            std::process::id(),
            generate_id("mutations")
        ));
        std::fs::write(&path, r#"{ "temperature": [{ "name": "none", "factor": 1 }] }"#).unwrap();
        let config = AppConfig {
            mutations_path: Some(path.clone()),
            ..AppConfig::default()
        };
        let (table, source) = resolve_mutations(&config);
        let _ = std::fs::remove_file(&path);

        assert_eq!(table.temperature.len(), 1);
        assert_eq!(source, MutationSource::Custom);
        assert!(matches!(source.notice(), Some((ToastKind::Info, _))));
    }
}
