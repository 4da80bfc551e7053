//! Startup configuration: where the crop catalog comes from and which mutation table to use.
//!
//! Environment variables win over `config.json` in the platform config directory, which wins
//! over the built-in defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use serde_json::Error as SerdeError;

use crate::domain::{MutationTable, MutationTableError};
use crate::infra::catalog::CatalogSource;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "CropValueCalculator";
const APP_NAME: &str = "CropValueCalculator";

pub const CATALOG_ENV: &str = "CROP_CATALOG";
pub const MUTATIONS_ENV: &str = "CROP_MUTATIONS";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppConfig {
    pub catalog: CatalogSource,
    pub mutations_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    catalog: Option<String>,
    #[serde(default)]
    mutations: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
    #[error(transparent)]
    Mutations(#[from] MutationTableError),
}

fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.json"))
}

/// Resolves the configuration, logging and skipping any layer that fails.
pub fn load_config() -> AppConfig {
    let file = match config_file() {
        Some(path) if path.exists() => match read_config_file(&path) {
            Ok(file) => {
                log::info!("Loaded configuration from {}", path.display());
                file
            }
            Err(err) => {
                log::warn!("Ignoring configuration at {}: {err}", path.display());
                ConfigFile::default()
            }
        },
        _ => ConfigFile::default(),
    };

    resolve(
        std::env::var(CATALOG_ENV).ok(),
        std::env::var(MUTATIONS_ENV).ok(),
        file,
    )
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn resolve(catalog_env: Option<String>, mutations_env: Option<String>, file: ConfigFile) -> AppConfig {
    let catalog = catalog_env
        .filter(|value| !value.trim().is_empty())
        .or(file.catalog)
        .map(|raw| match CatalogSource::parse(&raw) {
            Ok(source) => source,
            Err(err) => {
                log::warn!("Falling back to the bundled catalog, {raw:?} is unusable: {err}");
                CatalogSource::Embedded
            }
        })
        .unwrap_or_default();

    let mutations_path = mutations_env
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or(file.mutations);

    AppConfig {
        catalog,
        mutations_path,
    }
}

/// Reads the configured mutation table override, if any.
pub fn load_mutation_table(config: &AppConfig) -> Result<Option<MutationTable>, ConfigError> {
    let Some(path) = config.mutations_path.as_deref() else {
        return Ok(None);
    };

    let table = read_mutation_table(path)?;
    log::info!("Using mutation table from {}", path.display());
    Ok(Some(table))
}

fn read_mutation_table(path: &Path) -> Result<MutationTable, ConfigError> {
    let raw = fs::read_to_string(path)?;
    Ok(MutationTable::from_json(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MutationCategory;
    use crate::util::generate_id;

    fn scratch_path(suffix: &str) -> PathBuf {
        let name = format!("{}-{}{suffix}", std::process::id(), generate_id("config"));
        std::env::temp_dir().join(name)
    }

    #[test]
    fn defaults_without_any_layer() {
        let config = resolve(None, None, ConfigFile::default());
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.catalog, CatalogSource::Embedded);
    }

    #[test]
    fn env_overrides_config_file() {
        let file = ConfigFile {
            catalog: Some("/srv/crops.json".into()),
            mutations: Some(PathBuf::from("/srv/mutations.json")),
        };
        let config = resolve(
            Some("https://example.com/crops.json".into()),
            None,
            file,
        );

        assert!(matches!(config.catalog, CatalogSource::Remote(_)));
        assert_eq!(config.mutations_path, Some(PathBuf::from("/srv/mutations.json")));
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let file = ConfigFile {
            catalog: Some("/srv/crops.json".into()),
            mutations: None,
        };
        let config = resolve(Some("  ".into()), Some(String::new()), file);

        assert_eq!(config.catalog, CatalogSource::File(PathBuf::from("/srv/crops.json")));
        assert_eq!(config.mutations_path, None);
    }

    #[test]
    fn unusable_catalog_url_falls_back_to_embedded() {
        let config = resolve(Some("https://".into()), None, ConfigFile::default());
        assert_eq!(config.catalog, CatalogSource::Embedded);
    }

    #[test]
    fn config_file_is_parsed() {
        let path = scratch_path(".json");
        fs::write(&path, r#"{ "catalog": "crops.json", "mutations": "alt.json" }"#).unwrap();
        let file = read_config_file(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(file.catalog.as_deref(), Some("crops.json"));
        assert_eq!(file.mutations, Some(PathBuf::from("alt.json")));
    }

    #[test]
    fn mutation_table_override_is_loaded() {
        let path = scratch_path(".json");
        fs::write(
            &path,
            r#"{ "environmental": [{ "name": "moonlit", "emoji": "🌙", "multiplier": 2 }] }"#,
        )
        .unwrap();
        let config = AppConfig {
            mutations_path: Some(path.clone()),
            ..AppConfig::default()
        };
        let table = load_mutation_table(&config).unwrap().unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(table.environmental.len(), 1);
        assert_eq!(
            table.find(MutationCategory::Environmental, "moonlit").map(|d| d.factor),
            Some(2.0)
        );
    }

    #[test]
    fn no_override_means_stock_table() {
        assert!(load_mutation_table(&AppConfig::default()).unwrap().is_none());
    }

    #[test]
    fn broken_mutation_tables_are_reported() {
        let missing = AppConfig {
            mutations_path: Some(scratch_path("-missing.json")),
            ..AppConfig::default()
        };
        assert!(matches!(load_mutation_table(&missing), Err(ConfigError::Io(_))));

        let path = scratch_path(".json");
        fs::write(&path, r#"{ "growth": [{ "name": "golden", "factor": 1 }, { "name": "golden", "factor": 2 }] }"#)
            .unwrap();
        let duplicate = AppConfig {
            mutations_path: Some(path.clone()),
            ..AppConfig::default()
        };
        let result = load_mutation_table(&duplicate);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(ConfigError::Mutations(_))));
    }
}
