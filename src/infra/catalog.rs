//! One-shot loader for the crop catalog.
//!
//! - The catalog is a `{ "crops": [{ "name", "value" }] }` document.
//! - It is read once at startup from the bundled asset, a local file, or an HTTP URL.
//! - There is no retry and no cache; callers that cannot use an error go through
//!   [`load_catalog_logged`].

use std::{fmt, io, path::PathBuf};

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::Crop;
use crate::util::{assets, version::user_agent};

/// Static path the bundled catalog is served under.
pub const EMBEDDED_CATALOG_PATH: &str = "/crops.json";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read catalog: {0}")]
    Io(#[from] io::Error),
    #[error("failed to decode catalog: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("embedded catalog missing: {0}")]
    MissingAsset(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum CatalogSource {
    #[default]
    Embedded,
    File(PathBuf),
    Remote(Url),
}

impl CatalogSource {
    /// `http(s)://` locations become remote sources, anything else is a file path.
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Ok(CatalogSource::Remote(Url::parse(trimmed)?));
        }
        Ok(CatalogSource::File(PathBuf::from(trimmed)))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Embedded => write!(f, "embedded {EMBEDDED_CATALOG_PATH}"),
            CatalogSource::File(path) => write!(f, "file {}", path.display()),
            CatalogSource::Remote(url) => write!(f, "{url}"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDto {
    crops: Vec<CropDto>,
}

#[derive(Debug, Deserialize)]
struct CropDto {
    name: String,
    value: f64,
}

impl From<CropDto> for Crop {
    fn from(dto: CropDto) -> Self {
        Crop::new(dto.name, dto.value)
    }
}

#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    source: CatalogSource,
}

impl CatalogClient {
    pub fn new(source: CatalogSource) -> Result<Self, CatalogError> {
        let http = Client::builder().user_agent(user_agent()).build()?;
        Ok(Self { http, source })
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub async fn load(&self) -> Result<Vec<Crop>, CatalogError> {
        log::debug!("Loading crop catalog from {}", self.source);
        let raw = match &self.source {
            CatalogSource::Embedded => assets::crop_catalog_json()
                .ok_or_else(|| CatalogError::MissingAsset(EMBEDDED_CATALOG_PATH.to_string()))?,
            CatalogSource::File(path) => tokio::fs::read_to_string(path).await?,
            CatalogSource::Remote(url) => self.fetch_remote(url.clone()).await?,
        };

        let crops = parse_catalog(&raw)?;
        log::info!("Loaded {} crops from {}", crops.len(), self.source);
        Ok(crops)
    }

    async fn fetch_remote(&self, url: Url) -> Result<String, CatalogError> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

pub fn parse_catalog(raw: &str) -> Result<Vec<Crop>, CatalogError> {
    let dto: CatalogDto = serde_json::from_str(raw)?;
    Ok(dto.crops.into_iter().map(Crop::from).collect())
}

/// Loads the catalog, logging and swallowing any failure.
pub async fn load_catalog_logged(client: &CatalogClient) -> Option<Vec<Crop>> {
    match client.load().await {
        Ok(crops) => Some(crops),
        Err(err) => {
            log::error!("Error fetching crops from {}: {err}", client.source());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::generate_id;

    fn scratch_file(contents: &str) -> PathBuf {
        let name = format!("{}-{}.json", std::process::id(), generate_id("crop-catalog"));
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn parses_catalog_document() {
        let crops = parse_catalog(
            r#"{ "crops": [
                { "name": "Carrot", "value": 22 },
                { "name": "Dragon Fruit", "value": 248.5 }
            ] }"#,
        )
        .unwrap();

        assert_eq!(
            crops,
            vec![Crop::new("Carrot", 22.0), Crop::new("Dragon Fruit", 248.5)]
        );
    }

    #[test]
    fn rejects_malformed_catalog() {
        assert!(matches!(
            parse_catalog(r#"{ "plants": [] }"#),
            Err(CatalogError::Decode(_))
        ));
        assert!(matches!(
            parse_catalog(r#"{ "crops": [{ "name": "Carrot", "value": "cheap" }] }"#),
            Err(CatalogError::Decode(_))
        ));
    }

    #[test]
    fn source_parsing_distinguishes_urls_and_paths() {
        assert_eq!(
            CatalogSource::parse("https://example.com/crops.json").unwrap(),
            CatalogSource::Remote(Url::parse("https://example.com/crops.json").unwrap())
        );
        assert_eq!(
            CatalogSource::parse(" ./data/crops.json ").unwrap(),
            CatalogSource::File(PathBuf::from("./data/crops.json"))
        );
        assert!(matches!(
            CatalogSource::parse("https://"),
            Err(CatalogError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn embedded_catalog_is_loadable() {
        let client = CatalogClient::new(CatalogSource::Embedded).unwrap();
        let crops = client.load().await.unwrap();

        assert!(!crops.is_empty());
        assert!(crops.iter().all(|crop| crop.value >= 0.0));
    }

    #[tokio::test]
    async fn loads_catalog_from_file() {
        let path = scratch_file(r#"{ "crops": [{ "name": "Pumpkin", "value": 3000 }] }"#);
        let client = CatalogClient::new(CatalogSource::File(path.clone())).unwrap();
        let crops = client.load().await.unwrap();
        let _ = std::fs::remove_file(path);

        assert_eq!(crops, vec![Crop::new("Pumpkin", 3000.0)]);
    }

    #[tokio::test]
    async fn missing_file_is_reported_and_swallowed() {
        let name = format!("{}-{}", std::process::id(), generate_id("missing-catalog"));
        let path = std::env::temp_dir().join(name);
        let client = CatalogClient::new(CatalogSource::File(path)).unwrap();

        assert!(matches!(client.load().await, Err(CatalogError::Io(_))));
        assert!(load_catalog_logged(&client).await.is_none());
    }

    #[tokio::test]
    async fn malformed_file_is_swallowed() {
        let path = scratch_file("not json");
        let client = CatalogClient::new(CatalogSource::File(path.clone())).unwrap();
        let crops = load_catalog_logged(&client).await;
        let _ = std::fs::remove_file(path);

        assert!(crops.is_none());
    }
}
