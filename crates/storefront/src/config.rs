//! Storefront configuration, read from the environment.

use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_CATALOG_URL: &str = "http://localhost/api/productos.php";
pub const DEFAULT_DETAIL_PAGE: &str = "producto.html";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "img/placeholder.png";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {reason}")]
    InvalidUrl { key: &'static str, reason: String },
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Catalog CRUD endpoint (`GET` lists, `GET ?referencia=` looks up).
    pub catalog_url: Url,
    /// Page that renders a single product; cards link to it with `?ref=`.
    pub detail_page: String,
    /// Image shown when a product has no main image.
    pub placeholder_image: String,
}

impl StorefrontConfig {
    /// Read `FAIRWAY_CATALOG_URL`, `FAIRWAY_DETAIL_PAGE` and
    /// `FAIRWAY_PLACEHOLDER_IMAGE`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let raw_url = read("FAIRWAY_CATALOG_URL", DEFAULT_CATALOG_URL);
        let catalog_url = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidUrl {
            key: "FAIRWAY_CATALOG_URL",
            reason: e.to_string(),
        })?;
        if !matches!(catalog_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                key: "FAIRWAY_CATALOG_URL",
                reason: format!("unsupported scheme `{}`", catalog_url.scheme()),
            });
        }

        let detail_page = read("FAIRWAY_DETAIL_PAGE", DEFAULT_DETAIL_PAGE);
        if detail_page.contains('?') {
            return Err(ConfigError::Invalid {
                key: "FAIRWAY_DETAIL_PAGE",
                reason: "must not carry a query string".to_string(),
            });
        }

        Ok(Self {
            catalog_url,
            detail_page,
            placeholder_image: read("FAIRWAY_PLACEHOLDER_IMAGE", DEFAULT_PLACEHOLDER_IMAGE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset_or_blank() {
        let config = config(&[("FAIRWAY_DETAIL_PAGE", "  ")]).unwrap();
        assert_eq!(config.catalog_url.as_str(), DEFAULT_CATALOG_URL);
        assert_eq!(config.detail_page, DEFAULT_DETAIL_PAGE);
        assert_eq!(config.placeholder_image, DEFAULT_PLACEHOLDER_IMAGE);
    }

    #[test]
    fn overrides_are_read() {
        let config = config(&[
            ("FAIRWAY_CATALOG_URL", "https://shop.test/php/productos.php"),
            ("FAIRWAY_DETAIL_PAGE", "detalle.html"),
            ("FAIRWAY_PLACEHOLDER_IMAGE", "img/none.png"),
        ])
        .unwrap();

        assert_eq!(config.catalog_url.as_str(), "https://shop.test/php/productos.php");
        assert_eq!(config.detail_page, "detalle.html");
        assert_eq!(config.placeholder_image, "img/none.png");
    }

    #[test]
    fn rejects_bad_catalog_url() {
        match config(&[("FAIRWAY_CATALOG_URL", "not a url")]).unwrap_err() {
            ConfigError::InvalidUrl { key, .. } => assert_eq!(key, "FAIRWAY_CATALOG_URL"),
            other => panic!("Expected InvalidUrl, got {other:?}"),
        }
        assert!(config(&[("FAIRWAY_CATALOG_URL", "ftp://shop.test/x")]).is_err());
    }

    #[test]
    fn rejects_detail_page_with_query() {
        assert!(config(&[("FAIRWAY_DETAIL_PAGE", "producto.html?x=1")]).is_err());
    }
}
