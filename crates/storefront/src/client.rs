//! HTTP client for the catalog endpoint.
//!
//! One GET per call, no retries, no timeout: every request is user triggered
//! and read-only.

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use fairway_core::ProductReference;
use fairway_products::Product;

use crate::source::{CatalogSource, FetchOutcome};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("catalog answered with status {0}")]
    Status(u16),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("catalog reported failure")]
    Rejected,
    #[error("response is missing `{0}`")]
    MissingField(&'static str),
}

/// `{ "success": bool, "productos": [...] }`
///
/// Rows stay raw here and are decoded one by one, so a malformed row is
/// skipped instead of failing the whole listing.
#[derive(Debug, Deserialize)]
struct ListingEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    productos: Option<Vec<Value>>,
}

/// `{ "success": bool, "producto": {...} }`
#[derive(Debug, Deserialize)]
struct LookupEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    producto: Option<Product>,
}

/// Client for the catalog CRUD endpoint.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl CatalogClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// URL of the single-product lookup for `reference`.
    pub fn lookup_url(&self, reference: &ProductReference) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("referencia", reference.as_str());
        url
    }

    /// Fetch the whole catalog.
    #[instrument(skip(self))]
    pub async fn try_list_products(&self) -> Result<Vec<Product>, FetchError> {
        let envelope: ListingEnvelope = self.get_json(self.endpoint.clone()).await?;
        if !envelope.success {
            return Err(FetchError::Rejected);
        }
        let rows = envelope
            .productos
            .ok_or(FetchError::MissingField("productos"))?;
        Ok(decode_rows(rows))
    }

    /// Fetch one product by reference.
    #[instrument(skip(self, reference), fields(reference = %reference))]
    pub async fn try_find_product(&self, reference: &ProductReference) -> Result<Product, FetchError> {
        let envelope: LookupEnvelope = self.get_json(self.lookup_url(reference)).await?;
        if !envelope.success {
            return Err(FetchError::Rejected);
        }
        envelope.producto.ok_or(FetchError::MissingField("producto"))
    }

    async fn get_json<T>(&self, url: Url) -> Result<T, FetchError>
    where
        T: serde::de::DeserializeOwned,
    {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status().as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Decode listing rows, dropping the ones that are not products.
fn decode_rows(rows: Vec<Value>) -> Vec<Product> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<Product>(row) {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::warn!(index, "skipping malformed product row: {}", e);
                None
            }
        })
        .collect()
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn list_products(&self) -> FetchOutcome<Vec<Product>> {
        match self.try_list_products().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "catalog fetched");
                FetchOutcome::Success(products)
            }
            Err(e) => {
                tracing::warn!("catalog unavailable: {}", e);
                FetchOutcome::Unavailable
            }
        }
    }

    async fn find_product(&self, reference: &ProductReference) -> FetchOutcome<Product> {
        match self.try_find_product(reference).await {
            Ok(product) => FetchOutcome::Success(product),
            Err(e) => {
                tracing::warn!("product {} unavailable: {}", reference, e);
                FetchOutcome::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_url_appends_encoded_reference() {
        let client = CatalogClient::new(Url::parse("http://shop.test/api/productos.php").unwrap());
        let reference = ProductReference::new("AFG P001").unwrap();
        assert_eq!(
            client.lookup_url(&reference).as_str(),
            "http://shop.test/api/productos.php?referencia=AFG+P001"
        );
    }

    #[test]
    fn listing_envelope_without_products_decodes_as_missing() {
        let envelope: ListingEnvelope = serde_json::from_value(json!({"success": true})).unwrap();
        assert!(envelope.success);
        assert!(envelope.productos.is_none());
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let envelope: ListingEnvelope = serde_json::from_value(json!({
            "success": true,
            "productos": [
                {"referencia": "AFG-P001", "nombre": "Driver", "categoria": "clubs"},
                {"referencia": "AFG-P002", "reference": "AFG-P002", "categoria": "clubs"},
                null,
                42,
                {"referencia": "AFG-B001", "nombre": "Pro V1", "categoria": "balls"}
            ]
        }))
        .unwrap();

        let products = decode_rows(envelope.productos.unwrap());
        let names: Vec<Option<&str>> = products.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec![Some("Driver"), Some("Pro V1")]);
    }

    #[test]
    fn lookup_envelope_failure_decodes() {
        let envelope: LookupEnvelope = serde_json::from_value(json!({"success": false})).unwrap();
        assert!(!envelope.success);
        assert!(envelope.producto.is_none());
    }

    #[tokio::test]
    async fn unreachable_backend_is_unavailable() {
        // Port 9 (discard) on loopback is closed in test environments.
        let client = CatalogClient::new(Url::parse("http://127.0.0.1:9/productos.php").unwrap());
        assert!(client.list_products().await.is_unavailable());
    }
}
