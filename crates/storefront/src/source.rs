//! Where the pages get products from.

use async_trait::async_trait;

use fairway_core::ProductReference;
use fairway_products::Product;

/// Result of one catalog request.
///
/// Transport failures, bad payloads and `success: false` all collapse into
/// `Unavailable`; the cause is logged where it happens and never reaches the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    Success(T),
    Unavailable,
}

impl<T> FetchOutcome<T> {
    pub fn success(self) -> Option<T> {
        match self {
            FetchOutcome::Success(value) => Some(value),
            FetchOutcome::Unavailable => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, FetchOutcome::Unavailable)
    }
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Every product, in server order.
    async fn list_products(&self) -> FetchOutcome<Vec<Product>>;

    /// One product by reference.
    async fn find_product(&self, reference: &ProductReference) -> FetchOutcome<Product>;
}

/// Fixed product list, for tests and offline demos.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    available: bool,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            available: true,
        }
    }

    /// A catalog whose every request fails.
    pub fn unavailable() -> Self {
        Self {
            products: Vec::new(),
            available: false,
        }
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn list_products(&self) -> FetchOutcome<Vec<Product>> {
        if !self.available {
            return FetchOutcome::Unavailable;
        }
        FetchOutcome::Success(self.products.clone())
    }

    async fn find_product(&self, reference: &ProductReference) -> FetchOutcome<Product> {
        if !self.available {
            return FetchOutcome::Unavailable;
        }
        self.products
            .iter()
            .find(|product| product.reference() == Some(reference))
            .cloned()
            .map_or(FetchOutcome::Unavailable, FetchOutcome::Success)
    }
}
