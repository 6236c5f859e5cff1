//! Catalog page: fetch, filter, render cards, open a card.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use fairway_products::{
    FilterSelection, Product, brand_options, category_options, filter_products, format_price,
};

use crate::collaborators::{Navigator, detail_url};
use crate::generation::RequestGeneration;
use crate::source::{CatalogSource, FetchOutcome};
use crate::view::{CatalogView, ProductCard};

pub const CATALOG_LOADING: &str = "Cargando productos...";
pub const CATALOG_EMPTY: &str = "No hay productos disponibles";

/// Settings shared by both pages.
#[derive(Debug, Clone)]
pub struct PageSettings {
    pub detail_page: String,
    pub placeholder_image: String,
}

/// Map one product to its card.
pub fn product_card(product: &Product, settings: &PageSettings) -> ProductCard {
    ProductCard {
        reference: product.reference().cloned(),
        name: product.name().unwrap_or("-").to_string(),
        price: format_price(product.price()),
        image: product
            .images()
            .main
            .clone()
            .unwrap_or_else(|| settings.placeholder_image.clone()),
        size_badges: product
            .glove_stock()
            .map(|stock| stock.available_sizes())
            .unwrap_or_default(),
        href: product
            .reference()
            .map(|reference| detail_url(&settings.detail_page, reference)),
    }
}

/// Render `products` into `view`: the empty state when there is nothing to
/// show, the card grid otherwise. Returns the cards drawn.
pub fn render_catalog<V: CatalogView + ?Sized>(
    view: &mut V,
    products: &[&Product],
    settings: &PageSettings,
) -> Vec<ProductCard> {
    if products.is_empty() {
        view.show_empty(CATALOG_EMPTY);
        return Vec::new();
    }

    let cards: Vec<ProductCard> = products
        .iter()
        .map(|product| product_card(product, settings))
        .collect();
    view.show_cards(&cards);
    cards
}

#[derive(Debug, Default)]
struct CatalogState {
    products: Vec<Product>,
    selection: FilterSelection,
    cards: Vec<ProductCard>,
}

pub struct CatalogPage<V> {
    source: Arc<dyn CatalogSource>,
    navigator: Arc<dyn Navigator>,
    settings: PageSettings,
    view: Mutex<V>,
    state: Mutex<CatalogState>,
    generation: RequestGeneration,
}

impl<V: CatalogView> CatalogPage<V> {
    pub fn new(
        source: Arc<dyn CatalogSource>,
        navigator: Arc<dyn Navigator>,
        settings: PageSettings,
        view: V,
    ) -> Self {
        Self {
            source,
            navigator,
            settings,
            view: Mutex::new(view),
            state: Mutex::new(CatalogState::default()),
            generation: RequestGeneration::new(),
        }
    }

    pub async fn view(&self) -> MutexGuard<'_, V> {
        self.view.lock().await
    }

    pub async fn selection(&self) -> FilterSelection {
        self.state.lock().await.selection.clone()
    }

    /// Fetch the catalog and render it under the current filter.
    ///
    /// A response that arrives after a newer `load` started is dropped.
    /// Returns the number of cards drawn, or `None` when superseded.
    pub async fn load(&self) -> Option<usize> {
        let ticket = self.generation.begin();
        self.view.lock().await.show_loading(CATALOG_LOADING);

        let outcome = self.source.list_products().await;
        if !self.generation.is_current(ticket) {
            tracing::debug!("dropping superseded catalog response");
            return None;
        }

        let products = match outcome {
            FetchOutcome::Success(products) => products,
            FetchOutcome::Unavailable => Vec::new(),
        };
        tracing::info!(count = products.len(), "catalog loaded");

        let mut state = self.state.lock().await;
        state.products = products;

        let mut view = self.view.lock().await;
        view.set_filter_options(&category_options(), &brand_options(&state.products));
        Some(self.redraw(&mut state, &mut *view))
    }

    /// Re-render the already fetched catalog under `selection`.
    pub async fn apply_filter(&self, selection: FilterSelection) -> usize {
        let mut state = self.state.lock().await;
        state.selection = selection;
        let mut view = self.view.lock().await;
        self.redraw(&mut state, &mut *view)
    }

    /// Activate the card at `index`. Cards without a reference do nothing.
    pub async fn open_card(&self, index: usize) -> Option<String> {
        let href = {
            let state = self.state.lock().await;
            state.cards.get(index).and_then(|card| card.href.clone())
        }?;
        self.navigator.navigate(&href);
        Some(href)
    }

    fn redraw(&self, state: &mut CatalogState, view: &mut V) -> usize {
        let filtered = filter_products(&state.products, &state.selection);
        let cards = render_catalog(view, &filtered, &self.settings);
        let count = cards.len();
        state.cards = cards;
        count
    }
}
