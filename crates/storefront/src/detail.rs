//! Product detail page: fetch one product, render it, run the add-to-cart
//! transaction.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use fairway_core::{DomainError, ProductReference};
use fairway_products::{CartLine, GloveSize, Product, format_price};

use crate::catalog::PageSettings;
use crate::collaborators::{CartApi, CartError, Navigator, Notifications, Notifier};
use crate::generation::RequestGeneration;
use crate::source::{CatalogSource, FetchOutcome};
use crate::spec_panel::{GloveSizePicker, SIZE_HINT_REQUIRED, render_specs};
use crate::view::{DetailField, DetailPanel, DetailView, ImageAngle, Thumbnail};

pub const DETAIL_NOT_FOUND: &str = "Producto no encontrado";
pub const CART_UNAVAILABLE: &str = "El carrito no está disponible";
pub const CART_FAILED: &str = "No se pudo agregar el producto al carrito";

/// How a `load` ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome {
    Shown,
    NotFound,
    /// A newer load started while this one was in flight.
    Superseded,
}

/// How an add-to-cart click ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddToCartOutcome {
    Added(CartLine),
    /// Business rule stopped the transaction before it reached the cart.
    Blocked(DomainError),
    CartUnavailable,
    Rejected(CartError),
    /// No product is on screen.
    NothingShown,
}

/// Everything tied to the product currently on screen. Replaced wholesale on
/// every render.
#[derive(Debug)]
struct DetailSession {
    product: Product,
    picker: Option<GloveSizePicker>,
    thumbnails: Vec<Thumbnail>,
}

pub struct DetailPage<V> {
    source: Arc<dyn CatalogSource>,
    navigator: Arc<dyn Navigator>,
    cart: Option<Arc<dyn CartApi>>,
    notifications: Notifications,
    settings: PageSettings,
    view: Mutex<V>,
    session: Mutex<Option<DetailSession>>,
    generation: RequestGeneration,
}

impl<V: DetailView> DetailPage<V> {
    pub fn new(
        source: Arc<dyn CatalogSource>,
        navigator: Arc<dyn Navigator>,
        settings: PageSettings,
        view: V,
    ) -> Self {
        Self {
            source,
            navigator,
            cart: None,
            notifications: Notifications::none(),
            settings,
            view: Mutex::new(view),
            session: Mutex::new(None),
            generation: RequestGeneration::new(),
        }
    }

    pub fn with_cart(mut self, cart: Arc<dyn CartApi>) -> Self {
        self.cart = Some(cart);
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifications = Notifications::new(Some(notifier));
        self
    }

    pub async fn view(&self) -> MutexGuard<'_, V> {
        self.view.lock().await
    }

    /// Size currently picked for the glove on screen.
    pub async fn selected_size(&self) -> Option<GloveSize> {
        self.session
            .lock()
            .await
            .as_ref()
            .and_then(|session| session.picker.as_ref())
            .and_then(GloveSizePicker::selected)
    }

    /// Load the product named by the `ref` query parameter.
    pub async fn load_from_location(&self) -> DetailOutcome {
        let reference = self.navigator.query_param("ref").unwrap_or_default();
        self.load(&reference).await
    }

    /// Fetch and render the product `reference`.
    pub async fn load(&self, reference: &str) -> DetailOutcome {
        let ticket = self.generation.begin();

        let reference = match ProductReference::new(reference) {
            Ok(reference) => reference,
            Err(e) => {
                tracing::warn!("detail page opened without a product: {}", e);
                self.show_not_found().await;
                return DetailOutcome::NotFound;
            }
        };

        {
            let mut view = self.view.lock().await;
            view.set_visible(DetailPanel::Error, false);
            view.set_visible(DetailPanel::Loading, true);
        }

        let outcome = self.source.find_product(&reference).await;
        if !self.generation.is_current(ticket) {
            tracing::debug!(%reference, "dropping superseded product response");
            return DetailOutcome::Superseded;
        }

        match outcome {
            FetchOutcome::Success(product) => {
                tracing::info!(%reference, "product loaded");
                self.show_product(product).await;
                DetailOutcome::Shown
            }
            FetchOutcome::Unavailable => {
                self.show_not_found().await;
                DetailOutcome::NotFound
            }
        }
    }

    async fn show_not_found(&self) {
        let mut session = self.session.lock().await;
        *session = None;

        let mut view = self.view.lock().await;
        view.set_visible(DetailPanel::Loading, false);
        view.set_visible(DetailPanel::Main, false);
        view.set_visible(DetailPanel::Description, false);
        view.set_visible(DetailPanel::Specs, false);
        view.set_text(DetailField::Error, DETAIL_NOT_FOUND);
        view.set_visible(DetailPanel::Error, true);
    }

    async fn show_product(&self, product: Product) {
        let mut session = self.session.lock().await;
        let mut view = self.view.lock().await;

        view.set_visible(DetailPanel::Loading, false);
        view.set_visible(DetailPanel::Error, false);

        let reference = product.reference().map(|r| r.to_string());
        view.set_text(DetailField::Reference, reference.as_deref().unwrap_or("-"));
        view.set_text(DetailField::Name, product.name().unwrap_or("-"));
        view.set_text(DetailField::Brand, product.brand().unwrap_or("-"));
        view.set_text(DetailField::Model, product.model().unwrap_or("-"));
        view.set_text(DetailField::Category, product.category().label());
        view.set_text(DetailField::Price, &format_price(product.price()));

        match product.description() {
            Some(description) => {
                view.set_text(DetailField::Description, description);
                view.set_visible(DetailPanel::Description, true);
            }
            None => view.set_visible(DetailPanel::Description, false),
        }

        let images = product.images();
        view.set_main_image(images.main.as_deref().unwrap_or(&self.settings.placeholder_image));
        let thumbnails: Vec<Thumbnail> = [
            (ImageAngle::Front, &images.front),
            (ImageAngle::Top, &images.top),
            (ImageAngle::Side, &images.side),
        ]
        .into_iter()
        .filter_map(|(angle, src)| {
            src.as_ref().map(|src| Thumbnail {
                angle,
                src: src.clone(),
            })
        })
        .collect();
        view.set_thumbnails(&thumbnails);

        let (panel, picker) = render_specs(product.specs());
        match &panel {
            Some(panel) => {
                view.show_spec_panel(panel);
                view.set_visible(DetailPanel::Specs, true);
            }
            None => view.set_visible(DetailPanel::Specs, false),
        }

        if !view.add_to_cart_bound() {
            view.bind_add_to_cart();
        }
        view.set_visible(DetailPanel::Main, true);

        *session = Some(DetailSession {
            product,
            picker,
            thumbnails,
        });
    }

    /// Pick a glove size. Returns `false` when the size has no stock or the
    /// product on screen is not a glove.
    pub async fn select_size(&self, size: GloveSize) -> bool {
        let mut session = self.session.lock().await;
        let Some(picker) = session.as_mut().and_then(|s| s.picker.as_mut()) else {
            return false;
        };
        if !picker.select(size) {
            return false;
        }

        self.view
            .lock()
            .await
            .update_size_picker(&picker.tags(), picker.hint());
        true
    }

    /// Show thumbnail `index` as the main image. Product data is untouched.
    pub async fn select_thumbnail(&self, index: usize) -> bool {
        let session = self.session.lock().await;
        let Some(thumbnail) = session.as_ref().and_then(|s| s.thumbnails.get(index)) else {
            return false;
        };
        self.view.lock().await.set_main_image(&thumbnail.src);
        true
    }

    /// Put the product's main image (or the placeholder) back in place.
    pub async fn restore_main_image(&self) -> bool {
        let session = self.session.lock().await;
        let Some(session) = session.as_ref() else {
            return false;
        };
        let main = session.product.images().main.as_deref();
        self.view
            .lock()
            .await
            .set_main_image(main.unwrap_or(&self.settings.placeholder_image));
        true
    }

    /// Add-to-cart click handler.
    pub async fn add_to_cart(&self) -> AddToCartOutcome {
        let mut session = self.session.lock().await;
        let Some(session) = session.as_mut() else {
            return AddToCartOutcome::NothingShown;
        };

        let size = match session.picker.as_mut() {
            Some(picker) => match picker.require_selection() {
                Ok(size) => Some(size),
                Err(e) => {
                    self.view
                        .lock()
                        .await
                        .update_size_picker(&picker.tags(), picker.hint());
                    self.notifications.warning(SIZE_HINT_REQUIRED);
                    tracing::warn!("add to cart blocked: no size selected");
                    return AddToCartOutcome::Blocked(e);
                }
            },
            None => None,
        };

        let line = match CartLine::for_product(&session.product, size) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("add to cart blocked: {}", e);
                return AddToCartOutcome::Blocked(e);
            }
        };

        let Some(cart) = &self.cart else {
            tracing::error!(line = %line.id, "no cart available");
            self.notifications.error(CART_UNAVAILABLE);
            return AddToCartOutcome::CartUnavailable;
        };

        match cart.add_item(line.clone()) {
            Ok(()) => {
                tracing::info!(line = %line.id, "added to cart");
                let name = line.name.as_deref().unwrap_or(&line.reference);
                self.notifications
                    .success(&format!("{name} agregado al carrito"));
                AddToCartOutcome::Added(line)
            }
            Err(e) => {
                tracing::error!(line = %line.id, "cart rejected line: {}", e);
                self.notifications.error(CART_FAILED);
                AddToCartOutcome::Rejected(e)
            }
        }
    }
}
