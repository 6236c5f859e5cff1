use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Url;
use serde_json::{Value, json};

use fairway_core::ProductReference;
use fairway_products::{FilterSelection, GloveSize};
use fairway_storefront::catalog::{CATALOG_EMPTY, CatalogPage, PageSettings};
use fairway_storefront::client::{CatalogClient, FetchError};
use fairway_storefront::collaborators::{InMemoryCart, LocationNavigator};
use fairway_storefront::detail::{AddToCartOutcome, DETAIL_NOT_FOUND, DetailOutcome, DetailPage};
use fairway_storefront::view::{DetailField, DetailPanel, MemoryCatalogView, MemoryDetailView};

/// Fake catalog backend: the same endpoint answers listings and
/// `?referencia=` lookups.
struct FakeBackend {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

fn catalog() -> Value {
    json!([
        {
            "referencia": "AFG-P001", "nombre": "Driver Stealth 2", "marca": "TaylorMade",
            "modelo": "Stealth 2", "categoria": "clubs", "precio": "2450000",
            "imagen_principal": "img/p001.jpg",
            "longitud": "45.75", "loft": 10.5, "lie": null, "peso": "", "flex": "Stiff"
        },
        {
            "referencia": "AFG-G001", "nombre": "Guante Weathersof", "marca": "FootJoy",
            "categoria": "gloves", "precio": 89900,
            "stock_s": "0", "stock_m": "3", "stock_l": null, "stock_xl": 2, "stock_xxl": "n/a"
        },
        {
            "referencia": "AFG-B001", "nombre": "Pro V1", "marca": "Titleist",
            "categoria": "balls", "precio": 215000, "unidades_paquete": "12"
        }
    ])
}

async fn products(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let all = catalog();
    let Some(reference) = params.get("referencia") else {
        return Json(json!({ "success": true, "productos": all }));
    };

    let found = all
        .as_array()
        .and_then(|items| items.iter().find(|p| p["referencia"] == reference.as_str()))
        .cloned();
    match found {
        Some(product) => Json(json!({ "success": true, "producto": product })),
        None => Json(json!({ "success": false, "message": "Producto no encontrado" })),
    }
}

async fn empty() -> Json<Value> {
    Json(json!({ "success": true, "productos": [] }))
}

async fn mixed() -> Json<Value> {
    Json(json!({
        "success": true,
        "productos": [
            { "referencia": "AFG-P001", "nombre": "Driver Stealth 2", "categoria": "clubs" },
            { "referencia": "AFG-P002", "reference": "AFG-P002", "categoria": "clubs" },
            null,
            { "referencia": "AFG-B001", "nombre": "Pro V1", "categoria": "balls" }
        ]
    }))
}

async fn rejected() -> Json<Value> {
    Json(json!({ "success": false }))
}

async fn broken() -> impl IntoResponse {
    (StatusCode::OK, "<html>Fatal error</html>")
}

async fn down() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

impl FakeBackend {
    async fn spawn() -> Self {
        let app = Router::new()
            .route("/api/productos.php", get(products))
            .route("/empty/productos.php", get(empty))
            .route("/mixed/productos.php", get(mixed))
            .route("/rejected/productos.php", get(rejected))
            .route("/broken/productos.php", get(broken))
            .route("/down/productos.php", get(down));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn client(&self, path: &str) -> CatalogClient {
        CatalogClient::new(Url::parse(&format!("{}{}", self.base_url, path)).unwrap())
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn settings() -> PageSettings {
    PageSettings {
        detail_page: "producto.html".to_string(),
        placeholder_image: "img/placeholder.png".to_string(),
    }
}

fn catalog_page(client: CatalogClient) -> CatalogPage<MemoryCatalogView> {
    CatalogPage::new(
        Arc::new(client),
        Arc::new(LocationNavigator::new("index.html")),
        settings(),
        MemoryCatalogView::new(),
    )
}

fn detail_page(client: CatalogClient, location: &str, cart: Arc<InMemoryCart>) -> DetailPage<MemoryDetailView> {
    DetailPage::new(
        Arc::new(client),
        Arc::new(LocationNavigator::new(location)),
        settings(),
        MemoryDetailView::new(),
    )
    .with_cart(cart)
}

#[tokio::test]
async fn catalog_renders_over_http_with_lenient_fields() {
    let backend = FakeBackend::spawn().await;
    let page = catalog_page(backend.client("/api/productos.php"));

    assert_eq!(page.load().await, Some(3));
    {
        let view = page.view().await;
        let cards = view.cards();
        assert_eq!(cards[0].price, "$ 2.450.000");
        assert_eq!(cards[1].size_badges, vec![GloveSize::M, GloveSize::XL]);
        assert_eq!(cards[2].image, "img/placeholder.png");
        assert_eq!(view.brands().to_vec(), vec!["TaylorMade", "FootJoy", "Titleist"]);
    }

    let shown = page
        .apply_filter(FilterSelection::from_inputs(None, Some("Titleist")))
        .await;
    assert_eq!(shown, 1);
}

#[tokio::test]
async fn malformed_rows_do_not_empty_the_catalog() {
    let backend = FakeBackend::spawn().await;
    let page = catalog_page(backend.client("/mixed/productos.php"));

    assert_eq!(page.load().await, Some(2));
    let view = page.view().await;
    let names: Vec<&str> = view.cards().iter().map(|card| card.name.as_str()).collect();
    assert_eq!(names, vec!["Driver Stealth 2", "Pro V1"]);
}

#[tokio::test]
async fn backend_failures_end_in_the_empty_state() {
    let backend = FakeBackend::spawn().await;

    for path in [
        "/empty/productos.php",
        "/rejected/productos.php",
        "/broken/productos.php",
        "/down/productos.php",
        "/missing/productos.php",
    ] {
        let page = catalog_page(backend.client(path));
        assert_eq!(page.load().await, Some(0), "path {path}");
        let view = page.view().await;
        assert_eq!(view.empty_message(), Some(CATALOG_EMPTY), "path {path}");
        assert!(view.cards().is_empty());
    }
}

#[tokio::test]
async fn client_reports_the_failure_cause() {
    let backend = FakeBackend::spawn().await;

    assert!(matches!(
        backend.client("/rejected/productos.php").try_list_products().await,
        Err(FetchError::Rejected)
    ));
    assert!(matches!(
        backend.client("/broken/productos.php").try_list_products().await,
        Err(FetchError::Decode(_))
    ));
    assert!(matches!(
        backend.client("/down/productos.php").try_list_products().await,
        Err(FetchError::Status(500))
    ));

    let reference = ProductReference::new("AFG-B001").unwrap();
    let product = backend
        .client("/api/productos.php")
        .try_find_product(&reference)
        .await
        .unwrap();
    assert_eq!(product.name(), Some("Pro V1"));
}

#[tokio::test]
async fn detail_lookup_miss_shows_not_found() {
    let backend = FakeBackend::spawn().await;
    let page = detail_page(
        backend.client("/api/productos.php"),
        "producto.html?ref=AFG-X404",
        Arc::new(InMemoryCart::new()),
    );

    assert_eq!(page.load_from_location().await, DetailOutcome::NotFound);
    let view = page.view().await;
    assert!(view.is_visible(DetailPanel::Error));
    assert_eq!(view.text(DetailField::Error), Some(DETAIL_NOT_FOUND));
    assert!(!view.is_visible(DetailPanel::Main));
    assert!(!view.is_visible(DetailPanel::Description));
}

#[tokio::test]
async fn glove_goes_to_the_cart_once_a_size_is_picked() {
    let backend = FakeBackend::spawn().await;
    let cart = Arc::new(InMemoryCart::new());
    let page = detail_page(
        backend.client("/api/productos.php"),
        "producto.html?ref=AFG-G001",
        cart.clone(),
    );

    assert_eq!(page.load_from_location().await, DetailOutcome::Shown);
    assert!(matches!(page.add_to_cart().await, AddToCartOutcome::Blocked(_)));
    assert!(cart.lines().is_empty());

    assert!(!page.select_size(GloveSize::L).await);
    assert!(page.select_size(GloveSize::XL).await);
    assert!(matches!(page.add_to_cart().await, AddToCartOutcome::Added(_)));

    let lines = cart.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].id, "AFG-G001-XL");

    let payload = serde_json::to_value(&lines[0]).unwrap();
    assert_eq!(payload["referencia"], "AFG-G001");
    assert_eq!(payload["talla"], "XL");
    assert_eq!(payload["precio"], 89900.0);
    assert_eq!(payload["cantidad"], 1);
}
