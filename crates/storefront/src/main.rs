use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use fairway_core::ProductReference;
use fairway_products::FilterSelection;
use fairway_storefront::catalog::{CatalogPage, PageSettings};
use fairway_storefront::cli::{Cli, Command};
use fairway_storefront::client::CatalogClient;
use fairway_storefront::collaborators::{InMemoryCart, LocationNavigator, LogNotifier, detail_url};
use fairway_storefront::config::StorefrontConfig;
use fairway_storefront::detail::{AddToCartOutcome, DetailPage};
use fairway_storefront::view::terminal::{print_catalog, print_detail};
use fairway_storefront::view::{MemoryCatalogView, MemoryDetailView};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    fairway_observability::init();

    let command = Cli::parse().into_command();

    let config = StorefrontConfig::from_env()?;
    let settings = PageSettings {
        detail_page: config.detail_page.clone(),
        placeholder_image: config.placeholder_image.clone(),
    };
    let source = Arc::new(CatalogClient::new(config.catalog_url.clone()));
    tracing::info!(endpoint = %source.endpoint(), "starting storefront");
    let mut stdout = std::io::stdout().lock();

    match command {
        Command::Catalog { category, brand } => {
            let navigator = Arc::new(LocationNavigator::new("index.html"));
            let page = CatalogPage::new(source, navigator, settings, MemoryCatalogView::new());
            page.load().await;

            let selection = FilterSelection::from_inputs(category.as_deref(), brand.as_deref());
            if !selection.is_empty() {
                page.apply_filter(selection).await;
            }
            print_catalog(&*page.view().await, &mut stdout)?;
        }
        Command::Detail {
            reference,
            size,
            add,
        } => {
            let reference = ProductReference::new(&reference)?;
            let navigator = Arc::new(LocationNavigator::new(detail_url(
                &config.detail_page,
                &reference,
            )));
            let page = DetailPage::new(source, navigator, settings, MemoryDetailView::new())
                .with_cart(Arc::new(InMemoryCart::new()))
                .with_notifier(Arc::new(LogNotifier));
            page.load_from_location().await;

            if let Some(size) = size {
                if !page.select_size(size).await {
                    tracing::warn!(%size, "size not available for this product");
                }
            }
            if add {
                if let AddToCartOutcome::Added(line) = page.add_to_cart().await {
                    writeln!(stdout, "{}", serde_json::to_string_pretty(&line)?)?;
                }
            }
            print_detail(&*page.view().await, &mut stdout)?;
        }
    }

    Ok(())
}
