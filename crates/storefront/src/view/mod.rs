//! Render targets.
//!
//! Pages never touch a concrete UI. They push plain view models through these
//! traits (set a text, toggle a panel, swap an image source), which keeps the
//! filtering, formatting and cart gating testable without a browser.

pub mod memory;
pub mod terminal;

use fairway_core::ProductReference;
use fairway_products::{Category, GloveSize};

use crate::spec_panel::{SizeHint, SizeTag, SpecPanel};

pub use memory::{MemoryCatalogView, MemoryDetailView};

/// A product card in the catalog grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub reference: Option<ProductReference>,
    pub name: String,
    pub price: String,
    pub image: String,
    /// In-stock glove sizes; always empty for other categories.
    pub size_badges: Vec<GloveSize>,
    /// Detail page link. Cards without a reference have none and are inert.
    pub href: Option<String>,
}

impl ProductCard {
    pub fn is_clickable(&self) -> bool {
        self.href.is_some()
    }
}

pub trait CatalogView: Send {
    fn show_loading(&mut self, message: &str);
    fn show_empty(&mut self, message: &str);
    fn show_cards(&mut self, cards: &[ProductCard]);
    fn set_filter_options(&mut self, categories: &[Category], brands: &[String]);
}

/// Text slots of the detail view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DetailField {
    Reference,
    Name,
    Brand,
    Model,
    Category,
    Price,
    Description,
    Error,
}

/// Panels of the detail view that can be shown or hidden.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DetailPanel {
    Loading,
    Error,
    Main,
    Description,
    Specs,
}

/// Which secondary product image a thumbnail points at.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ImageAngle {
    Front,
    Top,
    Side,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub angle: ImageAngle,
    pub src: String,
}

pub trait DetailView: Send {
    fn set_text(&mut self, field: DetailField, text: &str);
    fn set_visible(&mut self, panel: DetailPanel, visible: bool);
    fn set_main_image(&mut self, src: &str);
    fn set_thumbnails(&mut self, thumbnails: &[Thumbnail]);
    fn show_spec_panel(&mut self, panel: &SpecPanel);
    fn update_size_picker(&mut self, tags: &[SizeTag], hint: &SizeHint);

    /// Whether the add-to-cart control already has its listener.
    fn add_to_cart_bound(&self) -> bool;
    fn bind_add_to_cart(&mut self);
}
