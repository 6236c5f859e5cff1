//! Retained in-memory views.
//!
//! They keep the last thing each slot was told to show. The terminal front end
//! prints them and the tests inspect them.

use std::collections::HashMap;

use fairway_products::Category;

use crate::spec_panel::{SizeHint, SizeTag, SpecPanel};
use crate::view::{CatalogView, DetailField, DetailPanel, DetailView, ProductCard, Thumbnail};

/// What the catalog area currently displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogContent {
    #[default]
    Blank,
    Loading(String),
    Empty(String),
    Cards(Vec<ProductCard>),
}

#[derive(Debug, Default)]
pub struct MemoryCatalogView {
    content: CatalogContent,
    categories: Vec<Category>,
    brands: Vec<String>,
    renders: usize,
}

impl MemoryCatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &CatalogContent {
        &self.content
    }

    /// Cards on screen (empty unless the grid is showing).
    pub fn cards(&self) -> &[ProductCard] {
        match &self.content {
            CatalogContent::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn empty_message(&self) -> Option<&str> {
        match &self.content {
            CatalogContent::Empty(message) => Some(message),
            _ => None,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    /// Number of times the grid or empty state was (re)drawn.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl CatalogView for MemoryCatalogView {
    fn show_loading(&mut self, message: &str) {
        self.content = CatalogContent::Loading(message.to_string());
    }

    fn show_empty(&mut self, message: &str) {
        self.content = CatalogContent::Empty(message.to_string());
        self.renders += 1;
    }

    fn show_cards(&mut self, cards: &[ProductCard]) {
        self.content = CatalogContent::Cards(cards.to_vec());
        self.renders += 1;
    }

    fn set_filter_options(&mut self, categories: &[Category], brands: &[String]) {
        self.categories = categories.to_vec();
        self.brands = brands.to_vec();
    }
}

#[derive(Debug, Default)]
pub struct MemoryDetailView {
    texts: HashMap<DetailField, String>,
    visible: HashMap<DetailPanel, bool>,
    main_image: Option<String>,
    thumbnails: Vec<Thumbnail>,
    spec_panel: Option<SpecPanel>,
    add_to_cart_listeners: usize,
}

impl MemoryDetailView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: DetailField) -> Option<&str> {
        self.texts.get(&field).map(String::as_str)
    }

    pub fn is_visible(&self, panel: DetailPanel) -> bool {
        self.visible.get(&panel).copied().unwrap_or(false)
    }

    pub fn main_image(&self) -> Option<&str> {
        self.main_image.as_deref()
    }

    pub fn thumbnails(&self) -> &[Thumbnail] {
        &self.thumbnails
    }

    /// The spec panel, if the spec area is visible.
    pub fn spec_panel(&self) -> Option<&SpecPanel> {
        if self.is_visible(DetailPanel::Specs) {
            self.spec_panel.as_ref()
        } else {
            None
        }
    }

    /// How many listeners the add-to-cart control carries. A click fires each.
    pub fn add_to_cart_listeners(&self) -> usize {
        self.add_to_cart_listeners
    }
}

impl DetailView for MemoryDetailView {
    fn set_text(&mut self, field: DetailField, text: &str) {
        self.texts.insert(field, text.to_string());
    }

    fn set_visible(&mut self, panel: DetailPanel, visible: bool) {
        self.visible.insert(panel, visible);
    }

    fn set_main_image(&mut self, src: &str) {
        self.main_image = Some(src.to_string());
    }

    fn set_thumbnails(&mut self, thumbnails: &[Thumbnail]) {
        self.thumbnails = thumbnails.to_vec();
    }

    fn show_spec_panel(&mut self, panel: &SpecPanel) {
        self.spec_panel = Some(panel.clone());
    }

    fn update_size_picker(&mut self, tags: &[SizeTag], hint: &SizeHint) {
        if let Some(SpecPanel::Gloves {
            tags: current_tags,
            hint: current_hint,
        }) = &mut self.spec_panel
        {
            *current_tags = tags.to_vec();
            *current_hint = hint.clone();
        }
    }

    fn add_to_cart_bound(&self) -> bool {
        self.add_to_cart_listeners > 0
    }

    fn bind_add_to_cart(&mut self) {
        self.add_to_cart_listeners += 1;
    }
}
