//! Catalog filter engine.

use fairway_core::ValueObject;

use crate::category::Category;
use crate::product::Product;

/// Equality predicates picked in the catalog filter bar.
///
/// `None` means "no constraint". Both predicates are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub category: Option<Category>,
    pub brand: Option<String>,
}

impl ValueObject for FilterSelection {}

impl FilterSelection {
    /// Build a selection from raw form values; blank means unset.
    pub fn from_inputs(category: Option<&str>, brand: Option<&str>) -> Self {
        let non_blank = |raw: Option<&str>| {
            raw.map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        Self {
            category: non_blank(category).map(|tag| Category::from_tag(&tag)),
            brand: non_blank(brand),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.brand.is_none()
    }

    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self
            .category
            .as_ref()
            .is_none_or(|category| *category == product.category());
        let brand_ok = self
            .brand
            .as_deref()
            .is_none_or(|brand| product.brand() == Some(brand));
        category_ok && brand_ok
    }
}

/// Keep the products matching every set predicate, in input order.
pub fn filter_products<'a>(products: &'a [Product], selection: &FilterSelection) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| selection.matches(product))
        .collect()
}

/// Distinct non-empty brands, in first-seen order.
pub fn brand_options(products: &[Product]) -> Vec<String> {
    let mut brands: Vec<String> = Vec::new();
    for brand in products.iter().filter_map(Product::brand) {
        if !brands.iter().any(|seen| seen == brand) {
            brands.push(brand.to_string());
        }
    }
    brands
}

/// Category choices offered by the filter bar, in menu order.
pub fn category_options() -> Vec<Category> {
    Category::KNOWN.to_vec()
}
