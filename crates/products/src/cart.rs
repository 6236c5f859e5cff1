//! Cart line construction (the handoff record for the external cart).

use rust_decimal::Decimal;
use serde::Serialize;

use fairway_core::{DomainError, DomainResult, ValueObject};

use crate::category::{Category, GloveSize};
use crate::product::Product;

/// A normalized product record handed to the cart.
///
/// Distinct glove sizes of the same product are distinct lines: the id is
/// `"{reference}-{size}"` for gloves and the bare reference otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub id: String,
    #[serde(rename = "referencia")]
    pub reference: String,
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "precio", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "imagen")]
    pub image: Option<String>,
    #[serde(rename = "categoria")]
    pub category: Category,
    #[serde(rename = "marca")]
    pub brand: Option<String>,
    #[serde(rename = "modelo")]
    pub model: Option<String>,
    #[serde(rename = "talla")]
    pub size: Option<GloveSize>,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

impl ValueObject for CartLine {}

impl CartLine {
    /// Build the cart line for one unit of `product`.
    ///
    /// Gloves require a size; for every other category the size is dropped.
    pub fn for_product(product: &Product, size: Option<GloveSize>) -> DomainResult<Self> {
        let reference = product
            .reference()
            .ok_or_else(|| DomainError::invalid_reference("product has no reference"))?;

        let category = product.category();
        let size = if category.is_gloves() {
            Some(size.ok_or(DomainError::SizeRequired)?)
        } else {
            None
        };

        let id = match size {
            Some(size) => format!("{reference}-{size}"),
            None => reference.to_string(),
        };

        Ok(Self {
            id,
            reference: reference.to_string(),
            name: product.name().map(str::to_string),
            price: product.price().unwrap_or(Decimal::ZERO),
            image: product.images().main.clone(),
            category,
            brand: product.brand().map(str::to_string),
            model: product.model().map(str::to_string),
            size,
            quantity: 1,
        })
    }
}
