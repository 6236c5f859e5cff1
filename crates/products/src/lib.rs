//! Product catalog domain module.
//!
//! This crate contains the storefront's catalog rules, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no rendering): the product data
//! model as the backend ships it, category dispatch, the filter engine, price
//! formatting and cart line construction.

pub mod cart;
pub mod category;
pub mod filter;
pub mod pricing;
pub mod product;

mod wire;

pub use cart::CartLine;
pub use category::{Category, GloveSize};
pub use filter::{FilterSelection, brand_options, category_options, filter_products};
pub use pricing::format_price;
pub use product::{BallSpecs, ClubSpecs, GloveStock, Product, ProductImages, ProductSpecs, SpecValue};
