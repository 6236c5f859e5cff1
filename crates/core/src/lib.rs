//! `fairway-core`: storefront foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no HTTP, no rendering).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::ProductReference;
pub use value_object::ValueObject;
