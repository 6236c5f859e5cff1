//! Storefront front end: catalog client, pages, and their render targets.

pub mod catalog;
pub mod cli;
pub mod client;
pub mod collaborators;
pub mod config;
pub mod detail;
pub mod generation;
pub mod source;
pub mod spec_panel;
pub mod view;

pub use catalog::{CatalogPage, PageSettings};
pub use client::{CatalogClient, FetchError};
pub use collaborators::{CartApi, CartError, InMemoryCart, LocationNavigator, LogNotifier, Navigator, Notifier};
pub use config::StorefrontConfig;
pub use detail::{AddToCartOutcome, DetailOutcome, DetailPage};
pub use source::{CatalogSource, FetchOutcome, InMemoryCatalog};
