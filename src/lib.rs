//! Catalog core of the Shopfront browser: the product feed model, its
//! loader, size filtering, detail lookup, price formatting and the view
//! state behind the list and product pages.

pub mod config;
pub mod loader;
pub mod logging;
pub mod models;
pub mod price;
pub mod repository;
pub mod size_filter;
pub mod views;

pub mod ordered_set;

#[cfg(test)]
mod fixtures;

pub use config::Config;
pub use loader::{CatalogSource, CatalogState, LoadError};
pub use models::{Catalog, Product, Size};
pub use price::{format_price, Price};
pub use repository::Repository;
pub use size_filter::{size_options, SizeFilter, SizeOption};
pub use views::{DetailView, ListItem, ListStatus, ListView, NavigationRequest, ProductDetails};
