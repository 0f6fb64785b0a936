use crate::models::{Catalog, Product};

use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use thiserror::Error;

/// The product feed shipped with the application.
pub const BUNDLED_CATALOG: &str = include_str!("../data/products.json");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    #[default]
    Bundled,
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => formatter.write_str("bundled catalog"),
            Self::File(path) => write!(formatter, "{}", path.display()),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalog file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed product data in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads and parses the whole feed. Either every product is available or the
/// call fails; there is no partial catalog.
pub fn load(source: &CatalogSource) -> Result<Catalog, LoadError> {
    let catalog = match source {
        CatalogSource::Bundled => parse(BUNDLED_CATALOG, &source.to_string())?,
        CatalogSource::File(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
                path: path.clone(),
                source,
            })?;
            parse(&text, &source.to_string())?
        }
    };

    for id in catalog.duplicate_ids() {
        tracing::warn!(product_id = %id, %source, "duplicate product id; lookups resolve to the first one");
    }

    tracing::info!(products = catalog.len(), %source, "catalog loaded");
    Ok(catalog)
}

/// Parses a feed held in memory.
pub fn load_from_str(text: &str) -> Result<Catalog, LoadError> {
    parse(text, "inline data")
}

fn parse(text: &str, origin: &str) -> Result<Catalog, LoadError> {
    let products: Vec<Product> = serde_json::from_str(text).map_err(|error| LoadError::Parse {
        origin: origin.to_string(),
        source: error,
    })?;
    Ok(Catalog::new(products))
}

/// What the screens receive: a usable catalog, or the reason there is none.
#[derive(Debug, Clone)]
pub enum CatalogState {
    Ready(Rc<Catalog>),
    Unavailable { reason: String, empty: Rc<Catalog> },
}

impl CatalogState {
    /// Loads once and never fails; a broken feed becomes `Unavailable`.
    #[must_use]
    pub fn load(source: &CatalogSource) -> Self {
        match load(source) {
            Ok(catalog) => Self::ready(catalog),
            Err(error) => {
                tracing::error!(%source, error = %error, "catalog unavailable");
                Self::unavailable(error.to_string())
            }
        }
    }

    #[must_use]
    pub fn ready(catalog: Catalog) -> Self {
        Self::Ready(Rc::new(catalog))
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
            empty: Rc::new(Catalog::empty()),
        }
    }

    /// The catalog to render. Empty when unavailable.
    #[must_use]
    pub fn catalog(&self) -> &Rc<Catalog> {
        match self {
            Self::Ready(catalog) => catalog,
            Self::Unavailable { empty, .. } => empty,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Ready(_) => None,
            Self::Unavailable { reason, .. } => Some(reason),
        }
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}
