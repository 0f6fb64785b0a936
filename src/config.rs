use crate::loader::CatalogSource;

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

pub const CATALOG_VARIABLE: &str = "SHOPFRONT_CATALOG";
pub const LOG_VARIABLE: &str = "SHOPFRONT_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub catalog: CatalogSource,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogSource::Bundled,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Reads only the variables this crate owns, so unrelated variables
    /// holding non-UTF-8 data are never decoded.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(
            [CATALOG_VARIABLE, LOG_VARIABLE]
                .into_iter()
                .filter_map(|key| std::env::var_os(key).map(|value| (key, value)))
        )
    }

    /// Blank values count as unset. The catalog path is taken as raw OS
    /// text; a log directive that is not UTF-8 is ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<OsStr>,
        V: Into<OsString>,
    {
        let mut config = Self::default();

        for (key, value) in vars {
            let value: OsString = value.into();
            if is_blank(&value) {
                continue;
            }

            match key.as_ref().to_str() {
                Some(CATALOG_VARIABLE) => config.catalog = CatalogSource::File(catalog_path(value)),
                Some(LOG_VARIABLE) => {
                    if let Some(filter) = value.to_str() {
                        config.log_filter = filter.trim().to_string();
                    }
                }
                _ => {}
            }
        }

        config
    }
}

fn is_blank(value: &OsStr) -> bool {
    value.to_str().is_some_and(|text| text.trim().is_empty())
}

fn catalog_path(value: OsString) -> PathBuf {
    match value.into_string() {
        Ok(text) => PathBuf::from(text.trim()),
        Err(raw) => PathBuf::from(raw),
    }
}
