use super::models::{Catalog, Product};
use super::size_filter::{self, SizeFilter, SizeOption};

use std::rc::Rc;

/// Read-only queries over the shared catalog. Cloning shares the catalog.
#[derive(Debug, Clone)]
pub struct Repository {
    catalog: Rc<Catalog>,
}

impl Repository {

    #[must_use]
    pub const fn new(catalog: Rc<Catalog>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Rc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    #[must_use]
    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.catalog.product_by_id(id)
    }

    #[must_use]
    pub fn product_by_index(&self, index: usize) -> Option<&Product> {
        self.catalog.product_by_index(index)
    }

    #[must_use]
    pub fn size_options(&self) -> Vec<SizeOption> {
        size_filter::size_options(self.catalog.products())
    }

    #[must_use]
    pub fn products_matching(&self, filter: &SizeFilter) -> Vec<&Product> {
        filter.apply(self.catalog.products())
    }

    /// Catalog positions of the matching products, in catalog order.
    #[must_use]
    pub fn positions_matching(&self, filter: &SizeFilter) -> Vec<usize> {
        self.catalog
            .products()
            .iter()
            .enumerate()
            .filter(|(_, product)| filter.matches(product))
            .map(|(position, _)| position)
            .collect()
    }

    /// True when both repositories read the very same catalog value.
    #[must_use]
    pub fn shares_catalog_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.catalog, &other.catalog)
    }

}
