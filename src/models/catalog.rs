use super::product::Product;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// The full product collection, fixed once built.
///
/// Keeps the feed order and an identifier index pointing at the first
/// product carrying each identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    products_map: HashMap<String, usize>,
    duplicate_ids: Vec<String>,
}

impl Catalog {
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let mut products_map = HashMap::with_capacity(products.len());
        let mut duplicate_ids = Vec::new();

        for (index, product) in products.iter().enumerate() {
            match products_map.entry(product.id.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(index);
                }
                Entry::Occupied(_) => duplicate_ids.push(product.id.clone()),
            }
        }

        Self { products, products_map, duplicate_ids }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products_map
            .get(id)
            .and_then(|&index| self.products.get(index))
    }

    #[must_use]
    pub fn product_by_index(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Identifiers that appeared more than once in the source, in the order
    /// their repeats were seen.
    #[must_use]
    pub fn duplicate_ids(&self) -> &[String] {
        &self.duplicate_ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
