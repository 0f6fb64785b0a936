use crate::loader::CatalogState;
use crate::models::Product;
use crate::price::format_price;
use crate::repository::Repository;
use crate::size_filter::{SizeFilter, SizeOption};

/// One cell of the product grid. `position` is the product's index in the
/// catalog, which stays unique when identifiers repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub position: usize,
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    pub price: String,
    pub image: String,
}

impl ListItem {
    #[must_use]
    pub fn from_product(position: usize, product: &Product) -> Self {
        Self {
            position,
            id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand_name().map(ToString::to_string),
            price: format_price(product.price),
            image: product.main_image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus {
    Products(usize),
    NoMatches,
    Unavailable(String),
}

/// Parameters handed to the detail page when a grid cell is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub position: usize,
    pub product_id: String,
    pub title: String,
}

/// State behind the product list page: the catalog, its size options and
/// the current size selection.
#[derive(Debug, Clone)]
pub struct ListView {
    state: CatalogState,
    repository: Repository,
    options: Vec<SizeOption>,
    filter: SizeFilter,
}

impl ListView {
    #[must_use]
    pub fn new(state: CatalogState) -> Self {
        let repository = Repository::new(state.catalog().clone());
        let options = repository.size_options();
        Self {
            state,
            repository,
            options,
            filter: SizeFilter::none(),
        }
    }

    /// Swaps the catalog. Options are derived again; the selection is kept.
    pub fn replace_catalog(&mut self, state: CatalogState) {
        let repository = Repository::new(state.catalog().clone());
        if !repository.shares_catalog_with(&self.repository) {
            self.options = repository.size_options();
        }
        self.repository = repository;
        self.state = state;
    }

    #[must_use]
    pub const fn repository(&self) -> &Repository {
        &self.repository
    }

    #[must_use]
    pub fn options(&self) -> &[SizeOption] {
        &self.options
    }

    #[must_use]
    pub const fn filter(&self) -> &SizeFilter {
        &self.filter
    }

    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.filter.selection()
    }

    /// Returns whether the selection actually changed.
    pub fn select_size(&mut self, selection: Option<String>) -> bool {
        let filter = SizeFilter::from_selection(selection);
        if filter == self.filter {
            return false;
        }

        tracing::debug!(size = ?filter.selection(), "size filter changed");
        self.filter = filter;
        true
    }

    pub fn reset(&mut self) -> bool {
        self.select_size(None)
    }

    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        self.repository.products_matching(&self.filter)
    }

    /// Catalog positions of the products passing the current filter.
    #[must_use]
    pub fn visible_positions(&self) -> Vec<usize> {
        self.repository.positions_matching(&self.filter)
    }

    #[must_use]
    pub fn items(&self) -> Vec<ListItem> {
        self.visible_positions()
            .into_iter()
            .filter_map(|position| self.item_at(position))
            .collect()
    }

    /// Every product of the catalog, ignoring the filter.
    #[must_use]
    pub fn all_items(&self) -> Vec<ListItem> {
        self.repository
            .products()
            .iter()
            .enumerate()
            .map(|(position, product)| ListItem::from_product(position, product))
            .collect()
    }

    fn item_at(&self, position: usize) -> Option<ListItem> {
        self.repository
            .product_by_index(position)
            .map(|product| ListItem::from_product(position, product))
    }

    #[must_use]
    pub fn status(&self) -> ListStatus {
        if let Some(reason) = self.state.failure() {
            return ListStatus::Unavailable(reason.to_string());
        }

        match self.visible_products().len() {
            0 => ListStatus::NoMatches,
            count => ListStatus::Products(count),
        }
    }

    /// Banner text for the active selection, e.g. `Size: M`.
    #[must_use]
    pub fn selection_label(&self) -> Option<String> {
        self.selection().map(|size| format!("Size: {size}"))
    }

    /// Navigation parameters for the grid cell at `position`.
    #[must_use]
    pub fn open(&self, position: usize) -> Option<NavigationRequest> {
        let product = self.repository.product_by_index(position)?;
        tracing::debug!(position, product_id = %product.id, "opening product");
        Some(NavigationRequest {
            position,
            product_id: product.id.clone(),
            title: product.name.clone(),
        })
    }
}
