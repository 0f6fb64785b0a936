use crate::models::Product;
use crate::price::format_price;
use crate::repository::Repository;
use super::list_view::NavigationRequest;

pub const NOT_FOUND_MESSAGE: &str = "Product not found";

/// Everything the product page shows, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    pub id: String,
    pub name: String,
    pub brand: Option<String>,
    pub retailer: Option<String>,
    pub description: String,
    pub price: String,
    /// Set only when the product sells below its original price.
    pub original_price: Option<String>,
    pub main_image: String,
    pub additional_images: Vec<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub materials: Option<String>,
    pub shipping_info: Option<String>,
}

impl ProductDetails {
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand_name().map(ToString::to_string),
            retailer: product.retailer_name().map(ToString::to_string),
            description: product.description.clone(),
            price: format_price(product.price),
            original_price: product
                .is_discounted()
                .then(|| format_price(product.original_price)),
            main_image: product.main_image_url.clone(),
            additional_images: product.additional_images.clone(),
            colors: product.colors.clone(),
            sizes: product.size_names().map(ToString::to_string).collect(),
            materials: product.materials().map(|materials| format!("Materials: {materials}")),
            shipping_info: product.shipping_info().map(|info| format!("Shipping Info: {info}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Found(ProductDetails),
    NotFound,
}

impl DetailView {
    /// Resolves the identifier received from navigation. A missing
    /// identifier and an unknown one both end up as `NotFound`.
    #[must_use]
    pub fn open(repository: &Repository, product_id: Option<&str>) -> Self {
        let Some(product_id) = product_id else {
            tracing::warn!("product page opened without an id");
            return Self::NotFound;
        };

        match repository.product_by_id(product_id) {
            Some(product) => Self::Found(ProductDetails::from_product(product)),
            None => {
                tracing::warn!(product_id, "product not found");
                Self::NotFound
            }
        }
    }

    /// Resolves a navigation request from the grid. The request's catalog
    /// position picks the exact product when identifiers repeat; a stale
    /// position falls back to the identifier.
    #[must_use]
    pub fn open_request(repository: &Repository, request: Option<&NavigationRequest>) -> Self {
        let Some(request) = request else {
            return Self::open(repository, None);
        };

        match repository
            .product_by_index(request.position)
            .filter(|product| product.id == request.product_id)
        {
            Some(product) => Self::Found(ProductDetails::from_product(product)),
            None => Self::open(repository, Some(&request.product_id)),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Found(details) => &details.name,
            Self::NotFound => NOT_FOUND_MESSAGE,
        }
    }

    #[must_use]
    pub const fn details(&self) -> Option<&ProductDetails> {
        match self {
            Self::Found(details) => Some(details),
            Self::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{product, sized};
    use crate::models::Catalog;
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    fn repository(products: Vec<Product>) -> Repository {
        Repository::new(Rc::new(Catalog::new(products)))
    }

    #[test]
    fn renders_every_field() {
        let mut shirt = sized("shirt", &["S", "M"]);
        shirt.name = "Linen Shirt".into();
        shirt.description = "Washed linen".into();
        shirt.price = 5900;
        shirt.original_price = 7900;
        shirt.main_image_url = "main.jpg".into();
        shirt.additional_images = vec!["back.jpg".into()];
        shirt.materials = Some("100% linen".into());
        shirt.shipping_info = Some("Ships in 2 days".into());
        shirt.brand_name = Some("Northbound".into());
        shirt.colors = vec!["Sand".into()];

        let view = DetailView::open(&repository(vec![shirt]), Some("shirt"));

        assert_eq!(
            view,
            DetailView::Found(ProductDetails {
                id: "shirt".into(),
                name: "Linen Shirt".into(),
                brand: Some("Northbound".into()),
                retailer: None,
                description: "Washed linen".into(),
                price: "$59.00".into(),
                original_price: Some("$79.00".into()),
                main_image: "main.jpg".into(),
                additional_images: vec!["back.jpg".into()],
                colors: vec!["Sand".into()],
                sizes: vec!["S".into(), "M".into()],
                materials: Some("Materials: 100% linen".into()),
                shipping_info: Some("Shipping Info: Ships in 2 days".into()),
            })
        );
        assert_eq!(view.title(), "Linen Shirt");
    }

    #[test]
    fn empty_and_absent_annotations_render_nothing() {
        let mut with_empty = product("a", "A");
        with_empty.materials = Some(String::new());
        with_empty.shipping_info = Some(String::new());
        let absent = product("b", "B");

        let repository = repository(vec![with_empty, absent]);

        for id in ["a", "b"] {
            let view = DetailView::open(&repository, Some(id));
            let details = view.details().unwrap();
            assert_eq!(details.materials, None);
            assert_eq!(details.shipping_info, None);
        }
    }

    #[test]
    fn full_price_has_no_original_price_line() {
        let details = ProductDetails::from_product(&product("a", "A"));
        assert_eq!(details.original_price, None);
        assert_eq!(details.price, "$1.00");
    }

    #[test]
    fn unknown_or_missing_id_is_not_found() {
        let repository = repository(vec![product("a", "A")]);

        assert_eq!(DetailView::open(&repository, Some("z")), DetailView::NotFound);
        assert_eq!(DetailView::open(&repository, None), DetailView::NotFound);
        assert_eq!(DetailView::NotFound.title(), "Product not found");
    }

    #[test]
    fn request_position_picks_among_repeated_ids() {
        let repository = repository(vec![product("a", "First"), product("a", "Second")]);
        let request = |position| NavigationRequest {
            position,
            product_id: "a".into(),
            title: String::new(),
        };

        assert_eq!(DetailView::open_request(&repository, Some(&request(1))).title(), "Second");
        assert_eq!(DetailView::open_request(&repository, Some(&request(0))).title(), "First");
        assert_eq!(DetailView::open_request(&repository, Some(&request(7))).title(), "First");
        assert_eq!(DetailView::open_request(&repository, None), DetailView::NotFound);
    }
}
