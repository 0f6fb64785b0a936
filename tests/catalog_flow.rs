//! End-to-end flows through the list and product pages' view state.

use pretty_assertions::assert_eq;
use shopfront::loader::{self, CatalogSource};
use shopfront::{CatalogState, DetailView, ListStatus, ListView, NavigationRequest};

const TWO_PRODUCTS: &str = r#"[
    {"productId": "a", "name": "Alpha", "price": 1050, "originalPrice": 1050,
     "sizes": [{"id": "a-m", "name": "M"}]},
    {"productId": "b", "name": "Beta", "price": 999, "originalPrice": 1999,
     "sizes": [{"id": "b-l", "name": "L"}]}
]"#;

fn two_product_view() -> ListView {
    ListView::new(CatalogState::ready(loader::load_from_str(TWO_PRODUCTS).unwrap()))
}

fn visible_ids(view: &ListView) -> Vec<String> {
    view.items().into_iter().map(|item| item.id).collect()
}

#[test]
fn filter_then_reset_restores_full_catalog() {
    let mut view = two_product_view();

    view.select_size(Some("M".to_string()));
    assert_eq!(visible_ids(&view), ["a"]);

    view.reset();
    assert_eq!(visible_ids(&view), ["a", "b"]);
    assert_eq!(view.status(), ListStatus::Products(2));
}

#[test]
fn size_options_cover_both_products() {
    let view = two_product_view();
    let labels: Vec<&str> = view.options().iter().map(|option| option.label.as_str()).collect();
    assert_eq!(labels, ["M", "L"]);
}

#[test]
fn lookup_hits_and_misses() {
    let view = two_product_view();

    let found = DetailView::open(view.repository(), Some("b"));
    let details = found.details().expect("product b is in the catalog");
    assert_eq!(details.id, "b");
    assert_eq!(details.price, "$9.99");
    assert_eq!(details.original_price.as_deref(), Some("$19.99"));

    assert_eq!(DetailView::open(view.repository(), Some("z")), DetailView::NotFound);
}

#[test]
fn activating_an_item_opens_its_details() {
    let mut view = two_product_view();
    view.select_size(Some("L".to_string()));

    let item = view.items().into_iter().next().unwrap();
    let request = view.open(item.position).unwrap();
    assert_eq!(
        request,
        NavigationRequest { position: 1, product_id: "b".into(), title: "Beta".into() }
    );

    let detail = DetailView::open(view.repository(), Some(&request.product_id));
    assert_eq!(detail.title(), "Beta");
}

#[test]
fn repeated_ids_only_show_products_with_the_selected_size() {
    let feed = r#"[
        {"productId": "a", "name": "A1", "price": 100, "originalPrice": 100,
         "sizes": [{"id": "a1-m", "name": "M"}]},
        {"productId": "a", "name": "A2", "price": 100, "originalPrice": 100,
         "sizes": [{"id": "a2-l", "name": "L"}]}
    ]"#;
    let mut view = ListView::new(CatalogState::ready(loader::load_from_str(feed).unwrap()));

    view.select_size(Some("M".to_string()));
    let items = view.items();
    assert_eq!(items.len(), 1);
    assert_eq!(view.visible_positions(), [0]);

    view.select_size(Some("L".to_string()));
    let request = view.open(view.visible_positions()[0]).unwrap();
    let detail = DetailView::open_request(view.repository(), Some(&request));
    assert_eq!(detail.title(), "A2");
}

#[test]
fn bundled_catalog_browses_end_to_end() {
    let state = CatalogState::load(&CatalogSource::Bundled);
    assert!(state.is_ready());

    let mut view = ListView::new(state);
    let total = view.items().len();
    assert!(total > 0);

    for option in view.options().to_vec() {
        view.select_size(Some(option.value.clone()));
        let items = view.items();
        assert!(!items.is_empty(), "size {} has no products", option.value);
        assert!(items.len() <= total);

        for item in &items {
            let detail = DetailView::open(view.repository(), Some(&item.id));
            let details = detail.details().unwrap();
            assert!(details.sizes.contains(&option.value));
        }
    }

    view.reset();
    assert_eq!(view.items().len(), total);
}

#[test]
fn malformed_feed_renders_an_empty_unavailable_list() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "[{\"productId\": ").unwrap();

    let state = CatalogState::load(&CatalogSource::File(file.path().to_path_buf()));
    let mut view = ListView::new(state);

    assert!(view.items().is_empty());
    assert!(view.options().is_empty());
    assert!(matches!(view.status(), ListStatus::Unavailable(_)));

    view.select_size(Some("M".into()));
    assert!(view.items().is_empty());
    assert_eq!(DetailView::open(view.repository(), Some("a")), DetailView::NotFound);
}
