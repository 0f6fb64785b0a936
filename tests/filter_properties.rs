//! Property tests for size options, the size filter and price formatting.
//!
//! 1. No selection is the identity.
//! 2. Every kept product carries the selected size.
//! 3. Filtering twice equals filtering once.
//! 4. Kept products keep their relative order.
//! 5. Nothing carrying the selected size is dropped.
//! 6. Size options are free of duplicates and cover every size name.
//! 7. Lookup finds the first product with an identifier, or nothing.
//! 8. Price formatting is exact.

use proptest::prelude::*;
use shopfront::{format_price, size_options, Catalog, Product, Repository, Size, SizeFilter};
use std::collections::HashSet;
use std::rc::Rc;

// ── Helpers ─────────────────────────────────────────────────────────────

const SIZE_NAMES: &[&str] = &["XS", "S", "M", "L", "XL", "40", "42", "One Size"];

fn size_name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(SIZE_NAMES).prop_map(ToString::to_string)
}

fn product_strategy() -> impl Strategy<Value = Product> {
    ("[a-e]{1,2}", prop::collection::vec(size_name_strategy(), 0..4), 0u64..100_000).prop_map(
        |(id, sizes, price)| Product {
            name: format!("Product {id}"),
            description: String::new(),
            price,
            original_price: price,
            main_image_url: String::new(),
            additional_images: Vec::new(),
            materials: None,
            shipping_info: None,
            brand_name: None,
            retailer_name: None,
            colors: Vec::new(),
            sizes: sizes
                .into_iter()
                .enumerate()
                .map(|(index, name)| Size::new(format!("{id}-{index}"), name))
                .collect(),
            id,
        },
    )
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(product_strategy(), 0..12)
}

fn positions(products: &[Product], kept: &[&Product]) -> Vec<usize> {
    kept.iter()
        .map(|kept| {
            products
                .iter()
                .position(|product| std::ptr::eq(product, *kept))
                .expect("kept product comes from the input")
        })
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Identity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn no_selection_is_identity(products in catalog_strategy()) {
        let kept = SizeFilter::none().apply(&products);
        let expected: Vec<&Product> = products.iter().collect();
        prop_assert_eq!(kept, expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2–5. Membership, idempotence, order, completeness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn kept_products_carry_the_size(products in catalog_strategy(), size in size_name_strategy()) {
        for product in SizeFilter::size(size.clone()).apply(&products) {
            prop_assert!(product.sizes.iter().any(|entry| entry.name == size));
        }
    }

    #[test]
    fn filtering_is_idempotent(products in catalog_strategy(), size in size_name_strategy()) {
        let filter = SizeFilter::size(size);
        let once = filter.apply(&products);
        let twice = filter.apply(once.iter().copied());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filtering_preserves_order(products in catalog_strategy(), size in size_name_strategy()) {
        let kept = SizeFilter::size(size).apply(&products);
        let positions = positions(&products, &kept);
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "positions {:?}", positions);
    }

    #[test]
    fn filtering_drops_nothing_that_matches(products in catalog_strategy(), size in size_name_strategy()) {
        let kept = SizeFilter::size(size.clone()).apply(&products).len();
        let matching = products.iter().filter(|product| product.has_size(&size)).count();
        prop_assert_eq!(kept, matching);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Size options
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn size_options_are_distinct_and_complete(products in catalog_strategy()) {
        let options = size_options(&products);

        let unique: HashSet<&str> = options.iter().map(|option| option.value.as_str()).collect();
        prop_assert_eq!(unique.len(), options.len());

        let all_names: HashSet<&str> = products.iter().flat_map(Product::size_names).collect();
        prop_assert_eq!(unique, all_names);

        for option in &options {
            prop_assert_eq!(&option.label, &option.value);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Lookup
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn lookup_returns_first_match(products in catalog_strategy(), id in "[a-e]{1,2}") {
        let expected = products.iter().find(|product| product.id == id).cloned();
        let repository = Repository::new(Rc::new(Catalog::new(products)));
        prop_assert_eq!(repository.product_by_id(&id).cloned(), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Price formatting
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn price_formatting_is_exact(amount in any::<u64>()) {
        let formatted = format_price(amount);
        let digits = formatted.strip_prefix('$').expect("currency prefix");
        let (major, minor) = digits.split_once('.').expect("decimal point");

        prop_assert_eq!(minor.len(), 2);
        let major: u64 = major.parse().unwrap();
        let minor: u64 = minor.parse().unwrap();
        prop_assert_eq!(major * 100 + minor, amount);
    }
}
