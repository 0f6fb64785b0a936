use crate::models::Product;
use crate::ordered_set::OrderedSet;

/// One entry of the size picker. Label and value are both the size name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeOption {
    pub label: String,
    pub value: String,
}

impl SizeOption {
    fn from_name(name: &str) -> Self {
        Self {
            label: name.to_string(),
            value: name.to_string(),
        }
    }
}

/// Distinct size names across all products, in order of first appearance.
#[must_use]
pub fn size_options(products: &[Product]) -> Vec<SizeOption> {
    products
        .iter()
        .flat_map(Product::size_names)
        .collect::<OrderedSet<&str>>()
        .iter()
        .map(|name| SizeOption::from_name(name))
        .collect()
}

/// The active size constraint of the product list, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeFilter {
    selection: Option<String>,
}

impl SizeFilter {
    #[must_use]
    pub const fn none() -> Self {
        Self { selection: None }
    }

    /// An empty name is the picker placeholder and means no constraint.
    pub fn size(name: impl Into<String>) -> Self {
        Self::from_selection(Some(name.into()))
    }

    #[must_use]
    pub fn from_selection(selection: Option<String>) -> Self {
        Self {
            selection: selection.filter(|name| !name.is_empty()),
        }
    }

    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.selection.is_some()
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.selection
            .as_deref()
            .is_none_or(|name| product.has_size(name))
    }

    /// Keeps the products carrying the selected size, in their input order.
    /// Without a selection every product is kept.
    pub fn apply<'a, I>(&self, products: I) -> Vec<&'a Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        products
            .into_iter()
            .filter(|product| self.matches(product))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sized;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|product| product.id.clone()).collect()
    }

    #[test]
    fn options_are_distinct_and_in_first_seen_order() {
        let products = vec![
            sized("a", &["M", "L"]),
            sized("b", &["S", "M"]),
            sized("c", &[]),
            sized("d", &["L", "XL"]),
        ];

        let names: Vec<String> = size_options(&products).into_iter().map(|option| option.value).collect();
        assert_eq!(names, ["M", "L", "S", "XL"]);
    }

    #[test]
    fn option_label_equals_value() {
        let options = size_options(&[sized("a", &["One Size"])]);
        assert_eq!(options, [SizeOption { label: "One Size".into(), value: "One Size".into() }]);
    }

    #[test]
    fn no_selection_keeps_everything() {
        let products = vec![sized("a", &["M"]), sized("b", &[])];
        let filtered = SizeFilter::none().apply(&products);
        assert_eq!(ids(&filtered), ["a", "b"]);
    }

    #[test]
    fn selection_keeps_matching_products_in_order() {
        let products = vec![
            sized("a", &["M"]),
            sized("b", &["L"]),
            sized("c", &["S", "M"]),
        ];

        let filtered = SizeFilter::size("M").apply(&products);
        assert_eq!(ids(&filtered), ["a", "c"]);
    }

    #[test]
    fn matching_is_exact() {
        let products = vec![sized("a", &["m"]), sized("b", &["M "])];
        assert!(SizeFilter::size("M").apply(&products).is_empty());
    }

    #[test]
    fn unknown_size_yields_empty_result() {
        let products = vec![sized("a", &["M"])];
        assert!(SizeFilter::size("XXL").apply(&products).is_empty());
    }

    #[test]
    fn applying_twice_changes_nothing() {
        let products = vec![sized("a", &["M"]), sized("b", &["L"]), sized("c", &["M"])];
        let filter = SizeFilter::size("M");

        let once = filter.apply(&products);
        let twice = filter.apply(once.iter().copied());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_selection_is_no_selection() {
        assert_eq!(SizeFilter::size(""), SizeFilter::none());
        assert!(!SizeFilter::from_selection(Some(String::new())).is_active());
        assert_eq!(SizeFilter::size("M").selection(), Some("M"));
    }
}
