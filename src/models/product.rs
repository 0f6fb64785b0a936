use super::size::Size;
use serde::Deserialize;

/// One record of the product feed.
///
/// Field names follow the camelCase feed schema. Fields the browser never
/// renders (tracking identifiers, `productLines` and friends) are ignored on
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "productId")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: u64,
    pub original_price: u64,
    #[serde(default)]
    pub main_image_url: String,
    #[serde(default)]
    pub additional_images: Vec<String>,
    #[serde(default)]
    pub materials: Option<String>,
    #[serde(default)]
    pub shipping_info: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub retailer_name: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<Size>,
}

impl Product {
    #[must_use]
    pub fn has_size(&self, name: &str) -> bool {
        self.sizes.iter().any(|size| size.name == name)
    }

    pub fn size_names(&self) -> impl Iterator<Item = &str> {
        self.sizes.iter().map(|size| size.name.as_str())
    }

    #[must_use]
    pub const fn is_discounted(&self) -> bool {
        self.original_price > self.price
    }

    #[must_use]
    pub fn materials(&self) -> Option<&str> {
        non_blank(self.materials.as_deref())
    }

    #[must_use]
    pub fn shipping_info(&self) -> Option<&str> {
        non_blank(self.shipping_info.as_deref())
    }

    #[must_use]
    pub fn brand_name(&self) -> Option<&str> {
        non_blank(self.brand_name.as_deref())
    }

    #[must_use]
    pub fn retailer_name(&self) -> Option<&str> {
        non_blank(self.retailer_name.as_deref())
    }
}

// Absent and empty annotations render the same way: not at all.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}
