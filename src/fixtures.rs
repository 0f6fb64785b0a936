use crate::models::{Product, Size};

pub fn product(id: &str, name: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        price: 100,
        original_price: 100,
        main_image_url: String::new(),
        additional_images: Vec::new(),
        materials: None,
        shipping_info: None,
        brand_name: None,
        retailer_name: None,
        colors: Vec::new(),
        sizes: Vec::new(),
    }
}

pub fn sized(id: &str, sizes: &[&str]) -> Product {
    let mut product = product(id, &id.to_uppercase());
    product.sizes = sizes
        .iter()
        .enumerate()
        .map(|(index, name)| Size::new(format!("{id}-{index}"), *name))
        .collect();
    product
}
