mod size;
mod product;
mod catalog;

pub use self::size::Size;
pub use self::product::Product;
pub use self::catalog::Catalog;
