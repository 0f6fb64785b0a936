mod window;
mod navigation;
mod size_filter_row;
mod product_list_page;
mod product_card;
mod product_page;

pub use self::window::Window as WindowWidget;
pub use self::navigation::{Navigation as NavigationWidget, NavigationPage};
pub use self::size_filter_row::SizeFilterRow as SizeFilterRowWidget;
pub use self::product_list_page::ProductListPage as ProductListPageWidget;
pub use self::product_card::ProductCard as ProductCardWidget;
pub use self::product_page::ProductPage as ProductPageWidget;
