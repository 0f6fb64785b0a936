mod size_filter;
mod product_activation;
mod actions;

pub use self::size_filter::SizeFilter as SizeFilterController;
pub use self::product_activation::ProductActivation as ProductActivationController;
pub use self::actions::Actions as ActionsController;
