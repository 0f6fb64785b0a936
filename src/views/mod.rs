mod list_view;
mod detail_view;

pub use self::list_view::{ListItem, ListStatus, ListView, NavigationRequest};
pub use self::detail_view::{DetailView, ProductDetails, NOT_FOUND_MESSAGE};
