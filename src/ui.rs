use super::widgets::{
    NavigationPage,
    WindowWidget,
    NavigationWidget,
    ProductListPageWidget,
    ProductPageWidget,
    SizeFilterRowWidget
};

use std::rc::Rc;

#[derive(Clone)]
pub struct Ui {
    window: Rc<WindowWidget>
}

impl Ui {

    pub fn new(window: WindowWidget) -> Self {
        Self { window: Rc::new(window) }
    }

    pub fn activate(&self) {
        self.navigation().replace_with_page(NavigationPage::ProductList);
    }

    pub fn window(&self) -> &WindowWidget {
        &self.window
    }

    pub fn navigation(&self) -> &NavigationWidget {
        self.window.navigation()
    }

    pub fn product_list_page(&self) -> &ProductListPageWidget {
        self.navigation().product_list_page()
    }

    pub fn size_filter(&self) -> &SizeFilterRowWidget {
        self.product_list_page().size_filter()
    }

    pub fn product_page(&self) -> &ProductPageWidget {
        self.navigation().product_page()
    }

}
