use super::super::prelude::*;
use super::super::ui::Ui;
use super::super::widgets::{NavigationPage, ProductCardWidget};
use shopfront::{DetailView, ListView};

use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct State {
    ui: Ui,
    list: Rc<RefCell<ListView>>
}

struct WeakProductActivation {
    state: Weak<State>
}

impl WeakProductActivation {
    fn upgrade(&self) -> Option<ProductActivation> {
        self.state.upgrade().map(|state| ProductActivation { state })
    }
}

pub struct ProductActivation {
    state: Rc<State>
}

impl ProductActivation {

    pub fn new(ui: Ui, list: Rc<RefCell<ListView>>) -> Self {
        let state = State { ui, list };
        let this = Self { state: Rc::new(state) };
        this.setup_cards_activation();
        this
    }

    fn setup_cards_activation(&self) {
        let this_weak = self.downgrade();
        self.state.ui.product_list_page().grid().connect_child_activated(move |_, child| {
            if let Some(this) = this_weak.upgrade()
                && let Some(card) = child.downcast_ref::<ProductCardWidget>()
            {
                this.navigate_to_product_page(card.position());
            }
        });
    }

    fn navigate_to_product_page(&self, position: usize) {
        let list = self.state.list.borrow();
        let request = list.open(position);
        let view = DetailView::open_request(list.repository(), request.as_ref());

        self.state.ui.product_page().show(&view);

        if self.state.ui.navigation().page() != Some(NavigationPage::Product) {
            self.state.ui.navigation().push_page(NavigationPage::Product);
        }
    }

    fn downgrade(&self) -> WeakProductActivation {
        let state = Rc::downgrade(&self.state);
        WeakProductActivation { state }
    }

}
