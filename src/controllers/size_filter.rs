use super::super::ui::Ui;
use shopfront::ListView;

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};

struct State {
    ui: Ui,
    list: Rc<RefCell<ListView>>
}

pub struct WeakSizeFilter {
    state: Weak<State>
}

impl WeakSizeFilter {
    pub fn upgrade(&self) -> Option<SizeFilter> {
        self.state.upgrade().map(|state| SizeFilter { state })
    }
}

#[derive(Clone)]
pub struct SizeFilter {
    state: Rc<State>
}

impl SizeFilter {

    pub fn new(ui: Ui, list: Rc<RefCell<ListView>>) -> Self {
        let state = State { ui, list };
        let this = Self { state: Rc::new(state) };
        this.populate();
        this.setup_selection_changed();
        this.update_product_list();
        this
    }

    /// Returns false when there was no selection to clear.
    pub fn reset(&self) -> bool {
        let size_filter = self.state.ui.size_filter();
        if size_filter.is_selected_default() {
            return false;
        }

        size_filter.select_default_item();
        true
    }

    fn populate(&self) {
        let list = self.state.list.borrow();
        let page = self.state.ui.product_list_page();

        page.remove_all_cards();
        for item in list.all_items() {
            page.append_card(&item);
        }

        self.state.ui.size_filter().set_options(list.options());
    }

    fn setup_selection_changed(&self) {
        let this_weak = self.downgrade();
        self.state.ui.size_filter().connect_selection_changed(move |row, _| {
            if let Some(this) = this_weak.upgrade() {
                this.select_size(row.selected_size());
            }
        });
    }

    fn select_size(&self, selection: Option<String>) {
        let changed = self.state.list.borrow_mut().select_size(selection);
        if changed {
            self.update_product_list();
        }
    }

    fn update_product_list(&self) {
        let list = self.state.list.borrow();
        let page = self.state.ui.product_list_page();
        let visible: HashSet<usize> = list.visible_positions().into_iter().collect();

        page.apply_card_filter(|card| visible.contains(&card.position()));
        page.set_selection_label(list.selection_label().as_deref());
        page.show_status(&list.status());
    }

    pub fn downgrade(&self) -> WeakSizeFilter {
        let state = Rc::downgrade(&self.state);
        WeakSizeFilter { state }
    }
}
