use super::super::prelude::*;
use super::product_card::ProductCard;
use super::size_filter_row::SizeFilterRow;
use shopfront::{ListItem, ListStatus};

use std::cell::RefCell;

const PRODUCTS_PAGE: &str = "products";
const STATUS_PAGE: &str = "status";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/io/github/shopfront/product_list_page.ui")]
    pub struct ProductListPage {
        #[template_child(id = "product-list-page-size-filter")]
        pub size_filter: TemplateChild<SizeFilterRow>,
        #[template_child(id = "product-list-page-selection-banner")]
        pub selection_banner: TemplateChild<gtk::Label>,
        #[template_child(id = "product-list-page-stack")]
        pub stack: TemplateChild<gtk::Stack>,
        #[template_child(id = "product-list-page-grid")]
        pub grid: TemplateChild<gtk::FlowBox>,
        #[template_child(id = "product-list-page-status")]
        pub status: TemplateChild<adw::StatusPage>,

        pub cards: RefCell<Vec<ProductCard>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ProductListPage {
        const NAME: &'static str = "ProductListPage";
        type Type = super::ProductListPage;
        type ParentType = adw::NavigationPage;

        fn class_init(class: &mut Self::Class) {
            SizeFilterRow::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for ProductListPage {}
    impl WidgetImpl for ProductListPage {}
    impl NavigationPageImpl for ProductListPage {}
}

glib::wrapper! {
    pub struct ProductListPage(ObjectSubclass<imp::ProductListPage>)
        @extends adw::NavigationPage, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl ProductListPage {

    pub fn size_filter(&self) -> &SizeFilterRow {
        &self.imp().size_filter
    }

    pub fn grid(&self) -> &gtk::FlowBox {
        &self.imp().grid
    }

    pub fn remove_all_cards(&self) {
        let imp = self.imp();
        for card in imp.cards.borrow_mut().drain(..) {
            imp.grid.remove(&card);
        }
    }

    pub fn append_card(&self, item: &ListItem) {
        let card = ProductCard::from_item(item);
        self.imp().grid.append(&card);
        self.imp().cards.borrow_mut().push(card);
    }

    /// Shows the cards the predicate accepts and hides the rest; card order
    /// never changes.
    pub fn apply_card_filter<F>(&self, filter: F)
    where
        F: Fn(&ProductCard) -> bool
    {
        for card in self.imp().cards.borrow().iter() {
            card.set_visible(filter(card));
        }
    }

    pub fn set_selection_label(&self, label: Option<&str>) {
        let banner = &self.imp().selection_banner;
        banner.set_label(label.unwrap_or_default());
        banner.set_visible(label.is_some());
    }

    pub fn show_status(&self, status: &ListStatus) {
        let imp = self.imp();
        match status {
            ListStatus::Products(_) => {
                imp.stack.set_visible_child_name(PRODUCTS_PAGE);
            }
            ListStatus::NoMatches => {
                imp.status.set_icon_name(Some("edit-find-symbolic"));
                imp.status.set_title("No Products");
                imp.status.set_description(Some("No product comes in the selected size"));
                imp.stack.set_visible_child_name(STATUS_PAGE);
            }
            ListStatus::Unavailable(reason) => {
                imp.status.set_icon_name(Some("dialog-warning-symbolic"));
                imp.status.set_title("Catalog Unavailable");
                imp.status.set_description(Some(glib::markup_escape_text(reason).as_str()));
                imp.stack.set_visible_child_name(STATUS_PAGE);
            }
        }
    }
}
