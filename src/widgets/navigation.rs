use super::super::prelude::*;
use super::product_list_page::ProductListPage;
use super::product_page::ProductPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPage {
    ProductList,
    Product,
}

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/io/github/shopfront/navigation.ui")]
    pub struct Navigation {
        #[template_child(id = "navigation-view")]
        pub view: TemplateChild<adw::NavigationView>,
        #[template_child(id = "navigation-product-list-page")]
        pub product_list_page: TemplateChild<ProductListPage>,
        #[template_child(id = "navigation-product-page")]
        pub product_page: TemplateChild<ProductPage>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Navigation {
        const NAME: &'static str = "Navigation";
        type Type = super::Navigation;
        type ParentType = adw::Bin;

        fn class_init(class: &mut Self::Class) {
            ProductListPage::ensure_type();
            ProductPage::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for Navigation {}
    impl WidgetImpl for Navigation {}
    impl BinImpl for Navigation {}
}

glib::wrapper! {
    pub struct Navigation(ObjectSubclass<imp::Navigation>)
        @extends adw::Bin, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl Navigation {
    pub fn product_list_page(&self) -> &ProductListPage {
        &self.imp().product_list_page
    }

    pub fn product_page(&self) -> &ProductPage {
        &self.imp().product_page
    }

    fn page_widget(&self, page: NavigationPage) -> adw::NavigationPage {
        match page {
            NavigationPage::ProductList => self.product_list_page().clone().upcast(),
            NavigationPage::Product => self.product_page().clone().upcast(),
        }
    }

    pub fn push_page(&self, page: NavigationPage) {
        self.imp().view.push(&self.page_widget(page));
    }

    pub fn replace_with_page(&self, page: NavigationPage) {
        self.imp().view.replace(&[self.page_widget(page)]);
    }

    pub fn page(&self) -> Option<NavigationPage> {
        let tag = self.imp().view.visible_page()?.tag();

        if self.product_list_page().tag() == tag {
            Some(NavigationPage::ProductList)
        } else if self.product_page().tag() == tag {
            Some(NavigationPage::Product)
        } else {
            None
        }
    }
}
