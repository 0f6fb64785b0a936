use super::super::prelude::*;
use shopfront::ListItem;

use std::cell::{Cell, RefCell};

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/io/github/shopfront/product_card.ui")]
    #[properties(wrapper_type = super::ProductCard)]
    pub struct ProductCard {
        #[template_child(id = "product-card-image")]
        pub image: TemplateChild<gtk::Image>,
        #[template_child(id = "product-card-brand")]
        pub brand_label: TemplateChild<gtk::Label>,

        #[property(get, set)]
        pub title: RefCell<String>,
        #[property(get, set)]
        pub brand: RefCell<String>,
        #[property(get, set)]
        pub price: RefCell<String>,
        #[property(get, set, name = "image-url")]
        pub image_url: RefCell<String>,

        pub position: Cell<usize>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ProductCard {
        const NAME: &'static str = "ProductCard";
        type Type = super::ProductCard;
        type ParentType = gtk::FlowBoxChild;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for ProductCard {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_notifications();
        }
    }

    impl WidgetImpl for ProductCard {}
    impl FlowBoxChildImpl for ProductCard {}
}

glib::wrapper! {
    pub struct ProductCard(ObjectSubclass<imp::ProductCard>)
        @extends gtk::FlowBoxChild, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl ProductCard {

    fn setup_notifications(&self) {
        self.connect_brand_notify(|card| {
            card.imp().brand_label.set_visible(!card.brand().is_empty());
        });
        self.connect_image_url_notify(|card| {
            let url = card.image_url();
            card.imp().image.set_tooltip_text((!url.is_empty()).then_some(url.as_str()));
        });
    }

    pub fn from_item(item: &ListItem) -> Self {
        let this: Self = glib::Object::builder()
            .property("title", item.name.as_str())
            .property("price", item.price.as_str())
            .build();

        this.set_brand(item.brand.clone().unwrap_or_default());
        this.set_image_url(item.image.clone());
        this.imp().position.set(item.position);
        this
    }

    /// Index of the product in the catalog.
    pub fn position(&self) -> usize {
        self.imp().position.get()
    }

}
