use super::super::prelude::*;
use shopfront::{DetailView, ProductDetails};

const DETAILS_PAGE: &str = "details";
const NOT_FOUND_PAGE: &str = "not-found";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/io/github/shopfront/product_page.ui")]
    pub struct ProductPage {
        #[template_child(id = "product-page-stack")]
        pub stack: TemplateChild<gtk::Stack>,
        #[template_child(id = "product-page-image")]
        pub image: TemplateChild<gtk::Image>,
        #[template_child(id = "product-page-name")]
        pub name: TemplateChild<gtk::Label>,
        #[template_child(id = "product-page-brand")]
        pub brand: TemplateChild<gtk::Label>,
        #[template_child(id = "product-page-price")]
        pub price: TemplateChild<gtk::Label>,
        #[template_child(id = "product-page-original-price")]
        pub original_price: TemplateChild<gtk::Label>,
        #[template_child(id = "product-page-description")]
        pub description: TemplateChild<gtk::Label>,
        #[template_child(id = "product-page-materials")]
        pub materials: TemplateChild<gtk::Label>,
        #[template_child(id = "product-page-shipping-info")]
        pub shipping_info: TemplateChild<gtk::Label>,
        #[template_child(id = "product-page-retailer-row")]
        pub retailer_row: TemplateChild<adw::ActionRow>,
        #[template_child(id = "product-page-colors-row")]
        pub colors_row: TemplateChild<adw::ActionRow>,
        #[template_child(id = "product-page-sizes-row")]
        pub sizes_row: TemplateChild<adw::ActionRow>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ProductPage {
        const NAME: &'static str = "ProductPage";
        type Type = super::ProductPage;
        type ParentType = adw::NavigationPage;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for ProductPage {}
    impl WidgetImpl for ProductPage {}
    impl NavigationPageImpl for ProductPage {}
}

glib::wrapper! {
    pub struct ProductPage(ObjectSubclass<imp::ProductPage>)
        @extends adw::NavigationPage, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

fn set_optional_label(label: &gtk::Label, text: Option<&str>) {
    label.set_label(text.unwrap_or_default());
    label.set_visible(text.is_some());
}

fn set_optional_row(row: &adw::ActionRow, values: &[String]) {
    row.set_subtitle(&glib::markup_escape_text(&values.join(", ")));
    row.set_visible(!values.is_empty());
}

impl ProductPage {

    pub fn show(&self, view: &DetailView) {
        self.set_title(view.title());
        match view {
            DetailView::Found(details) => self.show_details(details),
            DetailView::NotFound => self.imp().stack.set_visible_child_name(NOT_FOUND_PAGE),
        }
    }

    fn show_details(&self, details: &ProductDetails) {
        let imp = self.imp();

        imp.name.set_label(&details.name);
        imp.description.set_label(&details.description);
        imp.price.set_label(&details.price);
        imp.image.set_tooltip_text(Some(details.main_image.as_str()).filter(|url| !url.is_empty()));

        set_optional_label(&imp.brand, details.brand.as_deref());
        set_optional_label(&imp.materials, details.materials.as_deref());
        set_optional_label(&imp.shipping_info, details.shipping_info.as_deref());

        let original_price = details
            .original_price
            .as_deref()
            .map(|price| format!("<s>{}</s>", glib::markup_escape_text(price)));
        set_optional_label(&imp.original_price, original_price.as_deref());

        let retailer: Vec<String> = details.retailer.iter().cloned().collect();
        set_optional_row(&imp.retailer_row, &retailer);
        set_optional_row(&imp.colors_row, &details.colors);
        set_optional_row(&imp.sizes_row, &details.sizes);

        imp.stack.set_visible_child_name(DETAILS_PAGE);
    }
}
