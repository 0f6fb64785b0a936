use super::super::prelude::*;
use shopfront::SizeOption;

use std::cell::Cell;
use std::sync::OnceLock;

const DEFAULT_INDEX: u32 = 0;
const DEFAULT_LABEL: &str = "All sizes";
const SELECTION_CHANGED_SIGNAL: &str = "selection-changed";

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, glib::Enum)]
#[enum_type(name = "SizeFilterRowState")]
pub enum SizeFilterRowState {
    Active,
    #[default]
    Inactive
}

mod imp {
    use super::*;

    #[derive(gtk::CompositeTemplate)]
    #[template(resource = "/io/github/shopfront/size_filter_row.ui")]
    pub struct SizeFilterRow {
        #[template_child(id = "size-filter-row-drop-down")]
        pub dropdown: TemplateChild<gtk::DropDown>,
        #[template_child(id = "size-filter-row-reset-button")]
        pub reset_button: TemplateChild<gtk::Button>,

        pub state: Cell<SizeFilterRowState>,
        pub model: gtk::StringList,
    }

    impl Default for SizeFilterRow {
        fn default() -> Self {
            Self {
                dropdown: TemplateChild::default(),
                reset_button: TemplateChild::default(),
                state: Cell::new(SizeFilterRowState::Inactive),
                model: gtk::StringList::new(&[DEFAULT_LABEL]),
            }
        }
    }

    #[glib::object_subclass]
    impl ObjectSubclass for SizeFilterRow {
        const NAME: &'static str = "SizeFilterRow";
        type Type = super::SizeFilterRow;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
            Self::Type::ensure_type();
        }

        fn instance_init(initializing_object: &glib::subclass::InitializingObject<Self>) {
            initializing_object.init_template();
        }
    }

    impl ObjectImpl for SizeFilterRow {
        fn constructed(&self) {
            self.parent_constructed();

            self.obj().setup_dropdown();
            self.obj().setup_reset_button();
        }

        fn signals() -> &'static [glib::subclass::Signal] {
            static SIGNALS: OnceLock<[glib::subclass::Signal; 1]> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                [
                    glib::subclass::Signal::builder(SELECTION_CHANGED_SIGNAL)
                        .param_types([<SizeFilterRowState>::static_type()])
                        .build(),
                ]
            })
        }
    }

    impl WidgetImpl for SizeFilterRow {}
    impl BoxImpl for SizeFilterRow {}
}

glib::wrapper! {
    pub struct SizeFilterRow(ObjectSubclass<imp::SizeFilterRow>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl SizeFilterRow {

    fn setup_dropdown(&self) {
        let imp = self.imp();
        imp.dropdown.set_model(Some(&imp.model));

        let this_weak = self.downgrade();
        imp.dropdown.connect_selected_notify(move |_| {
            if let Some(this) = this_weak.upgrade() {
                let state = if this.is_selected_default() {
                    SizeFilterRowState::Inactive
                } else {
                    SizeFilterRowState::Active
                };

                this.apply_state(state);
                this.emit_by_name::<()>(SELECTION_CHANGED_SIGNAL, &[&state]);
            }
        });
    }

    fn setup_reset_button(&self) {
        let this_weak = self.downgrade();
        self.imp().reset_button.connect_clicked(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.select_default_item();
            }
        });
    }

    fn apply_state(&self, state: SizeFilterRowState) {
        let imp = self.imp();
        if imp.state.replace(state) == state {
            return;
        }

        let active = state == SizeFilterRowState::Active;
        imp.reset_button.set_visible(active);
        if active {
            self.add_css_class("active");
        } else {
            self.remove_css_class("active");
        }
    }

    /// Replaces the picker entries. The placeholder stays first and becomes
    /// the selection.
    pub fn set_options(&self, options: &[SizeOption]) {
        let imp = self.imp();
        let labels: Vec<&str> = options.iter().map(|option| option.label.as_str()).collect();

        imp.dropdown.set_selected(DEFAULT_INDEX);
        imp.model.splice(1, imp.model.n_items() - 1, &labels);
    }

    pub fn is_selected_default(&self) -> bool {
        self.imp().dropdown.selected() == DEFAULT_INDEX
    }

    pub fn selected_size(&self) -> Option<String> {
        let imp = self.imp();
        let position = imp.dropdown.selected();
        (position != DEFAULT_INDEX && position != gtk::INVALID_LIST_POSITION)
            .then(|| imp.model.string(position))
            .flatten()
            .map(String::from)
    }

    pub fn select_default_item(&self) {
        self.imp().dropdown.set_selected(DEFAULT_INDEX);
    }

    pub fn connect_selection_changed<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self, SizeFilterRowState) + 'static,
    {
        self.connect_local(SELECTION_CHANGED_SIGNAL, true, move |values| {
            let this = values[0].get::<Self>().ok()?;
            let state = values[1].get::<SizeFilterRowState>().ok()?;
            callback(&this, state);
            None
        })
    }
}
