use super::super::prelude::*;
use super::size_filter::SizeFilter;

pub struct Actions {
    application: adw::Application,
    size_filter_controller: SizeFilter,
}

impl Actions {
    pub fn new(application: adw::Application, size_filter_controller: SizeFilter) -> Self {
        let this = Self { application, size_filter_controller };
        this.setup_quit_action();
        this.setup_reset_filters_action();
        this
    }

    fn setup_quit_action(&self) {
        let quit_action = gtk::gio::SimpleAction::new("quit", None);
        self.connect_quit_handler(&quit_action);
        self.application.add_action(&quit_action);
        self.application.set_accels_for_action("app.quit", &["<Ctrl>q"]);
    }

    fn connect_quit_handler(&self, quit_action: &gtk::gio::SimpleAction) {
        let application_weak = self.application.downgrade();
        quit_action.connect_activate(move |_action, _| {
            if let Some(application) = application_weak.upgrade() {
                application.quit();
            }
        });
    }

    fn setup_reset_filters_action(&self) {
        let reset_action = gtk::gio::SimpleAction::new("reset-filters", None);
        self.connect_reset_filters_handler(&reset_action);
        self.application.add_action(&reset_action);
        self.application.set_accels_for_action("app.reset-filters", &["<Ctrl>r"]);
    }

    fn connect_reset_filters_handler(&self, reset_action: &gtk::gio::SimpleAction) {
        let size_filter_weak = self.size_filter_controller.downgrade();
        reset_action.connect_activate(move |_action, _| {
            if let Some(size_filter) = size_filter_weak.upgrade() {
                size_filter.reset();
            }
        });
    }

}
