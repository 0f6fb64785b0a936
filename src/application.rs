use std::cell::RefCell;
use std::rc::Rc;

use super::prelude::*;
use super::constants;
use super::controllers::{ActionsController, ProductActivationController, SizeFilterController};
use super::ui::Ui;
use super::widgets::WindowWidget;
use shopfront::{CatalogState, Config, ListView};

struct Controllers {
    _size_filter: SizeFilterController,
    _product_activation: ProductActivationController,
    _actions: ActionsController,
}

struct ApplicationState {
    application: adw::Application,
    catalog: CatalogState,
    controllers: RefCell<Option<Controllers>>,
}

pub struct Application {
    state: Rc<ApplicationState>,
}

impl Application {

    pub fn new(config: Config) -> Self {
        let application = adw::Application::new(
            Some(constants::APP_ID),
            adw::gio::ApplicationFlags::default()
        );

        tracing::info!(version = constants::APP_VERSION, catalog = %config.catalog, "starting {}", constants::APP_NAME);
        let catalog = CatalogState::load(&config.catalog);

        let state = Rc::new(ApplicationState {
            application,
            catalog,
            controllers: RefCell::new(None),
        });

        Self::setup_signals(&state);

        Self { state }
    }

    fn setup_signals(state: &Rc<ApplicationState>) {
        Self::setup_activate_event(state);
        Self::setup_startup_event(state);
    }

    fn setup_activate_event(state: &Rc<ApplicationState>) {
        let state_weak = Rc::downgrade(state);
        state.application.connect_activate(move |_application| {
            let Some(state) = state_weak.upgrade() else { return };
            let this = Self { state };
            if let Err(error) = this.setup_ui() {
                tracing::error!("failed to build the main window: {error:#}");
            }
        });
    }

    fn setup_startup_event(state: &Rc<ApplicationState>) {
        state.application.connect_startup(move |application| {
            if let Err(error) = Self::setup_resources() {
                tracing::error!("failed to register resources: {error:#}");
                application.quit();
            }
        });
    }

    fn setup_ui(&self) -> Result<()> {
        if let Some(window) = self.state.application.active_window() {
            window.present();
            return Ok(());
        }

        let window = WindowWidget::new(&self.state.application);
        let ui = Ui::new(window);

        // Both pages read the one catalog loaded at startup.
        let list = Rc::new(RefCell::new(ListView::new(self.state.catalog.clone())));

        let size_filter = SizeFilterController::new(ui.clone(), Rc::clone(&list));
        let product_activation = ProductActivationController::new(ui.clone(), list);
        let actions = ActionsController::new(self.state.application.clone(), size_filter.clone());

        *self.state.controllers.borrow_mut() = Some(Controllers {
            _size_filter: size_filter,
            _product_activation: product_activation,
            _actions: actions,
        });

        ui.activate();
        ui.window().present();
        Ok(())
    }

    fn setup_resources() -> Result<()> {
        gtk::glib::set_application_name(constants::APP_TITLE);
        gtk::glib::set_prgname(Some(constants::APP_NAME));

        gtk::gio::resources_register_include_impl(constants::APP_RESOURCES)
            .context("Failed to register compiled resources")?;

        let css_provider = gtk::CssProvider::new();
        css_provider.load_from_resource(&format!("{}/style.css", constants::APP_PREFIX));

        let display = gtk::gdk::Display::default().context("Failed to add style provider")?;

        gtk::style_context_add_provider_for_display(
            &display,
            &css_provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );

        Ok(())
    }

    pub fn activate(&self) -> Result<()> {
        let result = self.state.application.run();
        if matches!(result, adw::glib::ExitCode::FAILURE) {
            bail!("Application exited with code {}", result.get());
        }

        Ok(())
    }

}
