mod widgets;
mod controllers;
mod constants;
mod application;
mod prelude;
mod ui;

fn main() -> anyhow::Result<()> {
    let config = shopfront::Config::from_env();
    shopfront::logging::init(&config);
    application::Application::new(config).activate()
}
