//! Online Store Directory Frontend Entry Point

mod models;
mod error;
mod config;
mod logging;
mod filter;
mod selection;
mod source;
mod loader;
mod store;
mod context;
mod layout;
mod components;
mod app;

use app::App;
use config::DirectoryConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match DirectoryConfig::from_window() {
        Ok(config) => (config, None),
        Err(e) => (DirectoryConfig::default(), Some(e)),
    };
    logging::init(config.level_filter());
    if let Some(e) = config_error {
        log::warn!("[APP] {}; using defaults", e);
    }

    mount_to_body(move || view! { <App config=config /> });
}
