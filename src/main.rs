//! Tix Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod logging;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use tix_core::ClientConfig;

fn main() {
    console_error_panic_hook::set_once();
    let (config, config_error) = match storage::client_config() {
        Ok(config) => (config, None),
        Err(e) => (ClientConfig::default(), Some(e)),
    };
    logging::init(config.log_level);
    if let Some(e) = config_error {
        log::warn!("{}, using default configuration", e);
    }
    log::info!("starting Tix frontend");
    mount_to_body(move || view! { <App config=config /> });
}
