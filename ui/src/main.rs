//! StoreWatch UI Entry Point
//!
//! This is the main entry point for the StoreWatch WASM application.
//! It loads the bundled configuration, initializes logging and mounts the
//! Leptos app to the DOM.

use leptos::*;
use storewatch_shared::DashboardConfig;
use storewatch_ui::{config, App};
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    let loaded = config::bundled();
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();

    let layer_config = WASMLayerConfigBuilder::default()
        .set_max_level(config::tracing_level(level))
        .build();
    tracing_wasm::set_as_global_default_with_config(layer_config);

    let dashboard_config = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Invalid bundled configuration, using defaults");
        DashboardConfig::default()
    });

    tracing::info!(version = %dashboard_config.app.version, "Starting StoreWatch UI");

    mount_to_body(move || view! { <App config=dashboard_config /> });
}
