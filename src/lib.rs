mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod session;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use router::mount_app;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting HireWise frontend (wasm)");

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__HIREWISE_ENV is present (env.js), it takes precedence.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    router::mount_app();
}
