use wasm_bindgen_futures::spawn_local;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting HireWise frontend: initializing runtime config");

    spawn_local(async move {
        hirewise_frontend::config::init().await;
        log::info!("Runtime config initialized");
        hirewise_frontend::mount_app();
    });
}
