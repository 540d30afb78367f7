pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
#[cfg(test)]
pub mod test_support;
pub mod utils;

/// Browser entry point: installs the panic hook and logger, starts loading
/// runtime config, then mounts the router.
pub fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting Staffboard frontend");

    leptos::spawn_local(async move {
        config::init().await;
        log::debug!("Runtime config initialized");
    });

    router::mount_app();
}
