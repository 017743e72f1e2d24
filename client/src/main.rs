//! CSR entry point: installs the console logger and mounts the app.

use client::app::App;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("could not initialize logger");
    log::info!("starting whiteboard client");
    leptos::mount::mount_to_body(App);
}
