mod components;
mod config;
mod hooks;
mod models;
mod services;
mod stores;
mod utils;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    if config::CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 MediBook iniciando...");

    yew::Renderer::<App>::new().render();
}
