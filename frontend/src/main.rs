use frontend::config::detect_api_config;
use frontend::{exports, App, AppProps};
use shared::OriginPolicy;
use yew::Renderer;

fn main() {
    // Initialize the logger for WebAssembly
    wasm_logger::init(wasm_logger::Config::default());

    let config = detect_api_config(&OriginPolicy::default());
    if let Err(err) = exports::install(&config) {
        log::error!("Failed to expose API helpers: {err:?}");
    }

    Renderer::<App>::with_props(AppProps { config }).render();
}
