use yew::prelude::*;

mod components;
mod store;
pub mod api_client;
pub mod common;
pub mod settings;

use crate::common::toast::ToastProvider;
use crate::components::dashboard::Dashboard;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <Dashboard />
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Bank Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Random-data API: {}", settings.source().base_url());

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
