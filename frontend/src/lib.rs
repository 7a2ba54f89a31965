pub mod api;
pub mod components;
pub mod config;
pub mod exports;
pub mod hooks;
pub mod styles;
pub mod toast;

use shared::ApiConfig;
use yew::prelude::*;

use crate::components::{ApiProvider, BackendStatus};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: ApiConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ApiProvider config={props.config.clone()}>
            <div class="min-h-screen w-full">
                <div class={styles::CONTAINER_SM}>
                    <BackendStatus />
                </div>
            </div>
        </ApiProvider>
    }
}
