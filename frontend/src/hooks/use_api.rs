use std::rc::Rc;

use shared::{ApiConfig, OriginPolicy};
use yew::prelude::*;

use crate::api::{gateway, ApiGateway};
use crate::config::detect_api_config;

/// Gateway bound to the `ApiConfig` from the nearest `ApiProvider`.
/// Outside a provider the origin is detected from the page.
#[hook]
pub fn use_api() -> Rc<ApiGateway> {
    let config = use_context::<ApiConfig>();
    let config = use_memo(config, |config| match config {
        Some(config) => config.clone(),
        None => detect_api_config(&OriginPolicy::default()),
    });
    use_memo(config, |config| gateway((**config).clone()))
}
