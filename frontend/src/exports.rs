//! Bindings for plain scripts on the same page: `apiCall`, `showNotification`,
//! `apiBaseUrl` and the `window.API_BASE_URL` global.

use std::rc::Rc;

use gloo_utils::format::JsValueSerdeExt;
use log::{info, warn};
use once_cell::unsync::OnceCell;
use shared::{ApiConfig, OriginPolicy, RequestOptions, Severity};
use wasm_bindgen::prelude::*;

use crate::api::{gateway, ApiGateway};
use crate::config::detect_api_config;
use crate::toast::{toaster, Toaster};

pub const API_BASE_URL_GLOBAL: &str = "API_BASE_URL";

struct Bindings {
    gateway: Rc<ApiGateway>,
    toaster: Rc<Toaster>,
}

thread_local! {
    static BINDINGS: OnceCell<Bindings> = const { OnceCell::new() };
}

fn gateway_handle() -> Option<Rc<ApiGateway>> {
    BINDINGS.with(|cell| cell.get().map(|b| Rc::clone(&b.gateway)))
}

fn toaster_handle() -> Option<Rc<Toaster>> {
    BINDINGS.with(|cell| cell.get().map(|b| Rc::clone(&b.toaster)))
}

/// Makes `config` available to page scripts. Only the first call takes
/// effect; the origin stays fixed for the page's lifetime.
pub fn install(config: &ApiConfig) -> Result<(), JsValue> {
    let installed = BINDINGS.with(|cell| {
        cell.set(Bindings {
            gateway: Rc::new(gateway(config.clone())),
            toaster: Rc::new(toaster()),
        })
        .is_ok()
    });
    if !installed {
        warn!("API helpers already installed, keeping the first origin");
        return Ok(());
    }

    js_sys::Reflect::set(
        &gloo_utils::window(),
        &JsValue::from_str(API_BASE_URL_GLOBAL),
        &JsValue::from_str(config.base_url()),
    )?;
    info!("API base URL exposed as window.{API_BASE_URL_GLOBAL}");
    Ok(())
}

/// Entry point for pages that load the module without the yew app.
#[wasm_bindgen(js_name = initApiHelpers)]
pub fn init_api_helpers() -> Result<(), JsValue> {
    install(&detect_api_config(&OriginPolicy::default()))
}

#[wasm_bindgen(js_name = apiBaseUrl)]
pub fn api_base_url() -> Option<String> {
    gateway_handle().map(|gateway| gateway.config().base_url().to_string())
}

/// `fetch` wrapper for page scripts. Resolves with the decoded JSON body and
/// rejects with the error message.
#[wasm_bindgen(js_name = apiCall)]
pub async fn api_call(endpoint: String, options: JsValue) -> Result<JsValue, JsValue> {
    let gateway = gateway_handle()
        .ok_or_else(|| JsValue::from_str("API helpers are not initialized"))?;

    let options = if options.is_undefined() || options.is_null() {
        None
    } else {
        Some(
            options
                .into_serde::<RequestOptions>()
                .map_err(|e| JsValue::from_str(&format!("Invalid request options: {e}")))?,
        )
    };

    let value = gateway
        .call(&endpoint, options)
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    JsValue::from_serde(&value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) {
    let severity = kind.as_deref().map(Severity::from_tag).unwrap_or_default();
    match toaster_handle() {
        Some(toaster) => toaster.notify(message, severity),
        None => warn!("Notification dropped, API helpers are not initialized: {message}"),
    }
}
