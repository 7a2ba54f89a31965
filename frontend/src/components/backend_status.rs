use serde::Deserialize;
use shared::Severity;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::{use_api, use_notify};
use crate::styles;

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct RootMessage {
    message: String,
}

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Checking,
    Online(String),
    Offline(String),
}

/// Pings the backend root and reports the outcome.
#[function_component(BackendStatus)]
pub fn backend_status() -> Html {
    let api = use_api();
    let notify = use_notify();
    let status = use_state(|| Status::Checking);

    let check = {
        let api = api.clone();
        let notify = notify.clone();
        let status = status.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            let notify = notify.clone();
            let status = status.clone();
            status.set(Status::Checking);
            spawn_local(async move {
                match api.call_as::<RootMessage>("/", None).await {
                    Ok(root) => {
                        notify.emit(("Backend reachable".to_string(), Severity::Success));
                        status.set(Status::Online(root.message));
                    }
                    Err(err) => {
                        notify.emit((err.to_string(), Severity::Error));
                        status.set(Status::Offline(err.to_string()));
                    }
                }
            });
        })
    };

    {
        let check = check.clone();
        use_effect_with((), move |_| {
            check.emit(());
            || ()
        });
    }

    let onclick = {
        let check = check.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            check.emit(());
        })
    };

    html! {
        <div class={styles::CARD}>
            <h2 class={styles::TEXT_H2}>{"Backend"}</h2>
            <p class={styles::TEXT_SMALL}>{api.config().base_url().to_string()}</p>
            <p class={styles::TEXT_SMALL}>{api.config().mode().to_string()}</p>
            {match &*status {
                Status::Checking => html! { <p class={styles::TEXT_BODY}>{"Checking..."}</p> },
                Status::Online(message) => html! { <p class={styles::TEXT_SUCCESS}>{message.clone()}</p> },
                Status::Offline(error) => html! { <p class={styles::TEXT_ERROR}>{error.clone()}</p> },
            }}
            <button onclick={onclick} class={styles::BUTTON_PRIMARY}>{"Check again"}</button>
        </div>
    }
}
