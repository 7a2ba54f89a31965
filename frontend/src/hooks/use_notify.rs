use shared::Severity;
use yew::prelude::*;

use crate::toast::toaster;

#[hook]
pub fn use_notify() -> Callback<(String, Severity)> {
    let toaster = use_memo((), |_| toaster());
    Callback::from(move |(message, severity): (String, Severity)| {
        toaster.notify(&message, severity);
    })
}
