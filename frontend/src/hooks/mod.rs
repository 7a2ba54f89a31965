pub mod use_api;
pub mod use_notify;

pub use use_api::*;
pub use use_notify::*;
