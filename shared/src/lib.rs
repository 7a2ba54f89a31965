pub mod config;
pub mod constants;
pub mod error;
pub mod gateway;
pub mod notification;
pub mod origin;
pub mod presenter;
pub mod request;

#[cfg(test)]
mod test_support;

pub use config::ApiConfig;
pub use error::{ApiError, RenderError, TransportError};
pub use gateway::{Gateway, Transport};
pub use notification::{Notification, NotificationId, Severity};
pub use origin::{DeploymentMode, OriginPolicy, PageLocation};
pub use presenter::{Clock, Presenter, Renderer, Scheduler, SystemClock, TaskHandle};
pub use request::{ApiRequest, Method, RawResponse, RequestOptions};
