pub mod api_provider;
pub mod backend_status;

pub use api_provider::ApiProvider;
pub use backend_status::BackendStatus;
