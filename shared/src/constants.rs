pub const LOOPBACK_HOST: &str = "localhost";
pub const DEV_PORT: u16 = 3000;
pub const BACKEND_PORT: u16 = 8000;
pub const HOSTED_SUFFIXES: [&str; 3] = ["replit.app", "repl.co", "replit.dev"];

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

pub const NOTIFICATION_DISPLAY_MS: u32 = 3000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;

pub const INFO_COLOR: &str = "#2196f3";
pub const SUCCESS_COLOR: &str = "#4caf50";
pub const ERROR_COLOR: &str = "#f44336";

pub const ENTER_ANIMATION: &str = "slideIn 0.3s ease-out";
pub const EXIT_ANIMATION: &str = "slideOut 0.3s ease-out";
