pub mod email_service;
pub mod http_email_service;
pub mod log_email_service;

pub use email_service::{EmailService, EmailTemplate};
pub use http_email_service::HttpEmailService;
pub use log_email_service::LogEmailService;
