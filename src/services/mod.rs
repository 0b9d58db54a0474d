//! Service layer
//!
//! Business logic over the domain ports: logging in and persisting the
//! credential token, registering students and teachers, and reading the
//! stored token back for authenticated requests.

pub mod login_service;
pub mod registration_service;
pub mod token_service;

pub use login_service::LoginService;
pub use registration_service::RegistrationService;
pub use token_service::TokenService;
