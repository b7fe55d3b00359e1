//! External Service Connectors
//!
//! Adapters for services outside this process. Routes depend on the connector
//! traits only, so tests can swap in the mocks.
//!
//! 1. Define trait in `{service}/mod.rs`
//! 2. Implement the real client in `{service}/client.rs`
//! 3. Configuration in `config.rs` → enable/disable per environment
//! 4. `init` picks client or mock and wraps it in `web::Data`

pub mod config;
pub mod email_service;
pub mod errors;

pub use config::{ConnectorConfig, EmailServiceConfig};
pub use email_service::{EmailNotifier, MockEmailNotifier, SmtpEmailNotifier};
pub use errors::DeliveryError;

pub use email_service::init as init_email_service;
