use actix_web::web;
use std::sync::Arc;

use crate::connectors::config::ConnectorConfig;
use crate::connectors::email_service::{mock, EmailNotifier, SmtpEmailNotifier};

/// Initialize the Email Service connector from Settings and SMTP_* variables
///
/// Returns the notifier wrapped in web::Data for injection into the Actix app.
/// Falls back to the mock whenever delivery is disabled or cannot be set up.
pub fn init(connector_config: &ConnectorConfig) -> web::Data<Arc<dyn EmailNotifier>> {
    let mut config = connector_config.email_service.clone().unwrap_or_default();
    config.apply_env();

    let notifier: Arc<dyn EmailNotifier> = if !config.enabled {
        tracing::warn!("Email connector disabled - benchmark reports will not be sent");
        Arc::new(mock::MockEmailNotifier::default())
    } else if !config.has_credentials() {
        tracing::warn!("Email connector enabled without SMTP_USER/SMTP_PASS - using mock");
        Arc::new(mock::MockEmailNotifier::default())
    } else {
        match SmtpEmailNotifier::new(config.clone()) {
            Ok(client) => {
                tracing::info!("Email connector initialized ({}:{})", config.host, config.port);
                Arc::new(client)
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    "Failed to initialize email connector, falling back to mock"
                );
                Arc::new(mock::MockEmailNotifier::default())
            }
        }
    };

    web::Data::new(notifier)
}
