use super::EmailNotifier;
use crate::connectors::errors::DeliveryError;
use crate::models::BenchmarkReport;
use async_trait::async_trait;
use std::sync::Mutex;

/// Notifier that delivers nothing.
///
/// Installed when email delivery is disabled. Tests use [`recording`] to
/// inspect dispatched reports and [`failing`] to simulate SMTP outages.
///
/// [`recording`]: MockEmailNotifier::recording
/// [`failing`]: MockEmailNotifier::failing
#[derive(Debug, Default)]
pub struct MockEmailNotifier {
    recorded: Option<Mutex<Vec<BenchmarkReport>>>,
    fail: bool,
}

impl MockEmailNotifier {
    pub fn recording() -> Self {
        Self {
            recorded: Some(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::recording()
        }
    }

    pub fn sent(&self) -> Vec<BenchmarkReport> {
        self.recorded
            .as_ref()
            .and_then(|recorded| recorded.lock().ok().map(|reports| reports.clone()))
            .unwrap_or_default()
    }
}

#[async_trait]
impl EmailNotifier for MockEmailNotifier {
    async fn send_report(&self, report: &BenchmarkReport) -> Result<(), DeliveryError> {
        if let Some(recorded) = &self.recorded {
            if let Ok(mut reports) = recorded.lock() {
                reports.push(report.clone());
            }
        }

        if self.fail {
            return Err(DeliveryError::Transport("mock transport failure".to_string()));
        }

        tracing::debug!("Email delivery disabled, report for {} dropped", report.recipient);
        Ok(())
    }
}
