//! Email Service connector module
//!
//! Delivers rendered benchmark reports. Delivery is fire-and-forget: the
//! evaluate route hands the report over with [`dispatch`] once its response
//! is final, and delivery failures only ever reach the logs.

use crate::connectors::errors::DeliveryError;
use crate::models::BenchmarkReport;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::Instrument;

pub mod client;
pub mod init;
pub mod mock;

pub use client::SmtpEmailNotifier;
pub use init::init;
pub use mock::MockEmailNotifier;

#[async_trait]
pub trait EmailNotifier: Send + Sync {
    /// Render the report and attempt delivery to `report.recipient`
    async fn send_report(&self, report: &BenchmarkReport) -> Result<(), DeliveryError>;
}

/// Hand a report to the notifier on a detached task.
pub fn dispatch(notifier: Arc<dyn EmailNotifier>, report: BenchmarkReport) {
    let span = tracing::info_span!(
        "send_benchmark_report",
        recipient = %report.recipient,
        category = %report.profile.category
    );

    tokio::spawn(
        async move {
            if let Err(err) = notifier.send_report(&report).await {
                tracing::warn!("Email send error: {}", err);
            }
        }
        .instrument(span),
    );
}
