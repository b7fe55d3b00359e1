use super::EmailNotifier;
use crate::connectors::config::EmailServiceConfig;
use crate::connectors::errors::DeliveryError;
use crate::models::BenchmarkReport;
use crate::services::ReportRenderer;
use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::time::Duration;

/// SMTP implementation of [`EmailNotifier`]
pub struct SmtpEmailNotifier {
    config: EmailServiceConfig,
    renderer: ReportRenderer,
}

impl SmtpEmailNotifier {
    pub fn new(config: EmailServiceConfig) -> anyhow::Result<Self> {
        let renderer = ReportRenderer::new(config.demo_url.clone())?;
        Ok(Self { config, renderer })
    }

    fn create_smtp_transport(&self) -> Result<SmtpTransport, DeliveryError> {
        let builder = if self.config.tls {
            SmtpTransport::starttls_relay(&self.config.host)?
        } else {
            SmtpTransport::builder_dangerous(&self.config.host)
        };

        let mut builder = builder
            .port(self.config.port)
            .timeout(Some(Duration::from_secs(self.config.timeout_secs)));

        if let (Some(username), Some(password)) = (&self.config.username, &self.config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(builder.build())
    }

    pub fn build_message(&self, report: &BenchmarkReport) -> Result<Message, DeliveryError> {
        let html = self
            .renderer
            .render(report)
            .map_err(|err| DeliveryError::Render(format!("{:#}", err)))?;

        let from: Mailbox = self.config.from_address.parse()?;
        let to: Mailbox = report.recipient.parse()?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(report.subject())
            .header(ContentType::TEXT_HTML)
            .body(html)?;

        Ok(message)
    }
}

#[async_trait]
impl EmailNotifier for SmtpEmailNotifier {
    async fn send_report(&self, report: &BenchmarkReport) -> Result<(), DeliveryError> {
        let message = self.build_message(report)?;
        let transport = self.create_smtp_transport()?;

        // lettre's SmtpTransport blocks on socket IO
        tokio::task::spawn_blocking(move || transport.send(&message))
            .await
            .map_err(|err| DeliveryError::Internal(err.to_string()))??;

        tracing::info!("Benchmark email sent to: {}", report.recipient);
        Ok(())
    }
}
