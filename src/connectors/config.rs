use serde::{Deserialize, Serialize};

/// Configuration for external service connectors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectorConfig {
    #[serde(default)]
    pub email_service: Option<EmailServiceConfig>,
}

/// SMTP delivery of benchmark reports
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailServiceConfig {
    /// Enable/disable report delivery
    pub enabled: bool,
    /// SMTP relay host (env: SMTP_HOST)
    pub host: String,
    /// SMTP port (env: SMTP_PORT)
    pub port: u16,
    /// Require STARTTLS; plain SMTP when false
    pub tls: bool,
    /// SMTP user (env: SMTP_USER)
    #[serde(skip_serializing)]
    pub username: Option<String>,
    /// SMTP password (env: SMTP_PASS)
    #[serde(skip_serializing)]
    pub password: Option<String>,
    /// Sender address (env: SMTP_FROM)
    pub from_address: String,
    /// Call-to-action link at the bottom of the report
    pub demo_url: String,
    /// SMTP socket timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EmailServiceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            host: "localhost".to_string(),
            port: 587,
            tls: true,
            username: None,
            password: None,
            from_address: "benchmark@example.com".to_string(),
            demo_url: "https://example.com/demo".to_string(),
            timeout_secs: 15,
        }
    }
}

impl EmailServiceConfig {
    /// Overlay the SMTP_* variables the service has always been configured with.
    /// A complete host/user/password triple switches delivery on.
    pub fn apply_env(&mut self) {
        self.apply_vars(|name| std::env::var(name).ok());
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(host) = var("SMTP_HOST") {
            self.host = host;
        }
        if let Some(port) = var("SMTP_PORT").and_then(|port| port.parse().ok()) {
            self.port = port;
        }
        if let Some(username) = var("SMTP_USER") {
            self.username = Some(username);
        }
        if let Some(password) = var("SMTP_PASS") {
            self.password = Some(password);
        }
        if let Some(from) = var("SMTP_FROM") {
            self.from_address = from;
        }
        if var("SMTP_HOST").is_some() && self.has_credentials() {
            self.enabled = true;
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}
