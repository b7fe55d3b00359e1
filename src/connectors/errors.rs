/// Errors that can occur while delivering a benchmark report.
///
/// Delivery is best effort: these are logged by the dispatcher and never
/// reach the HTTP caller.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// Template rendering failed
    #[error("Render error: {0}")]
    Render(String),
    /// Sender or recipient address could not be parsed, or the message could not be built
    #[error("Invalid message: {0}")]
    InvalidMessage(String),
    /// SMTP transport setup or send failure
    #[error("Transport error: {0}")]
    Transport(String),
    /// The blocking send task did not complete
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<lettre::error::Error> for DeliveryError {
    fn from(err: lettre::error::Error) -> Self {
        Self::InvalidMessage(err.to_string())
    }
}

impl From<lettre::address::AddressError> for DeliveryError {
    fn from(err: lettre::address::AddressError) -> Self {
        Self::InvalidMessage(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for DeliveryError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
