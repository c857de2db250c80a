use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Transport failure or a non-2xx HTTP status from the PCP API.
    #[error("{0}")]
    Network(String),

    /// A 2xx response whose body is not the JSON we expected.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Caller-supplied input rejected before any network call.
    #[error("{0}")]
    Validation(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    /// Message suitable for showing to the user as-is.
    ///
    /// Falls back to `fallback` when the underlying message is empty.
    pub fn display_message(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
