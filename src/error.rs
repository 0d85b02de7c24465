use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: status {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("Request error: {0}")]
    RequestError(String),

    #[error("Missing field `{0}` in API response")]
    MissingFieldError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}
