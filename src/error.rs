use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid timestamp \"{input}\"")]
    InvalidTimestamp { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Not logged in. Run `adminctl login` first.")]
    NotLoggedIn,

    #[error("{0}")]
    Api(#[from] ApiError),
}

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] ureq::Error),

    #[error("Server returned {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Invalid response from server: {0}")]
    Decode(String),
}
