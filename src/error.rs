use thiserror::Error;

/// Failure talking to the connectivity gateway: either the gateway answered
/// with a non-success status, or the request never completed.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Failure posting to the notification webhook.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("webhook responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Top-level error for a relay run, keeping the two failure domains apart.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}
