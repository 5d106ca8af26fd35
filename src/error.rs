//! Host startup errors.

/// Failure while configuring or starting the host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),

    /// Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// Binding or serving failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
