//! Remote fetch errors.

/// Errors from talking to the board service.
///
/// These never reach the rendered UI directly; panels log them and fall
/// back to their empty presentation.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned status {status}")]
    Status { status: u16 },
}
