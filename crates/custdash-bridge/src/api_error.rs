/// Uniform shape of every remote-call failure.
///
/// The backend converts transport errors, non-success statuses and undecodable
/// bodies into this type, so the frontend never branches on transport-specific
/// error shapes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable description of the failure.
    pub message: String,
    /// HTTP status of the failed response, or `0` when no response was
    /// received.
    pub status: u16,
    /// Raw JSON body of the failed response, if there was one.
    pub data: Option<serde_json::Value>,
}

impl ApiError {
    /// Returns `true` when the remote source answered with `404 Not Found`.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}
