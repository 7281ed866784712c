/// The core backend state that holds configuration and the shared API client.
///
/// It is designed to be wrapped in thread-safe, async-friendly concurrency
/// primitives (see [`SharedState`]) so handlers running on different tasks
/// can read it concurrently.
#[derive(Debug, Clone)]
pub struct State {
    /// The loaded application configuration.
    pub config: custdash_bridge::config::Config,
    /// Shared client for the remote data source; pooled connections are
    /// reused across requests.
    pub api: crate::api::ApiClient,
}

/// Thread-safe, async-friendly shared reference to the backend [`State`].
pub type SharedState = std::sync::Arc<tokio::sync::RwLock<State>>;
