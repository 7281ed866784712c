//! Backend runtime setup and orchestration.
//!
//! This module wires together configuration, shared state, and the message
//! dispatch loop that listens to frontend bridge requests.

use std::{sync::Arc, thread};

use custdash_bridge::{MessageFromBackend, MessageToBackend, config::Config};
use tokio::sync::{
    RwLock,
    mpsc::{Receiver, Sender},
};

use crate::api::ApiClient;
use crate::app::AppContext;
use crate::state::State;

/// Builds the API client for `config`, falling back to the default
/// configuration when the configured URL is unusable.
fn build_api_client(config: Config) -> (Config, ApiClient) {
    match ApiClient::new(&config) {
        Ok(api) => (config, api),
        Err(e) => {
            log::error!("Unusable API configuration ({e}), falling back to defaults");
            let config = Config::default();
            let api = ApiClient::new(&config).expect("failed to build the default API client");
            (config, api)
        }
    }
}

/// Initialize backend state and start processing frontend messages.
async fn setup_backend(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    let config = crate::config::load_config().await.unwrap_or_else(|e| {
        log::error!("Failed to load configuration ({e}), using defaults");
        Config::default()
    });

    let (config, api) = build_api_client(config);
    log::info!("Using customer data source at {}", api.base_url());

    let state = Arc::new(RwLock::new(State { config, api }));
    let context = Arc::new(AppContext { state, tx });
    context.consume_bridge_messages(rx).await;
}

/// Spawn the backend runtime and begin processing bridge messages.
pub fn run(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    thread::Builder::new()
        .name("custdash-backend".to_owned())
        .spawn(move || {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("failed to build tokio runtime");
            runtime.block_on(async { setup_backend(rx, tx).await });
        })
        .expect("failed to spawn the backend thread");
}
