use custdash_bridge::MessageFromBackend;

/// Handles an incoming configuration request (see
/// [`custdash_bridge::MessageToBackend::ConfigurationRequest`]) by answering
/// with the configuration the backend is actually using.
pub async fn handle_config_request(context: super::AppContextHandle) {
    let config = context.state.read().await.config.clone();
    log::debug!("Reporting configuration, data source at {}", config.api_url);
    context
        .send(MessageFromBackend::ConfigurationResponse(config))
        .await;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use custdash_bridge::config::Config;
    use tokio::sync::{RwLock, mpsc};

    use super::*;
    use crate::{AppContext, api::ApiClient, state::State};

    #[tokio::test]
    async fn answers_with_the_active_config() {
        let config = Config {
            api_url: "http://localhost:3000".to_owned(),
            ..Config::default()
        };
        let api = ApiClient::new(&config).expect("client should build");
        let (tx, mut rx) = mpsc::channel(1);
        let state = Arc::new(RwLock::new(State {
            config: config.clone(),
            api,
        }));

        handle_config_request(Arc::new(AppContext { state, tx })).await;

        match rx.recv().await {
            Some(MessageFromBackend::ConfigurationResponse(received)) => {
                assert_eq!(received, config)
            }
            other => panic!("expected a configuration response, got {other:?}"),
        }
    }
}
