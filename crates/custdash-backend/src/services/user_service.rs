use custdash_bridge::{
    MessageFromBackend, api_error::ApiError, notification::NotificationType, post::Post,
    user::User,
};

use crate::api::ApiClient;

/// Fetches a customer and then their posts; the first failure wins.
async fn fetch_user_detail(api: &ApiClient, id: u64) -> Result<(User, Vec<Post>), ApiError> {
    let user = api.fetch_user_by_id(id).await?;
    let posts = api.fetch_posts_by_user_id(id).await?;
    Ok((user, posts))
}

/// Handles an incoming customer list request (see
/// [`custdash_bridge::MessageToBackend::UsersRequest`]).
pub async fn handle_users_request(context: super::AppContextHandle) {
    let api = {
        let state = context.state.read().await;
        state.api.clone()
    };

    let result = api.fetch_users().await;
    match &result {
        Ok(users) => log::info!("Fetched {} customers", users.len()),
        Err(e) => {
            log::error!("Failed to fetch customers: {e} (status {})", e.status);
            context
                .send_notification(NotificationType::Error, e.message.clone())
                .await;
        }
    }

    context.send(MessageFromBackend::UsersResponse(result)).await;
}

/// Handles an incoming customer detail request (see
/// [`custdash_bridge::MessageToBackend::UserDetailRequest`]).
pub async fn handle_user_detail_request(context: super::AppContextHandle, user_id: u64) {
    let api = {
        let state = context.state.read().await;
        state.api.clone()
    };

    let result = fetch_user_detail(&api, user_id).await;
    match &result {
        Ok((_, posts)) => log::info!("Fetched customer {user_id} with {} posts", posts.len()),
        Err(e) => {
            log::error!("Failed to fetch customer {user_id}: {e} (status {})", e.status);
            context
                .send_notification(NotificationType::Error, e.message.clone())
                .await;
        }
    }

    context
        .send(MessageFromBackend::UserDetailResponse { user_id, result })
        .await;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use custdash_bridge::{config::Config, notification::NotificationMessage};
    use tokio::sync::{RwLock, mpsc};

    use super::*;
    use crate::{AppContext, state::State};

    fn unreachable_context() -> (crate::services::AppContextHandle, mpsc::Receiver<MessageFromBackend>) {
        let config = Config {
            api_url: "http://127.0.0.1:1".to_owned(),
            request_timeout_ms: 2_000,
        };
        let api = ApiClient::new(&config).expect("client should build");
        let (tx, rx) = mpsc::channel(8);
        let state = Arc::new(RwLock::new(State { config, api }));
        (Arc::new(AppContext { state, tx }), rx)
    }

    #[tokio::test]
    async fn failed_list_fetch_notifies_and_responds() {
        let (context, mut rx) = unreachable_context();

        handle_users_request(context).await;

        let Some(MessageFromBackend::NotificationMessage(NotificationMessage {
            notification_type,
            message,
        })) = rx.recv().await
        else {
            panic!("expected an error notification first");
        };
        assert_eq!(notification_type, NotificationType::Error);
        assert!(!message.is_empty());

        match rx.recv().await {
            Some(MessageFromBackend::UsersResponse(Err(e))) => assert_eq!(e.status, 0),
            other => panic!("expected a failed users response, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_detail_fetch_keeps_requested_id() {
        let (context, mut rx) = unreachable_context();

        handle_user_detail_request(context, 42).await;

        assert!(matches!(
            rx.recv().await,
            Some(MessageFromBackend::NotificationMessage(_))
        ));
        match rx.recv().await {
            Some(MessageFromBackend::UserDetailResponse { user_id, result }) => {
                assert_eq!(user_id, 42);
                assert!(result.is_err());
            }
            other => panic!("expected a user detail response, got {other:?}"),
        }
    }
}
