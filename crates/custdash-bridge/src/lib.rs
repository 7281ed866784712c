//! Communication bridge between frontend and backend.
//!
//! This crate defines the domain types and the protocol used to connect the
//! graphical dashboard with the asynchronous backend responsible for talking
//! to the remote customer data source.
//!
//! The design is deliberately lightweight and unidirectional:
//! - The frontend sends commands (e.g., load the customer list, load one
//!   customer's detail, request config).
//! - The backend pushes events (e.g., fetched customers, notifications).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`], providing back-pressure, async compatibility, and
//! clean separation of concerns.

pub mod api_error;
pub mod config;
pub mod notification;
pub mod post;
pub mod user;

use tokio::sync::mpsc::{self, Receiver, Sender};

/// Messages emitted by the backend to inform the frontend of state updates.
///
/// These are typically sent in response to frontend requests or to push
/// asynchronous events (e.g., notifications about failed remote calls).
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// Generic message for all notifications in the application.
    NotificationMessage(notification::NotificationMessage),
    /// Response to the configuration request from the frontend.
    ConfigurationResponse(config::Config),
    /// Response to [`MessageToBackend::UsersRequest`].
    UsersResponse(Result<Vec<user::User>, api_error::ApiError>),
    /// Response to [`MessageToBackend::UserDetailRequest`].
    UserDetailResponse {
        /// Identifier the detail was requested for.
        user_id: u64,
        /// The customer together with their posts, or the normalized failure.
        result: Result<(user::User, Vec<post::Post>), api_error::ApiError>,
    },
}

/// Commands issued by the frontend to control or query the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageToBackend {
    /// Request for the application configuration.
    ConfigurationRequest,
    /// Request for the full customer list.
    UsersRequest,
    /// Request for one customer and their posts.
    UserDetailRequest(u64),
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// frontend and backend.
pub struct BridgeChannels {
    /// Receiver used by the frontend to get messages from the backend.
    pub frontend_rx: Receiver<MessageFromBackend>,
    /// Sender used by the frontend to send commands to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get commands from the frontend.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the frontend.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_are_cross_wired() {
        let mut channels = BridgeChannels::new(4);

        channels
            .frontend_tx
            .try_send(MessageToBackend::UserDetailRequest(7))
            .expect("backend queue should have capacity");
        assert_eq!(
            channels.backend_rx.try_recv().ok(),
            Some(MessageToBackend::UserDetailRequest(7))
        );

        channels
            .backend_tx
            .try_send(MessageFromBackend::UsersResponse(Ok(Vec::new())))
            .expect("frontend queue should have capacity");
        assert!(matches!(
            channels.frontend_rx.try_recv(),
            Ok(MessageFromBackend::UsersResponse(Ok(users))) if users.is_empty()
        ));
    }
}
