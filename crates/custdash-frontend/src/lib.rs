use custdash_bridge::{MessageFromBackend, MessageToBackend};
use custdash_interaction::{NotificationQueue, Notifier};
use gpui::{App, AppContext, Application, Global, WindowOptions};
use gpui_component::Root;
use tokio::{runtime::Runtime, sync::mpsc};

use crate::entities::{
    notifications_entity::NotificationsEntity, settings_entity::SettingsEntity,
    user_detail_entity::UserDetailEntity, users_entity::UsersEntity,
};

pub mod components;
pub mod entities;
pub mod formatting;
mod views;

#[derive(Clone)]
pub struct BackendBridge {
    pub to_backend: mpsc::Sender<MessageToBackend>,
}

impl BackendBridge {
    async fn send(&self, message: MessageToBackend) {
        log::debug!("Sending a message to backend: {message:?}");
        if let Err(e) = self.to_backend.send(message).await {
            log::error!("Backend is gone, dropped {:?}", e.0);
        }
    }

    pub async fn request_config(&self) {
        self.send(MessageToBackend::ConfigurationRequest).await;
    }

    pub async fn request_users(&self) {
        self.send(MessageToBackend::UsersRequest).await;
    }

    pub async fn request_user_detail(&self, user_id: u64) {
        self.send(MessageToBackend::UserDetailRequest(user_id)).await;
    }
}

impl Global for BackendBridge {}

/// Owner of the application's single notification queue and of the runtime
/// its expiry timers run on.
pub struct NotificationCenter {
    queue: NotificationQueue,
    _timers: Runtime,
}

impl Global for NotificationCenter {}

/// Enqueue capability of the application's notification queue.
///
/// # Panics
///
/// Panics when called before [`run`] has installed the queue.
pub fn notifier(cx: &App) -> Notifier {
    match cx.try_global::<NotificationCenter>() {
        Some(center) => center.queue.notifier(),
        None => panic!("notifier requested before the notification center was initialized"),
    }
}

pub fn run(
    mut rx: mpsc::Receiver<MessageFromBackend>,
    tx: mpsc::Sender<MessageToBackend>,
) -> anyhow::Result<()> {
    let timers = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("custdash-timers")
        .enable_time()
        .build()?;
    let queue = NotificationQueue::new(timers.handle().clone());

    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(move |cx| {
        gpui_component::init(cx);

        let data = entities::DataEntities {
            settings: cx.new(|_| SettingsEntity::default()),
            users: cx.new(|_| UsersEntity::default()),
            user_detail: cx.new(|_| UserDetailEntity::default()),
            notifications: cx.new(|_| NotificationsEntity::default()),
        };
        let listener_data = data.clone();

        let notifier = queue.notifier();
        let mut active = queue.subscribe();
        cx.set_global(NotificationCenter {
            queue,
            _timers: timers,
        });
        cx.on_app_quit(|cx| {
            cx.global::<NotificationCenter>().queue.dispose();
            async {}
        })
        .detach();

        let bridge = BackendBridge {
            to_backend: tx.clone(),
        };
        cx.set_global(bridge.clone());

        let notifications = data.notifications.clone();
        cx.spawn(async move |cx| {
            while active.changed().await.is_ok() {
                let current = active.borrow_and_update().clone();
                NotificationsEntity::update(&notifications, current, cx);
            }
        })
        .detach();

        cx.spawn(async move |cx| {
            while let Some(message) = rx.recv().await {
                log::debug!("Got a message from backend: {message:?}");
                match message {
                    MessageFromBackend::ConfigurationResponse(config) => {
                        SettingsEntity::update(&listener_data.settings, config, cx)
                    }
                    MessageFromBackend::NotificationMessage(notification) => {
                        notifier.push(notification.message, notification.notification_type);
                    }
                    MessageFromBackend::UsersResponse(result) => {
                        UsersEntity::update(&listener_data.users, result, cx)
                    }
                    MessageFromBackend::UserDetailResponse { user_id, result } => {
                        UserDetailEntity::update(&listener_data.user_detail, user_id, result, cx)
                    }
                }
            }
            log::info!("Backend channel closed");
        })
        .detach();

        cx.spawn(async move |cx| {
            cx.open_window(WindowOptions::default(), |window, cx| {
                cx.spawn(async move |_| {
                    bridge.request_config().await;
                    bridge.request_users().await;
                })
                .detach();

                let view = cx.new(|cx| crate::views::FrontendUi::new(&data, window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            })?;

            Ok::<_, anyhow::Error>(())
        })
        .detach();
    });

    Ok(())
}
