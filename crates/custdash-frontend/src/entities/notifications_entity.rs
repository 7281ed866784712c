use custdash_interaction::Notification;
use gpui::{AppContext, Entity};

/// Mirror of the notification queue's active sequence, refreshed every time
/// the queue publishes a change.
#[derive(Debug, Clone, Default)]
pub struct NotificationsEntity {
    pub active: Vec<Notification>,
}

impl NotificationsEntity {
    pub fn update<C: AppContext>(entity: &Entity<Self>, active: Vec<Notification>, cx: &mut C) {
        entity.update(cx, |this, cx| {
            this.active = active;
            cx.notify();
        });
    }
}
