use custdash_bridge::notification::NotificationType;
use custdash_interaction::Notification;
use gpui::{IntoElement, ParentElement, Styled, div, hsla};
use gpui_component::StyledExt;

/// Bottom-right stack of the active notifications, oldest on top.
#[derive(IntoElement)]
pub struct ToastLayer {
    notifications: Vec<Notification>,
}

impl ToastLayer {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }
}

impl gpui::RenderOnce for ToastLayer {
    fn render(self, _: &mut gpui::Window, _: &mut gpui::App) -> impl IntoElement {
        div()
            .absolute()
            .bottom_4()
            .right_4()
            .flex()
            .flex_col()
            .gap_2()
            .children(self.notifications.into_iter().map(|notification| {
                let background = match notification.notification_type {
                    NotificationType::Success => hsla(0.42, 0.72, 0.36, 1.),
                    NotificationType::Error => hsla(0.0, 0.72, 0.48, 1.),
                };
                div()
                    .px_5()
                    .py_3()
                    .rounded_lg()
                    .shadow_lg()
                    .bg(background)
                    .text_sm()
                    .font_semibold()
                    .text_color(hsla(0., 0., 1., 1.))
                    .child(notification.message)
            }))
    }
}
