use gpui::{
    Context, Entity, EventEmitter, IntoElement, ParentElement, Render, Styled, Window, div,
};
use gpui_component::{
    ActiveTheme, IconName, StyledExt,
    button::{Button, ButtonVariants},
};

use crate::{
    BackendBridge,
    components::{user_detail::UserDetail, user_posts::UserPosts},
    entities::{
        DataEntities,
        user_detail_entity::{DetailState, UserDetailEntity},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserDetailPageEvent {
    Back,
}

pub struct UserDetailPage {
    user_id: u64,
    detail: Entity<UserDetailEntity>,
}

impl EventEmitter<UserDetailPageEvent> for UserDetailPage {}

impl UserDetailPage {
    pub fn new(user_id: u64, data: &DataEntities, cx: &mut Context<Self>) -> Self {
        data.user_detail.update(cx, |detail, cx| {
            detail.begin(user_id);
            cx.notify();
        });
        cx.observe(&data.user_detail, |_, _, cx| cx.notify())
            .detach();

        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.request_user_detail(user_id).await;
        })
        .detach();

        Self {
            user_id,
            detail: data.user_detail.clone(),
        }
    }

    fn message(&self, text: String, cx: &Context<Self>) -> impl IntoElement {
        div()
            .text_sm()
            .text_color(cx.theme().muted_foreground)
            .child(text)
    }
}

impl Render for UserDetailPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let body = match &self.detail.read(cx).state {
            DetailState::Loaded { user, posts } if user.id == self.user_id => div()
                .flex()
                .flex_col()
                .gap_6()
                .child(UserDetail::new(user.clone()))
                .child(UserPosts::new(posts.clone()))
                .into_any_element(),
            DetailState::NotFound(_) => self
                .message(format!("Customer #{} was not found.", self.user_id), cx)
                .into_any_element(),
            DetailState::Failed { message, .. } => self
                .message(format!("Could not load the customer: {message}"), cx)
                .into_any_element(),
            _ => self
                .message("Loading customer...".to_owned(), cx)
                .into_any_element(),
        };

        div()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div().child(
                    Button::new("back_to_users")
                        .ghost()
                        .icon(IconName::ArrowLeft)
                        .label("Back to customers")
                        .on_click(cx.listener(|_, _, _, cx| cx.emit(UserDetailPageEvent::Back))),
                ),
            )
            .child(div().child("Customer").text_2xl().font_bold())
            .child(body)
    }
}
