use gpui::{
    ClickEvent, Context, Entity, EventEmitter, InteractiveElement, IntoElement, ParentElement,
    Render, StatefulInteractiveElement, Styled, Window, div,
};
use gpui_component::{
    ActiveTheme, IconName, StyledExt,
    button::{Button, ButtonVariants},
};

use crate::entities::{
    DataEntities,
    settings_entity::SettingsEntity,
    users_entity::{LoadState, UsersEntity},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsersPageEvent {
    OpenUser(u64),
    CreateUser,
    Reload,
}

pub struct UsersPage {
    users: Entity<UsersEntity>,
    settings: Entity<SettingsEntity>,
}

impl EventEmitter<UsersPageEvent> for UsersPage {}

impl UsersPage {
    pub fn new(data: &DataEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&data.users, |_, _, cx| cx.notify()).detach();
        cx.observe(&data.settings, |_, _, cx| cx.notify()).detach();
        Self {
            users: data.users.clone(),
            settings: data.settings.clone(),
        }
    }
}

impl Render for UsersPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let users = self.users.read(cx);
        let source = self
            .settings
            .read(cx)
            .data_source()
            .map(|url| format!("Source: {url}"))
            .unwrap_or_else(|| "Connecting to the data source...".to_owned());
        let theme = cx.theme();

        let body = match &users.state {
            LoadState::Loading => div()
                .text_sm()
                .text_color(theme.muted_foreground)
                .child("Loading customers...")
                .into_any_element(),
            LoadState::Failed(message) if users.users.is_empty() => div()
                .flex()
                .flex_col()
                .gap_3()
                .items_start()
                .child(div().text_sm().child(format!("Could not load customers: {message}")))
                .child(
                    Button::new("reload_users")
                        .outline()
                        .label("Try again")
                        .on_click(cx.listener(|_, _, _, cx| cx.emit(UsersPageEvent::Reload))),
                )
                .into_any_element(),
            _ if users.users.is_empty() => div()
                .text_sm()
                .text_color(theme.muted_foreground)
                .child("There are no customers yet.")
                .into_any_element(),
            _ => div()
                .rounded_xl()
                .border_1()
                .border_color(theme.border)
                .children(users.users.iter().map(|user| {
                    let id = user.id;
                    div()
                        .id(("user_row", id as usize))
                        .flex()
                        .items_center()
                        .justify_between()
                        .px_4()
                        .py_3()
                        .border_b_1()
                        .border_color(theme.border)
                        .cursor_pointer()
                        .hover(|style| style.bg(theme.accent))
                        .on_click(cx.listener(move |_, _: &ClickEvent, _, cx| {
                            cx.emit(UsersPageEvent::OpenUser(id))
                        }))
                        .child(
                            div()
                                .flex()
                                .flex_col()
                                .child(div().font_semibold().child(user.name.clone()))
                                .child(
                                    div()
                                        .text_sm()
                                        .text_color(theme.muted_foreground)
                                        .child(user.email.clone()),
                                ),
                        )
                        .child(div().text_sm().child(user.company.name.clone()))
                }))
                .into_any_element(),
        };

        div()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .child(div().child("Customers").text_2xl().font_bold())
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(theme.muted_foreground)
                                    .child(source),
                            ),
                    )
                    .child(
                        Button::new("create_user")
                            .primary()
                            .icon(IconName::Plus)
                            .label("New customer")
                            .on_click(cx.listener(|_, _, _, cx| cx.emit(UsersPageEvent::CreateUser))),
                    ),
            )
            .child(body)
    }
}
