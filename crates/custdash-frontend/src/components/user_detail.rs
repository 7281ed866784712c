use custdash_bridge::user::User;
use gpui::{IntoElement, ParentElement, Styled, div};
use gpui_component::{
    ActiveTheme, StyledExt,
    button::{Button, ButtonVariants},
};

use crate::{
    components::detail_item::DetailItem,
    formatting::{address_lines, avatar_initial, website_url},
};

/// Profile, contact, company and address of one customer.
#[derive(IntoElement)]
pub struct UserDetail {
    user: User,
}

impl UserDetail {
    pub fn new(user: User) -> Self {
        Self { user }
    }
}

fn section(title: &'static str, cx: &gpui::App) -> gpui::Div {
    div().flex().flex_col().gap_2().child(
        div()
            .mb_1()
            .text_sm()
            .font_semibold()
            .text_color(cx.theme().muted_foreground)
            .child(title),
    )
}

impl gpui::RenderOnce for UserDetail {
    fn render(self, _: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let user = self.user;
        let [address_first, address_second] = address_lines(&user.address);
        let url = website_url(&user.website);

        let header = div()
            .flex()
            .items_center()
            .gap_4()
            .px_6()
            .py_4()
            .border_b_1()
            .border_color(cx.theme().border)
            .child(
                div()
                    .size_12()
                    .flex()
                    .items_center()
                    .justify_center()
                    .rounded_full()
                    .bg(cx.theme().accent)
                    .text_lg()
                    .font_semibold()
                    .child(avatar_initial(&user.name)),
            )
            .child(
                div()
                    .child(div().text_xl().font_semibold().child(user.name.clone()))
                    .child(
                        div()
                            .text_sm()
                            .text_color(cx.theme().muted_foreground)
                            .child(format!("@{}", user.username)),
                    ),
            );

        let contact = section("Contact", cx)
            .child(DetailItem::new("Email").value(user.email))
            .child(DetailItem::new("Phone").value(user.phone))
            .child(
                DetailItem::new("Website").child(
                    Button::new("open_website")
                        .link()
                        .label(user.website)
                        .on_click(move |_, _, cx| cx.open_url(&url)),
                ),
            );

        let company = section("Company", cx)
            .child(DetailItem::new("Name").value(user.company.name))
            .child(DetailItem::new("Catch phrase").value(user.company.catch_phrase))
            .child(DetailItem::new("BS").value(user.company.bs));

        let address = section("Address", cx)
            .child(div().text_sm().child(address_first))
            .child(div().text_sm().child(address_second));

        div()
            .rounded_xl()
            .border_1()
            .border_color(cx.theme().border)
            .child(header)
            .child(
                div()
                    .p_6()
                    .flex()
                    .flex_col()
                    .gap_6()
                    .child(div().flex().gap_6().child(contact.flex_1()).child(company.flex_1()))
                    .child(address),
            )
    }
}
