use custdash_bridge::post::Post;
use gpui::{IntoElement, ParentElement, Styled, div};
use gpui_component::{ActiveTheme, StyledExt};

/// Posts written by one customer.
#[derive(IntoElement)]
pub struct UserPosts {
    posts: Vec<Post>,
}

impl UserPosts {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }
}

impl gpui::RenderOnce for UserPosts {
    fn render(self, _: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let theme = cx.theme();
        let body = if self.posts.is_empty() {
            div()
                .text_sm()
                .text_color(theme.muted_foreground)
                .child("This customer has no posts.")
        } else {
            div()
                .flex()
                .flex_col()
                .gap_3()
                .children(self.posts.into_iter().map(|post| {
                    div()
                        .p_4()
                        .rounded_lg()
                        .border_1()
                        .border_color(theme.border)
                        .child(div().text_sm().font_semibold().child(post.title))
                        .child(
                            div()
                                .mt_1()
                                .text_sm()
                                .text_color(theme.muted_foreground)
                                .line_clamp(3)
                                .child(post.body),
                        )
                }))
        };

        div()
            .mt_6()
            .rounded_xl()
            .border_1()
            .border_color(theme.border)
            .child(
                div()
                    .px_6()
                    .py_4()
                    .border_b_1()
                    .border_color(theme.border)
                    .text_sm()
                    .font_semibold()
                    .text_color(theme.muted_foreground)
                    .child("Customer posts"),
            )
            .child(div().p_6().child(body))
    }
}
