use gpui::{IntoElement, ParentElement, SharedString, Styled, div, prelude::FluentBuilder};
use gpui_component::ActiveTheme;

/// A labelled value inside one of the detail page's sections.
#[derive(IntoElement)]
pub struct DetailItem {
    label: &'static str,
    child: Option<gpui::AnyElement>,
}

impl DetailItem {
    pub fn new(label: &'static str) -> Self {
        Self { label, child: None }
    }

    pub fn value(self, value: impl Into<SharedString>) -> Self {
        let value: SharedString = value.into();
        self.child(div().text_sm().child(value))
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.child = Some(child.into_any_element());
        self
    }
}

impl gpui::RenderOnce for DetailItem {
    fn render(self, _: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child(self.label),
            )
            .when_some(self.child, |this, child| this.child(child))
    }
}
