use custdash_bridge::user::NewUser;
use custdash_interaction::{CloseReason, CreateRecordFlow, Field, FlowHost};
use gpui::{
    AppContext, Context, Entity, EventEmitter, Focusable, InteractiveElement, IntoElement,
    KeyDownEvent, MouseButton, MouseDownEvent, ParentElement, Render, Styled, Subscription,
    Window, div, hsla, prelude::FluentBuilder, px,
};
use gpui_component::{
    ActiveTheme, Disableable, IconName, Sizable, StyledExt,
    button::{Button, ButtonVariants},
    input::{Input, InputEvent, InputState},
};

/// Outcomes of the modal, forwarded to whoever owns it.
#[derive(Debug, Clone)]
pub enum CreateUserModalEvent {
    Created(NewUser),
    Closed,
}

/// Collects the flow's callbacks so they can be emitted once the flow has
/// finished its transition.
#[derive(Default)]
struct PendingEvents(Vec<CreateUserModalEvent>);

impl FlowHost for PendingEvents {
    fn record_created(&mut self, record: NewUser) {
        self.0.push(CreateUserModalEvent::Created(record));
    }

    fn close(&mut self) {
        self.0.push(CreateUserModalEvent::Closed);
    }
}

pub struct CreateUserModal {
    flow: CreateRecordFlow,
    name_input: Entity<InputState>,
    email_input: Entity<InputState>,
    company_input: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl EventEmitter<CreateUserModalEvent> for CreateUserModal {}

impl CreateUserModal {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let name_input = cx.new(|cx| InputState::new(window, cx).placeholder("Full name"));
        let email_input = cx.new(|cx| InputState::new(window, cx).placeholder("mail@example.com"));
        let company_input = cx.new(|cx| InputState::new(window, cx).placeholder("Company name"));

        let _subscriptions = vec![
            Self::bind_input(&name_input, Field::Name, window, cx),
            Self::bind_input(&email_input, Field::Email, window, cx),
            Self::bind_input(&company_input, Field::Company, window, cx),
        ];

        Self {
            flow: CreateRecordFlow::new(),
            name_input,
            email_input,
            company_input,
            _subscriptions,
        }
    }

    /// Keeps the flow's value for `field` in sync with the input and marks the
    /// field touched when the input loses focus.
    fn bind_input(
        input: &Entity<InputState>,
        field: Field,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Subscription {
        cx.subscribe_in(input, window, move |this, state, event: &InputEvent, _, cx| {
            let value = state.read(cx).value().to_string();
            if this.flow.value(field) != value {
                this.flow.edit(field, value);
            }
            if matches!(event, InputEvent::Blur) {
                this.flow.blur(field);
            }
            cx.notify();
        })
    }

    pub fn is_open(&self) -> bool {
        self.flow.is_open()
    }

    /// Opens the modal with empty inputs and focuses the name field.
    pub fn open(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.flow.is_open() {
            return;
        }

        for input in [&self.name_input, &self.email_input, &self.company_input] {
            input.update(cx, |state, cx| state.set_value("", window, cx));
        }
        self.flow.open();

        let focus = self.name_input.read(cx).focus_handle(cx);
        window.focus(&focus);
        cx.notify();
    }

    fn finish(&mut self, events: PendingEvents, cx: &mut Context<Self>) {
        for event in events.0 {
            cx.emit(event);
        }
        cx.notify();
    }

    fn dismiss(&mut self, reason: CloseReason, cx: &mut Context<Self>) {
        let mut events = PendingEvents::default();
        self.flow.close(reason, &mut events);
        self.finish(events, cx);
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        let notifier = crate::notifier(cx);
        let mut events = PendingEvents::default();
        self.flow.submit(&notifier, &mut events);
        self.finish(events, cx);
    }

    fn on_key_down(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let key = event.keystroke.key.as_str();
        if key == "enter" {
            self.submit(cx);
            cx.stop_propagation();
            return;
        }

        let mut events = PendingEvents::default();
        if self.flow.handle_key(key, &mut events) {
            cx.stop_propagation();
        }
        self.finish(events, cx);
    }

    fn field_row(
        &self,
        label: &'static str,
        field: Field,
        input: &Entity<InputState>,
    ) -> impl IntoElement {
        let error = self.flow.visible_error(field);
        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(div().text_sm().font_semibold().child(label))
            .child(Input::new(input))
            .when_some(error, |this, error| {
                this.child(
                    div()
                        .text_xs()
                        .text_color(hsla(0.0, 0.72, 0.48, 1.))
                        .child(error),
                )
            })
    }
}

impl Render for CreateUserModal {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if !self.flow.is_open() {
            return div().into_any_element();
        }

        let dialog = div()
            .occlude()
            .w(px(440.))
            .p_6()
            .rounded_xl()
            .shadow_xl()
            .bg(cx.theme().background)
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(div().text_lg().font_semibold().child("New customer"))
                    .child(
                        Button::new("close_create_user")
                            .icon(IconName::Close)
                            .outline()
                            .small()
                            .on_click(cx.listener(|this, _, _, cx| {
                                this.dismiss(CloseReason::CloseButton, cx)
                            })),
                    ),
            )
            .child(self.field_row("Name", Field::Name, &self.name_input))
            .child(self.field_row("Email", Field::Email, &self.email_input))
            .child(self.field_row("Company", Field::Company, &self.company_input))
            .child(
                div()
                    .flex()
                    .justify_end()
                    .gap_3()
                    .pt_2()
                    .child(
                        Button::new("cancel_create_user")
                            .outline()
                            .label("Cancel")
                            .on_click(
                                cx.listener(|this, _, _, cx| this.dismiss(CloseReason::Cancel, cx)),
                            ),
                    )
                    .child(
                        Button::new("submit_create_user")
                            .primary()
                            .label("Create customer")
                            .disabled(!self.flow.can_submit())
                            .on_click(cx.listener(|this, _, _, cx| this.submit(cx))),
                    ),
            );

        div()
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _, cx| {
                this.on_key_down(event, cx)
            }))
            .child(
                div()
                    .absolute()
                    .top_0()
                    .left_0()
                    .size_full()
                    .bg(hsla(0., 0., 0., 0.5))
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _: &MouseDownEvent, _, cx| {
                            this.dismiss(CloseReason::Backdrop, cx)
                        }),
                    ),
            )
            .child(dialog)
            .into_any_element()
    }
}
