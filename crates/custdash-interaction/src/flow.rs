//! State machine behind the create-customer modal.
//!
//! The flow stores only the raw field values and the touched flags; errors and
//! validity are recomputed from them on every read. Outcomes leave the flow
//! through a [`FlowHost`] (record accepted, flow closed) and, for rejected
//! submissions, through a [`Notify`] implementation.

use custdash_bridge::{notification::NotificationType, user::NewUser};

use crate::{
    queue::Notify,
    validation::{Field, FieldErrors, validate},
};

/// Message enqueued when a submission fails validation.
pub const INVALID_FORM_MESSAGE: &str = "check the form fields";

/// Receiver of the flow's outcomes.
pub trait FlowHost {
    /// Called exactly once per successful submission with the trimmed payload.
    fn record_created(&mut self, record: NewUser);

    /// Called whenever the flow closes, whatever the reason.
    fn close(&mut self);
}

/// Why the flow was dismissed without submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Cancel,
    CloseButton,
    Backdrop,
    Escape,
}

/// Result of [`CreateRecordFlow::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record was handed to the host and the flow closed.
    Accepted,
    /// Validation failed; the flow stays open with its values intact.
    Rejected(FieldErrors),
    /// The flow was closed, nothing happened.
    Ignored,
}

/// Raw values of the three form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub company: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
        }
    }

    pub fn errors(&self) -> FieldErrors {
        validate(&self.name, &self.email, &self.company)
    }

    fn to_record(&self) -> NewUser {
        NewUser {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            company: self.company.trim().to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Touched {
    name: bool,
    email: bool,
    company: bool,
}

impl Touched {
    fn get(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Company => self.company,
        }
    }

    fn set(&mut self, field: Field) {
        match field {
            Field::Name => self.name = true,
            Field::Email => self.email = true,
            Field::Company => self.company = true,
        }
    }

    fn all() -> Self {
        Self {
            name: true,
            email: true,
            company: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FormState {
    values: FormValues,
    touched: Touched,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum FlowState {
    #[default]
    Closed,
    Open(FormState),
}

/// Create-customer form: `Closed` until opened, then `Open` with its values
/// and touched flags until it is submitted successfully or dismissed.
#[derive(Debug, Clone, Default)]
pub struct CreateRecordFlow {
    state: FlowState,
}

impl CreateRecordFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, FlowState::Open(_))
    }

    /// Opens the flow with empty values and no touched fields. Does nothing if
    /// it is already open.
    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        log::debug!("Opening the create-customer form");
        self.state = FlowState::Open(FormState::default());
    }

    /// Replaces one field's value. Ignored while closed.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        if let FlowState::Open(form) = &mut self.state {
            *form.values.get_mut(field) = value.into();
        }
    }

    /// Marks one field as touched. Ignored while closed.
    pub fn blur(&mut self, field: Field) {
        if let FlowState::Open(form) = &mut self.state {
            form.touched.set(field);
        }
    }

    /// Current values, or `None` while closed.
    pub fn values(&self) -> Option<&FormValues> {
        match &self.state {
            FlowState::Open(form) => Some(&form.values),
            FlowState::Closed => None,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        self.values().map_or("", |values| values.get(field))
    }

    pub fn is_touched(&self, field: Field) -> bool {
        match &self.state {
            FlowState::Open(form) => form.touched.get(field),
            FlowState::Closed => false,
        }
    }

    /// Errors for the current values. Empty while closed.
    pub fn errors(&self) -> FieldErrors {
        self.values().map(FormValues::errors).unwrap_or_default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Error to display next to `field`: only touched fields show theirs.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors().get(field)
    }

    /// Whether the submit control should be interactive.
    pub fn can_submit(&self) -> bool {
        self.is_open() && self.is_valid()
    }

    /// Keyboard handling is only active while the form is open.
    pub fn listens_for_keys(&self) -> bool {
        self.is_open()
    }

    /// Resets and closes the flow. Does nothing if it is already closed.
    pub fn close(&mut self, reason: CloseReason, host: &mut impl FlowHost) {
        if !self.is_open() {
            return;
        }
        log::debug!("Closing the create-customer form ({reason:?})");
        self.state = FlowState::Closed;
        host.close();
    }

    /// Handles a key press by its name; `Escape` closes the form. Returns
    /// `true` if the key was consumed.
    pub fn handle_key(&mut self, key: &str, host: &mut impl FlowHost) -> bool {
        if !self.listens_for_keys() || !key.eq_ignore_ascii_case("escape") {
            return false;
        }
        self.close(CloseReason::Escape, host);
        true
    }

    /// Validates every field and either hands the trimmed record to `host`
    /// or reports the failure through `notifier`.
    pub fn submit(&mut self, notifier: &impl Notify, host: &mut impl FlowHost) -> SubmitOutcome {
        let FlowState::Open(form) = &mut self.state else {
            return SubmitOutcome::Ignored;
        };

        form.touched = Touched::all();
        let errors = form.values.errors();
        if !errors.is_empty() {
            log::debug!("Rejected create-customer submission: {errors:?}");
            notifier.enqueue(INVALID_FORM_MESSAGE, NotificationType::Error);
            return SubmitOutcome::Rejected(errors);
        }

        let record = form.values.to_record();
        log::info!("Accepted new customer {:?}", record.name);
        self.state = FlowState::Closed;
        host.record_created(record);
        host.close();
        SubmitOutcome::Accepted
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::validation::{COMPANY_REQUIRED, EMAIL_INVALID, EMAIL_REQUIRED, NAME_REQUIRED};
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct RecordingHost {
        created: Vec<NewUser>,
        closed: usize,
    }

    impl FlowHost for RecordingHost {
        fn record_created(&mut self, record: NewUser) {
            self.created.push(record);
        }

        fn close(&mut self) {
            self.closed += 1;
        }
    }

    #[derive(Default)]
    struct RecordingNotifier(RefCell<Vec<(String, NotificationType)>>);

    impl Notify for RecordingNotifier {
        fn enqueue(&self, message: &str, notification_type: NotificationType) {
            self.0.borrow_mut().push((message.to_owned(), notification_type));
        }
    }

    fn open_flow() -> CreateRecordFlow {
        let mut flow = CreateRecordFlow::new();
        flow.open();
        flow
    }

    #[test]
    fn starts_closed() {
        let flow = CreateRecordFlow::new();
        assert!(!flow.is_open());
        assert!(flow.errors().is_empty());
        assert!(!flow.can_submit());
        assert!(!flow.listens_for_keys());
    }

    #[test]
    fn open_initializes_empty_untouched_form() {
        let flow = open_flow();
        assert_eq!(flow.values(), Some(&FormValues::default()));
        for field in Field::ALL {
            assert!(!flow.is_touched(field));
            assert_eq!(flow.visible_error(field), None);
        }
        assert_eq!(flow.errors().len(), 3);
    }

    #[test]
    fn reopening_keeps_current_values() {
        let mut flow = open_flow();
        flow.edit(Field::Name, "Ana");
        flow.open();
        assert_eq!(flow.value(Field::Name), "Ana");
    }

    #[test]
    fn edit_does_not_touch() {
        let mut flow = open_flow();
        flow.edit(Field::Email, "bademail");
        assert_eq!(flow.value(Field::Email), "bademail");
        assert!(!flow.is_touched(Field::Email));
        assert_eq!(flow.visible_error(Field::Email), None);
        assert_eq!(flow.errors().get(Field::Email), Some(EMAIL_INVALID));
    }

    #[test]
    fn blur_touches_without_changing_value() {
        let mut flow = open_flow();
        flow.edit(Field::Name, "Ana");
        flow.blur(Field::Name);
        assert!(flow.is_touched(Field::Name));
        assert_eq!(flow.value(Field::Name), "Ana");
        assert!(!flow.is_touched(Field::Email));
    }

    #[test]
    fn errors_follow_values() {
        let mut flow = open_flow();
        flow.blur(Field::Email);
        assert_eq!(flow.visible_error(Field::Email), Some(EMAIL_REQUIRED));

        flow.edit(Field::Email, "ana@");
        assert_eq!(flow.visible_error(Field::Email), Some(EMAIL_INVALID));

        flow.edit(Field::Email, "ana@test.com");
        assert_eq!(flow.visible_error(Field::Email), None);
    }

    #[test]
    fn edits_while_closed_are_ignored() {
        let mut flow = CreateRecordFlow::new();
        flow.edit(Field::Name, "Ana");
        flow.blur(Field::Name);
        assert_eq!(flow.value(Field::Name), "");
        assert!(!flow.is_touched(Field::Name));
    }

    #[test]
    fn can_submit_tracks_validity() {
        let mut flow = open_flow();
        assert!(!flow.can_submit());
        flow.edit(Field::Name, "Ana");
        flow.edit(Field::Email, "ana@test.com");
        flow.edit(Field::Company, "Acme");
        assert!(flow.can_submit());
        flow.edit(Field::Company, "  ");
        assert!(!flow.can_submit());
    }

    #[test]
    fn submit_forces_touched() {
        let mut flow = open_flow();
        let notifier = RecordingNotifier::default();
        let mut host = RecordingHost::default();

        let outcome = flow.submit(&notifier, &mut host);

        let SubmitOutcome::Rejected(errors) = outcome else {
            panic!("empty form should be rejected, got {outcome:?}");
        };
        assert_eq!(errors.len(), 3);
        assert_eq!(flow.visible_error(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(flow.visible_error(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(flow.visible_error(Field::Company), Some(COMPANY_REQUIRED));
    }

    #[test]
    fn rejected_submit_notifies_once_and_keeps_values() {
        let mut flow = open_flow();
        flow.edit(Field::Name, "Ana");
        flow.edit(Field::Email, "bademail");
        let notifier = RecordingNotifier::default();
        let mut host = RecordingHost::default();

        flow.submit(&notifier, &mut host);

        assert_eq!(
            notifier.0.into_inner(),
            vec![(INVALID_FORM_MESSAGE.to_owned(), NotificationType::Error)]
        );
        assert!(host.created.is_empty());
        assert_eq!(host.closed, 0);
        assert!(flow.is_open());
        assert_eq!(flow.value(Field::Name), "Ana");
        assert_eq!(flow.value(Field::Email), "bademail");
    }

    #[test]
    fn accepted_submit_trims_resets_and_closes() {
        let mut flow = open_flow();
        flow.edit(Field::Name, "  Ana ");
        flow.edit(Field::Email, " ana@test.com");
        flow.edit(Field::Company, "Acme  ");
        let notifier = RecordingNotifier::default();
        let mut host = RecordingHost::default();

        assert_eq!(flow.submit(&notifier, &mut host), SubmitOutcome::Accepted);

        assert_eq!(
            host.created,
            vec![NewUser {
                name: "Ana".to_owned(),
                email: "ana@test.com".to_owned(),
                company: "Acme".to_owned(),
            }]
        );
        assert_eq!(host.closed, 1);
        assert!(notifier.0.borrow().is_empty());
        assert!(!flow.is_open());

        flow.open();
        assert_eq!(flow.values(), Some(&FormValues::default()));
        assert!(!flow.is_touched(Field::Name));
    }

    #[test]
    fn submit_while_closed_is_ignored() {
        let mut flow = CreateRecordFlow::new();
        let notifier = RecordingNotifier::default();
        let mut host = RecordingHost::default();

        assert_eq!(flow.submit(&notifier, &mut host), SubmitOutcome::Ignored);
        assert!(notifier.0.borrow().is_empty());
        assert_eq!(host.closed, 0);
    }

    #[test]
    fn every_dismissal_resets_and_calls_close() {
        for reason in [
            CloseReason::Cancel,
            CloseReason::CloseButton,
            CloseReason::Backdrop,
            CloseReason::Escape,
        ] {
            let mut flow = open_flow();
            flow.edit(Field::Name, "Ana");
            flow.blur(Field::Name);
            let mut host = RecordingHost::default();

            flow.close(reason, &mut host);

            assert!(!flow.is_open(), "{reason:?} should close the flow");
            assert_eq!(host.closed, 1);
            flow.open();
            assert_eq!(flow.value(Field::Name), "");
            assert!(!flow.is_touched(Field::Name));
        }
    }

    #[test]
    fn closing_twice_calls_close_once() {
        let mut flow = open_flow();
        let mut host = RecordingHost::default();
        flow.close(CloseReason::Cancel, &mut host);
        flow.close(CloseReason::Cancel, &mut host);
        assert_eq!(host.closed, 1);
    }

    #[test]
    fn escape_closes_only_while_open() {
        let mut host = RecordingHost::default();
        let mut flow = CreateRecordFlow::new();
        assert!(!flow.handle_key("escape", &mut host));
        assert_eq!(host.closed, 0);

        flow.open();
        assert!(!flow.handle_key("enter", &mut host));
        assert!(flow.is_open());

        assert!(flow.handle_key("Escape", &mut host));
        assert!(!flow.is_open());
        assert_eq!(host.closed, 1);
        assert!(!flow.listens_for_keys());
    }
}
