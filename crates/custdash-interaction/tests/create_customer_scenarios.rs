use std::time::Duration;

use custdash_bridge::{notification::NotificationType, user::NewUser};
use custdash_interaction::{
    CreateRecordFlow, DISPLAY_DURATION, Field, FlowHost, NotificationQueue, SubmitOutcome,
    flow::INVALID_FORM_MESSAGE,
    validation::{COMPANY_REQUIRED, EMAIL_INVALID, EMAIL_REQUIRED, NAME_REQUIRED},
};
use pretty_assertions::assert_eq;
use tokio::{runtime::Handle, time::advance};

#[derive(Default)]
struct Dashboard {
    created: Vec<NewUser>,
    close_calls: usize,
}

impl FlowHost for Dashboard {
    fn record_created(&mut self, record: NewUser) {
        self.created.push(record);
    }

    fn close(&mut self) {
        self.close_calls += 1;
    }
}

async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn valid_submission_hands_record_to_host_and_resets() {
    let queue = NotificationQueue::new(Handle::current());
    let notifier = queue.notifier();
    let mut dashboard = Dashboard::default();
    let mut flow = CreateRecordFlow::new();

    flow.open();
    flow.edit(Field::Name, "Ana");
    flow.edit(Field::Email, "ana@test.com");
    flow.edit(Field::Company, "Acme");
    let outcome = flow.submit(&notifier, &mut dashboard);

    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(
        dashboard.created,
        vec![NewUser {
            name: "Ana".to_owned(),
            email: "ana@test.com".to_owned(),
            company: "Acme".to_owned(),
        }]
    );
    assert_eq!(dashboard.close_calls, 1);
    assert!(!flow.is_open());
    assert!(queue.active().is_empty());

    flow.open();
    for field in Field::ALL {
        assert_eq!(flow.value(field), "");
        assert!(!flow.is_touched(field));
    }
}

#[tokio::test(start_paused = true)]
async fn empty_submission_is_rejected_with_one_error_notification() {
    let queue = NotificationQueue::new(Handle::current());
    let notifier = queue.notifier();
    let mut dashboard = Dashboard::default();
    let mut flow = CreateRecordFlow::new();

    flow.open();
    let outcome = flow.submit(&notifier, &mut dashboard);

    assert!(matches!(outcome, SubmitOutcome::Rejected(ref errors) if errors.len() == 3));
    assert!(dashboard.created.is_empty());
    assert_eq!(dashboard.close_calls, 0);
    assert!(flow.is_open());

    let active = queue.active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].message, INVALID_FORM_MESSAGE);
    assert_eq!(active[0].notification_type, NotificationType::Error);

    assert_eq!(flow.visible_error(Field::Name), Some(NAME_REQUIRED));
    assert_eq!(flow.visible_error(Field::Email), Some(EMAIL_REQUIRED));
    assert_eq!(flow.visible_error(Field::Company), Some(COMPANY_REQUIRED));

    advance(DISPLAY_DURATION).await;
    settle().await;
    assert!(queue.active().is_empty());
    assert!(flow.is_open());
}

#[tokio::test(start_paused = true)]
async fn blurred_invalid_email_shows_only_its_own_error() {
    let mut flow = CreateRecordFlow::new();

    flow.open();
    flow.edit(Field::Name, "Ana");
    flow.edit(Field::Company, "Acme");
    flow.edit(Field::Email, "bademail");
    flow.blur(Field::Email);

    assert_eq!(flow.visible_error(Field::Email), Some(EMAIL_INVALID));
    assert_eq!(flow.visible_error(Field::Name), None);
    assert_eq!(flow.visible_error(Field::Company), None);
    assert!(!flow.can_submit());
}

#[tokio::test(start_paused = true)]
async fn repeated_failures_queue_independent_notifications() {
    let queue = NotificationQueue::new(Handle::current());
    let notifier = queue.notifier();
    let mut dashboard = Dashboard::default();
    let mut flow = CreateRecordFlow::new();
    flow.open();

    flow.submit(&notifier, &mut dashboard);
    advance(Duration::from_millis(2000)).await;
    flow.submit(&notifier, &mut dashboard);
    settle().await;
    assert_eq!(queue.active().len(), 2);

    advance(Duration::from_millis(1500)).await;
    settle().await;
    assert_eq!(queue.active().len(), 1);

    // Fixing the form after a rejection goes through on the next submit.
    flow.edit(Field::Name, "Ana");
    flow.edit(Field::Email, "ana@test.com");
    flow.edit(Field::Company, "Acme");
    assert_eq!(flow.submit(&notifier, &mut dashboard), SubmitOutcome::Accepted);
    assert_eq!(dashboard.created.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn disposing_during_pending_feedback_stops_all_updates() {
    let queue = NotificationQueue::new(Handle::current());
    let notifier = queue.notifier();
    let mut dashboard = Dashboard::default();
    let mut flow = CreateRecordFlow::new();
    flow.open();
    flow.submit(&notifier, &mut dashboard);

    let mut rx = queue.subscribe();
    queue.dispose();
    rx.borrow_and_update();

    advance(DISPLAY_DURATION * 3).await;
    settle().await;

    assert!(!rx.has_changed().expect("queue is still alive"));
    assert!(queue.active().is_empty());
}
