//! Client-side interaction primitives of the dashboard.
//!
//! This crate holds the pieces of the UI that carry state transitions worth
//! testing on their own, independently of any rendering toolkit:
//! - [`queue`]: transient notifications with per-message expiry timers.
//! - [`validation`]: pure validation of the create-customer form.
//! - [`flow`]: the create-customer form state machine tying both together.

pub mod flow;
pub mod queue;
pub mod validation;

pub use flow::{CloseReason, CreateRecordFlow, FlowHost, SubmitOutcome};
pub use queue::{DISPLAY_DURATION, Notification, NotificationId, NotificationQueue, Notifier, Notify};
pub use validation::{Field, FieldErrors, validate};
