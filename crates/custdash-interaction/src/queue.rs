//! Transient notification queue.
//!
//! [`NotificationQueue`] owns the active notifications and one expiry timer per
//! notification. Timers are tokio tasks spawned on the runtime handed to
//! [`NotificationQueue::new`]; each one is keyed by its notification's
//! [`NotificationId`] so that [`NotificationQueue::dispose`] can cancel all of
//! them at once.
//!
//! Views observe the active sequence through [`NotificationQueue::subscribe`]
//! and push new messages through a [`Notifier`], which is the only enqueue
//! capability handed out.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
    time::Duration,
};

use custdash_bridge::notification::NotificationType;
use tokio::{
    runtime::Handle,
    sync::watch,
    task::AbortHandle,
    time::{Instant, sleep_until},
};

/// How long a notification stays visible.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(3500);

/// Identifier of a queued notification, unique for the lifetime of its queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification-{}", self.0)
    }
}

/// One active notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub notification_type: NotificationType,
}

/// Capability to push notifications. Implemented by [`Notifier`]; the
/// create-customer flow only depends on this trait.
pub trait Notify {
    fn enqueue(&self, message: &str, notification_type: NotificationType);
}

struct Timers {
    next_id: u64,
    pending: HashMap<NotificationId, AbortHandle>,
    disposed: bool,
}

struct Shared {
    // Lock order: `timers` first, then the watch channel's internal lock.
    timers: Mutex<Timers>,
    active: watch::Sender<Vec<Notification>>,
}

impl Shared {
    fn lock_timers(&self) -> MutexGuard<'_, Timers> {
        self.timers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn expire(&self, id: NotificationId) {
        let mut timers = self.lock_timers();
        // Cancelled by dispose while this task was already past its sleep.
        if timers.pending.remove(&id).is_none() {
            return;
        }

        self.active.send_modify(|active| active.retain(|n| n.id != id));
        log::debug!("Expired {id}");
    }
}

/// Owner of the active notifications and their expiry timers.
///
/// Dropping the queue disposes it.
pub struct NotificationQueue {
    shared: Arc<Shared>,
    runtime: Handle,
    display_duration: Duration,
}

impl NotificationQueue {
    /// Creates an empty queue whose timers run on `runtime`.
    pub fn new(runtime: Handle) -> Self {
        let (active, _) = watch::channel(Vec::new());
        Self {
            shared: Arc::new(Shared {
                timers: Mutex::new(Timers {
                    next_id: 0,
                    pending: HashMap::new(),
                    disposed: false,
                }),
                active,
            }),
            runtime,
            display_duration: DISPLAY_DURATION,
        }
    }

    /// Overrides [`DISPLAY_DURATION`] for notifications enqueued afterwards.
    pub fn with_display_duration(mut self, display_duration: Duration) -> Self {
        self.display_duration = display_duration;
        self
    }

    /// Returns the enqueue capability for this queue.
    pub fn notifier(&self) -> Notifier {
        Notifier {
            shared: Arc::downgrade(&self.shared),
            runtime: self.runtime.clone(),
            display_duration: self.display_duration,
        }
    }

    /// Snapshot of the active notifications, oldest first.
    pub fn active(&self) -> Vec<Notification> {
        self.shared.active.borrow().clone()
    }

    /// Receiver that is marked changed on every enqueue, expiry and dispose.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Notification>> {
        self.shared.active.subscribe()
    }

    /// Number of expiry timers that have not fired yet.
    pub fn pending_timers(&self) -> usize {
        self.shared.lock_timers().pending.len()
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.lock_timers().disposed
    }

    /// Cancels every pending timer and clears the active notifications.
    ///
    /// Calling it more than once is a no-op.
    pub fn dispose(&self) {
        let mut timers = self.shared.lock_timers();
        if timers.disposed {
            return;
        }

        timers.disposed = true;
        let cancelled = timers.pending.len();
        for (_, handle) in timers.pending.drain() {
            handle.abort();
        }

        self.shared.active.send_modify(Vec::clear);
        log::debug!("Disposed notification queue, cancelled {cancelled} timer(s)");
    }
}

impl Drop for NotificationQueue {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Cloneable handle that enqueues into a [`NotificationQueue`].
///
/// # Panics
///
/// Enqueueing after the owning queue has been disposed or dropped panics:
/// the handle was used outside of the scope it belongs to.
#[derive(Clone)]
pub struct Notifier {
    shared: Weak<Shared>,
    runtime: Handle,
    display_duration: Duration,
}

impl Notifier {
    /// Appends a notification and schedules its removal after the display
    /// duration. Returns the generated identifier.
    pub fn push(
        &self,
        message: impl Into<String>,
        notification_type: NotificationType,
    ) -> NotificationId {
        let shared = self
            .shared
            .upgrade()
            .expect("notifier used after its notification queue was dropped");

        let deadline = Instant::now() + self.display_duration;
        let mut timers = shared.lock_timers();
        assert!(
            !timers.disposed,
            "notifier used after its notification queue was disposed"
        );

        let id = NotificationId(timers.next_id);
        timers.next_id += 1;

        let message = message.into();
        log::debug!("Enqueued {id} ({notification_type:?}): {message}");
        shared.active.send_modify(|active| {
            active.push(Notification {
                id,
                message,
                notification_type,
            })
        });

        let weak = Arc::downgrade(&shared);
        let task = self.runtime.spawn(async move {
            sleep_until(deadline).await;
            if let Some(shared) = weak.upgrade() {
                shared.expire(id);
            }
        });
        timers.pending.insert(id, task.abort_handle());

        id
    }
}

impl Notify for Notifier {
    fn enqueue(&self, message: &str, notification_type: NotificationType) {
        self.push(message, notification_type);
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("display_duration", &self.display_duration)
            .finish_non_exhaustive()
    }
}
