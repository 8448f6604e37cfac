//! # Notification Controller
//!
//! A single transient message slot with a fixed display duration.
//!
//! ## Slot Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Notification Slot States                            │
//! │                                                                         │
//! │  ┌────────┐   show(A)    ┌─────────────┐   1500ms elapsed   ┌────────┐ │
//! │  │ Empty  │ ───────────► │ Showing A   │ ─────────────────► │ Empty  │ │
//! │  └────────┘              │ timer A     │                    └────────┘ │
//! │      ▲                   └──────┬──────┘                        ▲      │
//! │      │                          │ show(B)                       │      │
//! │      │                          ▼ (timer A aborted)             │      │
//! │      │                   ┌─────────────┐   1500ms after B       │      │
//! │      │                   │ Showing B   │ ───────────────────────┘      │
//! │      │                   │ timer B     │                               │
//! │      │                   └──────┬──────┘                               │
//! │      │     clear() / drop       │                                      │
//! │      └──────────────────────────┘  (pending timer aborted)             │
//! │                                                                         │
//! │  INVARIANT: at most one timer is pending per controller.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every `show` bumps a generation counter. A timer only clears the slot if
//! the generation it was scheduled for is still current, so a timer that
//! already woke up when it was aborted cannot clear a newer message.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use inventory_core::{Notification, NotificationKind};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::config::DEFAULT_NOTIFICATION_MS;

/// Identifies one `show` call on a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    expires_at: Option<Instant>,
    timer: Option<JoinHandle<()>>,
}

impl Slot {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns one notification slot and its expiry timer.
///
/// Must be used from within a Tokio runtime: `show` spawns the expiry timer.
/// Dropping the controller cancels any pending timer and empties the slot.
#[derive(Debug)]
pub struct NotificationController {
    display_for: Duration,
    current: Arc<watch::Sender<Option<Notification>>>,
    slot: Arc<Mutex<Slot>>,
}

impl NotificationController {
    /// Creates a controller whose notifications stay visible for `display_for`.
    pub fn new(display_for: Duration) -> Self {
        let (current, _) = watch::channel(None);
        NotificationController {
            display_for,
            current: Arc::new(current),
            slot: Arc::new(Mutex::new(Slot::default())),
        }
    }

    /// Replaces the current notification and restarts the expiry timer.
    pub fn show(&self, text: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let notification = Notification {
            text: text.into(),
            kind,
        };

        let mut slot = lock(&self.slot);
        slot.cancel_timer();
        slot.generation += 1;
        let generation = slot.generation;
        let deadline = Instant::now() + self.display_for;
        slot.expires_at = Some(deadline);

        debug!(generation, kind = ?notification.kind, text = %notification.text, "Showing notification");
        self.current.send_replace(Some(notification));

        let current = Arc::clone(&self.current);
        let slot_ref = Arc::clone(&self.slot);
        slot.timer = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;

            let mut slot = lock(&slot_ref);
            if slot.generation != generation {
                return;
            }
            slot.expires_at = None;
            slot.timer = None;
            current.send_replace(None);
            debug!(generation, "Notification expired");
        }));

        NotificationId(generation)
    }

    /// Empties the slot now and cancels the pending timer, if any.
    pub fn clear(&self) {
        let mut slot = lock(&self.slot);
        slot.cancel_timer();
        slot.generation += 1;
        slot.expires_at = None;

        if self.current.send_replace(None).is_some() {
            debug!("Notification cleared");
        }
    }

    /// The notification currently visible.
    pub fn current(&self) -> Option<Notification> {
        self.current.borrow().clone()
    }

    /// When the visible notification will be cleared.
    pub fn expires_at(&self) -> Option<Instant> {
        lock(&self.slot).expires_at
    }

    /// Returns true if the notification from `id` is still the visible one.
    pub fn is_showing(&self, id: NotificationId) -> bool {
        let slot = lock(&self.slot);
        slot.generation == id.0 && self.current.borrow().is_some()
    }

    /// Receives every change of the slot, starting with the current value.
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.current.subscribe()
    }

    pub fn display_duration(&self) -> Duration {
        self.display_for
    }
}

impl Default for NotificationController {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_NOTIFICATION_MS))
    }
}

impl Drop for NotificationController {
    fn drop(&mut self) {
        lock(&self.slot).cancel_timer();
        self.current.send_replace(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn advance(ms: u64) {
        tokio::time::advance(Duration::from_millis(ms)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_then_expire() {
        let notifications = NotificationController::default();
        let id = notifications.show("Product added successfully", NotificationKind::Success);

        assert!(notifications.is_showing(id));
        assert_eq!(
            notifications.current(),
            Some(Notification::success("Product added successfully"))
        );

        advance(1499).await;
        assert!(notifications.current().is_some());

        advance(1).await;
        assert!(notifications.current().is_none());
        assert!(notifications.expires_at().is_none());
        assert!(!notifications.is_showing(id));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_show_resets_timeout() {
        let notifications = NotificationController::default();

        let first = notifications.show("Failed to add product", NotificationKind::Failure);
        advance(1000).await;

        let shown_at = Instant::now();
        let second = notifications.show("Product added successfully", NotificationKind::Success);
        assert!(!notifications.is_showing(first));
        assert_eq!(
            notifications.expires_at(),
            Some(shown_at + Duration::from_millis(1500))
        );

        // First timer would have fired here.
        advance(1000).await;
        assert!(notifications.is_showing(second));
        assert_eq!(
            notifications.current().map(|n| n.text),
            Some("Product added successfully".to_string())
        );

        advance(500).await;
        assert!(notifications.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiry_counts_from_show_not_first_poll() {
        let notifications = NotificationController::default();
        let id = notifications.show("Product added successfully", NotificationKind::Success);
        let expires_at = notifications.expires_at().unwrap();

        // Timer task has not been polled yet when the clock moves.
        tokio::time::advance(Duration::from_millis(1500)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }

        assert!(Instant::now() >= expires_at);
        assert!(!notifications.is_showing(id));
        assert!(notifications.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_cancels_timer() {
        let notifications = NotificationController::default();
        notifications.show("Product deleted successfully", NotificationKind::Success);

        notifications.clear();
        assert!(notifications.current().is_none());

        let id = notifications.show("Failed to delete product", NotificationKind::Failure);
        advance(1499).await;
        assert!(notifications.is_showing(id));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_clears_for_subscribers() {
        let notifications = NotificationController::new(Duration::from_millis(200));
        let mut rx = notifications.subscribe();

        notifications.show("Product updated successfully", NotificationKind::Success);
        assert!(rx.borrow_and_update().is_some());

        drop(notifications);
        assert!(rx.borrow_and_update().is_none());

        advance(500).await;
        assert!(rx.borrow().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscriber_sees_expiry() {
        let notifications = NotificationController::new(Duration::from_millis(100));
        let mut rx = notifications.subscribe();

        notifications.show("Product added successfully", NotificationKind::Success);
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_some());

        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_none());
    }
}
