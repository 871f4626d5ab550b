//! Process-wide profile notifications.
//!
//! The editor publishes a [`ProfileNotification`] when a name or hotkey edit
//! is committed. Subscribers (session list, live sessions) receive only the
//! GUID and look the profile up again themselves, so a burst of edits never
//! delivers stale values.
//!
//! Publishing never waits for subscribers. A bus with no subscribers drops
//! the notification, and a subscriber that falls more than the channel
//! capacity behind sees `RecvError::Lagged`.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use par_term_config::{DEFAULT_EVENT_BUFFER_CAPACITY, ProfileGuid};
use tokio::sync::broadcast;

/// A notification about a profile, identified only by its GUID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileNotification {
    /// The name field of the "get info" editor finished editing
    NameEditEnded(ProfileGuid),
    /// A session hotkey was changed through the editor
    HotkeyChanged(ProfileGuid),
}

impl ProfileNotification {
    /// Stable event name, for logging and script bridges
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::NameEditEnded(_) => "profile_name_edit_ended",
            Self::HotkeyChanged(_) => "profile_hotkey_changed",
        }
    }

    /// The GUID of the profile that may have changed
    pub fn guid(&self) -> &ProfileGuid {
        match self {
            Self::NameEditEnded(guid) | Self::HotkeyChanged(guid) => guid,
        }
    }
}

/// A published notification with its bus sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEventEnvelope {
    /// Monotonic per-bus sequence number, starting at 1
    pub sequence: u64,
    pub notification: ProfileNotification,
}

/// Cloneable publish/subscribe bus for profile notifications.
///
/// Clones share the same channel and sequence counter.
#[derive(Debug, Clone)]
pub struct ProfileEventBus {
    sender: broadcast::Sender<ProfileEventEnvelope>,
    next_sequence: Arc<AtomicU64>,
}

impl Default for ProfileEventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER_CAPACITY)
    }
}

impl ProfileEventBus {
    /// Create a bus whose subscribers buffer up to `capacity` notifications.
    /// A zero capacity is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            next_sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Register a new subscriber. It receives notifications published after
    /// this call.
    pub fn subscribe(&self) -> broadcast::Receiver<ProfileEventEnvelope> {
        self.sender.subscribe()
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Broadcast a notification to every current subscriber.
    pub fn publish(&self, notification: ProfileNotification) -> ProfileEventEnvelope {
        let envelope = ProfileEventEnvelope {
            sequence: self.next_sequence.fetch_add(1, Ordering::Relaxed) + 1,
            notification,
        };

        match self.sender.send(envelope.clone()) {
            Ok(delivered) => log::debug!(
                "Published {} #{} for {} to {} subscribers",
                envelope.notification.event_name(),
                envelope.sequence,
                envelope.notification.guid(),
                delivered
            ),
            Err(_) => log::trace!(
                "No subscribers for {} #{}",
                envelope.notification.event_name(),
                envelope.sequence
            ),
        }

        envelope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::{RecvError, TryRecvError};

    #[test]
    fn test_publish_without_subscribers_is_not_an_error() {
        let bus = ProfileEventBus::default();
        let envelope = bus.publish(ProfileNotification::NameEditEnded("A".into()));
        assert_eq!(envelope.sequence, 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_every_subscriber_gets_each_notification() {
        let bus = ProfileEventBus::default();
        let mut first = bus.subscribe();
        let mut second = bus.clone().subscribe();

        bus.publish(ProfileNotification::HotkeyChanged("A".into()));

        for rx in [&mut first, &mut second] {
            let envelope = rx.try_recv().expect("notification delivered");
            assert_eq!(envelope.notification.guid().as_str(), "A");
            assert_eq!(envelope.notification.event_name(), "profile_hotkey_changed");
            assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
        }
    }

    #[test]
    fn test_clones_share_sequence() {
        let bus = ProfileEventBus::default();
        let clone = bus.clone();
        let a = bus.publish(ProfileNotification::NameEditEnded("A".into()));
        let b = clone.publish(ProfileNotification::NameEditEnded("B".into()));
        assert_eq!((a.sequence, b.sequence), (1, 2));
    }

    #[test]
    fn test_late_subscriber_misses_earlier_notifications() {
        let bus = ProfileEventBus::default();
        bus.publish(ProfileNotification::NameEditEnded("A".into()));
        let mut rx = bus.subscribe();
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test]
    async fn test_slow_subscriber_reports_lag() {
        let bus = ProfileEventBus::new(1);
        let mut rx = bus.subscribe();
        for _ in 0..4 {
            bus.publish(ProfileNotification::HotkeyChanged("A".into()));
        }

        match rx.recv().await {
            Err(RecvError::Lagged(skipped)) => assert!(skipped >= 1),
            other => panic!("expected lag, got {:?}", other),
        }
    }
}
