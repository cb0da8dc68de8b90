//! Typed publish/subscribe channels.
//!
//! Hosts (the asset importer, the debug panel, the web front-end) publish
//! typed payloads into an [`EventHub`]; the stage drains its
//! [`Subscription`]s once per frame. Nothing is delivered re-entrantly, so
//! handlers always run to completion in publish order.

use std::sync::Arc;

use flume::{Receiver, Sender, TryRecvError};
use parking_lot::Mutex;

/// Broadcast hub: every subscriber receives its own clone of each event.
///
/// Cloning the hub yields another publisher for the same set of subscribers.
pub struct EventHub<T> {
    subscribers: Arc<Mutex<Vec<Sender<T>>>>,
}

impl<T: Clone> EventHub<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Registers a new subscriber. Only events published afterwards are seen.
    #[must_use]
    pub fn subscribe(&self) -> Subscription<T> {
        let (tx, rx) = flume::unbounded();
        self.subscribers.lock().push(tx);
        Subscription { rx }
    }

    /// Sends `event` to every live subscriber and drops the ones whose
    /// receiving end is gone. Returns the number of deliveries.
    pub fn publish(&self, event: T) -> usize {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        subscribers.len()
    }
}

impl<T: Clone> Default for EventHub<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EventHub<T> {
    fn clone(&self) -> Self {
        Self {
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

/// Receiving end of an [`EventHub`].
pub struct Subscription<T> {
    rx: Receiver<T>,
}

impl<T> Subscription<T> {
    /// Next queued event, if any.
    #[must_use]
    pub fn try_next(&self) -> Option<T> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subscriber_gets_a_copy() {
        let hub = EventHub::new();
        let a = hub.subscribe();
        let b = hub.subscribe();

        assert_eq!(hub.publish(1_u32), 2);
        hub.clone().publish(2);

        for rx in [&a, &b] {
            assert_eq!(rx.try_next(), Some(1));
            assert_eq!(rx.try_next(), Some(2));
            assert_eq!(rx.try_next(), None);
        }
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let hub = EventHub::new();
        let a = hub.subscribe();
        drop(hub.subscribe());

        assert_eq!(hub.publish("load"), 1);
        assert_eq!(hub.publish("done"), 1);
        assert_eq!(a.try_next(), Some("load"));
    }
}
