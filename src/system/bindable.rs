//! Typed value publisher used to bind model fields to UI state.
//!
//! A [`Bindable`] owns the current value and pushes every change to its
//! subscribers over `crossbeam_channel`. Subscribers read the current value
//! once when they are built, then drain their [`Subscription`] when they
//! update. Dropping a subscription unsubscribes it.

use crossbeam_channel::{Receiver, Sender, TryRecvError, unbounded};

/// A change notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueChanged<T> {
    pub old: T,
    pub new: T,
}

pub struct Bindable<T> {
    value: T,
    subscribers: Vec<Sender<ValueChanged<T>>>,
}

impl<T: Clone + PartialEq> Bindable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replaces the value and notifies subscribers if it actually changed.
    pub fn set(&mut self, value: T) {
        if self.value == value {
            return;
        }
        let old = std::mem::replace(&mut self.value, value);
        let change = ValueChanged {
            old,
            new: self.value.clone(),
        };
        // Disconnected subscribers are pruned here.
        self.subscribers.retain(|tx| tx.send(change.clone()).is_ok());
    }

    pub fn subscribe(&mut self) -> Subscription<T> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        Subscription { rx }
    }

    /// Number of subscribers still registered. Dropped subscriptions are only
    /// pruned on the next publish.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Clone + PartialEq + Default> Default for Bindable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Bindable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bindable")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Receiving end of a [`Bindable`].
pub struct Subscription<T> {
    rx: Receiver<ValueChanged<T>>,
}

impl<T> Subscription<T> {
    /// Drains pending changes and returns the most recent one, if any.
    pub fn latest(&self) -> Option<ValueChanged<T>> {
        let mut latest: Option<ValueChanged<T>> = None;
        loop {
            match self.rx.try_recv() {
                Ok(change) => {
                    latest = Some(match latest {
                        // Keep the first `old` so the merged change spans the whole batch.
                        Some(prev) => ValueChanged {
                            old: prev.old,
                            new: change.new,
                        },
                        None => change,
                    })
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return latest,
            }
        }
    }

    /// Returns true if the publisher was dropped.
    pub fn is_closed(&self) -> bool {
        self.rx.is_empty() && matches!(self.rx.try_recv(), Err(TryRecvError::Disconnected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifies_only_on_change() {
        let mut bindable = Bindable::new(1);
        let sub = bindable.subscribe();

        bindable.set(1);
        assert!(sub.latest().is_none());

        bindable.set(2);
        assert_eq!(sub.latest(), Some(ValueChanged { old: 1, new: 2 }));
        assert!(sub.latest().is_none());
    }

    #[test]
    fn test_latest_merges_pending_changes() {
        let mut bindable = Bindable::new("a".to_string());
        let sub = bindable.subscribe();

        bindable.set("b".to_string());
        bindable.set("c".to_string());

        let change = sub.latest().unwrap();
        assert_eq!(change.old, "a");
        assert_eq!(change.new, "c");
    }

    #[test]
    fn test_dropped_subscription_is_pruned() {
        let mut bindable = Bindable::new(0u32);
        let kept = bindable.subscribe();
        let dropped = bindable.subscribe();
        assert_eq!(bindable.subscriber_count(), 2);

        drop(dropped);
        bindable.set(5);

        assert_eq!(bindable.subscriber_count(), 1);
        assert_eq!(kept.latest().map(|c| c.new), Some(5));
    }

    #[test]
    fn test_subscription_sees_closed_publisher() {
        let mut bindable = Bindable::new(0u32);
        let sub = bindable.subscribe();
        assert!(!sub.is_closed());
        drop(bindable);
        assert!(sub.is_closed());
    }
}
