//! Fan-out of registry change notifications to local listeners.

use std::sync::{Mutex, mpsc};

use crate::bus::{EventBus, Subscription};

#[derive(Debug, PartialEq, Eq)]
pub enum InMemoryBusError {
    /// The listener list lock was poisoned by a panicking publisher.
    Poisoned,
}

impl core::fmt::Display for InMemoryBusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InMemoryBusError::Poisoned => f.write_str("listener list lock poisoned"),
        }
    }
}

/// Delivers each published change to every listener still holding its
/// [`Subscription`], in subscription order.
///
/// The last live listener receives the message itself; earlier ones get
/// clones. A listener whose subscription was dropped is forgotten on the next
/// publish.
#[derive(Debug)]
pub struct InMemoryEventBus<M> {
    listeners: Mutex<Vec<mpsc::Sender<M>>>,
}

impl<M> InMemoryEventBus<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listeners currently registered. Dropped subscriptions are counted until
    /// the next publish.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.lock().map(|listeners| listeners.len()).unwrap_or(0)
    }
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
        }
    }
}

impl<M> EventBus<M> for InMemoryEventBus<M>
where
    M: Clone + Send + 'static,
{
    type Error = InMemoryBusError;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        let mut listeners = self.listeners.lock().map_err(|_| InMemoryBusError::Poisoned)?;
        if listeners.is_empty() {
            return Ok(());
        }

        let mut live = Vec::with_capacity(listeners.len());
        let mut message = Some(message);
        {
            let mut pending = listeners.drain(..).peekable();
            while let Some(tx) = pending.next() {
                let payload = if pending.peek().is_some() {
                    message.clone()
                } else {
                    message.take()
                };
                if let Some(payload) = payload {
                    if tx.send(payload).is_ok() {
                        live.push(tx);
                    }
                }
            }
        }
        *listeners = live;
        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();
        // Behind a poisoned lock the subscription is valid but never receives.
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(tx);
        }
        Subscription::new(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subscriber_gets_every_message() {
        let bus = InMemoryEventBus::new();
        let a = bus.subscribe();
        let b = bus.subscribe();

        bus.publish(1u32).unwrap();
        bus.publish(2u32).unwrap();

        assert_eq!(a.drain(), vec![1, 2]);
        assert_eq!(b.drain(), vec![1, 2]);
    }

    #[test]
    fn late_subscribers_see_only_later_messages() {
        let bus = InMemoryEventBus::new();
        bus.publish("early").unwrap();
        let sub = bus.subscribe();
        bus.publish("late").unwrap();
        assert_eq!(sub.drain(), vec!["late"]);
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let bus = InMemoryEventBus::new();
        let kept = bus.subscribe();
        drop(bus.subscribe());
        assert_eq!(bus.subscriber_count(), 2);

        bus.publish(7u8).unwrap();
        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(kept.try_recv().unwrap(), 7);
    }

    #[test]
    fn pruning_keeps_subscription_order() {
        let bus = InMemoryEventBus::new();
        let first = bus.subscribe();
        drop(bus.subscribe());
        let last = bus.subscribe();

        bus.publish(String::from("part added")).unwrap();
        assert_eq!(bus.subscriber_count(), 2);
        assert_eq!(first.drain(), vec!["part added".to_string()]);
        assert_eq!(last.drain(), vec!["part added".to_string()]);

        drop(last);
        bus.publish(String::from("part deleted")).unwrap();
        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(first.drain(), vec!["part deleted".to_string()]);
    }

    #[test]
    fn publish_without_subscribers_succeeds() {
        let bus: InMemoryEventBus<u8> = InMemoryEventBus::new();
        assert_eq!(bus.publish(0), Ok(()));
    }
}
