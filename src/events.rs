//! Player event bus.
//!
//! Delivery is synchronous: [`EventBus::publish`] runs every handler on the
//! caller's thread before returning. Handlers may subscribe or drop
//! subscriptions while an event is being delivered; those changes apply from
//! the next event on.

use std::sync::{Arc, Mutex, Weak};

use crate::metadata::TrackId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// Playback of `track` just began.
    TrackStarted { track: TrackId },
    /// Playback stopped; nothing is playing.
    Stopped,
}

type Handler = Box<dyn FnMut(&PlayerEvent) + Send>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
    /// Nesting depth of `publish` calls currently running handlers.
    dispatching: usize,
    /// Subscriptions dropped while their handler was out for dispatch.
    removed: Vec<u64>,
}

impl Registry {
    /// Unregister `id`, handing back its handler so the caller can drop it
    /// after releasing the lock.
    fn remove(&mut self, id: u64) -> Option<Handler> {
        match self.handlers.iter().position(|(h, _)| *h == id) {
            Some(pos) => Some(self.handlers.remove(pos).1),
            None => {
                if self.dispatching > 0 {
                    self.removed.push(id);
                }
                None
            }
        }
    }
}

fn lock(registry: &Mutex<Registry>) -> std::sync::MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(|e| e.into_inner())
}

#[derive(Clone, Default)]
pub struct EventBus {
    registry: Arc<Mutex<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler`. It stays registered until the returned
    /// [`Subscription`] is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&PlayerEvent) + Send + 'static,
    {
        let mut reg = lock(&self.registry);
        let id = reg.next_id;
        reg.next_id += 1;
        reg.handlers.push((id, Box::new(handler)));

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every handler registered when the call starts.
    ///
    /// Handlers run without the registry lock held.
    pub fn publish(&self, event: PlayerEvent) {
        let mut running = {
            let mut reg = lock(&self.registry);
            reg.dispatching += 1;
            std::mem::take(&mut reg.handlers)
        };

        for (_, handler) in running.iter_mut() {
            handler(&event);
        }

        let mut reg = lock(&self.registry);
        let (mut kept, unsubscribed): (Vec<_>, Vec<_>) = running
            .into_iter()
            .partition(|(id, _)| !reg.removed.contains(id));
        // Handlers added during dispatch go after the ones that were running.
        kept.append(&mut reg.handlers);
        reg.handlers = kept;
        reg.dispatching -= 1;
        if reg.dispatching == 0 {
            reg.removed.clear();
        }
        drop(reg);

        // Dropped unlocked: a handler may own subscriptions of its own.
        drop(unsubscribed);
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.registry).handlers.len()
    }
}

/// Live registration on an [`EventBus`]. Dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let handler = lock(&registry).remove(self.id);
        drop(handler);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
