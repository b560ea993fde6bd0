//! Synchronous multi-subscriber callback registry.
//!
//! [`Listeners`] fans every emitted event out to all registered callbacks,
//! in registration order, on the caller's thread. There is no queueing:
//! `emit` returns once every callback has run.
//!
//! ## Delivery model
//!
//! - **In-process only**: callbacks run inside `emit`, nothing crosses a thread
//!   unless a channel subscription carries it there
//! - **Exactly once per listener**: each live listener sees each event once
//! - **Ordered**: events reach a listener in emission order, and listeners are
//!   called in the order they registered
//!
//! ## Kinds of listener
//!
//! - [`Listeners::subscribe`]: a plain callback, kept until unsubscribed
//! - [`Listeners::subscribe_filtered`]: a callback guarded by a predicate
//! - [`Listeners::subscribe_channel`]: a [`Subscription`] that receives clones;
//!   it is dropped from the registry on the first `emit` after its receiver is gone
//!
//! Callbacks receive `&E` and cannot reach back into the owner of the
//! registry while it is emitting. Owners that need shared access wrap
//! themselves in a `Mutex` and let listeners forward work over a channel.

use crate::event::Event;
use crate::subscription::{self, Subscription};

/// Handle returned by [`Listeners::subscribe`], used to unsubscribe.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Returns `false` once the listener should be dropped.
type Callback<E> = Box<dyn FnMut(&E) -> bool + Send>;

struct Entry<E> {
    id: ListenerId,
    callback: Callback<E>,
}

pub struct Listeners<E> {
    next_id: u64,
    entries: Vec<Entry<E>>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<E> core::fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .finish()
    }
}

impl<E: Event> Listeners<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked for every emitted event.
    pub fn subscribe<F>(&mut self, mut callback: F) -> ListenerId
    where
        F: FnMut(&E) + Send + 'static,
    {
        self.register(Box::new(move |event: &E| {
            callback(event);
            true
        }))
    }

    /// Register a callback that only sees events accepted by `filter`.
    pub fn subscribe_filtered<P, F>(&mut self, filter: P, mut callback: F) -> ListenerId
    where
        P: Fn(&E) -> bool + Send + 'static,
        F: FnMut(&E) + Send + 'static,
    {
        self.register(Box::new(move |event: &E| {
            if filter(event) {
                callback(event);
            }
            true
        }))
    }

    /// Register a channel; the subscription receives a clone of each event.
    ///
    /// The listener is dropped on the first emit after the subscription is.
    pub fn subscribe_channel(&mut self) -> Subscription<E> {
        let (tx, sub) = subscription::channel();
        self.register(Box::new(move |event: &E| tx.send(event.clone()).is_ok()));
        sub
    }

    /// Remove a listener. Returns `false` if the id was unknown.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Deliver `event` to every listener, in registration order.
    pub fn emit(&mut self, event: &E) {
        tracing::trace!(event_type = event.event_type(), listeners = self.entries.len(), "emit");
        // Drop any dead channel listeners while emitting.
        self.entries.retain_mut(|entry| (entry.callback)(event));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn register(&mut self, callback: Callback<E>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, callback });
        id
    }
}
