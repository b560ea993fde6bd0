//! Channel-backed subscriptions.
//!
//! A [`Subscription`] receives a clone of every event emitted after it was
//! created. Useful when a consumer wants to drain events after an operation
//! returns instead of reacting inline, or wait for them on another thread.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::time::Duration;

#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Everything delivered so far, in emission order.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Create a sender/subscription pair.
pub(crate) fn channel<M>() -> (mpsc::Sender<M>, Subscription<M>) {
    let (tx, rx) = mpsc::channel();
    (tx, Subscription::new(rx))
}
