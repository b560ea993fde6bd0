//! Synchronous event publishing (mechanics only).
//!
//! Domain crates define their own event enums and implement [`Event`]; this
//! crate only knows how to deliver them to any number of listeners.

pub mod event;
pub mod listeners;
pub mod subscription;

pub use event::Event;
pub use listeners::{ListenerId, Listeners};
pub use subscription::Subscription;
