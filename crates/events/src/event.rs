//! Event trait (mechanics only).
//!
//! An [`Event`] is a notification describing a change that has already
//! happened. This crate only knows how to fan events out (see
//! [`crate::Listeners`]); what an event means is up to the crate that
//! defines it.
//!
//! ## Naming
//!
//! `event_type()` returns a stable dotted name such as
//! `"inventory.item.added"`. Log lines and serialized payloads key on it, so
//! renaming a variant must not change its type name.

/// A domain-agnostic notification.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - emitted **after** the state they describe is fully consistent
pub trait Event: Clone + core::fmt::Debug + Send + 'static {
    /// Stable event name/type identifier (e.g. "inventory.item.added").
    fn event_type(&self) -> &'static str;
}
