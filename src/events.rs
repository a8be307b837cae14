//! Named events passed from child components to their owners.
//!
//! A child never touches its parent's state. It emits an [`Event`] into the
//! [`EventSink`] its owner hands it for the duration of one interaction, and the
//! owner applies the event to its own state.

use serde::{Deserialize, Serialize};

use crate::types::{Review, VariantId};

/// An upward notification carrying a named payload.
///
/// Serializes as `{"event": "<name>", "payload": <payload>}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all = "kebab-case")]
pub enum Event {
    /// Emitted by the product display; payload is the selected variant id.
    AddToCart(VariantId),
    /// Emitted by the review form after validation succeeded.
    ReviewSubmitted(Review),
}

impl Event {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            Event::AddToCart(_) => ADD_TO_CART,
            Event::ReviewSubmitted(_) => REVIEW_SUBMITTED,
        }
    }
}

pub const ADD_TO_CART: &str = "add-to-cart";
pub const REVIEW_SUBMITTED: &str = "review-submitted";

/// Receiver of emitted events.
///
/// Implemented for `Vec<Event>` (an outbox the owner drains afterwards) and for
/// any `FnMut(Event)` closure.
pub trait EventSink {
    fn emit(&mut self, event: Event);
}

impl EventSink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}

impl<F: FnMut(Event)> EventSink for F {
    fn emit(&mut self, event: Event) {
        self(event)
    }
}

// ─── Registry ───────────────────────────────────────────────────────────────

/// An entry in the event registry: who emits an event and who handles it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventEntry {
    pub event: &'static str,
    pub emitter: &'static str,
    pub listener: &'static str,
    pub payload: &'static str,
}

/// Every event of the component tree.
pub static EVENT_REGISTRY: &[EventEntry] = &[
    EventEntry {
        event: ADD_TO_CART,
        emitter: "product",
        listener: "app",
        payload: "variant id",
    },
    EventEntry {
        event: REVIEW_SUBMITTED,
        emitter: "review_form",
        listener: "product",
        payload: "{ name, review, rating }",
    },
];

/// Look up a registry entry by wire name.
pub fn lookup_event(event: &str) -> Option<&'static EventEntry> {
    EVENT_REGISTRY.iter().find(|e| e.event == event)
}
