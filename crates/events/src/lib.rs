//! Change events and their distribution.
//!
//! The registry publishes one event per successful mutation; front ends hold a
//! [`Subscription`] and re-render when something arrives.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
