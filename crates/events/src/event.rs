use chrono::{DateTime, Utc};

/// A record of something that already happened to the inventory.
///
/// Events are immutable facts; consumers must not rely on receiving them
/// exactly once.
pub trait Event: Clone + core::fmt::Debug + Send + 'static {
    /// Stable event name (e.g. "inventory.part.added").
    fn event_type(&self) -> &'static str;

    /// When the change was made.
    fn occurred_at(&self) -> DateTime<Utc>;
}
