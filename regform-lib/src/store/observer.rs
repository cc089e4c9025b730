//! Store change notifications.

use super::Snapshot;

/// A change applied to a [`FormStore`](super::FormStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A single field was edited.
    Changed {
        /// Field name.
        field: String,
        /// New value.
        value: String,
    },
    /// A field lost focus for the first time or again.
    Touched(String),
    /// All values were replaced from a restored snapshot.
    Hydrated,
    /// Values and touched state were cleared.
    Reset,
}

/// Handle returned by [`FormStore::subscribe`](super::FormStore::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(super) u64);

/// Callback invoked after each store mutation with the event and the
/// values as they stand afterwards.
pub type Observer = Box<dyn FnMut(&StoreEvent, &Snapshot)>;
