//! Form state store.
//!
//! Holds the current value of every field, which fields have been touched,
//! and a list of observers notified after each mutation.

mod observer;
mod snapshot;

pub use observer::{Observer, StoreEvent, SubscriptionId};
pub use snapshot::Snapshot;

use std::collections::HashSet;

use crate::schema::Schema;

/// Mutable value store for one form instance.
///
/// Every field declared by the schema has a value (possibly empty) from
/// construction onwards.
///
/// # Example
///
/// ```
/// use regform_lib::schema::Schema;
/// use regform_lib::store::FormStore;
///
/// let schema = Schema::builder().field("name").build().unwrap();
/// let mut store = FormStore::new(&schema);
///
/// assert_eq!(store.get("name"), Some(""));
/// store.set("name", "Ana");
/// assert_eq!(store.get("name"), Some("Ana"));
/// ```
pub struct FormStore {
    fields: Vec<String>,
    values: Snapshot,
    touched: HashSet<String>,
    dirty: bool,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl FormStore {
    /// Creates a store with every schema field set to the empty string.
    pub fn new(schema: &Schema) -> Self {
        let fields: Vec<String> = schema.field_names().map(str::to_string).collect();
        let values = fields.iter().map(|f| (f.as_str(), "")).collect();
        Self {
            fields,
            values,
            touched: HashSet::new(),
            dirty: false,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Get the current value of a field.
    ///
    /// Returns `None` only for names that were never declared or hydrated.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field)
    }

    /// Set a field's value and notify observers.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        if !self.fields.contains(&field) {
            log::debug!("setting undeclared field '{}'", field);
        }
        self.values.insert(field.clone(), value.clone());
        self.dirty = true;
        self.notify(StoreEvent::Changed { field, value });
    }

    /// Replace all values with `snapshot` and notify observers.
    ///
    /// Keys the schema does not declare are kept; declared fields missing
    /// from `snapshot` are reset to the empty string.
    pub fn hydrate(&mut self, snapshot: Snapshot) {
        log::debug!("hydrating store with {} values", snapshot.len());
        self.values = snapshot;
        self.fill_missing();
        self.dirty = false;
        self.notify(StoreEvent::Hydrated);
    }

    /// Read-only copy of the current values.
    pub fn snapshot(&self) -> Snapshot {
        self.values.clone()
    }

    /// Borrow the current values without copying.
    pub fn values(&self) -> &Snapshot {
        &self.values
    }

    /// Mark a field as interacted with.
    pub fn touch(&mut self, field: impl Into<String>) {
        let field = field.into();
        self.touched.insert(field.clone());
        self.notify(StoreEvent::Touched(field));
    }

    /// Check if a field has been touched since construction or reset.
    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    /// Check if any value has been edited since the last check.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Clear all values and touched state.
    pub fn reset(&mut self) {
        self.values = Snapshot::new();
        self.fill_missing();
        self.touched.clear();
        self.dirty = false;
        self.notify(StoreEvent::Reset);
    }

    /// Register an observer called after every mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&StoreEvent, &Snapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn fill_missing(&mut self) {
        for field in &self.fields {
            if !self.values.contains(field) {
                self.values.insert(field.as_str(), "");
            }
        }
    }

    fn notify(&mut self, event: StoreEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&event, &self.values);
        }
    }
}

impl std::fmt::Debug for FormStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormStore")
            .field("values", &self.values)
            .field("touched", &self.touched)
            .field("dirty", &self.dirty)
            .field("observers", &self.observers.len())
            .finish()
    }
}
