//! Field registry
//!
//! Stores registered fields by name. Registering a name that already exists
//! replaces the earlier entry.

use crate::field::{Field, FieldHandle};
use indexmap::IndexMap;

/// Fields known to one engine instance
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    fields: IndexMap<String, Field>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot and store a handle under its name
    pub fn register<H: FieldHandle + 'static>(&mut self, handle: H) -> &Field {
        self.insert(Field::from_handle(handle))
    }

    /// Register every handle, in the order given
    pub fn register_all<H, I>(&mut self, handles: I)
    where
        H: FieldHandle + 'static,
        I: IntoIterator<Item = H>,
    {
        for handle in handles {
            self.register(handle);
        }
    }

    fn insert(&mut self, field: Field) -> &Field {
        tracing::trace!(field = %field.name(), "registering field");
        let name = field.name().to_string();
        let index = self.fields.insert_full(name, field).0;
        &self.fields[index]
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Field names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Forget every field
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}
