//! # Component Registry
//!
//! The registry is the live state of a system: one entry per running component,
//! keyed by name. The caller owns it and lends it to every orchestration call.
//!
//! Only [`start_component`](crate::start_component) adds entries and only
//! [`stop_component`](crate::stop_component) removes them, so a name is present
//! if and only if that component is running. Outside this crate the registry is
//! read-only.

use std::collections::HashMap;

/// Live mapping from component name to the instance its start routine returned.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry<I> {
    components: HashMap<String, I>,
}

impl<I> Default for Registry<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Registry<I> {
    /// Creates an empty registry (no component running).
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&I> {
        self.components.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Names of the running components, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &I)> {
        self.components
            .iter()
            .map(|(name, instance)| (name.as_str(), instance))
    }

    pub(crate) fn insert(&mut self, name: &str, instance: I) -> &I {
        self.components.entry(name.to_string()).or_insert(instance)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut I> {
        self.components.get_mut(name)
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<I> {
        self.components.remove(name)
    }
}
