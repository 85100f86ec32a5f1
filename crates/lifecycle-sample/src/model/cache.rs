//! # Cache Model
//!
//! A bounded key-value store. The capacity comes from the settings service;
//! inserting a new key past capacity fails instead of evicting.

use crate::services::ServiceError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Entries loaded into the cache when it starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    pub preload: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cache {
    capacity: usize,
    entries: BTreeMap<String, String>,
    open: bool,
}

impl Cache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: BTreeMap::new(),
            open: true,
        }
    }

    /// Inserts or replaces an entry.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ServiceError> {
        if !self.open {
            return Err(ServiceError::CacheClosed);
        }
        let key = key.into();
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            return Err(ServiceError::CacheFull(self.capacity));
        }
        self.entries.insert(key, value.into());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Drops every entry and refuses further inserts.
    pub fn close(&mut self) {
        self.entries.clear();
        self.open = false;
    }
}
