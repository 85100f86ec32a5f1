//! # System Configuration
//!
//! [`SystemConfig`] is the ordered list of components making up a system.
//! Declaration order is the start order, and its reverse is the stop order.
//! There is no dependency graph: a component that reads another one from the
//! registry must be declared after it.
//!
//! Order is kept explicitly in a `Vec`, so it never depends on hashing.

use crate::component::ComponentSpec;
use crate::error::LifecycleError;

/// Ordered, name-unique set of component declarations.
#[derive(Debug)]
pub struct SystemConfig<C, I> {
    components: Vec<(String, ComponentSpec<C, I>)>,
}

impl<C, I> Default for SystemConfig<C, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, I> SystemConfig<C, I> {
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Appends a component. Fails with `DuplicateComponent` if the name is taken.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        spec: ComponentSpec<C, I>,
    ) -> Result<(), LifecycleError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(LifecycleError::DuplicateComponent(name));
        }
        self.components.push((name, spec));
        Ok(())
    }

    /// Chaining form of [`insert`](Self::insert).
    pub fn with_component(
        mut self,
        name: impl Into<String>,
        spec: ComponentSpec<C, I>,
    ) -> Result<Self, LifecycleError> {
        self.insert(name, spec)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&ComponentSpec<C, I>> {
        self.components
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, spec)| spec)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Component names in declaration order. Use `.rev()` for stop order.
    pub fn names(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.components.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &ComponentSpec<C, I>)> {
        self.components.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routine::{StartRoutine, StopRoutine};

    fn spec(value: u32) -> ComponentSpec<u32, u32> {
        ComponentSpec::new(
            value,
            StartRoutine::blocking(|_, config| Ok(*config)),
            StopRoutine::blocking(|_| Ok(())),
        )
    }

    #[test]
    fn test_keeps_declaration_order() {
        let config = SystemConfig::new()
            .with_component("zeta", spec(1))
            .and_then(|c| c.with_component("alpha", spec(2)))
            .and_then(|c| c.with_component("mid", spec(3)))
            .unwrap();

        assert_eq!(config.names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(
            config.names().rev().collect::<Vec<_>>(),
            vec!["mid", "alpha", "zeta"]
        );
        assert_eq!(*config.get("alpha").unwrap().config(), 2);

        let declared: Vec<_> = config
            .iter()
            .rev()
            .map(|(name, spec)| (name, *spec.config()))
            .collect();
        assert_eq!(declared, vec![("mid", 3), ("alpha", 2), ("zeta", 1)]);
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let mut config = SystemConfig::new();
        config.insert("db", spec(1)).unwrap();

        let err = config.insert("db", spec(2)).unwrap_err();
        assert!(matches!(err, LifecycleError::DuplicateComponent(ref name) if name == "db"));
        assert_eq!(config.len(), 1);
        assert_eq!(*config.get("db").unwrap().config(), 1);
    }
}
