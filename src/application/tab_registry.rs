// Tab registry - Resolves a tab id to the view that fills the content area
use crate::domain::tab::Tab;
use crate::presentation::view::ViewFactory;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("a component is already registered for tab '{0}'")]
    Duplicate(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("no tab declares id '{0}'")]
    Undeclared(String),
    #[error("tab '{0}' is declared but has no registered component")]
    Unregistered(String),
}

/// Collects registrations from a static mapping before the tab list is known.
#[derive(Clone, Default)]
pub struct TabRegistryBuilder {
    map: HashMap<String, ViewFactory>,
}

impl TabRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: &str, factory: ViewFactory) -> Result<(), RegistryError> {
        if self.map.contains_key(id) {
            return Err(RegistryError::Duplicate(id.to_string()));
        }
        self.map.insert(id.to_string(), factory);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.map.contains_key(id)
    }

    /// Freeze the registry against the configured tab list.
    pub fn seal(self, tabs: &[Tab]) -> TabRegistry {
        let declared: Vec<String> = tabs.iter().map(|t| t.id.clone()).collect();

        let mut orphans: Vec<&str> = self
            .map
            .keys()
            .filter(|id| !declared.contains(id))
            .map(String::as_str)
            .collect();
        orphans.sort_unstable();
        for id in orphans {
            tracing::warn!("Component registered for '{}' but no tab declares it", id);
        }

        TabRegistry {
            declared,
            map: self.map,
        }
    }
}

/// Read-only association from declared tab id to view factory.
#[derive(Clone)]
pub struct TabRegistry {
    declared: Vec<String>,
    map: HashMap<String, ViewFactory>,
}

impl TabRegistry {
    pub fn resolve(&self, id: &str) -> Result<&ViewFactory, ResolveError> {
        if !self.declared.iter().any(|d| d == id) {
            return Err(ResolveError::Undeclared(id.to_string()));
        }
        self.map
            .get(id)
            .ok_or_else(|| ResolveError::Unregistered(id.to_string()))
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.map.contains_key(id)
    }

    /// Declared tab ids in navigation order.
    pub fn tab_ids(&self) -> impl Iterator<Item = &str> {
        self.declared.iter().map(String::as_str)
    }

    /// Registered ids, sorted.
    pub fn registered_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.map.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl PartialEq for TabRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.declared == other.declared
            && self.registered_ids() == other.registered_ids()
            && self
                .map
                .iter()
                .all(|(id, factory)| other.map.get(id).map(ViewFactory::name) == Some(factory.name()))
    }
}

impl fmt::Debug for TabRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabRegistry")
            .field("declared", &self.declared)
            .field("registered", &self.registered_ids())
            .finish()
    }
}
