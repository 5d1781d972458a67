// Rule catalogue

use crate::{Builtin, RuleDefinition};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Immutable set of rule definitions, keyed by name.
///
/// Build one at startup and share it; lookups never mutate.
#[derive(Clone)]
pub struct Catalogue {
    rules: Arc<HashMap<String, Arc<dyn RuleDefinition>>>,
}

impl Catalogue {
    /// Catalogue containing only the built-in rules
    pub fn builtin() -> Self {
        Self::builder().with_builtins().build()
    }

    /// Start an empty catalogue
    pub fn builder() -> CatalogueBuilder {
        CatalogueBuilder::new()
    }

    /// Look up a rule definition
    pub fn get(&self, name: &str) -> Option<&Arc<dyn RuleDefinition>> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for Catalogue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalogue")
            .field("rules", &self.names())
            .finish()
    }
}

/// Builder for [`Catalogue`]
#[derive(Default)]
pub struct CatalogueBuilder {
    rules: HashMap<String, Arc<dyn RuleDefinition>>,
}

impl CatalogueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every built-in rule
    pub fn with_builtins(mut self) -> Self {
        for builtin in Builtin::ALL {
            self.rules
                .insert(builtin.as_str().to_string(), Arc::new(builtin));
        }
        self
    }

    /// Register a definition, replacing any rule of the same name
    pub fn register<R>(mut self, rule: R) -> Self
    where
        R: RuleDefinition + 'static,
    {
        let name = rule.name().to_string();
        if self.rules.insert(name.clone(), Arc::new(rule)).is_some() {
            tracing::debug!(rule = %name, "Replacing registered rule");
        }
        self
    }

    /// Drop a rule by name
    pub fn remove(mut self, name: &str) -> Self {
        self.rules.remove(name);
        self
    }

    pub fn build(self) -> Catalogue {
        Catalogue {
            rules: Arc::new(self.rules),
        }
    }
}
