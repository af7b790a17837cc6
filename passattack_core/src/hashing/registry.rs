//! Central registry for hash algorithm implementations

use super::traits::PasswordAlgorithm;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Central registry for all hash algorithms
pub struct AlgorithmRegistry {
    algorithms: RwLock<HashMap<String, Arc<dyn PasswordAlgorithm>>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    fn new() -> Self {
        Self {
            algorithms: RwLock::new(HashMap::new()),
        }
    }

    /// Get the global registry instance
    pub fn global() -> &'static Self {
        static INSTANCE: OnceCell<AlgorithmRegistry> = OnceCell::new();
        INSTANCE.get_or_init(|| {
            let mut registry = Self::new();
            // Register all built-in algorithms
            super::algorithms::register_all(&mut registry);
            registry
        })
    }

    /// Register a new algorithm
    pub fn register(&mut self, algorithm: impl PasswordAlgorithm + 'static) {
        let mut algorithms = self.algorithms.write().unwrap();
        let id = algorithm.id().to_string();
        algorithms.insert(id, Arc::new(algorithm));
    }

    /// Get algorithm by ID
    pub fn get(&self, id: &str) -> Option<Arc<dyn PasswordAlgorithm>> {
        let algorithms = self.algorithms.read().unwrap();
        algorithms.get(id).cloned()
    }

    /// List all registered algorithm IDs, sorted
    pub fn list(&self) -> Vec<String> {
        let algorithms = self.algorithms.read().unwrap();
        let mut ids: Vec<_> = algorithms.keys().cloned().collect();
        ids.sort();
        ids
    }
}
