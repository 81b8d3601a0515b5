// registry.rs - Generator registry for managing available generators

use super::traits::SequenceGenerator;
use super::{Crc32Generator, Md5Generator, Sha256Generator};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry for available generators
pub struct GeneratorRegistry {
    generators: HashMap<String, Arc<dyn SequenceGenerator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            generators: HashMap::new(),
        };

        // Register built-in generators
        registry.register_generator("sha256", Arc::new(Sha256Generator));
        registry.register_generator("md5", Arc::new(Md5Generator));
        registry.register_generator("crc32", Arc::new(Crc32Generator));

        registry
    }

    /// Register a new generator
    pub fn register_generator(&mut self, name: &str, generator: Arc<dyn SequenceGenerator>) {
        self.generators.insert(name.to_string(), generator);
    }

    /// Get a generator by name
    pub fn get_generator(&self, name: &str) -> Option<Arc<dyn SequenceGenerator>> {
        self.generators.get(name).cloned()
    }

    pub fn has_generator(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    /// List all available generators as (name, description)
    pub fn list_generators(&self) -> Vec<(&str, &str)> {
        let mut list: Vec<(&str, &str)> = self
            .generators
            .values()
            .map(|g| (g.name(), g.description()))
            .collect();
        list.sort();
        list
    }

    /// Get all registered keys, sorted
    pub fn get_generator_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.generators.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
