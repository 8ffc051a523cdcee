//! Configuration management for the demo driver

use crate::error::{SortError, SortResult};
use crate::method::SortMethod;

/// Number of items sorted when none is requested
pub const DEFAULT_NUM_ITEMS: usize = 1000;

/// Smallest sequence the demo agrees to sort
pub const MIN_NUM_ITEMS: usize = 2;

/// Main configuration structure for a demo run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Methods to run, each on its own copy of the same input
    pub methods: Vec<SortMethod>,
    /// Number of random integers to generate
    pub num_items: usize,
    /// Dump the unsorted and sorted lists
    pub debug: bool,
    /// Seed for the data generator; random when absent
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            methods: Vec::new(),
            num_items: DEFAULT_NUM_ITEMS,
            debug: false,
            seed: None,
        }
    }
}

impl DemoConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a method; selecting it twice has no further effect
    pub fn with_method(mut self, method: SortMethod) -> Self {
        if !self.methods.contains(&method) {
            self.methods.push(method);
        }
        self
    }

    /// Select every method
    pub fn with_all_methods(mut self) -> Self {
        self.methods = SortMethod::ALL.to_vec();
        self
    }

    pub fn with_num_items(mut self, num_items: usize) -> Self {
        self.num_items = num_items;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        if self.methods.is_empty() {
            return Err(SortError::NoMethodSelected);
        }

        if self.num_items < MIN_NUM_ITEMS {
            return Err(SortError::TooFewItems {
                count: self.num_items,
            });
        }

        Ok(())
    }

    /// Selected methods in canonical run order, regardless of selection order
    pub fn run_order(&self) -> impl Iterator<Item = SortMethod> + '_ {
        SortMethod::ALL
            .into_iter()
            .filter(move |method| self.methods.contains(method))
    }
}

/// Builder pattern for creating configurations
pub struct DemoConfigBuilder {
    config: DemoConfig,
}

impl DemoConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self {
            config: DemoConfig::default(),
        }
    }

    pub fn method(mut self, method: SortMethod) -> Self {
        self.config = self.config.with_method(method);
        self
    }

    pub fn all_methods(mut self) -> Self {
        self.config = self.config.with_all_methods();
        self
    }

    pub fn num_items(mut self, num_items: usize) -> Self {
        self.config.num_items = num_items;
        self
    }

    pub fn debug(mut self) -> Self {
        self.config.debug = true;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the final configuration
    pub fn build(self) -> SortResult<DemoConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for DemoConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
