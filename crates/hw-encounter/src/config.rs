//! Configuration for encounter generation.

/// Default limit on nested table lookups.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// RNG seed for reproducible rolls; `None` draws from the OS.
    pub seed: Option<u64>,
    /// Maximum nesting of table lookups before resolution is abandoned.
    pub max_depth: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl GeneratorConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the maximum table nesting depth (at least 1).
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    /// Build the random provider this configuration describes.
    pub fn random(&self) -> hw_mechanics::SeededRandom {
        match self.seed {
            Some(seed) => hw_mechanics::SeededRandom::new(seed),
            None => hw_mechanics::SeededRandom::from_os(),
        }
    }
}
