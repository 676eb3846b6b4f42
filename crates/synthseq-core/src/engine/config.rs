use super::grid::FractionGrid;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Residues per generated sequence.
    pub protein_length: usize,
    /// Number of subdivisions of [0, 1]; the grid has `n_bins + 1` values per axis.
    pub n_bins: usize,
    /// Seed for the permutation source. `None` draws fresh entropy on every run.
    pub seed: Option<u64>,
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_bins == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "n_bins",
                reason: "the grid needs at least one bin".to_string(),
            });
        }
        if FractionGrid::new(self.n_bins).admissible_count().is_none() {
            return Err(ConfigError::InvalidParameter {
                name: "n_bins",
                reason: format!("a grid of {} bins has too many points to enumerate", self.n_bins),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct GenerationConfigBuilder {
    protein_length: Option<usize>,
    n_bins: Option<usize>,
    seed: Option<u64>,
}

impl GenerationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn protein_length(mut self, length: usize) -> Self {
        self.protein_length = Some(length);
        self
    }
    pub fn n_bins(mut self, n_bins: usize) -> Self {
        self.n_bins = Some(n_bins);
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<GenerationConfig, ConfigError> {
        let protein_length = self
            .protein_length
            .ok_or(ConfigError::MissingParameter("protein_length"))?;
        let n_bins = self
            .n_bins
            .ok_or(ConfigError::MissingParameter("n_bins"))?;

        let config = GenerationConfig {
            protein_length,
            n_bins,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
