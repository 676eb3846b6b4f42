use super::config::ConfigError;
use crate::core::composition::resolver::CompositionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Composition failed at grid point (f_positive = {f_positive}, f_negative = {f_negative}): {source}")]
    Composition {
        f_positive: f64,
        f_negative: f64,
        #[source]
        source: CompositionError,
    },
}
