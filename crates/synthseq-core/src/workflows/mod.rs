//! # Workflows Module
//!
//! High-level entry points that tie the [`core`](crate::core) resolver and the
//! [`engine`](crate::engine) grid together.
//!
//! - **Generation Workflow** ([`generate`]) - Sweeps every admissible grid point, resolves
//!   its composition, permutes it, and collects the labeled [`Dataset`](crate::core::models::record::Dataset).

pub mod generate;
