//! # Synthseq Core Library
//!
//! Generates synthetic amino-acid sequences with controlled fractions of positively
//! charged, negatively charged, and neutral residues, spanning a grid of composition
//! values, as labeled training data for models of protein charge patterning.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless residue models, the fixed intra-class
//!   abundance tables, the composition resolver, and CSV persistence.
//!
//! - **[`engine`]: The Machinery.** Run configuration, the composition grid and its
//!   admissibility rule, permutation sources, progress reporting, and errors.
//!
//! - **[`workflows`]: The Public API.** The grid sweep that produces a complete
//!   dataset from a configuration.
//!
//! ## Example
//!
//! ```no_run
//! use synthseq::core::io::dataset::write_dataset;
//! use synthseq::engine::config::GenerationConfigBuilder;
//! use synthseq::engine::progress::ProgressReporter;
//! use synthseq::workflows::generate;
//!
//! let config = GenerationConfigBuilder::new()
//!     .protein_length(100)
//!     .n_bins(20)
//!     .build()?;
//! let dataset = generate::run(&config, &ProgressReporter::new())?;
//! write_dataset(&dataset, std::path::Path::new("sequence_100residues.csv"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
