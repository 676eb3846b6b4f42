//! Persistence of generated datasets.
//!
//! Datasets are stored as CSV tables with one row per generated sequence and the
//! columns `idx`, `f_positive`, `f_negative`, `sequence`.

pub mod dataset;
