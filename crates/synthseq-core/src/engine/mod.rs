//! # Engine Module
//!
//! The stateful machinery behind a generation run.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Validated run parameters and their builder
//! - **Grid** ([`grid`]) - The discretized composition grid and its admissibility rule
//! - **Permutation** ([`permutation`]) - Injectable permutation sources; seeded and
//!   entropy-backed uniform shuffles for production, an identity permuter for inspection
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events for front ends
//! - **Error Handling** ([`error`]) - The error type returned by every workflow

pub mod config;
pub mod error;
pub mod grid;
pub mod permutation;
pub mod progress;
