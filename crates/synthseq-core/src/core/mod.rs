//! # Core Module
//!
//! Stateless building blocks for synthetic sequence generation.
//!
//! - **Residue Model** ([`models`]) - Amino acids, charge classes, generated records and datasets
//! - **Composition** ([`composition`]) - Fixed intra-class abundance tables and the resolver that
//!   converts target fractions into exact residue counts
//! - **Persistence** ([`io`]) - Reading and writing datasets as CSV tables

pub mod composition;
pub mod io;
pub mod models;
