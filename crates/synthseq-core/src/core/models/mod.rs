//! # Core Models Module
//!
//! Plain data types shared by every layer of the crate.
//!
//! ## Key Components
//!
//! - [`amino_acid`] - The twenty standard residues, their one-letter codes, and their
//!   charge class (positive, negative, or neutral at physiological pH)
//! - [`record`] - A single labeled sequence and the ordered dataset that collects them
//!
//! ## Usage
//!
//! ```ignore
//! use synthseq::core::models::amino_acid::{AminoAcid, ChargeClass};
//!
//! let lys: AminoAcid = "K".parse()?;
//! assert_eq!(lys.charge_class(), ChargeClass::Positive);
//! ```

pub mod amino_acid;
pub mod record;
