//! # Composition Module
//!
//! Turns a target pair of charged-residue fractions and a sequence length into exact
//! per-residue counts.
//!
//! ## Rounding Policy
//!
//! 1. The positive and negative class totals are `floor(fraction * length)`; the neutral
//!    class takes the rest, so the three totals always sum to the sequence length.
//! 2. Inside each class, every residue except one receives
//!    `round(class_total * abundance)` copies (half to even). The designated residual
//!    residue (K, E, S for positive, negative, neutral) takes whatever remains, which
//!    keeps each class subtotal exact.
//!
//! The relative abundances are fixed and live in [`abundance`].

pub mod abundance;
pub mod resolver;
