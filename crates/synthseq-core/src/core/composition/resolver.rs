use super::abundance::{self, ClassAbundance};
use crate::core::models::amino_acid::{AminoAcid, ChargeClass};
use thiserror::Error;
use tracing::{instrument, trace};

/// Slack allowed when checking that a fraction pair stays inside the unit simplex.
pub const FRACTION_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum CompositionError {
    #[error(
        "Invalid fractions (positive = {positive}, negative = {negative}): each must lie in [0, 1] and their sum must not exceed 1"
    )]
    InvalidFraction { positive: f64, negative: f64 },

    #[error("Rounded {class} residue counts ({assigned}) exceed the class total ({total})")]
    ResidualUnderflow {
        class: ChargeClass,
        total: usize,
        assigned: usize,
    },
}

/// Per-residue counts for one charge class, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassCounts {
    class: ChargeClass,
    counts: Vec<(AminoAcid, usize)>,
}

impl ClassCounts {
    pub fn class(&self) -> ChargeClass {
        self.class
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|&(_, n)| n).sum()
    }

    pub fn get(&self, amino_acid: AminoAcid) -> Option<usize> {
        self.counts
            .iter()
            .find(|(aa, _)| *aa == amino_acid)
            .map(|&(_, n)| n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AminoAcid, usize)> + '_ {
        self.counts.iter().copied()
    }

    fn extend_residues(&self, residues: &mut Vec<AminoAcid>) {
        for &(aa, n) in &self.counts {
            residues.extend(std::iter::repeat_n(aa, n));
        }
    }
}

/// Number of residues assigned to each charge class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassTotals {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl ClassTotals {
    pub fn get(&self, class: ChargeClass) -> usize {
        match class {
            ChargeClass::Positive => self.positive,
            ChargeClass::Negative => self.negative,
            ChargeClass::Neutral => self.neutral,
        }
    }
}

/// Resolved, not yet permuted residue composition of one sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    positive: ClassCounts,
    negative: ClassCounts,
    neutral: ClassCounts,
}

impl Composition {
    pub fn class(&self, class: ChargeClass) -> &ClassCounts {
        match class {
            ChargeClass::Positive => &self.positive,
            ChargeClass::Negative => &self.negative,
            ChargeClass::Neutral => &self.neutral,
        }
    }

    pub fn count_of(&self, amino_acid: AminoAcid) -> usize {
        self.class(amino_acid.charge_class())
            .get(amino_acid)
            .unwrap_or(0)
    }

    pub fn totals(&self) -> ClassTotals {
        ClassTotals {
            positive: self.positive.total(),
            negative: self.negative.total(),
            neutral: self.neutral.total(),
        }
    }

    pub fn len(&self) -> usize {
        self.positive.total() + self.negative.total() + self.neutral.total()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Residues in canonical order: positive, then negative, then neutral, each
    /// class in table order with its residual residue last.
    pub fn to_residues(&self) -> Vec<AminoAcid> {
        let mut residues = Vec::with_capacity(self.len());
        self.positive.extend_residues(&mut residues);
        self.negative.extend_residues(&mut residues);
        self.neutral.extend_residues(&mut residues);
        residues
    }

    pub fn to_sequence_string(&self) -> String {
        self.to_residues().iter().map(|aa| aa.code()).collect()
    }
}

/// Splits `total` residues of one class according to `table`.
///
/// Every non-residual residue gets `round(total * abundance)` copies, rounding half to
/// even; the residual residue takes `total` minus their sum.
pub fn apportion(total: usize, table: &ClassAbundance) -> Result<ClassCounts, CompositionError> {
    let mut counts = Vec::with_capacity(table.entries.len());
    let mut assigned = 0usize;

    for &(aa, fraction) in table.entries {
        if aa == table.residual {
            continue;
        }
        let n = (total as f64 * fraction).round_ties_even() as usize;
        assigned += n;
        counts.push((aa, n));
    }

    let remainder = total
        .checked_sub(assigned)
        .ok_or(CompositionError::ResidualUnderflow {
            class: table.class,
            total,
            assigned,
        })?;
    counts.push((table.residual, remainder));

    Ok(ClassCounts {
        class: table.class,
        counts,
    })
}

/// Splits `sequence_length` into positive, negative and neutral totals.
///
/// Charged totals are truncated; the neutral class absorbs the truncation error.
pub fn class_totals(
    fraction_positive: f64,
    fraction_negative: f64,
    sequence_length: usize,
) -> Result<ClassTotals, CompositionError> {
    let invalid = || CompositionError::InvalidFraction {
        positive: fraction_positive,
        negative: fraction_negative,
    };

    if !is_unit_fraction(fraction_positive)
        || !is_unit_fraction(fraction_negative)
        || fraction_positive + fraction_negative > 1.0 + FRACTION_TOLERANCE
    {
        return Err(invalid());
    }

    let positive = truncated_count(fraction_positive, sequence_length);
    let negative = truncated_count(fraction_negative, sequence_length);
    let neutral = sequence_length
        .checked_sub(positive + negative)
        .ok_or_else(invalid)?;

    Ok(ClassTotals {
        positive,
        negative,
        neutral,
    })
}

/// Resolves the exact residue composition for a target pair of charged fractions.
#[instrument(level = "trace")]
pub fn resolve_composition(
    fraction_positive: f64,
    fraction_negative: f64,
    sequence_length: usize,
) -> Result<Composition, CompositionError> {
    let totals = class_totals(fraction_positive, fraction_negative, sequence_length)?;
    trace!(
        positive = totals.positive,
        negative = totals.negative,
        neutral = totals.neutral,
        "Resolved class totals."
    );

    let apportion_class = |class: ChargeClass| apportion(totals.get(class), abundance::table_for(class));
    Ok(Composition {
        positive: apportion_class(ChargeClass::Positive)?,
        negative: apportion_class(ChargeClass::Negative)?,
        neutral: apportion_class(ChargeClass::Neutral)?,
    })
}

fn is_unit_fraction(fraction: f64) -> bool {
    (0.0..=1.0 + FRACTION_TOLERANCE).contains(&fraction)
}

fn truncated_count(fraction: f64, sequence_length: usize) -> usize {
    let count = (fraction * sequence_length as f64).floor() as usize;
    count.min(sequence_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::composition::abundance::{NEGATIVE, NEUTRAL, POSITIVE};

    #[test]
    fn apportion_class_sum_is_exact_for_every_total() {
        for table in [&POSITIVE, &NEGATIVE, &NEUTRAL] {
            for total in 0..=2000 {
                let counts = apportion(total, table).unwrap();
                assert_eq!(counts.total(), total, "{} drifted at {}", table.class, total);
            }
        }
    }

    #[test]
    fn apportion_rounds_half_to_even() {
        // 50 * 0.37 == 18.5
        let negative = apportion(50, &NEGATIVE).unwrap();
        assert_eq!(negative.get(AminoAcid::AsparticAcid), Some(18));
        assert_eq!(negative.get(AminoAcid::GlutamicAcid), Some(32));

        // 5 * 0.10 == 0.5
        let neutral = apportion(5, &NEUTRAL).unwrap();
        assert_eq!(neutral.get(AminoAcid::Glycine), Some(0));
    }

    #[test]
    fn apportion_gives_single_residue_to_the_residual() {
        let positive = apportion(1, &POSITIVE).unwrap();
        assert_eq!(positive.get(AminoAcid::Arginine), Some(0));
        assert_eq!(positive.get(AminoAcid::Lysine), Some(1));

        let neutral = apportion(1, &NEUTRAL).unwrap();
        assert_eq!(neutral.get(AminoAcid::Serine), Some(1));
        assert_eq!(neutral.total(), 1);
    }

    #[test]
    fn apportion_of_zero_yields_all_zero_counts() {
        let neutral = apportion(0, &NEUTRAL).unwrap();
        assert_eq!(neutral.iter().count(), 16);
        assert!(neutral.iter().all(|(_, n)| n == 0));
    }

    #[test]
    fn apportion_reports_underflow_when_rounded_counts_overshoot() {
        static GREEDY: ClassAbundance = ClassAbundance {
            class: ChargeClass::Neutral,
            entries: &[
                (AminoAcid::Alanine, 0.6),
                (AminoAcid::Glycine, 0.6),
                (AminoAcid::Serine, 0.0),
            ],
            residual: AminoAcid::Serine,
        };
        assert_eq!(
            apportion(1, &GREEDY),
            Err(CompositionError::ResidualUnderflow {
                class: ChargeClass::Neutral,
                total: 1,
                assigned: 2,
            })
        );
    }

    #[test]
    fn all_neutral_sequence_of_one_hundred_residues() {
        let composition = resolve_composition(0.0, 0.0, 100).unwrap();
        let totals = composition.totals();
        assert_eq!(totals.positive, 0);
        assert_eq!(totals.negative, 0);
        assert_eq!(totals.neutral, 100);

        let expected: [(AminoAcid, usize); 16] = [
            (AminoAcid::Proline, 11),
            (AminoAcid::Glutamine, 7),
            (AminoAcid::Alanine, 11),
            (AminoAcid::Glycine, 10),
            (AminoAcid::Threonine, 8),
            (AminoAcid::Methionine, 3),
            (AminoAcid::Asparagine, 5),
            (AminoAcid::Valine, 8),
            (AminoAcid::Histidine, 3),
            (AminoAcid::Leucine, 9),
            (AminoAcid::Phenylalanine, 3),
            (AminoAcid::Tyrosine, 3),
            (AminoAcid::Isoleucine, 5),
            (AminoAcid::Tryptophan, 1),
            (AminoAcid::Cysteine, 1),
            (AminoAcid::Serine, 12),
        ];
        let neutral: Vec<_> = composition.class(ChargeClass::Neutral).iter().collect();
        assert_eq!(neutral, expected);
    }

    #[test]
    fn half_positive_half_negative_sequence() {
        let composition = resolve_composition(0.5, 0.5, 100).unwrap();
        assert_eq!(
            composition.totals(),
            ClassTotals {
                positive: 50,
                negative: 50,
                neutral: 0
            }
        );
        assert_eq!(composition.count_of(AminoAcid::Arginine), 19);
        assert_eq!(composition.count_of(AminoAcid::Lysine), 31);
        assert_eq!(composition.count_of(AminoAcid::AsparticAcid), 18);
        assert_eq!(composition.count_of(AminoAcid::GlutamicAcid), 32);
        assert_eq!(composition.class(ChargeClass::Neutral).total(), 0);
    }

    #[test]
    fn resolved_length_matches_requested_length_on_a_fine_grid() {
        let n_bins = 20;
        for length in [0, 1, 7, 10, 33, 100, 257] {
            for kp in 0..=n_bins {
                for kn in 0..=(n_bins - kp) {
                    let fp = kp as f64 / n_bins as f64;
                    let fn_ = kn as f64 / n_bins as f64;
                    let composition = resolve_composition(fp, fn_, length).unwrap();
                    assert_eq!(composition.len(), length);
                    assert_eq!(composition.to_residues().len(), length);
                }
            }
        }
    }

    #[test]
    fn truncation_is_a_plain_floor_of_the_float_product() {
        // 0.29 * 100.0 == 28.999999999999996 and 0.57 * 100.0 == 56.99999999999999
        let totals = class_totals(0.29, 0.57, 100).unwrap();
        assert_eq!(totals.positive, 28);
        assert_eq!(totals.negative, 56);
        assert_eq!(totals.neutral, 16);
        assert_eq!(totals.get(ChargeClass::Neutral), 16);
    }

    #[test]
    fn neutral_class_absorbs_truncation_error() {
        let totals = class_totals(0.33, 0.33, 10).unwrap();
        assert_eq!(totals.positive, 3);
        assert_eq!(totals.negative, 3);
        assert_eq!(totals.neutral, 4);
    }

    #[test]
    fn inadmissible_fraction_pairs_are_rejected() {
        assert_eq!(
            resolve_composition(0.6, 0.6, 100),
            Err(CompositionError::InvalidFraction {
                positive: 0.6,
                negative: 0.6
            })
        );
        assert!(resolve_composition(-0.1, 0.0, 100).is_err());
        assert!(resolve_composition(0.0, 1.5, 100).is_err());
        assert!(resolve_composition(f64::NAN, 0.0, 100).is_err());
    }

    #[test]
    fn fraction_sum_equal_to_one_is_admissible() {
        let composition = resolve_composition(0.3, 0.7, 10).unwrap();
        assert_eq!(composition.totals().neutral, 0);
        assert_eq!(composition.len(), 10);
    }

    #[test]
    fn residues_are_ordered_by_class_then_table_order() {
        let composition = resolve_composition(0.1, 0.1, 20).unwrap();
        let sequence = composition.to_sequence_string();
        assert!(sequence.starts_with("RKDE"), "unexpected order: {sequence}");
        assert!(sequence.ends_with('S'));
        assert_eq!(sequence.len(), 20);
    }

    #[test]
    fn empty_length_yields_empty_composition() {
        let composition = resolve_composition(0.5, 0.25, 0).unwrap();
        assert!(composition.is_empty());
        assert!(composition.to_residues().is_empty());
    }
}
