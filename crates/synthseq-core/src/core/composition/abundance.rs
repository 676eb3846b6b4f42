use crate::core::models::amino_acid::{AminoAcid, ChargeClass};

/// Relative abundances of the residues inside one charge class.
///
/// `entries` lists the residues in output order. Every residue except `residual`
/// receives `round(total * abundance)` copies; `residual` absorbs whatever is left
/// so the class subtotal is exact. The residual residue is always the last entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassAbundance {
    pub class: ChargeClass,
    pub entries: &'static [(AminoAcid, f64)],
    pub residual: AminoAcid,
}

impl ClassAbundance {
    pub fn residues(&self) -> impl Iterator<Item = AminoAcid> + '_ {
        self.entries.iter().map(|&(aa, _)| aa)
    }
}

// R/(R+K) = 0.38 from the DisProt disordered-region composition (K 7.85%, R 4.82%).
pub static POSITIVE: ClassAbundance = ClassAbundance {
    class: ChargeClass::Positive,
    entries: &[(AminoAcid::Arginine, 0.38), (AminoAcid::Lysine, 0.62)],
    residual: AminoAcid::Lysine,
};

pub static NEGATIVE: ClassAbundance = ClassAbundance {
    class: ChargeClass::Negative,
    entries: &[(AminoAcid::AsparticAcid, 0.37), (AminoAcid::GlutamicAcid, 0.63)],
    residual: AminoAcid::GlutamicAcid,
};

// Serine's nominal share is the remainder, 1 - 0.88.
pub static NEUTRAL: ClassAbundance = ClassAbundance {
    class: ChargeClass::Neutral,
    entries: &[
        (AminoAcid::Proline, 0.11),
        (AminoAcid::Glutamine, 0.07),
        (AminoAcid::Alanine, 0.11),
        (AminoAcid::Glycine, 0.10),
        (AminoAcid::Threonine, 0.08),
        (AminoAcid::Methionine, 0.03),
        (AminoAcid::Asparagine, 0.05),
        (AminoAcid::Valine, 0.08),
        (AminoAcid::Histidine, 0.03),
        (AminoAcid::Leucine, 0.09),
        (AminoAcid::Phenylalanine, 0.03),
        (AminoAcid::Tyrosine, 0.03),
        (AminoAcid::Isoleucine, 0.05),
        (AminoAcid::Tryptophan, 0.01),
        (AminoAcid::Cysteine, 0.01),
        (AminoAcid::Serine, 0.12),
    ],
    residual: AminoAcid::Serine,
};

pub fn table_for(class: ChargeClass) -> &'static ClassAbundance {
    match class {
        ChargeClass::Positive => &POSITIVE,
        ChargeClass::Negative => &NEGATIVE,
        ChargeClass::Neutral => &NEUTRAL,
    }
}
