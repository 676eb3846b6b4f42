use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChargeClass {
    Positive,
    Negative,
    Neutral,
}

impl ChargeClass {
    pub const ALL: [ChargeClass; 3] = [
        ChargeClass::Positive,
        ChargeClass::Negative,
        ChargeClass::Neutral,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChargeClass::Positive => "positive",
            ChargeClass::Negative => "negative",
            ChargeClass::Neutral => "neutral",
        }
    }
}

impl fmt::Display for ChargeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    // --- Positively Charged (Basic) ---
    Arginine, // R
    Lysine,   // K

    // --- Negatively Charged (Acidic) ---
    AsparticAcid, // D
    GlutamicAcid, // E

    // --- Neutral ---
    Alanine,       // A
    Asparagine,    // N
    Cysteine,      // C
    Glutamine,     // Q
    Glycine,       // G
    Histidine,     // H
    Isoleucine,    // I
    Leucine,       // L
    Methionine,    // M
    Phenylalanine, // F
    Proline,       // P
    Serine,        // S
    Threonine,     // T
    Tryptophan,    // W
    Tyrosine,      // Y
    Valine,        // V
}

static ONE_LETTER_CODES: Map<char, AminoAcid> = phf_map! {
    'R' => AminoAcid::Arginine,
    'K' => AminoAcid::Lysine,
    'D' => AminoAcid::AsparticAcid,
    'E' => AminoAcid::GlutamicAcid,
    'A' => AminoAcid::Alanine,
    'N' => AminoAcid::Asparagine,
    'C' => AminoAcid::Cysteine,
    'Q' => AminoAcid::Glutamine,
    'G' => AminoAcid::Glycine,
    'H' => AminoAcid::Histidine,
    'I' => AminoAcid::Isoleucine,
    'L' => AminoAcid::Leucine,
    'M' => AminoAcid::Methionine,
    'F' => AminoAcid::Phenylalanine,
    'P' => AminoAcid::Proline,
    'S' => AminoAcid::Serine,
    'T' => AminoAcid::Threonine,
    'W' => AminoAcid::Tryptophan,
    'Y' => AminoAcid::Tyrosine,
    'V' => AminoAcid::Valine,
};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseAminoAcidError {
    #[error("Unknown one-letter amino acid code: '{0}'")]
    UnknownCode(char),
    #[error("Expected a single one-letter code, got '{0}'")]
    NotSingleLetter(String),
}

impl AminoAcid {
    pub fn from_code(code: char) -> Result<Self, ParseAminoAcidError> {
        ONE_LETTER_CODES
            .get(&code.to_ascii_uppercase())
            .copied()
            .ok_or(ParseAminoAcidError::UnknownCode(code))
    }

    pub fn code(self) -> char {
        match self {
            AminoAcid::Arginine => 'R',
            AminoAcid::Lysine => 'K',
            AminoAcid::AsparticAcid => 'D',
            AminoAcid::GlutamicAcid => 'E',
            AminoAcid::Alanine => 'A',
            AminoAcid::Asparagine => 'N',
            AminoAcid::Cysteine => 'C',
            AminoAcid::Glutamine => 'Q',
            AminoAcid::Glycine => 'G',
            AminoAcid::Histidine => 'H',
            AminoAcid::Isoleucine => 'I',
            AminoAcid::Leucine => 'L',
            AminoAcid::Methionine => 'M',
            AminoAcid::Phenylalanine => 'F',
            AminoAcid::Proline => 'P',
            AminoAcid::Serine => 'S',
            AminoAcid::Threonine => 'T',
            AminoAcid::Tryptophan => 'W',
            AminoAcid::Tyrosine => 'Y',
            AminoAcid::Valine => 'V',
        }
    }

    pub fn charge_class(self) -> ChargeClass {
        match self {
            AminoAcid::Arginine | AminoAcid::Lysine => ChargeClass::Positive,
            AminoAcid::AsparticAcid | AminoAcid::GlutamicAcid => ChargeClass::Negative,
            _ => ChargeClass::Neutral,
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for AminoAcid {
    type Err = ParseAminoAcidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_code(c),
            _ => Err(ParseAminoAcidError::NotSingleLetter(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_and_code_are_inverse_for_all_twenty_residues() {
        for (&code, &aa) in ONE_LETTER_CODES.entries() {
            assert_eq!(aa.code(), code);
            assert_eq!(AminoAcid::from_code(code), Ok(aa));
        }
        assert_eq!(ONE_LETTER_CODES.len(), 20);
    }

    #[test]
    fn from_code_is_case_insensitive() {
        assert_eq!(AminoAcid::from_code('k'), Ok(AminoAcid::Lysine));
        assert_eq!(AminoAcid::from_code('w'), Ok(AminoAcid::Tryptophan));
    }

    #[test]
    fn from_code_rejects_non_standard_letters() {
        assert_eq!(
            AminoAcid::from_code('X'),
            Err(ParseAminoAcidError::UnknownCode('X'))
        );
        assert_eq!(
            AminoAcid::from_code('B'),
            Err(ParseAminoAcidError::UnknownCode('B'))
        );
    }

    #[test]
    fn from_str_trims_whitespace_and_requires_a_single_letter() {
        assert_eq!(" E ".parse::<AminoAcid>(), Ok(AminoAcid::GlutamicAcid));
        assert!(matches!(
            "GLU".parse::<AminoAcid>(),
            Err(ParseAminoAcidError::NotSingleLetter(_))
        ));
        assert!(matches!(
            "".parse::<AminoAcid>(),
            Err(ParseAminoAcidError::NotSingleLetter(_))
        ));
    }

    #[test]
    fn charge_class_groups_residues_by_side_chain_charge() {
        assert_eq!(AminoAcid::Arginine.charge_class(), ChargeClass::Positive);
        assert_eq!(AminoAcid::Lysine.charge_class(), ChargeClass::Positive);
        assert_eq!(AminoAcid::AsparticAcid.charge_class(), ChargeClass::Negative);
        assert_eq!(AminoAcid::GlutamicAcid.charge_class(), ChargeClass::Negative);
        assert_eq!(AminoAcid::Histidine.charge_class(), ChargeClass::Neutral);
        assert_eq!(AminoAcid::Serine.charge_class(), ChargeClass::Neutral);
    }

    #[test]
    fn display_writes_the_one_letter_code() {
        assert_eq!(AminoAcid::Proline.to_string(), "P");
        assert_eq!(ChargeClass::Negative.to_string(), "negative");
    }
}
