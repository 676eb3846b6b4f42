use crate::core::models::amino_acid::AminoAcid;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of permutations applied to each resolved residue multiset.
pub trait Permuter {
    fn permute(&mut self, residues: &mut [AminoAcid]);
}

/// Uniformly random permutation (Fisher-Yates) driven by any `Rng`.
#[derive(Debug, Clone)]
pub struct UniformPermuter<R: Rng> {
    rng: R,
}

impl<R: Rng> UniformPermuter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformPermuter<StdRng> {
    /// Seeded from `seed` when given, from OS entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> Permuter for UniformPermuter<R> {
    fn permute(&mut self, residues: &mut [AminoAcid]) {
        residues.shuffle(&mut self.rng);
    }
}

/// Leaves residues in their canonical class order.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityPermuter;

impl Permuter for IdentityPermuter {
    fn permute(&mut self, _residues: &mut [AminoAcid]) {}
}

pub fn permuted_sequence(mut residues: Vec<AminoAcid>, permuter: &mut impl Permuter) -> String {
    permuter.permute(&mut residues);
    residues.iter().map(|aa| aa.code()).collect()
}
