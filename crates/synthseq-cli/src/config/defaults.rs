use std::path::PathBuf;

pub struct DefaultsConfig {
    pub protein_length: usize,
    pub n_bins: usize,
    pub output_path: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            protein_length: 100,
            n_bins: 20,
            output_path: PathBuf::from("sequence_100residues.csv"),
        }
    }
}
