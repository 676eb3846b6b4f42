use serde::{Deserialize, Serialize};

/// One labeled sequence produced for a single admissible grid point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRecord {
    pub idx: usize, // 1-based, assigned in grid enumeration order
    pub f_positive: f64,
    pub f_negative: f64,
    pub sequence: String,
}

impl GeneratedRecord {
    pub fn f_neutral(&self) -> f64 {
        1.0 - (self.f_positive + self.f_negative)
    }
}

/// Ordered, append-only collection of generated records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<GeneratedRecord>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: GeneratedRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[GeneratedRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeneratedRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<GeneratedRecord>> for Dataset {
    fn from(records: Vec<GeneratedRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a GeneratedRecord;
    type IntoIter = std::slice::Iter<'a, GeneratedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
