use crate::core::models::record::{Dataset, GeneratedRecord};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

pub fn write_to<W: Write>(dataset: &Dataset, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in dataset {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn read_from<R: Read>(reader: R) -> Result<Dataset, csv::Error> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let records = csv_reader
        .deserialize::<GeneratedRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Dataset::from(records))
}

pub fn write_dataset(dataset: &Dataset, path: &Path) -> Result<(), DatasetError> {
    let file = File::create(path).map_err(|e| DatasetError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    write_to(dataset, file).map_err(|e| DatasetError::Csv {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}

pub fn read_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    let file = File::open(path).map_err(|e| DatasetError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    read_from(file).map_err(|e| DatasetError::Csv {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_dataset() -> Dataset {
        Dataset::from(vec![
            GeneratedRecord {
                idx: 1,
                f_positive: 0.0,
                f_negative: 0.0,
                sequence: "SPQAG".to_string(),
            },
            GeneratedRecord {
                idx: 2,
                f_positive: 0.15,
                f_negative: 0.85,
                sequence: "KDEER".to_string(),
            },
        ])
    }

    #[test]
    fn write_to_emits_header_and_rows_in_order() {
        let mut buffer = Vec::new();
        write_to(&sample_dataset(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "idx,f_positive,f_negative,sequence");
        assert!(lines[1].starts_with("1,"));
        assert!(lines[1].ends_with(",SPQAG"));
        assert_eq!(lines[2], "2,0.15,0.85,KDEER");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn written_dataset_reads_back_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dataset.csv");
        let dataset = sample_dataset();

        write_dataset(&dataset, &path).unwrap();
        let loaded = read_dataset(&path).unwrap();

        assert_eq!(loaded, dataset);
    }

    #[test]
    fn empty_dataset_round_trips_to_an_empty_dataset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_dataset(&Dataset::new(), &path).unwrap();
        let loaded = read_dataset(&path).unwrap();

        assert!(loaded.is_empty());
    }

    #[test]
    fn read_dataset_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = read_dataset(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }

    #[test]
    fn read_dataset_fails_for_malformed_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("malformed.csv");
        fs::write(&path, "idx,f_positive,f_negative,sequence\nnot-a-number,0.1,0.2,KK\n").unwrap();

        let result = read_dataset(&path);
        assert!(matches!(result, Err(DatasetError::Csv { .. })));
    }

    #[test]
    fn write_dataset_fails_when_parent_directory_is_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.csv");
        let result = write_dataset(&sample_dataset(), &path);
        assert!(matches!(result, Err(DatasetError::Io { .. })));
    }
}
