//! CSV bootstrap import

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

use crate::state::{CampaignDraft, FieldId};

/// Failure modes of a CSV import attempt
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("{0} is not a .csv file")]
    UnsupportedExtension(String),

    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV: {0}")]
    Parse(#[from] csv::Error),

    #[error("the file contains no data rows after the header")]
    NoDataRows,
}

/// First data row of an imported CSV, keyed by lowercased header names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedRow {
    values: HashMap<String, String>,
    /// Data rows after the first, which are not imported
    pub ignored_rows: usize,
}

impl ImportedRow {
    /// Build a fresh draft from this row.
    ///
    /// Wholesale replacement: a column absent from the CSV leaves its field
    /// at the empty default, so no prior draft value can leak through.
    pub fn into_draft(mut self) -> CampaignDraft {
        let mut draft = CampaignDraft::default();
        for field in FieldId::ALL {
            if let Some(value) = self.values.remove(field.key()) {
                draft.set_field(field, value);
            }
        }
        draft
    }
}

/// Read the first data row of `path`, counting the rows after it.
///
/// Headers are matched case-insensitively against the field schema and cell
/// values are trimmed. Only the `.csv` extension is accepted; everything
/// past the first data row is discarded.
pub fn read_first_row(path: &Path) -> Result<ImportedRow, ImportError> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(ImportError::UnsupportedExtension(
            path.display().to_string(),
        ));
    }

    let file = File::open(path).map_err(|source| ImportError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let header_map = build_header_map(reader.headers()?);

    let mut rows = reader.records();
    let first = match rows.next() {
        Some(record) => record?,
        None => return Err(ImportError::NoDataRows),
    };

    let mut values = HashMap::new();
    for (name, index) in &header_map {
        if let Some(cell) = first.get(*index) {
            values.insert(name.clone(), cell.to_string());
        }
    }

    // Discarded either way; counted so the outcome can say how many were skipped
    let ignored_rows = rows.filter_map(Result::ok).count();

    Ok(ImportedRow {
        values,
        ignored_rows,
    })
}

/// Map lowercased, trimmed header names to their column indices
fn build_header_map(headers: &csv::StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.trim().to_lowercase(), index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_reads_first_row_by_header_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "campaign.csv",
            "name,description,budget\nSpring Push,Radio spots,1500\n",
        );

        let row = read_first_row(&path).unwrap();
        assert_eq!(row.ignored_rows, 0);

        let draft = row.into_draft();
        assert_eq!(draft.name, "Spring Push");
        assert_eq!(draft.description, "Radio spots");
        assert_eq!(draft.budget, "1500");
    }

    #[test]
    fn test_headers_match_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "caps.csv", "Name, Budget \nBig Launch,200\n");

        let draft = read_first_row(&path).unwrap().into_draft();
        assert_eq!(draft.name, "Big Launch");
        assert_eq!(draft.budget, "200");
    }

    #[test]
    fn test_rows_beyond_the_first_are_counted_not_imported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "multi.csv", "name\nfirst\nsecond\nthird\n");

        let row = read_first_row(&path).unwrap();
        assert_eq!(row.ignored_rows, 2);
        assert_eq!(row.into_draft().name, "first");
    }

    #[test]
    fn test_quoted_values_keep_their_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "quoted.csv",
            "name,description\nQ4,\"Video, print, and radio\"\n",
        );

        let draft = read_first_row(&path).unwrap().into_draft();
        assert_eq!(draft.description, "Video, print, and radio");
    }

    #[test]
    fn test_header_only_file_has_no_data_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "bare.csv", "name,description\n");
        assert!(matches!(
            read_first_row(&path),
            Err(ImportError::NoDataRows)
        ));
    }

    #[test]
    fn test_empty_file_has_no_data_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "empty.csv", "");
        assert!(matches!(
            read_first_row(&path),
            Err(ImportError::NoDataRows)
        ));
    }

    #[test]
    fn test_non_csv_extension_is_rejected_before_opening() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "data.txt", "name\nX\n");
        assert!(matches!(
            read_first_row(&path),
            Err(ImportError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn test_missing_file_reports_the_path() {
        let err = read_first_row(Path::new("/no/such/file.csv")).unwrap_err();
        match err {
            ImportError::Open { path, .. } => assert!(path.contains("file.csv")),
            other => panic!("expected Open, got {other:?}"),
        }
    }

    mod draft_replacement {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_absent_columns_clear_their_fields() {
            let dir = tempfile::tempdir().unwrap();
            let path = write_csv(&dir, "partial.csv", "name,description\nA,B\n");

            let draft = read_first_row(&path).unwrap().into_draft();
            assert_eq!(draft.name, "A");
            assert_eq!(draft.description, "B");
            assert_eq!(draft.budget, "");
            assert_eq!(draft.start_date, "");
            assert_eq!(draft.end_date, "");
        }

        #[test]
        fn test_unknown_columns_are_ignored() {
            let dir = tempfile::tempdir().unwrap();
            let path = write_csv(
                &dir,
                "extra.csv",
                "name,owner,budget\nLaunch,Sam,300\n",
            );

            let draft = read_first_row(&path).unwrap().into_draft();
            assert_eq!(draft.name, "Launch");
            assert_eq!(draft.budget, "300");
        }

        #[test]
        fn test_every_schema_field_can_arrive_via_csv() {
            let dir = tempfile::tempdir().unwrap();
            let path = write_csv(
                &dir,
                "full.csv",
                "name,description,budget,start_date,end_date\n\
                 Summer,Sun and surf,4000,2026-06-01,2026-08-31\n",
            );

            let draft = read_first_row(&path).unwrap().into_draft();
            assert_eq!(
                draft,
                CampaignDraft {
                    name: "Summer".to_string(),
                    description: "Sun and surf".to_string(),
                    budget: "4000".to_string(),
                    start_date: "2026-06-01".to_string(),
                    end_date: "2026-08-31".to_string(),
                }
            );
        }
    }
}
