use std::path::Path;

use crate::state::dataset::Dataset;

/// UTF-8 byte-order mark, so spreadsheet applications detect the encoding.
const BOM: &[u8] = b"\xef\xbb\xbf";

/// Header of the single exported column.
pub const CSV_HEADER: &str = "value";

/// Render the dataset as CSV bytes: BOM, header row, then one value per row.
///
/// Values use the shortest round-tripping float form, so feeding the exported
/// text back through the parser reproduces the dataset exactly.
pub fn csv_bytes(dataset: &Dataset) -> Vec<u8> {
    let mut out = Vec::from(BOM);
    {
        let mut writer = csv::Writer::from_writer(&mut out);
        // Writing into a Vec cannot fail.
        let _ = writer.write_record([CSV_HEADER]);
        for v in dataset.values() {
            let _ = writer.write_record([format!("{v}")]);
        }
        let _ = writer.flush();
    }
    out
}

/// Write the CSV export to a file.
pub fn write_csv(dataset: &Dataset, path: &Path) -> Result<(), String> {
    std::fs::write(path, csv_bytes(dataset)).map_err(|e| format!("Cannot write CSV: {e}"))?;
    tracing::info!("Exported CSV to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parser;

    #[test]
    fn export_starts_with_bom_and_header() {
        let bytes = csv_bytes(&Dataset::from_values(vec![1.5]));
        assert!(bytes.starts_with(BOM));
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.trim_start_matches('\u{feff}').starts_with(CSV_HEADER));
    }

    #[test]
    fn export_reparses_to_the_same_dataset() {
        let ds = Dataset::from_values(vec![75.0, 0.0, -1.25, 1234.0, 0.1]);
        let text = String::from_utf8(csv_bytes(&ds)).unwrap();
        assert_eq!(parser::parse_numbers(&text).values(), ds.values());
    }

    #[test]
    fn empty_dataset_exports_header_only() {
        let text = String::from_utf8(csv_bytes(&Dataset::new())).unwrap();
        assert!(parser::parse_numbers(&text).is_empty());
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn write_csv_round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.csv");
        let ds = Dataset::sample();

        write_csv(&ds, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(parser::parse_numbers(&text).values(), ds.values());
    }
}
