//! CSV serialization of scraped records
//!
//! The output file is UTF-8 prefixed with a byte order mark so spreadsheet
//! tools pick the right encoding and render non-Latin titles correctly.

use crate::scrape::MovieRecord;
use crate::MarqueeError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// UTF-8 byte order mark written ahead of the CSV content
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Fixed output column order
const COLUMNS: [&str; 6] = [
    "title",
    "image_url",
    "rating",
    "types",
    "page",
    "detail_url",
];

/// Writes records to a CSV file at the given path
///
/// Emits the BOM, a header row, then one row per record in input order.
/// Missing fields are already empty strings and render as empty cells. Any
/// IO or serialization failure is fatal and propagates to the caller; with a
/// failed write there is no output to salvage.
///
/// # Arguments
///
/// * `records` - Records in their final output order
/// * `path` - Destination file path (created or truncated)
pub fn write_records(records: &[MovieRecord], path: &Path) -> Result<(), MarqueeError> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    // Header is written explicitly so it appears even for an empty run
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(COLUMNS)?;

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    tracing::info!("Saved {} rows to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample_record() -> MovieRecord {
        MovieRecord {
            title: "霸王別姬".to_string(),
            image_url: "https://ssr1.scrape.center/img/bwbj.jpg".to_string(),
            rating: "9.5".to_string(),
            types: "劇情;愛情".to_string(),
            page: 1,
            detail_url: "https://ssr1.scrape.center/detail/1".to_string(),
        }
    }

    #[test]
    fn test_output_starts_with_bom() {
        let file = NamedTempFile::new().unwrap();
        write_records(&[sample_record()], file.path()).unwrap();

        let bytes = std::fs::read(file.path()).unwrap();
        assert_eq!(&bytes[..3], UTF8_BOM);
    }

    #[test]
    fn test_header_written_even_for_empty_run() {
        let file = NamedTempFile::new().unwrap();
        write_records(&[], file.path()).unwrap();

        let bytes = std::fs::read(file.path()).unwrap();
        let content = String::from_utf8(bytes[3..].to_vec()).unwrap();
        assert_eq!(
            content.lines().next().unwrap(),
            "title,image_url,rating,types,page,detail_url"
        );
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_non_ascii_round_trip() {
        let file = NamedTempFile::new().unwrap();
        write_records(&[sample_record()], file.path()).unwrap();

        let bytes = std::fs::read(file.path()).unwrap();
        assert_eq!(&bytes[..3], UTF8_BOM);

        let mut reader = csv::Reader::from_reader(&bytes[3..]);
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "霸王別姬");
        assert_eq!(&rows[0][3], "劇情;愛情");
    }

    #[test]
    fn test_rows_in_input_order_with_empty_cells() {
        let mut first = sample_record();
        first.rating = String::new();
        first.types = String::new();
        let mut second = sample_record();
        second.title = "B".to_string();
        second.page = 2;

        let file = NamedTempFile::new().unwrap();
        write_records(&[first, second], file.path()).unwrap();

        let bytes = std::fs::read(file.path()).unwrap();
        let mut reader = csv::Reader::from_reader(&bytes[3..]);
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "");
        assert_eq!(&rows[0][3], "");
        assert_eq!(&rows[1][0], "B");
        assert_eq!(&rows[1][4], "2");
    }

    #[test]
    fn test_write_to_bad_path_is_error() {
        let result = write_records(&[sample_record()], Path::new("/nonexistent/dir/out.csv"));
        assert!(result.is_err());
    }
}
