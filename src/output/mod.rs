//! Output module for serializing scraped records
//!
//! Currently a single format: BOM-prefixed UTF-8 CSV with a fixed column
//! order matching the record fields.

mod csv_output;

pub use csv_output::write_records;
