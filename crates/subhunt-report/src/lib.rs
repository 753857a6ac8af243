//! Aggregation over finished record lists: summary statistics and CSV export.

mod error;
pub use error::ExportError;

pub mod export;
pub mod summary;

pub use export::{CSV_HEADER, default_file_name, export_csv, write_csv};
pub use summary::{CategoryTotal, Summary};
