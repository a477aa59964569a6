//! Reformats Scottish EPC registry exports into the column layout loaded by
//! the referral portal.
mod error;
mod headers;
mod input;
mod mapping;
mod project;
mod rotate;
mod row_stream;

#[cfg(test)]
mod mock;
pub mod run;

pub use error::{Error, Result, RowResult};
pub use headers::Headers;
pub use input::{InputStream, ReaderSource};
pub use mapping::{ColumnMapping, SCOTTISH_EPC_COLUMNS};
pub use project::{needs_escaping, output_line, Project};
pub use rotate::{rotated_path, FileSplitting, OutputFile, RotatingWriter};
pub use row_stream::{get_field, RowStream};

pub type Row = csv::StringRecord;
