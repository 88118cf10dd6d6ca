mod csv_source;
mod error;
mod retry;
mod source;

pub use csv_source::{CsvRowSource, read_raw_rows};
pub use error::SourceError;
pub use retry::RetryingSource;
pub use source::RowSource;
