pub mod error;
pub mod source;

pub use ecmo_model::RawTable;
pub use error::{IngestError, Result};
pub use source::{CsvFileSource, DataSource, MemorySource};
