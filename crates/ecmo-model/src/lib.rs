pub mod aggregate;
pub mod error;
pub mod field;
pub mod filter;
pub mod raw;
pub mod resolution;
pub mod table;

pub use aggregate::{AggregateCount, AggregateResult};
pub use error::{Result, TableError};
pub use field::CanonicalField;
pub use filter::{FilterSpec, NO_CONSTRAINT, Selection};
pub use raw::RawTable;
pub use resolution::{FieldMap, Resolution};
pub use table::NormalizedTable;
