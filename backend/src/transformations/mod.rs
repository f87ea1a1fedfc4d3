pub mod cleaning;
pub mod filtering;

pub use cleaning::{clean, coerce_numeric, is_missing, CleaningOutcome, CleaningReport};
pub use filtering::filter_records;
