//! Flat-file input and output.

pub mod loaders;
pub mod writers;

pub use loaders::{load_app_table, parse_app_table, parse_raw_rows, read_raw_rows};
pub use writers::{export_filtered_csv, format_float, format_reviews, write_cleaned, write_cleaned_to};
