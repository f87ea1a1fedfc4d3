pub mod app;
pub mod filter;

pub use app::*;
pub use filter::*;
