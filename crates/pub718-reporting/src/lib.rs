pub mod export;
pub mod types;

pub use export::{ExportError, ExportPaths, export_rates, load_rates_file};
pub use types::{RateRow, RatesFile};
