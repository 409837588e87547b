// Loading the project export and the dashboard configuration

pub mod config;
pub mod error;
pub mod loader;

pub use config::{Config, DEFAULT_DATA_LOCATION};
pub use error::{ConfigError, DataError, RowParseError};
pub use loader::{load_from_reader, load_records, Column, LoadReport};
