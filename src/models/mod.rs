// Core data models for pmdash
// These structs represent one project row and the status palette

pub mod record;
pub mod status;

pub use record::*;
pub use status::*;
