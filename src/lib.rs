pub mod types;
pub mod measurement;
pub mod config;
pub mod report;

pub use types::*;
pub use measurement::*;
