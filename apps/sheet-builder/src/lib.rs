//! Character sheet batch builder
//!
//! Reads character JSON exports, writes one HTML sheet per character and an
//! index page linking them.

pub mod batch;
pub mod config;
pub mod logging;

pub use batch::{BatchDriver, BatchOutcome};
pub use config::{BuildConfig, CliArgs, FileConfig, Selection};

// Re-export from sheet-engine
pub use sheet_engine::{CharacterRecord, CharacterSummary, PageAssets};
