//! Error types for record loading and rendering

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or rendering a character
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Spell '{spell}' has level {level}, expected 1 to 10")]
    SpellLevelOutOfRange { spell: String, level: u32 },

    #[error("Cannot read asset '{}': {source}", path.display())]
    Asset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
