//! Embedded page assets
//!
//! Styling and navigation script are compiled into the binary so every
//! generated document is self-contained.

/// Character sheet stylesheet - loaded from assets/sheet.css
pub const SHEET_STYLESHEET: &str = include_str!("../assets/sheet.css");

/// Page switching script - loaded from assets/navigation.js
pub const NAVIGATION_SCRIPT: &str = include_str!("../assets/navigation.js");

/// Index page stylesheet - loaded from assets/index.css
pub const INDEX_STYLESHEET: &str = include_str!("../assets/index.css");
