//! Index card summaries
//!
//! Summaries are read through a lenient projection of the character file so
//! that listing a character on the index never depends on its spells being
//! well formed.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::display_value;
use crate::error::SheetError;

/// Extension of every generated character document
pub const OUTPUT_EXTENSION: &str = ".html";

/// Name used when a record carries none
pub const UNNAMED_CHARACTER: &str = "Sans nom";

/// Everything the index page knows about one character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSummary {
    pub name: String,
    pub filename: String,
    pub class: String,
    pub level: String,
    pub subclass: String,
    pub image: Option<String>,
    pub color: Option<String>,
}

/// Document filename for a character name.
///
/// Lowercases, turns spaces and hyphens into underscores and drops quotes:
/// `Aria O'Brien-Smith` becomes `aria_obrien_smith.html`.
pub fn output_filename(name: &str) -> String {
    let stem: String = name
        .to_lowercase()
        .chars()
        .filter(|c| *c != '\'' && *c != '"')
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect();
    format!("{}{}", stem, OUTPUT_EXTENSION)
}

#[derive(Debug, Default, Deserialize)]
struct SummaryRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    class: Value,
    #[serde(default)]
    level: Value,
    #[serde(default)]
    subclass: Value,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    system: Value,
    #[serde(default)]
    items: Vec<LooseItem>,
}

#[derive(Debug, Default, Deserialize)]
struct LooseItem {
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    name: String,
}

impl CharacterSummary {
    /// Project a summary out of a character's JSON export
    pub fn from_json(json: &str) -> Result<Self, SheetError> {
        let record: SummaryRecord = serde_json::from_str(json)?;
        Ok(Self::from_record(record))
    }

    /// Read a character file and project its summary
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SheetError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn from_record(record: SummaryRecord) -> Self {
        let name = record
            .name
            .unwrap_or_else(|| UNNAMED_CHARACTER.to_string());

        // Top-level keys win; otherwise fall back to what the page header shows
        let class = display_value(&record.class).unwrap_or_else(|| {
            record
                .items
                .iter()
                .find(|item| item.kind == "class")
                .map(|item| item.name.clone())
                .unwrap_or_default()
        });
        let level = display_value(&record.level)
            .or_else(|| display_value(&record.system["details"]["level"]["value"]))
            .unwrap_or_default();

        Self {
            filename: output_filename(&name),
            name,
            class,
            level,
            subclass: display_value(&record.subclass).unwrap_or_default(),
            image: record.image,
            color: record.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_output_filename() {
        assert_eq!(output_filename("Aria O'Brien-Smith"), "aria_obrien_smith.html");
        assert_eq!(output_filename("Le \"Grand\" Mage"), "le_grand_mage.html");
        assert_eq!(output_filename("Élise"), "élise.html");
    }

    #[test]
    fn test_summary_from_top_level_keys() {
        let json = json!({
            "name": "Seelah",
            "class": "Champion",
            "level": 4,
            "subclass": "Paladin",
            "image": "img/seelah.png",
            "items": [{ "type": "class", "name": "Ignored" }]
        });
        let summary = CharacterSummary::from_json(&json.to_string()).unwrap();
        assert_eq!(
            summary,
            CharacterSummary {
                name: "Seelah".to_string(),
                filename: "seelah.html".to_string(),
                class: "Champion".to_string(),
                level: "4".to_string(),
                subclass: "Paladin".to_string(),
                image: Some("img/seelah.png".to_string()),
                color: None,
            }
        );
    }

    #[test]
    fn test_summary_falls_back_to_record_content() {
        let json = json!({
            "name": "Ezren",
            "system": { "details": { "level": { "value": 7 } } },
            "items": [
                { "type": "spell", "name": "Broken spell" },
                { "type": "class", "name": "Wizard" }
            ]
        });
        let summary = CharacterSummary::from_json(&json.to_string()).unwrap();
        assert_eq!(summary.class, "Wizard");
        assert_eq!(summary.level, "7");
        assert_eq!(summary.subclass, "");
    }

    #[test]
    fn test_summary_of_unnamed_record() {
        let summary = CharacterSummary::from_json("{}").unwrap();
        assert_eq!(summary.name, UNNAMED_CHARACTER);
        assert_eq!(summary.filename, "sans_nom.html");
        assert_eq!(summary.level, "");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: filenames never carry spaces, hyphens, quotes or uppercase ASCII
        #[test]
        fn filename_is_normalized(name in "[A-Za-z '\"-]{0,30}") {
            let filename = output_filename(&name);
            prop_assert!(filename.ends_with(OUTPUT_EXTENSION));
            let stem = &filename[..filename.len() - OUTPUT_EXTENSION.len()];
            prop_assert!(!stem.contains([' ', '-', '\'', '"']));
            prop_assert!(!stem.chars().any(|c| c.is_ascii_uppercase()));
        }
    }
}
