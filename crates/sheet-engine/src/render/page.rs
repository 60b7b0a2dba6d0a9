//! Character document assembly
//!
//! One document holds the three sheet pages behind a navigation bar. Pages
//! are switched client side by the inline script; styling and script are
//! injected through [`PageAssets`] so the same assembler produces styled or
//! bare documents.

use std::borrow::Cow;
use std::fmt::Write;
use std::fs;
use std::path::Path;

use super::feats::write_feats_page;
use super::inventory::write_inventory_page;
use super::spellbook::write_spellbook_page;
use crate::assets::{NAVIGATION_SCRIPT, SHEET_STYLESHEET};
use crate::error::SheetError;
use crate::model::character::CharacterRecord;

/// Navigation entries: target page id and link label
pub const NAVIGATION: &[(&str, &str)] = &[
    (super::spellbook::PAGE_ID, "Grimoire"),
    (super::inventory::PAGE_ID, "Inventaire"),
    (super::feats::PAGE_ID, "Dons"),
];

/// Inline stylesheet and script of a character document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAssets {
    pub stylesheet: Cow<'static, str>,
    pub script: Cow<'static, str>,
}

impl PageAssets {
    /// Assets compiled into the crate
    pub fn embedded() -> Self {
        Self {
            stylesheet: Cow::Borrowed(SHEET_STYLESHEET),
            script: Cow::Borrowed(NAVIGATION_SCRIPT),
        }
    }

    /// No inline styling; navigation script only
    pub fn bare() -> Self {
        Self {
            stylesheet: Cow::Borrowed(""),
            script: Cow::Borrowed(NAVIGATION_SCRIPT),
        }
    }

    /// Replace the stylesheet with the content of a file
    pub fn with_stylesheet_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, SheetError> {
        self.stylesheet = Cow::Owned(read_asset(path.as_ref())?);
        Ok(self)
    }

    /// Replace the script with the content of a file
    pub fn with_script_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, SheetError> {
        self.script = Cow::Owned(read_asset(path.as_ref())?);
        Ok(self)
    }
}

impl Default for PageAssets {
    fn default() -> Self {
        Self::embedded()
    }
}

pub(crate) fn read_asset(path: &Path) -> Result<String, SheetError> {
    fs::read_to_string(path).map_err(|source| SheetError::Asset {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds the full HTML document of one character
#[derive(Debug, Clone, Default)]
pub struct PageAssembler {
    assets: PageAssets,
}

impl PageAssembler {
    pub fn new(assets: PageAssets) -> Self {
        Self { assets }
    }

    /// Render the character document.
    ///
    /// # Errors
    ///
    /// Fails when the grimoire cannot be assembled (spell level out of range).
    pub fn render(&self, record: &CharacterRecord) -> Result<String, SheetError> {
        let mut html = String::new();

        write!(
            html,
            r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Personnage - {name}</title>
"#,
            name = record.name
        )?;
        if !self.assets.stylesheet.is_empty() {
            writeln!(html, "    <style>\n{}</style>", self.assets.stylesheet)?;
        }
        writeln!(html, "</head>\n<body>\n    <div class=\"nav-bar\">")?;
        for (index, (page_id, label)) in NAVIGATION.iter().enumerate() {
            let active = if index == 0 { " class=\"active\"" } else { "" };
            writeln!(
                html,
                "        <a href=\"#\" data-page=\"{}\"{}>{}</a>",
                page_id, active, label
            )?;
        }
        writeln!(html, "    </div>\n\n    <div class=\"content\">")?;

        write_spellbook_page(&mut html, record)?;
        write_inventory_page(&mut html, record)?;
        write_feats_page(&mut html, record)?;

        write!(
            html,
            "    </div>\n    <script>\n{}</script>\n</body>\n</html>\n",
            self.assets.script
        )?;

        Ok(html)
    }
}
