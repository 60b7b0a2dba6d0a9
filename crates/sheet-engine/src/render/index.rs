//! Index page listing every known character

use std::borrow::Cow;
use std::fmt::Write;
use std::path::Path;

use super::page::read_asset;
use crate::assets::INDEX_STYLESHEET;
use crate::error::SheetError;
use crate::model::summary::CharacterSummary;

/// Card background when a summary has neither image nor color
pub const FALLBACK_CARD_COLOR: &str = "#FFD700";

pub const INDEX_TITLE: &str = "Grimoire de Pathfinder 2e";

/// Builds `index.html` from character summaries
#[derive(Debug, Clone)]
pub struct IndexAssembler {
    stylesheet: Cow<'static, str>,
}

impl Default for IndexAssembler {
    fn default() -> Self {
        Self {
            stylesheet: Cow::Borrowed(INDEX_STYLESHEET),
        }
    }
}

impl IndexAssembler {
    pub fn new(stylesheet: impl Into<Cow<'static, str>>) -> Self {
        Self {
            stylesheet: stylesheet.into(),
        }
    }

    pub fn from_stylesheet_file<P: AsRef<Path>>(path: P) -> Result<Self, SheetError> {
        Ok(Self::new(read_asset(path.as_ref())?))
    }

    /// Render the index, one card per summary in the given order
    pub fn render(&self, summaries: &[CharacterSummary]) -> Result<String, SheetError> {
        let mut cards = String::new();
        for summary in summaries {
            write_card(&mut cards, summary)?;
        }

        let mut html = String::new();
        write!(
            html,
            r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{stylesheet}</style>
</head>
<body>
    <div class="header">
        <h1>{title}</h1>
        <div class="subtitle">Sélectionnez un personnage pour consulter sa fiche</div>
    </div>

    <div class="container">
        <div class="character-grid">
{cards}        </div>
    </div>

    <div class="footer">
        <p>{title} - Généré automatiquement depuis Foundry VTT</p>
    </div>
</body>
</html>
"#,
            title = INDEX_TITLE,
            stylesheet = self.stylesheet,
            cards = cards,
        )?;
        Ok(html)
    }
}

fn write_card(out: &mut String, summary: &CharacterSummary) -> std::fmt::Result {
    let image_style = match &summary.image {
        Some(image) => format!("background-image: url('{}');", image),
        None => format!(
            "background-color: {};",
            summary.color.as_deref().unwrap_or(FALLBACK_CARD_COLOR)
        ),
    };

    write!(
        out,
        r#"            <a href="{filename}" class="character-card">
                <div class="character-image" style="{image_style}"></div>
                <div class="character-name">{name}</div>
                <div class="character-info">{class} {level} | {subclass}</div>
            </a>
"#,
        filename = summary.filename,
        image_style = image_style,
        name = summary.name,
        class = summary.class,
        level = summary.level,
        subclass = summary.subclass,
    )
}
