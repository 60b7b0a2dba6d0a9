//! Spellbook page

use std::fmt::{self, Write};

use super::section::{item_class, write_description, write_section, write_traits};
use super::{close_page, open_page};
use crate::error::SheetError;
use crate::grimoire::Grimoire;
use crate::model::character::CharacterRecord;
use crate::model::spell::NormalizedSpell;
use crate::sanitize::clean_spell_description;

pub const PAGE_ID: &str = "spellbook";

/// Write the spellbook page; it is the page shown first
pub fn write_spellbook_page(out: &mut String, record: &CharacterRecord) -> Result<(), SheetError> {
    let grimoire = Grimoire::assemble(&record.items)?;

    open_page(out, PAGE_ID, true, "Grimoire de", record)?;
    write_grimoire(out, &grimoire)?;
    close_page(out)?;
    Ok(())
}

/// Cantrips, focus spells, then one section per non-empty spell level
pub fn write_grimoire(out: &mut String, grimoire: &Grimoire) -> fmt::Result {
    write_section(out, "Tours de magie", &grimoire.cantrips, write_spell)?;
    write_section(out, "Sorts focalisés", &grimoire.focus, write_spell)?;
    for (level, spells) in &grimoire.levels {
        write_section(out, &format!("Sorts de niveau {}", level), spells, write_spell)?;
    }
    Ok(())
}

pub fn write_spell(out: &mut String, spell: &NormalizedSpell) -> fmt::Result {
    let description = clean_spell_description(&spell.description);
    let actions = spell.actions.as_deref().filter(|a| !a.is_empty()).unwrap_or("—");

    write!(
        out,
        r#"
    <div class="{class}">
        <div class="item-header">
            <div>{name}</div>
            <div class="actions">{actions}</div>
        </div>
"#,
        class = item_class(&description),
        name = spell.name,
        actions = actions,
    )?;
    write_traits(out, &spell.traits)?;
    write_description(out, &description)?;
    writeln!(out, "</div>")
}
