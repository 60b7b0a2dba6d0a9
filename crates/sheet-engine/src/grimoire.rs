//! Grimoire assembly: a character's spells split into display buckets

use std::collections::BTreeMap;

use crate::error::SheetError;
use crate::model::character::ItemRecord;
use crate::model::spell::{NormalizedSpell, SpellKind};

/// Highest spell rank with its own section
pub const MAX_SPELL_LEVEL: u32 = 10;

/// A character's spells, bucketed and sorted by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grimoire {
    pub cantrips: Vec<NormalizedSpell>,
    pub focus: Vec<NormalizedSpell>,
    /// Levels 1 to 10, every level present even when empty
    pub levels: BTreeMap<u32, Vec<NormalizedSpell>>,
}

impl Grimoire {
    /// Build the grimoire from a character's full item list.
    ///
    /// Focus bucketing checks the `focus` trait, not the classified kind, so
    /// a spell whose category alone says focus lands in its level bucket.
    ///
    /// # Errors
    ///
    /// `SpellLevelOutOfRange` when a spell that is neither cantrip nor focus
    /// has a level outside 1..=10.
    pub fn assemble(items: &[ItemRecord]) -> Result<Self, SheetError> {
        let mut grimoire = Grimoire {
            levels: (1..=MAX_SPELL_LEVEL).map(|level| (level, Vec::new())).collect(),
            ..Default::default()
        };

        for item in items {
            let ItemRecord::Spell(spell_item) = item else {
                continue;
            };
            let spell = NormalizedSpell::from_item(spell_item);
            tracing::debug!("Spell card:\n{}", spell);

            if spell.kind == SpellKind::Cantrip {
                grimoire.cantrips.push(spell);
            } else if spell.has_trait("focus") {
                grimoire.focus.push(spell);
            } else {
                match grimoire.levels.get_mut(&spell.level) {
                    Some(bucket) => bucket.push(spell),
                    None => {
                        return Err(SheetError::SpellLevelOutOfRange {
                            spell: spell.name,
                            level: spell.level,
                        })
                    }
                }
            }
        }

        grimoire.cantrips.sort_by(|a, b| a.name.cmp(&b.name));
        grimoire.focus.sort_by(|a, b| a.name.cmp(&b.name));
        for bucket in grimoire.levels.values_mut() {
            bucket.sort_by(|a, b| a.name.cmp(&b.name));
        }

        tracing::debug!(
            cantrips = grimoire.cantrips.len(),
            focus = grimoire.focus.len(),
            leveled = grimoire.levels.values().map(Vec::len).sum::<usize>(),
            "Grimoire assembled"
        );

        Ok(grimoire)
    }

    pub fn is_empty(&self) -> bool {
        self.cantrips.is_empty() && self.focus.is_empty() && self.levels.values().all(Vec::is_empty)
    }
}
