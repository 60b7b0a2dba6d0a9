//! Typed character records
//!
//! Items are a closed union keyed by their `type` field. Spell items are
//! strict: the fields the spellbook reads are required and their absence
//! fails the whole record. Every other item type is lenient and falls back
//! to empty values.

use std::fs;
use std::path::Path;

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

use super::{null_as_default, LooseValue, TextValue, TraitSet};
use crate::error::SheetError;

/// A full character export
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub system: CharacterSystem,
    pub items: Vec<ItemRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CharacterSystem {
    pub details: CharacterDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CharacterDetails {
    pub level: LevelValue,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LevelValue {
    pub value: u32,
}

impl CharacterRecord {
    /// Parse a character from its JSON export
    pub fn from_json(json: &str) -> Result<Self, SheetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a character file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SheetError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Character level from `system.details.level.value`
    pub fn level(&self) -> u32 {
        self.system.details.level.value
    }

    /// Name of the first `class` item, or an empty string
    pub fn class_name(&self) -> &str {
        self.items
            .iter()
            .find_map(|item| match item {
                ItemRecord::Class(class) => Some(class.name.as_str()),
                _ => None,
            })
            .unwrap_or("")
    }

    pub fn spells(&self) -> impl Iterator<Item = &SpellItem> {
        self.items.iter().filter_map(|item| match item {
            ItemRecord::Spell(spell) => Some(spell),
            _ => None,
        })
    }

    pub fn feats(&self) -> impl Iterator<Item = &FeatItem> {
        self.items.iter().filter_map(|item| match item {
            ItemRecord::Feat(feat) => Some(feat),
            _ => None,
        })
    }

    /// Inventory items of one category, in record order
    pub fn gear(&self, category: GearCategory) -> impl Iterator<Item = &GearItem> + '_ {
        self.items
            .iter()
            .filter_map(ItemRecord::as_gear)
            .filter(move |(kind, _)| *kind == category)
            .map(|(_, gear)| gear)
    }
}

/// One entry of a character's `items` list
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemRecord {
    Spell(SpellItem),
    Feat(FeatItem),
    Weapon(GearItem),
    Armor(GearItem),
    Equipment(GearItem),
    Consumable(GearItem),
    Treasure(GearItem),
    Class(ClassItem),
    /// Any item type the sheets do not display (ancestry, action, lore...)
    #[serde(other)]
    Other,
}

impl ItemRecord {
    pub fn as_gear(&self) -> Option<(GearCategory, &GearItem)> {
        match self {
            ItemRecord::Weapon(gear) => Some((GearCategory::Weapon, gear)),
            ItemRecord::Armor(gear) => Some((GearCategory::Armor, gear)),
            ItemRecord::Equipment(gear) => Some((GearCategory::Equipment, gear)),
            ItemRecord::Consumable(gear) => Some((GearCategory::Consumable, gear)),
            ItemRecord::Treasure(gear) => Some((GearCategory::Treasure, gear)),
            _ => None,
        }
    }
}

/// Inventory item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GearCategory {
    Weapon,
    Armor,
    Equipment,
    Consumable,
    Treasure,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassItem {
    pub name: String,
}

/// Spell item. Required fields fail the record when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct SpellItem {
    pub name: String,
    pub system: SpellSystem,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpellSystem {
    pub level: LevelValue,
    pub description: SpellDescription,
    pub traits: SpellTraits,
    /// The key must exist; `null` or `{}` means the spell has no area
    #[serde(deserialize_with = "present_area")]
    pub area: Option<SpellArea>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub time: Option<LooseValue>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: LooseValue,
    #[serde(default, deserialize_with = "null_as_default")]
    pub range: LooseValue,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target: LooseValue,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpellDescription {
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpellTraits {
    pub value: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpellArea {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
}

/// Spell area whose key has to be present but may be `null` or empty.
///
/// Plain `Option` fields accept a missing key; routing through
/// `deserialize_with` without `#[serde(default)]` makes the key mandatory.
fn present_area<'de, D>(deserializer: D) -> Result<Option<SpellArea>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => SpellArea::deserialize(value)
            .map(Some)
            .map_err(de::Error::custom),
    }
}

/// Feat item, read leniently
#[derive(Debug, Clone, Deserialize)]
pub struct FeatItem {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub system: FeatSystem,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatSystem {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: LooseValue,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: TextValue,
    #[serde(default, deserialize_with = "null_as_default")]
    pub traits: TraitSet,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prerequisites: Prerequisites,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Prerequisites {
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: Vec<Prerequisite>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Prerequisite {
    #[serde(default)]
    pub value: Option<String>,
}

/// Weapon, armor, equipment, consumable or treasure, read leniently
#[derive(Debug, Clone, Deserialize)]
pub struct GearItem {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub system: GearSystem,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearSystem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: TextValue,
    #[serde(default, deserialize_with = "null_as_default")]
    pub traits: TraitSet,
    #[serde(default, deserialize_with = "null_as_default")]
    pub damage: Damage,
    #[serde(default)]
    pub ac_bonus: Value,
    #[serde(default)]
    pub dex_cap: Value,
    #[serde(default)]
    pub range: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bulk: LooseValue,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Damage {
    #[serde(default)]
    pub dice: Value,
    #[serde(default)]
    pub die: Value,
    #[serde(default)]
    pub damage_type: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spell_json() -> Value {
        json!({
            "type": "spell",
            "name": "Fireball",
            "system": {
                "level": { "value": 3 },
                "description": { "value": "<p>Boom.</p>" },
                "traits": { "value": ["fire", "evocation"] },
                "area": { "type": "burst", "value": 20 }
            }
        })
    }

    fn character(items: Value) -> Value {
        json!({
            "name": "Ezren",
            "system": { "details": { "level": { "value": 5 } } },
            "items": items
        })
    }

    #[test]
    fn test_parse_known_and_unknown_items() {
        let json = character(json!([
            spell_json(),
            { "type": "class", "name": "Wizard" },
            { "type": "ancestry", "name": "Human", "system": { "hp": 8 } },
            { "type": "weapon", "name": "Staff" }
        ]));
        let record: CharacterRecord = serde_json::from_value(json).unwrap();

        assert_eq!(record.items.len(), 4);
        assert!(matches!(record.items[2], ItemRecord::Other));
        assert_eq!(record.class_name(), "Wizard");
        assert_eq!(record.level(), 5);
        assert_eq!(record.spells().count(), 1);
        assert_eq!(record.gear(GearCategory::Weapon).count(), 1);
        assert_eq!(record.gear(GearCategory::Armor).count(), 0);
    }

    #[test]
    fn test_class_name_defaults_to_empty() {
        let record: CharacterRecord = serde_json::from_value(character(json!([]))).unwrap();
        assert_eq!(record.class_name(), "");
    }

    #[test]
    fn test_spell_null_area_is_accepted() {
        let mut spell = spell_json();
        spell["system"]["area"] = Value::Null;
        let record: CharacterRecord =
            serde_json::from_value(character(json!([spell]))).unwrap();
        let spell = record.spells().next().unwrap();
        assert!(spell.system.area.is_none());
    }

    #[test]
    fn test_spell_missing_required_fields_fail() {
        for field in ["level", "description", "traits", "area"] {
            let mut spell = spell_json();
            spell["system"].as_object_mut().unwrap().remove(field);
            let result = CharacterRecord::from_json(&character(json!([spell])).to_string());
            assert!(result.is_err(), "missing '{}' should fail", field);
        }

        let mut spell = spell_json();
        spell.as_object_mut().unwrap().remove("name");
        let result = CharacterRecord::from_json(&character(json!([spell])).to_string());
        assert!(result.is_err(), "missing name should fail");
    }

    #[test]
    fn test_spell_empty_area_is_no_area() {
        let mut spell = spell_json();
        spell["system"]["area"] = json!({});
        spell["system"]["duration"] = Value::Null;
        let record = CharacterRecord::from_json(&character(json!([spell])).to_string()).unwrap();
        let spell = record.spells().next().unwrap();
        assert!(spell.system.area.is_none());
        assert!(spell.system.duration.value.is_null());
    }

    #[test]
    fn test_spell_partial_area_fails() {
        let mut spell = spell_json();
        spell["system"]["area"] = json!({ "value": 10 });
        let result = CharacterRecord::from_json(&character(json!([spell])).to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_null_blocks_on_lenient_items() {
        let json = character(json!([
            {
                "type": "equipment",
                "name": "Lantern",
                "system": { "description": null, "traits": null, "bulk": null, "damage": null }
            },
            {
                "type": "feat",
                "name": "Fleet",
                "system": {
                    "description": { "value": null },
                    "traits": { "value": null },
                    "level": null,
                    "prerequisites": null
                }
            },
            { "type": "weapon", "name": "Club", "system": null }
        ]));
        let record = CharacterRecord::from_json(&json.to_string()).unwrap();

        let lantern = record.gear(GearCategory::Equipment).next().unwrap();
        assert_eq!(lantern.system.description.value, "");
        assert!(lantern.system.traits.value.is_empty());
        assert!(lantern.system.bulk.value.is_null());

        let fleet = record.feats().next().unwrap();
        assert_eq!(fleet.system.description.value, "");
        assert!(fleet.system.traits.value.is_empty());
        assert!(fleet.system.prerequisites.value.is_empty());

        let club = record.gear(GearCategory::Weapon).next().unwrap();
        assert!(club.system.damage.dice.is_null());
    }

    #[test]
    fn test_gear_and_feats_are_lenient() {
        let json = character(json!([
            { "type": "armor", "name": "Leather", "system": {} },
            { "type": "feat", "name": "Toughness" },
            { "type": "treasure", "name": "Gem", "system": { "bulk": { "value": 1 } } }
        ]));
        let record: CharacterRecord = serde_json::from_value(json).unwrap();

        let armor = record.gear(GearCategory::Armor).next().unwrap();
        assert!(armor.system.ac_bonus.is_null());
        assert!(armor.system.traits.value.is_empty());

        let feat = record.feats().next().unwrap();
        assert!(feat.system.category.is_none());
        assert!(feat.system.prerequisites.value.is_empty());
    }
}
