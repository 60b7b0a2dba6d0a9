//! Normalized spell view model

use std::fmt;

use super::character::SpellItem;
use super::display_value;

/// How a spell is classified before bucketing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellKind {
    Cantrip,
    Focus,
    Regular,
}

impl SpellKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpellKind::Cantrip => "cantrip",
            SpellKind::Focus => "focus",
            SpellKind::Regular => "regular",
        }
    }
}

/// A spell as displayed in the spellbook
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSpell {
    pub name: String,
    pub level: u32,
    pub kind: SpellKind,
    pub area: Option<String>,
    /// Raw description markup
    pub description: String,
    pub traits: Vec<String>,
    pub actions: Option<String>,
    pub duration: String,
    pub range: String,
    pub target: String,
}

impl NormalizedSpell {
    pub fn from_item(item: &SpellItem) -> Self {
        let system = &item.system;
        let traits = system.traits.value.clone();

        let kind = if traits.iter().any(|t| t == "cantrip") {
            SpellKind::Cantrip
        } else if system.category.as_deref() == Some("focus") {
            SpellKind::Focus
        } else {
            SpellKind::Regular
        };

        Self {
            name: item.name.clone(),
            level: system.level.value,
            kind,
            area: system
                .area
                .as_ref()
                .map(|area| format_area(&area.kind, area.value)),
            description: system.description.value.clone(),
            traits,
            actions: system.time.as_ref().and_then(|t| display_value(&t.value)),
            duration: display_value(&system.duration.value).unwrap_or_default(),
            range: display_value(&system.range.value).unwrap_or_default(),
            target: display_value(&system.target.value).unwrap_or_default(),
        }
    }

    pub fn has_trait(&self, name: &str) -> bool {
        self.traits.iter().any(|t| t == name)
    }
}

/// Area text, one square per five feet: `burst` / `10.0` gives `burst 2.0 case`
pub fn format_area(kind: &str, feet: f64) -> String {
    format!("{} {:?} case", kind, feet / 5.0)
}

impl fmt::Display for NormalizedSpell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_dash = |value: &str| {
            if value.is_empty() {
                "—".to_string()
            } else {
                value.to_string()
            }
        };

        let level = if self.level > 0 {
            self.level.to_string()
        } else {
            String::new()
        };

        let attributes = [
            ("Nom", self.name.clone()),
            ("Niveau", level),
            ("Type", self.kind.as_str().to_string()),
            ("Traits", self.traits.join(", ")),
            ("Actions", or_dash(self.actions.as_deref().unwrap_or(""))),
            ("Portée", or_dash(&self.range)),
            ("Zone", or_dash(self.area.as_deref().unwrap_or(""))),
            ("Cible", or_dash(&self.target)),
            ("Durée", or_dash(&self.duration)),
        ];

        let mut lines: Vec<String> = attributes
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect();

        if !self.description.is_empty() {
            let indented = self.description.split('\n').collect::<Vec<_>>().join("\n    ");
            lines.push(format!("Description:\n    {}", indented));
        }

        write!(f, "{}", lines.join("\n"))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::model::character::{LevelValue, SpellDescription, SpellSystem, SpellTraits};
    use crate::model::LooseValue;
    use proptest::prelude::*;

    fn item(traits: Vec<String>, category: Option<String>) -> SpellItem {
        SpellItem {
            name: "Probe".to_string(),
            system: SpellSystem {
                level: LevelValue { value: 2 },
                description: SpellDescription { value: String::new() },
                traits: SpellTraits { value: traits },
                area: None,
                category,
                time: None,
                duration: LooseValue::default(),
                range: LooseValue::default(),
                target: LooseValue::default(),
            },
        }
    }

    proptest! {
        /// Property: the cantrip trait always classifies as cantrip
        #[test]
        fn cantrip_trait_always_cantrip(
            mut traits in prop::collection::vec("[a-z]{1,8}", 0..5),
            category in prop::option::of("[a-z]{1,8}"),
            position in 0usize..6
        ) {
            let at = position.min(traits.len());
            traits.insert(at, "cantrip".to_string());
            let spell = NormalizedSpell::from_item(&item(traits, category));
            prop_assert_eq!(spell.kind, SpellKind::Cantrip);
        }

        /// Property: focus category without cantrip trait classifies as focus
        #[test]
        fn focus_category_without_cantrip_is_focus(
            traits in prop::collection::vec("[a-z]{1,8}", 0..5)
        ) {
            prop_assume!(!traits.iter().any(|t| t == "cantrip"));
            let spell = NormalizedSpell::from_item(&item(traits, Some("focus".to_string())));
            prop_assert_eq!(spell.kind, SpellKind::Focus);
        }
    }
}
