//! Feats page

use std::fmt::{self, Write};

use super::section::{item_class, write_description, write_section, write_traits};
use super::{close_page, open_page};
use crate::model::character::{CharacterRecord, FeatItem};
use crate::model::display_value;
use crate::sanitize::clean_text;

pub const PAGE_ID: &str = "feats";

/// Category used for feats that declare none
pub const DEFAULT_CATEGORY: &str = "other";

/// Known feat categories in display order
pub const FEAT_SECTIONS: &[(&str, &str)] = &[
    ("ancestry", "Dons d'ascendance"),
    ("class", "Dons de classe"),
    ("archetype", "Dons d'archétype"),
    ("skill", "Dons de compétence"),
    ("general", "Dons généraux"),
    ("other", "Autres capacités"),
];

/// Feats grouped by category, groups in first-seen order
pub fn group_by_category(record: &CharacterRecord) -> Vec<(&str, Vec<&FeatItem>)> {
    let mut groups: Vec<(&str, Vec<&FeatItem>)> = Vec::new();
    for feat in record.feats() {
        let category = feat.system.category.as_deref().unwrap_or(DEFAULT_CATEGORY);
        match groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, feats)) => feats.push(feat),
            None => groups.push((category, vec![feat])),
        }
    }
    groups
}

/// Section label for a category outside the known table
fn fallback_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

pub fn write_feats_page(out: &mut String, record: &CharacterRecord) -> fmt::Result {
    open_page(out, PAGE_ID, false, "Dons et capacités de", record)?;

    let groups = group_by_category(record);
    for (category, label) in FEAT_SECTIONS {
        if let Some((_, feats)) = groups.iter().find(|(name, _)| name == category) {
            write_section(out, label, feats, |out, feat| write_feat(out, feat))?;
        }
    }
    for (category, feats) in &groups {
        if FEAT_SECTIONS.iter().all(|(known, _)| known != category) {
            write_section(out, &fallback_label(category), feats, |out, feat| {
                write_feat(out, feat)
            })?;
        }
    }

    close_page(out)
}

pub fn write_feat(out: &mut String, feat: &FeatItem) -> fmt::Result {
    let system = &feat.system;
    let description = clean_text(&system.description.value);

    write!(
        out,
        r#"
    <div class="{class}">
        <div class="item-header">
            <div>{name}</div>
            <div>Niveau {level}</div>
        </div>
"#,
        class = item_class(&description),
        name = feat.name,
        level = display_value(&system.level.value).unwrap_or_default(),
    )?;

    write_traits(out, &system.traits.value)?;

    let prerequisites: Vec<&str> = system
        .prerequisites
        .value
        .iter()
        .filter_map(|p| p.value.as_deref())
        .filter(|text| !text.is_empty())
        .collect();
    if !prerequisites.is_empty() {
        write!(
            out,
            "<div class=\"metadata\"><span class=\"meta-item\">Prérequis: {}</span></div>",
            prerequisites.join(", ")
        )?;
    }

    write_description(out, &description)?;
    writeln!(out, "</div>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn record(items: Value) -> CharacterRecord {
        serde_json::from_value(json!({
            "name": "Kyra",
            "system": { "details": { "level": { "value": 2 } } },
            "items": items
        }))
        .unwrap()
    }

    fn feat(name: &str, category: Option<&str>) -> Value {
        let mut value = json!({ "type": "feat", "name": name, "system": { "level": { "value": 1 } } });
        if let Some(category) = category {
            value["system"]["category"] = json!(category);
        }
        value
    }

    fn page(record: &CharacterRecord) -> String {
        let mut out = String::new();
        write_feats_page(&mut out, record).unwrap();
        out
    }

    #[test]
    fn test_fixed_order_then_unknown_categories() {
        let record = record(json!([
            feat("Weird One", Some("mythic")),
            feat("Power Attack", Some("class")),
            feat("Untyped", None),
            feat("Natural Ambition", Some("ancestry")),
            feat("Strange Two", Some("bonus")),
            feat("Another Mythic", Some("mythic"))
        ]));
        let html = page(&record);

        let positions: Vec<usize> = [
            "Dons d'ascendance",
            "Dons de classe",
            "Autres capacités",
            "<h2 class=\"section-title\">Mythic</h2>",
            "<h2 class=\"section-title\">Bonus</h2>",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap())
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(!html.contains("Dons généraux"));
    }

    #[test]
    fn test_grouping_keeps_first_seen_order() {
        let record = record(json!([
            feat("A", Some("skill")),
            feat("B", None),
            feat("C", Some("skill"))
        ]));
        let groups = group_by_category(&record);
        let summary: Vec<(&str, Vec<&str>)> = groups
            .iter()
            .map(|(category, feats)| (*category, feats.iter().map(|f| f.name.as_str()).collect()))
            .collect();
        assert_eq!(summary, vec![("skill", vec!["A", "C"]), ("other", vec!["B"])]);
    }

    #[test]
    fn test_fallback_label() {
        assert_eq!(fallback_label("mythic"), "Mythic");
        assert_eq!(fallback_label("classFeature"), "Classfeature");
        assert_eq!(fallback_label(""), "");
    }

    #[test]
    fn test_prerequisites_line() {
        let record = record(json!([
            {
                "type": "feat",
                "name": "Sudden Charge",
                "system": {
                    "level": { "value": 1 },
                    "prerequisites": { "value": [{ "value": "trained in Athletics" }, { "value": "" }, { "value": "Strength 14" }] }
                }
            },
            {
                "type": "feat",
                "name": "Empty Prereqs",
                "system": { "prerequisites": { "value": [{ "value": "" }] } }
            }
        ]));
        let html = page(&record);
        assert!(html.contains("Prérequis: trained in Athletics, Strength 14"));
        assert_eq!(html.matches("Prérequis").count(), 1);
        assert!(html.contains("<div>Niveau 1</div>"));
        assert!(html.contains("<div>Niveau </div>"));
    }

    #[test]
    fn test_no_feats_means_no_sections() {
        let html = page(&record(json!([])));
        assert!(html.contains("Dons et capacités de Kyra"));
        assert!(!html.contains("section-title"));
    }
}
