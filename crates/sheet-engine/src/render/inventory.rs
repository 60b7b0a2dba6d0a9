//! Inventory page

use std::fmt::{self, Write};

use super::section::{item_class, write_description, write_section, write_traits};
use super::{close_page, open_page};
use crate::model::character::{CharacterRecord, GearCategory, GearItem};
use crate::model::{display_or, display_value};
use crate::sanitize::clean_text;

pub const PAGE_ID: &str = "inventory";

/// Inventory sections in display order
pub const INVENTORY_SECTIONS: &[(GearCategory, &str)] = &[
    (GearCategory::Weapon, "Armes"),
    (GearCategory::Armor, "Armures"),
    (GearCategory::Equipment, "Équipement"),
    (GearCategory::Consumable, "Consommables"),
    (GearCategory::Treasure, "Trésors"),
];

pub fn write_inventory_page(out: &mut String, record: &CharacterRecord) -> fmt::Result {
    open_page(out, PAGE_ID, false, "Inventaire de", record)?;
    for (category, label) in INVENTORY_SECTIONS {
        let items: Vec<&GearItem> = record.gear(*category).collect();
        write_section(out, label, &items, |out, item| write_gear(out, *category, item))?;
    }
    close_page(out)
}

pub fn write_gear(out: &mut String, category: GearCategory, item: &GearItem) -> fmt::Result {
    let system = &item.system;
    let description = clean_text(&system.description.value);

    write!(
        out,
        r#"
    <div class="{class}">
        <div class="item-header">
            <div>{name}</div>
"#,
        class = item_class(&description),
        name = item.name,
    )?;

    match category {
        GearCategory::Weapon => {
            let damage = &system.damage;
            write!(
                out,
                "<div>{}{} {}</div>",
                display_value(&damage.dice).unwrap_or_default(),
                display_value(&damage.die).unwrap_or_default(),
                display_value(&damage.damage_type).unwrap_or_default(),
            )?;
        }
        GearCategory::Armor => {
            write!(out, "<div>CA +{}</div>", display_or(&system.ac_bonus, "0"))?;
        }
        _ => {}
    }
    write!(out, "</div>")?;

    write_traits(out, &system.traits.value)?;

    write!(out, "<div class=\"metadata\">")?;
    match category {
        GearCategory::Weapon => write!(
            out,
            "<span class=\"meta-item\">Portée: {}</span>",
            display_or(&system.range, "0")
        )?,
        GearCategory::Armor => write!(
            out,
            "<span class=\"meta-item\">Limite Dex: {}</span>",
            display_or(&system.dex_cap, "0")
        )?,
        _ => {}
    }
    write!(
        out,
        "<span class=\"meta-item\">Encombrement: {}</span>",
        display_or(&system.bulk.value, "L")
    )?;
    write!(out, "</div>")?;

    write_description(out, &description)?;
    writeln!(out, "</div>")
}
