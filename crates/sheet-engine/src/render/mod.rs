//! HTML rendering of character sheets
//!
//! Each page of a sheet is rendered by its own module; `section` holds the
//! layout rules they share and `page` / `index` assemble full documents.

pub mod feats;
pub mod index;
pub mod inventory;
pub mod page;
pub mod section;
pub mod spellbook;

use std::fmt::{self, Write};

use crate::model::character::CharacterRecord;

/// Open a sheet page and write its header
pub(crate) fn open_page(
    out: &mut String,
    page_id: &str,
    active: bool,
    title: &str,
    record: &CharacterRecord,
) -> fmt::Result {
    let class = if active { "page active" } else { "page" };
    write!(
        out,
        r#"
    <div id="{page_id}" class="{class}">
        <div class="page-header">
            <h1>{title} {name}</h1>
            <h3>Niveau {level} {class_name}</h3>
        </div>
"#,
        page_id = page_id,
        class = class,
        title = title,
        name = record.name,
        level = record.level(),
        class_name = record.class_name(),
    )
}

pub(crate) fn close_page(out: &mut String) -> fmt::Result {
    writeln!(out, "    </div>")
}
