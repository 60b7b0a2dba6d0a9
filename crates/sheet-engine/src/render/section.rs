//! Layout rules shared by every section renderer

use std::fmt::{self, Write};

/// Descriptions longer than this many characters get the long item layout
pub const LONG_DESCRIPTION_THRESHOLD: usize = 2000;

/// Wrapper class for one item card.
///
/// Long descriptions must not be kept inside a single column when printing,
/// so they use `item-long`.
pub fn item_class(description: &str) -> &'static str {
    if description.chars().count() > LONG_DESCRIPTION_THRESHOLD {
        "item-long"
    } else {
        "item"
    }
}

/// Write a titled section container holding `items`.
///
/// Writes nothing at all for an empty slice. More than one item uses the
/// multi-column `section` layout, a single item `section-item-unique`.
pub fn write_section<T, F>(out: &mut String, title: &str, items: &[T], mut write_item: F) -> fmt::Result
where
    F: FnMut(&mut String, &T) -> fmt::Result,
{
    if items.is_empty() {
        return Ok(());
    }

    let layout = if items.len() > 1 {
        "section"
    } else {
        "section-item-unique"
    };

    write!(
        out,
        "\n    <div class=\"{}\">\n        <h2 class=\"section-title\">{}</h2>\n",
        layout, title
    )?;
    for item in items {
        write_item(out, item)?;
    }
    writeln!(out, "    </div>")
}

/// Trait badges, nothing when the list is empty
pub fn write_traits(out: &mut String, traits: &[String]) -> fmt::Result {
    if traits.is_empty() {
        return Ok(());
    }
    write!(out, "<div class=\"item-traits\">")?;
    for name in traits {
        write!(out, "<span class=\"trait\">{}</span>", name)?;
    }
    write!(out, "</div>")
}

/// Description body, nothing when empty
pub fn write_description(out: &mut String, description: &str) -> fmt::Result {
    if description.is_empty() {
        return Ok(());
    }
    write!(out, "<div class=\"item-description\">{}</div>", description)
}
