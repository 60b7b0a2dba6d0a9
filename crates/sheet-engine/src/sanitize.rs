//! Description markup cleanup
//!
//! Exported descriptions embed enricher references such as
//! `@UUID[Compendium.pf2e.conditionitems.Frightened]{Frightened}` or
//! `@Check[fortitude|dc:20|basic]`. They are rewritten into bold text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `@Kind[...]{Label}` keeps only the label
    static ref LABELED_REFERENCE: Regex = Regex::new(r"@\w+\[.*?\]\{(.+?)\}").unwrap();

    /// `@Kind[A|B|...]` keeps the kind and the first two segments; segments
    /// never cross the closing bracket
    static ref SEGMENTED_REFERENCE: Regex =
        Regex::new(r"@(\w+)\[([^\]|]*?)\|([^\]|]*?)\|[^\]]*?\]").unwrap();
}

/// Rewrite enricher references into `<strong>` markup.
///
/// Labeled references are replaced first, then segmented ones. Each pass is
/// a single left-to-right substitution; replacements are not re-scanned.
pub fn clean_text(text: &str) -> String {
    let labeled = LABELED_REFERENCE.replace_all(text, "<strong>${1}</strong>");
    SEGMENTED_REFERENCE
        .replace_all(&labeled, "<strong>${1} ${2} ${3}</strong>")
        .into_owned()
}

/// [`clean_text`] plus paragraph flattening used for spell cards
pub fn clean_spell_description(text: &str) -> String {
    clean_text(text).replace("<p>", "").replace("</p>", "<br>")
}
