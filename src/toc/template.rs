use serde::{Deserialize, Serialize};

use crate::toc::numbering::ItemNumber;

/// Placeholders recognized in `item_format`.
pub const PLACEHOLDERS: [&str; 4] = ["{id}", "{levels}", "{itemnumber}", "{title}"];

/// Markup fragments used when emitting the nested list.
///
/// `item_start`/`item_end` wrap every single entry, `level_start`/`level_end`
/// wrap a nested block of children, and `item_format` is the per-entry
/// template carrying the `{id}`, `{levels}`, `{itemnumber}` and `{title}`
/// placeholders. Substitution is verbatim string replacement; any escaping
/// policy for ids and titles belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TocTemplate {
    pub item_start: String,
    pub item_end: String,
    pub level_start: String,
    pub level_end: String,
    pub item_format: String,
}

impl Default for TocTemplate {
    fn default() -> Self {
        Self {
            item_start: "<li>".to_string(),
            item_end: "</li>".to_string(),
            level_start: "<ul>".to_string(),
            level_end: "</ul>".to_string(),
            item_format: "<a href=\"#{id}\">{levels}{itemnumber}&nbsp;{title}</a>".to_string(),
        }
    }
}

impl TocTemplate {
    /// Substitute an entry's anchor, number and title into `item_format`.
    pub fn replace_tokens(&self, id: &str, number: &ItemNumber, title: &str) -> String {
        self.item_format
            .replace("{id}", id)
            .replace("{levels}", &number.levels)
            .replace("{itemnumber}", &number.segment)
            .replace("{title}", title)
    }
}
