//! Tab records and the wire-format parser for scraped menu entries.
//!
//! The scrape result is a flat string: entries joined with `"|||"`, and in
//! the tagged variant each entry is `<position>:::<name>`. A tab's display
//! name follows Zed's `"<project> — <file>"` convention; names without that
//! exact separator are project-only.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ZedTabsError};
use crate::menu::{ENTRY_DELIMITER, INDEX_DELIMITER, NAME_SEPARATOR};

/// One open editor tab, produced fresh on every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Full display label from the menu item (e.g. "ProjectX — file.ts")
    pub name: String,
    /// Text before the separator, or the whole name if none present
    pub project: String,
    /// Text after the separator, absent if none present
    pub file: Option<String>,
    /// 1-based position in the menu; set by the tagged scrape only.
    /// Used as a stable selector when names collide.
    pub menu_index: Option<u32>,
}

/// Split a raw scrape result into entries, dropping empty ones.
/// Order-preserving; an empty input yields an empty vector.
pub fn split_entries(raw: &str) -> Vec<&str> {
    raw.split(ENTRY_DELIMITER)
        .filter(|e| !e.is_empty())
        .collect()
}

/// Decompose a display name into project and optional file.
/// `file` is present iff the separator splits the name into exactly two parts.
fn decompose(name: &str) -> (String, Option<String>) {
    let parts: Vec<&str> = name.split(NAME_SEPARATOR).collect();
    if parts.len() == 2 {
        (parts[0].to_string(), Some(parts[1].to_string()))
    } else {
        (name.to_string(), None)
    }
}

/// Parse one untagged entry. Total over any input string.
pub fn parse_entry(name: &str) -> Tab {
    let (project, file) = decompose(name);
    Tab {
        name: name.to_string(),
        project,
        file,
        menu_index: None,
    }
}

/// Parse one tagged entry of the form `<position>:::<name>`.
///
/// A missing or non-numeric position is a hard error: the positional switch
/// would otherwise click an arbitrary menu item.
pub fn parse_tagged_entry(entry: &str) -> Result<Tab> {
    let (index_str, name) =
        entry
            .split_once(INDEX_DELIMITER)
            .ok_or_else(|| ZedTabsError::MalformedEntry {
                entry: entry.to_string(),
            })?;

    let menu_index: u32 = index_str
        .parse()
        .map_err(|_| ZedTabsError::MalformedEntry {
            entry: entry.to_string(),
        })?;

    let mut tab = parse_entry(name);
    tab.menu_index = Some(menu_index);
    Ok(tab)
}
