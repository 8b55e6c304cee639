//! Load scheduled items from a directory of .ics files.

use anyhow::Result;
use planbook_core::ics::parse_item;
use planbook_core::{Preferences, ScheduledItem};
use std::path::Path;

/// Load all items from the preferences' items directory.
pub fn load_items(prefs: &Preferences) -> Result<Vec<ScheduledItem>> {
    list(&prefs.resolved_items_dir())
}

/// List all items in a directory.
///
/// A missing directory gives an empty list; files that fail to parse are
/// skipped rather than aborting the whole listing.
pub fn list(dir: &Path) -> Result<Vec<ScheduledItem>> {
    let mut items = Vec::new();

    if !dir.exists() {
        return Ok(items);
    }

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().map(|e| e == "ics").unwrap_or(false) {
            if let Ok(content) = std::fs::read_to_string(&path) {
                if let Some(item) = parse_item(&content) {
                    items.push(item);
                }
            }
        }
    }

    Ok(items)
}
