//! AppleScript builders for scraping and clicking the Window menu.
//!
//! Zed's Window menu has a fixed leading section (window commands, zoom,
//! etc.) and a trailing dynamic section listing the open tabs. The two are
//! divided by separator items, which System Events reports as menu items
//! whose name is `missing value`. The scrape script counts separators and
//! starts collecting once [`MenuLocation::separator_threshold`] of them have
//! been seen.
//!
//! Switch scripts return a small reply string (`ok` / `missing` /
//! `stale:<name>`) instead of raising inside AppleScript, so the Rust side
//! can map every outcome to a typed error.

/// Delimiter between scraped entries. Must never occur in a tab name.
pub const ENTRY_DELIMITER: &str = "|||";

/// Delimiter between the menu position tag and the name in tagged entries.
pub const INDEX_DELIMITER: &str = ":::";

/// Separator between project and file in a tab's display name
/// (em dash with surrounding spaces).
pub const NAME_SEPARATOR: &str = " — ";

/// Default number of separators preceding the dynamic tab section.
pub const DEFAULT_SEPARATOR_THRESHOLD: u32 = 4;

/// Where to find the tab entries in the target application's menu bar.
///
/// The separator threshold encodes a positional assumption about a foreign
/// menu's fixed structure; it lives here, away from the parsing logic, so a
/// menu layout change only touches this one knob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLocation {
    /// Process name as seen by System Events (e.g. "Zed")
    pub app_name: String,
    /// Menu bar item title holding the tab list (e.g. "Window")
    pub menu_title: String,
    /// Separators to skip before entries count as tabs
    pub separator_threshold: u32,
}

impl Default for MenuLocation {
    fn default() -> Self {
        Self {
            app_name: "Zed".to_string(),
            menu_title: "Window".to_string(),
            separator_threshold: DEFAULT_SEPARATOR_THRESHOLD,
        }
    }
}

/// Escape a string for embedding in an AppleScript string literal.
pub fn escape_applescript(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}

/// Build the scrape script.
///
/// Walks every item of the configured submenu, treats unnamed items as
/// separators, and collects the names after the threshold, joined with
/// [`ENTRY_DELIMITER`]. When `tagged` is set each entry is prefixed with its
/// 1-based overall menu position and [`INDEX_DELIMITER`], which is what the
/// positional switch later clicks.
pub fn list_tabs_script(location: &MenuLocation, tagged: bool) -> String {
    let collect = if tagged {
        format!(
            "set end of results to (idx as text) & \"{}\" & t",
            INDEX_DELIMITER
        )
    } else {
        "set end of results to t".to_string()
    };

    format!(
        r#"tell application "System Events"
  tell process "{app}"
    set theMenu to menu 1 of menu bar item "{menu}" of menu bar 1
    set theItems to menu items of theMenu
    set foundSeparators to 0
    set results to {{}}
    set idx to 0
    repeat with mi in theItems
      set idx to idx + 1
      set t to name of mi
      if t is missing value then
        set foundSeparators to foundSeparators + 1
      else if foundSeparators >= {threshold} then
        {collect}
      end if
    end repeat
    set AppleScript's text item delimiters to "{delim}"
    return results as text
  end tell
end tell"#,
        app = escape_applescript(&location.app_name),
        menu = escape_applescript(&location.menu_title),
        threshold = location.separator_threshold,
        collect = collect,
        delim = ENTRY_DELIMITER,
    )
}

/// Build the positional switch script.
///
/// Re-reads the name at the stored position and refuses to click when it no
/// longer matches `expected_name`, so a menu that mutated between fetch and
/// switch yields a `stale:` reply rather than activating an arbitrary tab.
/// On success: click, bring the app to the foreground, reply `ok`.
pub fn switch_by_position_script(
    location: &MenuLocation,
    index: u32,
    expected_name: &str,
) -> String {
    format!(
        r#"tell application "System Events"
  tell process "{app}"
    set theMenu to menu 1 of menu bar item "{menu}" of menu bar 1
    set t to name of menu item {index} of theMenu
    if t is missing value then return "stale:"
    if t is not equal to "{expected}" then return "stale:" & t
    click menu item {index} of theMenu
  end tell
end tell
tell application "{app}" to activate
return "ok""#,
        app = escape_applescript(&location.app_name),
        menu = escape_applescript(&location.menu_title),
        index = index,
        expected = escape_applescript(expected_name),
    )
}

/// Build the by-name switch script.
///
/// Re-scans the menu for an exact name match. Resilient to reordering;
/// replies `missing` when no item matches. A name collision is not detected,
/// the first match wins.
pub fn switch_by_name_script(location: &MenuLocation, name: &str) -> String {
    format!(
        r#"set found to false
tell application "System Events"
  tell process "{app}"
    set theMenu to menu 1 of menu bar item "{menu}" of menu bar 1
    repeat with mi in menu items of theMenu
      set t to name of mi
      if t is not missing value and t is equal to "{name}" then
        click mi
        set found to true
        exit repeat
      end if
    end repeat
  end tell
end tell
if found then
  tell application "{app}" to activate
  return "ok"
end if
return "missing""#,
        app = escape_applescript(&location.app_name),
        menu = escape_applescript(&location.menu_title),
        name = escape_applescript(name),
    )
}
