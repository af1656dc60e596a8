//! Tab switcher - clicks a previously fetched tab's menu item and brings
//! the target application to the foreground.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::bridge::ScriptingBridge;
use crate::error::{Result, ZedTabsError};
use crate::menu::{switch_by_name_script, switch_by_position_script, MenuLocation};
use crate::tabs::Tab;

/// How a fetched tab is re-located at switch time.
///
/// Positions survive name collisions but go stale when the menu mutates
/// (the positional script re-verifies the name before clicking). Names
/// survive reordering but cannot distinguish identically named tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectorStrategy {
    ByPosition,
    ByName,
}

impl Default for SelectorStrategy {
    fn default() -> Self {
        SelectorStrategy::ByPosition
    }
}

pub struct TabSwitcher<B: ScriptingBridge> {
    bridge: Arc<B>,
    location: MenuLocation,
}

impl<B: ScriptingBridge> TabSwitcher<B> {
    pub fn new(bridge: Arc<B>, location: MenuLocation) -> Self {
        Self { bridge, location }
    }

    /// Bring `tab` into focus. Hard-fails; callers surface the error as a
    /// failure notification.
    pub fn switch(&self, tab: &Tab, strategy: SelectorStrategy) -> Result<()> {
        info!(tab = %tab.name, ?strategy, "Switching tab");

        let script = match strategy {
            SelectorStrategy::ByPosition => {
                let index = tab.menu_index.ok_or_else(|| ZedTabsError::Bridge {
                    message: format!("Tab \"{}\" has no stored menu position", tab.name),
                })?;
                switch_by_position_script(&self.location, index, &tab.name)
            }
            SelectorStrategy::ByName => switch_by_name_script(&self.location, &tab.name),
        };

        let reply = self.bridge.run(&script)?;
        self.interpret_reply(tab, reply.trim())
    }

    fn interpret_reply(&self, tab: &Tab, reply: &str) -> Result<()> {
        debug!(reply = %reply, "Switch script reply");
        if reply == "ok" {
            return Ok(());
        }
        if reply == "missing" {
            return Err(ZedTabsError::MenuItemNotFound {
                name: tab.name.clone(),
            });
        }
        if let Some(found) = reply.strip_prefix("stale:") {
            return Err(ZedTabsError::StaleSelector {
                index: tab.menu_index.unwrap_or(0),
                expected: tab.name.clone(),
                found: found.to_string(),
            });
        }
        Err(ZedTabsError::Bridge {
            message: format!("Unexpected switch reply: {}", reply),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::parse_tagged_entry;
    use parking_lot::Mutex;

    /// Bridge that records scripts and replays canned replies.
    struct MockBridge {
        reply: Result<String>,
        scripts: Mutex<Vec<String>>,
    }

    impl MockBridge {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                scripts: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(ZedTabsError::Bridge {
                    message: message.to_string(),
                }),
                scripts: Mutex::new(Vec::new()),
            }
        }

        fn last_script(&self) -> String {
            self.scripts.lock().last().cloned().unwrap_or_default()
        }
    }

    impl ScriptingBridge for MockBridge {
        fn run(&self, script: &str) -> Result<String> {
            self.scripts.lock().push(script.to_string());
            match &self.reply {
                Ok(s) => Ok(s.clone()),
                Err(ZedTabsError::Bridge { message }) => Err(ZedTabsError::Bridge {
                    message: message.clone(),
                }),
                Err(_) => unreachable!(),
            }
        }
    }

    fn switcher(bridge: Arc<MockBridge>) -> TabSwitcher<MockBridge> {
        TabSwitcher::new(bridge, MenuLocation::default())
    }

    #[test]
    fn test_switch_by_position_clicks_stored_index() {
        let bridge = Arc::new(MockBridge::replying("ok"));
        let tab = parse_tagged_entry("5:::MyApp — main.ts").unwrap();
        switcher(bridge.clone())
            .switch(&tab, SelectorStrategy::ByPosition)
            .unwrap();
        assert!(bridge.last_script().contains("menu item 5"));
        assert!(bridge.last_script().contains("MyApp — main.ts"));
    }

    #[test]
    fn test_switch_by_position_without_index_fails() {
        let bridge = Arc::new(MockBridge::replying("ok"));
        let tab = crate::tabs::parse_entry("Settings");
        let err = switcher(bridge.clone())
            .switch(&tab, SelectorStrategy::ByPosition)
            .unwrap_err();
        assert!(err.to_string().contains("menu position"));
        // nothing was clicked
        assert!(bridge.scripts.lock().is_empty());
    }

    #[test]
    fn test_stale_position_is_detected() {
        let bridge = Arc::new(MockBridge::replying("stale:Other — thing.rs"));
        let tab = parse_tagged_entry("5:::MyApp — main.ts").unwrap();
        let err = switcher(bridge)
            .switch(&tab, SelectorStrategy::ByPosition)
            .unwrap_err();
        match err {
            ZedTabsError::StaleSelector {
                index,
                expected,
                found,
            } => {
                assert_eq!(index, 5);
                assert_eq!(expected, "MyApp — main.ts");
                assert_eq!(found, "Other — thing.rs");
            }
            other => panic!("expected StaleSelector, got {:?}", other),
        }
    }

    #[test]
    fn test_switch_by_name_missing_names_the_tab() {
        let bridge = Arc::new(MockBridge::replying("missing"));
        let tab = crate::tabs::parse_entry("Ghost");
        let err = switcher(bridge)
            .switch(&tab, SelectorStrategy::ByName)
            .unwrap_err();
        match err {
            ZedTabsError::MenuItemNotFound { name } => assert_eq!(name, "Ghost"),
            other => panic!("expected MenuItemNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_bridge_failure_propagates() {
        let bridge = Arc::new(MockBridge::failing("process not found"));
        let tab = crate::tabs::parse_entry("Settings");
        let err = switcher(bridge)
            .switch(&tab, SelectorStrategy::ByName)
            .unwrap_err();
        assert!(matches!(err, ZedTabsError::Bridge { .. }));
    }

    #[test]
    fn test_unexpected_reply_is_a_bridge_error() {
        let bridge = Arc::new(MockBridge::replying("¯\\_(ツ)_/¯"));
        let tab = crate::tabs::parse_entry("Settings");
        let err = switcher(bridge)
            .switch(&tab, SelectorStrategy::ByName)
            .unwrap_err();
        assert!(matches!(err, ZedTabsError::Bridge { .. }));
    }
}
