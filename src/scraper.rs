//! Tab scraper - runs the menu scrape script and parses the result.

use std::sync::Arc;

use tracing::{debug, info};

use crate::bridge::ScriptingBridge;
use crate::error::{Result, ZedTabsError};
use crate::menu::{list_tabs_script, MenuLocation};
use crate::switcher::SelectorStrategy;
use crate::tabs::{parse_entry, parse_tagged_entry, split_entries, Tab};

pub struct TabScraper<B: ScriptingBridge> {
    bridge: Arc<B>,
    location: MenuLocation,
}

impl<B: ScriptingBridge> TabScraper<B> {
    pub fn new(bridge: Arc<B>, location: MenuLocation) -> Self {
        Self { bridge, location }
    }

    /// Fetch the current tab list from the live menu.
    ///
    /// The positional strategy needs the tagged scrape, and treats an empty
    /// result as [`ZedTabsError::NoTabs`] so callers fall back to their
    /// cached list (an empty Window menu tail usually means the editor is
    /// not frontmost). The by-name strategy accepts an empty list.
    pub fn fetch(&self, strategy: SelectorStrategy) -> Result<Vec<Tab>> {
        let tagged = strategy == SelectorStrategy::ByPosition;
        let raw = self.bridge.run(&list_tabs_script(&self.location, tagged))?;
        debug!(raw = %raw, tagged, "Scrape result");

        let entries = split_entries(&raw);
        if tagged && entries.is_empty() {
            return Err(ZedTabsError::NoTabs);
        }

        let tabs = if tagged {
            entries
                .into_iter()
                .map(parse_tagged_entry)
                .collect::<Result<Vec<_>>>()?
        } else {
            entries.into_iter().map(parse_entry).collect()
        };

        info!(count = tabs.len(), "Fetched tabs");
        Ok(tabs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    struct MockBridge {
        replies: Mutex<Vec<Result<String>>>,
    }

    impl MockBridge {
        fn replying(raw: &str) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(vec![Ok(raw.to_string())]),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(vec![Err(ZedTabsError::Bridge {
                    message: message.to_string(),
                })]),
            })
        }
    }

    impl ScriptingBridge for MockBridge {
        fn run(&self, _script: &str) -> Result<String> {
            self.replies.lock().pop().expect("no reply queued")
        }
    }

    fn scraper(bridge: Arc<MockBridge>) -> TabScraper<MockBridge> {
        TabScraper::new(bridge, MenuLocation::default())
    }

    #[test]
    fn test_untagged_scrape_parses_both_shapes() {
        let tabs = scraper(MockBridge::replying("MyApp — main.ts|||Settings"))
            .fetch(SelectorStrategy::ByName)
            .unwrap();
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].project, "MyApp");
        assert_eq!(tabs[0].file, Some("main.ts".to_string()));
        assert_eq!(tabs[1].project, "Settings");
        assert_eq!(tabs[1].file, None);
    }

    #[test]
    fn test_tagged_scrape_keeps_menu_positions() {
        let tabs = scraper(MockBridge::replying("5:::MyApp — main.ts|||7:::Settings"))
            .fetch(SelectorStrategy::ByPosition)
            .unwrap();
        assert_eq!(tabs[0].menu_index, Some(5));
        assert_eq!(tabs[1].menu_index, Some(7));
        assert_eq!(tabs[0].project, "MyApp");
        assert_eq!(tabs[1].file, None);
    }

    #[test]
    fn test_empty_tagged_scrape_is_an_error() {
        let err = scraper(MockBridge::replying(""))
            .fetch(SelectorStrategy::ByPosition)
            .unwrap_err();
        assert!(matches!(err, ZedTabsError::NoTabs));
    }

    #[test]
    fn test_empty_untagged_scrape_is_a_valid_empty_list() {
        let tabs = scraper(MockBridge::replying(""))
            .fetch(SelectorStrategy::ByName)
            .unwrap();
        assert!(tabs.is_empty());
    }

    #[test]
    fn test_malformed_tagged_entry_fails_the_fetch() {
        let err = scraper(MockBridge::replying("5:::Good|||garbage"))
            .fetch(SelectorStrategy::ByPosition)
            .unwrap_err();
        assert!(matches!(err, ZedTabsError::MalformedEntry { .. }));
    }

    #[test]
    fn test_bridge_error_propagates() {
        let err = scraper(MockBridge::failing("Zed got an error"))
            .fetch(SelectorStrategy::ByPosition)
            .unwrap_err();
        assert!(matches!(err, ZedTabsError::Bridge { .. }));
    }
}
