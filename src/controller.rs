//! Command controller - glue between the scraper, the cache, and the
//! switcher.
//!
//! Policy is "soft-fail fetch, hard-fail action": a failed fetch keeps the
//! previously cached tab list (the user sees last-known tabs instead of a
//! flashing empty list), while a failed switch propagates so the caller can
//! show a failure notification.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::bridge::ScriptingBridge;
use crate::error::Result;
use crate::menu::MenuLocation;
use crate::scraper::TabScraper;
use crate::search::fuzzy_filter_tabs;
use crate::switcher::{SelectorStrategy, TabSwitcher};
use crate::tabs::Tab;

/// Fetch lifecycle. Refresh re-enters `Loading` from any settled state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Loading,
    Loaded,
    Error,
}

/// One selectable row: primary label is the project, secondary the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRow {
    pub title: String,
    pub subtitle: Option<String>,
    /// Index into the cached tab list
    pub index: usize,
}

pub struct TabListController<B: ScriptingBridge> {
    scraper: TabScraper<B>,
    switcher: TabSwitcher<B>,
    strategy: SelectorStrategy,
    cache: Mutex<Vec<Tab>>,
    state: Mutex<FetchState>,
}

impl<B: ScriptingBridge> TabListController<B> {
    pub fn new(bridge: Arc<B>, location: MenuLocation, strategy: SelectorStrategy) -> Self {
        Self {
            scraper: TabScraper::new(bridge.clone(), location.clone()),
            switcher: TabSwitcher::new(bridge, location),
            strategy,
            cache: Mutex::new(Vec::new()),
            state: Mutex::new(FetchState::Idle),
        }
    }

    pub fn state(&self) -> FetchState {
        *self.state.lock()
    }

    /// Single fetch attempt; no retry loop. On success the cache is replaced
    /// wholesale. On failure the previous cache is kept and the error is
    /// returned for callers that want it, but the displayed data survives.
    pub fn refresh(&self) -> Result<()> {
        *self.state.lock() = FetchState::Loading;

        match self.scraper.fetch(self.strategy) {
            Ok(tabs) => {
                debug!(count = tabs.len(), "Refresh succeeded");
                *self.cache.lock() = tabs;
                *self.state.lock() = FetchState::Loaded;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Refresh failed, keeping cached tabs");
                *self.state.lock() = FetchState::Error;
                Err(err)
            }
        }
    }

    /// Snapshot of the cached tab list.
    pub fn tabs(&self) -> Vec<Tab> {
        self.cache.lock().clone()
    }

    /// Rows for a searchable list, filtered by `query` (empty keeps all,
    /// in menu order).
    pub fn rows(&self, query: &str) -> Vec<TabRow> {
        let tabs = self.cache.lock();
        fuzzy_filter_tabs(&tabs, query)
            .into_iter()
            .map(|m| TabRow {
                title: m.tab.project,
                subtitle: m.tab.file,
                index: m.index,
            })
            .collect()
    }

    /// Switch to `tab`. Hard-fails so the caller can notify the user.
    pub fn activate(&self, tab: &Tab) -> Result<()> {
        self.switcher.switch(tab, self.strategy)
    }
}
