//! Fuzzy filtering for the tab list, using nucleo for matching and scoring.

use nucleo_matcher::pattern::Pattern;
use nucleo_matcher::{Matcher, Utf32Str};

use crate::tabs::Tab;

/// Reusable matcher context holding the parsed pattern, the matcher, and a
/// scratch buffer so scoring a list does not allocate per item.
pub struct NucleoCtx {
    pattern: Pattern,
    matcher: Matcher,
    buf: Vec<char>,
}

impl NucleoCtx {
    /// Parse `query` with case-insensitive matching and smart normalization.
    pub fn new(query: &str) -> Self {
        let pattern = Pattern::parse(
            query,
            nucleo_matcher::pattern::CaseMatching::Ignore,
            nucleo_matcher::pattern::Normalization::Smart,
        );
        Self {
            pattern,
            matcher: Matcher::new(nucleo_matcher::Config::DEFAULT),
            buf: Vec::with_capacity(64),
        }
    }

    /// Score a haystack against the pattern. None means no match.
    #[inline]
    pub fn score(&mut self, haystack: &str) -> Option<u32> {
        self.buf.clear();
        let utf32 = Utf32Str::new(haystack, &mut self.buf);
        self.pattern.score(utf32, &mut self.matcher)
    }
}

/// A tab that matched the query, with its position in the source list.
#[derive(Debug, Clone)]
pub struct TabMatch {
    pub tab: Tab,
    /// Index into the list that was filtered
    pub index: usize,
    pub score: u32,
}

/// Filter tabs against `query`, best match first.
///
/// Matches against the full display name, so both the project and the file
/// part are searchable. An empty query keeps every tab in menu order.
pub fn fuzzy_filter_tabs(tabs: &[Tab], query: &str) -> Vec<TabMatch> {
    if query.is_empty() {
        return tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| TabMatch {
                tab: tab.clone(),
                index,
                score: 0,
            })
            .collect();
    }

    let mut ctx = NucleoCtx::new(query);
    let mut matches: Vec<TabMatch> = tabs
        .iter()
        .enumerate()
        .filter_map(|(index, tab)| {
            ctx.score(&tab.name).map(|score| TabMatch {
                tab: tab.clone(),
                index,
                score,
            })
        })
        .collect();

    // Stable sort keeps menu order among equal scores
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}
