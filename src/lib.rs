//! zed-tabs - list the open tabs of the Zed editor and switch focus to one.
//!
//! Zed exposes its open tabs as entries at the bottom of its "Window" menu.
//! This crate scrapes that menu through `osascript`, parses the entries into
//! structured tab records, and clicks a chosen entry to bring the tab into
//! focus. There is no durable state: every fetch is a live query against the
//! running editor's menu bar.

pub mod bridge;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod menu;
pub mod scraper;
pub mod search;
pub mod switcher;
pub mod tabs;
