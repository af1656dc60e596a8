//! zed-tabs CLI.
//!
//! `zed-tabs list` scrapes the Window menu and prints the open tabs;
//! `zed-tabs switch <query>` brings the best-matching tab into focus.
//! Listing is a fresh scrape every run, so re-running `list` is the
//! refresh action.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use zed_tabs::bridge::OsaBridge;
use zed_tabs::config::{load_config, Config};
use zed_tabs::controller::TabListController;
use zed_tabs::error::ResultExt;
use zed_tabs::logging;
use zed_tabs::search::fuzzy_filter_tabs;
use zed_tabs::switcher::SelectorStrategy;
use zed_tabs::tabs::Tab;

#[derive(Parser)]
#[command(name = "zed-tabs", version, about = "List and switch Zed editor tabs")]
struct Cli {
    /// Target application process name (overrides config)
    #[arg(long, global = true)]
    app: Option<String>,

    /// Menu bar item holding the tab list (overrides config)
    #[arg(long, global = true)]
    menu: Option<String>,

    /// Re-locate tabs by display name instead of menu position
    #[arg(long, global = true)]
    by_name: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the open tabs, optionally filtered
    List {
        /// Fuzzy filter applied to tab names
        query: Option<String>,
        /// Emit the tab records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Switch focus to the tab best matching the query
    Switch {
        /// Exact tab name, or a fuzzy query
        query: String,
    },
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(app) = &cli.app {
        config.app_name = app.clone();
    }
    if let Some(menu) = &cli.menu {
        config.menu_title = menu.clone();
    }
    if cli.by_name {
        config.strategy = SelectorStrategy::ByName;
    }
}

/// Resolve a switch query against the fetched tabs: an exact display-name
/// match wins, otherwise the best fuzzy match.
fn resolve_tab(tabs: &[Tab], query: &str) -> Option<Tab> {
    if let Some(tab) = tabs.iter().find(|t| t.name == query) {
        return Some(tab.clone());
    }
    fuzzy_filter_tabs(tabs, query).into_iter().next().map(|m| m.tab)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = logging::init();

    let mut config = load_config();
    apply_overrides(&mut config, &cli);

    let bridge = Arc::new(OsaBridge::new());
    let controller = TabListController::new(bridge, config.menu_location(), config.strategy);

    match cli.command {
        Commands::List { query, json } => {
            // Soft-fail: a failed fetch leaves the (empty) cache in place
            let _ = controller.refresh().warn_on_err();

            let query = query.unwrap_or_default();
            if json {
                let tabs = controller.tabs();
                let matched: Vec<Tab> = fuzzy_filter_tabs(&tabs, &query)
                    .into_iter()
                    .map(|m| m.tab)
                    .collect();
                let out = serde_json::to_string_pretty(&matched)
                    .context("Failed to serialize tabs")?;
                println!("{}", out);
            } else {
                for row in controller.rows(&query) {
                    match row.subtitle {
                        Some(file) => println!("{} — {}", row.title, file),
                        None => println!("{}", row.title),
                    }
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Switch { query } => {
            let _ = controller.refresh().warn_on_err();

            let tabs = controller.tabs();
            if tabs.is_empty() {
                eprintln!("No tabs available");
                return Ok(ExitCode::FAILURE);
            }

            let Some(tab) = resolve_tab(&tabs, &query) else {
                eprintln!("No tab matching \"{}\"", query);
                return Ok(ExitCode::FAILURE);
            };

            match controller.activate(&tab) {
                Ok(()) => Ok(ExitCode::SUCCESS),
                Err(err) => {
                    let message = err.user_message();
                    let message = if message.is_empty() {
                        "Unknown error".to_string()
                    } else {
                        message
                    };
                    eprintln!("Failed to switch tab: {}", message);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
