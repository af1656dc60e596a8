use thiserror::Error;
use tracing::{error, warn};

/// Error severity for UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning, // Recoverable - stale data shown instead
    Error,   // Operation failed - surface to the user
}

/// Domain-specific errors for zed-tabs
#[derive(Error, Debug)]
pub enum ZedTabsError {
    #[error("Scripting bridge failed: {message}")]
    Bridge { message: String },

    #[error("No tabs found - Zed is likely not running or not focused")]
    NoTabs,

    #[error("No menu item named \"{name}\"")]
    MenuItemNotFound { name: String },

    #[error("Menu item {index} is no longer \"{expected}\" (found \"{found}\")")]
    StaleSelector {
        index: u32,
        expected: String,
        found: String,
    },

    #[error("Malformed tab entry: {entry}")]
    MalformedEntry { entry: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ZedTabsError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Bridge { .. } => ErrorSeverity::Error,
            Self::NoTabs => ErrorSeverity::Warning,
            Self::MenuItemNotFound { .. } => ErrorSeverity::Error,
            Self::StaleSelector { .. } => ErrorSeverity::Error,
            Self::MalformedEntry { .. } => ErrorSeverity::Warning,
            Self::Config(_) => ErrorSeverity::Warning,
        }
    }

    /// Message suitable for a failure notification
    pub fn user_message(&self) -> String {
        match self {
            Self::Bridge { message } => message.clone(),
            Self::NoTabs => "Zed not focused - using cached tabs".to_string(),
            Self::MenuItemNotFound { name } => format!("No tab named \"{}\"", name),
            Self::StaleSelector {
                expected, found, ..
            } => format!("Tab list changed: expected \"{}\", found \"{}\"", expected, found),
            Self::MalformedEntry { entry } => format!("Could not parse tab entry \"{}\"", entry),
            Self::Config(msg) => format!("Configuration issue: {}", msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, ZedTabsError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user doesn't need to know.
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_not_found_names_the_tab() {
        let err = ZedTabsError::MenuItemNotFound {
            name: "Ghost".to_string(),
        };
        assert!(err.to_string().contains("Ghost"));
        assert!(err.user_message().contains("Ghost"));
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_no_tabs_hints_at_cache() {
        let err = ZedTabsError::NoTabs;
        assert!(err.user_message().contains("cached"));
        assert_eq!(err.severity(), ErrorSeverity::Warning);
    }

    #[test]
    fn test_result_ext_swallows_errors() {
        let failing: std::result::Result<(), &str> = Err("nope");
        assert_eq!(failing.warn_on_err(), None);
        let ok: std::result::Result<u32, &str> = Ok(7);
        assert_eq!(ok.log_err(), Some(7));
    }
}
