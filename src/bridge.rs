//! Scripting bridge - the sole I/O boundary to the OS and the target app.
//!
//! Everything that touches the live menu state goes through [`ScriptingBridge`]
//! so the scraper, switcher, and controller can be exercised against a mock.
//! The real implementation shells out to `osascript`.

use std::process::Command;
use tracing::{debug, error};

use crate::error::{Result, ZedTabsError};

/// Capability seam over the OS automation layer.
///
/// A call blocks until the bridge returns or errors; no timeout is enforced
/// here beyond whatever the bridge itself applies.
pub trait ScriptingBridge: Send + Sync {
    /// Execute a script and return its string result (trimmed).
    fn run(&self, script: &str) -> Result<String>;
}

/// Bridge that executes AppleScript via `osascript -e`.
pub struct OsaBridge {
    program: String,
}

impl OsaBridge {
    pub fn new() -> Self {
        Self {
            program: "osascript".to_string(),
        }
    }

    /// Use an alternative interpreter binary. Test hook.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for OsaBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptingBridge for OsaBridge {
    fn run(&self, script: &str) -> Result<String> {
        debug!(script = %script, "Executing AppleScript");

        let output = Command::new(&self.program)
            .arg("-e")
            .arg(script)
            .output()
            .map_err(|e| ZedTabsError::Bridge {
                message: format!("Failed to execute {}: {}", self.program, e),
            })?;

        if output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
            debug!(output = %stdout, "AppleScript executed successfully");
            Ok(stdout)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!(stderr = %stderr, "AppleScript execution failed");
            Err(ZedTabsError::Bridge {
                message: format!("AppleScript error: {}", stderr.trim()),
            })
        }
    }
}
