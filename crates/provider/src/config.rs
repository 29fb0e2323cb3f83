//! Build tool configuration.

use crate::invoke::BuildTool;
use std::path::PathBuf;
use zigtask_core::constants::{DEFAULT_TOOL, ZIG_PATH_VAR};
use zigtask_core::{Error, Result};

/// Where to find the Zig executable.
///
/// Resolution order: an explicit path, then the `ZIGTASK_ZIG`
/// environment variable, then `zig` on `PATH`.
#[derive(Debug, Clone, Default)]
pub struct ToolConfig {
    /// Explicit path to the executable, bypassing environment lookup
    pub executable: Option<PathBuf>,
}

impl ToolConfig {
    /// Configuration using environment and `PATH` lookup
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration pinned to an explicit executable path
    #[must_use]
    pub fn with_executable(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: Some(executable.into()),
        }
    }

    /// Resolve the configured executable into a usable build tool.
    ///
    /// An explicit path is taken as-is; it is the spawn that decides
    /// whether it actually exists. Only the `PATH` fallback can fail
    /// here, when no `zig` is installed at all.
    pub fn resolve(&self) -> Result<BuildTool> {
        if let Some(path) = &self.executable {
            return Ok(BuildTool::new(path.clone()));
        }

        if let Ok(path) = std::env::var(ZIG_PATH_VAR) {
            if !path.is_empty() {
                return Ok(BuildTool::new(path));
            }
        }

        let found = which::which(DEFAULT_TOOL).map_err(|e| {
            Error::configuration(format!(
                "build tool '{DEFAULT_TOOL}' not found on PATH: {e}"
            ))
        })?;
        Ok(BuildTool::new(found))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn explicit_path_wins() {
        let config = ToolConfig::with_executable("/opt/zig/zig");
        let tool = config.resolve().unwrap();
        assert_eq!(tool.executable(), PathBuf::from("/opt/zig/zig"));
    }

    #[test]
    #[serial]
    fn env_var_is_used_when_no_explicit_path() {
        std::env::set_var(ZIG_PATH_VAR, "/custom/zig");
        let tool = ToolConfig::new().resolve().unwrap();
        std::env::remove_var(ZIG_PATH_VAR);
        assert_eq!(tool.executable(), PathBuf::from("/custom/zig"));
    }

    #[test]
    #[serial]
    fn explicit_path_beats_env_var() {
        std::env::set_var(ZIG_PATH_VAR, "/custom/zig");
        let tool = ToolConfig::with_executable("/opt/zig/zig").resolve().unwrap();
        std::env::remove_var(ZIG_PATH_VAR);
        assert_eq!(tool.executable(), PathBuf::from("/opt/zig/zig"));
    }

    #[test]
    #[serial]
    fn empty_env_var_falls_through() {
        std::env::set_var(ZIG_PATH_VAR, "");
        let result = ToolConfig::new().resolve();
        std::env::remove_var(ZIG_PATH_VAR);
        // Either PATH has a real zig or resolution fails with a
        // configuration error; the empty variable must not be used.
        if let Ok(tool) = result {
            assert_ne!(tool.executable(), PathBuf::from(""));
        }
    }
}
