//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::path::PathBuf;

/// Default authentication scheme.
pub const AUTH_TYPE: &str = "none";

/// Default directory for saved media replies.
pub const OUTPUT_DIR: &str = ".";

/// Default output path of the `init` subcommand.
pub const INIT_OUTPUT: &str = "hookchat.toml";

/// Application directory name under the platform config directory.
pub const APP_DIR: &str = "hookchat";

/// Configuration file name inside [`APP_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Default output directory as a path.
#[must_use]
pub fn output_dir() -> PathBuf {
    PathBuf::from(OUTPUT_DIR)
}

/// Per-user configuration file, e.g. `~/.config/hookchat/config.toml`.
///
/// Returns `None` if the platform has no config directory.
#[must_use]
pub fn config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
