//! Path utilities.
//!
//! Configuration lives under `~/.shell-complete/`.

use std::path::PathBuf;

/// Returns the home directory for this tool (`~/.shell-complete/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".shell-complete")
}

/// Returns the default config file path (`~/.shell-complete/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_under_tool_home() {
        let config = default_config();
        assert!(config.starts_with(home_dir()));
        assert!(config.ends_with(".shell-complete/config.toml"));
    }
}
