#![allow(dead_code)]

pub mod stub;

use std::path::{Path, PathBuf};

/// Write a config file pointing both backends at `base_url`.
pub fn write_config(dir: &Path, base_url: &str, extra: &str) -> PathBuf {
    let path = dir.join("config.toml");
    let contents = format!(
        "[llm.anthropic]\nbase_url = \"{base_url}\"\n\n[llm.cerebras]\nbase_url = \"{base_url}\"\n\n{extra}"
    );
    std::fs::write(&path, contents).expect("write temp config");
    path
}
