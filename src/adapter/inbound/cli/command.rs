//! Command-line interface definitions.
//!
//! Two entry points share this module: `shell-complete`, which completes one
//! partial command, and `llm-selftest`, which exercises every configured
//! backend with canned prompts.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::Backend;

/// Complete a partial or natural-language shell command with a hosted LLM
#[derive(Parser, Debug)]
#[command(name = "shell-complete")]
#[command(version)]
pub struct CompleteCli {
    /// Backend to query [anthropic, cerebras]; defaults to the first with a key
    #[arg(short, long, value_name = "NAME")]
    pub backend: Option<Backend>,

    /// Path to a config file (default: ~/.shell-complete/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity on stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// The partial command, as one or more words
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub words: Vec<String>,
}

impl CompleteCli {
    /// Words joined with single spaces.
    #[must_use]
    pub fn command_line(&self) -> String {
        self.words.join(" ")
    }
}

/// Run the completion prompts against every backend with an API key
#[derive(Parser, Debug)]
#[command(name = "llm-selftest")]
#[command(version)]
pub struct SelfTestCli {
    /// Color output mode [auto, always, never]
    #[arg(long, default_value = "auto", hide_possible_values = true)]
    pub color: ColorChoice,

    /// Path to a config file (default: ~/.shell-complete/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity on stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_join_with_single_spaces() {
        let cli = CompleteCli::parse_from(["shell-complete", "find", "all", "pdf", "files"]);
        assert_eq!(cli.command_line(), "find all pdf files");
        assert!(cli.backend.is_none());
    }

    #[test]
    fn hyphenated_words_after_the_first_are_kept() {
        let cli = CompleteCli::parse_from(["shell-complete", "ls", "-la", "--sort"]);
        assert_eq!(cli.command_line(), "ls -la --sort");
    }

    #[test]
    fn options_before_words() {
        let cli = CompleteCli::parse_from([
            "shell-complete",
            "--backend",
            "cerebras",
            "-vv",
            "tar",
            "logs",
        ]);
        assert_eq!(cli.backend, Some(Backend::Cerebras));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.command_line(), "tar logs");
    }

    #[test]
    fn no_words_parses_to_empty() {
        let cli = CompleteCli::parse_from(["shell-complete"]);
        assert!(cli.words.is_empty());
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let result = CompleteCli::try_parse_from(["shell-complete", "-b", "openai", "ls"]);
        assert!(result.is_err());
    }

    #[test]
    fn selftest_flags() {
        let cli = SelfTestCli::parse_from(["llm-selftest", "--color", "never", "-v"]);
        assert!(matches!(cli.color, ColorChoice::Never));
        assert_eq!(cli.verbose, 1);
        assert!(cli.config.is_none());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        CompleteCli::command().debug_assert();
        SelfTestCli::command().debug_assert();
    }
}
