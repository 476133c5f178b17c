//! Prompt construction for shell command completion.

use serde::Deserialize;

/// Instruction and few-shot examples sent as the system message.
const FEW_SHOT_SYSTEM: &str = "You complete shell commands. Return ONLY the complete command, no explanations.\n\n\
Examples:\n\
Input: list all files\n\
Output: ls -la\n\n\
Input: find pdf files\n\
Output: find . -name \"*.pdf\"\n\n\
Input: compress logs\n\
Output: tar -czf logs.tar.gz *.log";

/// Single-message preamble used when no system message is sent.
const INLINE_PREAMBLE: &str = "You are a shell command completion assistant. \
Given a partial command, suggest the most likely completion or correction. \
Respond with ONLY the complete command, nothing else. \
Current partial command: ";

/// How the user's partial command is wrapped before it is sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptStyle {
    /// System message with worked examples, user message `Input: ...\nOutput:`.
    #[default]
    FewShot,
    /// One user message carrying the instructions and the command.
    Inline,
}

/// Text sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// System instructions, when the style uses them.
    pub system: Option<String>,
    /// The user turn.
    pub user: String,
}

impl Prompt {
    /// Wrap a partial command according to `style`.
    #[must_use]
    pub fn for_command(command: &str, style: PromptStyle) -> Self {
        match style {
            PromptStyle::FewShot => Self {
                system: Some(FEW_SHOT_SYSTEM.to_string()),
                user: format!("Input: {command}\nOutput:"),
            },
            PromptStyle::Inline => Self {
                system: None,
                user: format!("{INLINE_PREAMBLE}{command}"),
            },
        }
    }
}
