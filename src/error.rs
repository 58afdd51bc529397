// ABOUTME: Defines all error types for the quill library using thiserror.
// ABOUTME: Each submodule has its own error enum, unified under QuillError.

use std::path::PathBuf;

/// Top-level error type for the quill library.
#[derive(Debug, thiserror::Error)]
pub enum QuillError {
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Invocation error: {0}")]
    Invocation(#[from] InvocationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid research output: {0}")]
    Output(#[from] OutputError),
}

/// Faults signalled by hook callbacks.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("Rate limit exceeded: {tool_name} called {count} times (limit: {limit})")]
    RateLimitExceeded {
        tool_name: String,
        count: u32,
        limit: u32,
    },

    #[error("Hook callback failed: {0}")]
    Callback(#[source] anyhow::Error),
}

/// Errors from tool operations.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Execution failed: {0}")]
    Execution(#[source] anyhow::Error),
}

/// Errors from the note store and report synthesizer.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt record at {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid listing pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that abort a whole invocation before any call runs.
#[derive(Debug, thiserror::Error)]
pub enum InvocationError {
    #[error("Duplicate call id in invocation: {0}")]
    DuplicateCallId(String),

    #[error("BeforeInvocation hook failed: {0}")]
    Hook(#[from] HookError),
}

/// Errors from loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Longest permitted research summary, in characters.
pub const MAX_SUMMARY_CHARS: usize = 500;

/// Errors from validating structured research output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutputError {
    #[error("summary is {0} characters (max {max})", max = MAX_SUMMARY_CHARS)]
    SummaryTooLong(usize),

    #[error("at least one finding is required")]
    NoFindings,
}
