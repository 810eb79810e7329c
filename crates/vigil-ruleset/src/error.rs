//! Error type for ruleset loading and lookups.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading rule documents or resolving hard references.
///
/// Missing *fields* are never an error (defaults apply); missing *rules*
/// only error through the `require_*` lookups.
#[derive(Debug, Error)]
pub enum RulesetError {
    #[error("failed to read ruleset file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse ruleset document '{name}': {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown armor rule '{0}'")]
    UnknownArmor(String),

    #[error("unknown codex article '{0}'")]
    UnknownArticle(String),
}
