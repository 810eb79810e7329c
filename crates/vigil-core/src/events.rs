//! Requests emitted by widgets for the screen stack to act on.

use serde::{Deserialize, Serialize};

/// What a widget asks of the surrounding screen stack after input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiRequest {
    /// Pop the current screen.
    CloseScreen,
    /// Open the codex article with the given id.
    OpenArticle { id: String },
}
