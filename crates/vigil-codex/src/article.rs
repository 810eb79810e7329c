//! Article lookup shared by codex consumers.

use vigil_ruleset::{ArticleRule, Ruleset, RulesetError};

/// Resolve an article id, e.g. from an item middle-clicked in an
/// inventory display. Unknown ids are an error for the caller to drop
/// or report.
pub fn open_article<'a>(rules: &'a Ruleset, id: &str) -> Result<&'a ArticleRule, RulesetError> {
    rules.require_article(id)
}
