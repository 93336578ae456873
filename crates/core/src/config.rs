use serde::{Deserialize, Serialize};

/// Notifier configuration. Option defaults are applied once, at
/// deserialization; readers never re-default.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotifyConfig {
    /// Compact client token issued by the review service. Takes precedence
    /// over the explicit `owner`/`repository`/`installation_id` fields.
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub installation_id: Option<String>,
    /// Post a summary comment to associated pull requests.
    #[serde(default = "default_true")]
    pub pr_comment: bool,
    #[serde(default)]
    pub pr_comment_behavior: CommentBehavior,
    /// Set a commit status for the compared commit.
    #[serde(default = "default_true")]
    pub set_commit_status: bool,
    /// Ask the review service to render compact comment summaries.
    #[serde(default)]
    pub short_description: bool,
    /// Overrides the review service's default API endpoint.
    #[serde(default)]
    pub custom_endpoint: Option<String>,
    /// Per-request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// How the review service manages the PR comment across pushes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentBehavior {
    /// Update the existing comment in place.
    #[default]
    Default,
    /// Comment only once per pull request.
    Once,
    /// Post a new comment for every push.
    New,
}

fn default_true() -> bool {
    true
}
