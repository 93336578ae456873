use serde::{Deserialize, Serialize};

/// Outcome of a visual-regression comparison run, as produced by the
/// comparison engine. Items are keyed by their captured file name.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    #[serde(default)]
    pub passed_items: Vec<String>,
    #[serde(default)]
    pub failed_items: Vec<String>,
    #[serde(default)]
    pub new_items: Vec<String>,
    #[serde(default)]
    pub deleted_items: Vec<String>,
}

impl ComparisonResult {
    /// A run passes only when nothing failed, appeared or disappeared.
    pub fn is_passing(&self) -> bool {
        self.failed_items.is_empty() && self.new_items.is_empty() && self.deleted_items.is_empty()
    }
}

/// Pass/fail state reported to the review service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Success,
    Failure,
}
