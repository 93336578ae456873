use vizdiff_client::types::{CommentToPrBody, ConnectionParams, UpdateStatusBody};
use vizdiff_core::config::CommentBehavior;
use vizdiff_core::models::{ComparisonResult, RunState};

/// Environment variable holding the commit SHA under test.
pub const COMMIT_SHA_ENV: &str = "VIZDIFF_COMMIT_SHA";

pub const DESCRIPTION_PASSED: &str = "Regression testing passed";
pub const DESCRIPTION_FAILED: &str = "Regression testing failed";

pub fn commit_sha_from_env() -> String {
    std::env::var(COMMIT_SHA_ENV).unwrap_or_default()
}

/// Build the commit-status payload for a comparison result.
pub fn build_status_body(
    params: &ConnectionParams,
    result: &ComparisonResult,
    sha1: &str,
    report_url: Option<&str>,
) -> UpdateStatusBody {
    let (state, description) = if result.is_passing() {
        (RunState::Success, DESCRIPTION_PASSED)
    } else {
        (RunState::Failure, DESCRIPTION_FAILED)
    };
    UpdateStatusBody {
        params: params.clone(),
        sha1: sha1.to_string(),
        description: description.to_string(),
        state,
        report_url: report_url.map(str::to_string),
    }
}

/// Build the PR-comment payload. Counts only; the review service renders
/// the comment body.
pub fn build_comment_body(
    params: &ConnectionParams,
    result: &ComparisonResult,
    sha1: &str,
    behavior: CommentBehavior,
    short_description: bool,
    report_url: Option<&str>,
) -> CommentToPrBody {
    CommentToPrBody {
        params: params.clone(),
        sha1: sha1.to_string(),
        behavior,
        short_description,
        failed_items_count: result.failed_items.len(),
        new_items_count: result.new_items.len(),
        deleted_items_count: result.deleted_items.len(),
        passed_items_count: result.passed_items.len(),
        report_url: report_url.map(str::to_string),
    }
}
