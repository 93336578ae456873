use serde::{Deserialize, Serialize};
use vizdiff_core::config::CommentBehavior;
use vizdiff_core::models::RunState;

/// Connection parameters for the review service, resolved once at init.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionParams {
    pub owner: String,
    pub repository: String,
    pub installation_id: String,
}

/// Body of `POST /api/update-status`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusBody {
    #[serde(flatten)]
    pub params: ConnectionParams,
    pub sha1: String,
    pub description: String,
    pub state: RunState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_url: Option<String>,
}

/// Body of `POST /api/comment-to-pr`. The review service renders the
/// comment; the plugin only reports counts and behavior.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentToPrBody {
    #[serde(flatten)]
    pub params: ConnectionParams,
    pub sha1: String,
    pub behavior: CommentBehavior,
    pub short_description: bool,
    pub failed_items_count: usize,
    pub new_items_count: usize,
    pub deleted_items_count: usize,
    pub passed_items_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RequestBody {
    Status(UpdateStatusBody),
    Comment(CommentToPrBody),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A single outbound call, one per target endpoint per notify.
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    pub url: String,
    pub method: Method,
    pub body: RequestBody,
}
