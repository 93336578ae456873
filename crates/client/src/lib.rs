pub mod decode;
pub mod error;
pub mod types;

pub use decode::decode_client_token;
pub use error::{NotifyError, Result};
pub use types::{
    CommentToPrBody, ConnectionParams, DispatchRequest, Method, RequestBody, UpdateStatusBody,
};

use std::time::Duration;

use tokio::task::JoinSet;

/// Client for the review service's notification API.
pub struct ReviewApi {
    client: reqwest::Client,
    base_url: String,
}

impl ReviewApi {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn update_status_request(&self, body: UpdateStatusBody) -> DispatchRequest {
        DispatchRequest {
            url: format!("{}/api/update-status", self.base_url),
            method: Method::Post,
            body: RequestBody::Status(body),
        }
    }

    pub fn comment_to_pr_request(&self, body: CommentToPrBody) -> DispatchRequest {
        DispatchRequest {
            url: format!("{}/api/comment-to-pr", self.base_url),
            method: Method::Post,
            body: RequestBody::Comment(body),
        }
    }

    /// Submit every request concurrently and wait for all of them to settle.
    /// Each endpoint is attempted exactly once; there are no retries and no
    /// ordering guarantee between requests.
    ///
    /// Application-level rejections (an error status with a JSON `message`
    /// body) are logged and suppressed so one rejected endpoint does not
    /// abort the others. The first transport failure is returned once all
    /// requests have settled. In dry-run mode no request is sent at all.
    pub async fn dispatch(&self, requests: Vec<DispatchRequest>, dry_run: bool) -> Result<()> {
        if dry_run {
            for request in &requests {
                tracing::info!("Dry run, skipping {:?} {}", request.method, request.url);
            }
            return Ok(());
        }
        let mut set = JoinSet::new();
        for request in requests {
            let client = self.client.clone();
            set.spawn(async move { send_one(client, request).await });
        }
        let mut first_failure = None;
        while let Some(joined) = set.join_next().await {
            let result = joined
                .unwrap_or_else(|e| Err(NotifyError::Transport(format!("dispatch task: {e}"))));
            match result {
                Ok(()) => {}
                Err(NotifyError::Application { status, message }) => {
                    tracing::error!("Review API rejected request (status {status}): {message}");
                }
                Err(e) => {
                    if first_failure.is_none() {
                        first_failure = Some(e);
                    }
                }
            }
        }
        match first_failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

async fn send_one(client: reqwest::Client, request: DispatchRequest) -> Result<()> {
    tracing::debug!("{:?} {}", request.method, request.url);
    let resp = client
        .request(request.method.into(), &request.url)
        .json(&request.body)
        .send()
        .await?;
    let status = resp.status();
    if status.as_u16() >= 400 {
        let body = resp.text().await.unwrap_or_default();
        return Err(error::classify(status.as_u16(), &body));
    }
    Ok(())
}
