pub mod host;
pub mod payload;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use vizdiff_client::types::ConnectionParams;
use vizdiff_client::{DispatchRequest, ReviewApi, decode_client_token};
use vizdiff_core::config::{CommentBehavior, NotifyConfig};
use vizdiff_core::models::ComparisonResult;

use crate::host::{AppInfoProvider, DefaultAppInfo, PluginLogger};

/// The notifier plugin. Created once per run by `init`; `notify` may be
/// called any number of times afterwards.
pub struct NotifyPlugin {
    params: ConnectionParams,
    options: NotifyOptions,
    api: ReviewApi,
    dry_run: bool,
    logger: Arc<dyn PluginLogger>,
}

/// Notify options with defaults already applied, copied out of the
/// configuration at init.
#[derive(Debug, Clone, Copy)]
struct NotifyOptions {
    pr_comment: bool,
    pr_comment_behavior: CommentBehavior,
    set_commit_status: bool,
    short_description: bool,
}

impl NotifyPlugin {
    pub fn init(config: &NotifyConfig, logger: Arc<dyn PluginLogger>, dry_run: bool) -> Result<Self> {
        Self::init_with(config, logger, dry_run, &DefaultAppInfo)
    }

    pub fn init_with(
        config: &NotifyConfig,
        logger: Arc<dyn PluginLogger>,
        dry_run: bool,
        app_info: &dyn AppInfoProvider,
    ) -> Result<Self> {
        let params =
            resolve_params(config).context("Failed to resolve connection parameters")?;
        let base_url =
            config.custom_endpoint.clone().unwrap_or_else(|| app_info.api_base_url());
        let timeout = config.timeout_secs.map(Duration::from_secs);
        let api = ReviewApi::new(&base_url, timeout)
            .context("Failed to create review API client")?;
        Ok(Self {
            params,
            options: NotifyOptions {
                pr_comment: config.pr_comment,
                pr_comment_behavior: config.pr_comment_behavior,
                set_commit_status: config.set_commit_status,
                short_description: config.short_description,
            },
            api,
            dry_run,
            logger,
        })
    }

    pub fn connection_params(&self) -> &ConnectionParams {
        &self.params
    }

    pub fn api_base_url(&self) -> &str {
        self.api.base_url()
    }

    /// Report a comparison result to the review service. Resolves once all
    /// dispatched requests have settled; an application-level rejection of
    /// one endpoint is logged and suppressed, any other failure is returned.
    pub async fn notify(
        &self,
        result: &ComparisonResult,
        report_url: Option<&str>,
    ) -> Result<()> {
        let sha1 = payload::commit_sha_from_env();
        if sha1.is_empty() {
            self.logger.error(&format!(
                "{} is not set, reporting an empty commit SHA",
                payload::COMMIT_SHA_ENV
            ));
        }
        let requests = self.build_requests(result, &sha1, report_url);
        self.logger.start_spinner("Sending notification to the review service");
        let outcome = self.api.dispatch(requests, self.dry_run).await;
        self.logger.stop_spinner();
        match outcome {
            Ok(()) => {
                self.logger.info("Notification complete");
                Ok(())
            }
            Err(e) => {
                self.logger.error(&format!("Failed to send notification: {e}"));
                Err(e.into())
            }
        }
    }

    fn build_requests(
        &self,
        result: &ComparisonResult,
        sha1: &str,
        report_url: Option<&str>,
    ) -> Vec<DispatchRequest> {
        let mut requests = Vec::new();
        if self.options.set_commit_status {
            let body = payload::build_status_body(&self.params, result, sha1, report_url);
            self.logger.verbose(&format!(
                "Status update payload: {}",
                serde_json::to_string(&body).unwrap_or_default()
            ));
            requests.push(self.api.update_status_request(body));
        }
        if self.options.pr_comment {
            let body = payload::build_comment_body(
                &self.params,
                result,
                sha1,
                self.options.pr_comment_behavior,
                self.options.short_description,
                report_url,
            );
            self.logger.verbose(&format!(
                "PR comment payload: {}",
                serde_json::to_string(&body).unwrap_or_default()
            ));
            requests.push(self.api.comment_to_pr_request(body));
        }
        requests
    }
}

fn resolve_params(config: &NotifyConfig) -> Result<ConnectionParams> {
    if let Some(token) = &config.client_id {
        return Ok(decode_client_token(token)?);
    }
    match (&config.owner, &config.repository, &config.installation_id) {
        (Some(owner), Some(repository), Some(installation_id)) => Ok(ConnectionParams {
            owner: owner.clone(),
            repository: repository.clone(),
            installation_id: installation_id.clone(),
        }),
        _ => bail!(
            "Either client_id or all of owner, repository and installation_id must be configured"
        ),
    }
}
