use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use anyhow::{Context, Result};
use argp::FromArgs;
use vizdiff_core::config::NotifyConfig;
use vizdiff_core::models::ComparisonResult;
use vizdiff_plugin::NotifyPlugin;
use vizdiff_plugin::host::TracingLogger;

#[derive(FromArgs, PartialEq, Eq, Debug)]
/// Send a comparison result to the review service.
#[argp(subcommand, name = "notify")]
pub struct Args {
    #[argp(option, short = 'c')]
    /// notifier config file (YAML)
    config: String,
    #[argp(option, short = 'r')]
    /// comparison result file (JSON)
    result: String,
    #[argp(option)]
    /// report URL to include in the notification
    report_url: Option<String>,
    #[argp(switch)]
    /// build requests but skip all network calls
    dry_run: bool,
}

pub async fn run(args: Args) -> Result<()> {
    let config: NotifyConfig = {
        let file = BufReader::new(
            File::open(&args.config).with_context(|| format!("Failed to open {}", args.config))?,
        );
        serde_yaml::from_reader(file)
            .with_context(|| format!("Failed to parse {}", args.config))?
    };
    let result: ComparisonResult = {
        let file = BufReader::new(
            File::open(&args.result).with_context(|| format!("Failed to open {}", args.result))?,
        );
        serde_json::from_reader(file)
            .with_context(|| format!("Failed to parse {}", args.result))?
    };
    tracing::debug!(
        "Loaded comparison result from {}: {} failed, {} new, {} deleted, {} passed",
        args.result,
        result.failed_items.len(),
        result.new_items.len(),
        result.deleted_items.len(),
        result.passed_items.len(),
    );
    let plugin = NotifyPlugin::init(&config, Arc::new(TracingLogger), args.dry_run)
        .context("Failed to initialize notifier")?;
    plugin.notify(&result, args.report_url.as_deref()).await
}
