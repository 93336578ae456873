/// Logger surface supplied by the host framework: leveled logging plus a
/// start/stop progress indicator shown while requests are in flight.
pub trait PluginLogger: Send + Sync {
    fn info(&self, message: &str);
    fn verbose(&self, message: &str);
    fn error(&self, message: &str);
    fn start_spinner(&self, message: &str);
    fn stop_spinner(&self);
}

/// `tracing`-backed logger for hosts without their own UI. The spinner maps
/// to a single info event when it starts.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl PluginLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn verbose(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }

    fn start_spinner(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn stop_spinner(&self) {}
}

/// Supplies the review service's default API endpoint when the configuration
/// does not override it.
pub trait AppInfoProvider: Send + Sync {
    fn api_base_url(&self) -> String;
}

pub const DEFAULT_API_BASE_URL: &str = "https://api.vizdiff.dev";

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultAppInfo;

impl AppInfoProvider for DefaultAppInfo {
    fn api_base_url(&self) -> String {
        DEFAULT_API_BASE_URL.to_string()
    }
}
