//! Backend adapters resolving to a `ConnectionState`.

use super::ConnectionState;
use log::{info, warn};
use std::future::Future;
use std::time::{Duration, Instant};

/// Liveness probe against a sync backend.
pub trait SyncBackend {
    /// Resolves promptly to `Online` or `Offline`.
    fn connect(&self) -> impl Future<Output = ConnectionState> + Send;
}

/// Backend used when no sync endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledSyncBackend;

impl SyncBackend for DisabledSyncBackend {
    async fn connect(&self) -> ConnectionState {
        info!("event=sync_connect module=sync status=skipped reason=disabled");
        ConnectionState::Offline
    }
}

/// Probes an HTTP endpoint with a single `HEAD` request.
///
/// Any HTTP response counts as online, whatever its status code.
#[derive(Debug, Clone)]
pub struct HttpSyncBackend {
    url: String,
    timeout: Duration,
    client: Option<reqwest::Client>,
}

impl HttpSyncBackend {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|err| {
                warn!("event=sync_client module=sync status=error error={err}");
            })
            .ok();
        Self {
            url: url.into(),
            timeout,
            client,
        }
    }
}

impl SyncBackend for HttpSyncBackend {
    async fn connect(&self) -> ConnectionState {
        let Some(client) = self.client.as_ref() else {
            return ConnectionState::Offline;
        };

        let started_at = Instant::now();
        let probe = tokio::time::timeout(self.timeout, client.head(self.url.as_str()).send());
        let state = match probe.await {
            Ok(Ok(_)) => ConnectionState::Online,
            Ok(Err(err)) => {
                warn!(
                    "event=sync_connect module=sync status=offline reason=request error={}",
                    err.without_url()
                );
                ConnectionState::Offline
            }
            Err(_) => {
                warn!("event=sync_connect module=sync status=offline reason=timeout");
                ConnectionState::Offline
            }
        };

        info!(
            "event=sync_connect module=sync status={} duration_ms={}",
            state,
            started_at.elapsed().as_millis()
        );
        state
    }
}
