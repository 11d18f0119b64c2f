use crate::config::Config;
use crate::errors::AppError;
use reqwest::Client;
use serde_json::Value;

/// Client for the upstream vehicle lookup API.
#[derive(Clone)]
pub struct VehicleApiService {
    client: Client,
    base_url: String,
    api_key: String,
}

impl VehicleApiService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.upstream_base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Builds the upstream lookup URL.
    ///
    /// `rc` is interpolated as-is, without percent-encoding, and the
    /// upstream's parameter really is spelled `vehical`.
    pub fn upstream_url(&self, rc: &str) -> String {
        format!(
            "{}/api/vehicle?apikey={}&vehical={}",
            self.base_url, self.api_key, rc
        )
    }

    /// Fetches the raw lookup payload for a registration code.
    ///
    /// Makes a single request. The upstream status code is not checked: any
    /// response whose body parses as JSON is returned.
    pub async fn lookup(&self, rc: &str) -> Result<Value, AppError> {
        let url = self.upstream_url(rc);

        tracing::info!("Fetching vehicle details for rc: {}", rc);
        // Redact key from logs
        tracing::debug!(
            "Upstream URL: {}/api/vehicle?apikey=[REDACTED]&vehical={}",
            self.base_url,
            rc
        );

        let response = self.client.get(url).send().await.map_err(|e| {
            let err = AppError::from(e);
            tracing::error!("Upstream request failed for rc {}: {}", rc, err);
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Upstream returned status {} for rc {}", status, rc);
        }

        let body: Value = response.json().await.map_err(|e| {
            let err = AppError::from(e);
            tracing::error!("Failed to parse upstream response for rc {}: {}", rc, err);
            err
        })?;

        Ok(body)
    }
}
