use crate::config::Config;
use crate::models::{error::AppError, filters::FilterRequest, plant::Plant};
use serde::{Serialize, de::DeserializeOwned};

/// REST endpoints of the SolarFlux analytics service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Plant list with inverter / MPPT / string tree
    Plants,
    /// Inverter active power time series
    ActivePower,
    /// Per-day hourly generation profile
    HourlyProfile,
    /// Weekday x hour aggregate
    WeeklyHeatmap,
    /// Device clustering
    Cluster,
    /// Energy flow graph
    Sankey,
    /// Inverter / MPPT temperatures
    Temperature,
    /// Expected vs actual yield per device
    Suppression,
    /// DC to AC conversion efficiency per inverter
    Efficiency,
}

impl Endpoint {
    /// Path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Plants => "plants",
            Endpoint::ActivePower => "power/active_power",
            Endpoint::HourlyProfile => "solaranalytics/get_data",
            Endpoint::WeeklyHeatmap => "solaranalytics/weekly",
            Endpoint::Cluster => "cluster",
            Endpoint::Sankey => "sankey",
            Endpoint::Temperature => "health/temperature",
            Endpoint::Suppression => "suppression",
            Endpoint::Efficiency => "efficiency",
        }
    }

    /// All endpoints, in sidebar order of the pages using them.
    pub fn all() -> &'static [Endpoint] {
        &[
            Endpoint::Plants,
            Endpoint::ActivePower,
            Endpoint::HourlyProfile,
            Endpoint::WeeklyHeatmap,
            Endpoint::Cluster,
            Endpoint::Sankey,
            Endpoint::Temperature,
            Endpoint::Suppression,
            Endpoint::Efficiency,
        ]
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

// API CONFIGURATION
/// Configuration for the SolarFlux API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Constructs the full URL for an endpoint.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint.path())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (staging servers, tests).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::base_url().to_string()),
        }
    }
}

// SOLARFLUX CLIENT
/// HTTP client for the SolarFlux analytics API.
pub struct SolarFluxClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl SolarFluxClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// GETs an endpoint and decodes the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, AppError> {
        let request = self.http.get(self.config.url(endpoint));
        self.execute(request).await
    }

    /// POSTs a JSON body to an endpoint and decodes the JSON response.
    pub async fn post<T, B>(&self, endpoint: Endpoint, body: &B) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.http.post(self.config.url(endpoint)).json(body);
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, AppError> {
        let response = request.send().await.map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            429 => AppError::RateLimited,
            401 | 403 => AppError::AuthError(format!("Authentication failed: {status}")),
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the plant list using default configuration.
pub async fn fetch_plants() -> Result<Vec<Plant>, AppError> {
    SolarFluxClient::new()?.get(Endpoint::Plants).await
}

/// Posts filter parameters to an analytics endpoint using default configuration.
pub async fn fetch_analytics<T: DeserializeOwned>(
    endpoint: Endpoint,
    request: &FilterRequest,
) -> Result<T, AppError> {
    SolarFluxClient::new()?.post(endpoint, request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_with_single_slash() {
        let with_slash = ApiConfig::builder()
            .base_url("https://api.example.com/")
            .build();
        let without_slash = ApiConfig::builder()
            .base_url("https://api.example.com")
            .build();

        assert_eq!(
            with_slash.url(Endpoint::ActivePower),
            "https://api.example.com/power/active_power"
        );
        assert_eq!(
            without_slash.url(Endpoint::ActivePower),
            with_slash.url(Endpoint::ActivePower)
        );
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.base_url(), Config::base_url());
    }

    #[test]
    fn test_endpoint_paths_unique() {
        let mut paths: Vec<&str> = Endpoint::all().iter().map(Endpoint::path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Endpoint::all().len());
    }

    #[test]
    fn test_health_endpoint_path() {
        assert_eq!(Endpoint::Temperature.to_string(), "health/temperature");
        assert_eq!(Endpoint::HourlyProfile.path(), "solaranalytics/get_data");
    }

    #[test]
    fn test_client_creation() {
        let client = SolarFluxClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_status_mapping() {
        let client = SolarFluxClient::new().unwrap();
        assert_eq!(
            client.error_for_status(reqwest::StatusCode::TOO_MANY_REQUESTS, ""),
            AppError::RateLimited
        );
        assert!(matches!(
            client.error_for_status(reqwest::StatusCode::FORBIDDEN, ""),
            AppError::AuthError(_)
        ));
        assert!(matches!(
            client.error_for_status(reqwest::StatusCode::BAD_GATEWAY, "upstream"),
            AppError::ApiError(msg) if msg.contains("upstream")
        ));
    }
}
