//! Account Protect API client.
//!
//! # Responsibilities
//! - Hold the validated configuration and the outbound HTTP client
//! - Stamp a fresh [`Module`] for every call
//! - Build the fingerprint (with optional overrides) before any network I/O
//! - Hand the event to its validate or collect operation

use std::time::Duration;

use reqwest::header::HeaderValue;

use crate::config::schema::{MODULE_NAME, MODULE_VERSION};
use crate::config::{normalize_endpoint, validate_config, ClientConfig, ConfigError, ValidationError};
use crate::error::Result;
use crate::events::{Action, Event, Operation};
use crate::fingerprint::{build_header, Header, InboundRequest, RequestMetadata};
use crate::models::{ErrorResponsePayload, Module};
use crate::transport::ValidateOutcome;

/// Client for the Account Protect API.
///
/// Read-only after construction; share it freely (it is cheap to clone).
#[derive(Clone)]
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
    api_key: HeaderValue,
    timeout: Duration,
    module_name: &'static str,
    module_version: &'static str,
}

impl Client {
    /// Validate `config` and build a client from it.
    pub fn new(mut config: ClientConfig) -> std::result::Result<Self, ConfigError> {
        validate_config(&config).map_err(ConfigError::Validation)?;
        config.endpoint = normalize_endpoint(&config.endpoint);

        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| ConfigError::Validation(vec![ValidationError::InvalidApiKey]))?;
        api_key.set_sensitive(true);

        let timeout = Duration::from_millis(config.timeout_ms);
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        tracing::info!(
            endpoint = %config.endpoint,
            timeout_ms = config.timeout_ms,
            "Account Protect client initialized"
        );

        Ok(Self {
            config,
            http,
            api_key,
            timeout,
            module_name: MODULE_NAME,
            module_version: MODULE_VERSION,
        })
    }

    /// Start a fluent builder with the mandatory API key.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            config: ClientConfig::new(api_key),
        }
    }

    /// Endpoint with scheme, without trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn api_key_header(&self) -> &HeaderValue {
        &self.api_key
    }

    /// Full URL for an operation on an action.
    pub fn url_for(&self, operation: Operation, action: Action) -> String {
        format!("{}/v1/{}/{}", self.config.endpoint, operation.as_str(), action.path())
    }

    /// Module section for a call made now.
    pub fn module(&self) -> Module {
        Module::now(self.module_name, self.module_version)
    }

    /// Fingerprint `request`, applying `metadata` overrides when given.
    pub fn build_header<R>(&self, request: &R, metadata: Option<&RequestMetadata>) -> Result<Header>
    where
        R: InboundRequest + ?Sized,
    {
        match metadata {
            Some(metadata) => build_header(request, metadata),
            None => build_header(request, &RequestMetadata::default()),
        }
    }

    /// Ask for a recommendation on `event`. Call it once the action succeeded.
    pub async fn validate<R, E>(&self, request: &R, event: &E) -> Result<ValidateOutcome>
    where
        R: InboundRequest + ?Sized,
        E: Event,
    {
        self.validate_with_metadata(request, event, None).await
    }

    /// [`Client::validate`] with fingerprint overrides.
    pub async fn validate_with_metadata<R, E>(
        &self,
        request: &R,
        event: &E,
        metadata: Option<&RequestMetadata>,
    ) -> Result<ValidateOutcome>
    where
        R: InboundRequest + ?Sized,
        E: Event,
    {
        let header = self.build_header(request, metadata)?;
        let module = self.module();
        event.validate(self, module, header).await
    }

    /// Report `event` for enrichment. Call it once the action failed.
    pub async fn collect<R, E>(&self, request: &R, event: &E) -> Result<Option<ErrorResponsePayload>>
    where
        R: InboundRequest + ?Sized,
        E: Event,
    {
        self.collect_with_metadata(request, event, None).await
    }

    /// [`Client::collect`] with fingerprint overrides.
    pub async fn collect_with_metadata<R, E>(
        &self,
        request: &R,
        event: &E,
        metadata: Option<&RequestMetadata>,
    ) -> Result<Option<ErrorResponsePayload>>
    where
        R: InboundRequest + ?Sized,
        E: Event,
    {
        let header = self.build_header(request, metadata)?;
        let module = self.module();
        event.collect(self, module, header).await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.config.endpoint)
            .field("timeout_ms", &self.config.timeout_ms)
            .field("module_version", &self.module_version)
            .finish()
    }
}

/// Fluent construction of a [`Client`]; the last call for a field wins.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.timeout_ms = timeout_ms;
        self
    }

    pub fn build(self) -> std::result::Result<Client, ConfigError> {
        Client::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS};
    use crate::fingerprint::RemoteAddr;
    use axum::body::Body;
    use axum::http::Request;

    #[test]
    fn test_default_values() {
        let client = Client::builder("your-fraud-api-key").build().unwrap();
        assert_eq!(client.endpoint(), format!("https://{}", DEFAULT_ENDPOINT));
        assert_eq!(client.config().api_key, "your-fraud-api-key");
        assert_eq!(client.timeout(), Duration::from_millis(DEFAULT_TIMEOUT_MS));
        assert_eq!(client.module_name, MODULE_NAME);
        assert_eq!(client.module_version, MODULE_VERSION);
    }

    #[test]
    fn test_missing_key() {
        let err = Client::builder("").build().unwrap_err();
        assert!(err.has(&ValidationError::KeyMissing));
        assert!(err.to_string().contains("FraudAPIKey must be defined"));
    }

    #[test]
    fn test_zero_timeout() {
        let err = Client::builder("key").timeout_ms(0).build().unwrap_err();
        assert!(err.has(&ValidationError::WrongTimeoutValue));
    }

    #[test]
    fn test_endpoint_normalization() {
        let bare = Client::builder("k").endpoint("api.example.org").build().unwrap();
        assert_eq!(bare.endpoint(), "https://api.example.org");

        let http = Client::builder("k").endpoint("http://api.example.org").build().unwrap();
        assert_eq!(http.endpoint(), "http://api.example.org");

        let https = Client::builder("k").endpoint("https://api.example.org").build().unwrap();
        assert_eq!(https.endpoint(), "https://api.example.org");
    }

    #[test]
    fn test_builder_last_write_wins() {
        let client = Client::builder("k")
            .timeout_ms(100)
            .timeout_ms(300)
            .build()
            .unwrap();
        assert_eq!(client.timeout(), Duration::from_millis(300));
    }

    #[test]
    fn test_url_for() {
        let client = Client::builder("k").endpoint("api.example.org/").build().unwrap();
        assert_eq!(
            client.url_for(Operation::Validate, Action::PasswordUpdate),
            "https://api.example.org/v1/validate/password/update"
        );
        assert_eq!(
            client.url_for(Operation::Collect, Action::AccountUpdate),
            "https://api.example.org/v1/collect/account/update"
        );
    }

    #[test]
    fn test_module_is_fresh() {
        let client = Client::builder("k").build().unwrap();
        let module = client.module();
        assert_eq!(module.name, MODULE_NAME);
        assert_eq!(module.request_time_micros.to_string().len(), 16);
    }

    #[test]
    fn test_build_header_without_metadata() {
        let client = Client::builder("k").build().unwrap();
        let mut request = Request::builder()
            .uri("/login")
            .header("host", "example.com")
            .body(Body::empty())
            .unwrap();
        request
            .extensions_mut()
            .insert(RemoteAddr("127.0.0.1:1234".into()));

        let header = client.build_header(&request, None).unwrap();
        assert_eq!(header.addr, "127.0.0.1");
        assert_eq!(header.request, "/login");

        let overrides = RequestMetadata {
            host: Some("override.example.com".into()),
            ..RequestMetadata::default()
        };
        let header = client.build_header(&request, Some(&overrides)).unwrap();
        assert_eq!(header.host, "override.example.com");
        assert_eq!(header.server_hostname, "example.com");
    }

    #[test]
    fn test_debug_hides_key() {
        let client = Client::builder("very-secret").build().unwrap();
        assert!(!format!("{:?}", client).contains("very-secret"));
    }
}
