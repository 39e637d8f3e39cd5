//! Client configuration.
//!
//! TLS uses the platform's trust roots; deployments with a private CA add
//! its certificate explicitly. There is intentionally no option to skip
//! certificate validation.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::ClientError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Platform root, e.g. `https://metadata.example.org:9443`
    pub base_url: Url,
    /// Server the requests are scoped to
    pub server_name: String,
    /// Caller identity sent with every request
    pub user_id: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Extra PEM root certificate for private CAs
    pub root_certificate: Option<PathBuf>,
}

impl ClientConfig {
    pub fn new(
        base_url: impl AsRef<str>,
        server_name: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url.as_ref())
            .map_err(|e| ClientError::Configuration(format!("invalid base url: {e}")))?;
        Ok(Self {
            base_url,
            server_name: server_name.into(),
            user_id: user_id.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            root_certificate: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_root_certificate(mut self, path: impl Into<PathBuf>) -> Self {
        self.root_certificate = Some(path.into());
        self
    }

    /// Build the underlying HTTP client, loading the configured root
    /// certificate when one is present.
    pub(crate) fn build_http_client(&self) -> Result<reqwest::Client, ClientError> {
        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if let Some(path) = &self.root_certificate {
            let pem = std::fs::read(path).map_err(|e| {
                ClientError::Configuration(format!(
                    "cannot read root certificate {}: {e}",
                    path.display()
                ))
            })?;
            let certificate = reqwest::Certificate::from_pem(&pem).map_err(|e| {
                ClientError::Configuration(format!(
                    "root certificate {} is not valid PEM: {e}",
                    path.display()
                ))
            })?;
            builder = builder.add_root_certificate(certificate);
        }
        builder
            .build()
            .map_err(|e| ClientError::Configuration(format!("cannot build http client: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bad_base_url_is_a_configuration_error() {
        let err = ClientConfig::new("not a url", "mds", "erinoverview").unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn missing_root_certificate_file_is_reported() {
        let config = ClientConfig::new("https://localhost:9443", "mds", "erinoverview")
            .unwrap()
            .with_root_certificate("/nonexistent/ca.pem");
        let err = config.build_http_client().unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
        assert!(err.to_string().contains("/nonexistent/ca.pem"));
    }

    #[test]
    fn garbage_certificate_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not pem").unwrap();

        let config = ClientConfig::new("https://localhost:9443", "mds", "erinoverview")
            .unwrap()
            .with_root_certificate(file.path());
        let err = config.build_http_client().unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn default_timeout_applies() {
        let config = ClientConfig::new("https://localhost:9443", "mds", "erinoverview").unwrap();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.build_http_client().is_ok());
    }
}
