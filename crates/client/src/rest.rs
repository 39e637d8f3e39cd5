//! Low-level REST plumbing shared by the per-service clients.
//!
//! One method per verb/payload shape: build the templated URL, issue the
//! request, decode the envelope, run detection. Transport failures never
//! surface raw — they become service-unavailable errors carrying the method
//! and URL.

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use lodestone_shared::messages::CatalogError;
use lodestone_shared::responses::ResponseEnvelope;

use crate::config::ClientConfig;
use crate::detect;
use crate::error::ClientError;

pub struct RestClient {
    http: reqwest::Client,
    base_url: Url,
    server_name: String,
    user_id: String,
}

impl RestClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            http: config.build_http_client()?,
            base_url: config.base_url.clone(),
            server_name: config.server_name.clone(),
            user_id: config.user_id.clone(),
        })
    }

    /// Expand `{base}/servers/{server}/api/{path}` and attach the caller id
    /// plus any extra query parameters.
    fn api_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ClientError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!(
            "{base}/servers/{server}/api/{path}",
            server = self.server_name
        ))
        .map_err(|e| ClientError::Configuration(format!("invalid request url: {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("user_id", &self.user_id);
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        url: Url,
        body: Option<&impl Serialize>,
    ) -> Result<ResponseEnvelope<T>, ClientError> {
        let method_name = method.as_str().to_string();
        tracing::debug!(method = %method_name, url = %url, "issuing access-service request");

        let mut request = self.http.request(method, url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(|e| {
            ClientError::ServiceUnavailable {
                method: method_name.clone(),
                url: url.to_string(),
                message: e.to_string(),
            }
        })?;

        // The server returns an envelope for every status; a body that does
        // not decode is a property-server failure.
        response
            .json::<ResponseEnvelope<T>>()
            .await
            .map_err(|e| ClientError::PropertyServer {
                message_id: CatalogError::RepositoryFailure.message_id().to_string(),
                message: format!("undecodable response from {method_name} {url}: {e}"),
            })
    }

    pub async fn get_element<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = self.api_url(path, query)?;
        let envelope = self
            .execute(reqwest::Method::GET, url.clone(), None::<&()>)
            .await?;
        detect::expect_element("GET", url.as_str(), envelope)
    }

    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, ClientError> {
        let url = self.api_url(path, query)?;
        let envelope = self
            .execute(reqwest::Method::GET, url.clone(), None::<&()>)
            .await?;
        detect::expect_list("GET", url.as_str(), envelope)
    }

    pub async fn post_element<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let url = self.api_url(path, &[])?;
        let envelope = self
            .execute(reqwest::Method::POST, url.clone(), Some(body))
            .await?;
        detect::expect_element("POST", url.as_str(), envelope)
    }

    pub async fn post_list<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Vec<T>, ClientError> {
        let url = self.api_url(path, &[])?;
        let envelope = self
            .execute(reqwest::Method::POST, url.clone(), Some(body))
            .await?;
        detect::expect_list("POST", url.as_str(), envelope)
    }

    pub async fn put_element<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<T, ClientError> {
        let url = self.api_url(path, query)?;
        let envelope = self
            .execute(reqwest::Method::PUT, url.clone(), Some(body))
            .await?;
        detect::expect_element("PUT", url.as_str(), envelope)
    }

    pub async fn put_void(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<(), ClientError> {
        let url = self.api_url(path, query)?;
        let envelope: ResponseEnvelope<serde_json::Value> = self
            .execute(reqwest::Method::PUT, url.clone(), None::<&()>)
            .await?;
        detect::expect_void("PUT", url.as_str(), envelope)
    }

    pub async fn delete_void(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<(), ClientError> {
        let url = self.api_url(path, query)?;
        let envelope: ResponseEnvelope<serde_json::Value> = self
            .execute(reqwest::Method::DELETE, url.clone(), None::<&()>)
            .await?;
        detect::expect_void("DELETE", url.as_str(), envelope)
    }
}

/// Paging window as query parameters.
pub(crate) fn paging_query(paging: lodestone_shared::paging::PageRequest) -> Vec<(&'static str, String)> {
    vec![
        ("start_from", paging.start_from.to_string()),
        ("page_size", paging.page_size.to_string()),
    ]
}
