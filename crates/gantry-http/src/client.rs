//! REST HTTP client plumbing.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, instrument, trace};

use gantry_core::error::{Error, RequestFailure, TransportError};
use gantry_core::{ApiUrl, SessionToken};

/// Response header carrying the server-reported collection size.
const TOTAL_COUNT: &str = "X-Total-Count";

/// HTTP client for the admin backend.
///
/// Attaches the bearer token to every request once a session is set.
/// There is no refresh or retry-on-401; any authentication failure is
/// the caller's cue to re-authenticate.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base: ApiUrl,
    token: Option<SessionToken>,
}

impl RestClient {
    /// Create a new client for the given backend.
    pub fn new(base: ApiUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("gantry/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base,
            token: None,
        }
    }

    /// Returns the base URL this client is configured for.
    pub fn base(&self) -> &ApiUrl {
        &self.base
    }

    /// Set or clear the bearer token attached to subsequent requests.
    pub fn set_token(&mut self, token: Option<SessionToken>) {
        self.token = token;
    }

    /// Returns the active bearer token, if any.
    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    /// GET a JSON body.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn get_json<R>(&self, path: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let url = self.base.join(path);
        debug!(path, "GET");

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(transport)?;

        Self::handle_json(response).await
    }

    /// GET a JSON array plus the `X-Total-Count` header (0 when absent).
    ///
    /// A body that is not an array is treated as an empty page.
    #[instrument(skip(self, params), fields(base = %self.base))]
    pub async fn get_list(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<(Vec<Value>, u64), Error> {
        let url = self.base.join(path);
        debug!(path, "GET list");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(&url)
            .query(params)
            .headers(self.headers())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        trace!(status = %status, "response");
        if !status.is_success() {
            return Err(Self::failure(response).await.into());
        }

        let total = response
            .headers()
            .get(TOTAL_COUNT)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0);

        let body: Value = response.json().await.map_err(transport)?;
        let entries = match body {
            Value::Array(entries) => entries,
            _ => Vec::new(),
        };

        Ok((entries, total))
    }

    /// POST a JSON body and decode a JSON response.
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.base.join(path);
        debug!(path, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .headers(self.headers())
            .send()
            .await
            .map_err(transport)?;

        Self::handle_json(response).await
    }

    /// PATCH a JSON body and decode a JSON response.
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub async fn patch_json<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.base.join(path);
        debug!(path, "PATCH");

        let response = self
            .client
            .patch(&url)
            .json(body)
            .headers(self.headers())
            .send()
            .await
            .map_err(transport)?;

        Self::handle_json(response).await
    }

    /// DELETE; the response body is discarded.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.base.join(path);
        debug!(path, "DELETE");

        let response = self
            .client
            .delete(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::failure(response).await.into())
        }
    }

    /// Issue a PATCH and settle without inspecting the response status.
    ///
    /// Used by bulk fan-out: HTTP-level failures must not abort the
    /// batch, only transport failures surface.
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub async fn patch_settle<B>(&self, path: &str, body: &B) -> Result<(), Error>
    where
        B: Serialize + std::fmt::Debug,
    {
        let url = self.base.join(path);
        debug!(path, "PATCH (settle)");

        self.client
            .patch(&url)
            .json(body)
            .headers(self.headers())
            .send()
            .await
            .map_err(transport)?;

        Ok(())
    }

    /// Issue a DELETE and settle without inspecting the response status.
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn delete_settle(&self, path: &str) -> Result<(), Error> {
        let url = self.base.join(path);
        debug!(path, "DELETE (settle)");

        self.client
            .delete(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(transport)?;

        Ok(())
    }

    /// POST a multipart form and decode a JSON response.
    ///
    /// No Content-Type is set here: the transport owns the multipart
    /// boundary, and a hand-set header would corrupt it.
    #[instrument(skip(self, form), fields(base = %self.base))]
    pub async fn post_multipart<R>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let url = self.base.join(path);
        debug!(path, "POST multipart");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .headers(self.headers())
            .send()
            .await
            .map_err(transport)?;

        Self::handle_json(response).await
    }

    /// GET raw bytes (e.g. a CSV export).
    #[instrument(skip(self), fields(base = %self.base))]
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, Error> {
        let url = self.base.join(path);
        debug!(path, "GET bytes");

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status.is_success() {
            let bytes = response.bytes().await.map_err(transport)?;
            Ok(bytes.to_vec())
        } else {
            Err(Self::failure(response).await.into())
        }
    }

    /// Headers attached to every request.
    ///
    /// Only the bearer credential lives here. Content-Type is owned by
    /// the request builder (JSON) or the transport (multipart boundary).
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.token {
            let value = format!("Bearer {}", token.as_str());
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&value).expect("invalid token characters"),
            );
        }
        headers
    }

    /// Handle a response, parsing the body or surfacing the failure.
    async fn handle_json<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            response.json::<R>().await.map_err(transport)
        } else {
            Err(Self::failure(response).await.into())
        }
    }

    /// Capture a non-2xx response with its status and body text.
    async fn failure(response: reqwest::Response) -> RequestFailure {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        RequestFailure::new(status, body)
    }
}

/// Classify a reqwest error into the transport error taxonomy.
pub(crate) fn transport(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let base = ApiUrl::new("http://localhost:8000").unwrap();
        let client = RestClient::new(base.clone());
        assert_eq!(client.base().as_str(), base.as_str());
        assert!(client.token().is_none());
    }

    #[test]
    fn token_round_trip() {
        let base = ApiUrl::new("http://localhost:8000").unwrap();
        let mut client = RestClient::new(base);
        client.set_token(Some(SessionToken::new("u1")));
        assert_eq!(client.token().unwrap().as_str(), "u1");
        client.set_token(None);
        assert!(client.token().is_none());
    }
}
