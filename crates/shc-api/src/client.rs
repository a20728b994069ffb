// HTTP client for the controller's `/smarthome` REST API.
//
// Every endpoint goes through `exchange`: build URL, set protocol headers,
// send, read the whole body, classify the status. Endpoint methods only
// choose the verb, path and expected status, and whether to decode.

use reqwest::header::ACCEPT;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::EndpointConfig;
use crate::error::Error;
use crate::gateway::SmartHome;
use crate::models::{ApiError, Device, Message, Room, Scenario};
use crate::transport::TransportConfig;

/// Header carrying the API revision the caller expects.
pub const API_VERSION_HEADER: &str = "api-version";

/// Async client for one controller.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ShcClient {
    http: reqwest::Client,
    base_url: String,
    api_version: String,
}

impl ShcClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client with a transport derived from `config`.
    pub fn new(config: EndpointConfig) -> Result<Self, Error> {
        let config = config.normalized();
        let http = TransportConfig::from(&config).build_client()?;
        Ok(Self::with_client(config, http))
    }

    /// Use a caller-supplied `reqwest::Client` instead of building one.
    ///
    /// TLS and pooling settings in `config` are ignored; only the address,
    /// port and API version are used.
    pub fn with_client(config: EndpointConfig, http: reqwest::Client) -> Self {
        let config = config.normalized();
        Self {
            http,
            base_url: config.base_url(),
            api_version: config.api_version,
        }
    }

    /// Talk to an arbitrary base URL (e.g. `http://127.0.0.1:54321` for a
    /// fixture server, or a reverse proxy). `/smarthome` is appended.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client, api_version: &str) -> Self {
        let api_version = if api_version.is_empty() {
            crate::config::DEFAULT_API_VERSION
        } else {
            api_version
        };
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_version: api_version.to_owned(),
        }
    }

    /// The configured base URL (scheme, host and port).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// `{base}/smarthome{path}`. Ids inside `path` are not escaped here;
    /// URL parsing only encodes what a valid path requires.
    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(Url::parse(&format!("{}/smarthome{path}", self.base_url))?)
    }

    // ── Exchange ─────────────────────────────────────────────────────

    /// Send one request and return the body if the status is `expected`.
    async fn exchange(
        &self,
        method: Method,
        path: &str,
        expected: StatusCode,
    ) -> Result<String, Error> {
        let url = self.url(path)?;
        debug!("{method} {url}");

        let resp = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(API_VERSION_HEADER, &self.api_version)
            .send()
            .await?;

        // `text()` consumes the response, so the connection goes back to
        // the pool (or is closed) whichever branch runs below.
        let status = resp.status();
        let body = resp.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "response");

        if status == expected {
            Ok(body)
        } else {
            Err(parse_error(status, body))
        }
    }

    /// Exchange and decode the body into `T`.
    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let body = self.exchange(Method::GET, path, StatusCode::OK).await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }
}

// ── Response handling ────────────────────────────────────────────────

fn parse_error(status: StatusCode, body: String) -> Error {
    match serde_json::from_str::<ApiError>(&body) {
        Ok(error) => Error::Api {
            status: status.as_u16(),
            error,
        },
        Err(e) => {
            warn!(status = status.as_u16(), error = %e, "could not decode error response");
            Error::MalformedErrorBody {
                status: status.as_u16(),
                message: e.to_string(),
                body,
            }
        }
    }
}

// ── Public API ───────────────────────────────────────────────────────

impl SmartHome for ShcClient {
    async fn list_devices(&self) -> Result<Vec<Device>, Error> {
        self.fetch("/devices").await
    }

    async fn get_device(&self, id: &str) -> Result<Device, Error> {
        self.fetch(&format!("/devices/{id}")).await
    }

    async fn list_rooms(&self) -> Result<Vec<Room>, Error> {
        self.fetch("/rooms").await
    }

    async fn get_room(&self, id: &str) -> Result<Room, Error> {
        self.fetch(&format!("/rooms/{id}")).await
    }

    async fn list_scenarios(&self) -> Result<Vec<Scenario>, Error> {
        self.fetch("/scenarios").await
    }

    async fn get_scenario(&self, id: &str) -> Result<Scenario, Error> {
        self.fetch(&format!("/scenarios/{id}")).await
    }

    async fn trigger_scenario(&self, id: &str) -> Result<(), Error> {
        debug!(id, "triggering scenario");
        self.exchange(
            Method::POST,
            &format!("/scenarios/{id}/triggers"),
            StatusCode::ACCEPTED,
        )
        .await
        .map(drop)
    }

    async fn list_messages(&self) -> Result<Vec<Message>, Error> {
        self.fetch("/messages").await
    }
}
