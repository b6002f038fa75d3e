// API client module: a small blocking client for the link-shortening
// service. Credential lookup happens through the injected
// `CredentialProvider`; the HTTP call itself is a single JSON POST.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

use crate::profile::CredentialProvider;

/// Fixed endpoint of the shortening API.
const API_URL: &str = "https://www.googleapis.com/urlshortener/v1/url";

/// Service name the API key is filed under in the profile store.
const SERVICE: &str = "goo.gl";

/// Shortening client that holds a reqwest blocking client and the
/// endpoint URL to POST against.
#[derive(Clone)]
pub struct ShortenerClient {
    client: Client,
    base_url: String,
}

/// Request body for the shortening endpoint. Serialized field names
/// mirror the wire format: `{"key": ..., "longUrl": ...}`.
#[derive(Serialize, Deserialize, Debug)]
pub struct ShortenRequest {
    pub key: String,
    #[serde(rename = "longUrl")]
    pub long_url: String,
}

/// Response from the shortening endpoint. Only the generated identifier
/// is consumed; any other response fields are ignored.
#[derive(Serialize, Deserialize, Debug)]
pub struct ShortenResponse {
    pub id: String,
}

impl ShortenerClient {
    /// Create a client configured from the environment variable
    /// `SHORTENER_API_URL` or fallback to the fixed service endpoint.
    pub fn from_env(client: Client) -> Self {
        let base_url = std::env::var("SHORTENER_API_URL").unwrap_or_else(|_| API_URL.into());
        Self { client, base_url }
    }

    /// Create a client pointed at an explicit endpoint.
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Shorten `url`, returning the service-generated short identifier.
    /// The identifier is not a full URL: callers wanting a usable link
    /// must prepend the service base themselves.
    ///
    /// The API key is looked up from the `goo.gl` profile before anything
    /// touches the network.
    pub fn shorten(&self, creds: &dyn CredentialProvider, url: &str) -> Result<String> {
        let secrets = creds
            .secrets(SERVICE)
            .with_context(|| format!("Failed to look up credentials for {:?}", SERVICE))?;
        let key = secrets
            .get("key")
            .with_context(|| format!("Profile {:?} has no \"key\" entry (API key)", SERVICE))?;

        let req = ShortenRequest {
            key: key.clone(),
            long_url: url.to_string(),
        };
        let body = serde_json::to_vec(&req).context("Failed to encode shorten request")?;

        let res = self
            .client
            .post(&self.base_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .context("Failed to send shorten request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Shorten failed: {} - {}", status, txt);
        }
        let resp: ShortenResponse = res.json().context("Parsing shorten response json")?;
        Ok(resp.id)
    }
}
