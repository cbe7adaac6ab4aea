//! Thin JSON transport over `reqwest` for the remote site API.
//!
//! Reads go through [`ApiClient::get_json`] and surface every failure as an
//! [`HttpError`]. Writes go through [`ApiClient::submit`], which never fails:
//! it classifies the response into a [`SubmissionOutcome`] instead.

use gway_domain::config::ApiConfig;
use gway_domain::outcome::SubmissionOutcome;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use tracing::{debug, info, warn};

/// Errors raised by read requests.
#[gway_derive::gway_error]
pub enum HttpError {
    /// Connection, TLS or body transfer failure.
    #[error("HTTP transport error{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The API answered with a non-success status.
    #[error("HTTP status {status}{}", format_context(.context))]
    Status { status: u16, context: Option<Cow<'static, str>> },

    /// The body was not the JSON document we expected.
    #[error("Response decode error{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Invalid base URL or path.
    #[error("Invalid API URL{}: {message}", format_context(.context))]
    InvalidUrl { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl HttpError {
    /// HTTP status carried by the error, if the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Shared handle to the site API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client for the configured base URL, applying the optional timeout.
    pub fn new(config: &ApiConfig) -> Result<Self, HttpError> {
        let base_url = config.base_url.trim_end_matches('/').to_owned();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(HttpError::InvalidUrl {
                message: format!("'{}' is not an http(s) URL", config.base_url).into(),
                context: Some("Building API client".into()),
            });
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Building HTTP client")?;

        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins `path` onto the base URL, tolerating a missing leading slash.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Issues a `GET` and decodes the JSON body.
    pub async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(url = %url, "GET");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .context(format!("GET {url}"))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "API read failed");
            return Err(HttpError::Status {
                status: status.as_u16(),
                context: Some(format!("GET {url}").into()),
            });
        }

        let body = response.text().await.context(format!("Reading body of GET {url}"))?;
        serde_json::from_str(&body).context(format!("Decoding body of GET {url}"))
    }

    /// Issues exactly one `POST` with a JSON body and classifies the result.
    ///
    /// * 2xx: [`SubmissionOutcome::Success`]
    /// * 409: [`SubmissionOutcome::Conflict`]
    /// * any other status: [`SubmissionOutcome::Failure`] with the body's
    ///   `message` or `error` field, else `fallback`
    /// * transport failure: [`SubmissionOutcome::Failure`] with `fallback`
    ///
    /// No retry is attempted.
    pub async fn submit<B>(&self, path: &str, body: &B, fallback: &str) -> SubmissionOutcome
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);

        let response = match self.http.post(&url).json(body).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(url = %url, error = %err, "Submission transport failure");
                return SubmissionOutcome::Failure(fallback.to_owned());
            },
        };

        let status = response.status();
        if status.is_success() {
            info!(url = %url, status = status.as_u16(), "Submission accepted");
            return SubmissionOutcome::Success;
        }
        if status == StatusCode::CONFLICT {
            info!(url = %url, "Submission rejected as duplicate");
            return SubmissionOutcome::Conflict;
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| fallback.to_owned());
        warn!(url = %url, status = status.as_u16(), reason = %message, "Submission failed");
        SubmissionOutcome::Failure(message)
    }
}

/// Best-effort extraction of a human-readable message from an error body.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .find(|msg| !msg.is_empty())
        .map(ToOwned::to_owned)
}
