//! HTTP client helpers (REST, partials, locale files).
//!
//! # Design
//! - Every request goes through one client so the CSRF header is attached uniformly.
//! - Transport, status, and decoding failures stay distinct in [`ApiError`].

use crate::core::auth::FormKind;
use crate::core::config::ShellConfig;
use crate::core::cookie::cookie_value;
use crate::core::routing::PartialResponse;
use crate::core::video::stream_path;
use crate::i18n::TranslationMap;
use gloo_net::http::{Request, Response};
use thiserror::Error;
use vidstream_api_models::{Credentials, GeoLocation, MessageBody, StreamLink, VideoDescriptor};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Failures surfaced by [`ApiClient`].
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// The request never produced a response.
    #[error("request to {url} failed: {source}")]
    Network {
        /// Requested URL.
        url: String,
        /// Transport error.
        source: gloo_net::Error,
    },
    /// The backend answered with a non-success status.
    #[error("{}", status_detail(.status, .body.as_ref()))]
    Status {
        /// HTTP status code.
        status: u16,
        /// Decoded error body, when the backend sent JSON.
        body: Option<MessageBody>,
    },
    /// The response body did not match the expected shape.
    #[error("unexpected response from {url}: {detail}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Decoder message.
        detail: String,
    },
}

fn status_detail(status: &u16, body: Option<&MessageBody>) -> String {
    body.and_then(MessageBody::message_text)
        .map_or_else(|| format!("HTTP {status}"), str::to_string)
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    config: ShellConfig,
}

impl ApiClient {
    pub(crate) const fn new(config: ShellConfig) -> Self {
        Self { config }
    }

    fn csrf_token(&self) -> Option<String> {
        let cookies = gloo::utils::document()
            .dyn_into::<HtmlDocument>()
            .ok()?
            .cookie()
            .ok()?;
        cookie_value(&cookies, &self.config.csrf_cookie).map(str::to_string)
    }

    fn with_csrf(&self, req: Request) -> Request {
        match self.csrf_token() {
            Some(token) => req.header(&self.config.csrf_header, &token),
            None => req,
        }
    }

    async fn send(url: &str, req: Request) -> Result<Response, ApiError> {
        req.send().await.map_err(|source| ApiError::Network {
            url: url.to_string(),
            source,
        })
    }

    async fn status_error(resp: Response) -> ApiError {
        let status = resp.status();
        ApiError::Status {
            status,
            body: resp.json::<MessageBody>().await.ok(),
        }
    }

    async fn decode<T: for<'de> serde::Deserialize<'de>>(
        url: &str,
        resp: Response,
    ) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|err| ApiError::Decode {
            url: url.to_string(),
            detail: err.to_string(),
        })
    }

    async fn post_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        let url = self.config.url(path);
        let req = self
            .with_csrf(Request::post(&url))
            .json(body)
            .map_err(|err| ApiError::Decode {
                url: url.clone(),
                detail: err.to_string(),
            })?;
        Self::send(&url, req).await
    }

    /// Session probe; returns the status code.
    pub(crate) async fn check_auth(&self) -> Result<u16, ApiError> {
        let url = self.config.url("/api/check-auth");
        let resp = Self::send(&url, Request::get(&url)).await?;
        Ok(resp.status())
    }

    /// Submit login or signup credentials.
    pub(crate) async fn submit_credentials(
        &self,
        kind: FormKind,
        credentials: &Credentials,
    ) -> Result<(), ApiError> {
        let resp = self.post_json(kind.endpoint(), credentials).await?;
        if resp.ok() {
            Ok(())
        } else {
            Err(Self::status_error(resp).await)
        }
    }

    /// Terminate the current session.
    pub(crate) async fn logout(&self) -> Result<(), ApiError> {
        let url = self.config.url("/api/logout");
        let resp = Self::send(&url, self.with_csrf(Request::post(&url))).await?;
        if resp.ok() {
            Ok(())
        } else {
            Err(Self::status_error(resp).await)
        }
    }

    /// Fetch a content partial; any status is returned as data.
    pub(crate) async fn fetch_partial(&self, url: &str) -> Result<PartialResponse, ApiError> {
        let resp = Self::send(url, Request::get(url)).await?;
        let status = resp.status();
        let body = resp.text().await.map_err(|err| ApiError::Decode {
            url: url.to_string(),
            detail: err.to_string(),
        })?;
        Ok(PartialResponse { status, body })
    }

    /// Fetch the translation mapping for a language code.
    pub(crate) async fn fetch_translations(&self, language: &str) -> Result<TranslationMap, ApiError> {
        let url = self.config.locale_file(language);
        let resp = Self::send(&url, Request::get(&url)).await?;
        if !resp.ok() {
            return Err(ApiError::Status {
                status: resp.status(),
                body: None,
            });
        }
        let text = resp.text().await.map_err(|err| ApiError::Decode {
            url: url.clone(),
            detail: err.to_string(),
        })?;
        TranslationMap::from_json(&text).map_err(|err| ApiError::Decode {
            url,
            detail: err.to_string(),
        })
    }

    /// List the video catalog.
    pub(crate) async fn fetch_videos(&self) -> Result<Vec<VideoDescriptor>, ApiError> {
        let url = self.config.url("/api/videos");
        let resp = Self::send(&url, self.with_csrf(Request::get(&url))).await?;
        if !resp.ok() {
            return Err(Self::status_error(resp).await);
        }
        Self::decode(&url, resp).await
    }

    /// Resolve the playable URL for a video key.
    pub(crate) async fn stream_link(&self, key: &str) -> Result<StreamLink, ApiError> {
        let url = self.config.url(&stream_path(key));
        let resp = Self::send(&url, self.with_csrf(Request::get(&url))).await?;
        if !resp.ok() {
            return Err(Self::status_error(resp).await);
        }
        Self::decode(&url, resp).await
    }

    /// Query the third-party geolocation service.
    pub(crate) async fn geolocate(&self) -> Result<GeoLocation, ApiError> {
        let url = self.config.geolocation_url.clone();
        let resp = Self::send(&url, Request::get(&url)).await?;
        if !resp.ok() {
            return Err(ApiError::Status {
                status: resp.status(),
                body: None,
            });
        }
        Self::decode(&url, resp).await
    }
}
