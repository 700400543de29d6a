#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Shared HTTP DTOs for the Vidstream backend API.
//!
//! The web shell decodes every JSON payload through these types so the
//! contract with the backend lives in one place.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Catalog entry returned by `GET /api/videos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoDescriptor {
    /// Unique object key; also the lookup key for streaming.
    pub key: String,
    /// Display label (falls back to the key stem server-side).
    pub label: String,
    /// Presigned thumbnail URL when a thumbnail exists.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Video size in bytes when reported.
    #[serde(default)]
    pub size: Option<u64>,
}

/// Playable URL returned by `GET /api/stream/{key}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreamLink {
    /// Time-limited URL assignable to a `<video>` element.
    pub url: String,
}

/// Minimal account summary echoed by auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    /// Account email address.
    pub email: String,
}

/// Generic `{ "message": ... }` body used by auth endpoints and error responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    /// Human-readable outcome or error message.
    #[serde(default)]
    pub message: Option<String>,
    /// Authenticated user, present on login/signup/check-auth success.
    #[serde(default)]
    pub user: Option<UserSummary>,
}

impl MessageBody {
    /// The message text when present and non-blank.
    #[must_use]
    pub fn message_text(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}

/// Flattened form fields posted as JSON to `/api/login` and `/api/signup`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Credentials(pub BTreeMap<String, String>);

impl Credentials {
    /// Insert a field, replacing any earlier value with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }
}

/// Subset of the third-party geolocation response used for language inference.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeoLocation {
    /// ISO 3166-1 alpha-2 country code.
    #[serde(default)]
    pub country_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_descriptor_accepts_backend_listing() {
        let raw = r#"[
            {"key":"intro.mp4","size":1048576,"thumbnail_url":null,"label":"Intro"},
            {"key":"course/part-1.mov","size":42,"thumbnail_url":"https://cdn/x.png","label":"Part 1"}
        ]"#;
        let videos: Vec<VideoDescriptor> = serde_json::from_str(raw).expect("listing");
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].thumbnail_url, None);
        assert_eq!(videos[0].size, Some(1_048_576));
        assert_eq!(videos[1].thumbnail_url.as_deref(), Some("https://cdn/x.png"));
    }

    #[test]
    fn video_descriptor_tolerates_missing_optional_fields() {
        let video: VideoDescriptor =
            serde_json::from_str(r#"{"key":"a.mp4","label":"A"}"#).expect("descriptor");
        assert_eq!(video.thumbnail_url, None);
        assert_eq!(video.size, None);
    }

    #[test]
    fn message_body_ignores_blank_messages() {
        let body: MessageBody = serde_json::from_str(r#"{"message":"  "}"#).expect("body");
        assert_eq!(body.message_text(), None);
        let body: MessageBody =
            serde_json::from_str(r#"{"message":"Invalid email or password."}"#).expect("body");
        assert_eq!(body.message_text(), Some("Invalid email or password."));
    }

    #[test]
    fn credentials_serialize_as_flat_object() {
        let mut creds = Credentials::default();
        creds.insert("email", "a@b.c");
        creds.insert("password", "hunter2");
        let json = serde_json::to_string(&creds).expect("json");
        assert_eq!(json, r#"{"email":"a@b.c","password":"hunter2"}"#);
        creds.insert("email", "d@e.f");
        assert_eq!(creds.0.get("email").map(String::as_str), Some("d@e.f"));
    }

    #[test]
    fn geolocation_reads_country_code() {
        let geo: GeoLocation =
            serde_json::from_str(r#"{"ip":"1.2.3.4","country_code":"AT","city":"Wien"}"#)
                .expect("geo");
        assert_eq!(geo.country_code.as_deref(), Some("AT"));
    }
}
