//! Hash routing and content-load decisions.
//!
//! # Design
//! - The URL fragment is the only routing key; [`RouteState`] mirrors it.
//! - [`load_content`] is generic over the partial fetch so the status handling
//!   (401 redirect, default-language retry, inline errors) runs natively in tests.
//! - Every load takes a [`LoadSequencer`] ticket; only the newest ticket may
//!   touch the content area.

use crate::core::config::ShellConfig;
use std::future::Future;

/// Currently displayed page path (fragment without `#`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteState {
    /// Page path such as `/protected/dashboard.html`; empty before the first hash read.
    pub page: String,
}

/// Page path for a raw `location.hash`, defaulting to the landing page.
#[must_use]
pub fn page_from_hash(hash: &str, config: &ShellConfig) -> String {
    let path = hash.strip_prefix('#').unwrap_or(hash);
    if path.is_empty() {
        config.landing_path.clone()
    } else {
        path.to_string()
    }
}

/// Page name used for localized partials (`/login.html` → `login`).
#[must_use]
pub fn page_name(page: &str) -> &str {
    let trimmed = page.trim_start_matches('/');
    trimmed.strip_suffix(".html").unwrap_or(trimmed)
}

/// Whether the page has per-language partials.
#[must_use]
pub fn is_translatable(page: &str, config: &ShellConfig) -> bool {
    let name = page_name(page);
    config.translatable_pages.iter().any(|candidate| candidate == name)
}

/// Whether the page is a course detail page.
#[must_use]
pub fn is_course_page(page: &str, config: &ShellConfig) -> bool {
    page.starts_with(&config.course_prefix)
}

/// Whether the page hosts the video dashboard.
#[must_use]
pub fn is_dashboard(page: &str, config: &ShellConfig) -> bool {
    page == config.dashboard_path
}

/// Fetch URL for a page in the given language.
#[must_use]
pub fn content_url(page: &str, language: &str, config: &ShellConfig) -> String {
    if is_translatable(page, config) {
        config.localized_partial(language, page_name(page))
    } else {
        config.url(page)
    }
}

/// Route path for a nav link `href` (origin, query, and fragment dropped).
///
/// Relative hrefs resolve against the directory of `current_page`, the way links
/// inside an injected partial are authored.
#[must_use]
pub fn link_route(href: &str, current_page: &str) -> String {
    let (absolute, rest) = href
        .split_once("://")
        .map(|(_, rest)| rest)
        .or_else(|| href.strip_prefix("//"))
        .map_or((false, href), |rest| (true, rest));
    let rest = if absolute {
        rest.find('/').map_or("", |idx| &rest[idx..])
    } else {
        rest
    };
    let path = rest.split(['?', '#']).next().unwrap_or_default();

    if path.starts_with('/') {
        normalize_path(path)
    } else if absolute {
        "/".to_string()
    } else if path.is_empty() && !current_page.is_empty() {
        current_page.to_string()
    } else {
        let base = current_page
            .rfind('/')
            .map_or("/", |idx| &current_page[..=idx]);
        let base = if base.starts_with('/') { base } else { "/" };
        normalize_path(&format!("{base}{path}"))
    }
}

fn normalize_path(path: &str) -> String {
    let parts: Vec<&str> = path.split('/').skip(1).collect();
    let last = parts.len().saturating_sub(1);
    let mut segments: Vec<&str> = Vec::with_capacity(parts.len());
    for (idx, segment) in parts.iter().enumerate() {
        match *segment {
            "." => {
                if idx == last {
                    segments.push("");
                }
            }
            ".." => {
                segments.pop();
                if idx == last {
                    segments.push("");
                }
            }
            other => segments.push(other),
        }
    }
    format!("/{}", segments.join("/"))
}

/// Response to a partial fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartialResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl PartialResponse {
    /// Whether the status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// What the content area should do after a load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentAction {
    /// Replace the container markup with the fetched partial.
    Inject {
        /// Partial HTML.
        html: String,
    },
    /// Navigate elsewhere without touching the container.
    Redirect {
        /// Target page path.
        page: String,
    },
    /// Show an inline error message.
    Error {
        /// Failure detail.
        message: String,
    },
}

/// Result of [`load_content`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentOutcome {
    /// Page that was requested.
    pub page: String,
    /// URLs fetched, in order.
    pub fetched: Vec<String>,
    /// Action for the content area.
    pub action: ContentAction,
    /// Whether dashboard initialization should follow.
    pub initialize_dashboard: bool,
}

/// Fetch and classify the partial for `page`.
pub async fn load_content<F, Fut>(
    page: &str,
    language: &str,
    config: &ShellConfig,
    mut fetch: F,
) -> ContentOutcome
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<PartialResponse, String>>,
{
    let mut fetched = Vec::new();
    let mut language = language.to_string();
    let action = loop {
        let url = content_url(page, &language, config);
        fetched.push(url.clone());
        match fetch(url).await {
            Ok(response) if response.is_success() => {
                break ContentAction::Inject {
                    html: response.body,
                };
            }
            Ok(response) if response.status == 401 => {
                break ContentAction::Redirect {
                    page: config.login_path.clone(),
                };
            }
            Ok(_) if is_translatable(page, config) && language != config.fallback_language => {
                language = config.fallback_language.clone();
            }
            Ok(response) => {
                break ContentAction::Error {
                    message: format!("Failed to load page: HTTP {}", response.status),
                };
            }
            Err(err) => break ContentAction::Error { message: err },
        }
    };
    let initialize_dashboard =
        is_dashboard(page, config) && !matches!(action, ContentAction::Redirect { .. });
    ContentOutcome {
        page: page.to_string(),
        fetched,
        action,
        initialize_dashboard,
    }
}

/// Monotonic ticket issuer discarding superseded content loads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadSequencer {
    latest: u64,
}

impl LoadSequencer {
    /// Start a load and return its ticket.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether `ticket` is still the newest load.
    #[must_use]
    pub const fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }

    /// Keep a finished load's `outcome` only while `ticket` is still the newest.
    #[must_use]
    pub fn accept<T>(&self, ticket: u64, outcome: T) -> Option<T> {
        self.is_current(ticket).then_some(outcome)
    }
}
