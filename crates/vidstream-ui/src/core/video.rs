//! Video catalog view model and playback selection.
//!
//! # Design
//! - The view model is built from backend descriptors and rendered by DOM glue
//!   with text/attribute setters only.
//! - [`PlaybackSelection`] owns the single "currently playing" key; the DOM
//!   indicator is derived from it via [`PlaybackSelection::indicator_flags`].

use vidstream_api_models::VideoDescriptor;

/// Class tagging each catalog entry.
pub const ENTRY_CLASS: &str = "video-link";
/// Class marking the entry being played.
pub const PLAYING_CLASS: &str = "is-playing";
/// Attribute carrying the entry's video key.
pub const KEY_ATTRIBUTE: &str = "data-video-key";

/// Thumbnail slot of an entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Thumbnail {
    /// Remote image.
    Image {
        /// Image URL.
        src: String,
        /// Alt text.
        alt: String,
    },
    /// Placeholder box when no thumbnail exists.
    Placeholder,
}

/// One rendered catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoEntry {
    /// Unique key used for lookup and streaming.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Thumbnail slot.
    pub thumbnail: Thumbnail,
    /// Human-readable size when the backend reports one.
    pub size_label: Option<String>,
}

/// What the video list container shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogView {
    /// The catalog is empty.
    Empty,
    /// One entry per video, in backend order.
    Entries(Vec<VideoEntry>),
}

/// Build the catalog view from a listing.
#[must_use]
pub fn catalog_view(videos: &[VideoDescriptor]) -> CatalogView {
    if videos.is_empty() {
        return CatalogView::Empty;
    }
    CatalogView::Entries(
        videos
            .iter()
            .map(|video| VideoEntry {
                key: video.key.clone(),
                label: video.label.clone(),
                thumbnail: video
                    .thumbnail_url
                    .as_ref()
                    .filter(|url| !url.is_empty())
                    .map_or(Thumbnail::Placeholder, |url| Thumbnail::Image {
                        src: url.clone(),
                        alt: format!("Thumbnail for {}", video.label),
                    }),
                size_label: video.size.map(size_label),
            })
            .collect(),
    )
}

/// Size rounded to one decimal in binary units.
#[must_use]
pub fn size_label(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut unit = 0;
    let mut scale: u64 = 1024;
    while unit + 1 < UNITS.len() && bytes >= scale * 1024 {
        scale *= 1024;
        unit += 1;
    }
    let whole = bytes / scale;
    let tenths = (bytes % scale) * 10 / scale;
    format!("{whole}.{tenths} {}", UNITS[unit])
}

/// Stream endpoint for a video key (key percent-encoded).
#[must_use]
pub fn stream_path(key: &str) -> String {
    format!("/api/stream/{}", urlencoding::encode(key))
}

/// Tracks which entry carries the playing indicator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaybackSelection {
    current: Option<String>,
}

impl PlaybackSelection {
    /// Mark `key` as playing and return the previously marked key.
    pub fn select(&mut self, key: &str) -> Option<String> {
        self.current.replace(key.to_string())
    }

    /// Clear the indicator (new catalog render).
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Currently marked key.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Whether `key` is the marked entry.
    #[must_use]
    pub fn is_playing(&self, key: &str) -> bool {
        self.current.as_deref() == Some(key)
    }

    /// Indicator state for each rendered entry, given its key attribute.
    #[must_use]
    pub fn indicator_flags(&self, keys: &[Option<String>]) -> Vec<bool> {
        keys.iter()
            .map(|key| key.as_deref().is_some_and(|key| self.is_playing(key)))
            .collect()
    }
}
