//! Video dashboard: catalog rendering and playback.
//!
//! Entries are assembled with element APIs; labels and URLs never pass through markup parsing.

use crate::app::dom::{append, create_element, element_by_id, set_attr, show_message};
use crate::app::runtime::Runtime;
use crate::core::events::ShellEvent;
use crate::core::video::{
    CatalogView, ENTRY_CLASS, KEY_ATTRIBUTE, PLAYING_CLASS, PlaybackSelection, Thumbnail,
    VideoEntry, catalog_view,
};
use anyhow::anyhow;
use gloo::console;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlMediaElement};

const VIDEO_LIST_ID: &str = "video-list";
const PLAYER_ID: &str = "main-video-player";
const EMPTY_CATALOG_MESSAGE: &str = "No videos available. An admin needs to upload some.";

/// Entry point after the dashboard partial was handled.
pub(crate) async fn initialize_dashboard(runtime: &Runtime) {
    load_video_list(runtime).await;
}

async fn load_video_list(runtime: &Runtime) {
    let (Ok(list), Ok(_)) = (element_by_id(VIDEO_LIST_ID), element_by_id(PLAYER_ID)) else {
        console::error!("video elements not found on dashboard");
        return;
    };

    let rendered = match runtime.client().fetch_videos().await {
        Ok(videos) => {
            console::log!("video catalog loaded", videos.len());
            render_catalog(&list, &catalog_view(&videos))
        }
        Err(err) => {
            console::error!("video list load failed", err.to_string());
            show_message(&list, &format!("Error loading videos: {err}"))
        }
    };
    if let Err(err) = rendered {
        console::error!("video list render failed", err.to_string());
    }
    runtime.emit(ShellEvent::CatalogRendered);
}

fn render_catalog(list: &Element, view: &CatalogView) -> anyhow::Result<()> {
    match view {
        CatalogView::Empty => show_message(list, EMPTY_CATALOG_MESSAGE),
        CatalogView::Entries(entries) => {
            let items = create_element("ul")?;
            for entry in entries {
                append(&items, &render_entry(entry)?)?;
            }
            list.set_text_content(None);
            append(list, &items)
        }
    }
}

fn render_entry(entry: &VideoEntry) -> anyhow::Result<Element> {
    let item = create_element("li")?;
    set_attr(&item, "class", ENTRY_CLASS)?;
    set_attr(&item, KEY_ATTRIBUTE, &entry.key)?;

    match &entry.thumbnail {
        Thumbnail::Image { src, alt } => {
            let image = create_element("img")?;
            set_attr(&image, "src", src)?;
            set_attr(&image, "alt", alt)?;
            append(&item, &image)?;
        }
        Thumbnail::Placeholder => {
            let placeholder = create_element("div")?;
            set_attr(&placeholder, "class", "thumbnail-placeholder")?;
            placeholder.set_text_content(Some("No Thumbnail"));
            append(&item, &placeholder)?;
        }
    }

    let label = create_element("span")?;
    label.set_text_content(Some(&entry.label));
    append(&item, &label)?;

    if let Some(size) = &entry.size_label {
        let size_tag = create_element("small")?;
        set_attr(&size_tag, "class", "video-size")?;
        size_tag.set_text_content(Some(size));
        append(&item, &size_tag)?;
    }
    Ok(item)
}

/// Move the playing indicator to `key` and start streaming it.
pub(crate) async fn play_video(runtime: Runtime, key: String) {
    mark_playing(&runtime.store().playing);

    let player = match element_by_id(PLAYER_ID).and_then(|element| {
        element
            .dyn_into::<HtmlMediaElement>()
            .map_err(|_| anyhow!("#{PLAYER_ID} is not a media element"))
    }) {
        Ok(player) => player,
        Err(err) => {
            console::error!("video playback failed", key, err.to_string());
            return;
        }
    };

    match runtime.client().stream_link(&key).await {
        Ok(link) => {
            player.set_src(&link.url);
            match player.play() {
                Ok(promise) => {
                    if let Err(err) = JsFuture::from(promise).await {
                        console::error!("video playback rejected", key, err);
                    }
                }
                Err(err) => console::error!("video playback failed", key, err),
            }
        }
        Err(err) => console::error!("stream link failed", key, err.to_string()),
    }
}

fn mark_playing(selection: &PlaybackSelection) {
    let Ok(nodes) = document().query_selector_all(&format!(".{ENTRY_CLASS}")) else {
        return;
    };
    let entries: Vec<Element> = (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect();
    let keys: Vec<Option<String>> = entries
        .iter()
        .map(|entry| entry.get_attribute(KEY_ATTRIBUTE))
        .collect();
    for (entry, playing) in entries.iter().zip(selection.indicator_flags(&keys)) {
        if let Err(err) = entry.class_list().toggle_with_force(PLAYING_CLASS, playing) {
            console::warn!("playing indicator update failed", err);
        }
    }
}
