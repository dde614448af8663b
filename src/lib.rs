use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use wasm_bindgen::prelude::*;

pub mod action_types;
pub mod components;
pub mod config;
pub mod hooks;
pub mod player_state;
pub mod provider;
pub mod seek;
pub mod utils;

use config::VideoUrlConfig;
use player_state::{PlayerState, PlayerStateEvent};
pub use player_state::get_youtube_player_state;
use provider::provider_for;

/// Normalised video metadata, independent of the hosting provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    pub id: String,
    pub thumbnail_src: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VideoError {
    /// A field the provider schema requires is absent or not a string.
    #[error("Malformed provider record: missing or invalid field '{field}'")]
    MalformedProviderRecord { field: &'static str },
    /// The configured playback base URL is not a valid absolute URL.
    #[error("Failed to build playback URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Extract [`VideoDetails`] from a provider-shaped record.
///
/// Returns `Ok(None)` when `video_source` names no known provider; callers
/// treat that as "unknown provider" rather than a failure. A known provider
/// whose record lacks a required field yields
/// [`VideoError::MalformedProviderRecord`].
///
/// # Examples
/// ```
/// use party_video::get_video_details;
/// use serde_json::json;
///
/// let video = json!({
///     "id": { "videoId": "abc123" },
///     "snippet": {
///         "title": "Title",
///         "description": "Description",
///         "thumbnails": { "medium": { "url": "https://i.ytimg.com/vi/abc123/mqdefault.jpg" } }
///     }
/// });
/// let details = get_video_details(&video, "youtube").unwrap().unwrap();
/// assert_eq!(details.id, "abc123");
/// assert_eq!(get_video_details(&video, "unknown"), Ok(None));
/// ```
pub fn get_video_details(
    video: &Value,
    video_source: &str,
) -> Result<Option<VideoDetails>, VideoError> {
    match provider_for(video_source) {
        Some(provider) => provider.video_details(video).map(Some),
        None => Ok(None),
    }
}

/// Build the playback URL for `video_id` on `video_source`.
///
/// Returns `None` for unknown providers, and for a configured base URL that
/// does not parse.
pub fn get_video_url(video_source: &str, video_id: &str, config: &VideoUrlConfig) -> Option<String> {
    let provider = provider_for(video_source)?;
    match provider.video_url(video_id, config) {
        Ok(url) => Some(url),
        Err(e) => {
            warn!("Could not build {} URL for '{}': {}", video_source, video_id, e);
            None
        }
    }
}

/// JS entry point for [`get_video_details`].
///
/// Returns the details object, `undefined` for unknown providers, or an
/// error string when the record is malformed.
#[wasm_bindgen(js_name = getVideoDetails)]
pub fn video_details_js(video_js: JsValue, video_source: &str) -> Result<JsValue, JsValue> {
    let video: Value = serde_wasm_bindgen::from_value(video_js)
        .map_err(|e| JsValue::from_str(&format!("Failed to deserialize video: {}", e)))?;

    match get_video_details(&video, video_source) {
        Ok(Some(details)) => serde_wasm_bindgen::to_value(&details)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize details: {}", e))),
        Ok(None) => Ok(JsValue::UNDEFINED),
        Err(e) => Err(JsValue::from_str(&e.to_string())),
    }
}

/// JS entry point for [`get_video_url`]. `origin` may be omitted.
#[wasm_bindgen(js_name = getVideoUrl)]
pub fn video_url_js(video_source: &str, video_id: &str, origin: Option<String>) -> JsValue {
    let config = VideoUrlConfig {
        origin,
        ..VideoUrlConfig::default()
    };
    match get_video_url(video_source, video_id, &config) {
        Some(url) => JsValue::from_str(&url),
        None => JsValue::NULL,
    }
}

/// JS entry point for [`get_youtube_player_state`]; accepts the raw
/// `onStateChange` event (anything with a numeric `data` field).
#[wasm_bindgen(js_name = getYoutubePlayerState)]
pub fn player_state_label_js(event_js: JsValue) -> String {
    let event: Value = serde_wasm_bindgen::from_value(event_js).unwrap_or_else(|e| {
        debug!("Unreadable player event ({})", e);
        Value::Null
    });
    player_state_label_from_value(&event).to_string()
}

/// Label for a raw player event. A missing or non-integer `data` field reads
/// as the default state, as `undefined` did for the JS player.
pub fn player_state_label_from_value(event: &Value) -> &'static str {
    let code = event.get("data").and_then(|data| {
        data.as_i64()
            .or_else(|| data.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
    });
    match code.and_then(|c| i32::try_from(c).ok()) {
        Some(data) => get_youtube_player_state(&PlayerStateEvent { data }),
        None => {
            debug!("Player event without a usable state code, using default state");
            PlayerState::default().label()
        }
    }
}
