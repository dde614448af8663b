//! Video providers and the registry that dispatches on provider tags.
//!
//! Each hosting service gets one [`VideoProvider`] implementation that knows
//! how to read its API records and how to build its playback URLs. The
//! registry maps provider tags to those implementations; supporting a new
//! service means adding an implementation and one entry to [`PROVIDERS`].

use crate::config::{VideoUrlConfig, YOUTUBE_SOURCE, YOUTUBE_WATCH_URL};
use crate::{VideoDetails, VideoError};
use log::debug;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;
use url::Url;

/// A video hosting service.
pub trait VideoProvider: Send + Sync {
    /// Tag used by callers to select this provider (e.g. `"youtube"`).
    fn tag(&self) -> &'static str;

    /// Normalise a provider-shaped record into [`VideoDetails`].
    fn video_details(&self, video: &Value) -> Result<VideoDetails, VideoError>;

    /// Build the playback URL for a video id. Fails when the configured base
    /// URL does not parse.
    fn video_url(&self, video_id: &str, config: &VideoUrlConfig) -> Result<String, VideoError>;
}

/// Reads YouTube Data API search results.
///
/// Expected shape:
/// `{ id: { videoId }, snippet: { title, description, thumbnails: { medium: { url } } } }`
#[derive(Debug, Default, Clone, Copy)]
pub struct YoutubeProvider;

impl VideoProvider for YoutubeProvider {
    fn tag(&self) -> &'static str {
        YOUTUBE_SOURCE
    }

    fn video_details(&self, video: &Value) -> Result<VideoDetails, VideoError> {
        Ok(VideoDetails {
            id: required_str(video, "/id/videoId")?,
            thumbnail_src: required_str(video, "/snippet/thumbnails/medium/url")?,
            title: required_str(video, "/snippet/title")?,
            description: required_str(video, "/snippet/description")?,
        })
    }

    fn video_url(&self, video_id: &str, config: &VideoUrlConfig) -> Result<String, VideoError> {
        let base = config.base_url.as_deref().unwrap_or(YOUTUBE_WATCH_URL);
        let mut url = Url::parse(base)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("v", video_id);
            if let Some(origin) = &config.origin {
                query.append_pair("origin", origin);
            }
        }
        Ok(url.into())
    }
}

/// Look up a string field by JSON pointer, failing with the field's path.
fn required_str(video: &Value, pointer: &'static str) -> Result<String, VideoError> {
    video
        .pointer(pointer)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(VideoError::MalformedProviderRecord { field: pointer })
}

/// All known providers, keyed by tag.
pub static PROVIDERS: Lazy<HashMap<&'static str, Box<dyn VideoProvider>>> = Lazy::new(|| {
    let providers: Vec<Box<dyn VideoProvider>> = vec![Box::new(YoutubeProvider)];
    providers.into_iter().map(|p| (p.tag(), p)).collect()
});

/// Find the provider registered under `tag`.
pub fn provider_for(tag: &str) -> Option<&'static dyn VideoProvider> {
    let provider = PROVIDERS.get(tag).map(|p| p.as_ref());
    if provider.is_none() {
        debug!("No video provider registered for tag '{}'", tag);
    }
    provider
}
