//! Application-level configuration constants.

// Providers
pub const YOUTUBE_SOURCE: &str = "youtube";
pub const DEFAULT_VIDEO_SOURCE: &str = YOUTUBE_SOURCE;
pub const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch";

// Seek bar
/// Width of the abstract axis used to size the progress fill, in percent.
pub const SEEK_BAR_AXIS_WIDTH: f64 = 100.0;

/// Options applied when building playback URLs.
///
/// The `origin` parameter tells the embedded player which page hosts it. It
/// is left out of the URL entirely when unset. `base_url` replaces the
/// provider's own playback URL, e.g. a privacy-enhanced or proxied host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoUrlConfig {
    pub origin: Option<String>,
    pub base_url: Option<String>,
}

impl VideoUrlConfig {
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

// Demo app
pub const DEMO_VIDEO_DURATION_SEC: f64 = 213.0;
