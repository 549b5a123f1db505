/// Kind of media a bubble can display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A still photo.
    Image,
    /// A playable video clip.
    Video,
}

/// One entry in the media pool supplied by the hosting layer.
///
/// `source` is an opaque locator (typically a URL) resolved by the
/// presentation layer; the engine never inspects or validates it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MediaItem {
    /// Image or video.
    pub kind: MediaKind,
    /// Opaque locator, resolved by the presentation layer.
    #[serde(rename = "src")]
    pub source: String,
}

impl MediaItem {
    /// Shorthand for an image entry.
    pub fn image(source: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            source: source.into(),
        }
    }

    /// Shorthand for a video entry.
    pub fn video(source: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            source: source.into(),
        }
    }
}
