use crate::{
    engine::media::{MediaItem, MediaKind},
    foundation::core::{Millis, Point},
};

/// Engine-assigned bubble identifier, unique for the process lifetime and
/// strictly increasing; never reused.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct BubbleId(pub u64);

/// One live bubble owned by the engine.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Bubble {
    /// Unique, immutable identifier.
    pub id: BubbleId,
    /// The media item this bubble displays; never mutated by the engine.
    pub media: MediaItem,
    /// Size as a fraction of viewport width, fixed at creation.
    pub size_fraction: f64,
    /// Derived pixel size; recomputed from the viewport on reposition.
    pub size_px: f64,
    /// Left edge of the top-left offset, in pixels.
    pub left: f64,
    /// Top edge of the top-left offset, in pixels.
    pub top: f64,
    /// Stacking order, fixed at creation.
    pub depth: i32,
    /// Creation timestamp, on the caller's clock.
    pub created_at: Millis,
    /// Fixed for images; `None` for videos until playback metadata reports
    /// the true duration.
    pub lifespan_ms: Option<u64>,
    /// `false` until the removal animation starts; never reverts.
    pub popping: bool,
}

impl Bubble {
    /// Center of the bubble's circular footprint.
    pub fn center(&self) -> Point {
        Point::new(self.left + self.size_px / 2.0, self.top + self.size_px / 2.0)
    }

    /// Radius of the bubble's circular footprint.
    pub fn radius(&self) -> f64 {
        self.size_px / 2.0
    }

    /// True when the wrapped media is a video.
    pub fn is_video(&self) -> bool {
        self.media.kind == MediaKind::Video
    }
}

/// Render-facing view of one bubble.
#[derive(Clone, Debug, serde::Serialize)]
#[allow(missing_docs)]
pub struct BubbleView {
    pub id: BubbleId,
    pub kind: MediaKind,
    #[serde(rename = "src")]
    pub source: String,
    pub left: f64,
    pub top: f64,
    pub size_px: f64,
    pub size_fraction: f64,
    pub depth: i32,
    pub popping: bool,
}

/// The full rendering contract at one instant: every active bubble in
/// painter's order (back to front), plus the global opacity.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Snapshot {
    /// Bubbles back to front.
    pub bubbles: Vec<BubbleView>,
    /// Global opacity applied to every bubble.
    pub opacity: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/engine/bubble.rs"]
mod tests;
