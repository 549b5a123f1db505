use crate::foundation::error::{BubbleError, BubbleResult};

pub use kurbo::{Point, Rect, Vec2};

/// Milliseconds since an arbitrary caller-chosen epoch.
///
/// The engine never reads a wall clock: every public operation takes a
/// `Millis` supplied by the caller, so a test can drive the whole lifecycle
/// from a synthetic clock.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    /// Saturating addition of a duration in milliseconds.
    pub fn add(self, delta: u64) -> Self {
        Millis(self.0.saturating_add(delta))
    }

    /// Elapsed milliseconds since `earlier` (zero if `earlier` is later).
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Viewport dimensions in logical pixels.
///
/// Threaded explicitly into every capacity and placement computation rather
/// than read from ambient display state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in logical pixels.
    pub width: f64,
    /// Height in logical pixels.
    pub height: f64,
}

impl Viewport {
    /// Validated constructor; dimensions must be finite and non-negative.
    pub fn new(width: f64, height: f64) -> BubbleResult<Self> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(BubbleError::validation(
                "viewport width/height must be finite and non-negative",
            ));
        }
        Ok(Self { width, height })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
