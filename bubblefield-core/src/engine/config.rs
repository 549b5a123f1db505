use crate::foundation::error::{BubbleError, BubbleResult};

/// Viewport width below which the mobile capacity and the video exclusion
/// apply, in logical pixels.
pub const MOBILE_BREAKPOINT_PX: f64 = 640.0;

/// Vertical margin kept clear at the bottom of the viewport for page chrome.
pub const BOTTOM_MARGIN_PX: f64 = 80.0;

/// Minimum center-to-center clearance beyond the sum of radii.
pub const OVERLAP_PADDING_PX: f64 = 8.0;

/// Retry budget for overlap-avoiding placement before accepting the last
/// candidate as-is.
pub const PLACEMENT_ATTEMPTS: u32 = 40;

/// Duration of the pop (exit) animation before a bubble is removed.
pub const POP_DURATION_MS: u64 = 420;

/// Floor on the delay before an expiry fires, so a bubble created with an
/// almost-elapsed lifespan never pops degenerately fast.
pub const MIN_EXPIRY_DELAY_MS: u64 = 300;

/// Lower bound of the uniformly redrawn interval between drift repositions.
pub const DRIFT_INTERVAL_MIN_MS: u64 = 4000;
/// Upper bound of the uniformly redrawn interval between drift repositions.
pub const DRIFT_INTERVAL_MAX_MS: u64 = 7500;

/// Stacking order is drawn as `DEPTH_BASE + floor(rand * DEPTH_SPREAD)`.
pub const DEPTH_BASE: i32 = 5;
/// Width of the random stacking-order band; see [`DEPTH_BASE`].
pub const DEPTH_SPREAD: i32 = 50;

/// Engine tuning supplied by the hosting layer at mount time.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum simultaneous non-popping bubbles on desktop-class viewports.
    pub capacity_desktop: usize,
    /// Maximum simultaneous non-popping bubbles below the mobile breakpoint.
    pub capacity_mobile: usize,
    /// Lower bound of the size draw, as a fraction of viewport width.
    pub min_size_fraction: f64,
    /// Upper bound of the size draw, as a fraction of viewport width.
    pub max_size_fraction: f64,
    /// Lifespan applied to every image bubble, in milliseconds.
    pub image_lifespan_ms: u64,
    /// Global bubble opacity in `[0, 1]`; constant across the set.
    pub opacity: f64,
    /// Whether placement retries to keep new bubbles clear of existing ones.
    pub avoid_overlap: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capacity_desktop: 3,
            capacity_mobile: 1,
            min_size_fraction: 0.08,
            max_size_fraction: 0.28,
            image_lifespan_ms: 5000,
            opacity: 0.28,
            avoid_overlap: true,
        }
    }
}

impl EngineConfig {
    /// Reject out-of-range tuning before the engine accepts it.
    pub fn validate(&self) -> BubbleResult<()> {
        if self.capacity_desktop == 0 || self.capacity_mobile == 0 {
            return Err(BubbleError::validation("capacities must be non-zero"));
        }
        if !(0.0 < self.min_size_fraction && self.min_size_fraction <= 1.0)
            || !(0.0 < self.max_size_fraction && self.max_size_fraction <= 1.0)
        {
            return Err(BubbleError::validation(
                "size fractions must be in (0, 1]",
            ));
        }
        if self.min_size_fraction > self.max_size_fraction {
            return Err(BubbleError::validation(
                "min_size_fraction must be <= max_size_fraction",
            ));
        }
        if self.image_lifespan_ms == 0 {
            return Err(BubbleError::validation("image_lifespan_ms must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(BubbleError::validation("opacity must be in [0, 1]"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/config.rs"]
mod tests;
