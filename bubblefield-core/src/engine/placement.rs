use crate::{
    engine::config::{
        BOTTOM_MARGIN_PX, EngineConfig, OVERLAP_PADDING_PX, PLACEMENT_ATTEMPTS,
    },
    foundation::core::{Point, Viewport},
    foundation::rng::Rng64,
};

/// Circle footprint of an already-placed bubble, used as overlap context.
#[derive(Clone, Copy, Debug)]
#[allow(missing_docs)]
pub struct PlacedCircle {
    pub center: Point,
    pub radius: f64,
}

/// Result of one placement draw.
#[derive(Clone, Copy, Debug)]
#[allow(missing_docs)]
pub struct Placement {
    pub size_fraction: f64,
    pub size_px: f64,
    pub left: f64,
    pub top: f64,
}

impl Placement {
    /// Center of the placed circle.
    pub fn center(&self) -> Point {
        Point::new(self.left + self.size_px / 2.0, self.top + self.size_px / 2.0)
    }

    /// Radius of the placed circle.
    pub fn radius(&self) -> f64 {
        self.size_px / 2.0
    }

    /// Footprint of this placement for subsequent overlap checks.
    pub fn footprint(&self) -> PlacedCircle {
        PlacedCircle {
            center: self.center(),
            radius: self.radius(),
        }
    }
}

/// True when `center`/`radius` comes within [`OVERLAP_PADDING_PX`] of any
/// circle in `others`.
pub fn overlaps(center: Point, radius: f64, others: &[PlacedCircle]) -> bool {
    others.iter().any(|o| {
        let dist = center.distance(o.center);
        dist < radius + o.radius + OVERLAP_PADDING_PX
    })
}

/// Draw a random top-left position for a bubble of `size_px` that fully fits
/// the viewport, leaving [`BOTTOM_MARGIN_PX`] clear at the bottom.
///
/// When the viewport is smaller than the bubble, the range collapses and the
/// offset falls back to zero rather than failing.
pub fn fit_position(vp: Viewport, size_px: f64, rng: &mut Rng64) -> (f64, f64) {
    let left = rng.in_range(0.0, (vp.width - size_px).max(0.0));
    let top = rng.in_range(0.0, (vp.height - size_px - BOTTOM_MARGIN_PX).max(0.0));
    (left, top)
}

/// Compute a size and position for a new bubble.
///
/// Size is drawn uniformly in `[min_size_fraction, max_size_fraction]` of the
/// viewport width. Position retries up to [`PLACEMENT_ATTEMPTS`] times to
/// satisfy the separation policy against `others`; on exhaustion the last
/// candidate is accepted as-is. Placement is best-effort and never fails.
pub fn place(
    cfg: &EngineConfig,
    vp: Viewport,
    rng: &mut Rng64,
    others: &[PlacedCircle],
) -> Placement {
    let size_fraction = rng.in_range(cfg.min_size_fraction, cfg.max_size_fraction);
    let size_px = size_fraction * vp.width;

    let mut left = 0.0;
    let mut top = 0.0;
    for attempt in 0..PLACEMENT_ATTEMPTS {
        let (l, t) = fit_position(vp, size_px, rng);
        left = l;
        top = t;
        if !cfg.avoid_overlap {
            break;
        }
        let center = Point::new(left + size_px / 2.0, top + size_px / 2.0);
        if !overlaps(center, size_px / 2.0, others) {
            break;
        }
        if attempt + 1 == PLACEMENT_ATTEMPTS {
            tracing::debug!(size_px, "placement retries exhausted, accepting last candidate");
        }
    }

    Placement {
        size_fraction,
        size_px,
        left,
        top,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/placement.rs"]
mod tests;
