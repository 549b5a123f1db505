use super::*;
use crate::{BOTTOM_MARGIN_PX, EngineConfig, Point, Rng64, Viewport};

fn vp(w: f64, h: f64) -> Viewport {
    Viewport::new(w, h).unwrap()
}

#[test]
fn overlap_test_honors_padding() {
    let others = [PlacedCircle {
        center: Point::new(100.0, 100.0),
        radius: 40.0,
    }];
    // 90 apart, radii sum 80, padding 8 => 90 > 88 is clear.
    assert!(!overlaps(Point::new(190.0, 100.0), 40.0, &others));
    // 85 apart is inside the padded separation.
    assert!(overlaps(Point::new(185.0, 100.0), 40.0, &others));
}

#[test]
fn placement_fits_viewport_with_bottom_margin() {
    let cfg = EngineConfig::default();
    let mut rng = Rng64::new(3);
    let viewport = vp(1024.0, 768.0);
    for _ in 0..200 {
        let p = place(&cfg, viewport, &mut rng, &[]);
        assert!(p.left >= 0.0);
        assert!(p.top >= 0.0);
        assert!(p.left + p.size_px <= viewport.width);
        assert!(p.top + p.size_px <= viewport.height - BOTTOM_MARGIN_PX);
    }
}

#[test]
fn size_draw_respects_configured_fractions() {
    let cfg = EngineConfig::default();
    let mut rng = Rng64::new(5);
    let viewport = vp(1024.0, 768.0);
    for _ in 0..200 {
        let p = place(&cfg, viewport, &mut rng, &[]);
        assert!(p.size_fraction >= cfg.min_size_fraction);
        assert!(p.size_fraction <= cfg.max_size_fraction);
        assert_eq!(p.size_px, p.size_fraction * viewport.width);
    }
}

#[test]
fn placement_avoids_existing_circles_when_space_allows() {
    let cfg = EngineConfig {
        min_size_fraction: 0.05,
        max_size_fraction: 0.05,
        ..EngineConfig::default()
    };
    let mut rng = Rng64::new(8);
    let viewport = vp(2000.0, 1200.0);
    let others = [PlacedCircle {
        center: Point::new(1000.0, 500.0),
        radius: 50.0,
    }];
    for _ in 0..50 {
        let p = place(&cfg, viewport, &mut rng, &others);
        assert!(!overlaps(p.center(), p.radius(), &others));
    }
}

#[test]
fn retry_exhaustion_still_returns_a_placement() {
    // A bubble as wide as the whole viewport cannot avoid a circle parked
    // in the middle; after the retry budget the last candidate is accepted.
    let cfg = EngineConfig {
        min_size_fraction: 1.0,
        max_size_fraction: 1.0,
        ..EngineConfig::default()
    };
    let mut rng = Rng64::new(13);
    let viewport = vp(400.0, 400.0);
    let others = [PlacedCircle {
        center: Point::new(200.0, 200.0),
        radius: 200.0,
    }];
    let p = place(&cfg, viewport, &mut rng, &others);
    assert_eq!(p.size_px, 400.0);
    assert!(p.left >= 0.0 && p.top >= 0.0);
}

#[test]
fn tiny_viewport_falls_back_to_zero_offset() {
    let cfg = EngineConfig {
        min_size_fraction: 1.0,
        max_size_fraction: 1.0,
        avoid_overlap: false,
        ..EngineConfig::default()
    };
    let mut rng = Rng64::new(2);
    // Height smaller than size + bottom margin: top range collapses to 0.
    let p = place(&cfg, vp(100.0, 50.0), &mut rng, &[]);
    assert_eq!(p.left, 0.0);
    assert_eq!(p.top, 0.0);
}
