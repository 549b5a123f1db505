use super::*;
use crate::{MediaItem, Millis, Point};

fn bubble_at(left: f64, top: f64, size_px: f64) -> Bubble {
    Bubble {
        id: BubbleId(1),
        media: MediaItem::image("a.webp"),
        size_fraction: 0.1,
        size_px,
        left,
        top,
        depth: 5,
        created_at: Millis(0),
        lifespan_ms: Some(5000),
        popping: false,
    }
}

#[test]
fn center_and_radius_derive_from_geometry() {
    let b = bubble_at(100.0, 50.0, 80.0);
    assert_eq!(b.center(), Point::new(140.0, 90.0));
    assert_eq!(b.radius(), 40.0);
}

#[test]
fn is_video_tracks_media_kind() {
    let mut b = bubble_at(0.0, 0.0, 10.0);
    assert!(!b.is_video());
    b.media = MediaItem::video("c.mp4");
    assert!(b.is_video());
}

#[test]
fn snapshot_serializes_render_contract_fields() {
    let snap = Snapshot {
        bubbles: vec![BubbleView {
            id: BubbleId(3),
            kind: crate::MediaKind::Image,
            source: "a.webp".to_string(),
            left: 1.0,
            top: 2.0,
            size_px: 80.0,
            size_fraction: 0.1,
            depth: 12,
            popping: false,
        }],
        opacity: 0.28,
    };
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["opacity"], 0.28);
    assert_eq!(json["bubbles"][0]["id"], 3);
    assert_eq!(json["bubbles"][0]["kind"], "image");
    assert_eq!(json["bubbles"][0]["src"], "a.webp");
    assert_eq!(json["bubbles"][0]["popping"], false);
}
