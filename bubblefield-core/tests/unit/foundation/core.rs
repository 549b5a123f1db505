use super::*;

#[test]
fn millis_since_saturates() {
    assert_eq!(Millis(500).since(Millis(200)), 300);
    assert_eq!(Millis(200).since(Millis(500)), 0);
}

#[test]
fn millis_add_saturates_at_max() {
    assert_eq!(Millis(10).add(5), Millis(15));
    assert_eq!(Millis(u64::MAX).add(1), Millis(u64::MAX));
}

#[test]
fn viewport_rejects_non_finite_and_negative() {
    assert!(Viewport::new(1024.0, 768.0).is_ok());
    assert!(Viewport::new(0.0, 0.0).is_ok());
    assert!(Viewport::new(-1.0, 768.0).is_err());
    assert!(Viewport::new(f64::NAN, 768.0).is_err());
    assert!(Viewport::new(1024.0, f64::INFINITY).is_err());
}
