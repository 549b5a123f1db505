use super::*;
use std::path::Path;

#[test]
fn web_safe_extensions_are_recognized() {
    for name in ["a.jpg", "b.JPEG", "c.png", "d.webp", "e.gif", "f.svg", "g.avif"] {
        assert_eq!(classify(Path::new(name)), FileClass::WebSafeImage, "{name}");
    }
    for name in ["a.mp4", "b.webm", "c.OGG"] {
        assert_eq!(classify(Path::new(name)), FileClass::WebSafeVideo, "{name}");
    }
}

#[test]
fn conversion_classes_are_recognized() {
    assert_eq!(
        classify(Path::new("photo.heic")),
        FileClass::NeedsImageConversion
    );
    assert_eq!(
        classify(Path::new("photo.HEIF")),
        FileClass::NeedsImageConversion
    );
    for name in ["clip.mov", "clip.avi", "clip.mkv", "clip.wmv"] {
        assert_eq!(
            classify(Path::new(name)),
            FileClass::NeedsVideoConversion,
            "{name}"
        );
    }
}

#[test]
fn everything_else_is_unknown() {
    assert_eq!(classify(Path::new("art.bmp")), FileClass::Unknown);
    assert_eq!(classify(Path::new("notes.txt")), FileClass::Unknown);
    assert_eq!(classify(Path::new("no_extension")), FileClass::Unknown);
}

#[test]
fn hidden_files_are_detected() {
    assert!(is_hidden(Path::new("photos/.DS_Store")));
    assert!(!is_hidden(Path::new("photos/a.jpg")));
}
