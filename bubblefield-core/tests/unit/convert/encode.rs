use super::*;
use crate::BubbleError;

fn fixture_dir(name: &str) -> std::path::PathBuf {
    let dir = std::path::PathBuf::from("target").join("unit_encode").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn converts_a_decodable_image_to_both_variants() {
    let dir = fixture_dir("ok");
    let input = dir.join("art.bmp");
    let img = image::RgbaImage::from_pixel(8, 8, image::Rgba([200, 40, 40, 255]));
    image::DynamicImage::ImageRgba8(img)
        .save_with_format(&input, image::ImageFormat::Bmp)
        .unwrap();

    let out = convert_image(&input, &dir.join("art")).unwrap();
    assert!(out.webp.exists());
    assert!(out.jpg.exists());

    // Both outputs decode back.
    let webp = image::open(&out.webp).unwrap();
    assert_eq!((webp.width(), webp.height()), (8, 8));
    let jpg = image::open(&out.jpg).unwrap();
    assert_eq!((jpg.width(), jpg.height()), (8, 8));
}

#[test]
fn undecodable_input_is_a_media_error() {
    let dir = fixture_dir("bad");
    let input = dir.join("notes.txt");
    std::fs::write(&input, b"not an image").unwrap();

    let err = convert_image(&input, &dir.join("notes")).unwrap_err();
    assert!(matches!(err, BubbleError::Media(_)));
}

#[test]
fn missing_input_is_a_media_error() {
    let dir = fixture_dir("missing");
    let err = convert_image(&dir.join("nope.bmp"), &dir.join("nope")).unwrap_err();
    assert!(matches!(err, BubbleError::Media(_)));
}
