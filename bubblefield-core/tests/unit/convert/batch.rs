use super::*;

fn fixture_dir(name: &str) -> std::path::PathBuf {
    let dir = std::path::PathBuf::from("target").join("unit_batch").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_bmp(path: &std::path::Path) {
    let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([10, 120, 200, 255]));
    image::DynamicImage::ImageRgba8(img)
        .save_with_format(path, image::ImageFormat::Bmp)
        .unwrap();
}

fn outcome_for<'a>(summary: &'a BatchSummary, file: &str) -> &'a Outcome {
    &summary
        .reports
        .iter()
        .find(|r| r.file == file)
        .unwrap_or_else(|| panic!("no report for {file}"))
        .outcome
}

#[test]
fn web_safe_files_are_skipped() {
    let dir = fixture_dir("web_safe");
    std::fs::write(dir.join("a.jpg"), b"x").unwrap();
    std::fs::write(dir.join("b.mp4"), b"x").unwrap();

    let summary = run_batch(&dir).unwrap();
    assert_eq!(summary.reports.len(), 2);
    assert_eq!(summary.skipped_count(), 2);
    assert!(matches!(
        outcome_for(&summary, "a.jpg"),
        Outcome::Skipped { reason } if reason == "already web-safe image"
    ));
    assert!(matches!(
        outcome_for(&summary, "b.mp4"),
        Outcome::Skipped { reason } if reason == "already web-safe video"
    ));
}

#[test]
fn existing_counterparts_short_circuit_conversion() {
    let dir = fixture_dir("counterparts");
    // None of these need ffmpeg: the counterpart check fires first.
    std::fs::write(dir.join("photo.heic"), b"x").unwrap();
    std::fs::write(dir.join("photo.webp"), b"x").unwrap();
    std::fs::write(dir.join("clip.mov"), b"x").unwrap();
    std::fs::write(dir.join("clip.mp4"), b"x").unwrap();
    std::fs::write(dir.join("scan.tiff"), b"x").unwrap();
    std::fs::write(dir.join("scan.webp"), b"x").unwrap();

    let summary = run_batch(&dir).unwrap();
    assert!(matches!(
        outcome_for(&summary, "photo.heic"),
        Outcome::Skipped { reason } if reason == "webp exists"
    ));
    assert!(matches!(
        outcome_for(&summary, "clip.mov"),
        Outcome::Skipped { reason } if reason == "mp4 exists"
    ));
    assert!(matches!(
        outcome_for(&summary, "scan.tiff"),
        Outcome::Skipped { reason } if reason == "webp exists"
    ));
    assert_eq!(summary.converted_count(), 0);
    assert_eq!(summary.failed_count(), 0);
}

#[test]
fn best_effort_converts_unknown_images_and_reruns_are_idempotent() {
    let dir = fixture_dir("idempotent");
    write_bmp(&dir.join("art.bmp"));

    let first = run_batch(&dir).unwrap();
    assert!(matches!(
        outcome_for(&first, "art.bmp"),
        Outcome::Converted { outputs }
            if outputs.contains(&"art.webp".to_string())
                && outputs.contains(&"art.jpg".to_string())
    ));
    assert!(dir.join("art.webp").exists());
    assert!(dir.join("art.jpg").exists());
    let files_after_first = std::fs::read_dir(&dir).unwrap().count();

    // Second run: the counterpart exists, nothing new is written.
    let second = run_batch(&dir).unwrap();
    assert_eq!(second.converted_count(), 0);
    assert!(matches!(
        outcome_for(&second, "art.bmp"),
        Outcome::Skipped { reason } if reason == "webp exists"
    ));
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), files_after_first);
}

#[test]
fn one_bad_file_never_aborts_the_batch() {
    let dir = fixture_dir("isolation");
    std::fs::write(dir.join("notes.txt"), b"not an image").unwrap();
    write_bmp(&dir.join("art.bmp"));
    std::fs::write(dir.join("ok.png"), b"x").unwrap();

    let summary = run_batch(&dir).unwrap();
    assert!(matches!(
        outcome_for(&summary, "notes.txt"),
        Outcome::Failed { .. }
    ));
    assert_eq!(summary.converted_count(), 1);
    assert_eq!(summary.skipped_count(), 1);
}

#[test]
fn hidden_files_are_ignored() {
    let dir = fixture_dir("hidden");
    std::fs::write(dir.join(".DS_Store"), b"x").unwrap();
    std::fs::write(dir.join("a.jpg"), b"x").unwrap();

    let summary = run_batch(&dir).unwrap();
    assert_eq!(summary.reports.len(), 1);
    assert_eq!(summary.reports[0].file, "a.jpg");
}

#[test]
fn missing_directory_is_an_error() {
    assert!(run_batch(std::path::Path::new("target/unit_batch/definitely_missing")).is_err());
}
