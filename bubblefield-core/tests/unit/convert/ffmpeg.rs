use super::*;

#[test]
fn path_probe_does_not_panic() {
    // Value depends on the host; the call itself must be safe either way.
    let _ = is_ffmpeg_on_path();
}

#[test]
fn probing_a_missing_file_fails_cleanly() {
    let err = probe_media_duration(std::path::Path::new("target/no_such_file.mp4"));
    assert!(err.is_err());
}

#[test]
fn converting_a_missing_video_fails_cleanly() {
    let out_base = std::path::PathBuf::from("target").join("unit_ffmpeg_missing");
    let err = convert_video(std::path::Path::new("target/no_such_file.mov"), &out_base);
    assert!(err.is_err());
}
