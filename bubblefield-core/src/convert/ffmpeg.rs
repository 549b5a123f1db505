use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::foundation::error::{BubbleError, BubbleResult};

/// WebP quality target for HEIC/HEIF conversion.
pub const WEBP_QUALITY: u32 = 85;

/// True when a system `ffmpeg` binary is reachable on PATH.
///
/// We intentionally shell out to the system binary rather than link FFmpeg,
/// to avoid native dev header/lib requirements.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn run_ffmpeg(args: &[&str], input: &Path, output: &Path) -> BubbleResult<()> {
    let mut cmd = Command::new("ffmpeg");
    cmd.args(["-y", "-loglevel", "error", "-i"])
        .arg(input)
        .args(args)
        .arg(output)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());

    let out = cmd.output().map_err(|e| {
        BubbleError::media(format!(
            "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
        ))
    })?;
    if !out.status.success() {
        let stderr = String::from_utf8_lossy(&out.stderr);
        return Err(BubbleError::media(format!(
            "ffmpeg exited with status {} for '{}': {}",
            out.status,
            input.display(),
            stderr.trim()
        )));
    }
    Ok(())
}

/// Output pair produced by one HEIC/HEIF conversion.
#[derive(Clone, Debug)]
#[allow(missing_docs)]
pub struct ConvertedHeic {
    pub webp: PathBuf,
    pub jpg: PathBuf,
}

/// Convert a HEIC/HEIF still to `<stem>.webp` plus a `<stem>.jpg` fallback
/// via the system ffmpeg.
pub fn convert_heic(input: &Path, out_base: &Path) -> BubbleResult<ConvertedHeic> {
    let webp = out_base.with_extension("webp");
    let jpg = out_base.with_extension("jpg");
    let quality = WEBP_QUALITY.to_string();
    run_ffmpeg(&["-frames:v", "1", "-quality", &quality], input, &webp)?;
    run_ffmpeg(&["-frames:v", "1", "-q:v", "4"], input, &jpg)?;
    Ok(ConvertedHeic { webp, jpg })
}

/// Re-encode a video to a size-reduced web-friendly `<stem>.mp4`.
pub fn convert_video(input: &Path, out_base: &Path) -> BubbleResult<PathBuf> {
    let mp4 = out_base.with_extension("mp4");
    run_ffmpeg(
        &[
            "-c:v", "libx264", "-preset", "fast", "-crf", "23", "-c:a", "aac", "-b:a", "128k",
        ],
        input,
        &mp4,
    )?;
    Ok(mp4)
}

/// Playable duration of a media file in milliseconds, via `ffprobe`.
///
/// The interactive engine learns video lifespans from the playback layer;
/// the headless simulate driver uses this to supply the same number.
pub fn probe_media_duration(input: &Path) -> BubbleResult<u64> {
    #[derive(serde::Deserialize)]
    struct ProbeFormat {
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        format: Option<ProbeFormat>,
    }

    let out = Command::new("ffprobe")
        .args(["-v", "error", "-print_format", "json", "-show_format"])
        .arg(input)
        .output()
        .map_err(|e| BubbleError::media(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(BubbleError::media(format!(
            "ffprobe failed for '{}': {}",
            input.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    let parsed: ProbeOut = serde_json::from_slice(&out.stdout)
        .map_err(|e| BubbleError::media(format!("ffprobe json parse failed: {e}")))?;
    let secs = parsed
        .format
        .and_then(|f| f.duration)
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| {
            BubbleError::media(format!("no duration reported for '{}'", input.display()))
        })?;
    Ok((secs * 1000.0).round().max(0.0) as u64)
}

#[cfg(test)]
#[path = "../../tests/unit/convert/ffmpeg.rs"]
mod tests;
