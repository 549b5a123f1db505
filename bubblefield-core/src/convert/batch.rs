use std::path::Path;

use crate::{
    convert::classify::{self, FileClass},
    convert::{encode, ffmpeg},
    foundation::error::BubbleResult,
};

/// What the batch job did with one file.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Outcome {
    /// Nothing to do (already web-safe, or the converted counterpart exists).
    Skipped { reason: String },
    /// Converted; `outputs` are the produced file names.
    Converted { outputs: Vec<String> },
    /// Conversion failed; the rest of the batch is unaffected.
    Failed { reason: String },
}

/// Per-file record in the batch summary.
#[derive(Clone, Debug, serde::Serialize)]
pub struct FileReport {
    /// Input file name.
    pub file: String,
    /// What happened to it.
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Summary of one batch run, in scan order.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct BatchSummary {
    /// One report per scanned file.
    pub reports: Vec<FileReport>,
}

impl BatchSummary {
    /// Number of files that produced new outputs.
    pub fn converted_count(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Converted { .. }))
    }

    /// Number of files with nothing to do.
    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped { .. }))
    }

    /// Number of files whose conversion failed.
    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Run the offline conversion job over every regular file in `dir`.
///
/// Files are treated independently: a decode or codec failure is logged,
/// recorded as [`Outcome::Failed`] and never aborts the remaining batch.
/// Re-runs are idempotent: every convertible class skips when its converted
/// counterpart already exists.
#[tracing::instrument]
pub fn run_batch(dir: &Path) -> BubbleResult<BatchSummary> {
    use anyhow::Context as _;

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read media directory '{}'", dir.display()))?
        .collect::<Result<_, _>>()
        .with_context(|| format!("failed to list media directory '{}'", dir.display()))?;
    entries.sort_by_key(|e| e.file_name());

    let mut summary = BatchSummary::default();
    for entry in entries {
        let path = entry.path();
        if classify::is_hidden(&path) || !path.is_file() {
            continue;
        }
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let outcome = convert_file(&path);
        match &outcome {
            Outcome::Converted { outputs } => {
                tracing::info!(file = %file, outputs = %outputs.join(", "), "converted")
            }
            Outcome::Skipped { reason } => tracing::debug!(file = %file, %reason, "skipped"),
            Outcome::Failed { reason } => {
                tracing::warn!(file = %file, %reason, "conversion failed")
            }
        }
        summary.reports.push(FileReport { file, outcome });
    }
    Ok(summary)
}

fn convert_file(path: &Path) -> Outcome {
    let out_base = path.with_extension("");
    match classify::classify(path) {
        FileClass::WebSafeImage => skipped("already web-safe image"),
        FileClass::WebSafeVideo => skipped("already web-safe video"),
        FileClass::NeedsImageConversion => {
            if out_base.with_extension("webp").exists() {
                return skipped("webp exists");
            }
            match ffmpeg::convert_heic(path, &out_base) {
                Ok(out) => converted(&[&out.webp, &out.jpg]),
                Err(e) => failed(e),
            }
        }
        FileClass::NeedsVideoConversion => {
            if out_base.with_extension("mp4").exists() {
                return skipped("mp4 exists");
            }
            match ffmpeg::convert_video(path, &out_base) {
                Ok(mp4) => converted(&[&mp4]),
                Err(e) => failed(e),
            }
        }
        FileClass::Unknown => {
            if out_base.with_extension("webp").exists() {
                return skipped("webp exists");
            }
            match encode::convert_image(path, &out_base) {
                Ok(out) => converted(&[&out.webp, &out.jpg]),
                Err(e) => failed(e),
            }
        }
    }
}

fn skipped(reason: &str) -> Outcome {
    Outcome::Skipped {
        reason: reason.to_string(),
    }
}

fn converted(outputs: &[&Path]) -> Outcome {
    Outcome::Converted {
        outputs: outputs
            .iter()
            .map(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            })
            .collect(),
    }
}

fn failed(e: impl std::fmt::Display) -> Outcome {
    Outcome::Failed {
        reason: e.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/convert/batch.rs"]
mod tests;
