//! Bubblefield is a floating-media bubble scheduler plus an offline media
//! conversion engine.
//!
//! The scheduler owns a set of "bubbles" (each wrapping one photo or video),
//! decides where and how large each renders, expires them on schedule, and
//! replaces popped bubbles up to a viewport-dependent capacity. The
//! conversion side is a batch job that transcodes a media directory into
//! web-friendly formats via the `image` crate and the system `ffmpeg`.
//!
//! # Engine overview
//!
//! 1. **Spawn**: select pool content, draw a size, place it with bounded
//!    overlap-avoiding retries, up to `capacity(viewport)`
//! 2. **Live**: expiry timers (fixed for images, learned from playback
//!    metadata for videos) and periodic whole-set drift repositioning
//! 3. **Pop**: flagged exit animation, then removal and one synchronous
//!    replacement
//! 4. **Snapshot**: the presentation layer reads back bubbles in painter's
//!    order and draws them
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the random source is seedable and the engine never
//!   reads a wall clock or ambient display state; callers thread `now` and
//!   the viewport into every operation.
//! - **Single mutation path**: all active-set changes happen through
//!   serialized engine calls; there is no interior concurrency.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod convert;
mod engine;
mod foundation;

pub use convert::batch::{BatchSummary, FileReport, Outcome, run_batch};
pub use convert::classify::{
    FileClass, IMAGE_CONVERT_EXTS, IMAGE_SAFE_EXTS, VIDEO_CONVERT_EXTS, VIDEO_SAFE_EXTS, classify,
};
pub use convert::encode::{ConvertedImage, JPEG_QUALITY, convert_image};
pub use convert::ffmpeg::{
    ConvertedHeic, WEBP_QUALITY, convert_heic, convert_video, is_ffmpeg_on_path,
    probe_media_duration,
};
pub use engine::bubble::{Bubble, BubbleId, BubbleView, Snapshot};
pub use engine::config::{
    BOTTOM_MARGIN_PX, DEPTH_BASE, DEPTH_SPREAD, DRIFT_INTERVAL_MAX_MS, DRIFT_INTERVAL_MIN_MS,
    EngineConfig, MIN_EXPIRY_DELAY_MS, MOBILE_BREAKPOINT_PX, OVERLAP_PADDING_PX,
    PLACEMENT_ATTEMPTS, POP_DURATION_MS,
};
pub use engine::media::{MediaItem, MediaKind};
pub use engine::placement::{PlacedCircle, Placement, fit_position, overlaps, place};
pub use engine::scheduler::BubbleEngine;
pub use engine::timers::{ArmedTimer, DueTimer, TimerKind, TimerTable};
pub use foundation::core::{Millis, Point, Rect, Vec2, Viewport};
pub use foundation::error::{BubbleError, BubbleResult};
pub use foundation::rng::Rng64;
