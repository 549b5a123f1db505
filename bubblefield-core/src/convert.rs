pub mod batch;
pub mod classify;
pub mod encode;
pub mod ffmpeg;
