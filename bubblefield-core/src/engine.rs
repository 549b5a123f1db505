pub mod bubble;
pub mod config;
pub mod media;
pub mod placement;
pub mod scheduler;
pub mod timers;
