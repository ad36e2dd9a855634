//! Timeline model
//!
//! This library provides the read-only timeline object graph consumed by the
//! SVG renderer: a [`Timeline`] owns a [`Stack`] of [`Track`]s, and each track
//! owns an ordered list of [`Item`]s (clips, gaps and transitions) whose
//! durations live on a rational timebase.

pub mod item;
pub mod time;
pub mod timeline;
pub mod track;

pub use item::{Clip, Gap, Item, MediaReference, Transition, TransitionType};
pub use time::{RationalTime, TimeRange};
pub use timeline::Timeline;
pub use track::{Composable, Stack, Track, TrackKind};

/// Result type for otio-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for otio-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{kind} '{name}' has neither a source range nor an available media range")]
    MissingDuration { kind: &'static str, name: String },

    #[error("{kind} '{name}' has an invalid timebase")]
    InvalidTime { kind: &'static str, name: String },

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
