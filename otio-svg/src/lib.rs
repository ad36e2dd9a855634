//! Timeline SVG Library
//!
//! This library renders a [`otio_core::Timeline`] as an SVG document: tracks
//! become horizontal lanes, clips colored rectangles, gaps dashed rectangles
//! and transitions diagonal strokes, under a time ruler. Output is written
//! incrementally to any [`std::io::Write`] sink.
//!
//! ```
//! use otio_core::{Clip, RationalTime, TimeRange, Timeline, Track, TrackKind};
//! use otio_svg::Encoder;
//!
//! let mut track = Track::new("Video 1", TrackKind::Video);
//! let range = TimeRange::new(RationalTime::new(0.0, 24.0), RationalTime::new(120.0, 24.0));
//! track.append_child(Clip::new("Opening Shot", Some(range), None));
//!
//! let mut timeline = Timeline::new("Example");
//! timeline.tracks_mut().unwrap().append_child(track);
//!
//! let mut encoder = Encoder::new(Vec::new());
//! encoder.set_size(1200, 400);
//! encoder.encode(&timeline).unwrap();
//!
//! let svg = String::from_utf8(encoder.into_inner()).unwrap();
//! assert!(svg.contains(r#"class="clip""#));
//! ```

pub mod builder;
pub mod encoder;
pub mod ruler;
pub mod theme;

pub use builder::SvgBuilder;
pub use encoder::{sanitize_id, Encoder};
pub use ruler::{calculate_time_interval, format_time};

/// Result type for otio-svg operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for otio-svg operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no timeline to encode")]
    NoTimeline,

    #[error("failed to get timeline duration: {0}")]
    DurationUnavailable(#[source] otio_core::Error),

    #[error("timeline has no duration")]
    NoDuration,

    #[error("timeline has no tracks")]
    NoTracks,
}

/// Encoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            width: theme::DEFAULT_WIDTH,
            height: theme::DEFAULT_HEIGHT,
        }
    }
}
