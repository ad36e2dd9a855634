//! Canvas geometry, colors and the embedded stylesheet

/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 1200;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 600;

/// Nominal (and maximum) lane height
pub const TRACK_HEIGHT: f64 = 80.0;
/// Lanes never shrink below this, even if they overflow the canvas
pub const MIN_TRACK_HEIGHT: f64 = 40.0;

pub const MARGIN_TOP: f64 = 60.0;
pub const MARGIN_BOTTOM: f64 = 40.0;
pub const MARGIN_LEFT: f64 = 100.0;
pub const MARGIN_RIGHT: f64 = 40.0;
pub const RULER_HEIGHT: f64 = 40.0;

/// Floor applied to every item width so short items stay visible
pub const MIN_CLIP_WIDTH: f64 = 5.0;
/// Clip captions are only drawn on clips wider than this
pub const MIN_CAPTION_WIDTH: f64 = 30.0;
/// Vertical inset of items inside their lane
pub const ITEM_PADDING: f64 = 2.0;
/// Gap between the track label and the content area
pub const LABEL_OFFSET: f64 = 10.0;
pub const TRANSITION_STROKE_WIDTH: f64 = 3.0;

pub const VIDEO_TRACK_COLOR: &str = "#4A90E2";
pub const AUDIO_TRACK_COLOR: &str = "#50C878";
/// Alpha suffix appended to a track color for its lane background
pub const TRACK_BG_ALPHA: &str = "33";
pub const GAP_COLOR: &str = "#E0E0E0";
pub const GAP_STROKE: &str = "#999";
pub const CLIP_STROKE: &str = "#333";
pub const TRANSITION_COLOR: &str = "#FFB84D";
pub const GRID_COLOR: &str = "#CCCCCC";
pub const RULER_BG_COLOR: &str = "#F5F5F5";

/// Classes used by the encoder, styled in [`STYLESHEET`]
pub const STYLESHEET: &str = "
    .track-label {
      font-family: Arial, sans-serif;
      font-size: 12px;
      fill: #333;
      font-weight: bold;
    }
    .clip-label {
      font-family: Arial, sans-serif;
      font-size: 10px;
      fill: white;
      pointer-events: none;
    }
    .ruler-text {
      font-family: Arial, sans-serif;
      font-size: 10px;
      fill: #666;
    }
    .clip {
      stroke: #333;
      stroke-width: 1;
    }
    .gap {
      stroke: #999;
      stroke-width: 1;
      stroke-dasharray: 2,2;
    }
    .transition {
      stroke: #333;
      stroke-width: 2;
      fill: none;
    }";
