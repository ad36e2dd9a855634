//! Timeline to SVG encoder

use crate::ruler::draw_ruler;
use crate::theme::*;
use crate::{EncoderConfig, Error, Result, SvgBuilder};
use otio_core::{Clip, Item, Stack, Timeline, Track, TrackKind};
use std::io::{self, Write};

/// Renders timelines as SVG into a caller-supplied sink.
///
/// The encoder never flushes or closes the sink. Output is written as it is
/// produced, so a failed call may leave a partial document behind.
pub struct Encoder<W: Write> {
    writer: W,
    config: EncoderConfig,
}

impl<W: Write> Encoder<W> {
    /// Creates an encoder with the default 1200x600 canvas
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, EncoderConfig::default())
    }

    /// Creates an encoder with an explicit configuration
    pub fn with_config(writer: W, config: EncoderConfig) -> Self {
        Self { writer, config }
    }

    /// Sets the canvas size used by subsequent calls to [`encode`](Self::encode)
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.config.width = width;
        self.config.height = height;
    }

    /// Returns the current configuration
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Returns the underlying sink
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Encodes a timeline as a complete SVG document.
    ///
    /// The timeline is validated before anything is written.
    pub fn encode<'t>(&mut self, timeline: impl Into<Option<&'t Timeline>>) -> Result<()> {
        let timeline = timeline.into().ok_or(Error::NoTimeline)?;
        let (tracks, duration_seconds) = validate(timeline)?;

        let width = f64::from(self.config.width);
        let height = f64::from(self.config.height);
        let content_width = width - MARGIN_LEFT - MARGIN_RIGHT;
        let content_height = height - MARGIN_TOP - MARGIN_BOTTOM;

        let layout = Layout {
            content_width,
            time_scale: content_width / duration_seconds,
            track_height: track_height(content_height, tracks.children().len()),
        };
        log::debug!(
            "encoding '{}': {duration_seconds}s at {} px/s, {} lanes of {}px",
            timeline.name(),
            layout.time_scale,
            tracks.children().len(),
            layout.track_height
        );

        let mut builder = SvgBuilder::new(&mut self.writer);
        builder.write_header(self.config.width, self.config.height)?;
        builder.write_style(STYLESHEET)?;
        draw_ruler(&mut builder, content_width, duration_seconds, layout.time_scale)?;

        for (index, child) in tracks.children().iter().enumerate() {
            match child.as_track() {
                Some(track) => draw_track(&mut builder, &layout, track, index)?,
                None => log::debug!("skipping non-track child {index} of '{}'", tracks.name),
            }
        }

        builder.write_footer()?;
        Ok(())
    }
}

/// Checks the timeline can be drawn and returns its tracks and length in seconds
fn validate(timeline: &Timeline) -> Result<(&Stack, f64)> {
    let tracks = timeline.tracks().ok_or(Error::NoTracks)?;
    if tracks.children().is_empty() {
        return Err(Error::NoTracks);
    }

    let duration = timeline.duration().map_err(Error::DurationUnavailable)?;
    let seconds = duration.to_seconds();
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(Error::NoDuration);
    }
    Ok((tracks, seconds))
}

/// Lane height: the available space shared evenly, whole pixels, clamped to [40, 80]
fn track_height(content_height: f64, track_count: usize) -> f64 {
    let available = content_height - RULER_HEIGHT;
    (available / track_count as f64)
        .trunc()
        .clamp(MIN_TRACK_HEIGHT, TRACK_HEIGHT)
}

/// Per-call geometry shared by every lane
struct Layout {
    content_width: f64,
    /// Pixels per second
    time_scale: f64,
    track_height: f64,
}

impl Layout {
    fn track_y(&self, index: usize) -> f64 {
        MARGIN_TOP + RULER_HEIGHT + index as f64 * self.track_height
    }
}

/// Horizontal slot of one item within its lane
struct Slot {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Slot {
    fn inset_y(&self) -> f64 {
        self.y + ITEM_PADDING
    }

    fn inset_height(&self) -> f64 {
        self.height - 2.0 * ITEM_PADDING
    }
}

fn track_color(kind: TrackKind) -> &'static str {
    match kind {
        TrackKind::Video => VIDEO_TRACK_COLOR,
        TrackKind::Audio => AUDIO_TRACK_COLOR,
    }
}

fn draw_track<W: Write>(
    builder: &mut SvgBuilder<W>,
    layout: &Layout,
    track: &Track,
    index: usize,
) -> io::Result<()> {
    let y = layout.track_y(index);
    let height = layout.track_height;

    let track_id = format!("track-{}", sanitize_id(track.name()));
    builder.start_group(Some(&track_id), Some("track"))?;

    let color = track_color(track.kind());
    let background = format!("{color}{TRACK_BG_ALPHA}");
    builder.write_rect(
        MARGIN_LEFT,
        y,
        layout.content_width,
        height,
        Some(&background),
        Some(GRID_COLOR),
        None,
        Some("track-bg"),
        None,
    )?;

    let label = if track.name().is_empty() {
        format!("{} Track", track.kind())
    } else {
        track.name().to_string()
    };
    builder.write_text(
        MARGIN_LEFT - LABEL_OFFSET,
        y + height / 2.0,
        &label,
        Some("end"),
        None,
        Some("track-label"),
    )?;

    // Seconds elapsed since the start of the track
    let mut cursor = 0.0;
    for (item_index, item) in track.children().iter().enumerate() {
        let duration = match item.duration() {
            Ok(duration) => duration.to_seconds(),
            Err(err) => {
                log::debug!(
                    "skipping {} '{}' on track '{}': {err}",
                    item.kind(),
                    item.name(),
                    track.name()
                );
                continue;
            }
        };

        let slot = Slot {
            x: MARGIN_LEFT + cursor * layout.time_scale,
            y,
            width: (duration * layout.time_scale).max(MIN_CLIP_WIDTH),
            height,
        };
        log::trace!("{} '{}' at x={:.2} w={:.2}", item.kind(), item.name(), slot.x, slot.width);

        let advances = match item {
            Item::Clip(clip) => {
                draw_clip(builder, clip, &slot, color)?;
                clip.visible()
            }
            Item::Gap(gap) => {
                draw_gap(builder, &format!("gap-{index}-{item_index}"), &slot)?;
                gap.visible()
            }
            // Transitions overlap their neighbours and never take up time
            Item::Transition(_) => {
                draw_transition(builder, &slot)?;
                false
            }
        };
        if advances {
            cursor += duration.max(0.0);
        }
    }

    builder.end_group()
}

fn draw_clip<W: Write>(
    builder: &mut SvgBuilder<W>,
    clip: &Clip,
    slot: &Slot,
    color: &str,
) -> io::Result<()> {
    let clip_id = format!("clip-{}", sanitize_id(clip.name()));
    let caption = match clip.name() {
        _ if slot.width <= MIN_CAPTION_WIDTH => None,
        "" => Some("Clip"),
        name => Some(name),
    };
    builder.write_rect(
        slot.x,
        slot.inset_y(),
        slot.width,
        slot.inset_height(),
        Some(color),
        Some(CLIP_STROKE),
        Some(&clip_id),
        Some("clip"),
        caption,
    )
}

fn draw_gap<W: Write>(builder: &mut SvgBuilder<W>, gap_id: &str, slot: &Slot) -> io::Result<()> {
    builder.write_rect(
        slot.x,
        slot.inset_y(),
        slot.width,
        slot.inset_height(),
        Some(GAP_COLOR),
        Some(GAP_STROKE),
        Some(gap_id),
        Some("gap"),
        None,
    )
}

/// Diagonal from the bottom-left to the top-right of the slot
fn draw_transition<W: Write>(builder: &mut SvgBuilder<W>, slot: &Slot) -> io::Result<()> {
    let top = slot.inset_y();
    let bottom = top + slot.inset_height();
    let path = format!(
        "M {:.2} {:.2} L {:.2} {:.2}",
        slot.x,
        bottom,
        slot.x + slot.width,
        top
    );
    builder.write_path(
        &path,
        Some("none"),
        Some(TRANSITION_COLOR),
        TRANSITION_STROKE_WIDTH,
        Some("transition"),
    )
}

/// Turns a display name into a token usable as an XML id.
///
/// Every character outside `[A-Za-z0-9_-]` becomes one underscore, and the
/// result is prefixed with `id_` unless it starts with a letter.
pub fn sanitize_id(name: &str) -> String {
    if name.is_empty() {
        return "unnamed".to_string();
    }

    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.starts_with(|c: char| c.is_ascii_alphabetic()) {
        sanitized
    } else {
        format!("id_{sanitized}")
    }
}
