//! Track items: clips, gaps and transitions

use crate::{Error, RationalTime, Result, TimeRange};

/// Points at the media a clip plays
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaReference {
    /// Location of the media
    #[cfg_attr(feature = "serde", serde(default))]
    pub target_url: String,
    /// Range of the media that is available, if known
    #[cfg_attr(feature = "serde", serde(default))]
    pub available_range: Option<TimeRange>,
}

impl MediaReference {
    /// Creates a new media reference
    pub fn new(target_url: impl Into<String>, available_range: Option<TimeRange>) -> Self {
        Self {
            target_url: target_url.into(),
            available_range,
        }
    }
}

/// A segment of media placed on a track
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clip {
    /// Display name
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Trimmed range of the media used by this clip
    #[cfg_attr(feature = "serde", serde(default))]
    pub source_range: Option<TimeRange>,
    /// Media backing this clip
    #[cfg_attr(feature = "serde", serde(default))]
    pub media_reference: Option<MediaReference>,
    /// Disabled clips still occupy the track but are not shown
    #[cfg_attr(feature = "serde", serde(default = "enabled_by_default"))]
    pub enabled: bool,
}

impl Clip {
    /// Creates an enabled clip
    pub fn new(
        name: impl Into<String>,
        source_range: Option<TimeRange>,
        media_reference: Option<MediaReference>,
    ) -> Self {
        Self {
            name: name.into(),
            source_range,
            media_reference,
            enabled: true,
        }
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Duration of the clip: its source range, falling back to the media's available range
    pub fn duration(&self) -> Result<RationalTime> {
        let duration = self
            .source_range
            .or_else(|| {
                self.media_reference
                    .as_ref()
                    .and_then(|media| media.available_range)
            })
            .map(|range| range.duration)
            .ok_or_else(|| Error::MissingDuration {
                kind: "Clip",
                name: self.name.clone(),
            })?;
        checked(duration, "Clip", &self.name)
    }

    /// Whether the clip contributes to playback
    pub fn visible(&self) -> bool {
        self.enabled
    }
}

/// Empty space on a track
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gap {
    /// Display name (usually empty)
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Extent of the gap
    pub source_range: TimeRange,
    /// Disabled gaps do not hold their place on the track
    #[cfg_attr(feature = "serde", serde(default = "enabled_by_default"))]
    pub enabled: bool,
}

impl Gap {
    /// Creates an unnamed gap of the given length
    pub fn with_duration(duration: RationalTime) -> Self {
        Self {
            name: String::new(),
            source_range: TimeRange::new(RationalTime::new(0.0, duration.rate), duration),
            enabled: true,
        }
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length of the gap
    pub fn duration(&self) -> Result<RationalTime> {
        checked(self.source_range.duration, "Gap", &self.name)
    }

    /// Whether the gap holds its place on the track
    pub fn visible(&self) -> bool {
        self.enabled
    }
}

/// Kind of blend performed by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionType {
    /// SMPTE cross dissolve
    SmpteDissolve,
    /// Application specific transition
    Custom(String),
}

/// A blend between the neighbouring items of a track
///
/// A transition overlaps the items around it: `in_offset` reaches back into
/// the previous item and `out_offset` forward into the next one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    /// Display name
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Kind of blend
    pub transition_type: TransitionType,
    /// Overlap with the previous item
    pub in_offset: RationalTime,
    /// Overlap with the next item
    pub out_offset: RationalTime,
}

impl Transition {
    /// Creates a new transition
    pub fn new(
        name: impl Into<String>,
        transition_type: TransitionType,
        in_offset: RationalTime,
        out_offset: RationalTime,
    ) -> Self {
        Self {
            name: name.into(),
            transition_type,
            in_offset,
            out_offset,
        }
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total overlap covered by the transition
    pub fn duration(&self) -> Result<RationalTime> {
        let in_offset = checked(self.in_offset, "Transition", &self.name)?;
        let out_offset = checked(self.out_offset, "Transition", &self.name)?;
        Ok(in_offset + out_offset)
    }

    /// Transitions never occupy time of their own
    pub fn visible(&self) -> bool {
        false
    }
}

/// Anything that can sit on a track
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Item {
    Clip(Clip),
    Gap(Gap),
    Transition(Transition),
}

impl Item {
    /// Duration of the wrapped item
    pub fn duration(&self) -> Result<RationalTime> {
        match self {
            Item::Clip(clip) => clip.duration(),
            Item::Gap(gap) => gap.duration(),
            Item::Transition(transition) => transition.duration(),
        }
    }

    /// Whether the wrapped item advances the track's playhead
    pub fn visible(&self) -> bool {
        match self {
            Item::Clip(clip) => clip.visible(),
            Item::Gap(gap) => gap.visible(),
            Item::Transition(transition) => transition.visible(),
        }
    }

    /// Display name of the wrapped item
    pub fn name(&self) -> &str {
        match self {
            Item::Clip(clip) => clip.name(),
            Item::Gap(gap) => gap.name(),
            Item::Transition(transition) => transition.name(),
        }
    }

    /// Short type label, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Item::Clip(_) => "Clip",
            Item::Gap(_) => "Gap",
            Item::Transition(_) => "Transition",
        }
    }
}

impl From<Clip> for Item {
    fn from(clip: Clip) -> Self {
        Item::Clip(clip)
    }
}

impl From<Gap> for Item {
    fn from(gap: Gap) -> Self {
        Item::Gap(gap)
    }
}

impl From<Transition> for Item {
    fn from(transition: Transition) -> Self {
        Item::Transition(transition)
    }
}

fn checked(time: RationalTime, kind: &'static str, name: &str) -> Result<RationalTime> {
    if time.is_invalid_time() {
        return Err(Error::InvalidTime {
            kind,
            name: name.to_string(),
        });
    }
    Ok(time)
}

#[cfg(feature = "serde")]
fn enabled_by_default() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seconds(secs: f64) -> RationalTime {
        RationalTime::from_seconds(secs, 24.0)
    }

    fn range(secs: f64) -> TimeRange {
        TimeRange::new(seconds(0.0), seconds(secs))
    }

    #[test]
    fn test_clip_duration_prefers_source_range() {
        let media = MediaReference::new("file:///a.mov", Some(range(100.0)));
        let clip = Clip::new("A", Some(range(10.0)), Some(media));
        assert_eq!(clip.duration().unwrap().to_seconds(), 10.0);
    }

    #[test]
    fn test_clip_duration_falls_back_to_media() {
        let media = MediaReference::new("file:///a.mov", Some(range(100.0)));
        let clip = Clip::new("A", None, Some(media));
        assert_eq!(clip.duration().unwrap().to_seconds(), 100.0);
    }

    #[test]
    fn test_clip_without_any_range_fails() {
        let clip = Clip::new("Orphan", None, Some(MediaReference::new("", None)));
        let err = clip.duration().unwrap_err();
        assert!(matches!(err, Error::MissingDuration { kind: "Clip", .. }));
        assert!(err.to_string().contains("Orphan"));
    }

    #[test]
    fn test_zero_rate_is_invalid() {
        let range = TimeRange::new(seconds(0.0), RationalTime::new(10.0, 0.0));
        let clip = Clip::new("Bad", Some(range), None);
        assert!(matches!(clip.duration(), Err(Error::InvalidTime { .. })));
    }

    #[test]
    fn test_transition_duration_and_visibility() {
        let dissolve = Transition::new(
            "Dissolve",
            TransitionType::SmpteDissolve,
            RationalTime::new(12.0, 24.0),
            RationalTime::new(12.0, 24.0),
        );
        assert_eq!(dissolve.duration().unwrap().to_seconds(), 1.0);
        assert!(!Item::from(dissolve).visible());
    }

    #[test]
    fn test_gap_is_unnamed_and_visible() {
        let gap = Item::from(Gap::with_duration(seconds(1.0)));
        assert_eq!(gap.name(), "");
        assert!(gap.visible());
        assert_eq!(gap.kind(), "Gap");
        assert_eq!(gap.duration().unwrap().to_seconds(), 1.0);
    }

    #[test]
    fn test_disabled_clip_is_not_visible() {
        let mut clip = Clip::new("Muted", Some(range(2.0)), None);
        clip.enabled = false;
        assert!(!Item::Clip(clip).visible());
    }
}
