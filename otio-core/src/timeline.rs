//! Top-level timeline

use crate::{RationalTime, Result, Stack};

/// A complete edit: a named stack of tracks
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeline {
    /// Display name
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Root track container
    #[cfg_attr(feature = "serde", serde(default))]
    pub tracks: Option<Stack>,
}

impl Timeline {
    /// Creates a timeline with an empty track stack
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: Some(Stack::new("tracks")),
        }
    }

    /// Creates a timeline with no track stack at all
    pub fn without_tracks(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: None,
        }
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the root track container, if any
    pub fn tracks(&self) -> Option<&Stack> {
        self.tracks.as_ref()
    }

    /// Returns the root track container for editing, if any
    pub fn tracks_mut(&mut self) -> Option<&mut Stack> {
        self.tracks.as_mut()
    }

    /// Replaces the root track container
    pub fn set_tracks(&mut self, tracks: Option<Stack>) {
        self.tracks = tracks;
    }

    /// Length of the timeline; zero when there is no track stack
    pub fn duration(&self) -> Result<RationalTime> {
        match &self.tracks {
            Some(stack) => stack.duration(),
            None => Ok(RationalTime::default()),
        }
    }

    /// Parses a timeline from its JSON representation
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parses a timeline from a JSON string
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the timeline to pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Clip, Error, TimeRange, Track, TrackKind};

    fn ten_second_timeline() -> Timeline {
        let mut track = Track::new("Video Track", TrackKind::Video);
        let range = TimeRange::new(RationalTime::new(0.0, 24.0), RationalTime::new(240.0, 24.0));
        track.append_child(Clip::new("Test Clip", Some(range), None));

        let mut timeline = Timeline::new("Test Timeline");
        timeline.tracks_mut().unwrap().append_child(track);
        timeline
    }

    #[test]
    fn test_duration() {
        assert_eq!(ten_second_timeline().duration().unwrap().to_seconds(), 10.0);
    }

    #[test]
    fn test_empty_timeline_has_zero_duration() {
        assert_eq!(Timeline::new("Empty").duration().unwrap().to_seconds(), 0.0);
        assert_eq!(Timeline::without_tracks("Bare").duration().unwrap().to_seconds(), 0.0);
    }

    #[test]
    fn test_duration_error_propagates() {
        let mut track = Track::new("V1", TrackKind::Video);
        track.append_child(Clip::new("Orphan", None, None));
        let mut timeline = Timeline::new("Broken");
        timeline.tracks_mut().unwrap().append_child(track);
        assert!(matches!(timeline.duration(), Err(Error::MissingDuration { .. })));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_roundtrip_keeps_structure() {
        let timeline = ten_second_timeline();
        let json = timeline.to_json_string().unwrap();
        assert_eq!(Timeline::from_json_str(&json).unwrap(), timeline);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_defaults() {
        let json = r#"{
            "name": "Loaded",
            "tracks": {
                "children": [
                    {
                        "type": "Track",
                        "kind": "Audio",
                        "children": [
                            {
                                "type": "Gap",
                                "source_range": {
                                    "start_time": { "value": 0.0, "rate": 48000.0 },
                                    "duration": { "value": 48000.0, "rate": 48000.0 }
                                }
                            }
                        ]
                    }
                ]
            }
        }"#;
        let timeline = Timeline::from_json_str(json).unwrap();
        let track = timeline.tracks().unwrap().children()[0].as_track().unwrap();
        assert_eq!(track.name(), "");
        assert_eq!(track.kind(), TrackKind::Audio);
        assert!(track.children()[0].visible());
        assert_eq!(timeline.duration().unwrap().to_seconds(), 1.0);
    }
}
