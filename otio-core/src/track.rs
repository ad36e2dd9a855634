//! Tracks and the stack that holds them

use crate::{Item, RationalTime, Result};
use std::fmt;

/// Media kind carried by a track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackKind {
    Video,
    Audio,
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackKind::Video => f.write_str("Video"),
            TrackKind::Audio => f.write_str("Audio"),
        }
    }
}

/// An ordered sequence of items played one after another
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    /// Display name
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Media kind
    pub kind: TrackKind,
    /// Items in playback order
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Item>,
}

impl Track {
    /// Creates an empty track
    pub fn new(name: impl Into<String>, kind: TrackKind) -> Self {
        Self {
            name: name.into(),
            kind,
            children: Vec::new(),
        }
    }

    /// Appends an item at the end of the track
    pub fn append_child(&mut self, item: impl Into<Item>) {
        self.children.push(item.into());
    }

    /// Returns the items in playback order
    pub fn children(&self) -> &[Item] {
        &self.children
    }

    /// Returns the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the media kind
    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    /// Total length of the track.
    ///
    /// Transitions overlap their neighbours, so only clips and gaps count.
    pub fn duration(&self) -> Result<RationalTime> {
        let mut total = RationalTime::default();
        for item in &self.children {
            if let Item::Transition(_) = item {
                continue;
            }
            total = total + item.duration()?;
        }
        Ok(total)
    }
}

/// A child of a stack
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Composable {
    Track(Track),
    Stack(Stack),
}

impl Composable {
    /// Returns the track if this child is one
    pub fn as_track(&self) -> Option<&Track> {
        match self {
            Composable::Track(track) => Some(track),
            Composable::Stack(_) => None,
        }
    }

    /// Length of the child
    pub fn duration(&self) -> Result<RationalTime> {
        match self {
            Composable::Track(track) => track.duration(),
            Composable::Stack(stack) => stack.duration(),
        }
    }
}

impl From<Track> for Composable {
    fn from(track: Track) -> Self {
        Composable::Track(track)
    }
}

impl From<Stack> for Composable {
    fn from(stack: Stack) -> Self {
        Composable::Stack(stack)
    }
}

/// Layers played in parallel, first child on top
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stack {
    /// Display name
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Layers, top to bottom
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Composable>,
}

impl Stack {
    /// Creates an empty stack
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Appends a layer below the existing ones
    pub fn append_child(&mut self, child: impl Into<Composable>) {
        self.children.push(child.into());
    }

    /// Returns the layers, top to bottom
    pub fn children(&self) -> &[Composable] {
        &self.children
    }

    /// Length of the longest layer
    pub fn duration(&self) -> Result<RationalTime> {
        let mut longest = RationalTime::default();
        for child in &self.children {
            let duration = child.duration()?;
            if duration.to_seconds() > longest.to_seconds() {
                longest = duration;
            }
        }
        Ok(longest)
    }
}
