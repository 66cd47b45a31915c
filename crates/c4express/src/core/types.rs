//! Core type definitions shared by every stage
//!
//! Identifiers, element kinds, locations and coordinates.

use serde::Serialize;
use std::fmt;

/// Identifier shared by elements and relationships
///
/// Allocated from a single counter per run, starting at 1.
pub type ModelId = u32;

/// The four kinds of architecture element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementKind {
    SoftwareSystem,
    Container,
    Component,
    Person,
}

impl ElementKind {
    /// Tag string every element of this kind starts with
    pub fn tag_prefix(&self) -> &'static str {
        match self {
            ElementKind::SoftwareSystem => "Element,Software System",
            ElementKind::Container => "Element,Container",
            ElementKind::Component => "Element,Component",
            ElementKind::Person => "Element,Person",
        }
    }

    /// Capitalized plural used in messages ("Containers must have a name.")
    pub fn plural_label(&self) -> &'static str {
        match self {
            ElementKind::SoftwareSystem => "Software systems",
            ElementKind::Container => "Containers",
            ElementKind::Component => "Components",
            ElementKind::Person => "People",
        }
    }

    /// Build the full tag string: the kind prefix plus any author tags
    pub fn compose_tags(&self, author_tags: Option<&str>) -> String {
        match author_tags.filter(|tags| !tags.is_empty()) {
            Some(tags) => format!("{},{}", self.tag_prefix(), tags),
            None => self.tag_prefix().to_string(),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::SoftwareSystem => write!(f, "SoftwareSystem"),
            ElementKind::Container => write!(f, "Container"),
            ElementKind::Component => write!(f, "Component"),
            ElementKind::Person => write!(f, "Person"),
        }
    }
}

/// Whether a software system or person sits inside or outside the enterprise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Location {
    Internal,
    External,
}

impl Location {
    /// Derive a location from a comma-separated tag list
    ///
    /// Tags are trimmed and compared case-insensitively; the last matching
    /// tag wins.
    pub fn from_tags(tags: &str) -> Option<Self> {
        tags.split(',')
            .filter_map(|tag| {
                let tag = tag.trim();
                if tag.eq_ignore_ascii_case("internal") {
                    Some(Location::Internal)
                } else if tag.eq_ignore_ascii_case("external") {
                    Some(Location::External)
                } else {
                    None
                }
            })
            .last()
    }
}

/// A possibly partial author-supplied position
///
/// Either axis may be absent when it was missing or failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Coordinate {
    pub x: Option<i64>,
    pub y: Option<i64>,
}

impl Coordinate {
    pub fn new(x: i64, y: i64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    /// Convert to a vertex when both axes are present
    pub fn to_vertex(self) -> Option<Vertex> {
        Some(Vertex {
            x: self.x?,
            y: self.y?,
        })
    }
}

/// A relationship routing waypoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Vertex {
    pub x: i64,
    pub y: i64,
}
