//! Style records keyed by tag
//!
//! Styles are validated here but applied by whatever renders the workspace.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Element border line style (matched case-insensitively)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Border {
    Solid,
    Dashed,
}

impl FromStr for Border {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "solid" => Ok(Border::Solid),
            "dashed" => Ok(Border::Dashed),
            _ => Err(ValidationError::InvalidBorder {
                value: s.to_string(),
            }),
        }
    }
}

/// Relationship line routing (matched case-insensitively)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Routing {
    Direct,
    Orthogonal,
}

impl FromStr for Routing {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" => Ok(Routing::Direct),
            "orthogonal" => Ok(Routing::Orthogonal),
            _ => Err(ValidationError::InvalidRouting {
                value: s.to_string(),
            }),
        }
    }
}

/// Element shapes (matched exactly)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Shape {
    Box,
    RoundedBox,
    Circle,
    Ellipse,
    Hexagon,
    Person,
    Robot,
    Folder,
    Cylinder,
    Pipe,
    WebBrowser,
    MobileDevicePortrait,
    MobileDeviceLandscape,
}

impl Shape {
    pub const ALL: [Shape; 13] = [
        Shape::Box,
        Shape::RoundedBox,
        Shape::Circle,
        Shape::Ellipse,
        Shape::Hexagon,
        Shape::Person,
        Shape::Robot,
        Shape::Folder,
        Shape::Cylinder,
        Shape::Pipe,
        Shape::WebBrowser,
        Shape::MobileDevicePortrait,
        Shape::MobileDeviceLandscape,
    ];
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for Shape {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.to_string() == s)
            .ok_or_else(|| ValidationError::InvalidShape {
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing: Option<Routing>,
}
