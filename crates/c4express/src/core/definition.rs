//! Input definition schema
//!
//! The flat JSON document authors write. Every field is optional at this
//! level; required fields are enforced by the stage that consumes them so a
//! missing value rejects one node instead of the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// A scalar field value
///
/// Definitions are usually hand-written, so numbers and booleans are accepted
/// wherever text is expected and converted to their JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "Scalar")]
pub struct Text(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl From<Scalar> for Text {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(text) => Text(text),
            Scalar::Number(number) => Text(number.to_string()),
            Scalar::Flag(flag) => Text(flag.to_string()),
        }
    }
}

impl Text {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text(value.to_string())
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The text of an optional field, treating an empty string as absent
pub fn non_empty(value: Option<&Text>) -> Option<&str> {
    value.map(Text::as_str).filter(|text| !text.is_empty())
}

/// Owned copy of an optional text field, keeping empty strings
pub fn owned(value: Option<&Text>) -> Option<String> {
    value.map(|text| text.as_str().to_string())
}

/// Decode an optional field, treating a value of the wrong shape as absent
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Decode an optional array of nodes
///
/// An entry of the wrong shape becomes an empty node, so the stage consuming
/// it rejects that entry alone. A non-array value is treated as absent.
fn lenient_nodes<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let serde_json::Value::Array(entries) = serde_json::Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    let nodes = entries
        .into_iter()
        .map(|entry| T::deserialize(entry).unwrap_or_default())
        .collect();
    Ok(Some(nodes))
}

/// Top-level definition document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Definition {
    #[serde(deserialize_with = "lenient_nodes")]
    pub elements: Option<Vec<ElementDefinition>>,
    #[serde(deserialize_with = "lenient_nodes")]
    pub relationships: Option<Vec<RelationshipDefinition>>,
    #[serde(deserialize_with = "lenient_nodes")]
    pub styles: Option<Vec<StyleDefinition>>,
    /// Diagram type
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub diagram_type: Option<Text>,
    /// Name of the element the diagram is scoped to
    #[serde(deserialize_with = "lenient")]
    pub scope: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<Text>,
    /// Paper size name
    #[serde(deserialize_with = "lenient")]
    pub size: Option<Text>,
}

impl Definition {
    pub fn elements(&self) -> impl Iterator<Item = &ElementDefinition> {
        self.elements.iter().flatten()
    }

    pub fn relationships(&self) -> impl Iterator<Item = &RelationshipDefinition> {
        self.relationships.iter().flatten()
    }

    pub fn styles(&self) -> impl Iterator<Item = &StyleDefinition> {
        self.styles.iter().flatten()
    }
}

/// An element node: a top-level software system or person, or a nested
/// container or component
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ElementDefinition {
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub element_type: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub technology: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub tags: Option<Text>,
    /// `"x,y"` position
    #[serde(deserialize_with = "lenient")]
    pub position: Option<Text>,
    #[serde(deserialize_with = "lenient_nodes")]
    pub containers: Option<Vec<ElementDefinition>>,
    #[serde(deserialize_with = "lenient_nodes")]
    pub components: Option<Vec<ElementDefinition>>,
}

impl ElementDefinition {
    pub fn containers(&self) -> impl Iterator<Item = &ElementDefinition> {
        self.containers.iter().flatten()
    }

    pub fn components(&self) -> impl Iterator<Item = &ElementDefinition> {
        self.components.iter().flatten()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RelationshipDefinition {
    /// Source element name
    #[serde(deserialize_with = "lenient")]
    pub source: Option<Text>,
    /// Destination element name
    #[serde(deserialize_with = "lenient")]
    pub destination: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub technology: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub tags: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub order: Option<Text>,
    /// `"x,y"` waypoints
    #[serde(deserialize_with = "lenient_nodes")]
    pub vertices: Option<Vec<Text>>,
    pub routing: Option<serde_json::Value>,
    pub position: Option<serde_json::Value>,
}

/// A style entry; `type` selects element or relationship style fields
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleDefinition {
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub style_type: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub tag: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub width: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub height: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub background: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub color: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub border: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub opacity: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub font_size: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub shape: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub metadata: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub thickness: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub position: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub dashed: Option<Text>,
    #[serde(deserialize_with = "lenient")]
    pub routing: Option<Text>,
}
