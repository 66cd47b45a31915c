//! Style parsing stage
//!
//! Validates element and relationship style overrides. Each field is checked
//! on its own; an invalid field is recorded and dropped while the rest of the
//! record is kept.

use tracing::{debug, span, Level};

use crate::core::validate::{
    parse_boolean, parse_border, parse_color, parse_dashed, parse_integer, parse_percentage,
    parse_routing, parse_shape,
};
use crate::core::{
    non_empty, ElementStyle, Messages, RelationshipStyle, StyleDefinition, Text, ValidationError,
};

use super::ModelDatabase;

/// Style entry kind selected by the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    Element,
    Relationship,
}

impl StyleKind {
    /// Exact, case-sensitive match on the entry's `type`
    pub fn of(style: &StyleDefinition) -> Option<Self> {
        match style.style_type.as_ref().map(Text::as_str) {
            Some("element") => Some(StyleKind::Element),
            Some("relationship") => Some(StyleKind::Relationship),
            _ => None,
        }
    }
}

/// Run a validator over an optional field, recording a failure as an error
fn validated<T>(
    field: Option<&Text>,
    messages: &mut Messages,
    validate: impl FnOnce(&str) -> Result<T, ValidationError>,
) -> Option<T> {
    let value = non_empty(field)?;
    match validate(value) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            messages.error(err);
            None
        }
    }
}

/// Build an element style record
pub fn parse_element_style(style: &StyleDefinition, messages: &mut Messages) -> ElementStyle {
    ElementStyle {
        tag: non_empty(style.tag.as_ref()).map(str::to_string),
        width: validated(style.width.as_ref(), messages, |v| parse_integer("width", v)),
        height: validated(style.height.as_ref(), messages, |v| parse_integer("height", v)),
        background: validated(style.background.as_ref(), messages, |v| {
            parse_color("background", v)
        }),
        color: validated(style.color.as_ref(), messages, |v| parse_color("color", v)),
        border: validated(style.border.as_ref(), messages, parse_border),
        opacity: validated(style.opacity.as_ref(), messages, |v| {
            parse_percentage("opacity", v)
        }),
        font_size: validated(style.font_size.as_ref(), messages, |v| {
            parse_integer("font size", v)
        }),
        shape: validated(style.shape.as_ref(), messages, parse_shape),
        metadata: validated(style.metadata.as_ref(), messages, |v| {
            parse_boolean("metadata", v)
        }),
        description: validated(style.description.as_ref(), messages, |v| {
            parse_boolean("description", v)
        }),
    }
}

/// Build a relationship style record
pub fn parse_relationship_style(
    style: &StyleDefinition,
    messages: &mut Messages,
) -> RelationshipStyle {
    RelationshipStyle {
        tag: non_empty(style.tag.as_ref()).map(str::to_string),
        width: validated(style.width.as_ref(), messages, |v| parse_integer("width", v)),
        color: validated(style.color.as_ref(), messages, |v| parse_color("color", v)),
        opacity: validated(style.opacity.as_ref(), messages, |v| {
            parse_percentage("opacity", v)
        }),
        position: validated(style.position.as_ref(), messages, |v| {
            parse_percentage("position", v)
        }),
        font_size: validated(style.font_size.as_ref(), messages, |v| {
            parse_integer("font size", v)
        }),
        thickness: validated(style.thickness.as_ref(), messages, |v| {
            parse_integer("thickness", v)
        }),
        dashed: validated(style.dashed.as_ref(), messages, parse_dashed),
        routing: validated(style.routing.as_ref(), messages, parse_routing),
    }
}

/// Style stage
///
/// Appends every element and relationship style entry to the database,
/// whatever number of its fields survived validation.
pub struct StyleParser;

impl StyleParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse every style entry in order
    pub fn parse_all<'a>(
        &self,
        styles: impl IntoIterator<Item = &'a StyleDefinition>,
        database: &mut ModelDatabase,
    ) {
        let span = span!(Level::DEBUG, "parse_styles");
        let _enter = span.enter();

        for (index, style) in styles.into_iter().enumerate() {
            match StyleKind::of(style) {
                Some(StyleKind::Element) => {
                    let record = parse_element_style(style, database.messages_mut());
                    database.add_element_style(record);
                }
                Some(StyleKind::Relationship) => {
                    let record = parse_relationship_style(style, database.messages_mut());
                    database.add_relationship_style(record);
                }
                None => {
                    debug!(
                        index,
                        style_type = ?style.style_type.as_ref().map(Text::as_str),
                        "Ignoring style entry with unknown type"
                    );
                }
            }
        }

        debug!(
            element_styles = database.styles().elements.len(),
            relationship_styles = database.styles().relationships.len(),
            "Styles parsed"
        );
    }
}

impl Default for StyleParser {
    fn default() -> Self {
        Self::new()
    }
}
