//! Core error types for definition processing
//!
//! Three layers of failure exist in the pipeline:
//!
//! - [`TransformError`] aborts a whole run (the definition could not be decoded).
//! - [`ModelError`] rejects a single element, relationship or diagram.
//! - [`ValidationError`] rejects a single field value.
//!
//! Every `Display` string is the exact message recorded in the run's message
//! lists, so callers log `err.to_string()` without further formatting.

use thiserror::Error;

use super::{ElementKind, ModelId};

/// Failures that stop a run before any model is built
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Invalid definition JSON: {source}")]
    InvalidJson {
        #[from]
        source: serde_json::Error,
    },

    #[error("The definition must be a JSON object.")]
    NotAnObject,
}

/// Rejection of a single definition node
///
/// The node is dropped and processing continues with its siblings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Top-level elements must have a type of \"Person\" or \"Software System\".")]
    MissingElementType,

    #[error("Invalid element type of \"{element_type}\", top-level elements must have a type of \"Person\" or \"Software System\".")]
    InvalidElementType { element_type: String },

    #[error("{} must have a name.", .kind.plural_label())]
    MissingName { kind: ElementKind },

    #[error("An element named \"{name}\" already exists.")]
    DuplicateName { name: String },

    #[error("The relationship source must be specified.")]
    MissingSource,

    #[error("The relationship destination must be specified.")]
    MissingDestination,

    #[error("The relationship source element named \"{name}\" does not exist.")]
    UnknownSource { name: String },

    #[error("The relationship destination element named \"{name}\" does not exist.")]
    UnknownDestination { name: String },

    #[error("Diagram scope: the {expected} named \"{name}\" could not be found.")]
    ScopeNotFound { expected: &'static str, name: String },

    #[error("The element with the name \"{name}\" must be a software system.")]
    ScopeNotSoftwareSystem { name: String },

    #[error("The element with the name \"{name}\" must be a container.")]
    ScopeNotContainer { name: String },

    #[error("The diagram scope for a dynamic view must be a software system or container.")]
    InvalidDynamicScope,

    #[error("No element with id {id} has been registered.")]
    UnknownElement { id: ModelId },

    #[error("The diagram type must be \"System Landscape\", \"System Context\", \"Container\", \"Component\" or \"Dynamic\".")]
    InvalidDiagramType,
}

impl ModelError {
    /// Create a duplicate-name error
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Create a scope-not-found error for the given expected scope kind
    pub fn scope_not_found(expected: &'static str, name: impl Into<String>) -> Self {
        Self::ScopeNotFound {
            expected,
            name: name.into(),
        }
    }
}

/// Rejection of a single field value by a validator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The {field} of \"{value}\" is not an integer.")]
    NotInteger { field: &'static str, value: String },

    #[error("The {field} of \"{value}\" is not valid; must be an RGB hex value, e.g. \"#ffffff\".")]
    InvalidColor { field: &'static str, value: String },

    #[error("The border of \"{value}\" is not valid; it must be \"Solid\" or \"Dashed\".")]
    InvalidBorder { value: String },

    #[error("The shape of \"{value}\" is not valid; must be one of Box, RoundedBox, Circle, Ellipse, Hexagon, Person, Robot, Folder, Cylinder, Pipe, WebBrowser, MobileDevicePortrait or MobileDeviceLandscape.")]
    InvalidShape { value: String },

    #[error("The {field} value of \"{value}\" is not valid; must be one of true or false.")]
    InvalidBoolean { field: &'static str, value: String },

    #[error("Dashed must be \"true\" or \"false\".")]
    InvalidDashed { value: String },

    #[error("The routing of \"{value}\" is not valid; it must be \"Direct\" or \"Orthogonal\".")]
    InvalidRouting { value: String },

    #[error("\"{value}\" is not an x,y coordinate.")]
    NotCoordinatePair { value: String },

    #[error("The {axis} coordinate of \"{value}\" is not a positive integer.")]
    InvalidCoordinate { axis: char, value: String },
}

impl ValidationError {
    /// Create a not-an-integer error for a named field
    pub fn not_integer(field: &'static str, value: impl Into<String>) -> Self {
        Self::NotInteger {
            field,
            value: value.into(),
        }
    }

    /// Create an invalid-colour error for a named field
    pub fn invalid_color(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            field,
            value: value.into(),
        }
    }

    /// Create an invalid-boolean error for a named field
    pub fn invalid_boolean(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidBoolean {
            field,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_json_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: TransformError = source.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.starts_with("Invalid definition JSON:"));
    }

    #[test]
    fn test_missing_name_messages() {
        let cases = [
            (ElementKind::SoftwareSystem, "Software systems must have a name."),
            (ElementKind::Container, "Containers must have a name."),
            (ElementKind::Component, "Components must have a name."),
            (ElementKind::Person, "People must have a name."),
        ];
        for (kind, expected) in cases {
            assert_eq!(ModelError::MissingName { kind }.to_string(), expected);
        }
    }

    #[test]
    fn test_duplicate_name_error() {
        let error = ModelError::duplicate_name("API");
        assert_eq!(error.to_string(), "An element named \"API\" already exists.");
    }

    #[test]
    fn test_scope_not_found_error() {
        let error = ModelError::scope_not_found("container", "Web App");
        assert_eq!(
            error.to_string(),
            "Diagram scope: the container named \"Web App\" could not be found."
        );
    }

    #[test]
    fn test_not_integer_error() {
        let error = ValidationError::not_integer("font size", "big");
        assert_eq!(error.to_string(), "The font size of \"big\" is not an integer.");
    }

    #[test]
    fn test_coordinate_errors() {
        let pair = ValidationError::NotCoordinatePair {
            value: "10".to_string(),
        };
        assert_eq!(pair.to_string(), "\"10\" is not an x,y coordinate.");

        let axis = ValidationError::InvalidCoordinate {
            axis: 'y',
            value: "abc".to_string(),
        };
        assert_eq!(
            axis.to_string(),
            "The y coordinate of \"abc\" is not a positive integer."
        );
    }

    #[test]
    fn test_invalid_color_error() {
        let error = ValidationError::invalid_color("background", "red");
        assert!(error.to_string().contains("must be an RGB hex value"));
    }
}
