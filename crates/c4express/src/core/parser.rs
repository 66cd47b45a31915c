//! Core parser trait for definition nodes
//!
//! Each parsing stage turns one kind of definition node into model records in
//! a [`Database`]. A returned [`ModelError`] means the node was rejected; the
//! caller records it and moves on to the next sibling. Field-level problems
//! inside an accepted node are recorded by the parser itself.

use super::{Database, ModelError};

/// Core trait for definition node parsers
///
/// # Example
/// ```
/// use c4express::core::{Database, ElementDefinition, Parser};
/// use c4express::stages::{ElementParser, ModelDatabase};
///
/// let node: ElementDefinition =
///     serde_json::from_str(r#"{"type": "Person", "name": "User"}"#).unwrap();
/// let mut database = ModelDatabase::new();
/// let id = ElementParser::new().parse(&node, &mut database).unwrap();
/// assert_eq!(id, 1);
/// assert_eq!(database.element_count(), 1);
/// ```
pub trait Parser<D: Database>: Send + Sync {
    /// Definition node consumed by this parser
    type Node;

    /// Value produced for an accepted node
    type Output;

    /// Parse one node into the provided database
    fn parse(&self, node: &Self::Node, database: &mut D) -> Result<Self::Output, ModelError>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;
}
