//! Relationship parsing stage
//!
//! Resolves source and destination names against the elements registered so
//! far. Resolution is single-pass: a name that was never registered (or whose
//! element was dropped) does not resolve, whatever appears later.

use tracing::{debug, trace};

use crate::core::validate::parse_integer;
use crate::core::{
    non_empty, owned, Database, ModelError, ModelId, Parser, Relationship, RelationshipDefinition,
    DEFAULT_ORDER,
};

use super::element::parse_position;
use super::ModelDatabase;

/// Tag every relationship starts with
pub const RELATIONSHIP_TAG: &str = "Relationship";

/// Relationship parser
pub struct RelationshipParser;

impl RelationshipParser {
    pub fn new() -> Self {
        Self
    }

    /// Validate `order`; an invalid value is recorded and replaced by the default
    fn order(node: &RelationshipDefinition, database: &mut ModelDatabase) -> i64 {
        let Some(order) = non_empty(node.order.as_ref()) else {
            return DEFAULT_ORDER;
        };
        parse_integer("order", order).unwrap_or_else(|err| {
            database.messages_mut().error(err);
            DEFAULT_ORDER
        })
    }
}

impl Default for RelationshipParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser<ModelDatabase> for RelationshipParser {
    type Node = RelationshipDefinition;
    type Output = ModelId;

    fn parse(
        &self,
        node: &RelationshipDefinition,
        database: &mut ModelDatabase,
    ) -> Result<ModelId, ModelError> {
        let source_name = non_empty(node.source.as_ref()).ok_or(ModelError::MissingSource)?;
        let destination_name =
            non_empty(node.destination.as_ref()).ok_or(ModelError::MissingDestination)?;
        trace!(source = source_name, destination = destination_name, "Parsing relationship");

        let order = Self::order(node, database);

        let source_id = database
            .get_element(source_name)
            .map(|entry| entry.id)
            .ok_or_else(|| ModelError::UnknownSource {
                name: source_name.to_string(),
            })?;
        let destination_id = database
            .get_element(destination_name)
            .map(|entry| entry.id)
            .ok_or_else(|| ModelError::UnknownDestination {
                name: destination_name.to_string(),
            })?;

        let id = database.next_id();
        let tags = match non_empty(node.tags.as_ref()) {
            Some(tags) => format!("{},{}", RELATIONSHIP_TAG, tags),
            None => RELATIONSHIP_TAG.to_string(),
        };

        let vertices = node
            .vertices
            .iter()
            .flatten()
            .filter_map(|vertex| {
                parse_position(Some(vertex), database.messages_mut()).to_vertex()
            })
            .collect();

        let relationship = Relationship {
            id,
            source_id,
            destination_id,
            description: owned(node.description.as_ref()),
            technology: owned(node.technology.as_ref()),
            order,
            tags,
            vertices,
            routing: node.routing.clone(),
            position: node.position.clone(),
        };
        database.add_relationship(relationship)?;
        debug!(id, source_id, destination_id, "Relationship accepted");
        Ok(id)
    }

    fn name(&self) -> &'static str {
        "relationship"
    }
}
