//! Element parsing stage
//!
//! Builds the element tree from the definition's `elements` array. Top-level
//! nodes are software systems or people; software systems own containers,
//! which own components. Every accepted element takes the next id from the
//! shared counter and is registered by name.

use tracing::{debug, trace};

use crate::core::validate::{parse_coordinate, split_position};
use crate::core::{
    non_empty, owned, Component, Container, Coordinate, Database, ElementDefinition, ElementKind,
    Location, Messages, ModelError, ModelId, Parser, Person, SoftwareSystem, Text,
};

use super::ModelDatabase;

/// Parse an optional `"x,y"` position, recording a warning per problem
///
/// An absent or empty position yields an empty coordinate without warnings.
pub fn parse_position(position: Option<&Text>, messages: &mut Messages) -> Coordinate {
    let Some(position) = non_empty(position) else {
        return Coordinate::default();
    };

    match split_position(position) {
        Ok((x, y)) => {
            let mut axis = |name: char, value: &str| match parse_coordinate(name, value) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    messages.warning(err);
                    None
                }
            };
            let x = axis('x', x);
            let y = axis('y', y);
            Coordinate { x, y }
        }
        Err(err) => {
            messages.warning(err);
            Coordinate::default()
        }
    }
}

/// Top-level element type accepted by [`ElementParser`]
fn top_level_kind(element_type: &str) -> Option<ElementKind> {
    match element_type.to_lowercase().as_str() {
        "software system" | "softwaresystem" => Some(ElementKind::SoftwareSystem),
        "person" => Some(ElementKind::Person),
        _ => None,
    }
}

/// Element parser
///
/// Parses one top-level element node together with its nested containers and
/// components. A rejected top-level node is returned as an error; rejected
/// nested nodes are recorded in the database's messages and skipped.
pub struct ElementParser;

impl ElementParser {
    pub fn new() -> Self {
        Self
    }

    fn required_name(node: &ElementDefinition, kind: ElementKind) -> Result<&str, ModelError> {
        non_empty(node.name.as_ref()).ok_or(ModelError::MissingName { kind })
    }

    fn parse_software_system(
        &self,
        node: &ElementDefinition,
        database: &mut ModelDatabase,
    ) -> Result<ModelId, ModelError> {
        let name = Self::required_name(node, ElementKind::SoftwareSystem)?;
        let id = database.next_id();
        let author_tags = non_empty(node.tags.as_ref());
        let position = parse_position(node.position.as_ref(), database.messages_mut());

        let system = SoftwareSystem {
            id,
            name: name.to_string(),
            description: owned(node.description.as_ref()),
            tags: ElementKind::SoftwareSystem.compose_tags(author_tags),
            location: author_tags.and_then(Location::from_tags),
            x: position.x,
            y: position.y,
            containers: Vec::new(),
            relationships: Vec::new(),
        };
        database.add_software_system(system)?;

        for child in node.containers() {
            if let Err(err) = self.parse_container(child, id, database) {
                database.messages_mut().error(err);
            }
        }
        Ok(id)
    }

    fn parse_container(
        &self,
        node: &ElementDefinition,
        software_system_id: ModelId,
        database: &mut ModelDatabase,
    ) -> Result<ModelId, ModelError> {
        let name = Self::required_name(node, ElementKind::Container)?;
        let id = database.next_id();
        let position = parse_position(node.position.as_ref(), database.messages_mut());

        let container = Container {
            id,
            parent_id: software_system_id,
            name: name.to_string(),
            description: owned(node.description.as_ref()),
            technology: owned(node.technology.as_ref()),
            tags: ElementKind::Container.compose_tags(non_empty(node.tags.as_ref())),
            x: position.x,
            y: position.y,
            components: Vec::new(),
            relationships: Vec::new(),
        };
        database.add_container(container)?;

        for child in node.components() {
            if let Err(err) = self.parse_component(child, id, database) {
                database.messages_mut().error(err);
            }
        }
        Ok(id)
    }

    fn parse_component(
        &self,
        node: &ElementDefinition,
        container_id: ModelId,
        database: &mut ModelDatabase,
    ) -> Result<ModelId, ModelError> {
        let name = Self::required_name(node, ElementKind::Component)?;
        let id = database.next_id();
        let position = parse_position(node.position.as_ref(), database.messages_mut());

        let component = Component {
            id,
            parent_id: container_id,
            name: name.to_string(),
            description: owned(node.description.as_ref()),
            technology: owned(node.technology.as_ref()),
            tags: ElementKind::Component.compose_tags(non_empty(node.tags.as_ref())),
            x: position.x,
            y: position.y,
            relationships: Vec::new(),
        };
        database.add_component(component)
    }

    fn parse_person(
        &self,
        node: &ElementDefinition,
        database: &mut ModelDatabase,
    ) -> Result<ModelId, ModelError> {
        let name = Self::required_name(node, ElementKind::Person)?;
        let id = database.next_id();
        let author_tags = non_empty(node.tags.as_ref());
        let position = parse_position(node.position.as_ref(), database.messages_mut());

        let person = Person {
            id,
            name: name.to_string(),
            description: owned(node.description.as_ref()),
            tags: ElementKind::Person.compose_tags(author_tags),
            location: author_tags.and_then(Location::from_tags),
            x: position.x,
            y: position.y,
            relationships: Vec::new(),
        };
        database.add_person(person)
    }
}

impl Default for ElementParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser<ModelDatabase> for ElementParser {
    type Node = ElementDefinition;
    type Output = ModelId;

    fn parse(
        &self,
        node: &ElementDefinition,
        database: &mut ModelDatabase,
    ) -> Result<ModelId, ModelError> {
        let Some(element_type) = non_empty(node.element_type.as_ref()) else {
            return Err(ModelError::MissingElementType);
        };
        let Some(kind) = top_level_kind(element_type) else {
            return Err(ModelError::InvalidElementType {
                element_type: element_type.to_string(),
            });
        };
        trace!(kind = %kind, name = ?non_empty(node.name.as_ref()), "Parsing element");

        let id = match kind {
            ElementKind::Person => self.parse_person(node, database)?,
            _ => self.parse_software_system(node, database)?,
        };
        debug!(id, kind = %kind, "Element accepted");
        Ok(id)
    }

    fn name(&self) -> &'static str {
        "element"
    }
}
