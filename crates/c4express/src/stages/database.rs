//! Model database implementation
//!
//! The per-run store behind every stage: the id counter, the model tree, the
//! name registry, the flat relationship list, styles and the message lists.
//! A fresh database is created for each run; nothing survives between runs.

use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::{debug, trace};

use crate::core::{
    Component, Container, Coordinate, Database, ElementKind, ElementStyle, Enterprise, Messages,
    Model, ModelError, ModelId, Person, Relationship, RelationshipStyle, SoftwareSystem, Styles,
    Workspace,
};

/// Position of an element inside the model tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    SoftwareSystem(usize),
    Container(usize, usize),
    Component(usize, usize, usize),
    Person(usize),
}

/// Registry record for one element
///
/// Holds what the view stage needs without walking the tree. `parent_id` is a
/// lookup key only; ownership lives in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementEntry {
    pub id: ModelId,
    pub name: String,
    pub kind: ElementKind,
    pub parent_id: Option<ModelId>,
    pub position: Coordinate,
    slot: Slot,
}

/// Model database
///
/// Elements are indexed by name in registration order, and by id.
#[derive(Debug, Default)]
pub struct ModelDatabase {
    last_id: ModelId,
    model: Model,
    registry: IndexMap<String, ElementEntry>,
    positions: HashMap<ModelId, usize>,
    relationships: Vec<Relationship>,
    styles: Styles,
    messages: Messages,
}

impl ModelDatabase {
    /// Create a new empty database
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn messages_mut(&mut self) -> &mut Messages {
        &mut self.messages
    }

    /// Check whether an element name is already taken
    pub fn has_element(&self, name: &str) -> bool {
        self.registry.contains_key(name)
    }

    fn register(
        &mut self,
        id: ModelId,
        name: &str,
        kind: ElementKind,
        parent_id: Option<ModelId>,
        position: Coordinate,
        slot: Slot,
    ) {
        let entry = ElementEntry {
            id,
            name: name.to_string(),
            kind,
            parent_id,
            position,
            slot,
        };
        let (index, _) = self.registry.insert_full(name.to_string(), entry);
        self.positions.insert(id, index);
        debug!(id, name, kind = %kind, "Registered element");
    }

    fn ensure_unique(&self, name: &str) -> Result<(), ModelError> {
        if self.has_element(name) {
            Err(ModelError::duplicate_name(name))
        } else {
            Ok(())
        }
    }

    fn slot_of(&self, id: ModelId) -> Option<Slot> {
        self.get_element_by_id(id).map(|entry| entry.slot)
    }

    /// Add a top-level software system
    pub fn add_software_system(&mut self, system: SoftwareSystem) -> Result<ModelId, ModelError> {
        self.ensure_unique(&system.name)?;
        let id = system.id;
        let name = system.name.clone();
        let position = Coordinate {
            x: system.x,
            y: system.y,
        };
        self.model.software_systems.push(system);
        let slot = Slot::SoftwareSystem(self.model.software_systems.len() - 1);
        self.register(id, &name, ElementKind::SoftwareSystem, None, position, slot);
        Ok(id)
    }

    /// Add a person
    pub fn add_person(&mut self, person: Person) -> Result<ModelId, ModelError> {
        self.ensure_unique(&person.name)?;
        let id = person.id;
        let name = person.name.clone();
        let position = Coordinate {
            x: person.x,
            y: person.y,
        };
        self.model.people.push(person);
        let slot = Slot::Person(self.model.people.len() - 1);
        self.register(id, &name, ElementKind::Person, None, position, slot);
        Ok(id)
    }

    /// Add a container under the software system with id `container.parent_id`
    pub fn add_container(&mut self, container: Container) -> Result<ModelId, ModelError> {
        self.ensure_unique(&container.name)?;
        let Some(Slot::SoftwareSystem(system)) = self.slot_of(container.parent_id) else {
            return Err(ModelError::UnknownElement {
                id: container.parent_id,
            });
        };
        let id = container.id;
        let parent_id = container.parent_id;
        let name = container.name.clone();
        let position = Coordinate {
            x: container.x,
            y: container.y,
        };
        let containers = &mut self.model.software_systems[system].containers;
        containers.push(container);
        let slot = Slot::Container(system, containers.len() - 1);
        self.register(
            id,
            &name,
            ElementKind::Container,
            Some(parent_id),
            position,
            slot,
        );
        Ok(id)
    }

    /// Add a component under the container with id `component.parent_id`
    pub fn add_component(&mut self, component: Component) -> Result<ModelId, ModelError> {
        self.ensure_unique(&component.name)?;
        let Some(Slot::Container(system, container)) = self.slot_of(component.parent_id) else {
            return Err(ModelError::UnknownElement {
                id: component.parent_id,
            });
        };
        let id = component.id;
        let parent_id = component.parent_id;
        let name = component.name.clone();
        let position = Coordinate {
            x: component.x,
            y: component.y,
        };
        let components = &mut self.model.software_systems[system].containers[container].components;
        components.push(component);
        let slot = Slot::Component(system, container, components.len() - 1);
        self.register(
            id,
            &name,
            ElementKind::Component,
            Some(parent_id),
            position,
            slot,
        );
        Ok(id)
    }

    /// Add a relationship to the flat list and to its source element
    pub fn add_relationship(&mut self, relationship: Relationship) -> Result<ModelId, ModelError> {
        let source = self.slot_of(relationship.source_id);
        let list = match source {
            Some(Slot::SoftwareSystem(s)) => &mut self.model.software_systems[s].relationships,
            Some(Slot::Person(p)) => &mut self.model.people[p].relationships,
            Some(Slot::Container(s, c)) => {
                &mut self.model.software_systems[s].containers[c].relationships
            }
            Some(Slot::Component(s, c, k)) => {
                &mut self.model.software_systems[s].containers[c].components[k].relationships
            }
            None => {
                return Err(ModelError::UnknownElement {
                    id: relationship.source_id,
                })
            }
        };
        list.push(relationship.clone());
        let id = relationship.id;
        trace!(
            id,
            source_id = relationship.source_id,
            destination_id = relationship.destination_id,
            "Registered relationship"
        );
        self.relationships.push(relationship);
        Ok(id)
    }

    pub fn add_element_style(&mut self, style: ElementStyle) {
        self.styles.elements.push(style);
    }

    pub fn add_relationship_style(&mut self, style: RelationshipStyle) {
        self.styles.relationships.push(style);
    }

    pub fn set_enterprise(&mut self, enterprise: Enterprise) {
        self.model.enterprise = Some(enterprise);
    }

    /// Consume the database, producing the workspace (with no views yet) and
    /// the run's messages
    pub fn into_workspace(self) -> (Workspace, Messages) {
        (Workspace::new(self.model, self.styles), self.messages)
    }
}

impl Database for ModelDatabase {
    type Element = ElementEntry;
    type Relationship = Relationship;

    fn next_id(&mut self) -> ModelId {
        self.last_id += 1;
        self.last_id
    }

    fn get_element(&self, name: &str) -> Option<&ElementEntry> {
        self.registry.get(name)
    }

    fn get_element_by_id(&self, id: ModelId) -> Option<&ElementEntry> {
        let index = *self.positions.get(&id)?;
        self.registry.get_index(index).map(|(_, entry)| entry)
    }

    fn elements(&self) -> impl Iterator<Item = &ElementEntry> {
        self.registry.values()
    }

    fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.iter()
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    fn element_count(&self) -> usize {
        self.registry.len()
    }

    fn relationship_count(&self) -> usize {
        self.relationships.len()
    }
}
