//! View materialization stage
//!
//! Decides which registered elements and relationships appear on the single
//! view, and builds their on-view records. Elements are visited in
//! registration order; a relationship is shown only when both of its
//! endpoints are.

use std::collections::HashSet;
use tracing::{debug, span, trace, Level};

use crate::core::{
    Database, ElementKind, ElementView, ModelId, Relationship, RelationshipView, View, ViewScope,
};

use super::{ElementEntry, ViewDefinition};

/// Admission rule derived from a view's type and scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Membership {
    /// People and software systems (landscape, context, unscoped dynamic)
    PeopleAndSystems,
    /// People, other software systems, containers of `system`
    Containers { system: ModelId },
    /// People, systems other than `system`, containers other than
    /// `container`, components of `container`
    Components { system: ModelId, container: ModelId },
    /// Dynamic view scoped to a software system
    DynamicSystem { system: ModelId },
    /// Dynamic view scoped to a container inside `system`
    DynamicContainer { system: ModelId, container: ModelId },
    /// Dynamic view whose scope element is no longer registered
    Unrestricted,
}

impl Membership {
    fn for_scope<D>(scope: &ViewScope, database: &D) -> Self
    where
        D: Database<Element = ElementEntry>,
    {
        match *scope {
            ViewScope::SystemLandscape | ViewScope::SystemContext { .. } => {
                Membership::PeopleAndSystems
            }
            ViewScope::Container { software_system_id } => Membership::Containers {
                system: software_system_id,
            },
            ViewScope::Component {
                software_system_id,
                container_id,
            } => Membership::Components {
                system: software_system_id,
                container: container_id,
            },
            ViewScope::Dynamic { element_id: None } => Membership::PeopleAndSystems,
            ViewScope::Dynamic {
                element_id: Some(id),
            } => match database.get_element_by_id(id) {
                Some(entry) => match (entry.kind, entry.parent_id) {
                    (ElementKind::SoftwareSystem, _) => Membership::DynamicSystem { system: id },
                    (ElementKind::Container, Some(system)) => Membership::DynamicContainer {
                        system,
                        container: id,
                    },
                    _ => Membership::Unrestricted,
                },
                None => Membership::Unrestricted,
            },
        }
    }

    /// Decide whether an element belongs on the view
    fn admits(&self, element: &ElementEntry) -> bool {
        use ElementKind::*;

        let kind = element.kind;
        let admitted = match *self {
            Membership::PeopleAndSystems => matches!(kind, Person | SoftwareSystem),
            Membership::Containers { system } => match kind {
                Person => true,
                SoftwareSystem => element.id != system,
                Container => element.parent_id == Some(system),
                Component => false,
            },
            Membership::Components { system, container } => match kind {
                Person => true,
                SoftwareSystem => element.id != system,
                Container => element.id != container,
                Component => element.parent_id == Some(container),
            },
            Membership::DynamicSystem { system } => match kind {
                Person => true,
                SoftwareSystem => element.id != system,
                Container => element.parent_id == Some(system),
                Component => false,
            },
            Membership::DynamicContainer { system, container } => {
                if element.id == container || element.id == system {
                    false
                } else {
                    match kind {
                        Container => element.parent_id == Some(system),
                        Component => element.parent_id == Some(container),
                        Person | SoftwareSystem => true,
                    }
                }
            }
            Membership::Unrestricted => true,
        };

        if !admitted {
            debug!(
                id = element.id,
                name = %element.name,
                kind = %kind,
                rule = ?self,
                "Element not allowed in view"
            );
        }
        admitted
    }
}

/// View materializer
pub struct ViewMaterializer;

impl ViewMaterializer {
    pub fn new() -> Self {
        Self
    }

    /// Build the view for `definition` from everything registered in `database`
    pub fn materialize<D>(&self, definition: ViewDefinition, database: &D) -> View
    where
        D: Database<Element = ElementEntry, Relationship = Relationship>,
    {
        let span = span!(
            Level::INFO,
            "materialize_view",
            elements = database.element_count(),
            relationships = database.relationship_count()
        );
        let _enter = span.enter();

        let membership = Membership::for_scope(&definition.scope, database);
        trace!(membership = ?membership, "Admission rule selected");

        let dynamic = definition.scope.is_dynamic();
        let mut view = View::new(
            definition.scope,
            definition.description,
            definition.paper_size,
        );

        let mut admitted = HashSet::new();
        for element in database.elements() {
            if membership.admits(element) {
                admitted.insert(element.id);
                view.elements.push(ElementView {
                    id: element.id,
                    x: element.position.x,
                    y: element.position.y,
                });
            }
        }

        for relationship in database.relationships() {
            if !admitted.contains(&relationship.source_id)
                || !admitted.contains(&relationship.destination_id)
            {
                debug!(
                    id = relationship.id,
                    "Skipping relationship because the source/destination elements are not included on the view"
                );
                continue;
            }
            view.relationships.push(Self::relationship_view(relationship, dynamic));
        }

        debug!(
            elements = view.elements.len(),
            relationships = view.relationships.len(),
            "View materialized"
        );
        view
    }

    fn relationship_view(relationship: &Relationship, dynamic: bool) -> RelationshipView {
        RelationshipView {
            id: relationship.id,
            order: dynamic.then_some(relationship.order),
            vertices: (!relationship.vertices.is_empty()).then(|| relationship.vertices.clone()),
            routing: relationship.routing.clone(),
            position: relationship.position.clone(),
        }
    }
}

impl Default for ViewMaterializer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Definition, PaperSize, Parser, Vertex};
    use crate::stages::{DiagramParser, ElementParser, ModelDatabase, RelationshipParser};
    use serde_json::json;

    /// Two systems with containers and components, plus a person:
    ///
    /// - User (1)
    /// - S1 (2) > C1 (3) > K1 (4), K2 (5); C2 (6)
    /// - S2 (7) > C3 (8) > K3 (9)
    fn database() -> ModelDatabase {
        let definition: Definition = serde_json::from_value(json!({
            "elements": [
                {"type": "Person", "name": "User", "position": "10,20"},
                {"type": "Software System", "name": "S1", "containers": [
                    {"name": "C1", "components": [{"name": "K1"}, {"name": "K2"}]},
                    {"name": "C2"}
                ]},
                {"type": "Software System", "name": "S2", "containers": [
                    {"name": "C3", "components": [{"name": "K3"}]}
                ]}
            ],
            "relationships": [
                {"source": "User", "destination": "S1"},
                {"source": "User", "destination": "C1", "vertices": ["5,5"]},
                {"source": "C1", "destination": "C2", "order": "2", "routing": "Orthogonal"},
                {"source": "K1", "destination": "K2"},
                {"source": "C2", "destination": "S2", "position": 40}
            ]
        }))
        .unwrap();

        let mut db = ModelDatabase::new();
        for element in definition.elements() {
            ElementParser::new().parse(element, &mut db).unwrap();
        }
        for relationship in definition.relationships() {
            RelationshipParser::new().parse(relationship, &mut db).unwrap();
        }
        db
    }

    fn materialize(diagram: serde_json::Value) -> View {
        let mut db = database();
        let definition: Definition = serde_json::from_value(diagram).unwrap();
        let view_definition = DiagramParser::new().parse(&definition, &mut db).unwrap();
        ViewMaterializer::new().materialize(view_definition, &db)
    }

    #[test]
    fn test_system_context_shows_people_and_systems() {
        let view = materialize(json!({"type": "System Context", "scope": "S1"}));
        assert_eq!(view.element_ids(), vec![1, 2, 7]);
        // User -> S1 only
        assert_eq!(view.relationship_ids(), vec![10]);
        assert_eq!(view.paper_size, PaperSize::A5Landscape);
        assert_eq!(
            view.elements[0],
            ElementView {
                id: 1,
                x: Some(10),
                y: Some(20)
            }
        );
    }

    #[test]
    fn test_container_view_excludes_scope_and_foreign_containers() {
        let view = materialize(json!({"type": "Container", "scope": "S1"}));
        assert_eq!(view.element_ids(), vec![1, 3, 6, 7]);
        assert_eq!(view.relationship_ids(), vec![11, 12, 14]);
    }

    #[test]
    fn test_component_view() {
        let view = materialize(json!({"type": "Component", "scope": "C1"}));
        // User, K1, K2, C2, S2, C3
        assert_eq!(view.element_ids(), vec![1, 4, 5, 6, 7, 8]);
        assert_eq!(view.relationship_ids(), vec![13, 14]);
    }

    #[test]
    fn test_dynamic_without_scope() {
        let view = materialize(json!({"type": "Dynamic"}));
        assert_eq!(view.element_ids(), vec![1, 2, 7]);
        assert_eq!(view.relationships[0].order, Some(1));
    }

    #[test]
    fn test_dynamic_scoped_to_system() {
        let view = materialize(json!({"type": "Dynamic", "scope": "S1"}));
        assert_eq!(view.element_ids(), vec![1, 3, 6, 7]);
        let orders: Vec<_> = view.relationships.iter().map(|r| r.order).collect();
        assert_eq!(orders, vec![Some(1), Some(2), Some(1)]);
    }

    #[test]
    fn test_dynamic_scoped_to_container() {
        let view = materialize(json!({"type": "Dynamic", "scope": "C1"}));
        // User, K1, K2, C2 (sibling), S2; not C1, S1, C3, K3
        assert_eq!(view.element_ids(), vec![1, 4, 5, 6, 7]);
        assert_eq!(view.relationship_ids(), vec![13, 14]);
    }

    #[test]
    fn test_relationship_view_fields() {
        let view = materialize(json!({"type": "Container", "scope": "S1"}));
        let by_id = |id| view.relationships.iter().find(|r| r.id == id).unwrap();

        let with_vertex = by_id(11);
        assert_eq!(with_vertex.order, None);
        assert_eq!(with_vertex.vertices, Some(vec![Vertex { x: 5, y: 5 }]));
        assert_eq!(with_vertex.routing, None);

        assert_eq!(by_id(12).routing, Some(json!("Orthogonal")));
        assert_eq!(by_id(12).vertices, None);
        assert_eq!(by_id(14).position, Some(json!(40)));
    }

    #[test]
    fn test_landscape_keeps_description() {
        let view = materialize(json!({"type": "System Landscape", "description": "All"}));
        assert_eq!(view.description.as_deref(), Some("All"));
        assert_eq!(view.key, "express");
    }
}
