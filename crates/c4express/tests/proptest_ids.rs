//! Property-based invariant tests for the transform pipeline
//!
//! 1. Element and relationship ids are unique and increase in creation order
//! 2. Accepted element names are unique
//! 3. Every view member refers to a model entity
//! 4. No panics on arbitrary text or arbitrary definitions
//! 5. Determinism: the same definition yields the same result

use std::collections::HashSet;

use c4express::{transform, ModelId, Workspace};
use proptest::prelude::*;
use serde_json::{json, Value};

// ── Strategies ──────────────────────────────────────────────────────────

fn name_strategy() -> impl Strategy<Value = String> {
    // A small alphabet so duplicate names and dangling references are common
    prop_oneof![
        Just(String::new()),
        "[A-E]{1,2}",
        "<[a-b]>",
    ]
}

fn position_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        (0u32..500, 0u32..500).prop_map(|(x, y)| format!("{},{}", x, y)),
        "[0-9a-z,]{0,6}",
    ])
}

fn component_strategy() -> impl Strategy<Value = Value> {
    (name_strategy(), position_strategy())
        .prop_map(|(name, position)| json!({"name": name, "position": position}))
}

fn container_strategy() -> impl Strategy<Value = Value> {
    (
        name_strategy(),
        prop::collection::vec(component_strategy(), 0..3),
    )
        .prop_map(|(name, components)| json!({"name": name, "components": components}))
}

fn element_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        (name_strategy(), position_strategy()).prop_map(|(name, position)| {
            json!({"type": "Person", "name": name, "position": position})
        }),
        (
            name_strategy(),
            prop::collection::vec(container_strategy(), 0..3)
        )
            .prop_map(|(name, containers)| {
                json!({"type": "Software System", "name": name, "containers": containers})
            }),
        "[a-z ]{0,8}".prop_map(|element_type| json!({"type": element_type, "name": "Z"})),
    ]
}

fn relationship_strategy() -> impl Strategy<Value = Value> {
    (
        name_strategy(),
        name_strategy(),
        prop::option::of("[0-9a-z-]{0,3}"),
        prop::collection::vec("[0-9,]{0,5}", 0..3),
    )
        .prop_map(|(source, destination, order, vertices)| {
            json!({
                "source": source,
                "destination": destination,
                "order": order,
                "vertices": vertices
            })
        })
}

fn diagram_strategy() -> impl Strategy<Value = (String, String)> {
    (
        prop_oneof![
            Just("System Landscape".to_string()),
            Just("System Context".to_string()),
            Just("Container".to_string()),
            Just("Component".to_string()),
            Just("Dynamic".to_string()),
            "[A-Za-z ]{0,10}",
        ],
        name_strategy(),
    )
}

fn definition_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(element_strategy(), 0..6),
        prop::collection::vec(relationship_strategy(), 0..6),
        diagram_strategy(),
    )
        .prop_map(|(elements, relationships, (diagram_type, scope))| {
            json!({
                "elements": elements,
                "relationships": relationships,
                "type": diagram_type,
                "scope": scope
            })
            .to_string()
        })
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Every element id and name in serialization order, then every relationship id
fn collect_ids(workspace: &Workspace) -> (Vec<(ModelId, String)>, Vec<ModelId>) {
    let model = &workspace.model;
    let mut elements = Vec::new();
    let mut relationships = Vec::new();

    for system in &model.software_systems {
        elements.push((system.id, system.name.clone()));
        relationships.extend(system.relationships.iter().map(|r| r.id));
        for container in &system.containers {
            elements.push((container.id, container.name.clone()));
            relationships.extend(container.relationships.iter().map(|r| r.id));
            for component in &container.components {
                elements.push((component.id, component.name.clone()));
                relationships.extend(component.relationships.iter().map(|r| r.id));
            }
        }
    }
    for person in &model.people {
        elements.push((person.id, person.name.clone()));
        relationships.extend(person.relationships.iter().map(|r| r.id));
    }
    (elements, relationships)
}

fn is_strictly_increasing(ids: &[ModelId]) -> bool {
    ids.windows(2).all(|pair| pair[0] < pair[1])
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn ids_are_unique_and_positive(definition in definition_strategy()) {
        let result = transform(&definition);
        let workspace = result.workspace.unwrap();
        let (elements, relationships) = collect_ids(&workspace);

        let mut seen = HashSet::new();
        for id in elements.iter().map(|(id, _)| *id).chain(relationships.iter().copied()) {
            prop_assert!(id >= 1);
            prop_assert!(seen.insert(id), "duplicate id {}", id);
        }
    }

    #[test]
    fn element_ids_precede_relationship_ids(definition in definition_strategy()) {
        let workspace = transform(&definition).workspace.unwrap();
        let (elements, relationships) = collect_ids(&workspace);

        // Elements are all parsed before any relationship
        let max_element = elements.iter().map(|(id, _)| *id).max().unwrap_or(0);
        prop_assert!(relationships.iter().all(|id| *id > max_element));
    }

    #[test]
    fn nested_ids_increase_depth_first(definition in definition_strategy()) {
        let workspace = transform(&definition).workspace.unwrap();
        for system in &workspace.model.software_systems {
            let mut ids = vec![system.id];
            for container in &system.containers {
                ids.push(container.id);
                ids.extend(container.components.iter().map(|component| component.id));
            }
            prop_assert!(is_strictly_increasing(&ids));
        }
        let people: Vec<_> = workspace.model.people.iter().map(|person| person.id).collect();
        prop_assert!(is_strictly_increasing(&people));
    }

    #[test]
    fn element_names_are_unique(definition in definition_strategy()) {
        let workspace = transform(&definition).workspace.unwrap();
        let (elements, _) = collect_ids(&workspace);

        let mut names = HashSet::new();
        for (_, name) in &elements {
            prop_assert!(!name.is_empty());
            prop_assert!(names.insert(name.clone()), "duplicate name {}", name);
        }
    }

    #[test]
    fn view_members_exist_in_model(definition in definition_strategy()) {
        let workspace = transform(&definition).workspace.unwrap();
        let (elements, relationships) = collect_ids(&workspace);
        let element_ids: HashSet<_> = elements.iter().map(|(id, _)| *id).collect();
        let relationship_ids: HashSet<_> = relationships.into_iter().collect();

        prop_assert!(workspace.view_count() <= 1);
        for view in workspace.views.all() {
            for id in view.element_ids() {
                prop_assert!(element_ids.contains(&id));
            }
            for id in view.relationship_ids() {
                prop_assert!(relationship_ids.contains(&id));
            }
        }
    }

    #[test]
    fn transform_is_deterministic(definition in definition_strategy()) {
        let first = transform(&definition);
        let second = transform(&definition);
        prop_assert_eq!(first.workspace, second.workspace);
        prop_assert_eq!(first.messages, second.messages);
    }

    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{0,64}") {
        let result = transform(&text);
        if result.workspace.is_none() {
            prop_assert_eq!(result.messages.errors().len(), 1);
            prop_assert!(result.messages.warnings().is_empty());
        }
    }
}
