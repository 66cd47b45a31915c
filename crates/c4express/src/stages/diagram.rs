//! Diagram parsing stage
//!
//! Reads the single diagram descriptor (`type`, `scope`, `description`,
//! `size`) from the top of the definition and resolves it to a
//! [`ViewDefinition`]: the view type, the ids of its scope element(s), and
//! the paper size.

use tracing::debug;

use crate::core::{
    non_empty, owned, Database, Definition, ElementKind, Enterprise, ModelError, ModelId, PaperSize,
    Parser, ViewScope,
};

use super::{ElementEntry, ModelDatabase};

/// Diagram type names
pub const SYSTEM_LANDSCAPE: &str = "System Landscape";
pub const ENTERPRISE_CONTEXT: &str = "Enterprise Context";
pub const SYSTEM_CONTEXT: &str = "System Context";
pub const CONTAINER: &str = "Container";
pub const COMPONENT: &str = "Component";
pub const DYNAMIC: &str = "Dynamic";

/// A resolved diagram, ready to be materialized
#[derive(Debug, Clone, PartialEq)]
pub struct ViewDefinition {
    pub scope: ViewScope,
    pub description: Option<String>,
    pub paper_size: PaperSize,
}

/// Diagram parser
pub struct DiagramParser;

impl DiagramParser {
    pub fn new() -> Self {
        Self
    }

    fn lookup<'a>(
        database: &'a ModelDatabase,
        name: &str,
        expected: &'static str,
    ) -> Result<&'a ElementEntry, ModelError> {
        database
            .get_element(name)
            .ok_or_else(|| ModelError::scope_not_found(expected, name))
    }

    fn software_system_scope(database: &ModelDatabase, name: &str) -> Result<ModelId, ModelError> {
        let entry = Self::lookup(database, name, "software system")?;
        if entry.kind != ElementKind::SoftwareSystem {
            return Err(ModelError::ScopeNotSoftwareSystem {
                name: name.to_string(),
            });
        }
        Ok(entry.id)
    }

    fn resolve_scope(
        &self,
        diagram_type: &str,
        scope: &str,
        database: &ModelDatabase,
    ) -> Result<ViewScope, ModelError> {
        match diagram_type {
            SYSTEM_LANDSCAPE | ENTERPRISE_CONTEXT => Ok(ViewScope::SystemLandscape),
            SYSTEM_CONTEXT => Ok(ViewScope::SystemContext {
                software_system_id: Self::software_system_scope(database, scope)?,
            }),
            CONTAINER => Ok(ViewScope::Container {
                software_system_id: Self::software_system_scope(database, scope)?,
            }),
            COMPONENT => {
                let entry = Self::lookup(database, scope, "container")?;
                match (entry.kind, entry.parent_id) {
                    (ElementKind::Container, Some(software_system_id)) => Ok(ViewScope::Component {
                        software_system_id,
                        container_id: entry.id,
                    }),
                    _ => Err(ModelError::ScopeNotContainer {
                        name: scope.to_string(),
                    }),
                }
            }
            DYNAMIC if scope.is_empty() => Ok(ViewScope::Dynamic { element_id: None }),
            DYNAMIC => {
                let entry = Self::lookup(database, scope, "software system or container")?;
                match entry.kind {
                    ElementKind::SoftwareSystem | ElementKind::Container => {
                        Ok(ViewScope::Dynamic {
                            element_id: Some(entry.id),
                        })
                    }
                    _ => Err(ModelError::InvalidDynamicScope),
                }
            }
            _ => Err(ModelError::InvalidDiagramType),
        }
    }
}

impl Default for DiagramParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser<ModelDatabase> for DiagramParser {
    type Node = Definition;
    type Output = ViewDefinition;

    fn parse(
        &self,
        node: &Definition,
        database: &mut ModelDatabase,
    ) -> Result<ViewDefinition, ModelError> {
        let diagram_type = non_empty(node.diagram_type.as_ref()).unwrap_or_default();
        let scope_name = non_empty(node.scope.as_ref()).unwrap_or_default();

        let scope = self.resolve_scope(diagram_type, scope_name, database)?;
        if scope == ViewScope::SystemLandscape {
            database.set_enterprise(Enterprise {
                name: owned(node.scope.as_ref()),
            });
        }

        let paper_size = PaperSize::resolve(node.size.as_ref().map(|size| size.as_str()));
        debug!(diagram_type, scope = ?scope, paper_size = %paper_size, "Diagram resolved");

        Ok(ViewDefinition {
            scope,
            description: owned(node.description.as_ref()),
            paper_size,
        })
    }

    fn name(&self) -> &'static str {
        "diagram"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ElementDefinition;
    use crate::stages::ElementParser;
    use serde_json::json;

    /// System "S" (1) with container "C" (2) holding component "K" (3), and person "U" (4)
    fn database() -> ModelDatabase {
        let mut db = ModelDatabase::new();
        for value in [
            json!({"type": "Software System", "name": "S",
                   "containers": [{"name": "C", "components": [{"name": "K"}]}]}),
            json!({"type": "Person", "name": "U"}),
        ] {
            let node: ElementDefinition = serde_json::from_value(value).unwrap();
            ElementParser::new().parse(&node, &mut db).unwrap();
        }
        db
    }

    fn parse(value: serde_json::Value, db: &mut ModelDatabase) -> Result<ViewDefinition, ModelError> {
        let node: Definition = serde_json::from_value(value).unwrap();
        DiagramParser::new().parse(&node, db)
    }

    #[test]
    fn test_system_landscape_sets_enterprise() {
        let mut db = database();
        let view = parse(json!({"type": "Enterprise Context", "scope": "Acme"}), &mut db).unwrap();
        assert_eq!(view.scope, ViewScope::SystemLandscape);
        assert_eq!(
            db.model().enterprise,
            Some(Enterprise {
                name: Some("Acme".to_string())
            })
        );
    }

    #[test]
    fn test_system_context_and_container_scopes() {
        let mut db = database();
        let context = parse(json!({"type": "System Context", "scope": "S"}), &mut db).unwrap();
        assert_eq!(
            context.scope,
            ViewScope::SystemContext {
                software_system_id: 1
            }
        );
        let container = parse(json!({"type": "Container", "scope": "S"}), &mut db).unwrap();
        assert_eq!(
            container.scope,
            ViewScope::Container {
                software_system_id: 1
            }
        );
        assert_eq!(
            parse(json!({"type": "Container", "scope": "U"}), &mut db),
            Err(ModelError::ScopeNotSoftwareSystem {
                name: "U".to_string()
            })
        );
        assert_eq!(
            parse(json!({"type": "System Context", "scope": "Nope"}), &mut db),
            Err(ModelError::scope_not_found("software system", "Nope"))
        );
    }

    #[test]
    fn test_missing_scope_is_not_found() {
        let mut db = database();
        assert_eq!(
            parse(json!({"type": "System Context"}), &mut db),
            Err(ModelError::scope_not_found("software system", ""))
        );
    }

    #[test]
    fn test_component_scope() {
        let mut db = database();
        let view = parse(json!({"type": "Component", "scope": "C"}), &mut db).unwrap();
        assert_eq!(
            view.scope,
            ViewScope::Component {
                software_system_id: 1,
                container_id: 2
            }
        );
        assert_eq!(
            parse(json!({"type": "Component", "scope": "S"}), &mut db),
            Err(ModelError::ScopeNotContainer {
                name: "S".to_string()
            })
        );
        assert_eq!(
            parse(json!({"type": "Component", "scope": "X"}), &mut db),
            Err(ModelError::scope_not_found("container", "X"))
        );
    }

    #[test]
    fn test_dynamic_scopes() {
        let mut db = database();
        let unscoped = parse(json!({"type": "Dynamic"}), &mut db).unwrap();
        assert_eq!(unscoped.scope, ViewScope::Dynamic { element_id: None });

        let scoped = parse(json!({"type": "Dynamic", "scope": "C"}), &mut db).unwrap();
        assert_eq!(scoped.scope, ViewScope::Dynamic { element_id: Some(2) });

        assert_eq!(
            parse(json!({"type": "Dynamic", "scope": "K"}), &mut db),
            Err(ModelError::InvalidDynamicScope)
        );
        assert_eq!(
            parse(json!({"type": "Dynamic", "scope": "Q"}), &mut db),
            Err(ModelError::scope_not_found("software system or container", "Q"))
        );
    }

    #[test]
    fn test_diagram_type_is_exact() {
        let mut db = database();
        assert_eq!(
            parse(json!({"type": "system context", "scope": "S"}), &mut db),
            Err(ModelError::InvalidDiagramType)
        );
        assert_eq!(parse(json!({}), &mut db), Err(ModelError::InvalidDiagramType));
    }

    #[test]
    fn test_paper_size_and_description() {
        let mut db = database();
        let view = parse(
            json!({"type": "System Landscape", "size": "A3_Portrait", "description": "Everything"}),
            &mut db,
        )
        .unwrap();
        assert_eq!(view.paper_size, PaperSize::A3Portrait);
        assert_eq!(view.description.as_deref(), Some("Everything"));

        let fallback = parse(json!({"type": "System Landscape", "size": "a3_portrait"}), &mut db).unwrap();
        assert_eq!(fallback.paper_size, PaperSize::A5Landscape);
    }
}
