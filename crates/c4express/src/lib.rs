//! c4express - Expand compact architecture diagram definitions into workspaces
//!
//! A library for turning a flat JSON definition of software systems,
//! containers, components, people, relationships, styles and one diagram
//! into a hierarchical C4 workspace document with a materialized view.
//!
//! # Quick Start
//!
//! ```rust
//! use c4express::transform;
//!
//! let definition = r#"{
//!     "elements": [
//!         {"type": "Person", "name": "User"},
//!         {"type": "Software System", "name": "A"}
//!     ],
//!     "relationships": [{"source": "User", "destination": "A", "description": "Uses"}],
//!     "type": "System Context",
//!     "scope": "A"
//! }"#;
//!
//! let result = transform(definition);
//! assert!(!result.has_errors());
//! let workspace = result.workspace.unwrap();
//! assert_eq!(workspace.views.system_context_views.len(), 1);
//! ```
//!
//! # Advanced Usage
//!
//! For more control, drive the stages yourself:
//!
//! ```rust
//! use c4express::prelude::*;
//!
//! let node: ElementDefinition =
//!     serde_json::from_str(r#"{"type": "Software System", "name": "Shop",
//!                              "containers": [{"name": "API"}]}"#).unwrap();
//!
//! let mut database = ModelDatabase::new();
//! ElementParser::new().parse(&node, &mut database).unwrap();
//!
//! assert_eq!(database.element_count(), 2);
//! assert_eq!(database.get_element("API").unwrap().parent_id, Some(1));
//! ```

pub mod core;
pub mod stages;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use core::*;
pub use stages::{Orchestrator, Transformation, Transformer};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Database, Definition, ElementDefinition, ElementKind, Messages, ModelError, Parser,
        PaperSize, RelationshipDefinition, StyleDefinition, View, ViewScope, Workspace,
    };
    pub use crate::stages::{
        DiagramParser, ElementParser, ModelDatabase, Orchestrator, RelationshipParser,
        StyleParser, Transformation, Transformer, ViewMaterializer,
    };
}

/// Transform a definition into a workspace and its messages
///
/// This is the simplest way to run the pipeline. A fresh state is used for
/// every call.
///
/// # Example
/// ```rust
/// use c4express::transform;
///
/// let result = transform("{ not json");
/// assert!(result.workspace.is_none());
/// assert_eq!(result.messages.errors().len(), 1);
/// ```
pub fn transform(definition: &str) -> Transformation {
    Orchestrator::new().run(definition)
}

/// Transform a definition and serialize the workspace as JSON
///
/// Errors and warnings recorded during the run are not reported here; use
/// [`transform`] to inspect them.
///
/// # Returns
/// * `Ok(String)` - The workspace JSON
/// * `Err` - If the definition could not be decoded
///
/// # Example
/// ```rust
/// use c4express::to_json;
///
/// let json = to_json(r#"{"type": "System Landscape"}"#, false).unwrap();
/// assert!(json.starts_with(r#"{"name":"Structurizr Express""#));
/// ```
pub fn to_json(definition: &str, pretty: bool) -> anyhow::Result<String> {
    let Transformation {
        workspace,
        messages,
    } = transform(definition);

    let Some(workspace) = workspace else {
        let reason = messages
            .errors()
            .first()
            .map(|message| message.message.clone())
            .unwrap_or_else(|| "unknown error".to_string());
        anyhow::bail!("No workspace produced: {}", reason);
    };

    let json = if pretty {
        serde_json::to_string_pretty(&workspace)?
    } else {
        serde_json::to_string(&workspace)?
    };
    Ok(json)
}
