//! Pipeline orchestrator for turning a definition into a workspace
//!
//! The orchestrator manages the flow of data through every stage:
//! Sanitize → Decode → Elements → Relationships → Styles → Diagram → View
//!
//! Each run gets its own [`ModelDatabase`], so runs never share ids, names or
//! messages.

use serde::Serialize;
use tracing::{debug, info, span, trace, Level};

use crate::core::{
    sanitize_definition, Database, Definition, Message, Messages, Parser, TransformError,
    Workspace,
};

use super::{
    DiagramParser, ElementParser, ModelDatabase, RelationshipParser, StyleParser,
    ViewMaterializer,
};

/// Outcome of one run
///
/// `workspace` is `None` only when the definition could not be decoded; in
/// that case `messages` holds exactly one error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transformation {
    pub workspace: Option<Workspace>,
    #[serde(flatten)]
    pub messages: Messages,
}

impl Transformation {
    pub fn has_errors(&self) -> bool {
        self.messages.has_errors()
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.has_warnings()
    }
}

/// Pipeline orchestrator that runs every stage in order
pub struct Orchestrator {
    element_parser: ElementParser,
    relationship_parser: RelationshipParser,
    style_parser: StyleParser,
    diagram_parser: DiagramParser,
    materializer: ViewMaterializer,
}

impl Orchestrator {
    /// Create an orchestrator with every stage registered
    pub fn new() -> Self {
        Self {
            element_parser: ElementParser::new(),
            relationship_parser: RelationshipParser::new(),
            style_parser: StyleParser::new(),
            diagram_parser: DiagramParser::new(),
            materializer: ViewMaterializer::new(),
        }
    }

    /// Sanitize and decode the definition text
    pub fn decode(&self, definition: &str) -> Result<Definition, TransformError> {
        let decode_span = span!(Level::DEBUG, "pipeline_decode", input_len = definition.len());
        let _enter = decode_span.enter();

        let sanitized = sanitize_definition(definition);
        let value: serde_json::Value = serde_json::from_str(&sanitized)?;
        if !value.is_object() {
            return Err(TransformError::NotAnObject);
        }
        let decoded: Definition = serde_json::from_value(value)?;
        debug!(
            elements = decoded.elements().count(),
            relationships = decoded.relationships().count(),
            styles = decoded.styles().count(),
            "Definition decoded"
        );
        Ok(decoded)
    }

    /// Run the complete pipeline over a definition
    pub fn run(&self, definition: &str) -> Transformation {
        let run_span = span!(Level::INFO, "transform", input_len = definition.len());
        let _enter = run_span.enter();

        info!("Starting definition transform");

        let decoded = match self.decode(definition) {
            Ok(decoded) => decoded,
            Err(err) => {
                let mut messages = Messages::new();
                messages.error(err);
                return Transformation {
                    workspace: None,
                    messages,
                };
            }
        };

        let mut database = ModelDatabase::new();
        self.build_model(&decoded, &mut database);

        let diagram_span = span!(Level::DEBUG, "pipeline_diagram");
        let diagram_enter = diagram_span.enter();
        let view_definition = match self.diagram_parser.parse(&decoded, &mut database) {
            Ok(view_definition) => Some(view_definition),
            Err(err) => {
                database.messages_mut().error(err);
                None
            }
        };
        drop(diagram_enter);

        let view = view_definition.map(|view_definition| {
            self.materializer.materialize(view_definition, &database)
        });

        let (mut workspace, messages) = database.into_workspace();
        if let Some(view) = view {
            workspace.views.push(view);
        }

        info!(
            views = workspace.view_count(),
            errors = messages.errors().len(),
            warnings = messages.warnings().len(),
            "Transform completed"
        );

        Transformation {
            workspace: Some(workspace),
            messages,
        }
    }

    /// Run the element, relationship and style stages
    fn build_model(&self, decoded: &Definition, database: &mut ModelDatabase) {
        let element_span = span!(Level::DEBUG, "pipeline_elements");
        let element_enter = element_span.enter();
        for (index, element) in decoded.elements().enumerate() {
            trace!(index, parser = self.element_parser.name(), "Parsing node");
            if let Err(err) = self.element_parser.parse(element, database) {
                database.messages_mut().error(err);
            }
        }
        debug!(elements = database.element_count(), "Elements parsed");
        drop(element_enter);

        let relationship_span = span!(Level::DEBUG, "pipeline_relationships");
        let relationship_enter = relationship_span.enter();
        for (index, relationship) in decoded.relationships().enumerate() {
            trace!(index, parser = self.relationship_parser.name(), "Parsing node");
            if let Err(err) = self.relationship_parser.parse(relationship, database) {
                database.messages_mut().error(err);
            }
        }
        debug!(
            relationships = database.relationship_count(),
            "Relationships parsed"
        );
        drop(relationship_enter);

        self.style_parser.parse_all(decoded.styles(), database);
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

/// Stateful front end that keeps the messages of its most recent run
///
/// Every call to [`Transformer::transform`] starts from a clean state.
#[derive(Debug, Default)]
pub struct Transformer {
    messages: Messages,
}

impl Transformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform a definition, returning its workspace unless decoding failed
    pub fn transform(&mut self, definition: &str) -> Option<Workspace> {
        let Transformation {
            workspace,
            messages,
        } = Orchestrator::new().run(definition);
        self.messages = messages;
        workspace
    }

    pub fn has_errors(&self) -> bool {
        self.messages.has_errors()
    }

    pub fn errors(&self) -> &[Message] {
        self.messages.errors()
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.has_warnings()
    }

    pub fn warnings(&self) -> &[Message] {
        self.messages.warnings()
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }
}
