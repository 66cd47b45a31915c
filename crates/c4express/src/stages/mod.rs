//! Pipeline stages
//!
//! One module per stage of the definition pipeline, plus the orchestrator
//! that drives them in order.

pub mod database;
pub mod diagram;
pub mod element;
pub mod orchestrator;
pub mod relationship;
pub mod style;
pub mod view;

pub use database::{ElementEntry, ModelDatabase};
pub use diagram::{DiagramParser, ViewDefinition};
pub use element::{parse_position, ElementParser};
pub use orchestrator::{Orchestrator, Transformation, Transformer};
pub use relationship::RelationshipParser;
pub use style::{parse_element_style, parse_relationship_style, StyleKind, StyleParser};
pub use view::ViewMaterializer;
