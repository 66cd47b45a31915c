//! View records
//!
//! A view's [`ViewScope`] carries its type and the identifiers that anchor it;
//! the materialized member lists are filled in by the view stage.

use serde::Serialize;

use super::{ModelId, PaperSize, Vertex};

/// Key given to every produced view
pub const VIEW_KEY: &str = "express";

/// The view type together with the element(s) it is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ViewScope {
    SystemLandscape,
    SystemContext {
        #[serde(rename = "softwareSystemId")]
        software_system_id: ModelId,
    },
    Container {
        #[serde(rename = "softwareSystemId")]
        software_system_id: ModelId,
    },
    Component {
        #[serde(rename = "softwareSystemId")]
        software_system_id: ModelId,
        #[serde(rename = "containerId")]
        container_id: ModelId,
    },
    Dynamic {
        #[serde(rename = "elementId", skip_serializing_if = "Option::is_none")]
        element_id: Option<ModelId>,
    },
}

impl ViewScope {
    pub fn is_dynamic(&self) -> bool {
        matches!(self, ViewScope::Dynamic { .. })
    }
}

/// An element placed on a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementView {
    pub id: ModelId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
}

/// A relationship placed on a view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipView {
    pub id: ModelId,
    /// Present on dynamic views only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertices: Option<Vec<Vertex>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<serde_json::Value>,
}

/// The single view produced by a run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    #[serde(flatten)]
    pub scope: ViewScope,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub paper_size: PaperSize,
    pub elements: Vec<ElementView>,
    pub relationships: Vec<RelationshipView>,
}

impl View {
    /// Create a view with no members yet
    pub fn new(scope: ViewScope, description: Option<String>, paper_size: PaperSize) -> Self {
        Self {
            scope,
            key: VIEW_KEY.to_string(),
            description,
            paper_size,
            elements: Vec::new(),
            relationships: Vec::new(),
        }
    }

    pub fn element_ids(&self) -> Vec<ModelId> {
        self.elements.iter().map(|element| element.id).collect()
    }

    pub fn relationship_ids(&self) -> Vec<ModelId> {
        self.relationships
            .iter()
            .map(|relationship| relationship.id)
            .collect()
    }
}
