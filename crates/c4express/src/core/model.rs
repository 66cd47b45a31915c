//! Workspace document model
//!
//! The output of a run: a model tree (software systems own containers, which
//! own components; people are flat), the style configuration and the views.
//! All records serialize with camelCase keys and omit absent optional fields.

use serde::Serialize;

use super::{ElementStyle, Location, ModelId, RelationshipStyle, Vertex, View, ViewScope};

/// Name given to every produced workspace
pub const WORKSPACE_NAME: &str = "Structurizr Express";

/// Root of the produced document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workspace {
    pub name: String,
    pub model: Model,
    pub views: Views,
}

impl Workspace {
    pub fn new(model: Model, styles: Styles) -> Self {
        Self {
            name: WORKSPACE_NAME.to_string(),
            model,
            views: Views::with_styles(styles),
        }
    }

    /// Total number of views across every view list
    pub fn view_count(&self) -> usize {
        self.views.all().count()
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(Model::default(), Styles::default())
    }
}

/// The architecture model
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub software_systems: Vec<SoftwareSystem>,
    pub people: Vec<Person>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise: Option<Enterprise>,
}

/// Enterprise boundary named by a system landscape diagram
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Enterprise {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct SoftwareSystem {
    pub id: ModelId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tags: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
    pub containers: Vec<Container>,
    pub relationships: Vec<Relationship>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct Container {
    pub id: ModelId,
    pub parent_id: ModelId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
    pub tags: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
    pub components: Vec<Component>,
    pub relationships: Vec<Relationship>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct Component {
    pub id: ModelId,
    pub parent_id: ModelId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
    pub tags: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
    pub relationships: Vec<Relationship>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct Person {
    pub id: ModelId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tags: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
    pub relationships: Vec<Relationship>,
}

/// Default relationship order when none (or an invalid one) is given
pub const DEFAULT_ORDER: i64 = 1;

/// A directed edge between two registered elements
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub id: ModelId,
    pub source_id: ModelId,
    pub destination_id: ModelId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
    pub order: i64,
    pub tags: String,
    pub vertices: Vec<Vertex>,
    /// Passed through unvalidated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing: Option<serde_json::Value>,
    /// Passed through unvalidated and unclamped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<serde_json::Value>,
}

/// View configuration: the validated style records
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Configuration {
    pub styles: Styles,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Styles {
    pub elements: Vec<ElementStyle>,
    pub relationships: Vec<RelationshipStyle>,
}

/// View lists, one per view type
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Views {
    pub configuration: Configuration,
    pub system_landscape_views: Vec<View>,
    pub system_context_views: Vec<View>,
    pub container_views: Vec<View>,
    pub component_views: Vec<View>,
    pub dynamic_views: Vec<View>,
}

impl Views {
    pub fn with_styles(styles: Styles) -> Self {
        Self {
            configuration: Configuration { styles },
            ..Default::default()
        }
    }

    /// Append a view to the list matching its type
    pub fn push(&mut self, view: View) {
        let list = match view.scope {
            ViewScope::SystemLandscape => &mut self.system_landscape_views,
            ViewScope::SystemContext { .. } => &mut self.system_context_views,
            ViewScope::Container { .. } => &mut self.container_views,
            ViewScope::Component { .. } => &mut self.component_views,
            ViewScope::Dynamic { .. } => &mut self.dynamic_views,
        };
        list.push(view);
    }

    /// Iterate over every view regardless of type
    pub fn all(&self) -> impl Iterator<Item = &View> {
        self.system_landscape_views
            .iter()
            .chain(&self.system_context_views)
            .chain(&self.container_views)
            .chain(&self.component_views)
            .chain(&self.dynamic_views)
    }
}
