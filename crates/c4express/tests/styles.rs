//! Integration tests for style validation through the full pipeline

use c4express::transform;
use c4express::{Border, Routing, Shape, Styles};
use serde_json::json;

fn styles_of(styles: serde_json::Value) -> (Styles, Vec<String>) {
    let definition = json!({ "type": "System Landscape", "styles": styles }).to_string();
    let result = transform(&definition);
    let errors = result
        .messages
        .errors()
        .iter()
        .map(|message| message.message.clone())
        .collect();
    let styles = result.workspace.unwrap().views.configuration.styles;
    (styles, errors)
}

#[test]
fn test_opacity_and_position_are_clamped() {
    let (styles, errors) = styles_of(json!([
        {"type": "element", "tag": "Person", "opacity": "150"},
        {"type": "relationship", "tag": "Relationship", "opacity": "-5", "position": 250}
    ]));
    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(styles.elements[0].opacity, Some(100));
    assert_eq!(styles.relationships[0].opacity, Some(0));
    assert_eq!(styles.relationships[0].position, Some(100));
}

#[test]
fn test_element_style_fields() {
    let (styles, errors) = styles_of(json!([{
        "type": "element",
        "tag": "Database",
        "width": "450",
        "height": 300,
        "background": "#1168BD",
        "color": "#ffffff",
        "border": "dashed",
        "fontSize": "+24",
        "shape": "Cylinder",
        "metadata": "FALSE",
        "description": true
    }]));
    assert!(errors.is_empty(), "{:?}", errors);

    let style = &styles.elements[0];
    assert_eq!(style.tag.as_deref(), Some("Database"));
    assert_eq!(style.width, Some(450));
    assert_eq!(style.height, Some(300));
    assert_eq!(style.background.as_deref(), Some("#1168BD"));
    assert_eq!(style.border, Some(Border::Dashed));
    assert_eq!(style.font_size, Some(24));
    assert_eq!(style.shape, Some(Shape::Cylinder));
    assert_eq!(style.metadata, Some(false));
    assert_eq!(style.description, Some(true));
}

#[test]
fn test_invalid_fields_are_dropped_individually() {
    let (styles, errors) = styles_of(json!([{
        "type": "element",
        "tag": "Web",
        "width": "wide",
        "background": "blue",
        "shape": "box",
        "height": "200"
    }]));
    assert_eq!(
        errors,
        vec![
            "The width of \"wide\" is not an integer.",
            "The background of \"blue\" is not valid; must be an RGB hex value, e.g. \"#ffffff\".",
            "The shape of \"box\" is not valid; must be one of Box, RoundedBox, Circle, Ellipse, Hexagon, Person, Robot, Folder, Cylinder, Pipe, WebBrowser, MobileDevicePortrait or MobileDeviceLandscape.",
        ]
    );

    let style = &styles.elements[0];
    assert_eq!(style.width, None);
    assert_eq!(style.background, None);
    assert_eq!(style.shape, None);
    assert_eq!(style.height, Some(200));
}

#[test]
fn test_relationship_style_fields() {
    let (styles, errors) = styles_of(json!([{
        "type": "relationship",
        "tag": "Async",
        "thickness": "4",
        "dashed": "True",
        "routing": "orthogonal",
        "color": "#707070"
    }]));
    assert!(errors.is_empty(), "{:?}", errors);

    let style = &styles.relationships[0];
    assert_eq!(style.thickness, Some(4));
    assert_eq!(style.dashed, Some(true));
    assert_eq!(style.routing, Some(Routing::Orthogonal));
    assert_eq!(style.color.as_deref(), Some("#707070"));
}

#[test]
fn test_invalid_dashed_and_routing() {
    let (styles, errors) = styles_of(json!([
        {"type": "relationship", "dashed": "maybe", "routing": "Curved"}
    ]));
    assert_eq!(
        errors,
        vec![
            "Dashed must be \"true\" or \"false\".",
            "The routing of \"Curved\" is not valid; it must be \"Direct\" or \"Orthogonal\".",
        ]
    );
    assert_eq!(styles.relationships.len(), 1);
    assert_eq!(styles.relationships[0].dashed, None);
}

#[test]
fn test_unknown_style_types_are_ignored() {
    let (styles, errors) = styles_of(json!([
        {"type": "Element", "tag": "Wrong case"},
        {"tag": "No type"},
        {"type": "element", "tag": "Kept"}
    ]));
    assert!(errors.is_empty());
    assert_eq!(styles.elements.len(), 1);
    assert_eq!(styles.elements[0].tag.as_deref(), Some("Kept"));
    assert!(styles.relationships.is_empty());
}

#[test]
fn test_styles_serialize_under_configuration() {
    let definition = json!({
        "type": "System Landscape",
        "styles": [{"type": "element", "tag": "Person", "shape": "Person", "opacity": 80}]
    })
    .to_string();
    let value = serde_json::to_value(transform(&definition).workspace.unwrap()).unwrap();
    assert_eq!(
        value["views"]["configuration"]["styles"],
        json!({
            "elements": [{ "tag": "Person", "opacity": 80, "shape": "Person" }],
            "relationships": []
        })
    );
}
