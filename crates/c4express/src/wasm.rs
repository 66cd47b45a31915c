//! WebAssembly bindings for c4express
//!
//! Browser-friendly wrappers around the pipeline. Results cross the boundary
//! as JSON strings.

use wasm_bindgen::prelude::*;

use crate::stages::Orchestrator;

/// Initialize WASM module
///
/// Sets up panic hooks and logging for better error messages in the browser.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    // Logs go to the browser console
    use crate::core::logging::init_logging;
    let _ = init_logging(Some("info"), None);
}

/// Transform a definition
///
/// # Arguments
/// * `definition` - The JSON definition text
///
/// # Returns
/// * JSON string with fields: workspace (null when the definition could not
///   be decoded), errors, warnings
#[wasm_bindgen]
pub fn transform_json(definition: &str) -> String {
    let result = Orchestrator::new().run(definition);
    match serde_json::to_string(&result) {
        Ok(json) => json,
        Err(e) => serde_json::json!({
            "workspace": null,
            "errors": [{ "message": format!("Could not serialize workspace: {}", e) }],
            "warnings": []
        })
        .to_string(),
    }
}

/// List the supported paper sizes with their pixel dimensions
#[wasm_bindgen]
pub fn paper_sizes_json() -> String {
    let sizes: Vec<_> = crate::core::PaperSize::ALL
        .iter()
        .map(|size| {
            let (width, height) = size.dimensions();
            serde_json::json!({ "name": size.name(), "width": width, "height": height })
        })
        .collect();
    serde_json::Value::Array(sizes).to_string()
}
