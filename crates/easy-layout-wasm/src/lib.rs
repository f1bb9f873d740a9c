//! WebAssembly bindings for the easy-layout engine.
//!
//! Every binding is a free function; nothing is kept between calls. UI state
//! (the template being edited, the container size) belongs to the caller.
//!
//! ## Example
//!
//! ```js
//! import { layoutFromTemplate } from 'easy-layout';
//!
//! const coords = layoutFromTemplate(`
//!   a a b
//!   c c b
//! `, { padding: 10, gap: 10, containerWidth: 200, containerHeight: 100 });
//!
//! // Each entry is ready to use as an inline style.
//! element.style.cssText = `position: absolute; top: ${coords.a.top}; left: ${coords.a.left};`;
//! ```

use easy_layout_compute::{compute_coordinates, compute_with_options, extract_spans, LayoutOptions};
use easy_layout_core::{Coordinates, EasyLayoutError, Grid, Spacing};
use easy_layout_parser::parse_template;
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;

mod types;

pub use types::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// Get the version of the engine.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Parse a template and compute its coordinates.
pub fn layout_from_template(
    source: &str,
    options: &LayoutOptions,
) -> Result<Coordinates, EasyLayoutError> {
    let grid = parse_template(source)?;
    Ok(compute_with_options(&grid, options)?)
}

/// Serialize maps as plain objects, so results can be used as style records.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn from_js<T: DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&format!("Invalid {}: {}", what, e)))
}

fn options_from_js(options: JsValue) -> Result<LayoutOptions, JsError> {
    let options: Option<LayoutOptions> = from_js(options, "layout options")?;
    Ok(options.unwrap_or_default())
}

/// Split template text into rows of area names.
#[wasm_bindgen(js_name = parseTemplate)]
pub fn parse_template_js(source: &str) -> Result<JsValue, JsError> {
    let grid = parse_template(source).map_err(|e| JsError::new(&format!("Parse error: {}", e)))?;
    to_js(&grid)
}

/// Derive `{ rowCount, columnCount, spans }` from a grid of area names.
#[wasm_bindgen(js_name = extractSpans)]
pub fn extract_spans_js(grid: JsValue) -> Result<JsValue, JsError> {
    let grid: Grid = from_js(grid, "grid")?;
    to_js(&extract_spans(&grid))
}

/// Compute one absolutely positioned percentage box per area.
///
/// `padding` and `gap` are numbers (absolute) or strings such as `"5%"`;
/// both default to 0.
#[wasm_bindgen(js_name = computeCoordinates)]
pub fn compute_coordinates_js(
    grid: JsValue,
    padding: JsValue,
    gap: JsValue,
    container_width: Option<f64>,
    container_height: Option<f64>,
) -> Result<JsValue, JsError> {
    let grid: Grid = from_js(grid, "grid")?;
    let padding: Option<Spacing> = from_js(padding, "padding")?;
    let gap: Option<Spacing> = from_js(gap, "gap")?;

    let coords = compute_coordinates(
        &grid,
        padding.unwrap_or_default(),
        gap.unwrap_or_default(),
        container_width,
        container_height,
    );
    to_js(&coords)
}

/// Compute coordinates with a full options object.
#[wasm_bindgen(js_name = computeWithOptions)]
pub fn compute_with_options_js(grid: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let grid: Grid = from_js(grid, "grid")?;
    let options = options_from_js(options)?;

    let coords = compute_with_options(&grid, &options)
        .map_err(|e| JsError::new(&format!("Layout error: {}", e)))?;
    to_js(&coords)
}

/// Parse template text and compute its coordinates in one call.
#[wasm_bindgen(js_name = layoutFromTemplate)]
pub fn layout_from_template_js(source: &str, options: JsValue) -> Result<JsValue, JsError> {
    let options = options_from_js(options)?;
    let coords = layout_from_template(source, &options).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&coords)
}

/// Render a template as a standalone HTML preview page.
#[wasm_bindgen(js_name = exportHtml)]
pub fn export_html_js(source: &str, options: JsValue, html_options: JsValue) -> Result<String, JsError> {
    let options = options_from_js(options)?;
    let html_options: Option<HtmlOptionsJs> = from_js(html_options, "HTML options")?;

    let coords = layout_from_template(source, &options).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(easy_layout_export::export_html(
        &coords,
        &html_options.unwrap_or_default().into_core(),
    ))
}

/// Render a template as an SVG preview.
#[wasm_bindgen(js_name = exportSvg)]
pub fn export_svg_js(source: &str, options: JsValue, svg_options: JsValue) -> Result<String, JsError> {
    let options = options_from_js(options)?;
    let svg_options: Option<SvgOptionsJs> = from_js(svg_options, "SVG options")?;

    let coords = layout_from_template(source, &options).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(easy_layout_export::export_svg(
        &coords,
        &svg_options.unwrap_or_default().into_core(),
    ))
}
