//! HTML preview page with one absolutely positioned box per area.

use easy_layout_core::Coordinates;

use crate::css::to_css;
use crate::escape_xml;

/// Options for the HTML preview page.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Page title
    pub title: String,
    /// CSS width of the container
    pub container_width: String,
    /// CSS height of the container
    pub container_height: String,
    /// CSS background of the container
    pub background: String,
    /// CSS background of each area box, if any
    pub area_background: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: "Layout preview".to_string(),
            container_width: "50vw".to_string(),
            container_height: "40vh".to_string(),
            background: "darkgray".to_string(),
            area_background: Some("lightgray".to_string()),
        }
    }
}

impl HtmlOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the container size as CSS lengths.
    pub fn with_container(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.container_width = width.into();
        self.container_height = height.into();
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    pub fn with_area_background(mut self, background: Option<String>) -> Self {
        self.area_background = background;
        self
    }
}

/// Export coordinates to a standalone HTML page.
pub fn export(coords: &Coordinates, options: &HtmlOptions) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    html.push_str(&format!("  <title>{}</title>\n", escape_xml(&options.title)));
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!(
        "  <div class=\"layout\" style=\"position: relative; background-color: {}; width: {}; height: {};\">\n",
        escape_xml(&options.background),
        escape_xml(&options.container_width),
        escape_xml(&options.container_height),
    ));

    let area_background = options
        .area_background
        .as_deref()
        .map(|bg| format!(" background-color: {};", escape_xml(bg)))
        .unwrap_or_default();

    for (name, rect) in coords {
        let name = escape_xml(name);
        html.push_str(&format!(
            "    <div data-area=\"{}\" style=\"{}{}\">{}</div>\n",
            name,
            to_css(rect),
            area_background,
            name
        ));
    }

    html.push_str("  </div>\n</body>\n</html>\n");

    tracing::debug!(areas = coords.len(), bytes = html.len(), "exported html preview");

    html
}
