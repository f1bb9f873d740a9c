//! SVG preview of computed coordinates.

use easy_layout_core::{Coordinates, Rectangle};

use crate::escape_xml;

/// Options for SVG export.
#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Container width in pixels
    pub width: f64,
    /// Container height in pixels
    pub height: f64,
    /// Container fill
    pub background: String,
    /// Area fill
    pub fill: String,
    /// Area outline
    pub stroke: String,
    /// Draw each area's name at its center
    pub labels: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            background: "#a9a9a9".to_string(),
            fill: "#d3d3d3".to_string(),
            stroke: "#333333".to_string(),
            labels: true,
        }
    }
}

impl SvgOptions {
    /// Set the container size in pixels.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }
}

/// Pixel box of a percentage rectangle inside a `width × height` container.
fn to_pixels(rect: &Rectangle, width: f64, height: f64) -> (f64, f64, f64, f64) {
    (
        rect.left.value() * width / 100.0,
        rect.top.value() * height / 100.0,
        rect.width.value() * width / 100.0,
        rect.height.value() * height / 100.0,
    )
}

/// Export coordinates to SVG.
///
/// Areas with a negative width or height are skipped; SVG rejects them.
pub fn export(coords: &Coordinates, options: &SvgOptions) -> String {
    let width = options.width.max(1.0);
    let height = options.height.max(1.0);

    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
"#,
        width, height, width, height
    ));

    svg.push_str(&format!(
        "  <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\" />\n",
        width,
        height,
        escape_xml(&options.background)
    ));

    for (name, rect) in coords {
        let (x, y, w, h) = to_pixels(rect, width, height);
        if !(w >= 0.0 && h >= 0.0) {
            tracing::warn!(area = %name, width = w, height = h, "skipping area with negative size");
            continue;
        }

        let name = escape_xml(name);
        svg.push_str(&format!("  <g data-area=\"{}\">\n", name));
        svg.push_str(&format!(
            "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\" />\n",
            x,
            y,
            w,
            h,
            escape_xml(&options.fill),
            escape_xml(&options.stroke)
        ));
        if options.labels {
            svg.push_str(&format!(
                "    <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\">{}</text>\n",
                x + w / 2.0,
                y + h / 2.0,
                name
            ));
        }
        svg.push_str("  </g>\n");
    }

    svg.push_str("</svg>\n");

    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixels() {
        let rect = Rectangle::new(10.0, 25.0, 50.0, 80.0);
        assert_eq!(to_pixels(&rect, 800.0, 600.0), (200.0, 60.0, 400.0, 480.0));
    }

    #[test]
    fn test_export_rects() {
        let mut coords = Coordinates::new();
        coords.insert("a".into(), Rectangle::new(0.0, 0.0, 50.0, 100.0));
        coords.insert("b".into(), Rectangle::new(0.0, 50.0, 50.0, 100.0));

        let svg = export(&coords, &SvgOptions::default().with_size(200.0, 100.0));

        assert!(svg.contains("viewBox=\"0 0 200 100\""));
        assert!(svg.contains("<rect x=\"100\" y=\"0\" width=\"100\" height=\"100\""));
        assert!(svg.contains(">b</text>"));
        assert_eq!(svg.matches("<g ").count(), 2);
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_export_without_labels() {
        let mut coords = Coordinates::new();
        coords.insert("a".into(), Rectangle::new(0.0, 0.0, 100.0, 100.0));

        let svg = export(&coords, &SvgOptions::default().with_labels(false));
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn test_export_skips_negative_areas() {
        let mut coords = Coordinates::new();
        coords.insert("shrunk".into(), Rectangle::new(40.0, 40.0, -10.0, 20.0));

        let svg = export(&coords, &SvgOptions::default());
        assert!(!svg.contains("shrunk"));
        assert_eq!(svg.matches("<rect").count(), 1);
    }

    #[test]
    fn test_export_empty() {
        let svg = export(&Coordinates::new(), &SvgOptions::default());
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
    }
}
