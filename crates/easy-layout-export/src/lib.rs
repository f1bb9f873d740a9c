//! Export formats for easy-layout coordinates.
//!
//! Supported formats:
//! - CSS (inline declarations per area)
//! - HTML (self-contained preview page)
//! - SVG (scaled preview)
//! - JSON

pub mod css;

#[cfg(feature = "html")]
pub mod html;

#[cfg(feature = "svg")]
pub mod svg;

use easy_layout_core::Coordinates;
use thiserror::Error;

pub use css::{to_css, to_css_rules};

#[cfg(feature = "html")]
pub use html::HtmlOptions;

#[cfg(feature = "svg")]
pub use svg::SvgOptions;

/// Errors during export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Export coordinates to an HTML preview page.
#[cfg(feature = "html")]
pub fn export_html(coords: &Coordinates, options: &HtmlOptions) -> String {
    html::export(coords, options)
}

/// Export coordinates to SVG.
#[cfg(feature = "svg")]
pub fn export_svg(coords: &Coordinates, options: &SvgOptions) -> String {
    svg::export(coords, options)
}

/// Export coordinates to pretty-printed JSON keyed by area name.
pub fn export_json(coords: &Coordinates) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(coords)?)
}

/// Escape text for use in XML/HTML content and attribute values.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use easy_layout_core::Rectangle;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("\"q\""), "&quot;q&quot;");
    }

    #[test]
    fn test_export_json_roundtrip() {
        let mut coords = Coordinates::new();
        coords.insert("a".into(), Rectangle::new(2.0, 2.0, 100.0 / 3.0, 47.0));
        coords.insert("b".into(), Rectangle::new(0.0, -0.0, 50.0, 50.0));

        let json = export_json(&coords).unwrap();
        assert!(json.contains(r#""width": "33.333333333333336%""#));
        assert!(json.contains(r#""left": "0%""#));

        let back: Coordinates = serde_json::from_str(&json).unwrap();
        assert_eq!(back.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(back["a"], coords["a"]);
    }

    #[test]
    fn test_export_json_empty() {
        assert_eq!(export_json(&Coordinates::new()).unwrap(), "{}");
    }

    #[test]
    #[cfg(all(feature = "html", feature = "svg"))]
    fn test_complex_template_export() {
        use easy_layout_compute::{compute_with_options, LayoutOptions};
        use easy_layout_parser::parse_template;

        let source = r#"
            "logo  search search"
            "menu  feed   trends"
            "menu  feed   trends"
        "#;

        let grid = parse_template(source).expect("Should parse template");
        let options = LayoutOptions::new()
            .with_padding(16.0)
            .with_gap(8.0)
            .with_container(800.0, 600.0);
        let coords = compute_with_options(&grid, &options).expect("Should compute coordinates");
        assert_eq!(coords.len(), 5);

        let page = export_html(&coords, &HtmlOptions::default());
        for name in ["logo", "search", "menu", "feed", "trends"] {
            assert!(page.contains(&format!(">{}</div>", name)), "missing {name}");
        }

        let svg = export_svg(&coords, &SvgOptions::default());
        assert_eq!(svg.matches("<rect").count(), 6, "background plus one per area");

        let json = export_json(&coords).unwrap();
        assert!(json.contains("\"position\": \"absolute\""));
    }
}
