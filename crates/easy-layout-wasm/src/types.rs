//! TypeScript-friendly option types for the WASM bindings.

use easy_layout_export::{HtmlOptions, SvgOptions};
use serde::{Deserialize, Deserializer, Serialize};

/// Tell an explicit `null` (`Some(None)`) apart from a missing field (`None`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// HTML export options from JavaScript.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlOptionsJs {
    #[serde(default)]
    pub title: Option<String>,
    /// CSS width of the container, e.g. `"50vw"`.
    #[serde(default)]
    pub container_width: Option<String>,
    /// CSS height of the container, e.g. `"40vh"`.
    #[serde(default)]
    pub container_height: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    /// Background of each area box; `null` disables it.
    #[serde(default, deserialize_with = "present")]
    pub area_background: Option<Option<String>>,
}

impl HtmlOptionsJs {
    pub fn into_core(self) -> HtmlOptions {
        let mut opts = HtmlOptions::default();
        if let Some(title) = self.title {
            opts.title = title;
        }
        if let Some(w) = self.container_width {
            opts.container_width = w;
        }
        if let Some(h) = self.container_height {
            opts.container_height = h;
        }
        if let Some(bg) = self.background {
            opts.background = bg;
        }
        if let Some(area_bg) = self.area_background {
            opts.area_background = area_bg;
        }
        opts
    }
}

/// SVG export options from JavaScript.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgOptionsJs {
    /// Width in pixels.
    #[serde(default)]
    pub width: Option<f64>,
    /// Height in pixels.
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub fill: Option<String>,
    #[serde(default)]
    pub stroke: Option<String>,
    #[serde(default)]
    pub labels: Option<bool>,
}

impl SvgOptionsJs {
    pub fn into_core(self) -> SvgOptions {
        let mut opts = SvgOptions::default();
        if let Some(w) = self.width {
            opts.width = w;
        }
        if let Some(h) = self.height {
            opts.height = h;
        }
        if let Some(bg) = self.background {
            opts.background = bg;
        }
        if let Some(fill) = self.fill {
            opts.fill = fill;
        }
        if let Some(stroke) = self.stroke {
            opts.stroke = stroke;
        }
        if let Some(labels) = self.labels {
            opts.labels = labels;
        }
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_options_defaults_kept() {
        let opts = HtmlOptionsJs {
            title: Some("Demo".into()),
            ..Default::default()
        }
        .into_core();

        assert_eq!(opts.title, "Demo");
        assert_eq!(opts.container_width, "50vw");
        assert_eq!(opts.area_background.as_deref(), Some("lightgray"));
    }

    #[test]
    fn test_html_options_area_background_cleared() {
        let opts = HtmlOptionsJs {
            area_background: Some(None),
            ..Default::default()
        }
        .into_core();
        assert_eq!(opts.area_background, None);
    }

    #[test]
    fn test_svg_options() {
        let opts = SvgOptionsJs {
            width: Some(320.0),
            labels: Some(false),
            ..Default::default()
        }
        .into_core();

        assert_eq!(opts.width, 320.0);
        assert_eq!(opts.height, 600.0);
        assert!(!opts.labels);
    }
}
