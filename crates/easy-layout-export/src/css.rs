//! Inline CSS declarations for computed rectangles.

use easy_layout_core::{Coordinates, Rectangle};

/// Render a rectangle as inline CSS declarations.
///
/// ```ignore
/// assert_eq!(
///     to_css(&Rectangle::new(0.0, 50.0, 50.0, 100.0)),
///     "position: absolute; top: 0%; left: 50%; width: 50%; height: 100%;"
/// );
/// ```
pub fn to_css(rect: &Rectangle) -> String {
    format!(
        "position: {}; top: {}; left: {}; width: {}; height: {};",
        rect.position.as_str(),
        rect.top,
        rect.left,
        rect.width,
        rect.height
    )
}

/// Render one CSS rule per area, selecting elements by `data-area`.
pub fn to_css_rules(coords: &Coordinates) -> String {
    let mut css = String::new();
    for (name, rect) in coords {
        css.push_str(&format!(
            "[data-area=\"{}\"] {{ {} }}\n",
            escape_css_string(name),
            to_css(rect)
        ));
    }
    css
}

fn escape_css_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
