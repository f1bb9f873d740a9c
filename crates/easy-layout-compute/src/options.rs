//! Options for coordinate computation.

use easy_layout_core::Spacing;

/// What to do with an absolute spacing value when the container dimension
/// for its axis is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum AbsoluteFallback {
    /// Use the number as a percentage unchanged
    #[default]
    AsPercent,
    /// Fail with `LayoutError::MissingContainerDimension`
    Reject,
}

/// Options for coordinate computation.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct LayoutOptions {
    /// Space between the container edges and the outer tracks
    pub padding: Spacing,
    /// Space between adjacent tracks
    pub gap: Spacing,
    /// Container width, for normalizing absolute horizontal spacing
    pub container_width: Option<f64>,
    /// Container height, for normalizing absolute vertical spacing
    pub container_height: Option<f64>,
    /// Policy for absolute spacing without a usable container dimension
    pub absolute_fallback: AbsoluteFallback,
    /// Require every area to fill exactly one rectangle
    pub strict: bool,
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the padding.
    pub fn with_padding(mut self, padding: impl Into<Spacing>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set the gap.
    pub fn with_gap(mut self, gap: impl Into<Spacing>) -> Self {
        self.gap = gap.into();
        self
    }

    /// Set the container size used to normalize absolute spacing.
    pub fn with_container(mut self, width: f64, height: f64) -> Self {
        self.container_width = Some(width);
        self.container_height = Some(height);
        self
    }

    pub fn with_absolute_fallback(mut self, fallback: AbsoluteFallback) -> Self {
        self.absolute_fallback = fallback;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
