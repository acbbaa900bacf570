//! Toast presentation attributes and field-by-field overrides

use serde::{Deserialize, Serialize};

/// Presentation of a single toast
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToastStyle {
    pub background: String,
    pub color: String,
    pub border_radius: String,
    pub padding: String,
    pub box_shadow: String,
    pub backdrop_filter: String,
    pub icon: String,
    /// `None` keeps the toast on screen until it is dismissed
    pub duration_ms: Option<u64>,
}

impl ToastStyle {
    /// Merge `overrides` on top of this style; present fields win
    pub fn merged(&self, overrides: &StyleOverrides) -> ToastStyle {
        fn pick(base: &str, over: &Option<String>) -> String {
            over.as_deref().unwrap_or(base).to_string()
        }

        ToastStyle {
            background: pick(&self.background, &overrides.background),
            color: pick(&self.color, &overrides.color),
            border_radius: pick(&self.border_radius, &overrides.border_radius),
            padding: pick(&self.padding, &overrides.padding),
            box_shadow: pick(&self.box_shadow, &overrides.box_shadow),
            backdrop_filter: pick(&self.backdrop_filter, &overrides.backdrop_filter),
            icon: pick(&self.icon, &overrides.icon),
            duration_ms: overrides.duration_ms.or(self.duration_ms),
        }
    }
}

/// Caller-supplied partial style
///
/// Also the shape of `[toast.overrides.<category>]` tables in the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleOverrides {
    pub background: Option<String>,
    pub color: Option<String>,
    pub border_radius: Option<String>,
    pub padding: Option<String>,
    pub box_shadow: Option<String>,
    pub backdrop_filter: Option<String>,
    pub icon: Option<String>,
    pub duration_ms: Option<u64>,
}

impl StyleOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod style_tests;
