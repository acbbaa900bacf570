//! Default style per notification category
//!
//! The registry is built once and only read afterwards. Lookups always
//! resolve to a style; a category without an entry resolves to `info`.

use std::collections::HashMap;

use crate::config::ToastConfig;

use super::category::{AuthVariant, Category, FeatureVariant, GradientVariant, NetworkVariant};
use super::style::ToastStyle;

const TEXT_COLOR: &str = "#ffffff";
const BORDER_RADIUS: &str = "12px";
const PADDING: &str = "16px 20px";
const BLUR: &str = "blur(10px)";

/// Immutable category -> style table
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    styles: HashMap<Category, ToastStyle>,
    fallback: ToastStyle,
}

impl StyleRegistry {
    /// Registry populated with the built-in defaults
    pub fn new() -> Self {
        let styles = Category::all()
            .into_iter()
            .map(|category| (category, builtin_style(category)))
            .collect();

        Self {
            styles,
            fallback: builtin_style(Category::Info),
        }
    }

    /// Built-in defaults with the config file's per-category overrides applied
    pub fn from_config(config: &ToastConfig) -> Self {
        let mut registry = Self::new();

        for (key, overrides) in &config.overrides {
            match key.parse::<Category>() {
                Ok(category) => {
                    let merged = registry.style(category).merged(overrides);
                    if category == Category::Info {
                        registry.fallback = merged.clone();
                    }
                    registry.styles.insert(category, merged);
                }
                Err(e) => log::warn!("Ignoring toast override: {}", e),
            }
        }

        registry
    }

    /// Default style for `category`
    pub fn style(&self, category: Category) -> &ToastStyle {
        self.styles.get(&category).unwrap_or(&self.fallback)
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn themed(
    from: &str,
    to: &str,
    shadow_rgb: &str,
    icon: &str,
    duration_ms: Option<u64>,
) -> ToastStyle {
    ToastStyle {
        background: format!("linear-gradient(135deg, {from} 0%, {to} 100%)"),
        color: TEXT_COLOR.to_string(),
        border_radius: BORDER_RADIUS.to_string(),
        padding: PADDING.to_string(),
        box_shadow: format!("0 10px 25px rgba({shadow_rgb}, 0.3)"),
        backdrop_filter: BLUR.to_string(),
        icon: icon.to_string(),
        duration_ms,
    }
}

/// Built-in style for every category
pub fn builtin_style(category: Category) -> ToastStyle {
    match category {
        Category::Success => themed("#10b981", "#059669", "16, 185, 129", "✅", Some(4000)),
        Category::Error => themed("#ef4444", "#dc2626", "239, 68, 68", "❌", Some(5000)),
        Category::Warning => themed("#f59e0b", "#d97706", "245, 158, 11", "⚠️", Some(4500)),
        Category::Info => themed("#3b82f6", "#2563eb", "59, 130, 246", "ℹ️", Some(4000)),
        Category::Loading => themed("#6366f1", "#4f46e5", "99, 102, 241", "⏳", None),

        Category::Auth(variant) => match variant {
            AuthVariant::Login => themed("#10b981", "#059669", "16, 185, 129", "🎉", Some(4000)),
            AuthVariant::Signup => themed("#8b5cf6", "#7c3aed", "139, 92, 246", "🚀", Some(4000)),
            AuthVariant::Logout => themed("#64748b", "#475569", "100, 116, 139", "👋", Some(4000)),
            AuthVariant::InvalidCredentials => {
                themed("#ef4444", "#dc2626", "239, 68, 68", "🔒", Some(5000))
            }
            AuthVariant::UserNotFound => {
                themed("#f97316", "#ea580c", "249, 115, 22", "🔍", Some(5000))
            }
            AuthVariant::VerificationRequired => {
                themed("#f59e0b", "#d97706", "245, 158, 11", "📧", Some(6000))
            }
        },

        Category::Network(variant) => match variant {
            NetworkVariant::Offline => {
                themed("#6b7280", "#374151", "107, 114, 128", "📡", Some(6000))
            }
            NetworkVariant::Online => themed("#10b981", "#059669", "16, 185, 129", "🌐", Some(3000)),
            NetworkVariant::ServerError => {
                themed("#ef4444", "#b91c1c", "239, 68, 68", "🔧", Some(5000))
            }
        },

        Category::Gradient(variant) => {
            let (from, to, shadow) = match variant {
                GradientVariant::Purple => ("#667eea", "#764ba2", "102, 126, 234"),
                GradientVariant::Ocean => ("#2193b0", "#6dd5ed", "33, 147, 176"),
                GradientVariant::Sunset => ("#ff7e5f", "#feb47b", "255, 126, 95"),
                GradientVariant::Forest => ("#134e5e", "#71b280", "19, 78, 94"),
                GradientVariant::Fire => ("#f12711", "#f5af19", "241, 39, 17"),
            };
            themed(from, to, shadow, "✨", Some(4000))
        }

        Category::FeaturePreview(variant) => {
            let (from, to, shadow, icon) = match variant {
                FeatureVariant::Voice => ("#ec4899", "#db2777", "236, 72, 153", "🎤"),
                FeatureVariant::Video => ("#8b5cf6", "#6d28d9", "139, 92, 246", "🎥"),
                FeatureVariant::Info => ("#3b82f6", "#1d4ed8", "59, 130, 246", "💡"),
            };
            themed(from, to, shadow, icon, Some(3500))
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
