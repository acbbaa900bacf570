//! Tests for notification/registry

use std::collections::BTreeMap;

use super::*;
use crate::notification::style::StyleOverrides;

#[test]
fn test_every_category_has_builtin_style() {
    let registry = StyleRegistry::new();
    for category in Category::all() {
        assert_eq!(registry.style(category), &builtin_style(category));
    }
}

#[test]
fn test_loading_persists_and_others_expire() {
    let registry = StyleRegistry::new();
    for category in Category::all() {
        let duration = registry.style(category).duration_ms;
        if category == Category::Loading {
            assert_eq!(duration, None);
        } else {
            assert!(duration.is_some(), "{category} should auto-dismiss");
        }
    }
}

#[test]
fn test_builtin_icons() {
    assert_eq!(builtin_style(Category::Success).icon, "✅");
    assert_eq!(builtin_style(Category::Error).icon, "❌");
    assert_eq!(builtin_style(Category::Loading).icon, "⏳");
    assert_eq!(
        builtin_style(Category::Network(NetworkVariant::Offline)).icon,
        "📡"
    );
    assert_eq!(
        builtin_style(Category::FeaturePreview(FeatureVariant::Voice)).icon,
        "🎤"
    );
}

#[test]
fn test_gradient_variants_have_distinct_backgrounds() {
    let backgrounds: std::collections::HashSet<_> = GradientVariant::ALL
        .iter()
        .map(|v| builtin_style(Category::Gradient(*v)).background)
        .collect();
    assert_eq!(backgrounds.len(), GradientVariant::ALL.len());
}

#[test]
fn test_from_config_applies_overrides() {
    let mut overrides = BTreeMap::new();
    overrides.insert(
        "success".to_string(),
        StyleOverrides::new().duration_ms(1000),
    );
    overrides.insert(
        "network.offline".to_string(),
        StyleOverrides::new().icon("🛑"),
    );
    let registry = StyleRegistry::from_config(&ToastConfig { overrides });

    let success = registry.style(Category::Success);
    assert_eq!(success.duration_ms, Some(1000));
    assert_eq!(success.icon, "✅");

    let offline = registry.style(Category::Network(NetworkVariant::Offline));
    assert_eq!(offline.icon, "🛑");
    assert_eq!(offline.duration_ms, Some(6000));

    // untouched categories keep the built-in style
    assert_eq!(
        registry.style(Category::Error),
        &builtin_style(Category::Error)
    );
}

#[test]
fn test_from_config_skips_unknown_keys() {
    let mut overrides = BTreeMap::new();
    overrides.insert("sparkle".to_string(), StyleOverrides::new().icon("💥"));
    let registry = StyleRegistry::from_config(&ToastConfig { overrides });

    for category in Category::all() {
        assert_eq!(registry.style(category), &builtin_style(category));
    }
}

#[test]
fn test_info_override_updates_fallback() {
    let mut overrides = BTreeMap::new();
    overrides.insert("info".to_string(), StyleOverrides::new().color("#000000"));
    let registry = StyleRegistry::from_config(&ToastConfig { overrides });

    assert_eq!(registry.style(Category::Info).color, "#000000");
    assert_eq!(registry.fallback.color, "#000000");
}
