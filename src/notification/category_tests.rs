//! Tests for notification/category

use super::*;
use proptest::prelude::*;

#[test]
fn test_all_contains_every_variant_once() {
    let all = Category::all();
    // 5 base + 6 auth + 3 network + 5 gradient + 3 feature preview
    assert_eq!(all.len(), 22);

    let unique: std::collections::HashSet<_> = all.iter().collect();
    assert_eq!(unique.len(), all.len());
}

#[test]
fn test_display_and_parse_agree_for_every_category() {
    for category in Category::all() {
        let key = category.to_string();
        assert_eq!(key.parse::<Category>(), Ok(category), "key {key}");
    }
}

#[test]
fn test_parse_dotted_keys() {
    assert_eq!(
        "auth.invalidCredentials".parse(),
        Ok(Category::Auth(AuthVariant::InvalidCredentials))
    );
    assert_eq!(
        "network.serverError".parse(),
        Ok(Category::Network(NetworkVariant::ServerError))
    );
    assert_eq!(
        "featurePreview.video".parse(),
        Ok(Category::FeaturePreview(FeatureVariant::Video))
    );
}

#[test]
fn test_parse_rejects_unknown_keys() {
    assert!("toast".parse::<Category>().is_err());
    assert!("auth".parse::<Category>().is_err());
    assert!("auth.banana".parse::<Category>().is_err());
    assert!("weather.sunny".parse::<Category>().is_err());
    assert!("".parse::<Category>().is_err());
}

#[test]
fn test_unknown_category_error_message() {
    let err = "auth.banana".parse::<Category>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown notification category: auth.banana"
    );
}

#[test]
fn test_from_key_or_default_uses_documented_defaults() {
    assert_eq!(AuthVariant::from_key_or_default("nope"), AuthVariant::Login);
    assert_eq!(
        NetworkVariant::from_key_or_default("nope"),
        NetworkVariant::ServerError
    );
    assert_eq!(
        GradientVariant::from_key_or_default("nope"),
        GradientVariant::Purple
    );
    assert_eq!(
        FeatureVariant::from_key_or_default("nope"),
        FeatureVariant::Info
    );
}

#[test]
fn test_from_key_or_default_keeps_known_variant() {
    assert_eq!(
        FeatureVariant::from_key_or_default("voice"),
        FeatureVariant::Voice
    );
    assert_eq!(
        GradientVariant::from_key_or_default("ocean"),
        GradientVariant::Ocean
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_feature_variant_always_resolves(key in "[a-zA-Z-]{0,16}") {
        let variant = FeatureVariant::from_key_or_default(&key);
        if !matches!(key.as_str(), "voice" | "video" | "info") {
            prop_assert_eq!(variant, FeatureVariant::Info);
        }
    }
}
