use strum::VariantNames;

use super::Language;

#[test]
fn it_parses_codes() {
    assert_eq!(Language::parse("en"), Some(Language::En));
    assert_eq!(Language::parse(" HI "), Some(Language::Hi));
    assert_eq!(Language::parse("ga"), Some(Language::Ga));
    assert_eq!(Language::parse("fr"), None);
}

#[test]
fn it_lists_variants() {
    assert_eq!(Language::VARIANTS, &["en", "hi", "ga"]);
}

#[test]
fn it_defaults_to_english() {
    assert_eq!(Language::default(), Language::En);
}

#[test]
fn it_maps_speech_locales() {
    assert_eq!(Language::En.speech_locale(), "en-IN");
    assert_eq!(Language::Hi.speech_locale(), "hi-IN");
    assert_eq!(Language::Ga.speech_locale(), "hi-IN");
}

#[test]
fn it_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Language::Ga).unwrap(), "\"ga\"");
}
