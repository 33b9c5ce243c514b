use serde_json::json;
use strum::IntoEnumIterator;

use super::resolve;
use super::Translator;
use crate::domain::models::Language;

#[test]
fn it_translates_home_title() {
    assert_eq!(
        Translator::new(Language::En).t("home.title", None),
        "Plan Your Yatra to Uttarakhand"
    );
    assert_eq!(
        Translator::new(Language::Hi).t("home.title", None),
        "उत्तराखंड की अपनी यात्रा की योजना बनाएं"
    );
    assert_eq!(
        Translator::new(Language::Ga).t("nav.chat", None),
        "गल्लबात"
    );
}

#[test]
fn it_resolves_nested_keys() {
    assert_eq!(
        Translator::new(Language::En).t("dashboard.vehicles.ev", None),
        "Electric Vehicle"
    );
}

#[test]
fn it_prefers_supplied_fallback_over_english() {
    let translator = Translator::new(Language::Ga);
    assert_eq!(translator.t("sessions.empty", Some("Khali")), "Khali");
}

#[test]
fn it_treats_empty_strings_as_missing() {
    let table = json!({
        "home": {
            "title": "",
            "subtitle": "Char Dham"
        }
    });

    assert_eq!(resolve(&table, "home.title"), None);
    assert_eq!(resolve(&table, "home.subtitle"), Some("Char Dham"));
    assert_eq!(resolve(&table, "home"), None);
}

#[test]
fn it_falls_back_to_english() {
    let translator = Translator::new(Language::Hi);
    assert_eq!(translator.t("sessions.empty", None), "No saved chats yet.");
}

#[test]
fn it_returns_key_when_missing_everywhere() {
    let translator = Translator::new(Language::En);
    assert_eq!(translator.t("does.not.exist", None), "does.not.exist");
}

#[test]
fn it_treats_tables_as_missing() {
    let translator = Translator::new(Language::En);
    assert_eq!(translator.t("yoga.tips", None), "yoga.tips");
    assert_eq!(translator.t("yoga.tips", Some("Tips")), "Tips");
}

#[test]
fn it_has_a_greeting_in_every_language() {
    for language in Language::iter() {
        let greeting = Translator::new(language).t("chat.greeting", None);
        assert_ne!(greeting, "chat.greeting");
    }
}

#[test]
fn it_switches_language() {
    let mut translator = Translator::default();
    assert_eq!(translator.t("nav.emergency", None), "SOS");

    translator.set_language(Language::Hi);
    assert_eq!(translator.language(), Language::Hi);
    assert_eq!(translator.t("nav.emergency", None), "आपातकाल");
}
