use super::render;
use crate::domain::models::Language;
use crate::domain::services::Translator;

#[test]
fn it_renders_contacts_and_first_aid() {
    owo_colors::set_override(false);
    let res = render(&Translator::new(Language::En));
    let lines = res.lines().collect::<Vec<&str>>();

    assert_eq!(lines[0], "Emergency SOS");
    assert_eq!(lines[3], "  100    Police");
    assert_eq!(lines[4], "  108    Ambulance");
    assert_eq!(lines[5], "  1070   Disaster Management");
    assert!(res.contains("  Snake Bite\n  Puncture marks, pain, swelling, nausea\n    1. Keep calm and still"));
    assert!(lines[lines.len() - 1].starts_with("Important: This guide is for informational purposes only."));
}

#[test]
fn it_translates_contact_names() {
    owo_colors::set_override(false);
    let res = render(&Translator::new(Language::Hi));

    assert!(res.contains("  108    एम्बुलेंस"));
}
