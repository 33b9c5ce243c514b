#[cfg(test)]
#[path = "home_test.rs"]
mod tests;

use super::dimmed;
use super::heading;
use crate::domain::services::Translator;

const QUICK_ACTIONS: [(&str, &str); 4] = [
    ("home.startJourney", "deep-shiva chat"),
    ("home.checkCrowd", "deep-shiva dashboard"),
    ("home.yogaMode", "deep-shiva yoga"),
    ("home.emergencyHelp", "deep-shiva emergency"),
];

const FEATURES: [(&str, &str); 4] = [
    ("home.spiritualGuidance", "home.spiritualDesc"),
    ("home.yogaCorrection", "home.yogaDesc"),
    ("home.ecoTourism", "home.ecoDesc"),
    ("home.localCulture", "home.cultureDesc"),
];

pub fn render(translator: &Translator) -> String {
    let mut lines = vec![
        heading(&translator.t("home.title", None)),
        translator.t("home.subtitle", None),
        "".to_string(),
        heading(&translator.t("home.quickActions", None)),
    ];

    for (key, command) in QUICK_ACTIONS {
        lines.push(format!(
            "  - {} {}",
            translator.t(key, None),
            dimmed(&format!("({command})"))
        ));
    }

    lines.push("".to_string());
    lines.push(heading(&translator.t("home.whyDeepShiva", None)));
    for (title, description) in FEATURES {
        lines.push(format!("  * {}", translator.t(title, None)));
        lines.push(format!("    {}", translator.t(description, None)));
    }

    return lines.join("\n");
}

pub fn run(translator: &Translator) {
    println!("{}", render(translator));
}
