#[cfg(test)]
#[path = "emergency_test.rs"]
mod tests;

use owo_colors::OwoColorize;
use owo_colors::Stream;

use super::heading;
use crate::domain::models::EMERGENCY_CONTACTS;
use crate::domain::models::FIRST_AID_TIPS;
use crate::domain::services::Translator;

/// Everything here is compiled in so it works without a network.
pub fn render(translator: &Translator) -> String {
    let mut lines = vec![
        heading(&translator.t("emergency.title", None)),
        translator.t("emergency.description", None),
        "".to_string(),
    ];

    for contact in EMERGENCY_CONTACTS {
        let number = format!(
            "{}",
            contact
                .number
                .if_supports_color(Stream::Stdout, |t| return t.red())
        );
        lines.push(format!(
            "  {:<6} {}",
            number,
            translator.t(contact.key, Some(contact.name))
        ));
    }

    lines.push("".to_string());
    lines.push(heading(&translator.t("emergency.firstAidTitle", None)));
    lines.push(translator.t("emergency.firstAidDesc", None));

    for tip in FIRST_AID_TIPS {
        lines.push("".to_string());
        lines.push(format!("  {}", heading(tip.title)));
        lines.push(format!("  {}", tip.symptoms));
        for (idx, step) in tip.steps.iter().enumerate() {
            lines.push(format!("    {}. {step}", idx + 1));
        }
    }

    lines.push("".to_string());
    lines.push(format!(
        "{}: {}",
        heading(&translator.t("emergency.important", None)),
        translator.t("emergency.importantNote", None)
    ));

    return lines.join("\n");
}

pub fn run(translator: &Translator) {
    println!("{}", render(translator));
}
