pub mod culture;
pub mod dashboard;
pub mod emergency;
pub mod home;
pub mod yoga;

use owo_colors::OwoColorize;
use owo_colors::Stream;

use crate::domain::services::Translator;

fn heading(text: &str) -> String {
    return format!(
        "{}",
        text.if_supports_color(Stream::Stdout, |t| return t.bold())
    );
}

fn dimmed(text: &str) -> String {
    return format!(
        "{}",
        text.if_supports_color(Stream::Stdout, |t| return t.dimmed())
    );
}

/// Failed page fetches show one translated line in place of the content.
fn fetch_error(translator: &Translator, err: &anyhow::Error) -> String {
    tracing::warn!(error = ?err, "Page fetch failed");
    let text = translator.t("errors.fetch", None);
    return format!(
        "{}",
        text.if_supports_color(Stream::Stdout, |t| return t.red())
    );
}
