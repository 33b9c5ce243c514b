#[cfg(test)]
#[path = "yoga_test.rs"]
mod tests;

use anyhow::Result;
use owo_colors::OwoColorize;
use owo_colors::Stream;

use super::dimmed;
use super::heading;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::CameraName;
use crate::domain::models::PoseAnalysis;
use crate::domain::services::Translator;
use crate::domain::services::YogaOutcome;
use crate::domain::services::YogaService;
use crate::infrastructure::api::http::HttpApi;
use crate::infrastructure::camera::CameraManager;

const TIPS: [&str; 4] = [
    "yoga.tips.lighting",
    "yoga.tips.distance",
    "yoga.tips.clothing",
    "yoga.tips.frame",
];

fn status_line(analysis: &PoseAnalysis) -> String {
    let status = analysis.status.as_str();
    if analysis.is_perfect() {
        return format!(
            "{}",
            status.if_supports_color(Stream::Stdout, |t| return t.green())
        );
    }

    return format!(
        "{}",
        status.if_supports_color(Stream::Stdout, |t| return t.yellow())
    );
}

pub fn render(translator: &Translator, outcome: &YogaOutcome) -> String {
    let mut lines = vec![heading(&translator.t("yoga.title", None)), "".to_string()];

    match outcome {
        YogaOutcome::CameraRequired(reason) => {
            lines.push(heading(&translator.t("yoga.cameraRequired", None)));
            lines.push(translator.t("yoga.cameraMessage", None));
            lines.push(dimmed(reason));
        }
        YogaOutcome::Analysis(analysis) => {
            lines.push(status_line(analysis));
            lines.push(analysis.feedback.to_string());
            lines.push(format!(
                "{}: {}%",
                translator.t("yoga.confidence", None),
                analysis.confidence_percent()
            ));
        }
    }

    lines.push("".to_string());
    lines.push(heading(&translator.t("yoga.tipsTitle", None)));
    for key in TIPS {
        lines.push(format!("  - {}", translator.t(key, None)));
    }

    return lines.join("\n");
}

pub async fn run(translator: &Translator) -> Result<()> {
    let camera_name = CameraName::parse(Config::get(ConfigKey::Camera)).unwrap_or(CameraName::None);
    let mut camera = CameraManager::get(camera_name)?;
    let api = HttpApi::default();

    println!("{}", dimmed(&translator.t("yoga.analyzing", None)));
    let outcome = YogaService::analyze(camera.as_mut(), &api).await;
    println!("{}", render(translator, &outcome));

    return Ok(());
}
