#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;

use anyhow::Result;
use owo_colors::OwoColorize;
use owo_colors::Stream;

use super::dimmed;
use super::fetch_error;
use super::heading;
use crate::domain::models::CarbonRequest;
use crate::domain::models::CarbonResult;
use crate::domain::models::CrowdSeverity;
use crate::domain::models::CrowdStatus;
use crate::domain::services::Translator;
use crate::infrastructure::api::http::HttpApi;

const METER_WIDTH: usize = 20;

fn crowd_meter(status: &CrowdStatus) -> String {
    let filled = (status.crowd_level.min(100) as usize * METER_WIDTH) / 100;
    let bar = format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(METER_WIDTH - filled)
    );

    match status.severity() {
        CrowdSeverity::Light => {
            return format!(
                "{}",
                bar.if_supports_color(Stream::Stdout, |t| return t.green())
            );
        }
        CrowdSeverity::Moderate => {
            return format!(
                "{}",
                bar.if_supports_color(Stream::Stdout, |t| return t.truecolor(255, 165, 0))
            );
        }
        CrowdSeverity::Heavy => {
            return format!(
                "{}",
                bar.if_supports_color(Stream::Stdout, |t| return t.red())
            );
        }
    }
}

pub fn render_crowd(translator: &Translator, res: &Result<Vec<CrowdStatus>>) -> String {
    let mut lines = vec![
        heading(&translator.t("dashboard.title", None)),
        "".to_string(),
        heading(&translator.t("dashboard.crowdStatus", None)),
    ];

    let statuses = match res {
        Ok(statuses) => statuses,
        Err(err) => {
            lines.push(fetch_error(translator, err));
            return lines.join("\n");
        }
    };

    let name_width = statuses
        .iter()
        .map(|e| return e.shrine.chars().count())
        .max()
        .unwrap_or_default();

    for status in statuses {
        lines.push(format!(
            "  {:<name_width$}  {} {:>3}%  {}",
            status.shrine,
            crowd_meter(status),
            status.crowd_level,
            status.status
        ));
    }

    return lines.join("\n");
}

pub fn render_carbon(
    translator: &Translator,
    req: &CarbonRequest,
    res: &Result<CarbonResult>,
) -> String {
    let mut lines = vec![
        heading(&translator.t("dashboard.carbonCalculator", None)),
        format!(
            "  {}: {}",
            translator.t("dashboard.distance", None),
            req.distance
        ),
        format!(
            "  {}: {}",
            translator.t("dashboard.vehicleType", None),
            translator.t(&req.vehicle_type.translation_key(), None)
        ),
    ];

    let result = match res {
        Ok(result) => result,
        Err(err) => {
            lines.push(fetch_error(translator, err));
            return lines.join("\n");
        }
    };

    lines.push("".to_string());
    lines.push(heading(&translator.t("dashboard.carbonImpact", None)));
    lines.push(format!(
        "  {}: {}",
        translator.t("dashboard.emissions", None),
        result.emissions_label()
    ));
    lines.push(format!(
        "  {}: {}",
        translator.t("dashboard.vsSuv", None),
        result.savings_label()
    ));
    lines.push(dimmed(&translator.t("dashboard.tip", None)));

    return lines.join("\n");
}

pub async fn run(translator: &Translator, carbon: Option<CarbonRequest>) {
    let api = HttpApi::default();

    let crowd = api.crowd_status().await;
    println!("{}", render_crowd(translator, &crowd));

    if let Some(req) = carbon {
        let res = api.calculate_carbon(&req).await;
        println!();
        println!("{}", render_carbon(translator, &req, &res));
    }
}
