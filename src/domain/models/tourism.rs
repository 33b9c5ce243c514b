#[cfg(test)]
#[path = "tourism_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CrowdSeverity {
    Light,
    Moderate,
    Heavy,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrowdStatus {
    pub shrine: String,
    pub crowd_level: u32,
    pub status: String,
}

impl CrowdStatus {
    /// Bucket used to colour the crowd meter.
    pub fn severity(&self) -> CrowdSeverity {
        if self.crowd_level < 40 {
            return CrowdSeverity::Light;
        }
        if self.crowd_level < 70 {
            return CrowdSeverity::Moderate;
        }

        return CrowdSeverity::Heavy;
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    EnumVariantNames,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VehicleType {
    #[default]
    Car,
    Bike,
    Bus,
    Ev,
}

impl VehicleType {
    pub fn parse(text: &str) -> Option<VehicleType> {
        return VehicleType::iter().find(|e| return e.to_string() == text);
    }

    /// Translation key for the vehicle label.
    pub fn translation_key(&self) -> String {
        return format!("dashboard.vehicles.{self}");
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarbonRequest {
    pub distance: f64,
    pub vehicle_type: VehicleType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarbonResult {
    pub co2_kg: f64,
    pub saved_vs_suv: f64,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub distance: Option<f64>,
}

impl CarbonResult {
    /// Savings against a standard SUV. A positive saving is shown as fewer
    /// kilograms, anything else as extra kilograms.
    pub fn savings_label(&self) -> String {
        let sign = if self.saved_vs_suv > 0.0 { "-" } else { "+" };
        return format!("{sign}{:.2} kg", self.saved_vs_suv.abs());
    }

    pub fn emissions_label(&self) -> String {
        return format!("{:.2} kg", self.co2_kg);
    }
}
