use super::CarbonRequest;
use super::CarbonResult;
use super::CrowdSeverity;
use super::CrowdStatus;
use super::VehicleType;

fn crowd(level: u32) -> CrowdStatus {
    return CrowdStatus {
        shrine: "Kedarnath".to_string(),
        crowd_level: level,
        status: "Heavy".to_string(),
    };
}

#[test]
fn it_buckets_crowd_levels() {
    assert_eq!(crowd(0).severity(), CrowdSeverity::Light);
    assert_eq!(crowd(39).severity(), CrowdSeverity::Light);
    assert_eq!(crowd(40).severity(), CrowdSeverity::Moderate);
    assert_eq!(crowd(69).severity(), CrowdSeverity::Moderate);
    assert_eq!(crowd(70).severity(), CrowdSeverity::Heavy);
    assert_eq!(crowd(100).severity(), CrowdSeverity::Heavy);
}

#[test]
fn it_parses_vehicles() {
    assert_eq!(VehicleType::parse("ev"), Some(VehicleType::Ev));
    assert_eq!(VehicleType::parse("suv"), None);
    assert_eq!(VehicleType::Bus.translation_key(), "dashboard.vehicles.bus");
}

#[test]
fn it_serializes_carbon_request() {
    let req = CarbonRequest {
        distance: 120.5,
        vehicle_type: VehicleType::Bike,
    };

    assert_eq!(
        serde_json::to_string(&req).unwrap(),
        r#"{"distance":120.5,"vehicle_type":"bike"}"#
    );
}

#[test]
fn it_formats_savings() {
    let saved = CarbonResult {
        co2_kg: 21.0,
        saved_vs_suv: 9.0,
        vehicle_type: None,
        distance: None,
    };
    assert_eq!(saved.savings_label(), "-9.00 kg");
    assert_eq!(saved.emissions_label(), "21.00 kg");

    let extra = CarbonResult {
        co2_kg: 36.0,
        saved_vs_suv: -6.127,
        vehicle_type: None,
        distance: None,
    };
    assert_eq!(extra.savings_label(), "+6.13 kg");

    let even = CarbonResult {
        co2_kg: 30.0,
        saved_vs_suv: 0.0,
        vehicle_type: None,
        distance: None,
    };
    assert_eq!(even.savings_label(), "+0.00 kg");
}

#[test]
fn it_deserializes_minimal_carbon_result() {
    let res: CarbonResult = serde_json::from_str(r#"{"co2_kg":5.0,"saved_vs_suv":25.0}"#).unwrap();
    assert_eq!(res.vehicle_type, None);
    assert_eq!(res.savings_label(), "-25.00 kg");
}
