//! Canned answers of the development backend.
//!
//! Only water at 20 °C with an enthalpy pair gets a real classification
//! against the saturation enthalpies; every other input is reported as
//! "Saturated" with a fixed property table.

use serde::Deserialize;
use serde_json::{Value, json};
use tc_core::Property;

/// Saturated liquid enthalpy of water at 20 °C [kJ/kg]
const WATER_20C_HF: f64 = 83.9;
/// Saturated vapor enthalpy of water at 20 °C [kJ/kg]
const WATER_20C_HG: f64 = 2538.1;
/// Band around hf/hg treated as exactly saturated [kJ/kg]
const SATURATION_BAND: f64 = 0.1;

/// Request body as the service reads it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    /// Any name is accepted; only `water` has a classification.
    pub substance: String,
    pub first_property: Property,
    pub first_value: f64,
    pub second_property: Property,
    pub second_value: f64,
}

impl ServiceRequest {
    fn is_water_at_20c(&self) -> bool {
        self.substance == "water"
            && self.first_property == Property::Temperature
            && self.first_value == 20.0
    }
}

/// Phase label for the requested state.
pub fn classify_state(request: &ServiceRequest) -> String {
    if request.is_water_at_20c() && request.second_property == Property::Enthalpy {
        let h = request.second_value;
        if h < WATER_20C_HF {
            return "Compressed Liquid".to_string();
        }
        if h > WATER_20C_HG {
            return "Superheated Vapor".to_string();
        }
        if (h - WATER_20C_HF).abs() < SATURATION_BAND {
            return "Saturated Liquid".to_string();
        }
        if (h - WATER_20C_HG).abs() < SATURATION_BAND {
            return "Saturated Vapor".to_string();
        }
        let x = quality(h);
        return format!("Saturated Liquid-Vapor Mixture (x = {x:.4})");
    }

    "Saturated".to_string()
}

fn quality(h: f64) -> f64 {
    (h - WATER_20C_HF) / (WATER_20C_HG - WATER_20C_HF)
}

/// Full success body for a request.
pub fn canned_response(request: &ServiceRequest) -> Value {
    let state = classify_state(request);
    let substance = &request.substance;
    let first = request.first_value;
    let second = request.second_value;

    if request.is_water_at_20c() {
        let is_enthalpy = request.second_property == Property::Enthalpy;
        let h = if is_enthalpy { second } else { 100.0 };

        let mut details =
            format!("Calculation performed for {substance} at {first}°C and {second} kJ/kg");
        if is_enthalpy && h > WATER_20C_HF && h < WATER_20C_HG {
            let x = quality(h);
            if x > 0.0 && x < 1.0 {
                details.push_str(&format!(" (Quality = {x:.4})"));
            }
        }

        return json!({
            "status": "success",
            "state": state,
            "details": details,
            "saturationProperties": {
                "Temperature (°C)": first,
                "Pressure (bar)": 0.0234,
                "Specific Volume (m³/kg)": 1.673,
                "Internal Energy (kJ/kg)": 2506.7,
                "Enthalpy (kJ/kg)": h,
                "Entropy (kJ/kg·K)": 7.3589,
            }
        });
    }

    let pick = |property: Property, value: f64, fallback: f64| {
        if property == request.first_property {
            value
        } else {
            fallback
        }
    };

    let enthalpy = if request.second_property == Property::Enthalpy {
        second
    } else {
        2676.1
    };

    json!({
        "status": "success",
        "state": state,
        "details": format!("Calculation performed for {substance} at {first} and {second}"),
        "saturationProperties": {
            "Temperature (°C)": pick(Property::Temperature, first, 100.0),
            "Pressure (bar)": pick(Property::Pressure, first, 1.013),
            "Specific Volume (m³/kg)": 1.673,
            "Internal Energy (kJ/kg)": 2506.7,
            "Enthalpy (kJ/kg)": enthalpy,
            "Entropy (kJ/kg·K)": 7.3589,
        }
    })
}

/// Answer a raw request body. Bodies that do not decode get an
/// application-level error instead of an HTTP failure.
pub fn handle_body(body: &[u8]) -> Value {
    match serde_json::from_slice::<ServiceRequest>(body) {
        Ok(request) => canned_response(&request),
        Err(e) => json!({
            "status": "error",
            "message": e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water_20c(second_property: Property, second_value: f64) -> ServiceRequest {
        ServiceRequest {
            substance: "water".into(),
            first_property: Property::Temperature,
            first_value: 20.0,
            second_property,
            second_value,
        }
    }

    #[test]
    fn enthalpy_bands_for_water_at_20c() {
        let cases = [
            (50.0, "Compressed Liquid"),
            (83.9, "Saturated Liquid"),
            (2538.1, "Saturated Vapor"),
            (3000.0, "Superheated Vapor"),
        ];
        for (h, expected) in cases {
            assert_eq!(classify_state(&water_20c(Property::Enthalpy, h)), expected);
        }

        let mixture = classify_state(&water_20c(Property::Enthalpy, 1311.0));
        assert_eq!(mixture, "Saturated Liquid-Vapor Mixture (x = 0.5000)");
    }

    #[test]
    fn other_inputs_are_saturated() {
        assert_eq!(classify_state(&water_20c(Property::Entropy, 1.0)), "Saturated");

        let request = ServiceRequest {
            substance: "co2".into(),
            ..water_20c(Property::Enthalpy, 50.0)
        };
        assert_eq!(classify_state(&request), "Saturated");
    }

    #[test]
    fn mixture_details_mention_quality() {
        let body = canned_response(&water_20c(Property::Enthalpy, 1311.0));
        let details = body["details"].as_str().unwrap();
        assert!(details.contains("(Quality = 0.5000)"), "{details}");
        assert_eq!(body["saturationProperties"]["Enthalpy (kJ/kg)"], json!(1311.0));
    }

    #[test]
    fn default_table_echoes_inputs() {
        let request = ServiceRequest {
            substance: "water".into(),
            first_property: Property::Pressure,
            first_value: 101.325,
            second_property: Property::Temperature,
            second_value: 100.0,
        };
        let body = canned_response(&request);
        let props = &body["saturationProperties"];
        assert_eq!(body["state"], json!("Saturated"));
        assert_eq!(props["Pressure (bar)"], json!(101.325));
        assert_eq!(props["Temperature (°C)"], json!(100.0));
        assert_eq!(props["Enthalpy (kJ/kg)"], json!(2676.1));
    }

    #[test]
    fn undecodable_body_is_an_application_error() {
        let body = handle_body(br#"{"substance":"water"}"#);
        assert_eq!(body["status"], json!("error"));
        assert!(body["message"].as_str().unwrap().contains("firstProperty"));

    }

    #[test]
    fn unknown_substance_is_still_answered() {
        let body = handle_body(br#"{"substance":"helium","firstProperty":"pressure",
            "firstValue":1,"secondProperty":"temperature","secondValue":2}"#);
        assert_eq!(body["status"], json!("success"));
        assert_eq!(body["state"], json!("Saturated"));
        assert!(body["details"].as_str().unwrap().contains("helium"));
    }
}
