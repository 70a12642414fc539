//! Wire types for `POST /calculate`.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tc_core::{Property, Substance};

/// Body of a calculation request. Every field is mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub substance: Substance,
    pub first_property: Property,
    pub first_value: f64,
    pub second_property: Property,
    pub second_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationStatus {
    Success,
    Error,
}

/// One named saturation property value.
#[derive(Debug, Clone, PartialEq)]
pub struct SaturationProperty {
    pub name: String,
    pub value: f64,
}

/// Saturation properties in the order the service reported them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SaturationProperties(Vec<SaturationProperty>);

impl SaturationProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: f64) {
        self.0.push(SaturationProperty {
            name: name.into(),
            value,
        });
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|p| p.name == name).map(|p| p.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SaturationProperty> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, f64)> for SaturationProperties {
    fn from_iter<I: IntoIterator<Item = (N, f64)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (name, value) in iter {
            props.push(name, value);
        }
        props
    }
}

impl Serialize for SaturationProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for prop in &self.0 {
            map.serialize_entry(&prop.name, &prop.value)?;
        }
        map.end()
    }
}

/// A successful calculation as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub status: CalculationStatus,
    pub state: String,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation_properties: Option<SaturationProperties>,
}

/// Validated response body.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationResponse {
    Success(CalculationResult),
    /// Application-level failure reported with `status: "error"`.
    Failure { message: Option<String> },
}

impl CalculationResponse {
    pub fn status(&self) -> CalculationStatus {
        match self {
            CalculationResponse::Success(_) => CalculationStatus::Success,
            CalculationResponse::Failure { .. } => CalculationStatus::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_uses_camel_case_keys() {
        let request = CalculationRequest {
            substance: Substance::Water,
            first_property: Property::Pressure,
            first_value: 101.325,
            second_property: Property::Temperature,
            second_value: 100.0,
        };

        let value = serde_json::to_value(request).unwrap();
        assert_eq!(value["substance"], json!("water"));
        assert_eq!(value["firstProperty"], json!("pressure"));
        assert_eq!(value["firstValue"].as_f64(), Some(101.325));
        assert_eq!(value["secondProperty"], json!("temperature"));
        assert_eq!(value["secondValue"].as_f64(), Some(100.0));
        assert_eq!(value.as_object().unwrap().len(), 5);
    }

    #[test]
    fn saturation_properties_keep_insertion_order() {
        let props: SaturationProperties = [("vg", 1.673), ("vf", 0.001)].into_iter().collect();
        let text = serde_json::to_string(&props).unwrap();
        assert_eq!(text, r#"{"vg":1.673,"vf":0.001}"#);
        assert_eq!(props.get("vf"), Some(0.001));
        assert_eq!(props.get("hf"), None);
    }

    #[test]
    fn result_omits_missing_saturation_properties() {
        let result = CalculationResult {
            status: CalculationStatus::Success,
            state: "Saturated".into(),
            details: "n/a".into(),
            saturation_properties: None,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value, json!({"status": "success", "state": "Saturated", "details": "n/a"}));
    }
}
