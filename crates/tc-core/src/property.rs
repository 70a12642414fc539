//! Thermodynamic state properties and the property-pair rule.

use crate::TcError;
use core::fmt;

/// Independent intensive property used to fix a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Property {
    Pressure,
    Temperature,
    SpecificVolume,
    InternalEnergy,
    Enthalpy,
    Entropy,
}

impl Property {
    pub const ALL: [Property; 6] = [
        Property::Pressure,
        Property::Temperature,
        Property::SpecificVolume,
        Property::InternalEnergy,
        Property::Enthalpy,
        Property::Entropy,
    ];

    /// Properties that may be chosen as the first of a pair.
    pub const FIRST: [Property; 2] = [Property::Pressure, Property::Temperature];

    pub fn key(&self) -> &'static str {
        match self {
            Property::Pressure => "pressure",
            Property::Temperature => "temperature",
            Property::SpecificVolume => "specific_volume",
            Property::InternalEnergy => "internal_energy",
            Property::Enthalpy => "enthalpy",
            Property::Entropy => "entropy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Property::Pressure => "Pressure",
            Property::Temperature => "Temperature",
            Property::SpecificVolume => "Specific Volume",
            Property::InternalEnergy => "Internal Energy",
            Property::Enthalpy => "Enthalpy",
            Property::Entropy => "Entropy",
        }
    }

    pub fn is_first_choice(&self) -> bool {
        Self::FIRST.contains(self)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Property {
    type Err = TcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "pressure" | "p" => Ok(Property::Pressure),
            "temperature" | "t" => Ok(Property::Temperature),
            "specific_volume" | "v" => Ok(Property::SpecificVolume),
            "internal_energy" | "u" => Ok(Property::InternalEnergy),
            "enthalpy" | "h" => Ok(Property::Enthalpy),
            "entropy" | "s" => Ok(Property::Entropy),
            _ => Err(TcError::UnknownProperty {
                input: s.to_string(),
            }),
        }
    }
}

/// Properties offered for the second slot: everything except `first`.
pub fn available_second_properties(first: Option<Property>) -> Vec<Property> {
    Property::ALL
        .into_iter()
        .filter(|p| Some(*p) != first)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_set_excludes_first() {
        for first in [None, Some(Property::Pressure), Some(Property::Temperature)] {
            let available = available_second_properties(first);
            if let Some(first) = first {
                assert!(!available.contains(&first));
                assert_eq!(available.len(), Property::ALL.len() - 1);
            } else {
                assert_eq!(available, Property::ALL.to_vec());
            }
        }
    }

    #[test]
    fn second_set_keeps_declaration_order() {
        let available = available_second_properties(Some(Property::Pressure));
        assert_eq!(available[0], Property::Temperature);
        assert_eq!(available[4], Property::Entropy);
    }

    #[test]
    fn parse_accepts_keys_labels_and_symbols() {
        assert_eq!("specific_volume".parse::<Property>(), Ok(Property::SpecificVolume));
        assert_eq!("Internal Energy".parse::<Property>(), Ok(Property::InternalEnergy));
        assert_eq!("h".parse::<Property>(), Ok(Property::Enthalpy));
        assert!("quality".parse::<Property>().is_err());
    }

    #[test]
    fn only_pressure_and_temperature_lead() {
        assert!(Property::Pressure.is_first_choice());
        assert!(Property::Temperature.is_first_choice());
        assert!(!Property::Entropy.is_first_choice());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn wire_keys_match_key() {
        for property in Property::ALL {
            let json = serde_json::to_string(&property).unwrap();
            assert_eq!(json, format!("\"{}\"", property.key()));
        }
    }
}
