//! Substances accepted by the calculation service.

use crate::TcError;
use core::fmt;

/// Working fluid of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Substance {
    /// Water (H₂O)
    #[cfg_attr(feature = "serde", serde(rename = "water"))]
    Water,
    /// Refrigerant R134a
    #[cfg_attr(feature = "serde", serde(rename = "r134a"))]
    R134a,
    /// Ammonia (NH₃)
    #[cfg_attr(feature = "serde", serde(rename = "ammonia"))]
    Ammonia,
    /// Carbon dioxide (CO₂)
    #[cfg_attr(feature = "serde", serde(rename = "co2"))]
    Co2,
    /// Propane (C₃H₈)
    #[cfg_attr(feature = "serde", serde(rename = "propane"))]
    Propane,
}

impl Substance {
    pub const ALL: [Substance; 5] = [
        Substance::Water,
        Substance::R134a,
        Substance::Ammonia,
        Substance::Co2,
        Substance::Propane,
    ];

    /// Key used on the wire.
    pub fn key(&self) -> &'static str {
        match self {
            Substance::Water => "water",
            Substance::R134a => "r134a",
            Substance::Ammonia => "ammonia",
            Substance::Co2 => "co2",
            Substance::Propane => "propane",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Substance::Water => "Water",
            Substance::R134a => "R134a",
            Substance::Ammonia => "Ammonia",
            Substance::Co2 => "CO2",
            Substance::Propane => "Propane",
        }
    }
}

impl fmt::Display for Substance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Substance {
    type Err = TcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "WATER" | "H2O" => Ok(Substance::Water),
            "R134A" | "R-134A" => Ok(Substance::R134a),
            "AMMONIA" | "NH3" => Ok(Substance::Ammonia),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(Substance::Co2),
            "PROPANE" | "C3H8" => Ok(Substance::Propane),
            _ => Err(TcError::UnknownSubstance {
                input: s.to_string(),
            }),
        }
    }
}
