//! Unit vocabulary and conversion constants
//!
//! Provides the tagged unit type parsed from free-form unit tokens and the
//! standard conversion factors.

use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Constants
// ============================================================================

/// Kilojoules per kilocalorie
pub const KJ_PER_KCAL: f64 = 4.184;
/// Grams of salt per gram of sodium
pub const SALT_PER_SODIUM: f64 = 2.54;
/// Fluid ounces per liter
pub const OZ_PER_L: f64 = 33.814;

/// A recognized unit of measure for nutrient quantities
///
/// Parsed once at the boundary from a case-insensitive token; conversion
/// code matches on the variant instead of re-comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    /// Kilocalories
    #[serde(rename = "kcal")]
    Kcal,
    /// Kilojoules
    #[serde(rename = "kj")]
    Kj,
    /// Grams (canonical mass base)
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "mg")]
    Milligram,
    /// Micrograms; the token is spelled both "µg" and "mcg" in the wild
    #[serde(rename = "µg")]
    Microgram,
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "l")]
    Liter,
    #[serde(rename = "dl")]
    Deciliter,
    #[serde(rename = "cl")]
    Centiliter,
    /// Milliliters (canonical volume base, treated as equivalent to grams)
    #[serde(rename = "ml")]
    Milliliter,
    /// International units; no fixed mass equivalent, passed through
    /// unconverted
    #[serde(rename = "IU")]
    Iu,
}

/// Category of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    /// Energy units (kcal, kJ)
    Energy,
    /// Mass units (g, mg, µg, kg)
    Weight,
    /// Volume units (l, dl, cl, ml)
    Volume,
    /// Units with no gram/ml equivalent (IU)
    Other,
}

impl Unit {
    /// Parse from a raw token, case-insensitively
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kcal" => Some(Unit::Kcal),
            "kj" => Some(Unit::Kj),
            "g" => Some(Unit::Gram),
            "mg" => Some(Unit::Milligram),
            "µg" | "mcg" => Some(Unit::Microgram),
            "kg" => Some(Unit::Kilogram),
            "l" => Some(Unit::Liter),
            "dl" => Some(Unit::Deciliter),
            "cl" => Some(Unit::Centiliter),
            "ml" => Some(Unit::Milliliter),
            "iu" => Some(Unit::Iu),
            _ => None,
        }
    }

    /// Get the canonical token for this unit
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Kcal => "kcal",
            Unit::Kj => "kj",
            Unit::Gram => "g",
            Unit::Milligram => "mg",
            Unit::Microgram => "µg",
            Unit::Kilogram => "kg",
            Unit::Liter => "l",
            Unit::Deciliter => "dl",
            Unit::Centiliter => "cl",
            Unit::Milliliter => "ml",
            Unit::Iu => "IU",
        }
    }

    /// Determine the category of this unit
    pub fn category(&self) -> UnitCategory {
        match self {
            Unit::Kcal | Unit::Kj => UnitCategory::Energy,
            Unit::Gram | Unit::Milligram | Unit::Microgram | Unit::Kilogram => {
                UnitCategory::Weight
            }
            Unit::Liter | Unit::Deciliter | Unit::Centiliter | Unit::Milliliter => {
                UnitCategory::Volume
            }
            Unit::Iu => UnitCategory::Other,
        }
    }
}
