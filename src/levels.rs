//! Nutriment level classification

use std::fmt;

use serde::{Deserialize, Serialize};

/// Amount classification for a nutriment on a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrimentLevel {
    Low,
    Moderate,
    High,
}

impl NutrimentLevel {
    /// Parse from string; blank or unknown input yields `None`
    pub fn from_str(level: &str) -> Option<Self> {
        match level.trim().to_lowercase().as_str() {
            "low" => Some(NutrimentLevel::Low),
            "moderate" => Some(NutrimentLevel::Moderate),
            "high" => Some(NutrimentLevel::High),
            _ => None,
        }
    }
}

impl fmt::Display for NutrimentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NutrimentLevel::Low => "low",
            NutrimentLevel::Moderate => "moderate",
            NutrimentLevel::High => "high",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(NutrimentLevel::from_str("low"), Some(NutrimentLevel::Low));
        assert_eq!(
            NutrimentLevel::from_str("MODERATE"),
            Some(NutrimentLevel::Moderate)
        );
        assert_eq!(NutrimentLevel::from_str("High"), Some(NutrimentLevel::High));
    }

    #[test]
    fn test_from_str_blank_or_unknown() {
        assert_eq!(NutrimentLevel::from_str(""), None);
        assert_eq!(NutrimentLevel::from_str("   "), None);
        assert_eq!(NutrimentLevel::from_str("extreme"), None);
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(NutrimentLevel::Moderate.to_string(), "moderate");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&NutrimentLevel::High).unwrap();
        assert_eq!(json, "\"high\"");
        let parsed: NutrimentLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, NutrimentLevel::High);
    }
}
