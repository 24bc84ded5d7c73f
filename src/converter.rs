//! Unit conversion functions
//!
//! Converts nutrient quantities between units and rewrites serving-size
//! strings between metric and imperial notation.
//!
//! Energy conversion is strict: a unit outside {kcal, kJ} is a contract
//! violation and returns an error. Mass/volume conversion is permissive:
//! unrecognized or missing units fall back to an identity conversion so that
//! malformed product data degrades instead of failing.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::units::{Unit, KJ_PER_KCAL, OZ_PER_L, SALT_PER_SODIUM};

/// Conversion error types
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("invalid energy unit '{0}': expected kcal or kj")]
    InvalidEnergyUnit(String),

    #[error("no numeric value in serving size '{0}'")]
    MissingNumber(String),
}

/// Result type for conversions that can fail
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Leading decimal number in a serving-size string
static LEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)").expect("invalid serving-size number pattern"));

/// Convert an energy quantity to kilocalories
///
/// Accepts only kcal or kJ (case-insensitive); any other token is a caller
/// error and is surfaced, never defaulted. The kJ branch truncates toward
/// zero.
pub fn convert_to_kilocalories(value: i32, original_unit: &str) -> ConvertResult<i32> {
    match Unit::from_str(original_unit) {
        Some(Unit::Kj) => Ok((f64::from(value) / KJ_PER_KCAL) as i32),
        Some(Unit::Kcal) => Ok(value),
        _ => Err(ConvertError::InvalidEnergyUnit(original_unit.to_string())),
    }
}

/// Convert a quantity in the given unit to the canonical gram/ml base
///
/// Grams and milliliters are treated interchangeably (1 ml ≡ 1 g).
/// Unrecognized or missing units pass through unconverted; so do IU values,
/// which have no fixed gram equivalent.
pub fn convert_to_grams(value: f64, unit: Option<&str>) -> f64 {
    let Some(token) = unit else {
        return value;
    };
    match Unit::from_str(token) {
        Some(Unit::Milligram) => value / 1_000.0,
        Some(Unit::Microgram) => value / 1_000_000.0,
        Some(Unit::Kilogram) | Some(Unit::Liter) => value * 1_000.0,
        Some(Unit::Deciliter) => value * 100.0,
        Some(Unit::Centiliter) => value * 10.0,
        Some(Unit::Gram) | Some(Unit::Milliliter) => value,
        Some(Unit::Iu) | Some(Unit::Kcal) | Some(Unit::Kj) => value,
        None => {
            tracing::warn!("Unrecognized unit '{}'. Leaving value unconverted.", token);
            value
        }
    }
}

/// `f32` convenience wrapper for [`convert_to_grams`]; computes in `f64`
/// and narrows at the end
pub fn convert_to_grams_f32(value: f32, unit: Option<&str>) -> f32 {
    convert_to_grams(f64::from(value), unit) as f32
}

/// Convert a quantity in the canonical gram/ml base to the target unit
///
/// Inverse of [`convert_to_grams`]; milliliters and any unrecognized or
/// missing target pass through unconverted.
pub fn convert_from_gram(value_in_gram_or_ml: f64, target_unit: Option<&str>) -> f64 {
    let Some(token) = target_unit else {
        return value_in_gram_or_ml;
    };
    match Unit::from_str(token) {
        Some(Unit::Kilogram) | Some(Unit::Liter) => value_in_gram_or_ml / 1_000.0,
        Some(Unit::Milligram) => value_in_gram_or_ml * 1_000.0,
        Some(Unit::Microgram) => value_in_gram_or_ml * 1_000_000.0,
        Some(Unit::Deciliter) => value_in_gram_or_ml / 100.0,
        Some(Unit::Centiliter) => value_in_gram_or_ml / 10.0,
        _ => value_in_gram_or_ml,
    }
}

/// `f32` convenience wrapper for [`convert_from_gram`]
pub fn convert_from_gram_f32(value_in_gram_or_ml: f32, target_unit: Option<&str>) -> f32 {
    convert_from_gram(f64::from(value_in_gram_or_ml), target_unit) as f32
}

/// Convert a salt quantity to the equivalent sodium quantity
pub fn salt_to_sodium(salt_value: f64) -> f64 {
    salt_value / SALT_PER_SODIUM
}

/// Convert a sodium quantity to the equivalent salt quantity
pub fn sodium_to_salt(sodium_value: f64) -> f64 {
    sodium_value * SALT_PER_SODIUM
}

/// Rewrite a serving size in ml, cl, or l as fluid ounces
///
/// Returns the input unchanged when no volume suffix is present (the value
/// is assumed to already be in a non-volume or imperial unit). A volume
/// suffix without a numeric prefix is an error.
///
/// Examples: `"500 ml"` -> `"16.91 oz"`, `"1 l"` -> `"33.81 oz"`,
/// `"250 g"` -> `"250 g"`.
pub fn serving_in_oz(serving_size: &str) -> ConvertResult<String> {
    let lower = serving_size.to_lowercase();
    // "ml" and "cl" must be checked before the bare "l": every ml/cl
    // serving string also contains the substring "l"
    let factor = if lower.contains("ml") {
        OZ_PER_L / 1_000.0
    } else if lower.contains("cl") {
        OZ_PER_L / 100.0
    } else if lower.contains('l') {
        OZ_PER_L
    } else {
        return Ok(serving_size.to_string());
    };
    let value = leading_number(serving_size)?;
    Ok(format!("{} oz", round_number(value * factor)))
}

/// Rewrite a serving size in fluid ounces as liters
///
/// Returns the input unchanged when no "oz" suffix is present. Unlike
/// [`serving_in_oz`], the result is not rounded for display; the asymmetry
/// is long-standing observed behavior and is pinned by a test.
pub fn serving_in_l(serving_size: &str) -> ConvertResult<String> {
    if !serving_size.to_lowercase().contains("oz") {
        return Ok(serving_size.to_string());
    }
    let value = leading_number(serving_size)?;
    Ok(format!("{} l", value / OZ_PER_L))
}

/// Round a value to at most two decimal places for display
///
/// Trailing zeros and a trailing decimal point are trimmed, so `4.0`
/// becomes `"4"` and `16.907` becomes `"16.91"`.
pub fn round_number(value: f64) -> String {
    let formatted = format!("{value:.2}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

fn leading_number(serving_size: &str) -> ConvertResult<f64> {
    LEADING_NUMBER
        .captures(serving_size)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .ok_or_else(|| ConvertError::MissingNumber(serving_size.to_string()))
}
