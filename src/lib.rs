//! Nutrient unit conversion and defensive numeric parsing
//!
//! Pure, stateless helpers for working with food-product data: converting
//! nutrient quantities between energy units (kJ/kcal), mass and volume units
//! (mg, µg, kg, l, dl, cl, ml), salt and sodium, and rewriting serving-size
//! strings between metric and imperial notation.
//!
//! Two error policies coexist deliberately. Energy conversion is strict and
//! rejects units outside {kcal, kJ}; mass/volume conversion and numeric
//! parsing are permissive and degrade to an identity conversion or a caller
//! default, because they receive externally sourced, possibly malformed data.

pub mod converter;
pub mod levels;
pub mod parser;
pub mod units;

pub use converter::{
    convert_from_gram, convert_from_gram_f32, convert_to_grams, convert_to_grams_f32,
    convert_to_kilocalories, round_number, salt_to_sodium, serving_in_l, serving_in_oz,
    sodium_to_salt, ConvertError, ConvertResult,
};
pub use levels::NutrimentLevel;
pub use parser::{get_as_f32, get_as_f32_from, get_as_i32, get_as_i32_from};
pub use units::{Unit, UnitCategory, KJ_PER_KCAL, OZ_PER_L, SALT_PER_SODIUM};
