//! Driving age checks.

use crate::outcome::{InvalidInput, Outcome};

use phf::phf_map;

/// Minimum legal driving age, keyed by country code.
static LEGAL_DRIVING_AGE: phf::Map<&'static str, u32> = phf_map! {
  "US" => 16,
  "UK" => 17,
};

/// The minimum driving age for `country_code`, if the country is
/// known.
pub fn legal_driving_age(country_code: &str) -> Option<u32> {
  LEGAL_DRIVING_AGE.get(country_code).copied()
}

/// Whether someone of the given age may drive in the given country.
/// Unknown country codes produce an invalid outcome.
pub fn can_drive(age: u32, country_code: &str) -> Outcome<bool> {
  match legal_driving_age(country_code) {
    Some(legal_age) => Outcome::Value(age >= legal_age),
    None => {
      tracing::debug!(country_code, "No driving age known for country");
      InvalidInput::CountryCode.into()
    }
  }
}
