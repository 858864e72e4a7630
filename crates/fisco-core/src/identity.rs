//! Reference identity — the personal data a tax code is derived from.
//!
//! An identity is caller-supplied input, never produced by this crate.
//! Construction is the precondition boundary: once an identity exists, every
//! field is in range and fragment encoding cannot fail.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

// ─── Sex ─────────────────────────────────────────────────────────────────────

/// Sex as recorded on the tax code; it offsets the day-of-birth field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
  Male,
  Female,
}

impl FromStr for Sex {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "m" | "male" => Ok(Self::Male),
      "f" | "female" => Ok(Self::Female),
      _ => Err(Error::InvalidSex(s.to_string())),
    }
  }
}

// ─── Place code ──────────────────────────────────────────────────────────────

/// ISTAT code of the birthplace (municipality, or country for foreign
/// births): one uppercase letter followed by three digits, e.g. `H501` for
/// Rome.
///
/// Only the shape is checked here. Whether the code exists in the registry is
/// an external concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceCode(String);

impl PlaceCode {
  pub fn as_str(&self) -> &str { &self.0 }
}

impl FromStr for PlaceCode {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let code = s.trim().to_ascii_uppercase();
    let bytes = code.as_bytes();
    if bytes.len() != 4
      || !bytes[0].is_ascii_uppercase()
      || !bytes[1..].iter().all(u8::is_ascii_digit)
    {
      return Err(Error::InvalidPlaceCode(s.to_string()));
    }
    Ok(Self(code))
  }
}

impl fmt::Display for PlaceCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Identity ────────────────────────────────────────────────────────────────

/// The personal data a tax code is derived from. Immutable input; the
/// verifier and encoder only ever read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceIdentity {
  pub surname:    String,
  pub given_name: String,
  pub sex:        Sex,
  pub birth_date: NaiveDate,
  pub place_code: PlaceCode,
}

impl ReferenceIdentity {
  pub fn new(
    surname: impl Into<String>,
    given_name: impl Into<String>,
    sex: Sex,
    birth_date: NaiveDate,
    place_code: PlaceCode,
  ) -> Self {
    Self {
      surname: surname.into(),
      given_name: given_name.into(),
      sex,
      birth_date,
      place_code,
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn place_code_accepts_letter_plus_three_digits() {
    let code: PlaceCode = "H501".parse().unwrap();
    assert_eq!(code.as_str(), "H501");
    assert_eq!(code.to_string(), "H501");
  }

  #[test]
  fn place_code_uppercases_input() {
    let code: PlaceCode = "h501".parse().unwrap();
    assert_eq!(code.as_str(), "H501");
  }

  #[test]
  fn place_code_rejects_bad_shapes() {
    for bad in ["", "H50", "H5011", "1501", "H5O1", "HH01"] {
      let r = bad.parse::<PlaceCode>();
      assert!(
        matches!(r, Err(Error::InvalidPlaceCode(_))),
        "accepted {bad:?}"
      );
    }
  }

  #[test]
  fn sex_parses_common_spellings() {
    assert_eq!("m".parse::<Sex>().unwrap(), Sex::Male);
    assert_eq!("M".parse::<Sex>().unwrap(), Sex::Male);
    assert_eq!("male".parse::<Sex>().unwrap(), Sex::Male);
    assert_eq!("f".parse::<Sex>().unwrap(), Sex::Female);
    assert_eq!("Female".parse::<Sex>().unwrap(), Sex::Female);
    assert!(matches!("x".parse::<Sex>(), Err(Error::InvalidSex(_))));
  }
}
