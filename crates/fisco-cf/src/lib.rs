//! Codec and verifier for the Italian "codice fiscale" tax code.
//!
//! A codice fiscale packs a person's surname, given name, birth date, sex
//! and birthplace into 16 characters, terminated by a checksum letter. This
//! crate parses candidate codes, generates codes from reference identity
//! data, and cross-checks one against the other, reporting every fragment
//! that disagrees. Pure synchronous; no I/O, no state between calls.
//!
//! # Quick start
//!
//! ```
//! use fisco_cf::verify;
//!
//! // Format-only check: no reference data.
//! let verdict = verify("RSSMRA80A15H501I", None);
//! assert!(verdict.valid);
//! ```

pub mod error;

mod checksum;
mod encode;
mod name;
mod parse;
mod tables;
mod verify;

pub use error::{Error, Result};
use fisco_core::{
  identity::{ReferenceIdentity, Sex},
  verdict::Verdict,
};
use serde::{Deserialize, Serialize};

// ─── Public types ─────────────────────────────────────────────────────────────

/// The seven fragments of a 16-character code, in layout order.
///
/// Holds parsed fragments of a candidate as well as expected fragments
/// derived from a reference identity; the two are compared like for like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fields {
  /// 3 letters.
  pub surname: String,
  /// 3 letters.
  pub name:    String,
  /// 2 digits.
  pub year:    String,
  /// One letter from the month alphabet.
  pub month:   char,
  /// 2 digits; 41-71 encodes a female birth day.
  pub day:     String,
  /// One letter and 3 digits.
  pub place:   String,
  /// The trailing checksum letter.
  pub check:   char,
}

impl Fields {
  /// The expected fragments for `reference`, fully derived from it.
  pub fn of_identity(reference: &ReferenceIdentity) -> Self {
    encode::fields_of(reference)
  }

  /// The 15-character body: every fragment except the check letter.
  pub fn body(&self) -> String {
    format!(
      "{}{}{}{}{}{}",
      self.surname, self.name, self.year, self.month, self.day, self.place
    )
  }

  /// The full 16-character code.
  pub fn code(&self) -> String {
    format!("{}{}", self.body(), self.check)
  }
}

// ─── Public API ───────────────────────────────────────────────────────────────

/// Verify `candidate`, optionally against `reference`.
///
/// With no reference data the verdict reflects structure alone. With it, the
/// candidate's fragments are cross-checked against fragments derived from
/// the reference, and the verdict carries the reference-derived code plus
/// one discrepancy per mismatching fragment, in layout order.
pub fn verify(
  candidate: &str,
  reference: Option<&ReferenceIdentity>,
) -> Verdict {
  verify::verify(candidate, reference)
}

/// Generate the full 16-character code for `reference`.
pub fn encode(reference: &ReferenceIdentity) -> String {
  encode::encode(reference)
}

/// Split `candidate` into its fragments.
///
/// Case-insensitive; rejects anything that is not exactly 16 characters in
/// the fixed layout, naming the first offending fragment.
pub fn parse(candidate: &str) -> Result<Fields> {
  parse::parse(candidate)
}

/// Compute the check letter for a 15-character body.
pub fn compute_check(body: &str) -> Result<char> {
  checksum::compute_check(body)
}

/// Derive the 3-letter fragment for a surname (`given = false`) or a given
/// name (`given = true`).
pub fn name_fragment(raw: &str, given: bool) -> String {
  name::fragment(raw, given)
}

/// The 2-digit year fragment: the last two decimal digits.
pub fn year_code(year: i32) -> String { encode::year_code(year) }

/// The month letter for a month number (1-12).
pub fn month_code(month: u32) -> Result<char> { encode::month_code(month) }

/// The 2-digit day fragment for a day (1-31); female days are offset by 40.
pub fn day_code(day: u32, sex: Sex) -> Result<String> {
  encode::day_code(day, sex)
}

// ─── Round-trip tests ─────────────────────────────────────────────────────────


// ─── Shared test helpers ──────────────────────────────────────────────────────
