//! Verification verdict — the outcome of checking one candidate code.
//!
//! A verdict is built fresh on every call and returned by value; nothing is
//! accumulated across calls.

use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Field ───────────────────────────────────────────────────────────────────

/// The fragment of the 16-character layout a discrepancy refers to, in
/// layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
  Surname,
  Name,
  Year,
  Month,
  Day,
  Place,
  Check,
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      Self::Surname => "surname",
      Self::Name => "name",
      Self::Year => "year",
      Self::Month => "month",
      Self::Day => "day",
      Self::Place => "place",
      Self::Check => "check",
    };
    f.write_str(s)
  }
}

// ─── Discrepancy ─────────────────────────────────────────────────────────────

/// One fragment where the candidate disagrees with the value derived from
/// the reference identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrepancy {
  pub field:    Field,
  pub expected: String,
  pub actual:   String,
}

impl fmt::Display for Discrepancy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}: expected {:?}, found {:?}",
      self.field, self.expected, self.actual
    )
  }
}

// ─── Verdict ─────────────────────────────────────────────────────────────────

/// The outcome of one verification call.
///
/// `reconstructed` is present only after a strict check: the full code
/// rebuilt from the reference identity, uppercase, always 16 characters.
/// `discrepancies` lists every mismatching fragment in layout order, never
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
  pub valid:         bool,
  pub reconstructed: Option<String>,
  pub discrepancies: Vec<Discrepancy>,
}

impl Verdict {
  /// Verdict for a candidate that failed the structural checks. Fragments
  /// could not be extracted, so there is nothing to compare against.
  pub fn malformed() -> Self {
    Self {
      valid:         false,
      reconstructed: None,
      discrepancies: Vec::new(),
    }
  }

  /// Verdict for a well-formed candidate checked without reference data.
  pub fn well_formed() -> Self {
    Self {
      valid:         true,
      reconstructed: None,
      discrepancies: Vec::new(),
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
