//! Error types for the fisco-cf codec.
//!
//! Structural errors (`WrongLength`, `Malformed`) mean a candidate could not
//! be split into fragments at all. The remaining variants are precondition
//! violations on the raw-integer and raw-body entry points; they signal a
//! malformed call, not a mismatch.

use fisco_core::verdict::Field;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("candidate is {0} characters long, want 16")]
  WrongLength(usize),

  #[error("malformed {field} fragment: {found:?}")]
  Malformed { field: Field, found: String },

  #[error("month out of range: {0} (want 1-12)")]
  MonthOutOfRange(u32),

  #[error("day out of range: {0} (want 1-31)")]
  DayOutOfRange(u32),

  #[error("body is {0} characters long, want 15")]
  WrongBodyLength(usize),

  #[error("unsupported character {found:?} at body position {position}")]
  UnsupportedBodyChar { position: usize, found: char },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
