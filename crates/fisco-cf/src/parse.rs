//! Fixed-width parser for candidate codes.
//!
//! The 16-character layout is seven fragments of fixed width:
//!
//! ```text
//! RSSMRA 80 A 15 H501 I
//! surname+name (3+3), year (2), month (1), day (2), place (1+3), check (1)
//! ```
//!
//! Rejections here are structural: the error names the first fragment whose
//! character class does not match. Whether the fragments agree with a real
//! person is the verifier's job.

use std::ops::Range;

use fisco_core::verdict::Field;

use crate::{
  Fields,
  error::{Error, Result},
  tables,
};

/// Split `candidate` into its fragments, upper-casing first.
pub(crate) fn parse(candidate: &str) -> Result<Fields> {
  let code = candidate.to_uppercase();
  let chars: Vec<char> = code.chars().collect();
  if chars.len() != 16 {
    return Err(Error::WrongLength(chars.len()));
  }

  let surname = run(&chars, 0..3, Field::Surname, is_letter)?;
  let name = run(&chars, 3..6, Field::Name, is_letter)?;
  let year = run(&chars, 6..8, Field::Year, is_digit)?;
  let month = single(chars[8], Field::Month, tables::is_month_letter)?;
  let day = run(&chars, 9..11, Field::Day, is_digit)?;
  let place = place_fragment(&chars)?;
  let check = single(chars[15], Field::Check, is_letter)?;

  Ok(Fields {
    surname,
    name,
    year,
    month,
    day,
    place,
    check,
  })
}

fn is_letter(c: char) -> bool { c.is_ascii_uppercase() }

fn is_digit(c: char) -> bool { c.is_ascii_digit() }

/// A fragment whose characters all share one class.
fn run(
  chars: &[char],
  range: Range<usize>,
  field: Field,
  class: impl Fn(char) -> bool,
) -> Result<String> {
  let slice = &chars[range];
  if slice.iter().all(|&c| class(c)) {
    Ok(slice.iter().collect())
  } else {
    Err(Error::Malformed {
      field,
      found: slice.iter().collect(),
    })
  }
}

fn single(c: char, field: Field, class: impl Fn(char) -> bool) -> Result<char> {
  if class(c) {
    Ok(c)
  } else {
    Err(Error::Malformed {
      field,
      found: c.to_string(),
    })
  }
}

/// The place fragment mixes classes: one letter, then three digits.
fn place_fragment(chars: &[char]) -> Result<String> {
  let slice = &chars[11..15];
  if is_letter(slice[0]) && slice[1..].iter().all(|&c| is_digit(c)) {
    Ok(slice.iter().collect())
  } else {
    Err(Error::Malformed {
      field: Field::Place,
      found: slice.iter().collect(),
    })
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
