//! The trailing check letter.

use crate::{
  error::{Error, Result},
  tables,
};

/// Compute the check letter for a 15-character body.
///
/// Odd 1-indexed positions contribute their permuted value, even positions
/// their plain base-36 value; the sum modulo 26 selects a letter. The two
/// value tables are not interchangeable, and position 1 is odd.
pub(crate) fn compute_check(body: &str) -> Result<char> {
  let chars: Vec<char> = body.chars().collect();
  if chars.len() != 15 {
    return Err(Error::WrongBodyLength(chars.len()));
  }

  let mut sum = 0u32;
  for (i, &c) in chars.iter().enumerate() {
    // 0-indexed loop, 1-indexed rule: even i is an odd position.
    let value = if i % 2 == 0 {
      tables::odd_value(c)
    } else {
      tables::base_value(c)
    };
    let Some(value) = value else {
      return Err(Error::UnsupportedBodyChar {
        position: i + 1,
        found:    c,
      });
    };
    sum += value;
  }

  Ok(tables::check_letter(sum))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn computes_known_check_letters() {
    assert_eq!(compute_check("RSSMRA80A15H501").unwrap(), 'I');
    assert_eq!(compute_check("RSSMRA85T10A562").unwrap(), 'S');
    assert_eq!(compute_check("BNCCHR92H43G273").unwrap(), 'A');
  }

  #[test]
  fn is_deterministic() {
    let body = "RSSMRA80A15H501";
    assert_eq!(compute_check(body).unwrap(), compute_check(body).unwrap());
  }

  #[test]
  fn all_a_body_pins_the_position_parity() {
    // Eight odd positions at 1 each, seven even positions at 0: sum 8.
    // Conflating the two tables would land on 'A' or 'P' instead.
    assert_eq!(compute_check("AAAAAAAAAAAAAAA").unwrap(), 'I');
  }

  #[test]
  fn rejects_wrong_body_lengths() {
    assert!(matches!(
      compute_check("RSSMRA80A15H50"),
      Err(Error::WrongBodyLength(14))
    ));
    assert!(matches!(
      compute_check("RSSMRA80A15H501I"),
      Err(Error::WrongBodyLength(16))
    ));
  }

  #[test]
  fn rejects_characters_outside_the_value_tables() {
    let r = compute_check("rSSMRA80A15H501");
    let Err(Error::UnsupportedBodyChar { position, found }) = r else {
      panic!("expected an unsupported character")
    };
    assert_eq!(position, 1);
    assert_eq!(found, 'r');
  }
}
