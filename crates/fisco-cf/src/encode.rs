//! Fragment derivation from reference data, and full code generation.
//!
//! The raw-integer entry points (`month_code`, `day_code`) reject
//! out-of-range input loudly. [`fields_of`] never fails: a
//! [`ReferenceIdentity`] carries a calendar date and a validated place code,
//! so every fragment it derives is in range by construction.

use chrono::Datelike;
use fisco_core::identity::{ReferenceIdentity, Sex};

use crate::{
  Fields, checksum,
  error::{Error, Result},
  name, tables,
};

/// The 2-digit year fragment: the last two decimal digits of `year`.
pub(crate) fn year_code(year: i32) -> String {
  format!("{:02}", year.rem_euclid(100))
}

/// The month letter for `month` (1-12).
pub(crate) fn month_code(month: u32) -> Result<char> {
  tables::month_letter(month).ok_or(Error::MonthOutOfRange(month))
}

/// The 2-digit day fragment for `day` (1-31). Female days are offset by 40,
/// so the fragment carries sex as well as the date.
pub(crate) fn day_code(day: u32, sex: Sex) -> Result<String> {
  if !(1..=31).contains(&day) {
    return Err(Error::DayOutOfRange(day));
  }
  let encoded = match sex {
    Sex::Male => day,
    Sex::Female => day + 40,
  };
  Ok(format!("{encoded:02}"))
}

/// All seven expected fragments for `reference`, check letter included.
pub(crate) fn fields_of(reference: &ReferenceIdentity) -> Fields {
  let date = reference.birth_date;
  let surname = name::fragment(&reference.surname, false);
  let given = name::fragment(&reference.given_name, true);
  let year = year_code(date.year());
  // A calendar date's month and day are always in fragment range.
  let month = month_code(date.month()).expect("calendar month");
  let day = day_code(date.day(), reference.sex).expect("calendar day");
  let place = reference.place_code.as_str().to_string();

  let body = format!("{surname}{given}{year}{month}{day}{place}");
  let check = checksum::compute_check(&body)
    .expect("fragments stay within the checksum alphabet");

  Fields {
    surname,
    name: given,
    year,
    month,
    day,
    place,
    check,
  }
}

/// Generate the full 16-character code for `reference`.
pub(crate) fn encode(reference: &ReferenceIdentity) -> String {
  fields_of(reference).code()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;
  use crate::test_helpers::{bianchi, identity, rossi};

  #[test]
  fn year_code_keeps_the_last_two_digits() {
    assert_eq!(year_code(1980), "80");
    assert_eq!(year_code(2003), "03");
    assert_eq!(year_code(2000), "00");
    assert_eq!(year_code(1899), "99");
  }

  #[test]
  fn month_code_maps_through_the_letter_table() {
    assert_eq!(month_code(1).unwrap(), 'A');
    assert_eq!(month_code(6).unwrap(), 'H');
    assert_eq!(month_code(12).unwrap(), 'T');
    assert!(matches!(month_code(0), Err(Error::MonthOutOfRange(0))));
    assert!(matches!(month_code(13), Err(Error::MonthOutOfRange(13))));
  }

  #[test]
  fn day_code_zero_pads_and_offsets_females() {
    assert_eq!(day_code(1, Sex::Male).unwrap(), "01");
    assert_eq!(day_code(31, Sex::Male).unwrap(), "31");
    assert_eq!(day_code(1, Sex::Female).unwrap(), "41");
    assert_eq!(day_code(15, Sex::Female).unwrap(), "55");
    assert_eq!(day_code(31, Sex::Female).unwrap(), "71");
  }

  #[test]
  fn day_code_rejects_out_of_range_days() {
    assert!(matches!(day_code(0, Sex::Male), Err(Error::DayOutOfRange(0))));
    assert!(matches!(
      day_code(32, Sex::Female),
      Err(Error::DayOutOfRange(32))
    ));
  }

  #[test]
  fn female_day_offset_is_forty() {
    for day in 1..=31 {
      let m: u32 = day_code(day, Sex::Male).unwrap().parse().unwrap();
      let f: u32 = day_code(day, Sex::Female).unwrap().parse().unwrap();
      assert_eq!(f - m, 40);
    }
  }

  #[test]
  fn day_codes_are_unique_per_sex() {
    for sex in [Sex::Male, Sex::Female] {
      let codes: HashSet<String> =
        (1..=31).map(|d| day_code(d, sex).unwrap()).collect();
      assert_eq!(codes.len(), 31);
    }
  }

  #[test]
  fn derives_the_rossi_fragments() {
    let fields = fields_of(&rossi());
    assert_eq!(fields.surname, "RSS");
    assert_eq!(fields.name, "MRA");
    assert_eq!(fields.year, "80");
    assert_eq!(fields.month, 'A');
    assert_eq!(fields.day, "15");
    assert_eq!(fields.place, "H501");
    assert_eq!(fields.body(), "RSSMRA80A15H501");
    assert_eq!(fields.check, 'I');
  }

  #[test]
  fn encodes_full_codes() {
    assert_eq!(encode(&rossi()), "RSSMRA80A15H501I");
    assert_eq!(encode(&bianchi()), "BNCCHR92H43G273A");
  }

  #[test]
  fn sex_changes_only_the_day_and_check_fragments() {
    let code =
      encode(&identity("Rossi", "Mario", Sex::Female, (1980, 1, 15), "H501"));
    assert_eq!(code, "RSSMRA80A55H501M");
  }
}
