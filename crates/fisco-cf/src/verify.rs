//! Verification pass: candidate against reference, fragment by fragment.
//!
//! All comparisons run to completion; every mismatch lands in the verdict's
//! discrepancy list in layout order, so one call yields the complete
//! diagnostic. All state is call-local.

use fisco_core::{
  identity::ReferenceIdentity,
  verdict::{Discrepancy, Field, Verdict},
};

use crate::{Fields, encode, parse};

/// Verify `candidate`, optionally against `reference`.
///
/// Without reference data only the structure is checked. With it, every
/// parsed fragment is compared to the fragment derived from the reference,
/// and the verdict carries the fully reference-derived code.
pub(crate) fn verify(
  candidate: &str,
  reference: Option<&ReferenceIdentity>,
) -> Verdict {
  let Ok(parsed) = parse::parse(candidate) else {
    return Verdict::malformed();
  };
  let Some(reference) = reference else {
    return Verdict::well_formed();
  };

  let expected = encode::fields_of(reference);
  let discrepancies = compare(&expected, &parsed);

  Verdict {
    valid: discrepancies.is_empty(),
    reconstructed: Some(expected.code()),
    discrepancies,
  }
}

/// Compare two fragment sets in layout order.
fn compare(expected: &Fields, parsed: &Fields) -> Vec<Discrepancy> {
  let pairs = [
    (Field::Surname, expected.surname.clone(), parsed.surname.clone()),
    (Field::Name, expected.name.clone(), parsed.name.clone()),
    (Field::Year, expected.year.clone(), parsed.year.clone()),
    (Field::Month, expected.month.to_string(), parsed.month.to_string()),
    (Field::Day, expected.day.clone(), parsed.day.clone()),
    (Field::Place, expected.place.clone(), parsed.place.clone()),
    (Field::Check, expected.check.to_string(), parsed.check.to_string()),
  ];

  pairs
    .into_iter()
    .filter(|(_, expected, actual)| expected != actual)
    .map(|(field, expected, actual)| Discrepancy {
      field,
      expected,
      actual,
    })
    .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
