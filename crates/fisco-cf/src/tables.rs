//! Lookup tables behind the code layout and its checksum.
//!
//! Contents follow the 1976 ministerial decree that defines the code. Every
//! table is a point-lookup; none is ever iterated in an order-sensitive way.

/// Month-of-birth letters, indexed by month minus one. F, G, I, N, O and Q
/// are deliberately absent from this alphabet.
pub(crate) const MONTH_LETTERS: [char; 12] =
  ['A', 'B', 'C', 'D', 'E', 'H', 'L', 'M', 'P', 'R', 'S', 'T'];

/// Odd-position checksum values, indexed by a character's base value. A
/// digit and the letter sharing its base value share an entry: '0' and 'A'
/// both contribute 1, '1' and 'B' both 0, and so on.
pub(crate) const ODD_VALUES: [u32; 26] = [
  1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16,
  10, 22, 25, 24, 23,
];

/// Letters the name encoder keeps for last.
pub(crate) const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// A character's base-36 value: digits are 0-9, uppercase letters 0-25 in
/// alphabetical order. Even checksum positions use this value directly.
pub(crate) fn base_value(c: char) -> Option<u32> {
  match c {
    '0'..='9' => Some(c as u32 - '0' as u32),
    'A'..='Z' => Some(c as u32 - 'A' as u32),
    _ => None,
  }
}

/// The checksum contribution of `c` at an odd 1-indexed position.
pub(crate) fn odd_value(c: char) -> Option<u32> {
  base_value(c).map(|v| ODD_VALUES[v as usize])
}

/// Map a positional sum to the trailing letter: A-Z, modulo 26.
pub(crate) fn check_letter(sum: u32) -> char {
  (b'A' + (sum % 26) as u8) as char
}

/// The month letter for `month` (1-12).
pub(crate) fn month_letter(month: u32) -> Option<char> {
  let index = month.checked_sub(1)? as usize;
  MONTH_LETTERS.get(index).copied()
}

/// Whether `c` can appear in the month position.
pub(crate) fn is_month_letter(c: char) -> bool {
  MONTH_LETTERS.contains(&c)
}

pub(crate) fn is_vowel(c: char) -> bool { VOWELS.contains(&c) }

/// Only uppercase ASCII letters count; spaces, apostrophes and accented
/// letters fall through both classifications and are skipped by the name
/// encoder.
pub(crate) fn is_consonant(c: char) -> bool {
  c.is_ascii_uppercase() && !is_vowel(c)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn base_values_cover_digits_and_letters() {
    assert_eq!(base_value('0'), Some(0));
    assert_eq!(base_value('9'), Some(9));
    assert_eq!(base_value('A'), Some(0));
    assert_eq!(base_value('Z'), Some(25));
    assert_eq!(base_value('a'), None);
    assert_eq!(base_value('-'), None);
  }

  #[test]
  fn odd_values_match_the_published_table() {
    // Spot checks across the permutation, digits and letters alike.
    assert_eq!(odd_value('0'), Some(1));
    assert_eq!(odd_value('1'), Some(0));
    assert_eq!(odd_value('9'), Some(21));
    assert_eq!(odd_value('A'), Some(1));
    assert_eq!(odd_value('K'), Some(2));
    assert_eq!(odd_value('O'), Some(11));
    assert_eq!(odd_value('T'), Some(14));
    assert_eq!(odd_value('V'), Some(10));
    assert_eq!(odd_value('X'), Some(25));
    assert_eq!(odd_value('Z'), Some(23));
  }

  #[test]
  fn odd_values_is_a_permutation() {
    let mut seen = [false; 26];
    for v in ODD_VALUES {
      assert!(!seen[v as usize], "duplicate odd value {v}");
      seen[v as usize] = true;
    }
  }

  #[test]
  fn month_letters_skip_the_ambiguous_six() {
    for skipped in ['F', 'G', 'I', 'N', 'O', 'Q'] {
      assert!(!is_month_letter(skipped));
    }
    assert_eq!(month_letter(1), Some('A'));
    assert_eq!(month_letter(6), Some('H'));
    assert_eq!(month_letter(12), Some('T'));
    assert_eq!(month_letter(0), None);
    assert_eq!(month_letter(13), None);
  }

  #[test]
  fn check_letter_wraps_at_twenty_six() {
    assert_eq!(check_letter(0), 'A');
    assert_eq!(check_letter(25), 'Z');
    assert_eq!(check_letter(26), 'A');
    assert_eq!(check_letter(112), 'I');
  }

  #[test]
  fn letter_classes_are_disjoint() {
    for c in 'A'..='Z' {
      assert_ne!(is_vowel(c), is_consonant(c), "{c} must be exactly one");
    }
    assert!(!is_vowel('à'));
    assert!(!is_consonant('à'));
    assert!(!is_consonant(' '));
  }
}
