//! The 3-letter name fragments.
//!
//! Surnames and given names each compress to three letters: consonants in
//! original order, then vowels, then 'X' for anything shorter than three
//! usable letters. Given names with more than three consonants drop the
//! second one.

use crate::tables;

/// Derive the 3-letter fragment for one name.
///
/// `given` selects the given-name rule: with more than three consonants the
/// fragment keeps the first, third and fourth. The result is always exactly
/// three uppercase letters.
pub(crate) fn fragment(raw: &str, given: bool) -> String {
  let upper = raw.to_uppercase();
  let consonants: Vec<char> =
    upper.chars().filter(|&c| tables::is_consonant(c)).collect();

  let mut out = String::with_capacity(3);
  if given && consonants.len() > 3 {
    out.push(consonants[0]);
    out.push(consonants[2]);
    out.push(consonants[3]);
  } else {
    out.extend(consonants.iter().take(3));
  }

  if out.len() < 3 {
    let vowels = upper.chars().filter(|&c| tables::is_vowel(c));
    out.extend(vowels.take(3 - out.len()));
  }
  // Bounded by the output target, so even empty input terminates.
  while out.len() < 3 {
    out.push('X');
  }

  out
}

// ─── Tests ───────────────────────────────────────────────────────────────────
