//! Fixed Cyrillic alphabet backing the polyalphabetic cipher

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Uppercase Cyrillic letters in collation order, Ё following Е
pub const CYRILLIC_ALPHABET: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";

static LETTERS: Lazy<Vec<char>> = Lazy::new(|| CYRILLIC_ALPHABET.chars().collect());

static POSITIONS: Lazy<HashMap<char, usize>> = Lazy::new(|| {
    LETTERS
        .iter()
        .enumerate()
        .map(|(position, &letter)| (letter, position))
        .collect()
});

/// Number of letters in the alphabet
#[must_use]
pub fn size() -> usize {
    LETTERS.len()
}

/// Zero-based position of an uppercase letter, `None` if it is not in the alphabet
#[must_use]
pub fn position_of(letter: char) -> Option<usize> {
    POSITIONS.get(&letter).copied()
}

/// Letter at `position`, wrapping modulo the alphabet size
#[must_use]
pub fn letter_at(position: usize) -> char {
    LETTERS[position % LETTERS.len()]
}

/// Upper-case a single character, keeping it unchanged when the mapping is
/// not one-to-one.
#[must_use]
pub(crate) fn fold_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}
