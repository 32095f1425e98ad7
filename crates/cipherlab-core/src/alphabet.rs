//! Letter helpers shared by every cipher.
//!
//! All ciphers work over the 26-letter Latin alphabet. A letter's case is
//! tracked separately from its position, so a transform can move a letter
//! within the alphabet and then put it back in the case it came from.
//!
//! # Example
//!
//! ```
//! use cipherlab_core::alphabet::{self, LetterCase};
//!
//! assert_eq!(alphabet::position('c'), Some(2));
//! assert_eq!(LetterCase::of('c'), Some(LetterCase::Lower));
//! assert_eq!(LetterCase::Upper.letter(2), 'C');
//! ```

/// Number of letters in the alphabet.
pub const LEN: u8 = 26;

/// The uppercase alphabet in natural order.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Case of a single Latin letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterCase {
    #[default]
    Upper,
    Lower,
}

impl LetterCase {
    /// Returns the case of `ch`, or `None` if `ch` is not a Latin letter.
    pub fn of(ch: char) -> Option<Self> {
        if ch.is_ascii_uppercase() {
            Some(Self::Upper)
        } else if ch.is_ascii_lowercase() {
            Some(Self::Lower)
        } else {
            None
        }
    }

    /// Picks the case a generated key should use for `text`.
    ///
    /// Text is treated as lowercase only when it contains lowercase letters
    /// and no uppercase ones; mixed-case and letterless text count as
    /// uppercase.
    ///
    /// # Examples
    ///
    /// ```
    /// use cipherlab_core::alphabet::LetterCase;
    ///
    /// assert_eq!(LetterCase::detect("attack at dawn"), LetterCase::Lower);
    /// assert_eq!(LetterCase::detect("Attack at dawn"), LetterCase::Upper);
    /// assert_eq!(LetterCase::detect("1234"), LetterCase::Upper);
    /// ```
    pub fn detect(text: &str) -> Self {
        let mut has_lower = false;
        for case in text.chars().filter_map(Self::of) {
            match case {
                Self::Upper => return Self::Upper,
                Self::Lower => has_lower = true,
            }
        }
        if has_lower { Self::Lower } else { Self::Upper }
    }

    fn base(self) -> u8 {
        match self {
            Self::Upper => b'A',
            Self::Lower => b'a',
        }
    }

    /// Returns the letter at `offset` (taken mod 26) in this case.
    pub fn letter(self, offset: u8) -> char {
        char::from(self.base() + offset % LEN)
    }

    /// Converts every ASCII letter of `s` to this case.
    pub fn apply(self, s: &str) -> String {
        match self {
            Self::Upper => s.to_ascii_uppercase(),
            Self::Lower => s.to_ascii_lowercase(),
        }
    }
}

/// Returns the zero-based alphabet position of `ch`, ignoring case.
pub fn position(ch: char) -> Option<u8> {
    LetterCase::of(ch).map(|case| ch as u8 - case.base())
}

/// Moves a letter `by` positions forward, wrapping and keeping its case.
///
/// Anything that is not a Latin letter is returned unchanged.
pub fn shift_letter(ch: char, by: u8) -> char {
    match (LetterCase::of(ch), position(ch)) {
        (Some(case), Some(pos)) => case.letter((pos + by % LEN) % LEN),
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ignores_case() {
        assert_eq!(position('A'), Some(0));
        assert_eq!(position('a'), Some(0));
        assert_eq!(position('Z'), Some(25));
        assert_eq!(position('z'), Some(25));
        assert_eq!(position('!'), None);
        assert_eq!(position('é'), None);
    }

    #[test]
    fn test_shift_letter_wraps_and_keeps_case() {
        assert_eq!(shift_letter('Y', 3), 'B');
        assert_eq!(shift_letter('y', 3), 'b');
        assert_eq!(shift_letter('a', 0), 'a');
        assert_eq!(shift_letter(' ', 5), ' ');
        assert_eq!(shift_letter('7', 5), '7');
    }

    #[test]
    fn test_detect_case() {
        assert_eq!(LetterCase::detect("hello"), LetterCase::Lower);
        assert_eq!(LetterCase::detect("HELLO"), LetterCase::Upper);
        assert_eq!(LetterCase::detect("hEllo"), LetterCase::Upper);
        assert_eq!(LetterCase::detect(""), LetterCase::Upper);
    }

    #[test]
    fn test_alphabet_constants_agree() {
        assert_eq!(UPPERCASE.len(), LEN as usize);
        assert_eq!(
            LetterCase::Lower.apply(UPPERCASE),
            "abcdefghijklmnopqrstuvwxyz"
        );
        for (i, ch) in UPPERCASE.chars().enumerate() {
            assert_eq!(LetterCase::Upper.letter(i as u8), ch);
        }
    }
}
