//! Rail Fence transposition cipher.
//!
//! Characters are written in a zig-zag across a number of rails (rows),
//! starting at the top rail and bouncing off the top and bottom rails, and
//! the rails are then read top to bottom. Every character takes part,
//! including spaces and punctuation.
//!
//! # Example
//!
//! ```
//! use cipherlab_core::rail_fence::{self, Rails};
//!
//! let rails = Rails::new(3).unwrap();
//! let ciphertext = rail_fence::encrypt("WEAREDISCOVEREDFLEEATONCE", rails);
//! assert_eq!(ciphertext, "WECRLTEERDSOEEFEAOCAIVDEN");
//! assert_eq!(rail_fence::decrypt(&ciphertext, rails), "WEAREDISCOVEREDFLEEATONCE");
//! ```

use std::{fmt, str::FromStr};

use rand::Rng;

use crate::error::KeyError;

/// Number of rails; always at least 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rails(usize);

impl Rails {
    /// The smallest usable rail count.
    pub const MIN: usize = 2;

    /// Checks that `count` is at least [`Rails::MIN`].
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::TooFewRails`] for counts below 2.
    pub fn new(count: i64) -> Result<Self, KeyError> {
        match usize::try_from(count) {
            Ok(rails) if rails >= Self::MIN => Ok(Self(rails)),
            _ => Err(KeyError::TooFewRails(count)),
        }
    }

    /// The rail count.
    pub fn get(self) -> usize {
        self.0
    }
}

impl FromStr for Rails {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let count = s
            .parse::<i64>()
            .map_err(|_| KeyError::NotANumber(s.to_string()))?;
        Self::new(count)
    }
}

impl fmt::Display for Rails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Yields the rail index of each successive position in the zig-zag.
struct ZigZag {
    rail: usize,
    last: usize,
    descending: bool,
}

impl ZigZag {
    fn new(rails: Rails) -> Self {
        Self {
            rail: 0,
            last: rails.get() - 1,
            descending: true,
        }
    }
}

impl Iterator for ZigZag {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.rail;
        if self.descending {
            self.rail += 1;
        } else {
            self.rail -= 1;
        }
        if self.rail == 0 || self.rail == self.last {
            self.descending = !self.descending;
        }
        Some(current)
    }
}

/// Writes `text` along the zig-zag and reads the rails in order.
pub fn encrypt(text: &str, rails: Rails) -> String {
    let mut rows = vec![String::new(); rails.get()];
    for (ch, rail) in text.chars().zip(ZigZag::new(rails)) {
        rows[rail].push(ch);
    }
    rows.concat()
}

/// Reverses [`encrypt`].
///
/// The zig-zag is replayed over the ciphertext length to learn how many
/// characters each rail holds; the ciphertext is cut into those rail blocks
/// and the zig-zag is walked again, taking the next character of each rail.
pub fn decrypt(text: &str, rails: Rails) -> String {
    let chars: Vec<char> = text.chars().collect();
    let pattern: Vec<usize> = ZigZag::new(rails).take(chars.len()).collect();

    let mut counts = vec![0usize; rails.get()];
    for &rail in &pattern {
        counts[rail] += 1;
    }

    let mut blocks = Vec::with_capacity(rails.get());
    let mut rest = chars.as_slice();
    for count in counts {
        let (block, tail) = rest.split_at(count);
        blocks.push(block.iter());
        rest = tail;
    }

    pattern
        .iter()
        .filter_map(|&rail| blocks[rail].next())
        .collect()
}

/// Picks a random rail count in `2..=5`.
pub fn generate_key<R: Rng + ?Sized>(rng: &mut R) -> Rails {
    Rails(rng.random_range(Rails::MIN..=5))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use crate::testing::ZeroRng;

    use super::*;

    fn rails(count: i64) -> Rails {
        Rails::new(count).unwrap()
    }

    #[test]
    fn test_zig_zag_pattern() {
        let pattern: Vec<usize> = ZigZag::new(rails(3)).take(9).collect();
        assert_eq!(pattern, vec![0, 1, 2, 1, 0, 1, 2, 1, 0]);

        let pattern: Vec<usize> = ZigZag::new(rails(2)).take(5).collect();
        assert_eq!(pattern, vec![0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_two_rails() {
        assert_eq!(encrypt("HELLO", rails(2)), "HLOEL");
        assert_eq!(decrypt("HLOEL", rails(2)), "HELLO");
    }

    #[test]
    fn test_more_rails_than_chars() {
        assert_eq!(encrypt("abc", rails(10)), "abc");
        assert_eq!(decrypt("abc", rails(10)), "abc");
    }

    #[test]
    fn test_keeps_spaces_and_case() {
        let text = "Meet me at Noon!";
        assert_eq!(decrypt(&encrypt(text, rails(4)), rails(4)), text);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(encrypt("", rails(3)), "");
        assert_eq!(decrypt("", rails(3)), "");
    }

    #[test]
    fn test_rails_validation() {
        assert_eq!(Rails::new(1), Err(KeyError::TooFewRails(1)));
        assert_eq!(Rails::new(-4), Err(KeyError::TooFewRails(-4)));
        assert_eq!("3".parse::<Rails>(), Ok(rails(3)));
        assert_eq!(
            "three".parse::<Rails>(),
            Err(KeyError::NotANumber("three".to_string()))
        );
        assert_eq!("0".parse::<Rails>(), Err(KeyError::TooFewRails(0)));
    }

    #[test]
    fn test_generated_key_range() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..200 {
            let key = generate_key(&mut rng).get();
            assert!((2..=5).contains(&key));
        }
    }

    #[test]
    fn test_generated_key_from_fixed_source() {
        assert_eq!(generate_key(&mut ZeroRng), rails(2));
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn round_trip(text in "\\PC{0,80}", count in 2i64..12) {
            let rails = Rails::new(count).unwrap();
            prop_assert_eq!(decrypt(&encrypt(&text, rails), rails), text);
        }

        #[test]
        fn encrypt_is_a_permutation(text in "[a-z]{0,80}", count in 2i64..12) {
            let rails = Rails::new(count).unwrap();
            let mut before: Vec<char> = text.chars().collect();
            let mut after: Vec<char> = encrypt(&text, rails).chars().collect();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
        }
    }
}
