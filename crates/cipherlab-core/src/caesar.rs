//! Caesar cipher.
//!
//! Every letter moves a fixed number of places through its own case's
//! alphabet. Any integer is a valid shift; it is reduced mod 26 first, so
//! shifts of `3`, `29` and `-23` are the same key.
//!
//! # Example
//!
//! ```
//! use cipherlab_core::caesar;
//!
//! let ciphertext = caesar::encrypt("Hello, World!", 3);
//! assert_eq!(ciphertext, "Khoor, Zruog!");
//! assert_eq!(caesar::decrypt(&ciphertext, 3), "Hello, World!");
//! ```

use rand::Rng;

use crate::{
    alphabet::{self, LEN},
    error::KeyError,
};

/// Reduces `shift` to the equivalent forward shift in `0..26`.
pub fn normalize(shift: i64) -> u8 {
    shift.rem_euclid(i64::from(LEN)) as u8
}

/// Parses a textual shift such as `"3"` or `"-5"`.
///
/// # Errors
///
/// Returns [`KeyError::NotANumber`] if `key` is not a whole number.
pub fn parse_shift(key: &str) -> Result<i64, KeyError> {
    let key = key.trim();
    key.parse()
        .map_err(|_| KeyError::NotANumber(key.to_string()))
}

/// Shifts every letter of `text` forward by `shift`.
pub fn encrypt(text: &str, shift: i64) -> String {
    let by = normalize(shift);
    text.chars().map(|ch| alphabet::shift_letter(ch, by)).collect()
}

/// Shifts every letter of `text` back by `shift`.
pub fn decrypt(text: &str, shift: i64) -> String {
    let by = (LEN - normalize(shift)) % LEN;
    text.chars().map(|ch| alphabet::shift_letter(ch, by)).collect()
}

/// Picks a random non-zero shift in `1..=25`.
pub fn generate_key<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.random_range(1..i64::from(LEN))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use crate::testing::ZeroRng;

    use super::*;

    #[test]
    fn test_classic_shift() {
        assert_eq!(encrypt("ABCXYZ", 3), "DEFABC");
        assert_eq!(encrypt("abcxyz", 3), "defabc");
        assert_eq!(decrypt("DEFABC", 3), "ABCXYZ");
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(encrypt("a-b c!9é", 1), "b-c d!9é");
    }

    #[test]
    fn test_negative_and_large_shifts() {
        assert_eq!(encrypt("abc", -1), "zab");
        assert_eq!(encrypt("abc", 27), "bcd");
        assert_eq!(decrypt("zab", -1), "abc");
        assert_eq!(encrypt("abc", i64::MIN), encrypt("abc", i64::MIN.rem_euclid(26)));
    }

    #[test]
    fn test_zero_shift_is_identity() {
        assert_eq!(encrypt("Same Text", 0), "Same Text");
        assert_eq!(decrypt("Same Text", 26), "Same Text");
    }

    #[test]
    fn test_parse_shift() {
        assert_eq!(parse_shift("3"), Ok(3));
        assert_eq!(parse_shift(" -12 "), Ok(-12));
        assert_eq!(
            parse_shift("three"),
            Err(KeyError::NotANumber("three".to_string()))
        );
        assert!(parse_shift("").is_err());
        assert!(parse_shift("2.5").is_err());
    }

    #[test]
    fn test_generated_key_is_never_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let key = generate_key(&mut rng);
            assert!((1..=25).contains(&key), "out of range: {key}");
        }
    }

    #[test]
    fn test_generated_key_from_fixed_source() {
        assert_eq!(generate_key(&mut ZeroRng), 1);
    }
}
