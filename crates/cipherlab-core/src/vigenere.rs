//! Vigenère cipher.
//!
//! Each letter is shifted by the offset of the matching keyword letter. The
//! keyword repeats and only advances on letters, so spaces and punctuation
//! neither change nor consume key material. Letters keep their own case; the
//! keyword's case is irrelevant.
//!
//! # Example
//!
//! ```
//! use cipherlab_core::{keyword::Keyword, vigenere};
//!
//! let key: Keyword = "LEMON".parse().unwrap();
//! assert_eq!(vigenere::encrypt("Attack at dawn", &key), "Lxfopv ef rnhr");
//! assert_eq!(vigenere::decrypt("Lxfopv ef rnhr", &key), "Attack at dawn");
//! ```

use rand::Rng;

use crate::{
    alphabet::{self, LEN, LetterCase},
    keyword::Keyword,
    words::WordList,
};

fn apply(text: &str, keyword: &Keyword, combine: impl Fn(u8, u8) -> u8) -> String {
    let offsets: Vec<u8> = keyword.offsets().collect();
    let mut key_stream = offsets.iter().cycle();

    text.chars()
        .map(|ch| match (LetterCase::of(ch), alphabet::position(ch)) {
            (Some(case), Some(pos)) => match key_stream.next() {
                Some(&k) => case.letter(combine(pos, k)),
                None => ch,
            },
            _ => ch,
        })
        .collect()
}

/// Encrypts `text`: `(p + k) mod 26` per letter.
pub fn encrypt(text: &str, keyword: &Keyword) -> String {
    apply(text, keyword, |p, k| (p + k) % LEN)
}

/// Decrypts `text`: `(c - k + 26) mod 26` per letter.
pub fn decrypt(text: &str, keyword: &Keyword) -> String {
    apply(text, keyword, |c, k| (c + LEN - k) % LEN)
}

/// Picks a dictionary word, cased to match `text`.
pub fn generate_key<R: Rng + ?Sized>(rng: &mut R, words: &WordList, text: &str) -> Keyword {
    let case = LetterCase::detect(text);
    Keyword::from_word(case.apply(words.choose(rng)))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn keyword(s: &str) -> Keyword {
        Keyword::new(s).unwrap()
    }

    #[test]
    fn test_classic_vector() {
        assert_eq!(
            encrypt("ATTACKATDAWN", &keyword("LEMON")),
            "LXFOPVEFRNHR"
        );
        assert_eq!(
            decrypt("LXFOPVEFRNHR", &keyword("lemon")),
            "ATTACKATDAWN"
        );
    }

    #[test]
    fn test_key_index_skips_non_letters() {
        // The space does not consume the `B`.
        assert_eq!(encrypt("a a", &keyword("ab")), "a b");
        assert_eq!(encrypt("12!", &keyword("zzz")), "12!");
    }

    #[test]
    fn test_case_comes_from_text() {
        assert_eq!(encrypt("aBc", &keyword("BBB")), "bCd");
        assert_eq!(encrypt("aBc", &keyword("bbb")), "bCd");
    }

    #[test]
    fn test_generate_key_single_word() {
        let words = WordList::new(["lemon"]).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(generate_key(&mut rng, &words, "HELLO").as_str(), "LEMON");
        assert_eq!(generate_key(&mut rng, &words, "hello").as_str(), "lemon");
        assert_eq!(generate_key(&mut rng, &words, "Hello").as_str(), "LEMON");
    }
}
