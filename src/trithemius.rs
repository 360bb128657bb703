//! Trithemius cipher engine.
//!
//! Orchestrates the shift policy and the character transform across a
//! whole string for each of the three modes. The engine is a pure
//! function of `(input, key)`: it holds no mutable state, so one
//! instance may serve any number of concurrent callers.

use crate::error::TrithemiusError;
use crate::key::{keyword_shift, CipherKey, CipherParams};
use crate::transform;

/// Substitution direction shared by the encrypt and decrypt loops.
#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Polyalphabetic substitution cipher engine.
///
/// # Architecture
///
/// For each character position `p` (zero-based, counted over the whole
/// input including pass-through characters) the active mode derives a
/// shift `k`, the character transform rotates the character within its
/// resolved alphabet, and the result is appended in original order.
/// Output character count always equals input character count; nothing
/// is reordered or dropped.
pub struct Trithemius {
    key: CipherKey,
}

impl Trithemius {
    /// Creates an engine from a fully-determined key.
    ///
    /// # Examples
    ///
    /// ```
    /// use trithemius::{CipherKey, Trithemius};
    ///
    /// let cipher = Trithemius::new(CipherKey::Linear { a: 1, b: 3 });
    /// assert_eq!(cipher.encrypt("ABC"), "DFH");
    /// ```
    pub fn new(key: CipherKey) -> Self {
        Trithemius { key }
    }

    /// Creates an engine from loose parameters, applying the mode
    /// precedence chain.
    ///
    /// # Errors
    /// Propagates [`CipherParams::resolve`] errors: parameters that
    /// select no mode, or a `c` coefficient without `a` and `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trithemius::{CipherParams, Trithemius};
    ///
    /// let params = CipherParams {
    ///     keyword: Some("KEY".to_string()),
    ///     ..CipherParams::default()
    /// };
    /// let cipher = Trithemius::from_params(&params).unwrap();
    /// assert_eq!(cipher.encrypt("AAAA"), "KEYK");
    /// ```
    ///
    /// ```
    /// use trithemius::{CipherParams, Trithemius};
    ///
    /// assert!(Trithemius::from_params(&CipherParams::default()).is_err());
    /// ```
    pub fn from_params(params: &CipherParams) -> Result<Self, TrithemiusError> {
        Ok(Trithemius {
            key: params.resolve()?,
        })
    }

    /// Returns the active key.
    pub fn key(&self) -> &CipherKey {
        &self.key
    }

    /// Encrypts a string.
    ///
    /// Letters of either alphabet are substituted according to the
    /// active mode; every other character passes through unchanged while
    /// still occupying a position index.
    ///
    /// # Examples
    ///
    /// ```
    /// use trithemius::{CipherKey, Trithemius};
    ///
    /// let cipher = Trithemius::new(CipherKey::Linear { a: 0, b: 1 });
    /// assert_eq!(cipher.encrypt("Hi, Bob!"), "Ij, Cpc!");
    /// ```
    pub fn encrypt(&self, plaintext: &str) -> String {
        self.transform(plaintext, Direction::Encrypt)
    }

    /// Decrypts a string.
    ///
    /// Exact inverse of [`encrypt`](Self::encrypt) under the same key.
    ///
    /// # Examples
    ///
    /// ```
    /// use trithemius::{CipherKey, Trithemius};
    ///
    /// let cipher = Trithemius::new(CipherKey::Linear { a: 1, b: 3 });
    /// assert_eq!(cipher.decrypt("DFH"), "ABC");
    /// ```
    pub fn decrypt(&self, ciphertext: &str) -> String {
        self.transform(ciphertext, Direction::Decrypt)
    }

    /// Shared per-character loop for both directions.
    ///
    /// Keyword mode derives the shift from the data character and the
    /// cycled keyword; the other modes derive it from the position
    /// alone. Both directions of the non-linear mode evaluate the same
    /// `a*a + b*p + c`, so they invert each other by recomputing the
    /// identical shift, not by solving the equation.
    fn transform(&self, input: &str, direction: Direction) -> String {
        let apply = |c: char, k: i64| match direction {
            Direction::Encrypt => transform::encrypt_char(c, k),
            Direction::Decrypt => transform::decrypt_char(c, k),
        };

        match &self.key {
            CipherKey::Keyword(word) => {
                let keyword: Vec<char> = word.chars().collect();
                input
                    .chars()
                    .enumerate()
                    .map(|(p, c)| apply(c, keyword_shift(&keyword, p, c)))
                    .collect()
            }
            key => input
                .chars()
                .enumerate()
                .map(|(p, c)| apply(c, key.position_shift(p)))
                .collect(),
        }
    }
}
