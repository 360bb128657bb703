//! Cipher keys and the per-position shift policy.
//!
//! A [`CipherKey`] is one of three shift-derivation strategies:
//!
//! - `Linear`: `k = a*p + b`
//! - `NonLinear`: `k = a*a + b*p + c`
//! - `Keyword`: `k` is the position of the cycled keyword character
//!   within the alphabet of the data character
//!
//! where `p` is the zero-based position of the character in the input,
//! counted over every character including pass-through ones.
//!
//! Keys are normally built from a loose [`CipherParams`] record via
//! [`CipherParams::resolve`], which enforces the mode precedence chain
//! and rejects unusable combinations with a typed error.

use crate::alphabet;
use crate::error::TrithemiusError;

/// Loose cipher parameters as collected by an external shell.
///
/// All four fields are optional; [`resolve`](Self::resolve) decides which
/// mode (if any) they select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CipherParams {
    /// Coefficient for the linear and non-linear equations.
    pub a: Option<i64>,
    /// Coefficient for the linear and non-linear equations.
    pub b: Option<i64>,
    /// Coefficient for the non-linear equation; its presence selects
    /// non-linear mode.
    pub c: Option<i64>,
    /// Keyword; a non-empty value selects keyword mode.
    pub keyword: Option<String>,
}

impl CipherParams {
    /// Resolves the parameters into a concrete [`CipherKey`].
    ///
    /// Mode precedence, first match wins:
    /// 1. non-empty `keyword` → [`CipherKey::Keyword`]
    /// 2. `c` present → [`CipherKey::NonLinear`] (requires `a` and `b`)
    /// 3. `a` and `b` present → [`CipherKey::Linear`]
    ///
    /// An empty keyword is treated exactly like an absent one and falls
    /// through the chain.
    ///
    /// # Errors
    /// - [`TrithemiusError::IncompleteNonLinear`] if `c` is present but
    ///   `a` or `b` is not.
    /// - [`TrithemiusError::MissingParameters`] if no rule matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use trithemius::{CipherKey, CipherParams};
    ///
    /// let params = CipherParams {
    ///     a: Some(1),
    ///     b: Some(3),
    ///     ..CipherParams::default()
    /// };
    /// assert_eq!(params.resolve().unwrap(), CipherKey::Linear { a: 1, b: 3 });
    /// ```
    ///
    /// ```
    /// use trithemius::CipherParams;
    ///
    /// assert!(CipherParams::default().resolve().is_err());
    /// ```
    pub fn resolve(&self) -> Result<CipherKey, TrithemiusError> {
        if let Some(word) = &self.keyword {
            if !word.is_empty() {
                return Ok(CipherKey::Keyword(word.clone()));
            }
        }
        if let Some(c) = self.c {
            return match (self.a, self.b) {
                (Some(a), Some(b)) => Ok(CipherKey::NonLinear { a, b, c }),
                _ => Err(TrithemiusError::IncompleteNonLinear),
            };
        }
        if let (Some(a), Some(b)) = (self.a, self.b) {
            return Ok(CipherKey::Linear { a, b });
        }
        Err(TrithemiusError::MissingParameters)
    }
}

/// A fully-determined shift-derivation strategy.
///
/// Exactly one mode is active; the ambiguity of the loose parameter
/// record cannot reach the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherKey {
    /// `k = a*p + b`.
    Linear { a: i64, b: i64 },
    /// `k = a*a + b*p + c`, applied identically when encrypting and
    /// decrypting. The decrypt side deliberately recomputes the same
    /// expression instead of inverting it; both directions derive the
    /// same deterministic `k(p)`, which is this mode's defined
    /// semantics.
    NonLinear { a: i64, b: i64, c: i64 },
    /// Shifts taken from the keyword, cycled over the input.
    Keyword(String),
}

impl CipherKey {
    /// Computes the shift for the position-driven modes.
    ///
    /// Returns 0 for [`Keyword`](Self::Keyword) keys; keyword shifts
    /// depend on the data character and are computed by
    /// [`keyword_shift`].
    pub(crate) fn position_shift(&self, p: usize) -> i64 {
        let p = p as i64;
        match self {
            CipherKey::Linear { a, b } => a * p + b,
            CipherKey::NonLinear { a, b, c } => a * a + b * p + c,
            CipherKey::Keyword(_) => 0,
        }
    }
}

/// Computes the keyword-mode shift for one data character.
///
/// The alphabet is resolved from the *data* character (plaintext when
/// encrypting, ciphertext when decrypting), never from the keyword
/// character. The keyword character at `p mod keyword_len` is folded to
/// uppercase and looked up in that alphabet.
///
/// Returns 0 when the data character resolves to no alphabet (it will
/// pass through regardless), when the keyword character is not in the
/// data character's alphabet, or when the keyword is empty.
pub(crate) fn keyword_shift(keyword: &[char], p: usize, data: char) -> i64 {
    if keyword.is_empty() {
        return 0;
    }
    let Some(alphabet) = alphabet::resolve(data) else {
        return 0;
    };
    let key_char = alphabet::fold_upper(keyword[p % keyword.len()]);
    match alphabet.position(key_char) {
        Some(index) => index as i64,
        None => 0,
    }
}
