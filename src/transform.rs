//! Single-character substitution.
//!
//! Applies or reverses a shift to one character within its resolved
//! alphabet. Characters outside both alphabets pass through unchanged,
//! and the case of alphabet members is preserved.

use crate::alphabet;

/// Encrypts a single character by rotating it `k` places forward within
/// its alphabet.
///
/// The shift may be any integer, including negative values or values
/// greater than the alphabet length; the output index is reduced with a
/// floor-style modulo and is never negative.
///
/// # Parameters
/// - `x`: The character to encrypt.
/// - `k`: The shift to apply.
///
/// # Returns
/// The substituted character with the case of `x`, or `x` itself when it
/// belongs to neither alphabet.
///
/// # Examples
///
/// ```
/// use trithemius::transform;
///
/// assert_eq!(transform::encrypt_char('A', 3), 'D');
/// assert_eq!(transform::encrypt_char('y', 4), 'c');
/// assert_eq!(transform::encrypt_char('!', 11), '!');
/// ```
pub fn encrypt_char(x: char, k: i64) -> char {
    shift_char(x, k as i128)
}

/// Decrypts a single character by rotating it `k` places backward within
/// its alphabet.
///
/// Exact inverse of [`encrypt_char`] for every alphabet member and every
/// integer shift, case included.
///
/// # Parameters
/// - `y`: The character to decrypt.
/// - `k`: The shift that was applied when encrypting.
///
/// # Examples
///
/// ```
/// use trithemius::transform;
///
/// assert_eq!(transform::decrypt_char('D', 3), 'A');
/// assert_eq!(transform::decrypt_char(transform::encrypt_char('ж', 40), 40), 'ж');
/// ```
pub fn decrypt_char(y: char, k: i64) -> char {
    // (pos - k).rem_euclid(len) equals the classical
    // (pos - k % len + len) % len for every k.
    shift_char(y, -(k as i128))
}

/// Shared substitution path for both directions.
///
/// Resolves the alphabet, records the input case, rotates the position
/// by `offset` with `rem_euclid`, and reapplies the case to the
/// looked-up letter. The offset is widened to `i128` so negating
/// `i64::MIN` on the decrypt path stays exact.
fn shift_char(c: char, offset: i128) -> char {
    let Some(alphabet) = alphabet::resolve(c) else {
        return c;
    };
    let is_upper = c.is_uppercase();
    let upper = alphabet::fold_upper(c);
    let Some(pos) = alphabet.position(upper) else {
        return c;
    };
    let len = alphabet.len() as i128;
    let index = (pos as i128 + offset).rem_euclid(len) as usize;
    let substituted = alphabet.letter(index);
    if is_upper {
        substituted
    } else {
        alphabet::fold_lower(substituted)
    }
}
