//! Trithemius polyalphabetic substitution cipher.
//!
//! A generalized Trithemius cipher over two disjoint alphabets (26-letter
//! Latin and 33-letter Ukrainian Cyrillic) with three shift-derivation
//! strategies: linear progression, non-linear (quadratic) progression,
//! and keyword-derived shifts. Letter case is preserved and characters
//! belonging to neither alphabet pass through unchanged.
//!
//! This is a classical, breakable cipher for educational use, not a
//! modern cryptosystem.
//!
//! # Architecture
//!
//! ```text
//! alphabet    (Latin / Cyrillic constants + per-character resolution)
//!     ↑ resolved per data character
//! key         (CipherParams → CipherKey, per-position shift policy)
//!     ↓ shift k
//! transform   (single-character substitution, case preserving)
//!     ↕ driven per position
//! Trithemius  (engine — mode dispatch + encrypt/decrypt loops)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with a linear key:
//!
//! ```
//! use trithemius::{CipherKey, Trithemius};
//!
//! let cipher = Trithemius::new(CipherKey::Linear { a: 1, b: 3 });
//! let encrypted = cipher.encrypt("Attack at dawn");
//! assert_eq!(cipher.decrypt(&encrypted), "Attack at dawn");
//! ```
//!
//! Build a key from the loose parameter record an input form produces:
//!
//! ```
//! use trithemius::{CipherParams, Trithemius};
//!
//! let params = CipherParams {
//!     keyword: Some("ключ".to_string()),
//!     ..CipherParams::default()
//! };
//! let cipher = Trithemius::from_params(&params).unwrap();
//! let encrypted = cipher.encrypt("Вітаю, світе!");
//! assert_eq!(cipher.decrypt(&encrypted), "Вітаю, світе!");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;
pub mod key;
pub mod transform;

mod trithemius;

pub use key::{CipherKey, CipherParams};
pub use trithemius::Trithemius;
