//! Error types for the trithemius library.

use std::fmt;

/// Errors produced when resolving cipher parameters into a usable key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrithemiusError {
    /// No keyword, no `c`, and not both `a` and `b` are present.
    MissingParameters,
    /// `c` is present but `a` or `b` is absent, so the non-linear
    /// shift equation cannot be formed.
    IncompleteNonLinear,
}

impl fmt::Display for TrithemiusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrithemiusError::MissingParameters => {
                write!(f, "Cipher parameters do not select any mode")
            }
            TrithemiusError::IncompleteNonLinear => {
                write!(
                    f,
                    "Non-linear mode requires coefficients a and b alongside c"
                )
            }
        }
    }
}

impl std::error::Error for TrithemiusError {}
