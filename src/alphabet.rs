//! Alphabet constants and resolution.
//!
//! The cipher operates over two disjoint, fixed alphabets: the 26-letter
//! Latin alphabet and the 33-letter Ukrainian Cyrillic alphabet. Every
//! character is resolved to at most one of them; characters belonging to
//! neither (digits, punctuation, whitespace, other scripts) are treated
//! as pass-through by the rest of the crate.
//!
//! Both alphabets are process-wide immutable constants, so concurrent
//! readers need no coordination.

/// An ordered, fixed sequence of uppercase letters with no duplicates.
///
/// Positions within the sequence define the substitution arithmetic:
/// shifting a letter by `k` means moving `k` places (mod length) along
/// the sequence.
#[derive(Debug, PartialEq, Eq)]
pub struct Alphabet {
    letters: &'static [char],
}

/// The 26-letter Latin alphabet, A–Z.
pub const LATIN: Alphabet = Alphabet {
    letters: &[
        'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
        'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    ],
};

/// The 33-letter Ukrainian Cyrillic alphabet.
pub const CYRILLIC: Alphabet = Alphabet {
    letters: &[
        'А', 'Б', 'В', 'Г', 'Ґ', 'Д', 'Е', 'Є', 'Ж', 'З', 'И', 'І', 'Ї', 'Й', 'К', 'Л', 'М', 'Н',
        'О', 'П', 'Р', 'С', 'Т', 'У', 'Ф', 'Х', 'Ц', 'Ч', 'Ш', 'Щ', 'Ь', 'Ю', 'Я',
    ],
};

impl Alphabet {
    /// Returns the number of letters in the alphabet.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns `true` if the alphabet has no letters. Always `false` for
    /// the two built-in alphabets.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Tests membership of an already-uppercased character.
    ///
    /// # Parameters
    /// - `upper`: The character to test. Callers fold case first via
    ///   [`fold_upper`].
    pub fn contains(&self, upper: char) -> bool {
        self.letters.contains(&upper)
    }

    /// Returns the zero-based position of an uppercased character, or
    /// `None` if it is not a member.
    pub fn position(&self, upper: char) -> Option<usize> {
        self.letters.iter().position(|&l| l == upper)
    }

    /// Returns the uppercase letter at the given position.
    ///
    /// # Panics
    /// Panics if `index >= len()`. Callers obtain indices from
    /// [`position`](Self::position) reduced modulo [`len`](Self::len),
    /// so the bound always holds.
    pub fn letter(&self, index: usize) -> char {
        self.letters[index]
    }
}

/// Resolves the alphabet containing a character, if any.
///
/// The character is case-folded to uppercase, then tested against the
/// Cyrillic alphabet and the Latin alphabet in that order. The two sets
/// are disjoint, so the order is immaterial in practice.
///
/// # Returns
/// A reference to the containing alphabet, or `None` for digits,
/// punctuation, whitespace, or any character in neither set.
///
/// # Examples
///
/// ```
/// use trithemius::alphabet;
///
/// assert!(alphabet::resolve('q').is_some());
/// assert!(alphabet::resolve('ї').is_some());
/// assert!(alphabet::resolve('7').is_none());
/// ```
pub fn resolve(c: char) -> Option<&'static Alphabet> {
    let upper = fold_upper(c);
    if CYRILLIC.contains(upper) {
        Some(&CYRILLIC)
    } else if LATIN.contains(upper) {
        Some(&LATIN)
    } else {
        None
    }
}

/// Folds a character to its single-char uppercase form.
///
/// Characters whose uppercase expansion is more than one char (such as
/// `ß` → "SS") are returned unchanged; they can never be alphabet
/// members, so they fall through to pass-through handling.
pub(crate) fn fold_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Folds a character to its single-char lowercase form.
///
/// Used to reapply lowercase to substituted letters. Every letter of the
/// two built-in alphabets lowercases to a single char.
pub(crate) fn fold_lower(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
