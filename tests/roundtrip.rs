//! Property-style suites over a corpus of inputs and keys.
//!
//! Exercises the engine's structural guarantees: decrypt inverts
//! encrypt, character counts are preserved, pass-through characters are
//! untouched, and letter case survives the substitution.

use trithemius::{CipherKey, CipherParams, Trithemius};

/// Mixed-script, mixed-case corpus with punctuation, digits, and
/// characters from outside both alphabets.
fn corpus() -> Vec<&'static str> {
    vec![
        "",
        "A",
        "я",
        "The quick brown fox jumps over the lazy dog",
        "Щедрий вечір, добрий вечір!",
        "Mixed: Київ and London, 2024 — обидва!",
        "1234567890 ,.!?",
        "ьЬюЮїЇґҐ",
        "a b c d e f g",
        "ААААААААААААААААААААААААААААААААААА",
        "Ðßæ日本語 stays put",
    ]
}

fn keys() -> Vec<CipherKey> {
    vec![
        CipherKey::Linear { a: 0, b: 0 },
        CipherKey::Linear { a: 1, b: 3 },
        CipherKey::Linear { a: 7, b: 25 },
        CipherKey::Linear { a: 0, b: -5 },
        CipherKey::Linear { a: -3, b: 100 },
        CipherKey::NonLinear { a: 2, b: 1, c: 3 },
        CipherKey::NonLinear { a: 0, b: 0, c: 0 },
        CipherKey::NonLinear { a: 5, b: -2, c: 17 },
        CipherKey::Keyword("KEY".to_string()),
        CipherKey::Keyword("ключ".to_string()),
        CipherKey::Keyword("AbБя".to_string()),
        CipherKey::Keyword("x".to_string()),
    ]
}

#[test]
fn decrypt_inverts_encrypt_for_all_keys_and_inputs() {
    for key in keys() {
        let cipher = Trithemius::new(key.clone());
        for input in corpus() {
            let encrypted = cipher.encrypt(input);
            assert_eq!(
                cipher.decrypt(&encrypted),
                input,
                "Roundtrip failed for key {key:?} on {input:?}"
            );
        }
    }
}

#[test]
fn char_count_is_preserved_both_directions() {
    for key in keys() {
        let cipher = Trithemius::new(key.clone());
        for input in corpus() {
            let encrypted = cipher.encrypt(input);
            assert_eq!(
                encrypted.chars().count(),
                input.chars().count(),
                "Length changed for key {key:?} on {input:?}"
            );
            let decrypted = cipher.decrypt(input);
            assert_eq!(decrypted.chars().count(), input.chars().count());
        }
    }
}

#[test]
fn passthrough_characters_are_untouched_in_place() {
    for key in keys() {
        let cipher = Trithemius::new(key.clone());
        for input in corpus() {
            let encrypted = cipher.encrypt(input);
            for (original, transformed) in input.chars().zip(encrypted.chars()) {
                if trithemius::alphabet::resolve(original).is_none() {
                    assert_eq!(
                        original, transformed,
                        "Pass-through char altered by key {key:?} in {input:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn case_pattern_is_preserved() {
    for key in keys() {
        let cipher = Trithemius::new(key.clone());
        for input in corpus() {
            let encrypted = cipher.encrypt(input);
            for (original, transformed) in input.chars().zip(encrypted.chars()) {
                if trithemius::alphabet::resolve(original).is_some() {
                    assert_eq!(
                        original.is_uppercase(),
                        transformed.is_uppercase(),
                        "Case flipped for {original:?} under key {key:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn alphabet_membership_is_preserved() {
    // A Latin letter never becomes Cyrillic and vice versa.
    for key in keys() {
        let cipher = Trithemius::new(key.clone());
        for input in corpus() {
            let encrypted = cipher.encrypt(input);
            for (original, transformed) in input.chars().zip(encrypted.chars()) {
                assert_eq!(
                    trithemius::alphabet::resolve(original),
                    trithemius::alphabet::resolve(transformed),
                    "Alphabet changed for {original:?} under key {key:?}"
                );
            }
        }
    }
}

#[test]
fn long_input_roundtrip() {
    let cipher = Trithemius::new(CipherKey::Linear { a: 3, b: 11 });
    let input: String = "Багатомовний text 123! ".repeat(2_000);
    let encrypted = cipher.encrypt(&input);
    assert_eq!(cipher.decrypt(&encrypted), input);
}

#[test]
fn params_roundtrip_through_resolution() {
    let cases = vec![
        CipherParams {
            a: Some(1),
            b: Some(3),
            ..CipherParams::default()
        },
        CipherParams {
            a: Some(2),
            b: Some(1),
            c: Some(3),
            keyword: None,
        },
        CipherParams {
            keyword: Some("Січ".to_string()),
            ..CipherParams::default()
        },
    ];
    for params in cases {
        let cipher = Trithemius::from_params(&params).unwrap();
        for input in corpus() {
            let encrypted = cipher.encrypt(input);
            assert_eq!(cipher.decrypt(&encrypted), input);
        }
    }
}
