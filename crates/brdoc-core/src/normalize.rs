//! # Normalization
//!
//! Reduces free-form document text to its digit-only content. This is plain
//! character-class filtering: every character outside ASCII `0`-`9` is
//! dropped, including non-ASCII digits such as `٣` or full-width `３`.

/// Strip every character that is not an ASCII digit.
///
/// Never fails. `normalize(normalize(x)) == normalize(x)` for every `x`.
pub fn normalize(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// True iff `digits` is exactly `len` copies of a single ASCII digit.
///
/// These are the degenerate sequences (`000.000.000-00`, `11111111111111`)
/// that the option policy rejects unless explicitly allowed.
pub fn is_repeated_digit(digits: &str, len: usize) -> bool {
    let bytes = digits.as_bytes();
    match bytes.first() {
        Some(first) if first.is_ascii_digit() => {
            bytes.len() == len && bytes.iter().all(|b| b == first)
        }
        _ => false,
    }
}

/// True iff `s` is exactly one ASCII digit.
pub fn is_single_digit(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_digit())
}

/// Numeric values of the ASCII digits in `s`, in order, skipping everything else.
pub(crate) fn digit_values(s: &str) -> Vec<u32> {
    s.chars().filter_map(|c| c.to_digit(10)).collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in any::<String>()) {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalize_output_is_ascii_digits(s in any::<String>()) {
            prop_assert!(normalize(&s).bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
