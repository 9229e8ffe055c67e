//! # CPF Check Digits
//!
//! Modulo-11 engine for the 11-digit Cadastro de Pessoas Físicas. The last
//! two digits are check digits over the preceding nine and ten digits, with
//! descending weights that start at `prefix length + 1`.
//!
//! ```text
//! 1 1 1 4 4 4 7 7 7 | 3 5
//! weights 10..=2    -> 3
//! weights 11..=2    -> 5 (over the first ten digits)
//! ```

use crate::normalize::{digit_values, is_repeated_digit, normalize};

/// Number of digits in a normalized CPF.
pub const CPF_LENGTH: usize = 11;

/// Compute the CPF check digit for a 9- or 10-digit prefix.
///
/// `(Σ digit[i] * (len + 1 - i)) * 10 mod 11`, with 10 folded to 0.
pub fn cpf_check_digit(prefix: &[u32]) -> u32 {
    let top = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .zip((0..=top).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        r => r,
    }
}

/// Verify both CPF check digits.
///
/// Non-digits are stripped first; anything that does not normalize to
/// exactly 11 digits is rejected. Repeated-digit sequences are NOT rejected
/// here, every one of them satisfies the CPF checksum.
pub fn cpf_checksum(input: &str) -> bool {
    let digits = digit_values(input);
    if digits.len() != CPF_LENGTH {
        return false;
    }
    cpf_check_digit(&digits[..9]) == digits[9] && cpf_check_digit(&digits[..10]) == digits[10]
}

/// Strict standalone CPF check: 11 digits, not degenerate, valid check digits.
///
/// Empty input is invalid here, unlike the optional-field facade.
pub fn validate_cpf_digits(input: &str) -> bool {
    let digits = normalize(input);
    digits.len() == CPF_LENGTH && !is_repeated_digit(&digits, CPF_LENGTH) && cpf_checksum(&digits)
}
