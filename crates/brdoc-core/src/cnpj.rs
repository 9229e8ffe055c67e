//! # CNPJ Check Digits
//!
//! Modulo-11 engine for the 14-digit Cadastro Nacional da Pessoa Jurídica.
//! Weights cycle 9 down to 2; the pointer starts at `prefix length - 7`, so
//! the first check digit (12-digit prefix) starts at 5 and the second
//! (13-digit prefix) at 6:
//!
//! | prefix | weights |
//! |--------|---------|
//! | 12 | 5 4 3 2 9 8 7 6 5 4 3 2 |
//! | 13 | 6 5 4 3 2 9 8 7 6 5 4 3 2 |
//!
//! `r = sum mod 11`; the check digit is 0 when `r < 2`, else `11 - r`.

use crate::normalize::{digit_values, is_repeated_digit, normalize};

/// Number of digits in a normalized CNPJ.
pub const CNPJ_LENGTH: usize = 14;

/// Weight table for the first check digit.
pub const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weight table for the second check digit.
pub const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Compute the CNPJ check digit for a 12- or 13-digit prefix.
///
/// Uses the counting pointer formulation; it agrees with the
/// [`CNPJ_FIRST_WEIGHTS`] / [`CNPJ_SECOND_WEIGHTS`] tables.
pub fn cnpj_check_digit(prefix: &[u32]) -> u32 {
    let mut weight = (prefix.len() as u32).saturating_sub(7).max(2);
    let mut sum = 0;
    for digit in prefix {
        sum += digit * weight;
        weight = if weight <= 2 { 9 } else { weight - 1 };
    }
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// Verify both CNPJ check digits.
///
/// Non-digits are stripped first; anything that does not normalize to
/// exactly 14 digits is rejected. Degeneracy is the caller's concern.
pub fn cnpj_checksum(input: &str) -> bool {
    let digits = digit_values(input);
    if digits.len() != CNPJ_LENGTH {
        return false;
    }
    cnpj_check_digit(&digits[..12]) == digits[12] && cnpj_check_digit(&digits[..13]) == digits[13]
}

/// Strict standalone CNPJ check: 14 digits, not degenerate, valid check digits.
pub fn validate_cnpj_digits(input: &str) -> bool {
    let digits = normalize(input);
    digits.len() == CNPJ_LENGTH
        && !is_repeated_digit(&digits, CNPJ_LENGTH)
        && cnpj_checksum(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_check_digit(prefix: &[u32], weights: &[u32]) -> u32 {
        let sum: u32 = prefix.iter().zip(weights).map(|(d, w)| d * w).sum();
        match sum % 11 {
            r if r < 2 => 0,
            r => 11 - r,
        }
    }

    /// Right-to-left formulation: weights 2..=9 from the last prefix digit.
    fn reverse_check_digit(prefix: &[u32]) -> u32 {
        let sum: u32 = prefix
            .iter()
            .rev()
            .zip((2..=9).cycle())
            .map(|(d, w)| d * w)
            .sum();
        match sum % 11 {
            r if r < 2 => 0,
            r => 11 - r,
        }
    }

    #[test]
    fn check_digits_of_known_cnpj() {
        let digits = digit_values("11222333000181");
        assert_eq!(cnpj_check_digit(&digits[..12]), 8);
        assert_eq!(cnpj_check_digit(&digits[..13]), 1);
    }

    #[test]
    fn pointer_matches_weight_tables_on_known_values() {
        for cnpj in ["11222333000181", "34238864000168", "47960950000121", "00623904000173"] {
            let digits = digit_values(cnpj);
            assert_eq!(
                cnpj_check_digit(&digits[..12]),
                table_check_digit(&digits[..12], &CNPJ_FIRST_WEIGHTS)
            );
            assert_eq!(
                cnpj_check_digit(&digits[..13]),
                table_check_digit(&digits[..13], &CNPJ_SECOND_WEIGHTS)
            );
        }
    }

    #[test]
    fn checksum_accepts_valid() {
        for cnpj in [
            "11222333000181",
            "11.222.333/0001-81",
            "34238864000168",
            "34.238.864/0001-68",
            "47960950000121",
            "47.960.950/0001-21",
            "11444777000161",
            "11.444.777/0001-61",
            "34.028.316/0001-03",
            "00.623.904/0001-73",
        ] {
            assert!(cnpj_checksum(cnpj), "{cnpj} should pass");
        }
    }

    #[test]
    fn checksum_rejects_broken_digits() {
        for cnpj in [
            "11222333000182",
            "11.222.333/0001-82",
            "34.238.864/0001-69",
            "47.960.950/0001-22",
            "00.623.904/0001-71",
        ] {
            assert!(!cnpj_checksum(cnpj), "{cnpj} should fail");
        }
    }

    #[test]
    fn checksum_rejects_wrong_length() {
        assert!(!cnpj_checksum(""));
        assert!(!cnpj_checksum("1122233300018"));
        assert!(!cnpj_checksum("112223330001812"));
        assert!(!cnpj_checksum("012.345.678-90"));
        assert!(!cnpj_checksum(&"1".repeat(1000)));
    }

    #[test]
    fn only_all_zeros_passes_checksum_among_repeated() {
        assert!(cnpj_checksum("00000000000000"));
        for d in 1..=9 {
            assert!(!cnpj_checksum(&d.to_string().repeat(CNPJ_LENGTH)));
        }
    }

    #[test]
    fn strict_engine_rejects_repeated_and_empty() {
        assert!(!validate_cnpj_digits(""));
        assert!(!validate_cnpj_digits("00000000000000"));
        assert!(!validate_cnpj_digits("ab.cde.fgh/ijkl-mn"));
        assert!(!validate_cnpj_digits("11.abc.333/0001-81"));
        assert!(validate_cnpj_digits("11.222.333/0001-81"));
    }

    #[test]
    fn special_characters_do_not_matter() {
        for cnpj in [
            "11.222.333/0001-81",
            "11-222-333-0001-81",
            "11 222 333 0001 81",
            "11/222/333/0001/81",
            "11.222.333.0001.81",
        ] {
            assert!(validate_cnpj_digits(cnpj), "{cnpj}");
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn all_formulations_agree(digits in prop::collection::vec(0u32..10, 13)) {
                let first = cnpj_check_digit(&digits[..12]);
                prop_assert_eq!(first, table_check_digit(&digits[..12], &CNPJ_FIRST_WEIGHTS));
                prop_assert_eq!(first, reverse_check_digit(&digits[..12]));

                let second = cnpj_check_digit(&digits);
                prop_assert_eq!(second, table_check_digit(&digits, &CNPJ_SECOND_WEIGHTS));
                prop_assert_eq!(second, reverse_check_digit(&digits));
            }
        }
    }
}
