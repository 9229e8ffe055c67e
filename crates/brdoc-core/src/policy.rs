//! # Option Policy
//!
//! Wraps the checksum engines with the optional-field and leniency rules.
//! Evaluation order for a document of kind `K` with expected length `L`:
//!
//! 1. Absent or empty input is valid ([`Verdict::Skipped`]).
//! 2. Non-text input is invalid (only reachable through [`evaluate_value`]).
//! 3. `clean = remove_format ? normalize(raw) : raw`, `digits = normalize(clean)`.
//! 4. `len(digits) != L` is invalid. With `length_only`, stop here.
//! 5. With `skip_digit_validation`, stop here.
//! 6. Unless `allow_known_invalid`, `L` copies of one digit are invalid.
//! 7. The strict engine decides. It rejects repeated digits on its own, so
//!    `allow_known_invalid` only skips the early exit in step 6.
//!
//! Rejections are logged at `debug` with the kind and reason only. The raw
//! input is personal data and never reaches the log.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use crate::kind::DocumentKind;
use crate::normalize::{is_repeated_digit, normalize};
use crate::options::DocumentOptions;

/// Why an input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The value was present but not a string.
    NotText,
    /// The normalized digit count differs from the document length.
    Length {
        /// Digits required for the kind.
        expected: usize,
        /// Digits found after normalization.
        actual: usize,
    },
    /// Every digit is the same.
    RepeatedDigits,
    /// A check digit does not match.
    CheckDigits,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotText => write!(f, "value is not text"),
            Self::Length { expected, actual } => {
                write!(f, "expected {expected} digits, found {actual}")
            }
            Self::RepeatedDigits => write!(f, "all digits are identical"),
            Self::CheckDigits => write!(f, "check digits do not match"),
        }
    }
}

/// Outcome of running the policy over one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Input was absent or empty; optional fields pass.
    Skipped,
    /// Length matched and the options waived every further check.
    LengthAccepted,
    /// Length, degeneracy and check digits all passed.
    Valid,
    /// The input failed.
    Rejected(Rejection),
}

impl Verdict {
    /// Everything except [`Verdict::Rejected`] counts as valid.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }

    /// The rejection reason, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Run the option policy over a textual input.
pub fn evaluate(kind: DocumentKind, input: Option<&str>, options: &DocumentOptions) -> Verdict {
    let raw = match input {
        None | Some("") => {
            tracing::trace!(%kind, "empty document, skipping validation");
            return Verdict::Skipped;
        }
        Some(raw) => raw,
    };

    let clean: Cow<'_, str> = if options.remove_format {
        Cow::Owned(normalize(raw))
    } else {
        Cow::Borrowed(raw)
    };
    let only_digits = normalize(&clean);

    let expected = kind.length();
    if only_digits.len() != expected {
        return reject(
            kind,
            Rejection::Length {
                expected,
                actual: only_digits.len(),
            },
        );
    }

    if options.length_only {
        return Verdict::LengthAccepted;
    }

    if options.skip_digit_validation {
        return Verdict::LengthAccepted;
    }

    if !options.allow_known_invalid && is_repeated_digit(&only_digits, expected) {
        return reject(kind, Rejection::RepeatedDigits);
    }

    if kind.validate_digits(&clean) {
        Verdict::Valid
    } else if is_repeated_digit(&only_digits, expected) {
        reject(kind, Rejection::RepeatedDigits)
    } else {
        reject(kind, Rejection::CheckDigits)
    }
}

/// Run the option policy over an untyped property value.
///
/// `null` is treated as absent; strings go through [`evaluate`]; every other
/// JSON type is rejected without inspection.
pub fn evaluate_value(kind: DocumentKind, value: &Value, options: &DocumentOptions) -> Verdict {
    match value {
        Value::Null => evaluate(kind, None, options),
        Value::String(s) => evaluate(kind, Some(s.as_str()), options),
        _ => reject(kind, Rejection::NotText),
    }
}

fn reject(kind: DocumentKind, reason: Rejection) -> Verdict {
    tracing::debug!(%kind, %reason, "document rejected");
    Verdict::Rejected(reason)
}
