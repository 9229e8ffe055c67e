//! # Document Newtypes
//!
//! [`Cpf`] and [`Cnpj`] hold a document that passed the strict policy, in
//! canonical digit-only form. Construction accepts any formatting
//! (`111.444.777-35`, `111 444 777 35`) and stores `11144477735`.
//!
//! Unlike the predicates, an empty string is an error here: a constructed
//! document always has a value.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::kind::DocumentKind;
use crate::normalize::normalize;
use crate::options::DocumentOptions;
use crate::policy::{evaluate, Rejection, Verdict};

/// Deserialize as a plain `String`, then route through `new()` so invalid
/// documents are rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Run the strict policy and return the canonical digits.
fn canonical_digits(kind: DocumentKind, raw: &str) -> Result<String, Rejection> {
    match evaluate(kind, Some(raw), &DocumentOptions::default()) {
        Verdict::Valid | Verdict::LengthAccepted => Ok(normalize(raw)),
        Verdict::Skipped => Err(Rejection::Length {
            expected: kind.length(),
            actual: 0,
        }),
        Verdict::Rejected(reason) => Err(reason),
    }
}

/// A valid CPF, stored as 11 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cpf(String);

impl_validating_deserialize!(Cpf);

impl Cpf {
    /// Document kind of this type.
    pub const KIND: DocumentKind = DocumentKind::Cpf;

    /// Validate and canonicalize a CPF.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCpf`] if the value is empty, has the
    /// wrong number of digits, repeats one digit, or has bad check digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        match canonical_digits(Self::KIND, &value) {
            Ok(digits) => Ok(Self(digits)),
            Err(reason) => Err(ValidationError::InvalidCpf { value, reason }),
        }
    }

    /// The 11 canonical digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A valid CNPJ, stored as 14 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cnpj(String);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Document kind of this type.
    pub const KIND: DocumentKind = DocumentKind::Cnpj;

    /// Validate and canonicalize a CNPJ.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCnpj`] under the same conditions as
    /// [`Cpf::new`], with 14 digits expected.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        match canonical_digits(Self::KIND, &value) {
            Ok(digits) => Ok(Self(digits)),
            Err(reason) => Err(ValidationError::InvalidCnpj { value, reason }),
        }
    }

    /// The 14 canonical digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Cnpj {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
