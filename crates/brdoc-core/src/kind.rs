//! # Document Kinds
//!
//! The single enumeration of supported Brazilian documents. Everything that
//! varies between CPF and CNPJ (expected length, checksum engine, names used
//! in messages) is dispatched through an exhaustive `match` on
//! [`DocumentKind`], so adding a kind forces every consumer to handle it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::cnpj::{cnpj_checksum, validate_cnpj_digits, CNPJ_LENGTH};
use crate::cpf::{cpf_checksum, validate_cpf_digits, CPF_LENGTH};
use crate::error::ValidationError;

/// A Brazilian identification document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas, 11 digits.
    #[serde(alias = "CPF")]
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica, 14 digits.
    #[serde(alias = "CNPJ")]
    Cnpj,
}

impl DocumentKind {
    /// All kinds, in declaration order.
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Cpf, DocumentKind::Cnpj];

    /// Number of digits after normalization.
    pub fn length(self) -> usize {
        match self {
            Self::Cpf => CPF_LENGTH,
            Self::Cnpj => CNPJ_LENGTH,
        }
    }

    /// Upper-case display name used in messages ("CPF", "CNPJ").
    pub fn name(self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        }
    }

    /// Constraint name as registered with the object validator.
    pub fn constraint_name(self) -> &'static str {
        match self {
            Self::Cpf => "isCPF",
            Self::Cnpj => "isCNPJ",
        }
    }

    /// Run the bare checksum engine (no degeneracy check).
    pub fn checksum(self, input: &str) -> bool {
        match self {
            Self::Cpf => cpf_checksum(input),
            Self::Cnpj => cnpj_checksum(input),
        }
    }

    /// Run the strict standalone engine (length, degeneracy, checksum).
    pub fn validate_digits(self, input: &str) -> bool {
        match self {
            Self::Cpf => validate_cpf_digits(input),
            Self::Cnpj => validate_cnpj_digits(input),
        }
    }

    /// Strict engine over an untyped value. Anything but a string is `false`.
    pub fn validate_digits_value(self, value: &serde_json::Value) -> bool {
        value.as_str().is_some_and(|s| self.validate_digits(s))
    }

    /// Lower-case identifier ("cpf", "cnpj") used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DocumentKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            _ => Err(ValidationError::UnknownDocumentKind(s.to_string())),
        }
    }
}
