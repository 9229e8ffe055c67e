//! # Error Types
//!
//! The predicates never fail: an invalid document is `false`. Errors exist
//! only where a caller asks for a typed value, i.e. constructing a
//! [`Cpf`](crate::Cpf) / [`Cnpj`](crate::Cnpj) or parsing a
//! [`DocumentKind`](crate::DocumentKind).

use thiserror::Error;

use crate::policy::Rejection;

/// Validation errors for domain-primitive construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// CPF failed the strict policy.
    #[error("invalid CPF: {reason}")]
    InvalidCpf {
        /// The rejected input, as given. Not part of the message.
        value: String,
        /// Why it was rejected.
        reason: Rejection,
    },

    /// CNPJ failed the strict policy.
    #[error("invalid CNPJ: {reason}")]
    InvalidCnpj {
        /// The rejected input, as given.
        value: String,
        /// Why it was rejected.
        reason: Rejection,
    },

    /// Document kind name not recognized.
    #[error("unknown document kind: \"{0}\" (expected cpf or cnpj)")]
    UnknownDocumentKind(String),
}

impl ValidationError {
    /// The policy rejection behind this error, if it came from one.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::InvalidCpf { reason, .. } | Self::InvalidCnpj { reason, .. } => Some(*reason),
            Self::UnknownDocumentKind(_) => None,
        }
    }
}
