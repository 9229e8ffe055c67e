//! # Property Validators
//!
//! [`PropertyValidator`] is the per-property contract of the object
//! validator: a predicate over the property value plus a default message.
//! [`DocumentConstraint`] implements it for CPF and CNPJ by delegating to the
//! `brdoc-core` policy.

use std::fmt;

use brdoc_core::{evaluate_value, DocumentKind, DocumentOptions};
use serde_json::Value;

use crate::message::{MessageSource, ValidationArguments};

/// A named predicate over one property value.
///
/// Implementations must be pure: the registry shares them across threads and
/// calls them for every validated object.
pub trait PropertyValidator: Send + Sync + fmt::Debug {
    /// Constraint name reported on failure (e.g. `"isCPF"`).
    fn name(&self) -> &str;

    /// True if `value` satisfies the constraint. Absent properties are `null`.
    fn validate(&self, value: &Value) -> bool;

    /// Message for a failed validation, before token substitution.
    fn default_message(&self, args: &ValidationArguments<'_>) -> String;
}

/// CPF or CNPJ constraint with its options and optional custom message.
#[derive(Debug, Clone)]
pub struct DocumentConstraint {
    kind: DocumentKind,
    options: DocumentOptions,
    message: Option<MessageSource>,
}

impl DocumentConstraint {
    /// Constraint for `kind` with the given options and the default message.
    pub fn new(kind: DocumentKind, options: DocumentOptions) -> Self {
        Self {
            kind,
            options,
            message: None,
        }
    }

    /// Replace the default message.
    pub fn with_message(mut self, message: impl Into<MessageSource>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The document kind checked.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// The options applied.
    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }
}

impl PropertyValidator for DocumentConstraint {
    fn name(&self) -> &str {
        self.kind.constraint_name()
    }

    fn validate(&self, value: &Value) -> bool {
        evaluate_value(self.kind, value, &self.options).is_valid()
    }

    fn default_message(&self, args: &ValidationArguments<'_>) -> String {
        match &self.message {
            Some(message) => message.produce(args),
            None => format!("{} is not a valid {}", args.property, self.kind.name()),
        }
    }
}

/// CPF constraint (`isCPF`).
pub fn is_cpf(options: DocumentOptions) -> DocumentConstraint {
    DocumentConstraint::new(DocumentKind::Cpf, options)
}

/// CNPJ constraint (`isCNPJ`).
pub fn is_cnpj(options: DocumentOptions) -> DocumentConstraint {
    DocumentConstraint::new(DocumentKind::Cnpj, options)
}
