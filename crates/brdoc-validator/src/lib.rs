//! # brdoc-validator — Object Validation
//!
//! Plugs the `brdoc-core` predicates into per-property object validation.
//! A property of a data type is tagged with a named validator and its
//! configuration; a batch pass then runs every tagged validator and turns
//! failures into messages.
//!
//! ```
//! use brdoc_core::DocumentOptions;
//! use brdoc_validator::{is_cnpj, is_cpf, validate_brazilian_docs, Validatable, ValidationSchema};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct User {
//!     cpf: String,
//!     cnpj: Option<String>,
//! }
//!
//! impl Validatable for User {
//!     fn validation_schema() -> ValidationSchema {
//!         ValidationSchema::new("User")
//!             .property("cpf", is_cpf(DocumentOptions::default()))
//!             .property("cnpj", is_cnpj(DocumentOptions::default()))
//!     }
//! }
//!
//! let user = User { cpf: "111.444.777-36".into(), cnpj: None };
//! assert_eq!(validate_brazilian_docs(&user).unwrap(), ["cpf is not a valid CPF"]);
//! ```
//!
//! ## Modules
//!
//! - [`constraint`] — the [`PropertyValidator`] contract and the CPF/CNPJ
//!   [`DocumentConstraint`].
//! - [`message`] — custom messages, producers and special tokens.
//! - [`schema`] — [`ValidationSchema`], [`ValidatorRegistry`], [`Validatable`].
//! - [`validate`] — [`validate_object`] and [`validate_brazilian_docs`].
//! - [`config`] — YAML schema files.
//!
//! ## Crate Policy
//!
//! - Depends only on `brdoc-core` internally.
//! - Validation is synchronous and never fails for an invalid document;
//!   errors are reserved for registry and configuration problems.

pub mod config;
pub mod constraint;
pub mod error;
pub mod message;
pub mod schema;
pub mod validate;

pub use config::{ConstraintConfig, PropertyConfig, SchemaConfig};
pub use constraint::{is_cnpj, is_cpf, DocumentConstraint, PropertyValidator};
pub use error::ValidatorError;
pub use message::{replace_special_tokens, MessageProducer, MessageSource, ValidationArguments};
pub use schema::{PropertyRules, Validatable, ValidationSchema, ValidatorRegistry};
pub use validate::{
    messages, validate_brazilian_docs, validate_object, ConstraintFailure, PropertyFailure,
};
