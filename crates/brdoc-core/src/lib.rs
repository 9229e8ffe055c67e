//! # brdoc-core — Brazilian Document Validation Core
//!
//! Validates CPF (natural person, 11 digits) and CNPJ (legal entity,
//! 14 digits) identification numbers. Every other crate in the workspace
//! depends on `brdoc-core`; it depends on nothing internal.
//!
//! ## Pipeline
//!
//! ```text
//! input ─► normalize ─► option policy ─► checksum engine ─► bool
//! ```
//!
//! 1. **Normalizer** ([`normalize()`]) strips every non-ASCII-digit character.
//! 2. **Checksum engines** ([`cpf`], [`cnpj`]) compute the two modulo-11
//!    check digits of each document.
//! 3. **Option policy** ([`policy`]) applies optional-field semantics and the
//!    [`DocumentOptions`] leniency switches.
//! 4. **Predicates** ([`is_valid_cpf`], [`is_valid_cnpj`]) are the boolean
//!    facade the object validator plugs into.
//!
//! ## Crate Policy
//!
//! - Predicates never fail or panic: an invalid document is `false`.
//! - No shared state; every call is independent and thread-safe.
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests.
//! - Document numbers never appear in log events.

pub mod cnpj;
pub mod cpf;
pub mod error;
pub mod identity;
pub mod kind;
pub mod normalize;
pub mod options;
pub mod policy;
pub mod predicate;

// Re-export primary types for ergonomic imports.
pub use cnpj::{cnpj_check_digit, cnpj_checksum, validate_cnpj_digits, CNPJ_LENGTH};
pub use cpf::{cpf_check_digit, cpf_checksum, validate_cpf_digits, CPF_LENGTH};
pub use error::ValidationError;
pub use identity::{Cnpj, Cpf};
pub use kind::DocumentKind;
pub use normalize::{is_repeated_digit, is_single_digit, normalize};
pub use options::{CnpjOptions, CpfOptions, DocumentOptions};
pub use policy::{evaluate, evaluate_value, Rejection, Verdict};
pub use predicate::{is_valid_cnpj, is_valid_cnpj_value, is_valid_cpf, is_valid_cpf_value};
