//! # brdoc-cli — Command-Line Interface
//!
//! Provides the `brdoc` binary.
//!
//! ## Subcommands
//!
//! - `brdoc check` — Validate one or more CPF/CNPJ numbers.
//! - `brdoc validate` — Validate JSON objects against a YAML schema.
//!
//! ```bash
//! brdoc check cpf 111.444.777-35
//! brdoc check cnpj 11222333000182 --length-only
//! brdoc validate --schema user.yaml users.json
//! ```
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | everything valid |
//! | 1 | at least one document or object invalid |
//! | 2 | usage, I/O, or configuration error |

pub mod check;
pub mod validate;

use clap::ValueEnum;

/// Exit code when every input is valid.
pub const EXIT_VALID: u8 = 0;

/// Exit code when at least one input is invalid.
pub const EXIT_INVALID: u8 = 1;

/// Exit code for errors that prevented validation.
pub const EXIT_ERROR: u8 = 2;

/// Report format shared by the subcommands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per result.
    #[default]
    Text,
    /// A JSON array on stdout.
    Json,
}
