//! # Validation Options
//!
//! Leniency switches accepted by the option policy. All default to `false`,
//! which is the strict behavior: full checksum, degenerate sequences rejected.
//!
//! Deserializes from the camelCase keys used in schema configuration files
//! (`skipDigitValidation`, `removeFormat`, `allowKnownInvalid`, `lengthOnly`).
//! Missing keys default to `false`; unknown keys are an error.

use serde::{Deserialize, Serialize};

/// Options for validating a CPF or CNPJ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DocumentOptions {
    /// Accept any input whose normalized length matches, without checking
    /// degeneracy or check digits.
    pub skip_digit_validation: bool,

    /// Strip formatting from the raw value before the pre-checks. The
    /// checksum engines normalize unconditionally, so this changes nothing
    /// observable; it is kept for configuration compatibility.
    pub remove_format: bool,

    /// Skip the up-front repeated-digit rejection. The strict engine that
    /// runs afterwards still refuses them.
    pub allow_known_invalid: bool,

    /// Pure length predicate: true iff the normalized length matches.
    pub length_only: bool,
}

/// Options for [`is_valid_cpf`](crate::is_valid_cpf).
pub type CpfOptions = DocumentOptions;

/// Options for [`is_valid_cnpj`](crate::is_valid_cnpj).
pub type CnpjOptions = DocumentOptions;

impl DocumentOptions {
    /// True if any option relaxes the strict default.
    pub fn is_lenient(&self) -> bool {
        self.skip_digit_validation || self.allow_known_invalid || self.length_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_strict() {
        let opts = DocumentOptions::default();
        assert!(!opts.skip_digit_validation);
        assert!(!opts.remove_format);
        assert!(!opts.allow_known_invalid);
        assert!(!opts.length_only);
        assert!(!opts.is_lenient());
    }

    #[test]
    fn remove_format_alone_is_not_lenient() {
        let opts = DocumentOptions {
            remove_format: true,
            ..Default::default()
        };
        assert!(!opts.is_lenient());
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let opts: DocumentOptions =
            serde_json::from_str(r#"{"skipDigitValidation": true, "lengthOnly": true}"#).unwrap();
        assert!(opts.skip_digit_validation);
        assert!(opts.length_only);
        assert!(!opts.allow_known_invalid);

        let empty: DocumentOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, DocumentOptions::default());
    }

    #[test]
    fn rejects_unknown_keys() {
        let result = serde_json::from_str::<DocumentOptions>(r#"{"skipDigits": true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(DocumentOptions {
            allow_known_invalid: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json["allowKnownInvalid"], true);
        assert_eq!(json["removeFormat"], false);
    }
}
