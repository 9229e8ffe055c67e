//! # Predicates
//!
//! The boolean entry points. These are what the object validator calls for
//! each annotated property, and what any other caller should use when a
//! yes/no answer is enough.

use serde_json::Value;

use crate::kind::DocumentKind;
use crate::options::{CnpjOptions, CpfOptions};
use crate::policy::{evaluate, evaluate_value};

/// True if `input` is an acceptable CPF under `options`.
///
/// Absent or empty input is accepted: document fields are optional.
///
/// ```
/// use brdoc_core::{is_valid_cpf, CpfOptions};
///
/// assert!(is_valid_cpf("111.444.777-35", &CpfOptions::default()));
/// assert!(!is_valid_cpf("111.444.777-36", &CpfOptions::default()));
/// assert!(is_valid_cpf(None::<&str>, &CpfOptions::default()));
/// ```
pub fn is_valid_cpf<'a>(input: impl Into<Option<&'a str>>, options: &CpfOptions) -> bool {
    evaluate(DocumentKind::Cpf, input.into(), options).is_valid()
}

/// True if `input` is an acceptable CNPJ under `options`.
///
/// ```
/// use brdoc_core::{is_valid_cnpj, CnpjOptions};
///
/// assert!(is_valid_cnpj("11.222.333/0001-81", &CnpjOptions::default()));
/// assert!(!is_valid_cnpj("11.222.333/0001-82", &CnpjOptions::default()));
/// ```
pub fn is_valid_cnpj<'a>(input: impl Into<Option<&'a str>>, options: &CnpjOptions) -> bool {
    evaluate(DocumentKind::Cnpj, input.into(), options).is_valid()
}

/// [`is_valid_cpf`] over an untyped value; non-string, non-null values fail.
pub fn is_valid_cpf_value(value: &Value, options: &CpfOptions) -> bool {
    evaluate_value(DocumentKind::Cpf, value, options).is_valid()
}

/// [`is_valid_cnpj`] over an untyped value; non-string, non-null values fail.
pub fn is_valid_cnpj_value(value: &Value, options: &CnpjOptions) -> bool {
    evaluate_value(DocumentKind::Cnpj, value, options).is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DocumentOptions;
    use serde_json::json;

    #[test]
    fn optional_field_semantics() {
        let opts = DocumentOptions::default();
        assert!(is_valid_cpf("", &opts));
        assert!(is_valid_cpf(None::<&str>, &opts));
        assert!(is_valid_cnpj("", &opts));
        assert!(is_valid_cnpj(None::<&str>, &opts));
        assert!(is_valid_cpf_value(&json!(null), &opts));
    }

    #[test]
    fn accepts_option_of_str() {
        let value: Option<String> = Some("11144477735".into());
        assert!(is_valid_cpf(value.as_deref(), &DocumentOptions::default()));
    }

    #[test]
    fn non_text_values_fail() {
        let opts = DocumentOptions::default();
        for value in [json!(11144477735u64), json!(true), json!({}), json!(["11222333000181"])] {
            assert!(!is_valid_cpf_value(&value, &opts));
            assert!(!is_valid_cnpj_value(&value, &opts));
        }
    }
}
