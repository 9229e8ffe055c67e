//! # Schema Configuration
//!
//! Declares a [`ValidationSchema`] in YAML instead of code:
//!
//! ```yaml
//! target: User
//! properties:
//!   - name: cpf
//!     constraints:
//!       - document: cpf
//!         message: "CPF é obrigatório e deve ser válido"
//!   - name: cnpj
//!     constraints:
//!       - document: cnpj
//!         options:
//!           lengthOnly: true
//! ```
//!
//! Only text messages can be configured; producer functions need code.

use std::path::Path;

use brdoc_core::{DocumentKind, DocumentOptions};
use serde::{Deserialize, Serialize};

use crate::constraint::DocumentConstraint;
use crate::error::ValidatorError;
use crate::schema::ValidationSchema;

/// One document constraint as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstraintConfig {
    /// Which document the property holds.
    pub document: DocumentKind,
    /// Leniency switches; all `false` when omitted.
    #[serde(default)]
    pub options: DocumentOptions,
    /// Custom failure message; special tokens are allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The constraints of one property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyConfig {
    /// Property name as serialized.
    pub name: String,
    /// Constraints in evaluation order.
    pub constraints: Vec<ConstraintConfig>,
}

/// A whole schema file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    /// Target type name.
    pub target: String,
    /// Properties in declaration order.
    pub properties: Vec<PropertyConfig>,
}

impl SchemaConfig {
    /// Parse a schema from YAML text.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::Yaml`] for malformed YAML, unknown keys, or an
    /// unrecognized document kind.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ValidatorError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a schema file.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::SchemaLoad`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ValidatorError> {
        let load_error = |reason: String| ValidatorError::SchemaLoad {
            path: path.display().to_string(),
            reason,
        };
        let text = std::fs::read_to_string(path)
            .map_err(|e| load_error(e.to_string()))?;
        let config: Self = serde_yaml::from_str(&text)
            .map_err(|e| load_error(e.to_string()))?;
        tracing::debug!(
            path = %path.display(),
            target_name = %config.target,
            properties = config.properties.len(),
            "loaded validation schema"
        );
        Ok(config)
    }

    /// Build the runtime schema.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::EmptySchema`] if no property is declared;
    /// [`ValidatorError::EmptyProperty`] if a property has no constraints.
    pub fn into_schema(self) -> Result<ValidationSchema, ValidatorError> {
        if self.properties.is_empty() {
            return Err(ValidatorError::EmptySchema(self.target));
        }

        let mut schema = ValidationSchema::new(self.target.as_str());
        for property in self.properties {
            if property.constraints.is_empty() {
                return Err(ValidatorError::EmptyProperty {
                    target: self.target,
                    property: property.name,
                });
            }
            for constraint in property.constraints {
                let mut built = DocumentConstraint::new(constraint.document, constraint.options);
                if let Some(message) = constraint.message {
                    built = built.with_message(message);
                }
                schema = schema.property(&property.name, built);
            }
        }
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const USER_YAML: &str = r#"
target: User
properties:
  - name: cpf
    constraints:
      - document: cpf
        message: "CPF é obrigatório e deve ser válido"
  - name: cnpj
    constraints:
      - document: cnpj
        options:
          lengthOnly: true
"#;

    #[test]
    fn parses_yaml() {
        let config = SchemaConfig::from_yaml_str(USER_YAML).unwrap();
        assert_eq!(config.target, "User");
        assert_eq!(config.properties.len(), 2);
        assert_eq!(config.properties[0].constraints[0].document, DocumentKind::Cpf);
        assert!(config.properties[1].constraints[0].options.length_only);
        assert!(config.properties[1].constraints[0].message.is_none());
    }

    #[test]
    fn builds_working_schema() {
        let schema = SchemaConfig::from_yaml_str(USER_YAML)
            .unwrap()
            .into_schema()
            .unwrap();
        assert_eq!(schema.target(), "User");
        let cnpj = &schema.properties()[1].validators()[0];
        assert_eq!(cnpj.name(), "isCNPJ");
        assert!(cnpj.validate(&json!("11222333000182")));
    }

    #[test]
    fn upper_case_document_kinds() {
        let yaml = r#"
target: User
properties:
  - name: cpf
    constraints:
      - document: CPF
  - name: cnpj
    constraints:
      - document: CNPJ
"#;
        let config = SchemaConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.properties[0].constraints[0].document, DocumentKind::Cpf);
        assert_eq!(config.properties[1].constraints[0].document, DocumentKind::Cnpj);
    }

    #[test]
    fn allow_known_invalid_does_not_admit_repeated_digits() {
        let yaml = r#"
target: User
properties:
  - name: cpf
    constraints:
      - document: cpf
        options:
          allowKnownInvalid: true
"#;
        let schema = SchemaConfig::from_yaml_str(yaml)
            .unwrap()
            .into_schema()
            .unwrap();
        let cpf = &schema.properties()[0].validators()[0];
        assert!(!cpf.validate(&json!("00000000000")));
        assert!(!cpf.validate(&json!("999.999.999-99")));
        assert!(cpf.validate(&json!("111.444.777-35")));
    }

    #[test]
    fn rejects_unknown_option() {
        let yaml = r#"
target: User
properties:
  - name: cpf
    constraints:
      - document: cpf
        options:
          strict: true
"#;
        assert!(matches!(SchemaConfig::from_yaml_str(yaml), Err(ValidatorError::Yaml(_))));
    }

    #[test]
    fn rejects_unknown_document() {
        let yaml = r#"
target: User
properties:
  - name: rg
    constraints:
      - document: rg
"#;
        assert!(SchemaConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn rejects_empty_schema_and_property() {
        let empty = SchemaConfig::from_yaml_str("target: User\nproperties: []\n").unwrap();
        assert!(matches!(empty.into_schema(), Err(ValidatorError::EmptySchema(t)) if t == "User"));

        let no_constraints = SchemaConfig::from_yaml_str(
            "target: User\nproperties:\n  - name: cpf\n    constraints: []\n",
        )
        .unwrap();
        assert!(matches!(
            no_constraints.into_schema(),
            Err(ValidatorError::EmptyProperty { property, .. }) if property == "cpf"
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.yaml");
        std::fs::write(&path, USER_YAML).unwrap();
        let config = SchemaConfig::load(&path).unwrap();
        assert_eq!(config.properties[0].name, "cpf");
    }

    #[test]
    fn load_missing_file_names_path() {
        let err = SchemaConfig::load(Path::new("/nonexistent/schema.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/schema.yaml"));
    }
}
