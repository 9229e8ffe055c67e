//! # Batch Validation
//!
//! Runs every registered validator over an object's properties and collects
//! the failures. Properties are visited in schema declaration order, so the
//! resulting messages come out in that order too.

use serde_json::{Map, Value};

use crate::error::ValidatorError;
use crate::message::{replace_special_tokens, ValidationArguments};
use crate::schema::{Validatable, ValidationSchema};

/// One failed constraint on a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintFailure {
    /// Constraint name (e.g. `"isCPF"`).
    pub constraint: String,
    /// Final message, tokens substituted.
    pub message: String,
}

/// A property with at least one failed constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyFailure {
    /// Property name.
    pub property: String,
    /// The offending value (`null` when absent).
    pub value: Value,
    /// Failed constraints, in registration order. Never empty.
    pub constraints: Vec<ConstraintFailure>,
}

impl PropertyFailure {
    /// The message of the first failed constraint.
    pub fn message(&self) -> String {
        match self.constraints.first() {
            Some(first) => first.message.clone(),
            None => format!("Property \"{}\" failed validation", self.property),
        }
    }
}

/// Validate `object` against `schema`.
///
/// Missing properties are validated as `null`.
pub fn validate_object(
    object: &Map<String, Value>,
    schema: &ValidationSchema,
) -> Vec<PropertyFailure> {
    let mut failures = Vec::new();

    for rules in schema.properties() {
        let value = object.get(rules.name()).unwrap_or(&Value::Null);
        let args = ValidationArguments {
            target_name: schema.target(),
            property: rules.name(),
            value,
            object,
        };

        let constraints: Vec<ConstraintFailure> = rules
            .validators()
            .iter()
            .filter(|validator| !validator.validate(value))
            .map(|validator| {
                tracing::debug!(
                    target_name = schema.target(),
                    property = rules.name(),
                    constraint = validator.name(),
                    "property failed validation"
                );
                ConstraintFailure {
                    constraint: validator.name().to_string(),
                    message: replace_special_tokens(&validator.default_message(&args), &args),
                }
            })
            .collect();

        if !constraints.is_empty() {
            failures.push(PropertyFailure {
                property: rules.name().to_string(),
                value: value.clone(),
                constraints,
            });
        }
    }

    tracing::trace!(
        target_name = schema.target(),
        properties = schema.len(),
        failures = failures.len(),
        "object validated"
    );
    failures
}

/// One message per failing property: the first failed constraint's message.
pub fn messages(failures: &[PropertyFailure]) -> Vec<String> {
    failures.iter().map(PropertyFailure::message).collect()
}

/// Validate a [`Validatable`] value and return its failure messages.
///
/// An empty list means the object is valid.
///
/// # Errors
///
/// [`ValidatorError::Json`] if the value cannot be serialized;
/// [`ValidatorError::NotAnObject`] if it does not serialize to a JSON object.
pub fn validate_brazilian_docs<T: Validatable>(object: &T) -> Result<Vec<String>, ValidatorError> {
    let schema = T::validation_schema();
    let value = serde_json::to_value(object)?;
    let map = value.as_object().ok_or_else(|| ValidatorError::NotAnObject {
        target: schema.target().to_string(),
    })?;
    Ok(messages(&validate_object(map, &schema)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{is_cnpj, is_cpf};
    use brdoc_core::DocumentOptions;
    use serde_json::json;

    fn schema() -> ValidationSchema {
        ValidationSchema::new("User")
            .property("cpf", is_cpf(DocumentOptions::default()))
            .property(
                "cnpj",
                is_cnpj(DocumentOptions::default()).with_message("$value is not a CNPJ"),
            )
    }

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn valid_object_has_no_failures() {
        let obj = object(json!({
            "cpf": "111.444.777-35",
            "cnpj": "11.222.333/0001-81",
            "name": "x"
        }));
        assert!(validate_object(&obj, &schema()).is_empty());
    }

    #[test]
    fn missing_properties_are_valid() {
        assert!(validate_object(&Map::new(), &schema()).is_empty());
    }

    #[test]
    fn failures_in_declaration_order_with_messages() {
        let obj = object(json!({"cnpj": "11.222.333/0001-82", "cpf": "111.444.777-36"}));
        let failures = validate_object(&obj, &schema());
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].property, "cpf");
        assert_eq!(failures[0].constraints[0].constraint, "isCPF");
        assert_eq!(failures[0].value, json!("111.444.777-36"));
        assert_eq!(
            messages(&failures),
            ["cpf is not a valid CPF", "11.222.333/0001-82 is not a CNPJ"]
        );
    }

    #[test]
    fn every_failed_constraint_is_recorded() {
        let schema = ValidationSchema::new("Doc")
            .property("id", is_cpf(DocumentOptions::default()).with_message("first"))
            .property("id", is_cnpj(DocumentOptions::default()).with_message("second"));
        let failures = validate_object(&object(json!({"id": "123"})), &schema);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].constraints.len(), 2);
        assert_eq!(failures[0].message(), "first");
    }

    #[test]
    fn non_text_property_fails() {
        let failures = validate_object(&object(json!({"cpf": 11144477735u64})), &schema());
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].message(), "cpf is not a valid CPF");
    }

    #[test]
    fn fallback_message_without_constraints() {
        let failure = PropertyFailure {
            property: "cpf".into(),
            value: Value::Null,
            constraints: Vec::new(),
        };
        assert_eq!(failure.message(), "Property \"cpf\" failed validation");
    }
}
