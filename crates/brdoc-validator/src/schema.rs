//! # Validation Schemas and Registry
//!
//! Rust has no runtime reflection, so the properties to validate are declared
//! in an explicit [`ValidationSchema`] supplied alongside each instance. A
//! schema lists, in declaration order, the validators registered against each
//! property of one target type. [`ValidatorRegistry`] keys schemas by target
//! name so registration can happen once, separately from validation.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::constraint::PropertyValidator;
use crate::error::ValidatorError;
use crate::validate::{validate_object, PropertyFailure};

/// The validators registered against one property.
#[derive(Debug, Clone)]
pub struct PropertyRules {
    name: String,
    validators: Vec<Arc<dyn PropertyValidator>>,
}

impl PropertyRules {
    /// Property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validators, in registration order.
    pub fn validators(&self) -> &[Arc<dyn PropertyValidator>] {
        &self.validators
    }
}

/// Ordered property constraints for one target type.
#[derive(Debug, Clone)]
pub struct ValidationSchema {
    target: String,
    properties: Vec<PropertyRules>,
}

impl ValidationSchema {
    /// Empty schema for `target`.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            properties: Vec::new(),
        }
    }

    /// Builder form of [`ValidationSchema::register`].
    pub fn property(mut self, name: &str, validator: impl PropertyValidator + 'static) -> Self {
        self.register(name, Arc::new(validator));
        self
    }

    /// Register `validator` against property `name`.
    ///
    /// A property keeps the position of its first registration; later
    /// validators for the same property are appended to it.
    pub fn register(&mut self, name: &str, validator: Arc<dyn PropertyValidator>) {
        match self.properties.iter_mut().find(|p| p.name == name) {
            Some(rules) => rules.validators.push(validator),
            None => self.properties.push(PropertyRules {
                name: name.to_string(),
                validators: vec![validator],
            }),
        }
    }

    /// Target type name.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Properties in declaration order.
    pub fn properties(&self) -> &[PropertyRules] {
        &self.properties
    }

    /// Number of properties with at least one validator.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True if no property has a validator.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Types that declare their own validation schema.
///
/// The instance is reflected through its `Serialize` implementation, so
/// property names are the serialized field names.
pub trait Validatable: Serialize {
    /// The schema applied to every instance of this type.
    fn validation_schema() -> ValidationSchema;
}

/// Schemas keyed by target type name.
#[derive(Debug, Clone, Default)]
pub struct ValidatorRegistry {
    schemas: HashMap<String, ValidationSchema>,
}

impl ValidatorRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with `schemas`. Later schemas for the same
    /// target replace earlier ones.
    pub fn from_schemas(schemas: impl IntoIterator<Item = ValidationSchema>) -> Self {
        let mut registry = Self::new();
        for schema in schemas {
            registry.insert_schema(schema);
        }
        registry
    }

    /// Register `validator` against `(target, property)`.
    pub fn register(
        &mut self,
        target: &str,
        property: &str,
        validator: impl PropertyValidator + 'static,
    ) {
        self.schemas
            .entry(target.to_string())
            .or_insert_with(|| ValidationSchema::new(target))
            .register(property, Arc::new(validator));
    }

    /// Insert a whole schema, replacing any existing one for its target.
    pub fn insert_schema(&mut self, schema: ValidationSchema) -> Option<ValidationSchema> {
        self.schemas.insert(schema.target.clone(), schema)
    }

    /// The schema registered for `target`.
    pub fn schema(&self, target: &str) -> Option<&ValidationSchema> {
        self.schemas.get(target)
    }

    /// Registered target names, sorted.
    pub fn targets(&self) -> Vec<&str> {
        let mut targets: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        targets.sort_unstable();
        targets
    }

    /// Validate `object` against the schema registered for `target`.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::UnknownTarget`] if nothing is registered for
    /// `target`; [`ValidatorError::NotAnObject`] if `object` is not a JSON
    /// object.
    pub fn validate(
        &self,
        target: &str,
        object: &Value,
    ) -> Result<Vec<PropertyFailure>, ValidatorError> {
        let schema = self
            .schema(target)
            .ok_or_else(|| ValidatorError::UnknownTarget(target.to_string()))?;
        let map = object.as_object().ok_or_else(|| ValidatorError::NotAnObject {
            target: target.to_string(),
        })?;
        Ok(validate_object(map, schema))
    }
}
