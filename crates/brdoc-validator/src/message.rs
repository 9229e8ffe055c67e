//! # Failure Messages
//!
//! A failing constraint reports either a fixed text or the output of a
//! producer function of the [`ValidationArguments`]. Either way the result
//! goes through special-token substitution:
//!
//! | Token | Replaced with |
//! |-------|---------------|
//! | `$property` | property name |
//! | `$target` | target type name |
//! | `$value` | the property value (strings verbatim, other JSON as text, `null` as empty) |

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Context handed to message producers and default messages.
#[derive(Debug, Clone, Copy)]
pub struct ValidationArguments<'a> {
    /// Name of the validated type (e.g. `"User"`).
    pub target_name: &'a str,
    /// Name of the property being validated.
    pub property: &'a str,
    /// The property value. Absent properties appear as `null`.
    pub value: &'a Value,
    /// The whole object under validation.
    pub object: &'a serde_json::Map<String, Value>,
}

/// A function producing a failure message from its context.
pub type MessageProducer = Arc<dyn Fn(&ValidationArguments<'_>) -> String + Send + Sync>;

/// Custom failure message for a constraint.
#[derive(Clone)]
pub enum MessageSource {
    /// Fixed text.
    Text(String),
    /// Computed from the validation context.
    Producer(MessageProducer),
}

impl MessageSource {
    /// Wrap a closure as a message producer.
    pub fn producer<F>(f: F) -> Self
    where
        F: Fn(&ValidationArguments<'_>) -> String + Send + Sync + 'static,
    {
        Self::Producer(Arc::new(f))
    }

    /// Produce the raw message (before token substitution).
    pub fn produce(&self, args: &ValidationArguments<'_>) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Producer(f) => f(args),
        }
    }
}

impl fmt::Debug for MessageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

impl From<&str> for MessageSource {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for MessageSource {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Substitute `$value`, `$property` and `$target` in `message`.
pub fn replace_special_tokens(message: &str, args: &ValidationArguments<'_>) -> String {
    let value = match args.value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    message
        .replace("$value", &value)
        .replace("$property", args.property)
        .replace("$target", args.target_name)
}
