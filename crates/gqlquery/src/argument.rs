use crate::Value;
use std::fmt;

/// A single `key: value` pair attached to a selection.
///
/// Keys are emitted as-is, so a variable reference like `"$rsql"` works the
/// same way a plain argument name does. Argument lists preserve insertion
/// order and never deduplicate keys; a caller that adds the same key twice
/// gets it emitted twice.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub(crate) key: String,
    pub(crate) value: Value,
}

impl Argument {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}
