use indexmap::IndexMap;
use std::fmt;
use std::fmt::Write;

/// A GraphQL input literal.
///
/// `Value` covers every shape the argument encoder knows how to render: raw
/// tokens, quoted strings, numbers, booleans, `null`, lists, and
/// insertion-ordered objects. Rendering happens through [`std::fmt::Display`]
/// and never fails; the enum is closed, so there is no unsupported-shape
/// path.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A pre-formatted token emitted verbatim, with no quoting or escaping.
    /// Used for enum values, variable references (`$rsql`), and variable
    /// type declarations.
    Raw(String),
    Int(i64),
    Float(f64),
    /// A string literal; rendered double-quoted with GraphQL string-literal
    /// escaping applied.
    String(String),
    Bool(bool),
    Null,
    List(Vec<Value>),
    /// An input object. Keys render unquoted and in insertion order.
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Shorthand for building a [`Value::Raw`] token.
    pub fn raw(token: impl Into<String>) -> Self {
        Self::Raw(token.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(token) => f.write_str(token),

            Self::Int(value) => write!(f, "{value}"),

            Self::Float(value) => write!(f, "{value}"),

            Self::String(value) => write_escaped_string(f, value),

            Self::Bool(value) => write!(f, "{value}"),

            Self::Null => f.write_str("null"),

            Self::List(values) => {
                f.write_char('[')?;
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_char(']')
            },

            Self::Object(entries) => {
                f.write_char('{')?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_char('}')
            },
        }
    }
}

/// Write `input` double-quoted, escaping each scalar character per the
/// [GraphQL string-literal grammar](https://spec.graphql.org/October2021/#sec-String-Value).
///
/// Control characters without a single-letter escape render as `\uXXXX`;
/// everything outside U+0000-U+001F passes through unchanged.
fn write_escaped_string(f: &mut fmt::Formatter<'_>, input: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in input.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{0008}' => f.write_str("\\b")?,
            '\u{000C}' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            ch if (ch as u32) < 0x20 => write!(f, "\\u{:04x}", ch as u32)?,
            ch => f.write_char(ch)?,
        }
    }
    f.write_char('"')
}

impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl<V: Into<Value>> std::convert::From<Vec<V>> for Value {
    fn from(values: Vec<V>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}
impl std::convert::From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self::Object(entries)
    }
}
