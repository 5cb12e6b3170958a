use std::fmt;

use async_graphql_value::{ConstValue, Value};

/// Kind tag of an engine value or a literal node.
///
/// The `Display` form is the tag name as it appears in GraphQL tooling
/// (`IntValue`, `StringValue`, ...), used when reporting what was found
/// instead of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Variable,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    BinaryValue,
}

impl ValueKind {
    /// Kind of a literal node from query text.
    #[must_use]
    pub fn of_literal(node: &Value) -> Self {
        match node {
            Value::Variable(_) => Self::Variable,
            Value::Null => Self::NullValue,
            Value::Number(n) => Self::of_number(n),
            Value::String(_) => Self::StringValue,
            Value::Boolean(_) => Self::BooleanValue,
            Value::Binary(_) => Self::BinaryValue,
            Value::Enum(_) => Self::EnumValue,
            Value::List(_) => Self::ListValue,
            Value::Object(_) => Self::ObjectValue,
        }
    }

    /// Kind of a resolved (variable-free) value.
    #[must_use]
    pub fn of_value(value: &ConstValue) -> Self {
        match value {
            ConstValue::Null => Self::NullValue,
            ConstValue::Number(n) => Self::of_number(n),
            ConstValue::String(_) => Self::StringValue,
            ConstValue::Boolean(_) => Self::BooleanValue,
            ConstValue::Binary(_) => Self::BinaryValue,
            ConstValue::Enum(_) => Self::EnumValue,
            ConstValue::List(_) => Self::ListValue,
            ConstValue::Object(_) => Self::ObjectValue,
        }
    }

    // Integers that overflow i64/u64 are stored as f64 and count as floats.
    fn of_number(n: &async_graphql_value::Number) -> Self {
        if n.is_f64() {
            Self::FloatValue
        } else {
            Self::IntValue
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Variable => "Variable",
            Self::IntValue => "IntValue",
            Self::FloatValue => "FloatValue",
            Self::StringValue => "StringValue",
            Self::BooleanValue => "BooleanValue",
            Self::NullValue => "NullValue",
            Self::EnumValue => "EnumValue",
            Self::ListValue => "ListValue",
            Self::ObjectValue => "ObjectValue",
            Self::BinaryValue => "BinaryValue",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
