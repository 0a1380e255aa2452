//! Dynamic values accepted by constructors and string-keyed setters.
//!
//! Typed callers rarely need this: `f64`, slices, arrays and `Vector`s all
//! convert into a `Value` implicitly. It exists so that the "only numbers"
//! guarantees can be enforced against arbitrary input.

use crate::nd::types::Scalar;
use crate::nd::vecn::Vector;

/// Any value that may be offered to a vector.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence of a value.
    Null,
    /// A boolean. Never coerced to a number.
    Bool(bool),
    /// A number; the only admissible component value.
    Number(Scalar),
    /// A string. Never parsed.
    Str(String),
    /// An ordered, possibly heterogeneous sequence.
    List(Vec<Value>),
    /// A vector of any dimension.
    Vector(Vector),
}

impl Value {
    /// The number held by this value, if it is one.
    #[inline]
    pub fn as_number(&self) -> Option<Scalar> {
        match self {
            Value::Number(x) => Some(*x),
            _ => None,
        }
    }

    /// The vector held by this value, if it is one.
    #[inline]
    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// Returns `true` for lists and vectors.
    #[inline]
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::List(_) | Value::Vector(_))
    }

    /// Capitalised type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Boolean",
            Value::Number(_) => "Number",
            Value::Str(_) => "String",
            Value::List(_) => "Array",
            Value::Vector(_) => "Vector",
        }
    }

    /// Unpacks a list or vector into its items; any other value is handed back.
    pub fn into_items(self) -> std::result::Result<Vec<Value>, Value> {
        match self {
            Value::List(items) => Ok(items),
            Value::Vector(v) => Ok(v.iter().map(|&x| Value::Number(x)).collect()),
            other => Err(other),
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Number(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Number(x as Scalar)
    }
}

impl From<i32> for Value {
    fn from(x: i32) -> Self {
        Value::Number(x as Scalar)
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Self {
        Value::Number(x as Scalar)
    }
}

impl From<u32> for Value {
    fn from(x: u32) -> Self {
        Value::Number(x as Scalar)
    }
}

impl From<usize> for Value {
    fn from(x: usize) -> Self {
        Value::Number(x as Scalar)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vector> for Value {
    fn from(v: Vector) -> Self {
        Value::Vector(v)
    }
}

impl From<&Vector> for Value {
    fn from(v: &Vector) -> Self {
        Value::Vector(v.clone())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<&[Scalar]> for Value {
    fn from(items: &[Scalar]) -> Self {
        Value::List(items.iter().map(|&x| Value::Number(x)).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_the_only_numeric_values() {
        assert_eq!(Value::from(2.5).as_number(), Some(2.5));
        assert_eq!(Value::from(3).as_number(), Some(3.0));
        assert_eq!(Value::from(true).as_number(), None);
        assert_eq!(Value::from("1").as_number(), None);
        assert_eq!(Value::Null.as_number(), None);
    }

    #[test]
    fn nested_lists_keep_their_shape() {
        let v = Value::from(vec![vec![1.0, 2.0]]);
        match v {
            Value::List(outer) => {
                assert_eq!(outer.len(), 1);
                assert!(outer[0].is_sequence());
            }
            other => panic!("expected a list, got {other:?}"),
        }
    }

    #[test]
    fn none_becomes_null() {
        let v: Value = Option::<f64>::None.into();
        assert_eq!(v, Value::Null);
        assert_eq!(v.type_name(), "Null");
    }
}
