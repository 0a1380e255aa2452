// src/nd/accessor.rs
//! String-keyed access to a vector's components.
//!
//! Every key is classified once into an [`Accessor`] and dispatched:
//! canonical integer keys address components, swizzle keys go through
//! [`Swizzle`] (only for dimension ≤ 4), a few read-only properties are
//! computed, and everything else is absent on read and refused on write.
//! The vector is sealed: no key ever adds storage.

use crate::error::Result;
use crate::nd::swizzle::Swizzle;
use crate::nd::types::MAX_SWIZZLE_DIMENSION;
use crate::nd::vecn::Vector;
use crate::value::Value;

/// Read-only named properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    /// `length`: the dimension.
    Length,
    /// `dim`: the dimension.
    Dim,
    /// `magnitude`: the Euclidean norm.
    Magnitude,
}

impl Property {
    fn parse(key: &str) -> Option<Self> {
        match key {
            "length" => Some(Property::Length),
            "dim" => Some(Property::Dim),
            "magnitude" => Some(Property::Magnitude),
            _ => None,
        }
    }
}

/// What a key refers to on a vector of a given dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessor {
    /// A component index (possibly out of range).
    Index(usize),
    /// A named swizzle; only produced for dimension ≤ 4.
    Swizzle(Swizzle),
    /// A computed read-only property.
    Property(Property),
    /// Anything else.
    Unknown,
}

impl Accessor {
    /// Classify `key` for a vector of `dimension` components.
    pub fn parse(key: &str, dimension: usize) -> Self {
        if let Some(index) = parse_index(key) {
            return Accessor::Index(index);
        }
        if dimension <= MAX_SWIZZLE_DIMENSION {
            if let Some(swizzle) = Swizzle::parse(key) {
                return Accessor::Swizzle(swizzle);
            }
        }
        match Property::parse(key) {
            Some(p) => Accessor::Property(p),
            None => Accessor::Unknown,
        }
    }
}

/// Parse a canonical array index: decimal digits, no sign, no leading zero
/// (except `"0"` itself), no whitespace or exponent.
pub fn parse_index(key: &str) -> Option<usize> {
    let bytes = key.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    key.parse().ok()
}

impl Vector {
    /// Read a key.
    ///
    /// Integer keys yield a component, swizzles a number or a new vector,
    /// `length`/`dim`/`magnitude` their values. `None` for anything out of
    /// range or unrecognised.
    pub fn get(&self, key: &str) -> Option<Value> {
        match Accessor::parse(key, self.dimension()) {
            Accessor::Index(i) => self.component(i).map(Value::Number),
            Accessor::Swizzle(s) => s.read(self),
            Accessor::Property(Property::Length | Property::Dim) => {
                Some(Value::Number(self.dimension() as f64))
            }
            Accessor::Property(Property::Magnitude) => Some(Value::Number(self.magnitude())),
            Accessor::Unknown => None,
        }
    }

    /// Write a key.
    ///
    /// Returns `Ok(true)` if components changed and `Ok(false)` if the write
    /// was silently refused (read-only property, unknown key, or a swizzle
    /// beyond this vector's dimension).
    ///
    /// # Errors
    /// - [`VecError::Range`](crate::error::VecError::Range) for an integer key at or beyond the dimension
    /// - [`VecError::NonNumeric`](crate::error::VecError::NonNumeric) for a non-number where one is required
    /// - [`VecError::NotASequence`](crate::error::VecError::NotASequence) / [`VecError::LengthMismatch`](crate::error::VecError::LengthMismatch) for a bad
    ///   multi-symbol swizzle right-hand side
    /// - [`VecError::DuplicateSwizzle`](crate::error::VecError::DuplicateSwizzle) for a write swizzle with repeats
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<bool> {
        match Accessor::parse(key, self.dimension()) {
            Accessor::Index(i) => {
                self.set_index(i, value)?;
                Ok(true)
            }
            Accessor::Swizzle(s) => s.write(self, value.into()),
            Accessor::Property(p) => {
                tracing::trace!(property = ?p, "assignment to read-only property ignored");
                Ok(false)
            }
            Accessor::Unknown => {
                tracing::trace!(key, "vector is sealed; assignment ignored");
                Ok(false)
            }
        }
    }

    /// Whether reading `key` yields a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Read a swizzle directly. `None` if `key` is not a swizzle, the
    /// dimension is above 4, or a symbol is out of range.
    pub fn swizzle(&self, key: &str) -> Option<Value> {
        match Accessor::parse(key, self.dimension()) {
            Accessor::Swizzle(s) => s.read(self),
            _ => None,
        }
    }

    /// Read a multi-symbol swizzle as a vector.
    pub fn swizzle_vector(&self, key: &str) -> Option<Vector> {
        match self.swizzle(key)? {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }
}
