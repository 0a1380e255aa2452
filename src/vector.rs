//! Convenience constructors for the common small dimensions.
//!
//! `vec2`, `vec3` and `vec4` build vectors through the global registry, so
//! the results share the type handles returned by [`vec3_type`] and friends.

use crate::nd::registry::{Registry, VecType};
use crate::nd::types::Scalar;
use crate::nd::vecn::Vector;
use crate::value::Value;
use std::fmt;

// 2, 3 and 4 are admissible under every configuration.
fn global_type(dimension: usize) -> VecType {
    Registry::global().get_or_insert(dimension)
}

/// Type handle for 2-D vectors in the global registry.
pub fn vec2_type() -> VecType {
    global_type(2)
}

/// Type handle for 3-D vectors in the global registry.
pub fn vec3_type() -> VecType {
    global_type(3)
}

/// Type handle for 4-D vectors in the global registry.
pub fn vec4_type() -> VecType {
    global_type(4)
}

/// Create a 2-D vector.
#[inline]
pub fn vec2(x: Scalar, y: Scalar) -> Vector {
    vec2_type().wrap(vec![x, y])
}

/// Create a 3-D vector.
#[inline]
pub fn vec3(x: Scalar, y: Scalar, z: Scalar) -> Vector {
    vec3_type().wrap(vec![x, y, z])
}

/// Create a 4-D vector.
#[inline]
pub fn vec4(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Vector {
    vec4_type().wrap(vec![x, y, z, w])
}

/// Whether `value` is a vector of any dimension from any registry.
#[inline]
pub fn is_vector(value: &Value) -> bool {
    matches!(value, Value::Vector(_))
}

/// A tiny wrapper for printing a `Vector` rounded to `decimals` places.
pub struct Rounded<'a>(pub &'a Vector, pub usize);

impl<'a> fmt::Display for Rounded<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Rounded(v, dec) = *self;
        write!(f, "{} {{ ", v.vec_type().name())?;
        for (i, x) in v.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{x:.dec$}")?;
        }
        f.write_str(" }")
    }
}

impl<'a> Rounded<'a> {
    /// Wrap a `&Vector` for pretty-printing with `decimals` digits.
    #[inline(always)]
    pub fn new(v: &'a Vector, decimals: usize) -> Self {
        Rounded(v, decimals)
    }
}
