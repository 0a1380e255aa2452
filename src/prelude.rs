// src/prelude.rs
//! The “everything” import for vecn.
//!
//! Brings you the most commonly used types and functions with one glob:
//! ```rust
//! use vecn::prelude::*;
//! ```

// core data types
pub use crate::error::VecError;
pub use crate::nd::registry::{get_vector_type, Registry, RegistryConfig, VecType};
pub use crate::nd::vecn::Vector;
pub use crate::value::Value;
pub use crate::vector::{is_vector, vec2, vec3, vec4, Rounded};

// operations
pub use crate::ops::interp::{add, lerp, multiply, slerp};
pub use crate::ops::sequence::Sequence;
