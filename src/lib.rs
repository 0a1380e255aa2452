//! # vecn Quickstart
//!
//! ```rust
//! use vecn::prelude::*;
//!
//! let mut v = vec3(1.0, 2.0, 3.0);
//!
//! // Swizzle reads build new vectors
//! assert_eq!(v.swizzle_vector("zyx").unwrap(), vec3(3.0, 2.0, 1.0));
//!
//! // Swizzle writes distribute over the named components
//! v.set("yz", vec2(9.0, 9.0)).unwrap();
//! assert_eq!(v, vec3(1.0, 9.0, 9.0));
//!
//! // Any dimension, from one memoized type per dimension
//! let vec5 = get_vector_type(5).unwrap();
//! assert_eq!(vec5, get_vector_type(5).unwrap());
//! let u = vec5.call([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(u.dot(&u).unwrap(), 55.0);
//! ```
//!
#![doc = include_str!("../README.md")]

// Core modules
pub mod error;
pub mod nd;
pub mod ops;
pub mod prelude;
pub mod value;
pub mod vector;

// --- Public API exports ---

pub use error::{Result, VecError};
pub use value::Value;

// Runtime-dimension types and the registry
pub use nd::registry::{get_vector_type, IntoDimension, Registry, RegistryConfig, VecType};
pub use nd::swizzle::{Swizzle, SymbolSet};
pub use nd::types::{Scalar, MAX_DIMENSION};
pub use nd::vecn::Vector;

// Arithmetic layer
pub use ops::interp::{add, lerp, multiply, slerp};
pub use ops::sequence::{Sequence, DEFAULT_EPSILON};
pub use ops::Operand;

// Small-dimension conveniences
pub use vector::{is_vector, vec2, vec2_type, vec3, vec3_type, vec4, vec4_type, Rounded};
