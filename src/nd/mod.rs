//! N-dimensional vector support (registry, storage, accessors, swizzles).

pub mod types;
pub mod registry;
pub mod vecn;
pub mod accessor;
pub mod swizzle;
