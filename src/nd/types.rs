// src/nd/types.rs

/// Component type of every vector.
pub type Scalar = f64;

/// Largest dimension for which named (swizzle) accessors are available.
pub const MAX_SWIZZLE_DIMENSION: usize = 4;

/// Largest admissible dimension, `2³² − 1` components.
pub const MAX_DIMENSION: usize = u32::MAX as usize;

// the dimension is a runtime value held by `VecType`, so we don't hard-code DIM here
