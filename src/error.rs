//! Error taxonomy for vector types, construction and mutation.
//!
//! Every violation is raised synchronously at the point it happens. Nothing
//! is retried or rolled back: each write is validated before it commits.

/// Errors raised by the registry, constructors, accessors and arithmetic.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VecError {
    /// A dimension that is not a positive integer (or is below the
    /// registry's configured minimum) was requested.
    #[error("Invalid dimension {value}: {reason}")]
    InvalidDimension {
        /// The rejected input, rendered for diagnostics
        value: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// A constructor received an argument count other than 0, 1 or the
    /// dimension.
    #[error("Argument list must be empty, have a single number, or have length {dimension}; got {got}")]
    Arity {
        /// Dimension of the type being constructed
        dimension: usize,
        /// Number of arguments received
        got: usize,
    },

    /// A non-numeric value was supplied where a number is required.
    #[error("Vectors may only contain numbers, found {found}")]
    NonNumeric {
        /// Type name of the offending value
        found: &'static str,
    },

    /// A multi-symbol swizzle assignment received something other than a
    /// sequence.
    #[error("Right-hand side must be a sequence of numbers, found {found}")]
    NotASequence {
        /// Type name of the offending value
        found: &'static str,
    },

    /// A multi-symbol swizzle assignment received a sequence of the wrong length.
    #[error("Right-hand side must have length {expected}, got {got}")]
    LengthMismatch {
        /// Number of symbols in the swizzle
        expected: usize,
        /// Length of the supplied sequence
        got: usize,
    },

    /// Promotion from a higher-dimension vector into a lower-dimension type.
    #[error("Cannot demote a vec{from} into a vec{to}")]
    Demotion {
        /// Dimension of the source vector
        from: usize,
        /// Dimension of the target type
        to: usize,
    },

    /// Direct index access at or beyond the dimension.
    #[error("Index {index} is out of range for a vector of dimension {dimension}")]
    Range {
        /// The offending index
        index: usize,
        /// Dimension of the vector
        dimension: usize,
    },

    /// A write swizzle that names the same component twice.
    #[error("Swizzle assignment does not allow repeated symbols: {swizzle}")]
    DuplicateSwizzle {
        /// The swizzle string as written
        swizzle: String,
    },

    /// An operand whose length does not match the vector it is combined with.
    #[error("Operand dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Dimension of the receiving vector
        expected: usize,
        /// Length of the operand
        got: usize,
    },

    /// A variadic helper was called with no vectors.
    #[error("At least one vector is required")]
    EmptyInput,

    /// A splice that would change the vector's length.
    #[error("All removed elements must be replaced: dimension {dimension}, result length {got}")]
    Splice {
        /// Dimension of the vector
        dimension: usize,
        /// Length the splice would have produced
        got: usize,
    },

    /// Registry configuration rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VecError>;

impl VecError {
    pub(crate) fn invalid_dimension(value: impl ToString, reason: &'static str) -> Self {
        VecError::InvalidDimension {
            value: value.to_string(),
            reason,
        }
    }
}
