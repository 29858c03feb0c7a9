// Licensed under the Apache-2.0 license

use thiserror::Error;

/// Errors raised when checking a register map model.
///
/// Every variant names the offending entity so that a loader failure can be
/// traced back to the source definition without re-running anything.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ModelError {
    /// A register references a mode key absent from the mode registry.
    #[error("register `{register}` references unknown mode key `{key}`")]
    UnknownMode {
        /// Name of the referencing register.
        register: String,
        /// The unresolvable key.
        key: String,
    },

    /// Two register objects occupy the same register slot.
    #[error("`{first}` and `{second}` overlap at address {address:#06X}")]
    AddressOverlap {
        /// Name of the object that claimed the slot first.
        first: String,
        /// Name of the object that collided with it.
        second: String,
        /// Byte address of the contested slot.
        address: usize,
    },

    /// Two bits in one register share an index.
    #[error("register `{register}`: bits `{first}` and `{second}` share index {index}")]
    DuplicateBitIndex {
        /// Name of the owning register.
        register: String,
        /// Name of the bit that used the index first.
        first: String,
        /// Name of the colliding bit.
        second: String,
        /// The contested bit index.
        index: u32,
    },

    /// A register array with zero repetitions.
    #[error("register array `{array}` has zero length")]
    ZeroLengthArray {
        /// Name of the array.
        array: String,
    },

    /// A template register index outside `[0, template length)`.
    #[error(
        "register `{register}` in array `{array}` has index {index}, \
         but the template holds {template_length} registers"
    )]
    ArrayIndexOutOfBounds {
        /// Name of the containing array.
        array: String,
        /// Name of the offending template register.
        register: String,
        /// The out-of-bounds index.
        index: usize,
        /// Number of registers in the template.
        template_length: usize,
    },

    /// Two template registers in one array share a local index.
    #[error("array `{array}`: registers `{first}` and `{second}` share index {index}")]
    DuplicateArrayIndex {
        /// Name of the containing array.
        array: String,
        /// Name of the register that used the index first.
        first: String,
        /// Name of the colliding register.
        second: String,
        /// The contested local index.
        index: usize,
    },
}

/// Result type for model operations.
pub type ModelResult<T> = std::result::Result<T, ModelError>;
