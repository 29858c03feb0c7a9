// Licensed under the Apache-2.0 license

//! Named constants attached to a register interface.

/// A named constant.
///
/// Constants are purely documentary: they are part of the register interface
/// description but occupy no address space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constant {
    /// Constant name.
    pub name: String,
    /// Constant value.
    pub value: i64,
    /// Rich-text description, translated by the artifact back ends.
    pub description: String,
}

impl Constant {
    pub fn new(name: &str, value: i64) -> Self {
        Self {
            name: name.to_string(),
            value,
            description: String::new(),
        }
    }
}
