// Licensed under the Apache-2.0 license

//! Registers and their bit fields.

/// A named bit field within a register.
///
/// Bits have no lifecycle of their own; they are created and dropped with the
/// register that owns them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bit {
    /// Field name.
    pub name: String,
    /// 0-based bit position within the register. Indexes need not be
    /// contiguous, but must be unique within the owning register.
    pub index: u32,
    /// Rich-text description, translated by the artifact back ends.
    pub description: String,
}

impl Bit {
    pub fn new(name: &str, index: u32, description: &str) -> Self {
        Self {
            name: name.to_string(),
            index,
            description: description.to_string(),
        }
    }
}

/// One addressable register.
///
/// Registers occupy four-byte slots. A top-level register's `index` is its
/// global register index within the map, so its byte address is
/// `4 * index`. A register inside a [`RegisterArray`](crate::RegisterArray)
/// instead carries its local index within one repetition of the template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Register {
    /// Register name.
    pub name: String,
    /// Register index; see the type-level docs for the two interpretations.
    pub index: usize,
    /// Key into the mode registry. Must resolve; generation aborts otherwise.
    pub mode: String,
    /// Value of the register after reset.
    pub default_value: u32,
    /// Rich-text description, translated by the artifact back ends.
    pub description: String,
    /// Bit fields, in display order.
    pub bits: Vec<Bit>,
}

impl Register {
    pub fn new(name: &str, index: usize, mode: &str) -> Self {
        Self {
            name: name.to_string(),
            index,
            mode: mode.to_string(),
            default_value: 0,
            description: String::new(),
            bits: Vec::new(),
        }
    }

    /// Byte address of the register (four bytes per register slot).
    pub fn address(&self) -> usize {
        4 * self.index
    }

    /// Append a bit field with the next free index.
    ///
    /// Loaders that assign non-contiguous bit indexes push [`Bit`] values
    /// onto `bits` directly instead.
    pub fn append_bit(&mut self, name: &str, description: &str) -> &mut Bit {
        let index = self.bits.len() as u32;
        self.bits.push(Bit::new(name, index, description));
        let last = self.bits.len() - 1;
        &mut self.bits[last]
    }
}
