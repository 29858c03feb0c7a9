// Licensed under the Apache-2.0 license

//! The top-level register map container.

use crate::array::RegisterArray;
use crate::constant::Constant;
use crate::register::Register;

/// One entry in the ordered top-level register object sequence.
///
/// Traversals dispatch on this tag; plain registers and register arrays are
/// interleaved in whatever order the loader appended them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterObject {
    /// A plain register.
    Register(Register),
    /// A repeated block of registers.
    Array(RegisterArray),
}

impl RegisterObject {
    /// Number of register slots this object occupies.
    pub fn index_span(&self) -> usize {
        match self {
            RegisterObject::Register(_) => 1,
            RegisterObject::Array(array) => array.index_span(),
        }
    }

    /// First register slot this object occupies.
    pub fn base_index(&self) -> usize {
        match self {
            RegisterObject::Register(register) => register.index,
            RegisterObject::Array(array) => array.base_index,
        }
    }

    pub fn as_register(&self) -> Option<&Register> {
        if let RegisterObject::Register(register) = self {
            Some(register)
        } else {
            None
        }
    }

    pub fn as_array(&self) -> Option<&RegisterArray> {
        if let RegisterObject::Array(array) = self {
            Some(array)
        } else {
            None
        }
    }
}

/// Loader-facing container for one module's register interface.
///
/// Append order is display order. Register indexes (and hence byte addresses)
/// are assigned automatically: a plain register takes the next free slot, a
/// register array takes `length × template length` slots starting at the next
/// free slot. An array must be fully populated through the returned reference
/// before further objects are appended, since subsequent slot assignment
/// counts the template registers present at append time.
#[derive(Clone, Debug, Default)]
pub struct RegisterMap {
    /// Name of the module this map belongs to.
    pub name: String,
    register_objects: Vec<RegisterObject>,
    constants: Vec<Constant>,
}

impl RegisterMap {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn next_register_index(&self) -> usize {
        self.register_objects
            .iter()
            .map(|object| object.base_index() + object.index_span())
            .max()
            .unwrap_or(0)
    }

    /// Append a plain register at the next free slot.
    pub fn append_register(&mut self, name: &str, mode: &str) -> &mut Register {
        let index = self.next_register_index();
        self.register_objects
            .push(RegisterObject::Register(Register::new(name, index, mode)));
        match self.register_objects.last_mut() {
            Some(RegisterObject::Register(register)) => register,
            _ => unreachable!(),
        }
    }

    /// Append a register array starting at the next free slot.
    pub fn append_register_array(&mut self, name: &str, length: usize) -> &mut RegisterArray {
        let base_index = self.next_register_index();
        self.register_objects
            .push(RegisterObject::Array(RegisterArray::new(
                name, length, base_index,
            )));
        match self.register_objects.last_mut() {
            Some(RegisterObject::Array(array)) => array,
            _ => unreachable!(),
        }
    }

    /// Append a constant.
    pub fn append_constant(&mut self, name: &str, value: i64) -> &mut Constant {
        self.constants.push(Constant::new(name, value));
        let last = self.constants.len() - 1;
        &mut self.constants[last]
    }

    /// The ordered register object sequence.
    pub fn register_objects(&self) -> &[RegisterObject] {
        &self.register_objects
    }

    /// The constants, in append order.
    pub fn constants(&self) -> &[Constant] {
        &self.constants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_registers_get_consecutive_addresses() {
        let mut map = RegisterMap::new("uart");
        map.append_register("config", "r_w");
        map.append_register("status", "r");
        let registers: Vec<&Register> = map
            .register_objects()
            .iter()
            .filter_map(RegisterObject::as_register)
            .collect();
        assert_eq!(registers[0].address(), 0);
        assert_eq!(registers[1].address(), 4);
    }

    #[test]
    fn test_array_reserves_its_full_span() {
        let mut map = RegisterMap::new("dma");
        map.append_register("control", "r_w");
        {
            let array = map.append_register_array("channels", 4);
            array.append_register("source", "r_w");
            array.append_register("destination", "r_w");
        }
        // 1 plain slot + 4 * 2 array slots
        let register = map.append_register("irq_status", "r");
        assert_eq!(register.index, 9);
        assert_eq!(register.address(), 36);
    }

    #[test]
    fn test_array_base_index_follows_preceding_objects() {
        let mut map = RegisterMap::new("dma");
        map.append_register("control", "r_w");
        map.append_register("version", "r");
        let array = map.append_register_array("channels", 2);
        assert_eq!(array.base_index, 2);
    }

    #[test]
    fn test_constants_are_kept_in_order() {
        let mut map = RegisterMap::new("fifo");
        map.append_constant("depth", 512);
        map.append_constant("width", 64);
        let names: Vec<&str> = map
            .constants()
            .iter()
            .map(|constant| constant.name.as_str())
            .collect();
        assert_eq!(names, ["depth", "width"]);
    }
}
