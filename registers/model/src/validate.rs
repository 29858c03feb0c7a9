// Licensed under the Apache-2.0 license

//! Opt-in defensive validation of a built register map.
//!
//! The artifact generators trust their input and only check mode-key
//! resolution; loaders and tests run this pass to fail fast on a malformed
//! model instead. Checks performed:
//!
//! - every mode key resolves in the mode registry
//! - bit indexes are unique within each register (top level and templates)
//! - no two register objects overlap in the register slot space
//! - register arrays have a positive length
//! - template register indexes are unique and within the template bounds
//!
//! Nothing is coerced: the first violation aborts with an error naming the
//! offending entity.

use crate::error::{ModelError, ModelResult};
use crate::map::RegisterObject;
use crate::mode;
use crate::register::Register;
use std::collections::HashMap;

/// Validate one register object sequence.
pub fn validate(register_objects: &[RegisterObject]) -> ModelResult<()> {
    let mut claimed_slots: HashMap<usize, &str> = HashMap::new();

    for object in register_objects {
        match object {
            RegisterObject::Register(register) => {
                check_register(register)?;
                claim(&mut claimed_slots, register.index, &register.name)?;
            }
            RegisterObject::Array(array) => {
                if array.length == 0 {
                    return Err(ModelError::ZeroLengthArray {
                        array: array.name.clone(),
                    });
                }
                let template_length = array.registers.len();
                let mut seen_indexes: HashMap<usize, &str> = HashMap::new();
                for register in &array.registers {
                    check_register(register)?;
                    if register.index >= template_length {
                        return Err(ModelError::ArrayIndexOutOfBounds {
                            array: array.name.clone(),
                            register: register.name.clone(),
                            index: register.index,
                            template_length,
                        });
                    }
                    if let Some(first) = seen_indexes.insert(register.index, &register.name) {
                        return Err(ModelError::DuplicateArrayIndex {
                            array: array.name.clone(),
                            first: first.to_string(),
                            second: register.name.clone(),
                            index: register.index,
                        });
                    }
                }
                for slot in array.base_index..array.base_index + array.index_span() {
                    claim(&mut claimed_slots, slot, &array.name)?;
                }
            }
        }
    }

    log::debug!("validated {} register objects", register_objects.len());
    Ok(())
}

// Two owners on one slot is an overlap regardless of which kinds of object
// collided.
fn claim<'a>(
    claimed_slots: &mut HashMap<usize, &'a str>,
    slot: usize,
    owner: &'a str,
) -> ModelResult<()> {
    if let Some(first) = claimed_slots.insert(slot, owner) {
        return Err(ModelError::AddressOverlap {
            first: first.to_string(),
            second: owner.to_string(),
            address: 4 * slot,
        });
    }
    Ok(())
}

fn check_register(register: &Register) -> ModelResult<()> {
    mode::describe(&register.mode).map_err(|error| ModelError::UnknownMode {
        register: register.name.clone(),
        key: error.key,
    })?;

    let mut seen_indexes: HashMap<u32, &str> = HashMap::new();
    for bit in &register.bits {
        if let Some(first) = seen_indexes.insert(bit.index, &bit.name) {
            return Err(ModelError::DuplicateBitIndex {
                register: register.name.clone(),
                first: first.to_string(),
                second: bit.name.clone(),
                index: bit.index,
            });
        }
    }
    Ok(())
}
