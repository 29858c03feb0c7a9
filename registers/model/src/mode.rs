// Licensed under the Apache-2.0 license

//! The fixed registry of register access modes.
//!
//! The mode set is process-wide constant configuration: it is defined once,
//! never mutated, and safe to read from any number of threads. The order of
//! [`REGISTER_MODES`] is the canonical display order and drives the row order
//! of the mode-reference table in every generated artifact.

use thiserror::Error;

/// One access discipline for a register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterMode {
    /// Stable identifier used as the mapping key (e.g. `"r_w"`).
    pub key: &'static str,
    /// Short display label (e.g. `"Read, Write"`).
    pub mode_readable: &'static str,
    /// Prose description of the bus/fabric semantics of the mode.
    pub description: &'static str,
}

/// All register modes, in canonical display order.
pub const REGISTER_MODES: &[RegisterMode] = &[
    RegisterMode {
        key: "r",
        mode_readable: "Read",
        description: "Bus can read a value that the FPGA provides.",
    },
    RegisterMode {
        key: "w",
        mode_readable: "Write",
        description: "Bus can write a value that the FPGA utilizes.",
    },
    RegisterMode {
        key: "r_w",
        mode_readable: "Read, Write",
        description: "Bus can write a value and read it back. The FPGA can utilize the value.",
    },
    RegisterMode {
        key: "wpulse",
        mode_readable: "Write-pulse",
        description: "Bus can write a value that is asserted for one clock cycle in the FPGA.",
    },
    RegisterMode {
        key: "r_wpulse",
        mode_readable: "Read, Write-pulse",
        description: "Bus can read a value that the FPGA provides. Bus can write a value that is \
                      asserted for one clock cycle in the FPGA.",
    },
];

/// Error returned when a mode key does not resolve in the registry.
///
/// A register map referencing an unresolvable mode is a configuration error;
/// artifact generation must abort rather than produce a document with an
/// unknown access discipline.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown register mode key `{key}`")]
pub struct UnknownMode {
    /// The key that failed to resolve.
    pub key: String,
}

/// Look up a mode by key.
pub fn describe(key: &str) -> Result<&'static RegisterMode, UnknownMode> {
    REGISTER_MODES
        .iter()
        .find(|mode| mode.key == key)
        .ok_or_else(|| UnknownMode {
            key: key.to_string(),
        })
}
