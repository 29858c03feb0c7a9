// Licensed under the Apache-2.0 license

//! C header back end.
//!
//! Same traversal as the HTML back end, emitted as a C header: an include
//! guard, one define per constant, a struct overlaying the register map
//! (arrays become nested struct arrays with the template layout), the total
//! register count, and index/mask defines for every register bit.

use anyhow::{Context, Result};
use regmap_model::{mode, Constant, Register, RegisterObject};
use std::fmt::Write;

/// C header generator for one module's register map.
pub struct CHeaderGenerator {
    module_name: String,
    generated_info: Vec<String>,
}

impl CHeaderGenerator {
    pub fn new(module_name: &str, generated_info: Vec<String>) -> Self {
        Self {
            module_name: module_name.to_string(),
            generated_info,
        }
    }

    /// Render the complete header.
    ///
    /// Fails without producing anything if a register references a mode key
    /// absent from the registry.
    pub fn render_header(
        &self,
        register_objects: &[RegisterObject],
        constants: &[Constant],
    ) -> Result<String> {
        log::debug!("rendering C header for module `{}`", self.module_name);
        let mut output = self.file_header();
        let guard = format!("{}_REGS_H", self.module_name.to_uppercase());

        writeln!(output, "#ifndef {guard}").unwrap();
        writeln!(output, "#define {guard}").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "#include <stdint.h>").unwrap();

        if !constants.is_empty() {
            writeln!(output).unwrap();
            for constant in constants {
                writeln!(
                    output,
                    "#define {}_{} ({}L)",
                    self.module_name.to_uppercase(),
                    constant.name.to_uppercase(),
                    constant.value
                )
                .unwrap();
            }
        }

        writeln!(output).unwrap();
        self.render_register_struct(&mut output, register_objects)?;

        writeln!(output).unwrap();
        writeln!(
            output,
            "#define {}_NUM_REGS ({}u)",
            self.module_name.to_uppercase(),
            register_count(register_objects)
        )
        .unwrap();

        self.render_bit_defines(&mut output, register_objects);

        writeln!(output).unwrap();
        writeln!(output, "#endif /* {guard} */").unwrap();
        Ok(output)
    }

    fn render_register_struct(
        &self,
        output: &mut String,
        register_objects: &[RegisterObject],
    ) -> Result<()> {
        writeln!(output, "struct {}_regs_t {{", self.module_name).unwrap();
        for object in register_objects {
            match object {
                RegisterObject::Register(register) => {
                    self.render_register_member(output, register, "  ")?;
                }
                RegisterObject::Array(array) => {
                    writeln!(output, "  struct {{").unwrap();
                    for register in &array.registers {
                        self.render_register_member(output, register, "    ")?;
                    }
                    writeln!(output, "  }} {}[{}u];", array.name, array.length).unwrap();
                }
            }
        }
        writeln!(output, "}};").unwrap();
        Ok(())
    }

    fn render_register_member(
        &self,
        output: &mut String,
        register: &Register,
        indent: &str,
    ) -> Result<()> {
        let mode = mode::describe(&register.mode)
            .with_context(|| format!("register `{}`", register.name))?;
        writeln!(output, "{indent}/* Mode '{}'. */", mode.mode_readable).unwrap();
        writeln!(output, "{indent}volatile uint32_t {};", register.name).unwrap();
        Ok(())
    }

    fn render_bit_defines(&self, output: &mut String, register_objects: &[RegisterObject]) {
        let module = self.module_name.to_uppercase();
        for object in register_objects {
            let registers = match object {
                RegisterObject::Register(register) => std::slice::from_ref(register),
                RegisterObject::Array(array) => array.registers.as_slice(),
            };
            for register in registers {
                if register.bits.is_empty() {
                    continue;
                }
                writeln!(output).unwrap();
                for bit in &register.bits {
                    let prefix =
                        format!("{module}_{}_{}", register.name.to_uppercase(), bit.name.to_uppercase());
                    writeln!(output, "#define {prefix}_BIT ({}u)", bit.index).unwrap();
                    writeln!(output, "#define {prefix}_MASK ({:#x}u)", 1u64 << bit.index).unwrap();
                }
            }
        }
    }

    fn file_header(&self) -> String {
        let mut header = String::new();
        for line in &self.generated_info {
            writeln!(header, "// {line}").unwrap();
        }
        header
    }
}

/// Total number of register slots in the map, i.e. the slot just past the
/// last occupied one.
fn register_count(register_objects: &[RegisterObject]) -> usize {
    register_objects
        .iter()
        .map(|object| object.base_index() + object.index_span())
        .max()
        .unwrap_or(0)
}
