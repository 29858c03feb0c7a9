// Licensed under the Apache-2.0 license

//! VHDL package back end.
//!
//! Emits a package with one register-index constant per plain register, one
//! index function per array template register, the total register count, and
//! one constant per model constant. The package body holds the function
//! bodies; it is only emitted when the map contains arrays.

use anyhow::{Context, Result};
use regmap_model::{mode, Constant, Register, RegisterArray, RegisterObject};
use std::fmt::Write;

/// VHDL package generator for one module's register map.
pub struct VhdlGenerator {
    module_name: String,
    generated_info: Vec<String>,
}

impl VhdlGenerator {
    pub fn new(module_name: &str, generated_info: Vec<String>) -> Self {
        Self {
            module_name: module_name.to_string(),
            generated_info,
        }
    }

    /// Render the complete package.
    ///
    /// Fails without producing anything if a register references a mode key
    /// absent from the registry.
    pub fn render_package(
        &self,
        register_objects: &[RegisterObject],
        constants: &[Constant],
    ) -> Result<String> {
        log::debug!("rendering VHDL package for module `{}`", self.module_name);
        let mut output = self.file_header();
        let package = format!("{}_regs_pkg", self.module_name);

        writeln!(output, "package {package} is").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "  -- Register indexes, within the list of registers.").unwrap();
        for object in register_objects {
            match object {
                RegisterObject::Register(register) => {
                    self.render_register_constant(&mut output, register)?;
                }
                RegisterObject::Array(array) => {
                    for register in &array.registers {
                        self.render_array_function_declaration(&mut output, array, register)?;
                    }
                }
            }
        }
        writeln!(output).unwrap();
        writeln!(
            output,
            "  constant {}_num_regs : integer := {};",
            self.module_name,
            register_count(register_objects)
        )
        .unwrap();

        if !constants.is_empty() {
            writeln!(output).unwrap();
            writeln!(output, "  -- Register map constants.").unwrap();
            for constant in constants {
                writeln!(
                    output,
                    "  constant {}_constant_{} : integer := {};",
                    self.module_name, constant.name, constant.value
                )
                .unwrap();
            }
        }

        writeln!(output).unwrap();
        writeln!(output, "end package;").unwrap();

        let arrays: Vec<&RegisterArray> = register_objects
            .iter()
            .filter_map(RegisterObject::as_array)
            .collect();
        if !arrays.is_empty() {
            writeln!(output).unwrap();
            writeln!(output, "package body {package} is").unwrap();
            for array in arrays {
                for register in &array.registers {
                    writeln!(output).unwrap();
                    self.render_array_function_body(&mut output, array, register);
                }
            }
            writeln!(output).unwrap();
            writeln!(output, "end package body;").unwrap();
        }

        Ok(output)
    }

    fn render_register_constant(&self, output: &mut String, register: &Register) -> Result<()> {
        let mode = mode::describe(&register.mode)
            .with_context(|| format!("register `{}`", register.name))?;
        writeln!(
            output,
            "  -- Register '{}', mode '{}'.",
            register.name, mode.mode_readable
        )
        .unwrap();
        writeln!(
            output,
            "  constant {}_{} : integer := {};",
            self.module_name, register.name, register.index
        )
        .unwrap();
        Ok(())
    }

    fn render_array_function_declaration(
        &self,
        output: &mut String,
        array: &RegisterArray,
        register: &Register,
    ) -> Result<()> {
        let mode = mode::describe(&register.mode)
            .with_context(|| format!("register `{}`", register.name))?;
        writeln!(
            output,
            "  -- Register '{}' in array '{}', mode '{}'.",
            register.name, array.name, mode.mode_readable
        )
        .unwrap();
        writeln!(
            output,
            "  function {}(array_index : natural) return integer;",
            self.array_function_name(array, register)
        )
        .unwrap();
        Ok(())
    }

    fn render_array_function_body(
        &self,
        output: &mut String,
        array: &RegisterArray,
        register: &Register,
    ) {
        writeln!(
            output,
            "  function {}(array_index : natural) return integer is",
            self.array_function_name(array, register)
        )
        .unwrap();
        writeln!(output, "  begin").unwrap();
        writeln!(output, "    assert array_index < {}", array.length).unwrap();
        writeln!(
            output,
            "      report \"Array index out of bounds: \" & natural'image(array_index)"
        )
        .unwrap();
        writeln!(output, "      severity failure;").unwrap();
        writeln!(
            output,
            "    return {} + array_index * {} + {};",
            array.base_index,
            array.registers.len(),
            register.index
        )
        .unwrap();
        writeln!(output, "  end function;").unwrap();
    }

    fn array_function_name(&self, array: &RegisterArray, register: &Register) -> String {
        format!("{}_{}_{}", self.module_name, array.name, register.name)
    }

    fn file_header(&self) -> String {
        let mut header = String::new();
        for line in &self.generated_info {
            writeln!(header, "-- {line}").unwrap();
        }
        writeln!(header).unwrap();
        header
    }
}

/// Total number of register slots in the map.
fn register_count(register_objects: &[RegisterObject]) -> usize {
    register_objects
        .iter()
        .map(|object| object.base_index() + object.index_span())
        .max()
        .unwrap_or(0)
}
