// Licensed under the Apache-2.0 license

//! HTML documentation back end.
//!
//! Renders one register map into a self-contained HTML page holding a
//! mode-reference table, a register/bit-field table and, when the map has
//! constants, a constant table. The table renderers return document subtrees
//! ([`Element`]) so callers and tests can work with the structure; the page
//! renderer serializes everything into the final artifact string.
//!
//! Rows appear in model order, always. Registers inside an array are not
//! expanded per repetition; instead their address cell carries the symbolic
//! form `<first-instance address> + i × <stride>`.

use crate::doc::{Element, Node};
use crate::translate::{MarkdownToHtml, TextTranslator};
use anyhow::{Context, Result};
use regmap_model::{mode, Bit, Constant, Register, RegisterObject};
use std::fmt::Write;

const DEFAULT_FONT_STYLE: &str = r#"
html * {
  font-family: "Trebuchet MS", Arial, Helvetica, sans-serif;
}"#;

const DEFAULT_TABLE_STYLE: &str = r#"
table {
  border-collapse: collapse;
}
td, th {
  border: 1px solid #ddd;
  padding: 8px;
}
td.array_header {
  background-color: #4cacaf;
  color: white;
}
tr:nth-child(even) {
  background-color: #f2f2f2;
}
tr:hover {
  background-color: #ddd;
}
th {
  padding-top: 12px;
  padding-bottom: 12px;
  text-align: left;
  background-color: #4CAF50;
  color: white;
}"#;

/// Style configuration for the generated page.
///
/// Two style concerns are recognized. Each one either falls back to the
/// built-in style sheet or is replaced wholesale by a caller-supplied one.
#[derive(Clone, Debug, Default)]
pub struct PageStyle {
    /// Replacement for the built-in table style sheet.
    pub table_style: Option<String>,
    /// Replacement for the built-in font style sheet.
    pub font_style: Option<String>,
}

impl PageStyle {
    /// Built-in styles for both concerns.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Replace the table style sheet.
    pub fn table_style(mut self, style: &str) -> Self {
        self.table_style = Some(style.to_string());
        self
    }

    /// Replace the font style sheet.
    pub fn font_style(mut self, style: &str) -> Self {
        self.font_style = Some(style.to_string());
        self
    }
}

/// Format a byte address for display: hexadecimal, uppercase, `0x` prefix,
/// zero-padded to at least four digits. Wider addresses keep all their
/// digits; the padding is a minimum, not a truncation.
fn readable_address(address: usize) -> String {
    format!("0x{address:04X}")
}

/// HTML documentation generator for one module's register map.
pub struct HtmlGenerator {
    module_name: String,
    generated_info: Vec<String>,
    translator: Box<dyn TextTranslator>,
}

impl HtmlGenerator {
    /// `module_name` names the module the map belongs to. `generated_info`
    /// is the provenance header: one line per entry, rendered as a comment
    /// block on top of every artifact and repeated as a page paragraph.
    pub fn new(module_name: &str, generated_info: Vec<String>) -> Self {
        Self::with_translator(module_name, generated_info, Box::new(MarkdownToHtml))
    }

    /// Use a custom description translator.
    pub fn with_translator(
        module_name: &str,
        generated_info: Vec<String>,
        translator: Box<dyn TextTranslator>,
    ) -> Self {
        Self {
            module_name: module_name.to_string(),
            generated_info,
            translator,
        }
    }

    /// The mode-reference table: one row per registry entry, in canonical
    /// registry order. Mode descriptions are plain prose and are not passed
    /// through the translator.
    pub fn render_mode_table(&self) -> Element {
        let mut body = Element::new("tbody");
        for mode in mode::REGISTER_MODES {
            body = body.child(
                Element::new("tr")
                    .child(Element::new("td").text(mode.mode_readable))
                    .child(Element::new("td").text(mode.description)),
            );
        }
        Element::new("table")
            .child(Element::new("thead").child(header_row(&["Mode", "Description"])))
            .child(body)
    }

    /// The register/bit-field table.
    ///
    /// Register objects render in input order: a plain register contributes
    /// its own row plus one subordinate row per bit; an array contributes a
    /// header marker row, the template register rows (with symbolic
    /// addresses) and an end marker row. An empty input yields an empty but
    /// well-formed table.
    ///
    /// Fails without producing anything if a register references a mode key
    /// absent from the registry.
    pub fn render_register_table(&self, register_objects: &[RegisterObject]) -> Result<Element> {
        let mut body = Element::new("tbody");
        for object in register_objects {
            match object {
                RegisterObject::Register(register) => {
                    body = body.child(self.register_row(register, None)?);
                    for bit in &register.bits {
                        body = body.child(self.bit_row(bit));
                    }
                }
                RegisterObject::Array(array) => {
                    body = body.child(array_marker_row(
                        "Register array ",
                        &array.name,
                        &format!(", repeated {} times", array.length),
                    ));
                    for register in &array.registers {
                        let effective_index = array.base_index + register.index;
                        body = body
                            .child(self.register_row(register, Some((effective_index, array.stride())))?);
                        for bit in &register.bits {
                            body = body.child(self.bit_row(bit));
                        }
                    }
                    body = body.child(array_marker_row("End register array ", &array.name, ""));
                }
            }
        }
        Ok(Element::new("table")
            .child(Element::new("thead").child(header_row(&[
                "Name",
                "Address",
                "Mode",
                "Default value",
                "Description",
            ])))
            .child(body))
    }

    /// The constant table, or `None` when there are no constants. Callers
    /// decide whether a constants section exists at all based on this.
    pub fn render_constant_table(&self, constants: &[Constant]) -> Option<Element> {
        if constants.is_empty() {
            return None;
        }
        let mut body = Element::new("tbody");
        for constant in constants {
            body = body.child(
                Element::new("tr")
                    .child(Element::new("td").child(Element::new("strong").text(&constant.name)))
                    .child(Element::new("td").text(constant.value.to_string()))
                    .child(
                        Element::new("td")
                            .child(Node::raw(self.translator.translate(&constant.description))),
                    ),
            );
        }
        Some(
            Element::new("table")
                .child(Element::new("thead").child(header_row(&["Name", "Value", "Description"])))
                .child(body),
        )
    }

    /// The complete documentation page.
    pub fn render_page(
        &self,
        register_objects: &[RegisterObject],
        constants: &[Constant],
        style: &PageStyle,
    ) -> Result<String> {
        log::debug!(
            "rendering register documentation page for module `{}`",
            self.module_name
        );
        let title = format!("Documentation of {} registers", self.module_name);
        let font_style = style.font_style.as_deref().unwrap_or(DEFAULT_FONT_STYLE);
        let table_style = style.table_style.as_deref().unwrap_or(DEFAULT_TABLE_STYLE);

        let head = Element::new("head")
            .child(Element::new("title").text(&title))
            .child(Element::new("style").child(Node::raw(format!("{font_style}\n{table_style}"))));

        let mut body = Element::new("body")
            .child(Element::new("h1").text(&title))
            .child(
                Element::new("p")
                    .text("This document is a specification for the register interface of the FPGA module ")
                    .child(Element::new("b").text(&self.module_name))
                    .text("."),
            )
            .child(Element::new("p").text(self.generated_info.join("")))
            .child(Element::new("h2").text("Register modes"))
            .child(Element::new("p").text("The following register modes are available."))
            .child(self.render_mode_table())
            .child(Element::new("h2").text("Registers"))
            .child(Element::new("p").text("The following registers make up the register map."))
            .child(self.render_register_table(register_objects)?);

        if let Some(constant_table) = self.render_constant_table(constants) {
            body = body
                .child(Element::new("h2").text("Constants"))
                .child(
                    Element::new("p")
                        .text("The following constants are part of the register interface."),
                )
                .child(constant_table);
        }

        let page = Element::new("html").child(head).child(body);

        let mut output = self.file_header();
        output.push_str("<!DOCTYPE html>\n");
        output.push_str(&page.render());
        output.push('\n');
        Ok(output)
    }

    /// Standalone register table artifact: provenance comment block plus the
    /// table markup.
    pub fn register_table_document(&self, register_objects: &[RegisterObject]) -> Result<String> {
        let table = self.render_register_table(register_objects)?;
        Ok(format!("{}{}\n", self.file_header(), table.render()))
    }

    /// Standalone constant table artifact, or the empty string when there
    /// are no constants.
    pub fn constant_table_document(&self, constants: &[Constant]) -> String {
        match self.render_constant_table(constants) {
            Some(table) => format!("{}{}\n", self.file_header(), table.render()),
            None => String::new(),
        }
    }

    fn file_header(&self) -> String {
        let mut header = String::new();
        for line in &self.generated_info {
            writeln!(header, "<!-- {line} -->").unwrap();
        }
        header
    }

    /// One register row. `array_position` is `None` for a top-level register
    /// and `(effective index, byte stride)` for an array template register,
    /// whose address cell then carries the symbolic per-repetition form.
    fn register_row(
        &self,
        register: &Register,
        array_position: Option<(usize, usize)>,
    ) -> Result<Element> {
        let address = match array_position {
            None => readable_address(register.address()),
            Some((effective_index, stride)) => format!(
                "{} + i × {}",
                readable_address(4 * effective_index),
                readable_address(stride)
            ),
        };
        let mode = mode::describe(&register.mode)
            .with_context(|| format!("register `{}`", register.name))?;
        Ok(Element::new("tr")
            .child(Element::new("td").child(Element::new("strong").text(&register.name)))
            .child(Element::new("td").text(address))
            .child(Element::new("td").text(mode.mode_readable))
            .child(Element::new("td").text(register.default_value.to_string()))
            .child(
                Element::new("td")
                    .child(Node::raw(self.translator.translate(&register.description))),
            ))
    }

    /// One subordinate bit row: indented italic name, bit index, empty
    /// address and mode cells.
    fn bit_row(&self, bit: &Bit) -> Element {
        Element::new("tr")
            .child(
                Element::new("td")
                    .child(Node::raw("&nbsp;&nbsp;"))
                    .child(Element::new("em").text(&bit.name)),
            )
            .child(Element::new("td").text(bit.index.to_string()))
            .child(Element::new("td"))
            .child(Element::new("td"))
            .child(Element::new("td").child(Node::raw(self.translator.translate(&bit.description))))
    }
}

fn header_row(titles: &[&str]) -> Element {
    let mut row = Element::new("tr");
    for title in titles {
        row = row.child(Element::new("th").text(*title));
    }
    row
}

/// A full-width marker row delimiting a register array.
fn array_marker_row(prefix: &str, name: &str, suffix: &str) -> Element {
    let mut cell = Element::new("td")
        .attr("colspan", "5")
        .attr("class", "array_header")
        .text(prefix)
        .child(Element::new("strong").text(name));
    if !suffix.is_empty() {
        cell = cell.text(suffix);
    }
    Element::new("tr").child(cell)
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
