// Licensed under the Apache-2.0 license

//! Register-map artifact generators.
//!
//! This crate turns one register map model into deliverable artifacts. All
//! back ends share the same deterministic traversal of the model; they differ
//! only in the output format they emit. Rendering is a pure computation: the
//! caller owns writing the returned string to disk.
//!
//! ## Generation Flow
//!
//! ```text
//! RegisterObject[] + Constant[] ─┬─> HtmlGenerator    → HTML documentation page
//!                                ├─> CHeaderGenerator → C header
//!                                └─> VhdlGenerator    → VHDL package
//! ```
//!
//! ## Module Organization
//!
//! - [`doc`]: typed HTML node tree, serialized once per render
//! - [`translate`]: rich-text description translation ([`TextTranslator`])
//! - [`html`]: HTML documentation back end
//! - [`cheader`]: C header back end
//! - [`vhdl`]: VHDL package back end

pub mod cheader;
pub mod doc;
pub mod html;
pub mod translate;
pub mod vhdl;

pub use cheader::CHeaderGenerator;
pub use doc::{Element, Node};
pub use html::{HtmlGenerator, PageStyle};
pub use translate::{MarkdownToHtml, TextTranslator};
pub use vhdl::VhdlGenerator;
