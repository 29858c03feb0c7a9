// Licensed under the Apache-2.0 license

//! Tests for the HTML documentation back end.

use super::*;
use regmap_model::{RegisterArray, RegisterMap};

fn generator() -> HtmlGenerator {
    HtmlGenerator::new(
        "dma",
        vec!["Generated by regmap.".to_string(), "Do not edit.".to_string()],
    )
}

/// All `<tr>` rows of the table's `<tbody>`.
fn body_rows(table: &Element) -> Vec<&Element> {
    let tbody = table
        .children
        .iter()
        .find_map(|node| match node {
            Node::Element(element) if element.tag == "tbody" => Some(element),
            _ => None,
        })
        .expect("table has a tbody");
    tbody
        .children
        .iter()
        .filter_map(|node| match node {
            Node::Element(element) if element.tag == "tr" => Some(element),
            _ => None,
        })
        .collect()
}

fn cells(row: &Element) -> Vec<&Element> {
    row.children
        .iter()
        .filter_map(|node| match node {
            Node::Element(element) if element.tag == "td" => Some(element),
            _ => None,
        })
        .collect()
}

/// Concatenated content of all `Text` nodes in a subtree.
fn text_content(element: &Element) -> String {
    fn walk(node: &Node, output: &mut String) {
        match node {
            Node::Element(element) => {
                for child in &element.children {
                    walk(child, output);
                }
            }
            Node::Text(text) => output.push_str(text),
            Node::Raw(_) | Node::Comment(_) => {}
        }
    }
    let mut output = String::new();
    for child in &element.children {
        walk(child, &mut output);
    }
    output
}

#[test]
fn test_readable_address_pads_to_four_digits() {
    assert_eq!(readable_address(0), "0x0000");
    assert_eq!(readable_address(255), "0x00FF");
    assert_eq!(readable_address(0x43C), "0x043C");
}

#[test]
fn test_readable_address_grows_without_truncation() {
    assert_eq!(readable_address(65536), "0x10000");
    assert_eq!(readable_address(0xDEAD_BEEF), "0xDEADBEEF");
}

#[test]
fn test_mode_table_rows_follow_registry_order() {
    let table = generator().render_mode_table();
    let labels: Vec<String> = body_rows(&table)
        .iter()
        .map(|row| text_content(cells(row)[0]))
        .collect();
    assert_eq!(
        labels,
        ["Read", "Write", "Read, Write", "Write-pulse", "Read, Write-pulse"]
    );
}

#[test]
fn test_register_row_contents() {
    let mut map = RegisterMap::new("dma");
    {
        let register = map.append_register("control", "r_w");
        register.default_value = 7;
        register.description = "The **main** control register.".to_string();
    }
    let table = generator().render_register_table(map.register_objects()).unwrap();
    let rows = body_rows(&table);
    assert_eq!(rows.len(), 1);
    let row = rows[0];
    assert_eq!(text_content(cells(row)[0]), "control");
    assert_eq!(text_content(cells(row)[1]), "0x0000");
    assert_eq!(text_content(cells(row)[2]), "Read, Write");
    assert_eq!(text_content(cells(row)[3]), "7");
    assert_eq!(
        cells(row)[4].render(),
        "<td>The <b>main</b> control register.</td>"
    );
}

#[test]
fn test_bit_rows_follow_their_register() {
    let mut map = RegisterMap::new("dma");
    {
        let register = map.append_register("irq", "r_w");
        register.bits.push(Bit::new("en", 0, "Enable."));
        register.bits.push(Bit::new("err", 7, "Error."));
    }
    let table = generator().render_register_table(map.register_objects()).unwrap();
    let rows = body_rows(&table);
    assert_eq!(rows.len(), 3, "one register row plus two bit rows");

    for (row, name, index) in [(rows[1], "en", "0"), (rows[2], "err", "7")] {
        let row_cells = cells(row);
        assert_eq!(text_content(row_cells[0]), name);
        assert_eq!(text_content(row_cells[1]), index);
        assert!(row_cells[2].children.is_empty(), "bit rows have no address");
        assert!(row_cells[3].children.is_empty(), "bit rows have no mode");
    }
}

#[test]
fn test_array_symbolic_addresses() {
    let mut array = RegisterArray::new("cfg", 4, 0);
    array.append_register("ctrl", "r_w");
    array.append_register("stat", "r");
    let objects = vec![RegisterObject::Array(array)];

    let table = generator().render_register_table(&objects).unwrap();
    let rows = body_rows(&table);
    assert_eq!(rows.len(), 4, "header marker, two registers, end marker");

    assert_eq!(text_content(rows[0]), "Register array cfg, repeated 4 times");
    assert_eq!(text_content(cells(rows[1])[1]), "0x0000 + i × 0x0008");
    assert_eq!(text_content(cells(rows[2])[1]), "0x0004 + i × 0x0008");
    assert_eq!(text_content(rows[3]), "End register array cfg");

    let marker_cells = cells(rows[0]);
    assert_eq!(marker_cells.len(), 1);
    assert_eq!(
        marker_cells[0].attrs,
        [("colspan", "5".to_string()), ("class", "array_header".to_string())]
    );
}

#[test]
fn test_array_with_nonzero_base_index() {
    // The array starts at register slot 2, after two plain registers.
    let mut map = RegisterMap::new("dma");
    map.append_register("config", "r_w");
    map.append_register("version", "r");
    {
        let array = map.append_register_array("channels", 3);
        array.append_register("source", "r_w");
    }
    let table = generator().render_register_table(map.register_objects()).unwrap();
    let rows = body_rows(&table);
    assert_eq!(text_content(cells(rows[3])[1]), "0x0008 + i × 0x0004");
}

#[test]
fn test_rows_preserve_input_order() {
    let mut map = RegisterMap::new("dma");
    map.append_register("alpha", "r");
    {
        let array = map.append_register_array("bravo", 2);
        array.append_register("inner", "r_w");
    }
    map.append_register("charlie", "w");

    let table = generator().render_register_table(map.register_objects()).unwrap();
    let names: Vec<String> = body_rows(&table)
        .iter()
        .map(|row| text_content(cells(row)[0]))
        .collect();
    assert_eq!(
        names,
        [
            "alpha",
            "Register array bravo, repeated 2 times",
            "inner",
            "End register array bravo",
            "charlie",
        ]
    );
}

#[test]
fn test_empty_register_list_renders_empty_shell() {
    let table = generator().render_register_table(&[]).unwrap();
    assert!(body_rows(&table).is_empty());
    // Still a complete table with its header row.
    assert!(table.render().starts_with("<table>"));
    assert!(table.render().contains("<th>Address</th>"));
}

#[test]
fn test_unknown_mode_key_fails_the_render() {
    let objects = vec![RegisterObject::Register(Register::new("bad", 0, "banana"))];
    let error = generator().render_register_table(&objects).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("register `bad`"), "got: {message}");
    assert!(
        message.contains("unknown register mode key `banana`"),
        "got: {message}"
    );

    let page = generator().render_page(&objects, &[], &PageStyle::with_defaults());
    assert!(page.is_err(), "a page with an unresolvable mode must not render");
}

#[test]
fn test_constant_table_is_none_when_empty() {
    assert!(generator().render_constant_table(&[]).is_none());
    assert_eq!(generator().constant_table_document(&[]), "");
}

#[test]
fn test_constant_table_rows() {
    let mut map = RegisterMap::new("dma");
    map.append_constant("depth", 512).description = "Fifo *depth*.".to_string();
    map.append_constant("width", 64);

    let table = generator().render_constant_table(map.constants()).unwrap();
    let rows = body_rows(&table);
    assert_eq!(rows.len(), 2);
    assert_eq!(text_content(cells(rows[0])[0]), "depth");
    assert_eq!(text_content(cells(rows[0])[1]), "512");
    assert_eq!(cells(rows[0])[2].render(), "<td>Fifo <em>depth</em>.</td>");
    assert_eq!(text_content(cells(rows[1])[0]), "width");
}

#[test]
fn test_page_omits_constants_section_when_empty() {
    let page = generator().render_page(&[], &[], &PageStyle::with_defaults()).unwrap();
    assert!(!page.contains("Constants"));

    let mut map = RegisterMap::new("dma");
    map.append_constant("depth", 512);
    let page = generator()
        .render_page(&[], map.constants(), &PageStyle::with_defaults())
        .unwrap();
    assert!(page.contains("<h2>Constants</h2>"));
    assert!(page.contains("The following constants are part of the register interface."));
}

#[test]
fn test_page_scaffolding() {
    let page = generator().render_page(&[], &[], &PageStyle::with_defaults()).unwrap();
    assert!(page.starts_with("<!-- Generated by regmap. -->\n<!-- Do not edit. -->\n<!DOCTYPE html>\n"));
    assert!(page.contains("<title>Documentation of dma registers</title>"));
    assert!(page.contains("<h1>Documentation of dma registers</h1>"));
    // Provenance lines are repeated as a body paragraph.
    assert!(page.contains("<p>Generated by regmap.Do not edit.</p>"));
    assert!(page.contains("<h2>Register modes</h2>"));
    assert!(page.contains("<h2>Registers</h2>"));
    assert!(page.ends_with("</html>\n"));
}

#[test]
fn test_page_style_overrides() {
    let default_page = generator().render_page(&[], &[], &PageStyle::with_defaults()).unwrap();
    assert!(default_page.contains("border-collapse: collapse;"));
    assert!(default_page.contains("font-family: \"Trebuchet MS\""));

    let style = PageStyle::with_defaults().table_style("table { border: none; }");
    let page = generator().render_page(&[], &[], &style).unwrap();
    assert!(page.contains("table { border: none; }"));
    assert!(!page.contains("border-collapse: collapse;"));
    // The font concern keeps its built-in sheet.
    assert!(page.contains("font-family: \"Trebuchet MS\""));
}

#[test]
fn test_page_is_deterministic() {
    let mut map = RegisterMap::new("dma");
    {
        let register = map.append_register("control", "r_w");
        register.append_bit("start", "Start the engine.");
    }
    {
        let array = map.append_register_array("channels", 4);
        array.append_register("source", "r_w");
        array.append_register("destination", "r_w");
    }
    map.append_constant("channel_count", 4);

    let first = generator()
        .render_page(map.register_objects(), map.constants(), &PageStyle::with_defaults())
        .unwrap();
    let second = generator()
        .render_page(map.register_objects(), map.constants(), &PageStyle::with_defaults())
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_register_table_document_has_provenance_header() {
    let document = generator().register_table_document(&[]).unwrap();
    assert!(document.starts_with("<!-- Generated by regmap. -->\n<!-- Do not edit. -->\n<table>"));
    assert!(document.ends_with("</table>\n"));
}

#[test]
fn test_end_to_end_minimal_map() {
    let mut map = RegisterMap::new("minimal");
    map.append_register("id", "r");
    map.append_constant("VERSION", 3);

    let generator = HtmlGenerator::new("minimal", vec!["Generated.".to_string()]);
    let page = generator
        .render_page(map.register_objects(), map.constants(), &PageStyle::with_defaults())
        .unwrap();

    let register_table = generator.render_register_table(map.register_objects()).unwrap();
    let rows = body_rows(&register_table);
    assert_eq!(rows.len(), 1);
    assert_eq!(text_content(cells(rows[0])[0]), "id");
    assert_eq!(text_content(cells(rows[0])[1]), "0x0000");

    let constant_table = generator.render_constant_table(map.constants()).unwrap();
    let rows = body_rows(&constant_table);
    assert_eq!(rows.len(), 1);
    assert_eq!(text_content(cells(rows[0])[0]), "VERSION");
    assert_eq!(text_content(cells(rows[0])[1]), "3");

    assert!(page.contains("0x0000"));
    assert!(page.contains("VERSION"));
}
