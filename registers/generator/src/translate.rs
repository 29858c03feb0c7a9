// Licensed under the Apache-2.0 license

//! Rich-text description translation.
//!
//! Register, bit and constant descriptions are written in a constrained
//! markdown dialect. The back ends treat translation as a black box behind
//! the [`TextTranslator`] trait; [`MarkdownToHtml`] is the implementation
//! used by default.

use crate::doc::escape;

/// Translates a rich-text description into an inline-safe markup fragment.
///
/// Implementations must be total and deterministic: defined for every input
/// string (including empty), never failing, identical input producing
/// identical output. The returned fragment must be safe to embed in a table
/// cell, meaning any structural markup characters coming from plain prose
/// are escaped and markup only results from intentional rich-text
/// constructs.
pub trait TextTranslator {
    fn translate(&self, text: &str) -> String;
}

/// The constrained markdown dialect understood by the default translator:
///
/// - `**text**` renders strong
/// - `*text*` renders emphasized
/// - a blank line is an explicit line break, a lone newline is an editorial
///   wrap and renders as a space
/// - everything else is plain prose; `&`, `<`, `>` and `"` are escaped
///
/// Unpaired `*` markers are kept as literal text.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkdownToHtml;

impl TextTranslator for MarkdownToHtml {
    fn translate(&self, text: &str) -> String {
        // Escape first so markup can only originate from the constructs
        // handled below.
        let text = escape(text);
        let text = text.replace("\n\n", "<br /><br />");
        let text = text.replace('\n', " ");
        let text = replace_pairs(&text, "**", "<b>", "</b>");
        replace_pairs(&text, "*", "<em>", "</em>")
    }
}

/// Replace paired occurrences of `delimiter` with `open`/`close` markup.
/// A trailing unpaired delimiter stays in the text untouched.
fn replace_pairs(text: &str, delimiter: &str, open: &str, close: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    loop {
        let Some(start) = rest.find(delimiter) else {
            break;
        };
        let after_start = &rest[start + delimiter.len()..];
        let Some(end) = after_start.find(delimiter) else {
            break;
        };
        output.push_str(&rest[..start]);
        output.push_str(open);
        output.push_str(&after_start[..end]);
        output.push_str(close);
        rest = &after_start[end + delimiter.len()..];
    }
    output.push_str(rest);
    output
}
