// Stencil - structured documents with embedded formulas
//
// Copyright (c) 2025 Stencil contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Generator for Cila markup.
//!
//! Structural inverse of the parser: reparsing generated output yields a
//! structurally equal forest. Output is canonical: 2-space indentation,
//! attributes in insertion order (id and classes first), minimal quoting of
//! attribute values. Byte identity with the original source is not
//! guaranteed.

use crate::tags::is_known_tag;
use stencil_core::{Element, Node};

/// Generate Cila text for a forest of nodes.
pub fn generate(nodes: &[Node]) -> String {
    let mut writer = CilaWriter::new();
    writer.write_nodes(nodes, 0);
    writer.finish()
}

struct CilaWriter {
    out: String,
}

impl CilaWriter {
    fn new() -> Self {
        Self {
            out: String::with_capacity(256),
        }
    }

    fn finish(self) -> String {
        self.out
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push_str("  ");
        }
    }

    fn write_nodes(&mut self, nodes: &[Node], depth: usize) {
        for node in nodes {
            match node {
                Node::Element(el) => self.write_element(el, depth),
                Node::Text(text) => {
                    self.indent(depth);
                    self.out.push_str(&escape_text(text, true));
                    self.out.push('\n');
                }
            }
        }
    }

    fn write_element(&mut self, el: &Element, depth: usize) {
        if let Some(source) = formula_source(el) {
            self.indent(depth);
            self.write_formula(source);
            self.out.push('\n');
            return;
        }

        self.indent(depth);
        self.out.push_str(&el.tag);

        if let Some(id) = el.attr("id") {
            if !id.is_empty() && !id.contains(' ') {
                self.out.push_str(" #");
                self.out.push_str(id);
            } else {
                self.write_bracket_attr("id", id);
            }
        }
        if let Some(class) = el.attr("class") {
            // The `.name` shorthand reparses with single-space joins, so it
            // is only safe for values already in that canonical form.
            if !class.is_empty() && class.split(' ').all(|name| !name.is_empty()) {
                for name in class.split(' ') {
                    self.out.push_str(" .");
                    self.out.push_str(name);
                }
            } else {
                self.write_bracket_attr("class", class);
            }
        }
        for (key, value) in &el.attrs {
            if key == "id" || key == "class" {
                continue;
            }
            self.write_bracket_attr(key, value);
        }

        // Adjacent text children must stay on separate lines: rendered
        // inline they would merge into one run on reparse.
        let adjacent_text = el
            .children
            .windows(2)
            .any(|pair| pair[0].is_text() && pair[1].is_text());
        let inlineable =
            !el.children.is_empty() && !adjacent_text && el.children.iter().all(is_inline);
        if inlineable {
            self.out.push(' ');
            for (idx, child) in el.children.iter().enumerate() {
                match child {
                    Node::Text(text) => self.out.push_str(&escape_text(text, idx == 0)),
                    Node::Element(calc) => {
                        self.write_formula(calc.attr("source").unwrap_or(""));
                    }
                }
            }
            self.out.push('\n');
        } else {
            self.out.push('\n');
            self.write_nodes(&el.children, depth + 1);
        }
    }

    fn write_bracket_attr(&mut self, key: &str, value: &str) {
        self.out.push_str(" [");
        self.out.push_str(key);
        if !value.is_empty() {
            self.out.push('=');
            if needs_quoting(value) {
                self.out.push('"');
                for ch in value.chars() {
                    if ch == '"' || ch == '\\' {
                        self.out.push('\\');
                    }
                    self.out.push(ch);
                }
                self.out.push('"');
            } else {
                self.out.push_str(value);
            }
        }
        self.out.push(']');
    }

    fn write_formula(&mut self, source: &str) {
        self.out.push('`');
        for ch in source.chars() {
            if ch == '`' || ch == '\\' {
                self.out.push('\\');
            }
            self.out.push(ch);
        }
        self.out.push('`');
    }
}

/// The formula source of an inline-renderable `calc` element.
///
/// Only a childless `calc` whose sole attribute is `source` can take the
/// backtick form; any extra attribute forces the element form, which the
/// backtick form has no way to carry.
fn formula_source(el: &Element) -> Option<&str> {
    if el.tag == "calc" && el.children.is_empty() && el.attrs.len() == 1 {
        el.attr("source")
    } else {
        None
    }
}

fn is_inline(node: &Node) -> bool {
    match node {
        Node::Text(_) => true,
        Node::Element(el) => formula_source(el).is_some(),
    }
}

fn needs_quoting(value: &str) -> bool {
    value.contains(' ') || value.contains(']') || value.contains('"') || value.contains('\\')
}

/// Escape text so it reparses as text content.
///
/// Backslash and backtick are always escaped. At content start a leading
/// sigil, space, or known-tag first word additionally gets a `\` prefix so
/// the line (or inline run) is not read as an element or attribute.
fn escape_text(text: &str, at_content_start: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\\' || ch == '`' {
            out.push('\\');
        }
        out.push(ch);
    }
    if at_content_start {
        let needs_prefix = match out.chars().next() {
            Some('#') | Some('.') | Some('[') | Some(' ') => true,
            Some(_) => is_known_tag(out.split(' ').next().unwrap_or("")),
            None => false,
        };
        if needs_prefix {
            out.insert(0, '\\');
        }
    }
    out
}
