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

//! Parser for Cila markup.
//!
//! Cila is parsed line by line. Indentation (2 spaces per level) maps
//! directly to tree depth: a line at depth *d* becomes a child of the most
//! recent node at depth *d - 1*, and a dedent closes all intervening open
//! nodes at once. A line whose first word is a known tag is an element line;
//! any other line is text content. Inline formulas are delimited by
//! backticks and become `calc` elements with the raw expression in their
//! `source` attribute.
//!
//! The parser is pure: it reads the input string and either returns a
//! complete forest or a [`StencilError`] with a line number. It never
//! recovers silently and never returns a partial tree.

use crate::tags::is_known_tag;
use stencil_core::{Element, Node, StencilError, StencilResult};

/// Parse Cila text into a forest of top-level nodes.
///
/// # Errors
///
/// Returns a `Syntax` error when the input cannot be tokenized or
/// structurally closed: tabs or odd space counts in indentation,
/// over-indented lines, unterminated formula markers, unterminated
/// attribute brackets or quotes, or content nested under a text line.
pub fn parse(input: &str) -> StencilResult<Vec<Node>> {
    let lines = scan_lines(input)?;
    let mut pos = 0;
    parse_block(&lines, &mut pos, 0)
}

/// One significant input line: 1-based number, indent depth, content.
struct Line<'a> {
    number: usize,
    depth: usize,
    content: &'a str,
}

fn scan_lines(input: &str) -> StencilResult<Vec<Line<'_>>> {
    let mut out = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let number = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let spaces = line.len() - line.trim_start_matches(' ').len();
        let content = &line[spaces..];
        if content.starts_with('\t') {
            return Err(StencilError::syntax(
                "tab character not allowed in indentation",
                number,
            ));
        }
        if spaces % 2 != 0 {
            return Err(StencilError::syntax(
                format!(
                    "invalid indentation: {} spaces (must be a multiple of 2)",
                    spaces
                ),
                number,
            ));
        }
        out.push(Line {
            number,
            depth: spaces / 2,
            content,
        });
    }
    Ok(out)
}

enum ParsedLine {
    Element(Element),
    Inline(Vec<Node>),
}

fn parse_block(lines: &[Line<'_>], pos: &mut usize, depth: usize) -> StencilResult<Vec<Node>> {
    let mut nodes = Vec::new();
    while *pos < lines.len() {
        let line = &lines[*pos];
        if line.depth < depth {
            break;
        }
        if line.depth > depth {
            return Err(StencilError::syntax(
                format!("line indented {} levels past its parent", line.depth - depth),
                line.number,
            ));
        }
        *pos += 1;
        match parse_line(line)? {
            ParsedLine::Element(mut el) => {
                let children = parse_block(lines, pos, depth + 1)?;
                el.children.extend(children);
                nodes.push(Node::Element(el));
            }
            ParsedLine::Inline(mut inline) => {
                if *pos < lines.len() && lines[*pos].depth > depth {
                    return Err(StencilError::syntax(
                        "content indented under a text line",
                        lines[*pos].number,
                    ));
                }
                nodes.append(&mut inline);
            }
        }
    }
    Ok(nodes)
}

fn parse_line(line: &Line<'_>) -> StencilResult<ParsedLine> {
    let first_word = line.content.split(' ').next().unwrap_or("");
    if is_known_tag(first_word) {
        let el = parse_element_line(line.content, first_word, line.number)?;
        Ok(ParsedLine::Element(el))
    } else {
        Ok(ParsedLine::Inline(parse_inline(line.content, line.number)?))
    }
}

/// Parse an element line: tag, attribute shorthands, then inline content.
///
/// Attribute shorthands follow the tag while the next token starts with
/// `#` (id), `.` (class) or `[` (generic attribute). One space separates
/// the last token from the content; any further spaces belong to the
/// content.
fn parse_element_line(content: &str, tag: &str, number: usize) -> StencilResult<Element> {
    let mut el = Element::new(tag);
    let chars: Vec<char> = content.chars().collect();
    // Tags are ASCII, so the char index of the tag end equals its byte length.
    let mut i = tag.len();

    while i < chars.len() {
        // Single separator space before each token or before the content.
        if chars[i] != ' ' {
            return Err(StencilError::syntax(
                "expected space after attribute",
                number,
            ));
        }
        i += 1;
        if i >= chars.len() {
            break;
        }
        match chars[i] {
            '#' => {
                i += 1;
                let name = read_word(&chars, &mut i);
                if name.is_empty() {
                    return Err(StencilError::syntax("empty id attribute", number));
                }
                el.set_attr("id", name);
            }
            '.' => {
                i += 1;
                let name = read_word(&chars, &mut i);
                if name.is_empty() {
                    return Err(StencilError::syntax("empty class attribute", number));
                }
                match el.attrs.get_mut("class") {
                    Some(classes) => {
                        classes.push(' ');
                        classes.push_str(&name);
                    }
                    None => el.set_attr("class", name),
                }
            }
            '[' => {
                i += 1;
                let (key, value) = read_bracket_attr(&chars, &mut i, number)?;
                el.set_attr(key, value);
            }
            _ => {
                let rest: String = chars[i..].iter().collect();
                let children = parse_inline(&rest, number)?;
                el.children.extend(children);
                break;
            }
        }
    }
    Ok(el)
}

/// Read characters up to the next space.
fn read_word(chars: &[char], i: &mut usize) -> String {
    let mut word = String::new();
    while *i < chars.len() && chars[*i] != ' ' {
        word.push(chars[*i]);
        *i += 1;
    }
    word
}

/// Read a `[key=value]` attribute; `i` points just past the `[`.
///
/// Values may be bare (ending at `]`) or double-quoted with `\"` and `\\`
/// escapes; quoted values may contain spaces and `]`. A bare `[key]` is a
/// flag attribute with an empty value.
fn read_bracket_attr(
    chars: &[char],
    i: &mut usize,
    number: usize,
) -> StencilResult<(String, String)> {
    let mut key = String::new();
    while *i < chars.len() && chars[*i] != '=' && chars[*i] != ']' {
        key.push(chars[*i]);
        *i += 1;
    }
    if *i >= chars.len() {
        return Err(StencilError::syntax("unterminated `[` attribute", number));
    }
    let key = key.trim().to_string();
    if key.is_empty() {
        return Err(StencilError::syntax("empty attribute name", number));
    }

    if chars[*i] == ']' {
        *i += 1;
        return Ok((key, String::new()));
    }

    // chars[*i] == '='
    *i += 1;
    let mut value = String::new();
    if *i < chars.len() && chars[*i] == '"' {
        *i += 1;
        let mut closed = false;
        while *i < chars.len() {
            let ch = chars[*i];
            if ch == '\\' && *i + 1 < chars.len() {
                value.push(chars[*i + 1]);
                *i += 2;
                continue;
            }
            if ch == '"' {
                closed = true;
                *i += 1;
                break;
            }
            value.push(ch);
            *i += 1;
        }
        if !closed {
            return Err(StencilError::syntax(
                "unterminated quoted attribute value",
                number,
            ));
        }
        if *i >= chars.len() || chars[*i] != ']' {
            return Err(StencilError::syntax(
                "expected `]` after attribute value",
                number,
            ));
        }
        *i += 1;
    } else {
        while *i < chars.len() && chars[*i] != ']' {
            value.push(chars[*i]);
            *i += 1;
        }
        if *i >= chars.len() {
            return Err(StencilError::syntax("unterminated `[` attribute", number));
        }
        *i += 1;
    }
    Ok((key, value))
}

/// Parse inline content: text runs interleaved with backtick formula spans.
///
/// `\` escapes the next character (a literal backtick, backslash, or a
/// leading sigil). A formula span becomes a `calc` element whose `source`
/// attribute holds the raw expression text.
pub(crate) fn parse_inline(s: &str, number: usize) -> StencilResult<Vec<Node>> {
    let mut nodes = Vec::new();
    let mut buf = String::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => {
                if i + 1 < chars.len() {
                    buf.push(chars[i + 1]);
                    i += 2;
                } else {
                    buf.push('\\');
                    i += 1;
                }
            }
            '`' => {
                i += 1;
                let mut source = String::new();
                let mut closed = false;
                while i < chars.len() {
                    if chars[i] == '\\' && i + 1 < chars.len() {
                        source.push(chars[i + 1]);
                        i += 2;
                        continue;
                    }
                    if chars[i] == '`' {
                        closed = true;
                        i += 1;
                        break;
                    }
                    source.push(chars[i]);
                    i += 1;
                }
                if !closed {
                    return Err(StencilError::syntax("unterminated formula marker", number));
                }
                if !buf.is_empty() {
                    nodes.push(Node::Text(std::mem::take(&mut buf)));
                }
                nodes.push(Node::Element(
                    Element::new("calc").with_attr("source", source),
                ));
            }
            ch => {
                buf.push(ch);
                i += 1;
            }
        }
    }
    if !buf.is_empty() {
        nodes.push(Node::Text(buf));
    }
    Ok(nodes)
}
