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

//! Parser for spreadsheet-style formula source.
//!
//! # Grammar (informal)
//!
//! ```text
//! expr     = call | literal | reference | "(" expr ")"
//! call     = name "(" args ")"
//! args     = (arg ("," arg)*)?
//! arg      = name "=" expr | expr
//! literal  = number | string | TRUE | FALSE
//! ```
//!
//! Cell and range references (`A1`, `$B$2`, `A1:C4`) are opaque tokens.
//! Function names are not validated here; unknown functions parse
//! successfully and are resolved later by the translator. Errors carry a
//! 1-based column.

use crate::expr::{Call, Expr, Literal};
use stencil_core::{StencilError, StencilResult};

/// Parse a formula into an expression tree.
pub fn parse(input: &str) -> StencilResult<Expr> {
    let mut parser = FormulaParser::new(input);
    parser.skip_whitespace();
    let expr = parser.parse_expr()?;
    parser.skip_whitespace();
    if parser.pos < parser.chars.len() {
        return Err(parser.error(format!(
            "trailing characters after expression: '{}'",
            parser.chars[parser.pos]
        )));
    }
    Ok(expr)
}

struct FormulaParser {
    chars: Vec<char>,
    pos: usize,
}

impl FormulaParser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn error(&self, message: impl Into<String>) -> StencilError {
        StencilError::syntax(message, 1).with_column(self.pos + 1)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn parse_expr(&mut self) -> StencilResult<Expr> {
        self.skip_whitespace();
        match self.peek() {
            Some('"') => {
                let value = self.parse_string()?;
                Ok(Expr::Literal(Literal::Str(value)))
            }
            Some(ch) if ch.is_ascii_digit() || ch == '-' => self.parse_number(),
            Some(ch) if is_token_start(ch) => self.parse_token_expr(),
            Some('(') => {
                self.advance();
                let expr = self.parse_expr()?;
                self.skip_whitespace();
                if self.peek() != Some(')') {
                    return Err(self.error("expected ')' after parenthesized expression"));
                }
                self.advance();
                Ok(expr)
            }
            Some(ch) => Err(self.error(format!("unexpected character '{}' in formula", ch))),
            None => Err(self.error("unexpected end of formula")),
        }
    }

    /// Parse a string literal; doubled quotes escape a quote (`""` -> `"`).
    fn parse_string(&mut self) -> StencilResult<String> {
        self.advance(); // opening quote
        let mut value = String::new();
        loop {
            match self.advance() {
                Some('"') => {
                    if self.peek() == Some('"') {
                        self.advance();
                        value.push('"');
                    } else {
                        return Ok(value);
                    }
                }
                Some(ch) => value.push(ch),
                None => return Err(self.error("unterminated string literal")),
            }
        }
    }

    fn parse_number(&mut self) -> StencilResult<Expr> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.advance();
        }
        if !matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
            return Err(self.error("expected digit in number"));
        }
        while matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
            self.advance();
        }
        let mut is_float = false;
        if self.peek() == Some('.') {
            is_float = true;
            self.advance();
            while matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
                self.advance();
            }
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        if is_float {
            let value = text
                .parse::<f64>()
                .map_err(|_| self.error(format!("invalid number '{}'", text)))?;
            Ok(Expr::Literal(Literal::Float(value)))
        } else {
            match text.parse::<i64>() {
                Ok(value) => Ok(Expr::Literal(Literal::Int(value))),
                // Fall back to float for integers beyond i64 range.
                Err(_) => {
                    let value = text
                        .parse::<f64>()
                        .map_err(|_| self.error(format!("invalid number '{}'", text)))?;
                    Ok(Expr::Literal(Literal::Float(value)))
                }
            }
        }
    }

    /// Parse an identifier/reference token, possibly a function call.
    fn parse_token_expr(&mut self) -> StencilResult<Expr> {
        let token = self.read_token();
        self.skip_whitespace();
        if self.peek() == Some('(') {
            if !is_function_name(&token) {
                return Err(self.error(format!("'{}' cannot be called as a function", token)));
            }
            self.advance(); // consume '('
            let (args, named) = self.parse_args()?;
            return Ok(Expr::Call(Call {
                name: token,
                args,
                named,
            }));
        }
        match token.as_str() {
            "TRUE" | "true" => Ok(Expr::Literal(Literal::Bool(true))),
            "FALSE" | "false" => Ok(Expr::Literal(Literal::Bool(false))),
            _ => Ok(Expr::Ident(token)),
        }
    }

    fn read_token(&mut self) -> String {
        let mut token = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '$' | ':') {
                token.push(ch);
                self.pos += 1;
            } else {
                break;
            }
        }
        token
    }

    /// Parse a comma-separated argument list; the `(` is already consumed.
    fn parse_args(&mut self) -> StencilResult<(Vec<Expr>, indexmap::IndexMap<String, Expr>)> {
        let mut args = Vec::new();
        let mut named = indexmap::IndexMap::new();
        self.skip_whitespace();
        if self.peek() == Some(')') {
            self.advance();
            return Ok((args, named));
        }
        loop {
            self.skip_whitespace();
            if !self.parse_arg(&mut args, &mut named)? {
                return Err(self.error("positional argument after named argument"));
            }
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.advance();
                }
                Some(')') => {
                    self.advance();
                    return Ok((args, named));
                }
                Some(ch) => {
                    return Err(self.error(format!("expected ',' or ')', found '{}'", ch)));
                }
                None => return Err(self.error("unterminated argument list")),
            }
        }
    }

    /// Parse one argument. Returns `false` when a positional argument
    /// follows a named one.
    fn parse_arg(
        &mut self,
        args: &mut Vec<Expr>,
        named: &mut indexmap::IndexMap<String, Expr>,
    ) -> StencilResult<bool> {
        // A simple identifier followed by `=` is a named argument; anything
        // else rolls back to a positional expression.
        if matches!(self.peek(), Some(ch) if is_token_start(ch)) {
            let saved = self.pos;
            let token = self.read_token();
            self.skip_whitespace();
            if self.peek() == Some('=') && is_argument_name(&token) {
                self.advance(); // consume '='
                let value = self.parse_expr()?;
                named.insert(token, value);
                return Ok(true);
            }
            self.pos = saved;
        }
        let expr = self.parse_expr()?;
        if !named.is_empty() {
            return Ok(false);
        }
        args.push(expr);
        Ok(true)
    }
}

fn is_token_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
}

/// A token usable as a function name: no reference punctuation.
fn is_function_name(token: &str) -> bool {
    !token.is_empty()
        && !token.contains(':')
        && !token.contains('$')
        && token
            .chars()
            .next()
            .is_some_and(|ch| ch.is_ascii_alphabetic() || ch == '_')
}

/// A token usable as a named-argument name.
fn is_argument_name(token: &str) -> bool {
    is_function_name(token)
}
