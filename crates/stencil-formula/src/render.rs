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

//! Rendering expression trees back to formula source text.
//!
//! The two targets differ only in surface conventions: R gets a space
//! after each comma, ` = ` around named arguments and backslash string
//! escapes; Excel gets tight commas, `=` and doubled-quote escapes.

use crate::expr::{Call, Expr, Literal};
use stencil_core::{StencilError, StencilResult, Syntax};

/// Render an expression as source text in the given syntax.
pub fn render(expr: &Expr, syntax: Syntax) -> StencilResult<String> {
    let style = match syntax {
        Syntax::R => Style::R,
        Syntax::Excel => Style::Excel,
        Syntax::Cila => {
            return Err(StencilError::unknown_syntax(
                "cila is a document syntax, not a formula syntax",
            ));
        }
    };
    let mut out = String::with_capacity(32);
    render_expr(expr, style, &mut out);
    Ok(out)
}

#[derive(Clone, Copy, PartialEq)]
enum Style {
    Excel,
    R,
}

fn render_expr(expr: &Expr, style: Style, out: &mut String) {
    match expr {
        Expr::Literal(lit) => render_literal(lit, style, out),
        Expr::Ident(name) => out.push_str(name),
        Expr::Call(call) => render_call(call, style, out),
    }
}

fn render_call(call: &Call, style: Style, out: &mut String) {
    out.push_str(&call.name);
    out.push('(');
    let mut first = true;
    for arg in &call.args {
        push_separator(&mut first, style, out);
        render_expr(arg, style, out);
    }
    for (key, value) in &call.named {
        push_separator(&mut first, style, out);
        out.push_str(key);
        out.push_str(match style {
            Style::R => " = ",
            Style::Excel => "=",
        });
        render_expr(value, style, out);
    }
    out.push(')');
}

fn push_separator(first: &mut bool, style: Style, out: &mut String) {
    if *first {
        *first = false;
    } else {
        out.push_str(match style {
            Style::R => ", ",
            Style::Excel => ",",
        });
    }
}

fn render_literal(lit: &Literal, style: Style, out: &mut String) {
    match lit {
        Literal::Int(value) => out.push_str(&value.to_string()),
        Literal::Float(value) => out.push_str(&value.to_string()),
        Literal::Str(value) => render_string(value, style, out),
        Literal::Bool(value) => out.push_str(if *value { "TRUE" } else { "FALSE" }),
    }
}

fn render_string(value: &str, style: Style, out: &mut String) {
    out.push('"');
    for ch in value.chars() {
        match (style, ch) {
            (Style::R, '"') | (Style::R, '\\') => {
                out.push('\\');
                out.push(ch);
            }
            (Style::Excel, '"') => out.push_str("\"\""),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use stencil_core::StencilErrorKind;

    fn rendered(input: &str, syntax: Syntax) -> String {
        render(&parse(input).unwrap(), syntax).unwrap()
    }

    #[test]
    fn test_r_call_style() {
        assert_eq!(rendered("sum(1,2,3)", Syntax::R), "sum(1, 2, 3)");
    }

    #[test]
    fn test_excel_call_style() {
        assert_eq!(rendered("SUM(1, 2, 3)", Syntax::Excel), "SUM(1,2,3)");
    }

    #[test]
    fn test_named_arguments() {
        assert_eq!(
            rendered("round(x, digits=2)", Syntax::R),
            "round(x, digits = 2)"
        );
        assert_eq!(
            rendered("ROUND(x, digits=2)", Syntax::Excel),
            "ROUND(x,digits=2)"
        );
    }

    #[test]
    fn test_nested_calls() {
        assert_eq!(
            rendered("round(mean(A1:A9), 2)", Syntax::R),
            "round(mean(A1:A9), 2)"
        );
    }

    #[test]
    fn test_r_string_escapes() {
        let expr = Expr::str("say \"hi\"");
        assert_eq!(render(&expr, Syntax::R).unwrap(), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_excel_string_escapes() {
        let expr = Expr::str("say \"hi\"");
        assert_eq!(render(&expr, Syntax::Excel).unwrap(), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_booleans() {
        assert_eq!(render(&parse("TRUE").unwrap(), Syntax::R).unwrap(), "TRUE");
        assert_eq!(
            render(&parse("FALSE").unwrap(), Syntax::Excel).unwrap(),
            "FALSE"
        );
    }

    #[test]
    fn test_cila_is_not_a_formula_target() {
        let err = render(&Expr::int(1), Syntax::Cila).unwrap_err();
        assert_eq!(err.kind, StencilErrorKind::UnknownSyntax);
    }
}
