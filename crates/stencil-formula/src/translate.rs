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

//! Expression translation between formula syntaxes.
//!
//! Translation rewrites an expression tree bottom-up: arguments first,
//! then the call name through the [`FunctionMap`]. Literals, references
//! and named-argument names pass through unchanged.

use crate::expr::{Call, Expr};
use crate::map::FunctionMap;
use indexmap::IndexMap;
use stencil_core::{StencilError, StencilResult, Syntax};

/// What to do with a call whose name has no mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fallback {
    /// Keep the source name, still translating the arguments, and record
    /// the name in the report.
    #[default]
    PassThrough,
    /// Fail the whole translation with a `Translation` error.
    Strict,
}

/// A translated call along with whether its name was mapped.
#[derive(Debug, Clone, PartialEq)]
pub struct Translated {
    pub expr: Expr,
    pub mapped: bool,
}

/// Names that fell back to pass-through, in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationReport {
    pub unmapped: Vec<String>,
}

impl TranslationReport {
    /// True when every call name was mapped.
    pub fn is_complete(&self) -> bool {
        self.unmapped.is_empty()
    }

    fn record(&mut self, name: &str) {
        if !self.unmapped.iter().any(|n| n == name) {
            self.unmapped.push(name.to_string());
        }
    }
}

/// Translates expression trees from one formula syntax to another.
#[derive(Debug, Clone)]
pub struct Translator {
    source: Syntax,
    target: Syntax,
    map: FunctionMap,
    fallback: Fallback,
}

impl Translator {
    pub fn new(source: Syntax, target: Syntax) -> Self {
        Self {
            source,
            target,
            map: FunctionMap::new(),
            fallback: Fallback::default(),
        }
    }

    /// Set the behavior for unmapped function names (builder form).
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn source(&self) -> Syntax {
        self.source
    }

    pub fn target(&self) -> Syntax {
        self.target
    }

    /// Translate an expression tree.
    ///
    /// The input is not mutated. The report lists call names that fell
    /// back to pass-through; with [`Fallback::Strict`] the first miss is
    /// an error instead.
    pub fn translate(&self, expr: &Expr) -> StencilResult<(Expr, TranslationReport)> {
        let mut report = TranslationReport::default();
        let translated = self.translate_expr(expr, &mut report)?;
        Ok((translated, report))
    }

    /// Translate a call, reporting whether the outermost name was mapped.
    pub fn translate_call(&self, call: &Call) -> StencilResult<(Translated, TranslationReport)> {
        let mut report = TranslationReport::default();
        let (translated, mapped) = self.rewrite_call(call, &mut report)?;
        Ok((
            Translated {
                expr: Expr::Call(translated),
                mapped,
            },
            report,
        ))
    }

    fn translate_expr(&self, expr: &Expr, report: &mut TranslationReport) -> StencilResult<Expr> {
        match expr {
            Expr::Literal(_) | Expr::Ident(_) => Ok(expr.clone()),
            Expr::Call(call) => Ok(Expr::Call(self.rewrite_call(call, report)?.0)),
        }
    }

    fn rewrite_call(
        &self,
        call: &Call,
        report: &mut TranslationReport,
    ) -> StencilResult<(Call, bool)> {
        let mut args = Vec::with_capacity(call.args.len());
        for arg in &call.args {
            args.push(self.translate_expr(arg, report)?);
        }
        let mut named = IndexMap::with_capacity(call.named.len());
        for (key, value) in &call.named {
            named.insert(key.clone(), self.translate_expr(value, report)?);
        }

        match self.map.lookup(self.source, self.target, &call.name) {
            Some(target_name) => Ok((
                Call {
                    name: target_name.to_string(),
                    args,
                    named,
                },
                true,
            )),
            None => {
                if self.fallback == Fallback::Strict {
                    return Err(StencilError::translation(format!(
                        "no {} equivalent for {} function '{}'",
                        self.target, self.source, call.name
                    )));
                }
                tracing::debug!(
                    function = %call.name,
                    source = %self.source,
                    target = %self.target,
                    "no mapping for function, passing name through"
                );
                report.record(&call.name);
                Ok((
                    Call {
                        name: call.name.clone(),
                        args,
                        named,
                    },
                    false,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use stencil_core::StencilErrorKind;

    fn excel_to_r() -> Translator {
        Translator::new(Syntax::Excel, Syntax::R)
    }

    #[test]
    fn test_mapped_call() {
        let expr = parse("SUM(1, 2)").unwrap();
        let (out, report) = excel_to_r().translate(&expr).unwrap();
        let call = out.as_call().unwrap();
        assert_eq!(call.name, "sum");
        assert!(report.is_complete());
    }

    #[test]
    fn test_nested_calls_translate_bottom_up() {
        let expr = parse("ROUND(AVERAGE(A1:A9), 2)").unwrap();
        let (out, _) = excel_to_r().translate(&expr).unwrap();
        let outer = out.as_call().unwrap();
        assert_eq!(outer.name, "round");
        assert_eq!(outer.args[0].as_call().unwrap().name, "mean");
    }

    #[test]
    fn test_unmapped_call_passes_through() {
        let expr = parse("FOOBAR(SUM(1))").unwrap();
        let (out, report) = excel_to_r().translate(&expr).unwrap();
        let call = out.as_call().unwrap();
        assert_eq!(call.name, "FOOBAR");
        // Arguments still translate under a pass-through name.
        assert_eq!(call.args[0].as_call().unwrap().name, "sum");
        assert_eq!(report.unmapped, vec!["FOOBAR".to_string()]);
    }

    #[test]
    fn test_report_deduplicates_names() {
        let expr = parse("FOO(FOO(1), BAR(2))").unwrap();
        let (_, report) = excel_to_r().translate(&expr).unwrap();
        assert_eq!(report.unmapped, vec!["FOO".to_string(), "BAR".to_string()]);
    }

    #[test]
    fn test_strict_fallback_errors() {
        let expr = parse("FOOBAR(1)").unwrap();
        let err = excel_to_r()
            .with_fallback(Fallback::Strict)
            .translate(&expr)
            .unwrap_err();
        assert_eq!(err.kind, StencilErrorKind::Translation);
        assert!(err.message.contains("FOOBAR"));
    }

    #[test]
    fn test_argument_order_preserved() {
        let expr = parse("MAX(a, b, c)").unwrap();
        let (out, _) = excel_to_r().translate(&expr).unwrap();
        let call = out.as_call().unwrap();
        assert_eq!(
            call.args,
            vec![Expr::ident("a"), Expr::ident("b"), Expr::ident("c")]
        );
    }

    #[test]
    fn test_named_argument_names_pass_through() {
        let expr = parse("ROUND(x, digits=SUM(1))").unwrap();
        let (out, _) = excel_to_r().translate(&expr).unwrap();
        let call = out.as_call().unwrap();
        let value = call.named.get("digits").unwrap();
        assert_eq!(value.as_call().unwrap().name, "sum");
    }

    #[test]
    fn test_translate_call_reports_outer_mapping() {
        let expr = parse("SUM(FOO(1))").unwrap();
        let call = expr.as_call().unwrap();
        let (translated, report) = excel_to_r().translate_call(call).unwrap();
        assert!(translated.mapped);
        assert_eq!(report.unmapped, vec!["FOO".to_string()]);

        let expr = parse("FOO(SUM(1))").unwrap();
        let (translated, _) = excel_to_r()
            .translate_call(expr.as_call().unwrap())
            .unwrap();
        assert!(!translated.mapped);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let expr = parse("SUM(1)").unwrap();
        let before = expr.clone();
        let _ = excel_to_r().translate(&expr).unwrap();
        assert_eq!(expr, before);
    }
}
