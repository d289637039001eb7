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

//! The document facade.
//!
//! A [`Stencil`] owns one syntax tree and a schema identifier. Content
//! moves in and out as text in a named [`Syntax`]; the facade dispatches
//! to the matching parser or generator and rejects syntaxes that have no
//! document form. Loading is atomic: a parse error leaves the previous
//! tree in place.

use crate::conform::{self, ConformReport};
use stencil_core::{Element, Node, StencilError, StencilResult, Syntax};
use stencil_formula::{render, Fallback, Translator};

/// One embedded formula, translated.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaTranslation {
    /// The formula source text as stored in the document.
    pub source: String,
    /// The rendered target-syntax code.
    pub target: String,
    /// Whether the outermost function name was mapped.
    pub mapped: bool,
    /// Function names with no mapping, first-encounter order.
    pub unmapped: Vec<String>,
}

/// A structured document.
#[derive(Debug, Clone)]
pub struct Stencil {
    root: Node,
    schema: String,
    /// True when the root is a `main` wrapper this facade created to hold
    /// a multi-node forest, as opposed to one authored in the source.
    synthetic_root: bool,
}

impl Default for Stencil {
    fn default() -> Self {
        Self::new()
    }
}

impl Stencil {
    /// An empty document: a bare `main` root and no schema.
    pub fn new() -> Self {
        Self {
            root: Node::element("main"),
            schema: String::new(),
            synthetic_root: true,
        }
    }

    /// The document root.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The schema identifier. Empty when none was set.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Set the schema identifier. No retroactive validation happens;
    /// call [`Stencil::conform`] to repair the tree against it.
    pub fn set_schema(&mut self, schema: impl Into<String>) {
        self.schema = schema.into();
    }

    /// Replace the document content by parsing `text` in `syntax`.
    ///
    /// A single top-level node becomes the root; several top-level nodes
    /// are wrapped in a `main` element. On a parse error the existing
    /// tree is left untouched. Formula syntaxes carry no document form
    /// and are rejected with `UnknownSyntax`.
    pub fn set_text(&mut self, syntax: Syntax, text: &str) -> StencilResult<()> {
        match syntax {
            Syntax::Cila => {
                let mut forest = stencil_cila::parse(text)?;
                tracing::debug!(nodes = forest.len(), "document content replaced");
                if forest.len() == 1 {
                    self.root = forest.remove(0);
                    self.synthetic_root = false;
                } else {
                    self.root = Node::Element(Element {
                        tag: "main".to_string(),
                        attrs: Default::default(),
                        children: forest,
                    });
                    self.synthetic_root = true;
                }
                Ok(())
            }
            Syntax::Excel | Syntax::R => Err(StencilError::unknown_syntax(format!(
                "'{}' is a formula syntax, not a document syntax",
                syntax
            ))),
        }
    }

    /// Render the document as text in `syntax`.
    ///
    /// A `main` wrapper created by [`Stencil::set_text`] renders its
    /// children as a top-level forest; an authored root, `main` included,
    /// renders as a single tree.
    pub fn text(&self, syntax: Syntax) -> StencilResult<String> {
        match syntax {
            Syntax::Cila => match &self.root {
                Node::Element(el) if self.synthetic_root => {
                    Ok(stencil_cila::generate(&el.children))
                }
                other => Ok(stencil_cila::generate(std::slice::from_ref(other))),
            },
            Syntax::Excel | Syntax::R => Err(StencilError::unknown_syntax(format!(
                "'{}' is a formula syntax, not a document syntax",
                syntax
            ))),
        }
    }

    /// Repair the tree against the schema's structural rules.
    ///
    /// Runs each registered repair rule once, top-down. Never fails;
    /// problems with no registered rule are reported as gaps. Running it
    /// again on the repaired tree is a no-op.
    pub fn conform(&mut self) -> ConformReport {
        conform::conform(&mut self.root)
    }

    /// Translate every embedded formula from `source` to `target`.
    ///
    /// Walks the tree read-only; the document is not modified. Each
    /// `calc` element with a `source` attribute contributes one entry, in
    /// document order. A malformed formula is a `Syntax` error.
    pub fn translate_formulas(
        &self,
        source: Syntax,
        target: Syntax,
    ) -> StencilResult<Vec<FormulaTranslation>> {
        let translator = Translator::new(source, target).with_fallback(Fallback::PassThrough);
        let mut out = Vec::new();
        collect_formulas(&self.root, &translator, target, &mut out)?;
        Ok(out)
    }
}

fn collect_formulas(
    node: &Node,
    translator: &Translator,
    target: Syntax,
    out: &mut Vec<FormulaTranslation>,
) -> StencilResult<()> {
    if let Node::Element(el) = node {
        if el.tag == "calc" {
            if let Some(source_text) = el.attr("source") {
                let expr = stencil_formula::parse(source_text)?;
                let (translated, report) = match expr.as_call() {
                    Some(call) => translator.translate_call(call)?,
                    // A bare literal or reference translates to itself.
                    None => {
                        let (expr, report) = translator.translate(&expr)?;
                        (
                            stencil_formula::Translated { expr, mapped: true },
                            report,
                        )
                    }
                };
                out.push(FormulaTranslation {
                    source: source_text.to_string(),
                    target: render(&translated.expr, target)?,
                    mapped: translated.mapped,
                    unmapped: report.unmapped,
                });
            }
        }
        for child in &el.children {
            collect_formulas(child, translator, target, out)?;
        }
    }
    Ok(())
}
