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

//! Document loading, rendering and formula translation end to end.

use stencil::{Stencil, StencilErrorKind, Syntax};

const REPORT: &str = "section #summary\n  h1 Quarterly report\n  p Revenue: `SUM(B2:B13)` EUR\n  p Average: `ROUND(AVERAGE(B2:B13), 2)` EUR\n  ul\n    li Costs `MIN(C2:C13)`\n    li Margin `CUSTOMMARGIN(B2,C2)`\n";

#[test]
fn test_load_and_regenerate() {
    let mut doc = Stencil::new();
    doc.set_text(Syntax::Cila, REPORT).unwrap();
    let regenerated = doc.text(Syntax::Cila).unwrap();
    assert_eq!(regenerated, REPORT);
}

#[test]
fn test_set_text_failure_keeps_previous_content() {
    let mut doc = Stencil::new();
    doc.set_text(Syntax::Cila, REPORT).unwrap();

    // Unterminated formula marker fails the whole load.
    let err = doc
        .set_text(Syntax::Cila, "p Broken: `SUM(A1")
        .unwrap_err();
    assert_eq!(err.kind, StencilErrorKind::Syntax);
    assert_eq!(err.line, 1);
    assert_eq!(doc.text(Syntax::Cila).unwrap(), REPORT);
}

#[test]
fn test_unknown_document_syntax_surfaces() {
    let mut doc = Stencil::new();
    let err = doc.set_text(Syntax::Excel, "SUM(1)").unwrap_err();
    assert_eq!(err.kind, StencilErrorKind::UnknownSyntax);
    assert!(err.to_string().contains("excel"));
}

#[test]
fn test_translate_formulas_end_to_end() {
    let mut doc = Stencil::new();
    doc.set_text(Syntax::Cila, REPORT).unwrap();

    let translations = doc.translate_formulas(Syntax::Excel, Syntax::R).unwrap();
    let targets: Vec<&str> = translations.iter().map(|t| t.target.as_str()).collect();
    assert_eq!(
        targets,
        vec![
            "sum(B2:B13)",
            "round(mean(B2:B13), 2)",
            "min(C2:C13)",
            "CUSTOMMARGIN(B2, C2)",
        ]
    );
    assert!(translations[0].mapped);
    assert!(!translations[3].mapped);
    assert_eq!(translations[3].unmapped, vec!["CUSTOMMARGIN".to_string()]);

    // The document itself is untouched by translation.
    assert_eq!(doc.text(Syntax::Cila).unwrap(), REPORT);
}

#[test]
fn test_malformed_stored_formula_is_a_syntax_error() {
    let mut doc = Stencil::new();
    // The Cila parser stores formula source verbatim; the formula grammar
    // is only checked at translation time.
    doc.set_text(Syntax::Cila, "p `SUM(1,`").unwrap();
    let err = doc.translate_formulas(Syntax::Excel, Syntax::R).unwrap_err();
    assert_eq!(err.kind, StencilErrorKind::Syntax);
}

#[test]
fn test_syntax_registry_round_trips_names() {
    assert_eq!("cila".parse::<Syntax>().unwrap(), Syntax::Cila);
    assert_eq!(Syntax::Excel.to_string(), "excel");
    let err = "markdown".parse::<Syntax>().unwrap_err();
    assert_eq!(err.kind, StencilErrorKind::UnknownSyntax);
}
