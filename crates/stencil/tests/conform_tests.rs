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

//! Schema conformance through the document facade.

use proptest::prelude::*;
use stencil::{Stencil, Syntax};

#[test]
fn test_bare_text_document_gets_a_paragraph() {
    let mut doc = Stencil::new();
    doc.set_text(Syntax::Cila, "Just some prose").unwrap();
    assert_eq!(doc.text(Syntax::Cila).unwrap(), "Just some prose\n");

    let report = doc.conform();
    assert_eq!(report.applied, vec!["wrap-bare-text-root"]);
    assert_eq!(doc.text(Syntax::Cila).unwrap(), "p Just some prose\n");
}

#[test]
fn test_loose_forest_text_gets_paragraphs() {
    let mut doc = Stencil::new();
    doc.set_text(Syntax::Cila, "h1 Title\nA loose line").unwrap();

    let report = doc.conform();
    assert_eq!(report.applied, vec!["wrap-loose-root-text"]);
    assert_eq!(
        doc.text(Syntax::Cila).unwrap(),
        "h1 Title\np A loose line\n"
    );
}

#[test]
fn test_list_items_are_wrapped() {
    let mut doc = Stencil::new();
    doc.set_text(Syntax::Cila, "ul\n  \\one\n  li two").unwrap();

    let report = doc.conform();
    assert_eq!(report.applied, vec!["wrap-list-text"]);
    assert_eq!(doc.text(Syntax::Cila).unwrap(), "ul\n  li one\n  li two\n");
}

#[test]
fn test_conforming_twice_is_a_no_op() {
    let mut doc = Stencil::new();
    doc.set_text(Syntax::Cila, "h1 Title\nloose\nul\n  \\stray")
        .unwrap();

    let first = doc.conform();
    assert!(!first.applied.is_empty());
    let after_first = doc.text(Syntax::Cila).unwrap();

    let second = doc.conform();
    assert!(second.applied.is_empty());
    assert_eq!(doc.text(Syntax::Cila).unwrap(), after_first);
}

#[test]
fn test_table_text_reported_as_gap() {
    let mut doc = Stencil::new();
    doc.set_text(Syntax::Cila, "table\n  \\stray cell text").unwrap();
    let before = doc.text(Syntax::Cila).unwrap();

    let report = doc.conform();
    assert!(report.applied.is_empty());
    assert_eq!(report.gaps.len(), 1);
    assert!(report.gaps[0].contains("table"));
    // Gaps are reported, never repaired.
    assert_eq!(doc.text(Syntax::Cila).unwrap(), before);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Conform is idempotent for any parseable document.
    #[test]
    fn prop_conform_idempotent(text in "[a-z ]{1,20}", heading in "[A-Za-z]{1,10}") {
        let source = format!("h1 {}\n{}\nul\n  \\{}", heading, text, text);
        let mut doc = Stencil::new();
        prop_assume!(doc.set_text(Syntax::Cila, &source).is_ok());

        doc.conform();
        let once = doc.text(Syntax::Cila).unwrap();
        let report = doc.conform();
        prop_assert!(report.applied.is_empty());
        prop_assert_eq!(doc.text(Syntax::Cila).unwrap(), once);
    }
}
