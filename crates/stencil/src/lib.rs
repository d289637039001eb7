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

//! # Stencil - structured documents with embedded formulas
//!
//! Stencil documents are element trees written in Cila, a concise
//! indentation-based markup with inline spreadsheet-style formulas.
//!
//! ## Quick Start
//!
//! ```rust
//! use stencil::{Stencil, Syntax};
//!
//! let mut doc = Stencil::new();
//! doc.set_text(Syntax::Cila, "section\n  h1 Report\n  p Total: `SUM(A1,B2)`")
//!     .expect("valid Cila");
//!
//! // Regenerate canonical Cila.
//! let cila = doc.text(Syntax::Cila).expect("cila is renderable");
//! assert!(cila.starts_with("section"));
//!
//! // Translate every embedded formula from Excel names to R names.
//! let translations = doc.translate_formulas(Syntax::Excel, Syntax::R).unwrap();
//! assert_eq!(translations[0].target, "sum(A1, B2)");
//! ```
//!
//! ## Modules
//!
//! - [`stencil_core`] (re-exported): tree model, errors, syntax registry
//! - [`cila`]: Cila parsing and generation
//! - [`formula`]: formula parsing, translation, rendering
//! - [`Stencil`]: document facade with schema conformance repair

// Re-export core types
pub use stencil_core::{Element, Node, StencilError, StencilErrorKind, StencilResult, Syntax};

mod conform;
mod document;

pub use conform::ConformReport;
pub use document::{FormulaTranslation, Stencil};

// Re-export the Cila converter surface
pub mod cila {
    //! Cila markup parsing and generation
    pub use stencil_cila::{generate, is_known_tag, parse};
}

// Re-export the formula surface
pub mod formula {
    //! Formula parsing and cross-syntax translation
    pub use stencil_formula::{
        parse, render, Call, Expr, Fallback, FunctionMap, Literal, Translated, TranslationReport,
        Translator,
    };
}
