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

//! Formula parsing and cross-syntax translation.
//!
//! A formula is a spreadsheet-style call expression (`SUM(A1,B2)`,
//! `ROUND(MEAN(x), digits=2)`). [`parse`] produces a [`Call`]-rooted
//! expression tree without validating function names; a [`Translator`]
//! rewrites that tree, call by call, into another syntax using the static
//! [`FunctionMap`], and [`render`] emits the target-language call text.
//!
//! A mapping miss is an expected outcome, not an error: under the default
//! fallback the original function name passes through with translated
//! arguments and is reported in the [`TranslationReport`] so the caller can
//! surface a warning.

mod expr;
mod map;
mod parser;
mod render;
mod translate;

pub use expr::{Call, Expr, Literal};
pub use map::FunctionMap;
pub use parser::parse;
pub use render::render;
pub use translate::{Fallback, Translated, TranslationReport, Translator};
