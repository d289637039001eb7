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

//! Cila markup parser and generator.
//!
//! Cila is a compact, line-oriented markup where block nesting is expressed
//! through indentation (2 spaces per level) rather than closing tags, and
//! inline formulas are delimited by backticks:
//!
//! ```text
//! section #intro .highlight
//!   h1 Overview
//!   p The total is `SUM(A1,B2)` units.
//!   Bare lines are text content.
//! ```
//!
//! [`parse`] turns Cila text into a forest of [`Node`]s and [`generate`] is
//! its structural inverse: `parse(generate(t))` is structurally equal to `t`
//! for every forest `t` the parser can produce. Byte-identical output is not
//! guaranteed (indentation and attribute quoting are canonicalized).
//!
//! Formula spans become `calc` elements carrying the raw expression in their
//! `source` attribute; the expression itself is parsed later by
//! `stencil-formula`.

mod generator;
mod parser;
mod tags;

pub use generator::generate;
pub use parser::parse;
pub use tags::is_known_tag;
