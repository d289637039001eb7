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

//! Core syntax tree model and shared types for Stencil.
//!
//! Every parser in the workspace produces [`Node`] trees and every generator
//! consumes them. This crate holds the tree model itself, the shared error
//! type, and the closed set of supported [`Syntax`] variants. It performs no
//! I/O and has no parsing logic of its own.

mod error;
mod node;
mod syntax;

pub use error::{StencilError, StencilErrorKind, StencilResult};
pub use node::{Element, Node};
pub use syntax::Syntax;
