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

//! Expression tree for formulas.
//!
//! Expressions follow a minimal function-call grammar:
//! - Literals: `42`, `3.5`, `"hello"`, `TRUE`
//! - References and identifiers: `A1`, `B2:C4`, `rate` (opaque tokens)
//! - Function calls: `SUM(A1, B2)`, `ROUND(x, digits=2)`

use indexmap::IndexMap;

/// A formula expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal(Literal),
    /// An identifier or cell/range reference, kept as an opaque token.
    Ident(String),
    /// A function call.
    Call(Call),
}

/// A literal value within an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Integer literal.
    Int(i64),
    /// Float literal.
    Float(f64),
    /// String literal (unquoted content).
    Str(String),
    /// Boolean literal.
    Bool(bool),
}

/// A function invocation.
///
/// Positional argument order is semantically significant and preserved
/// through translation. Named arguments keep their insertion order. A call
/// with zero arguments is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// The function name as written in the source syntax.
    pub name: String,
    /// Positional arguments, in order.
    pub args: Vec<Expr>,
    /// Named arguments, insertion-ordered.
    pub named: IndexMap<String, Expr>,
}

impl Call {
    /// Create a call with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            named: IndexMap::new(),
        }
    }

    /// Create a call with positional arguments.
    pub fn with_args(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self {
            name: name.into(),
            args,
            named: IndexMap::new(),
        }
    }

    /// Add a named argument (builder form).
    pub fn with_named(mut self, name: impl Into<String>, value: Expr) -> Self {
        self.named.insert(name.into(), value);
        self
    }
}

impl From<Call> for Expr {
    fn from(call: Call) -> Self {
        Self::Call(call)
    }
}

impl Expr {
    /// Integer literal shorthand.
    pub fn int(value: i64) -> Self {
        Self::Literal(Literal::Int(value))
    }

    /// String literal shorthand.
    pub fn str(value: impl Into<String>) -> Self {
        Self::Literal(Literal::Str(value.into()))
    }

    /// Identifier/reference shorthand.
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// Borrow as a call.
    pub fn as_call(&self) -> Option<&Call> {
        match self {
            Self::Call(call) => Some(call),
            _ => None,
        }
    }
}
