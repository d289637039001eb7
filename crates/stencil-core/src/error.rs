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

//! Error types shared across the Stencil workspace.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StencilErrorKind {
    /// Text cannot be parsed under the requested syntax.
    Syntax,
    /// The requested syntax has no registered parser or generator.
    UnknownSyntax,
    /// Schema violation or mismatch.
    Schema,
    /// Formula translation failure (strict fallback only).
    Translation,
}

impl fmt::Display for StencilErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "SyntaxError"),
            Self::UnknownSyntax => write!(f, "UnknownSyntaxError"),
            Self::Schema => write!(f, "SchemaError"),
            Self::Translation => write!(f, "TranslationError"),
        }
    }
}

/// An error surfaced by a Stencil core operation.
///
/// Hard errors propagate immediately to the caller; the core performs no
/// retries and never substitutes a partial tree.
#[derive(Debug, Clone, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct StencilError {
    /// The kind of error.
    pub kind: StencilErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based; 0 when no source position applies).
    pub line: usize,
    /// Column number (1-based, optional).
    pub column: Option<usize>,
    /// Additional context (e.g. "in formula `SUM(A1)`").
    pub context: Option<String>,
}

impl StencilError {
    /// Create a new error.
    pub fn new(kind: StencilErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            column: None,
            context: None,
        }
    }

    /// Add column information.
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// A syntax error at the given line.
    pub fn syntax(message: impl Into<String>, line: usize) -> Self {
        Self::new(StencilErrorKind::Syntax, message, line)
    }

    /// An unknown-syntax error.
    pub fn unknown_syntax(message: impl Into<String>) -> Self {
        Self::new(StencilErrorKind::UnknownSyntax, message, 0)
    }

    /// A schema error.
    pub fn schema(message: impl Into<String>) -> Self {
        Self::new(StencilErrorKind::Schema, message, 0)
    }

    /// A translation error.
    pub fn translation(message: impl Into<String>) -> Self {
        Self::new(StencilErrorKind::Translation, message, 0)
    }
}

/// Result type for Stencil operations.
pub type StencilResult<T> = Result<T, StencilError>;
