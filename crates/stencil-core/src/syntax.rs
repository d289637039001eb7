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

//! The closed set of supported syntax variants.
//!
//! Dispatch over syntaxes is a match on this enum rather than virtual
//! dispatch; adding a variant extends the set without touching traversal
//! logic elsewhere.

use crate::error::{StencilError, StencilResult};
use std::fmt;
use std::str::FromStr;

/// A supported textual notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Syntax {
    /// Cila, the native markup (line/indentation oriented).
    Cila,
    /// Spreadsheet-style formula source (Excel dialect).
    Excel,
    /// R call expressions, a formula translation target.
    R,
}

impl Syntax {
    /// The canonical lowercase tag for this syntax.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cila => "cila",
            Self::Excel => "excel",
            Self::R => "r",
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Syntax {
    type Err = StencilError;

    fn from_str(s: &str) -> StencilResult<Self> {
        match s {
            "cila" => Ok(Self::Cila),
            "excel" => Ok(Self::Excel),
            "r" => Ok(Self::R),
            other => Err(StencilError::unknown_syntax(format!(
                "unknown syntax tag `{}`",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StencilErrorKind;

    #[test]
    fn test_as_str() {
        assert_eq!(Syntax::Cila.as_str(), "cila");
        assert_eq!(Syntax::Excel.as_str(), "excel");
        assert_eq!(Syntax::R.as_str(), "r");
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(format!("{}", Syntax::Excel), "excel");
    }

    #[test]
    fn test_from_str_roundtrip() {
        for syntax in [Syntax::Cila, Syntax::Excel, Syntax::R] {
            assert_eq!(syntax.as_str().parse::<Syntax>().unwrap(), syntax);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "latex".parse::<Syntax>().unwrap_err();
        assert_eq!(err.kind, StencilErrorKind::UnknownSyntax);
        assert!(err.message.contains("latex"));
    }
}
