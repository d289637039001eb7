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

//! Cross-syntax function name mapping.
//!
//! The map is a static table keyed by `(source, target)` syntax pair.
//! Lookup is case-insensitive on the spreadsheet side: `sum`, `Sum` and
//! `SUM` all resolve to the same entry.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use stencil_core::Syntax;

/// Excel function name -> R function name.
static EXCEL_TO_R: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Aggregates
        ("SUM", "sum"),
        ("AVERAGE", "mean"),
        ("MEAN", "mean"),
        ("MEDIAN", "median"),
        ("STDEV", "sd"),
        ("VAR", "var"),
        ("MIN", "min"),
        ("MAX", "max"),
        ("COUNT", "length"),
        // Math
        ("ABS", "abs"),
        ("SQRT", "sqrt"),
        ("EXP", "exp"),
        ("LN", "log"),
        ("LOG", "log"),
        ("LOG10", "log10"),
        ("ROUND", "round"),
        ("FLOOR", "floor"),
        ("CEILING", "ceiling"),
        // Logic
        ("IF", "ifelse"),
        // Text
        ("CONCATENATE", "paste0"),
        ("UPPER", "toupper"),
        ("LOWER", "tolower"),
        ("TRIM", "trimws"),
        ("LEN", "nchar"),
    ])
});

/// R function name -> Excel function name, derived from [`EXCEL_TO_R`].
///
/// Where several Excel names map to one R name the shortest Excel name
/// wins, so `mean` goes back to `MEAN` rather than `AVERAGE`.
static R_TO_EXCEL: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, &'static str> = HashMap::new();
    for (excel, r) in EXCEL_TO_R.iter() {
        map.entry(r)
            .and_modify(|existing| {
                if excel.len() < existing.len() {
                    *existing = excel;
                }
            })
            .or_insert(excel);
    }
    map
});

/// Resolves function names between formula syntaxes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionMap;

impl FunctionMap {
    pub fn new() -> Self {
        Self
    }

    /// Look up the target-syntax name for `name`. Returns `None` when no
    /// mapping exists for the pair or the name.
    pub fn lookup(&self, source: Syntax, target: Syntax, name: &str) -> Option<&'static str> {
        match (source, target) {
            (Syntax::Excel, Syntax::R) => {
                EXCEL_TO_R.get(name.to_ascii_uppercase().as_str()).copied()
            }
            (Syntax::R, Syntax::Excel) => R_TO_EXCEL.get(name).copied(),
            _ => None,
        }
    }

    /// Whether the map covers the `(source, target)` pair at all.
    pub fn supports(&self, source: Syntax, target: Syntax) -> bool {
        matches!(
            (source, target),
            (Syntax::Excel, Syntax::R) | (Syntax::R, Syntax::Excel)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excel_to_r_lookup() {
        let map = FunctionMap::new();
        assert_eq!(map.lookup(Syntax::Excel, Syntax::R, "SUM"), Some("sum"));
        assert_eq!(map.lookup(Syntax::Excel, Syntax::R, "AVERAGE"), Some("mean"));
        assert_eq!(map.lookup(Syntax::Excel, Syntax::R, "STDEV"), Some("sd"));
    }

    #[test]
    fn test_lookup_is_case_insensitive_on_excel_names() {
        let map = FunctionMap::new();
        assert_eq!(map.lookup(Syntax::Excel, Syntax::R, "sum"), Some("sum"));
        assert_eq!(map.lookup(Syntax::Excel, Syntax::R, "Average"), Some("mean"));
    }

    #[test]
    fn test_unknown_name_is_none() {
        let map = FunctionMap::new();
        assert_eq!(map.lookup(Syntax::Excel, Syntax::R, "FOOBAR"), None);
    }

    #[test]
    fn test_r_to_excel_reverse_lookup() {
        let map = FunctionMap::new();
        assert_eq!(map.lookup(Syntax::R, Syntax::Excel, "sd"), Some("STDEV"));
        assert_eq!(map.lookup(Syntax::R, Syntax::Excel, "ifelse"), Some("IF"));
        // Shortest Excel alias wins on a many-to-one mapping.
        assert_eq!(map.lookup(Syntax::R, Syntax::Excel, "mean"), Some("MEAN"));
    }

    #[test]
    fn test_r_lookup_is_case_sensitive() {
        let map = FunctionMap::new();
        assert_eq!(map.lookup(Syntax::R, Syntax::Excel, "SD"), None);
    }

    #[test]
    fn test_unsupported_pair() {
        let map = FunctionMap::new();
        assert!(!map.supports(Syntax::Cila, Syntax::R));
        assert_eq!(map.lookup(Syntax::Cila, Syntax::R, "SUM"), None);
    }
}
