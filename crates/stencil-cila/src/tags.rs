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

//! The element vocabulary Cila recognizes.
//!
//! A line is an element line only when its first word is one of these tags;
//! any other line is text content. The generator escapes text whose first
//! word collides with a tag so that it reparses as text.

use once_cell::sync::Lazy;
use std::collections::HashSet;

static KNOWN_TAGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "main", "div", "section", "article", "header", "footer", "nav", "aside", "p", "h1", "h2",
        "h3", "h4", "h5", "h6", "ul", "ol", "li", "dl", "dt", "dd", "a", "span", "strong", "em",
        "sub", "sup", "code", "pre", "blockquote", "table", "caption", "thead", "tbody", "tfoot",
        "tr", "th", "td", "img", "figure", "figcaption", "br", "hr", "calc",
    ]
    .into_iter()
    .collect()
});

/// True if `word` is an element tag in the Cila vocabulary.
pub fn is_known_tag(word: &str) -> bool {
    KNOWN_TAGS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_tags() {
        assert!(is_known_tag("p"));
        assert!(is_known_tag("section"));
        assert!(is_known_tag("calc"));
    }

    #[test]
    fn test_non_tags() {
        assert!(!is_known_tag("Foo"));
        assert!(!is_known_tag("P"));
        assert!(!is_known_tag(""));
        assert!(!is_known_tag("paragraph"));
    }
}
