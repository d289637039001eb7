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

//! The generic syntax tree element.
//!
//! A tree is a strictly-owned recursive structure: every child belongs to
//! exactly one parent and moves on construction. Cloning a [`Node`] deep
//! copies its whole subtree, so two documents can hold structurally
//! identical trees without sharing mutable state.

use indexmap::IndexMap;

/// An element of a syntax tree.
///
/// A `Text` leaf carries only its string payload; it has no tag and no
/// children. Everything else is an [`Element`] with a tag.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// A tagged element with attributes and children.
    Element(Element),
    /// Raw text content.
    Text(String),
}

/// A tagged tree element.
///
/// Attribute keys are unique and insertion order is preserved, so a
/// generator can reproduce attributes in the order a parser saw them.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    /// The element tag (e.g. "p", "ul", "calc").
    pub tag: String,
    /// Attribute name to value, insertion-ordered.
    pub attrs: IndexMap<String, String>,
    /// Ordered child nodes, exclusively owned.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Set an attribute, replacing any previous value for the name.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    /// Set an attribute and return the element (builder form).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Append a child node.
    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Append a child node and return the element (builder form).
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True if the element has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Node {
    /// Create a text leaf.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Create an empty element node with the given tag.
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element(Element::new(tag))
    }

    /// The element tag, or `None` for a text leaf.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element(el) => Some(&el.tag),
            Self::Text(_) => None,
        }
    }

    /// True if this node is a text leaf.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// The text payload, if this is a text leaf.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow as an element.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Mutably borrow as an element.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// The children of this node; empty for a text leaf.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Element(el) => &el.children,
            Self::Text(_) => &[],
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}
