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

//! Schema conformance repair.
//!
//! Conformance never fails: each rule either repairs a structural
//! problem in place or the problem is recorded as a gap for the caller
//! to surface. All rules are idempotent, so conforming an already
//! conformed tree changes nothing.

use stencil_core::{Element, Node};

/// What a conform pass did and what it could not repair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConformReport {
    /// Names of the rules that fired, in application order.
    pub applied: Vec<&'static str>,
    /// Problems with no repair rule, as `path: description` strings.
    pub gaps: Vec<String>,
}

impl ConformReport {
    /// True when the tree needed no repair and has no gaps.
    pub fn is_clean(&self) -> bool {
        self.applied.is_empty() && self.gaps.is_empty()
    }

    fn record(&mut self, rule: &'static str) {
        if !self.applied.contains(&rule) {
            self.applied.push(rule);
        }
    }
}

struct RepairRule {
    name: &'static str,
    apply: fn(&mut Node) -> bool,
}

/// The default rule set, applied top-down in order.
static RULES: &[RepairRule] = &[
    RepairRule {
        name: "wrap-bare-text-root",
        apply: wrap_bare_text_root,
    },
    RepairRule {
        name: "wrap-loose-root-text",
        apply: wrap_loose_root_text,
    },
    RepairRule {
        name: "wrap-list-text",
        apply: wrap_list_text,
    },
];

/// Elements whose text children have no repair rule; a text leaf
/// directly inside one is a gap.
const STRUCTURAL_TAGS: &[&str] = &["table", "thead", "tbody", "tfoot", "tr"];

/// Run every repair rule once over the tree.
pub(crate) fn conform(root: &mut Node) -> ConformReport {
    let mut report = ConformReport::default();
    for rule in RULES {
        if (rule.apply)(root) {
            tracing::debug!(rule = rule.name, "conform rule applied");
            report.record(rule.name);
        }
    }
    scan_gaps(root, &mut Vec::new(), &mut report);
    report
}

/// A root that is a single text leaf gets a `p` container.
fn wrap_bare_text_root(root: &mut Node) -> bool {
    if root.is_text() {
        let text = std::mem::replace(root, Node::element("p"));
        if let Node::Element(el) = root {
            el.children.push(text);
        }
        true
    } else {
        false
    }
}

/// Text leaves directly under a `main` root get wrapped in `p`.
fn wrap_loose_root_text(root: &mut Node) -> bool {
    match root {
        Node::Element(el) if el.tag == "main" => wrap_text_children(el, "p"),
        _ => false,
    }
}

/// Text leaves directly under `ul`/`ol`, anywhere, get wrapped in `li`.
fn wrap_list_text(node: &mut Node) -> bool {
    let Node::Element(el) = node else {
        return false;
    };
    let mut changed = false;
    if el.tag == "ul" || el.tag == "ol" {
        changed |= wrap_text_children(el, "li");
    }
    for child in &mut el.children {
        changed |= wrap_list_text(child);
    }
    changed
}

fn wrap_text_children(el: &mut Element, container: &str) -> bool {
    let mut changed = false;
    for child in &mut el.children {
        if child.is_text() {
            let text = std::mem::replace(child, Node::element(container));
            if let Node::Element(wrapper) = child {
                wrapper.children.push(text);
            }
            changed = true;
        }
    }
    changed
}

fn scan_gaps(node: &Node, path: &mut Vec<String>, report: &mut ConformReport) {
    let Node::Element(el) = node else {
        return;
    };
    path.push(el.tag.clone());
    if STRUCTURAL_TAGS.contains(&el.tag.as_str()) {
        for child in &el.children {
            if let Node::Text(text) = child {
                report.gaps.push(format!(
                    "{}: text '{}' needs a row/cell container",
                    path.join("/"),
                    truncated(text)
                ));
            }
        }
    }
    for child in &el.children {
        scan_gaps(child, path, report);
    }
    path.pop();
}

fn truncated(text: &str) -> &str {
    let end = text
        .char_indices()
        .nth(24)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_core::Element;

    fn conform_node(mut node: Node) -> (Node, ConformReport) {
        let report = conform(&mut node);
        (node, report)
    }

    // ==================== Repair rules ====================

    #[test]
    fn test_bare_text_root_is_wrapped() {
        let (node, report) = conform_node(Node::text("Hello"));
        assert_eq!(
            node,
            Node::Element(Element::new("p").with_child(Node::text("Hello")))
        );
        assert_eq!(report.applied, vec!["wrap-bare-text-root"]);
    }

    #[test]
    fn test_loose_text_under_main_is_wrapped() {
        let main = Node::Element(
            Element::new("main")
                .with_child(Node::text("loose"))
                .with_child(Node::element("hr")),
        );
        let (node, report) = conform_node(main);
        let children = node.children();
        assert_eq!(children[0].tag(), Some("p"));
        assert_eq!(children[1].tag(), Some("hr"));
        assert_eq!(report.applied, vec!["wrap-loose-root-text"]);
    }

    #[test]
    fn test_list_text_is_wrapped_anywhere() {
        let tree = Node::Element(Element::new("section").with_child(Node::Element(
            Element::new("ul").with_child(Node::text("item")),
        )));
        let (node, report) = conform_node(tree);
        let ul = &node.children()[0];
        assert_eq!(ul.children()[0].tag(), Some("li"));
        assert_eq!(report.applied, vec!["wrap-list-text"]);
    }

    #[test]
    fn test_clean_tree_is_untouched() {
        let tree = Node::Element(Element::new("section").with_child(Node::Element(
            Element::new("p").with_child(Node::text("fine")),
        )));
        let (node, report) = conform_node(tree.clone());
        assert_eq!(node, tree);
        assert!(report.is_clean());
    }

    #[test]
    fn test_conform_is_idempotent() {
        let (once, first) = conform_node(Node::text("Hello"));
        let (twice, second) = conform_node(once.clone());
        assert_eq!(once, twice);
        assert!(!first.applied.is_empty());
        assert!(second.is_clean());
    }

    // ==================== Gaps ====================

    #[test]
    fn test_table_text_is_a_gap_not_a_repair() {
        let table = Node::Element(Element::new("table").with_child(Node::text("stray")));
        let (node, report) = conform_node(table.clone());
        assert_eq!(node, table);
        assert!(report.applied.is_empty());
        assert_eq!(report.gaps.len(), 1);
        assert!(report.gaps[0].starts_with("table:"));
    }

    #[test]
    fn test_gap_path_is_nested() {
        let tree = Node::Element(Element::new("table").with_child(Node::Element(
            Element::new("tbody").with_child(Node::Element(
                Element::new("tr").with_child(Node::text("stray")),
            )),
        )));
        let (_, report) = conform_node(tree);
        assert_eq!(report.gaps.len(), 1);
        assert!(report.gaps[0].starts_with("table/tbody/tr:"));
    }
}
