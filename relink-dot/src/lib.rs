//! Graphviz DOT projection of a list's traversal order.
//!
//! Walks `(position, value)` pairs and emits a left-to-right chain diagram:
//! one record-shaped node per value, labeled `value (position)`, and one
//! directed edge per consecutive pair. The output is plain DOT text -
//! handing it to Graphviz (or any DOT viewer) is the caller's business.
//!
//! # Example
//!
//! ```
//! use relink_list::OwnedList;
//!
//! let mut list: OwnedList<&str> = OwnedList::new();
//! list.append("a");
//! list.append("b");
//!
//! let dot = relink_dot::render_list(&list);
//! assert!(dot.contains(r#"node0 [label="<f0> |a (0)|<f1>"]"#));
//! assert!(dot.contains("node0:f1 -> node1:f0"));
//! ```

#![warn(missing_docs)]

use std::fmt::Display;
use std::fmt::Write;

use relink_list::{Key, OwnedList};

/// Renders values in iteration order as a DOT digraph.
///
/// Each value becomes a record node `nodeI` with ports `f0`/`f1` on its
/// flanks and the label `value (I)`; consecutive values are joined
/// `nodeI:f1 -> nodeJ:f0`, which draws the chain left to right. An empty
/// input yields a digraph with only the graph attributes.
pub fn render<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut dot = String::new();
    dot.push_str("digraph {\n");
    dot.push_str("    rankdir=LR\n");
    dot.push_str("    node [shape=record height=.1]\n");

    let mut edges = String::new();
    let mut count = 0usize;

    for (position, value) in values.into_iter().enumerate() {
        let label = escape_record_text(&value.to_string());
        // write! into a String cannot fail
        let _ = writeln!(
            dot,
            "    node{position} [label=\"<f0> |{label} ({position})|<f1>\"]"
        );
        if position > 0 {
            let _ = writeln!(edges, "    node{}:f1 -> node{}:f0", position - 1, position);
        }
        count = position + 1;
    }

    if count > 1 {
        dot.push_str(&edges);
    }
    dot.push_str("}\n");
    dot
}

/// Renders an [`OwnedList`]'s current state as a DOT digraph.
///
/// Positions in the labels are the list's own 0-based traversal positions.
pub fn render_list<T: Display, K: Key>(list: &OwnedList<T, K>) -> String {
    render(list.iter())
}

/// Escapes a value for use inside a DOT record label.
///
/// Record labels give `| { } < >` structural meaning and live inside a
/// double-quoted string, so all of those plus `"` and `\` are
/// backslash-escaped.
fn escape_record_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' | '"' | '|' | '{' | '}' | '<' | '>' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}
