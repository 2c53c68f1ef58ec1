// Language graph — one node per language, one labeled edge per language pair.
//
// Built fresh for every topic and thrown away once rendered. Edges are
// undirected: (en, es) and (es, en) are the same edge, and adding a pair
// again replaces its score instead of creating a parallel edge.

use std::collections::HashMap;
use std::fmt;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::Serialize;

/// Aggregate similarity between two languages for one topic.
///
/// `None` means the matrix had no data to aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairScore(pub Option<f64>);

impl PairScore {
    /// Score as a percentage, if there is one.
    pub fn percent(&self) -> Option<f64> {
        self.0.map(|s| s * 100.0)
    }
}

impl fmt::Display for PairScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percent() {
            Some(p) => write!(f, "{p:.2}%"),
            None => write!(f, "n/a"),
        }
    }
}

/// A labeled edge as returned by [`LanguageGraph::edges`].
#[derive(Debug, Clone, PartialEq)]
pub struct Connection<'a> {
    pub a: &'a str,
    pub b: &'a str,
    pub score: PairScore,
}

#[derive(Debug, Default)]
pub struct LanguageGraph {
    inner: UnGraph<String, PairScore>,
    index: HashMap<String, NodeIndex>,
}

impl LanguageGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node if it isn't already present. Returns its index.
    pub fn add_node(&mut self, code: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(code) {
            return idx;
        }
        let idx = self.inner.add_node(code.to_string());
        self.index.insert(code.to_string(), idx);
        idx
    }

    /// Ensure both languages exist, then insert or overwrite their edge.
    ///
    /// Self-loops are rejected: a language compared with itself carries no
    /// information, and the pipeline never produces one.
    pub fn add_connection(&mut self, a: &str, b: &str, score: PairScore) -> anyhow::Result<()> {
        if a == b {
            anyhow::bail!("Refusing to connect language '{a}' to itself");
        }

        let ia = self.add_node(a);
        let ib = self.add_node(b);
        // update_edge replaces the weight of an existing edge in either direction
        self.inner.update_edge(ia, ib, score);
        Ok(())
    }

    pub fn has_node(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edge_score(a, b).is_some()
    }

    pub fn edge_score(&self, a: &str, b: &str) -> Option<PairScore> {
        let ia = *self.index.get(a)?;
        let ib = *self.index.get(b)?;
        let edge = self.inner.find_edge(ia, ib)?;
        self.inner.edge_weight(edge).copied()
    }

    /// Display label for an edge, e.g. "85.00%".
    pub fn edge_label(&self, a: &str, b: &str) -> Option<String> {
        self.edge_score(a, b).map(|s| s.to_string())
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Language codes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.inner.node_weights().map(String::as_str)
    }

    pub fn edges(&self) -> impl Iterator<Item = Connection<'_>> {
        self.inner.edge_references().map(|e| Connection {
            a: self.inner[e.source()].as_str(),
            b: self.inner[e.target()].as_str(),
            score: *e.weight(),
        })
    }
}
