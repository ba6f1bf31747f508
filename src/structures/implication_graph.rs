/*!
The implication graph --- a directed multigraph over atoms and the two truth sentinels, with edges labeled by clause keys.

An edge `a --[h]-> b` means "if `a` is true, `h`'s remaining antecedents need re-checking toward concluding `b`".
The encoding of a [GraphClause](crate::structures::clause::GraphClause) is the standard one turning Horn satisfiability into counting over reachability:
- A clause with no positive literal contributes one edge `atom(l) → ⊥` per literal.
- A fact (no negated literals) contributes `⊤ → h'`.
- Any other clause contributes one edge `atom(l) → atom(h')` per negated literal.

Edges are added per literal *occurrence*, so the graph is a true multigraph and stays consistent with the per-occurrence pending counters.

The graph is rebuilt on [initialize](crate::context::Context::initialize) and extended in place by [update](crate::context::Context::update); there is no removal operation.
*/

use petgraph::{graph::DiGraph, prelude::NodeIndex, visit::EdgeRef};

use crate::{
    db::ClauseKey,
    misc::log::targets::{self},
    structures::atom::Atom,
};

/// A node of the implication graph.
///
/// The sentinels are variants rather than distinguished atoms, so target handling in propagation is exhaustive by construction, and neither sentinel can be negated or raw'd (those operations exist only on [Literal](crate::structures::literal::Literal)).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node {
    /// ⊤ --- always true, the source of fact edges. Never receives an assignment.
    Top,

    /// ⊥ --- always false, the target of constraint edges. Never receives an assignment.
    Bottom,

    /// A named atom.
    Atom(Atom),
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Top => write!(f, "⊤"),
            Self::Bottom => write!(f, "⊥"),
            Self::Atom(atom) => write!(f, "{atom}"),
        }
    }
}

/*
The graph will have at most as many nodes as atoms plus the sentinels, so a fixed size array can store where an atom appears in the graph.
 */
/// The implication graph.
#[derive(Debug)]
pub struct ImplicationGraph {
    /// Where each atom appears in the graph, if it does.
    atom_indicies: Vec<Option<NodeIndex>>,

    /// The index of ⊤.
    top: NodeIndex,

    /// The index of ⊥.
    bottom: NodeIndex,

    /// The underlying graph, with parallel edges permitted.
    graph: DiGraph<Node, ClauseKey>,
}

impl Default for ImplicationGraph {
    fn default() -> Self {
        let mut graph = DiGraph::new();
        let top = graph.add_node(Node::Top);
        let bottom = graph.add_node(Node::Bottom);
        ImplicationGraph {
            atom_indicies: Vec::default(),
            top,
            bottom,
            graph,
        }
    }
}

impl ImplicationGraph {
    /// Drops every node and edge, leaving only the sentinels.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.top = self.graph.add_node(Node::Top);
        self.bottom = self.graph.add_node(Node::Bottom);
        self.atom_indicies.clear();
    }

    /// The index of the given node, creating a node for an atom on first sight.
    fn index_of(&mut self, node: Node) -> NodeIndex {
        match node {
            Node::Top => self.top,
            Node::Bottom => self.bottom,
            Node::Atom(atom) => {
                let slot = atom as usize;
                if self.atom_indicies.len() <= slot {
                    self.atom_indicies.resize(slot + 1, None);
                }
                match self.atom_indicies[slot] {
                    Some(index) => index,
                    None => {
                        let index = self.graph.add_node(node);
                        self.atom_indicies[slot] = Some(index);
                        index
                    }
                }
            }
        }
    }

    /// Ensures a node exists for the given atom.
    pub fn ensure_atom(&mut self, atom: Atom) {
        self.index_of(Node::Atom(atom));
    }

    /// Adds an edge from `source` to `target` labeled by `key`, creating atom nodes as needed.
    ///
    /// Parallel edges between the same pair of nodes are kept --- one per literal occurrence.
    pub fn add_edge(&mut self, source: Node, target: Node, key: ClauseKey) {
        let source_index = self.index_of(source);
        let target_index = self.index_of(target);
        self.graph.add_edge(source_index, target_index, key);
        log::trace!(target: targets::GRAPH, "+Edge {source} → {target} [{key:?}]");
    }

    /// The multiset of (target, clause label) pairs of edges leaving the given atom.
    ///
    /// Empty if the atom has no node, or no outgoing edges.
    pub fn edges_from_atom(&self, atom: Atom) -> Vec<(Node, ClauseKey)> {
        match self.atom_indicies.get(atom as usize) {
            Some(Some(index)) => self
                .graph
                .edges(*index)
                .map(|edge| (self.graph[edge.target()], *edge.weight()))
                .collect(),
            _ => Vec::default(),
        }
    }

    /// A count of the nodes of the graph, the sentinels included.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// A count of the edges of the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_a_multiset() {
        let mut graph = ImplicationGraph::default();
        let key = ClauseKey::default();

        graph.add_edge(Node::Atom(3), Node::Atom(5), key);
        graph.add_edge(Node::Atom(3), Node::Atom(5), key);
        graph.add_edge(Node::Top, Node::Atom(3), key);

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edges_from_atom(3).len(), 2);
        assert!(graph
            .edges_from_atom(3)
            .iter()
            .all(|(target, _)| *target == Node::Atom(5)));
    }

    #[test]
    fn sentinels_survive_a_clear() {
        let mut graph = ImplicationGraph::default();
        graph.add_edge(Node::Atom(0), Node::Bottom, ClauseKey::default());
        graph.clear();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.edges_from_atom(0).is_empty());
    }
}
