use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::bond::BondOrder;
use crate::traits::HasBondOrder;

/// Undirected molecular graph with atom payload `A` and bond payload `B`.
pub struct Mol<A, B> {
    graph: UnGraph<A, B>,
}

impl<A, B> Mol<A, B> {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
        }
    }

    pub fn graph(&self) -> &UnGraph<A, B> {
        &self.graph
    }

    pub fn atom(&self, idx: NodeIndex) -> &A {
        &self.graph[idx]
    }

    pub fn atom_mut(&mut self, idx: NodeIndex) -> &mut A {
        &mut self.graph[idx]
    }

    pub fn bond(&self, idx: EdgeIndex) -> &B {
        &self.graph[idx]
    }

    pub fn bond_mut(&mut self, idx: EdgeIndex) -> &mut B {
        &mut self.graph[idx]
    }

    pub fn add_atom(&mut self, atom: A) -> NodeIndex {
        self.graph.add_node(atom)
    }

    pub fn add_bond(&mut self, a: NodeIndex, b: NodeIndex, bond: B) -> EdgeIndex {
        self.graph.add_edge(a, b, bond)
    }

    pub fn atom_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn bond_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    /// Incident bonds of `idx`.
    pub fn bonds_of(&self, idx: NodeIndex) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edges(idx).map(|e| e.id())
    }

    /// Number of connected bonds (explicit neighbours).
    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges(idx).count()
    }

    pub fn atoms(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn bonds(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph.edge_indices()
    }

    pub fn bond_between(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(a, b)
    }

    pub fn bond_endpoints(&self, idx: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(idx)
    }

    /// The endpoint of `bond` that is not `atom`.
    pub fn other_atom(&self, bond: EdgeIndex, atom: NodeIndex) -> Option<NodeIndex> {
        let (a, b) = self.bond_endpoints(bond)?;
        if a == atom {
            Some(b)
        } else if b == atom {
            Some(a)
        } else {
            None
        }
    }
}

impl<A, B: HasBondOrder> Mol<A, B> {
    /// Sum of incident bond orders, not counting implicit hydrogens.
    pub fn bond_order_sum(&self, idx: NodeIndex) -> u32 {
        self.bonds_of(idx)
            .map(|ei| self.bond(ei).bond_order().electrons() as u32)
            .sum()
    }

    /// Highest ranked incident bond order; `Single` for isolated atoms.
    /// Unresolved orders are skipped.
    pub fn max_bond_order(&self, idx: NodeIndex) -> BondOrder {
        max_bond_order(self.bonds_of(idx).map(|ei| self.bond(ei).bond_order()))
    }
}

pub(crate) fn max_bond_order(orders: impl Iterator<Item = BondOrder>) -> BondOrder {
    orders.fold(BondOrder::Single, |max, order| {
        if order.is_higher_than(max) {
            order
        } else {
            max
        }
    })
}

impl<A: Clone, B: Clone> Clone for Mol<A, B> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph.clone(),
        }
    }
}

impl<A, B> Default for Mol<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: PartialEq, B: PartialEq> PartialEq for Mol<A, B> {
    fn eq(&self, other: &Self) -> bool {
        if self.atom_count() != other.atom_count() || self.bond_count() != other.bond_count() {
            return false;
        }
        self.atoms().all(|idx| self.atom(idx) == other.atom(idx))
            && self.bonds().all(|idx| {
                self.bond(idx) == other.bond(idx)
                    && self.bond_endpoints(idx) == other.bond_endpoints(idx)
            })
    }
}

impl<A: std::fmt::Debug, B: std::fmt::Debug> std::fmt::Debug for Mol<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mol")
            .field("atom_count", &self.atom_count())
            .field("bond_count", &self.bond_count())
            .finish()
    }
}
