//! Ring membership.
//!
//! Atom typing only needs to know whether an atom lies on *some* cycle, not
//! which rings it belongs to, so this is a bridge search rather than an
//! SSSR: every bond that is not a bridge lies on a cycle, and every atom
//! incident to such a bond is cyclic.

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::mol::Mol;

/// Answers whether an atom lies on at least one cycle.
pub trait RingMembership {
    fn cyclic(&self, atom: NodeIndex) -> bool;
}

/// Per-atom and per-bond cycle membership for one graph snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingSearch {
    cyclic_atoms: Vec<bool>,
    cyclic_bonds: Vec<bool>,
}

const UNVISITED: u32 = u32::MAX;

struct Frame {
    node: NodeIndex,
    parent_edge: Option<EdgeIndex>,
    next: usize,
}

impl RingSearch {
    pub fn new<A, B>(mol: &Mol<A, B>) -> Self {
        let n = mol.atom_count();
        let mut adj: Vec<Vec<(EdgeIndex, NodeIndex)>> = vec![Vec::new(); n];
        for edge in mol.bonds() {
            if let Some((u, v)) = mol.bond_endpoints(edge) {
                adj[u.index()].push((edge, v));
                adj[v.index()].push((edge, u));
            }
        }

        let mut cyclic_bonds = vec![true; mol.bond_count()];
        let mut disc = vec![UNVISITED; n];
        let mut low = vec![UNVISITED; n];
        let mut timer = 0u32;

        for root in mol.atoms() {
            if disc[root.index()] != UNVISITED {
                continue;
            }
            disc[root.index()] = timer;
            low[root.index()] = timer;
            timer += 1;
            let mut stack = vec![Frame {
                node: root,
                parent_edge: None,
                next: 0,
            }];

            while let Some(top) = stack.len().checked_sub(1) {
                let u = stack[top].node;
                let next = stack[top].next;
                if next < adj[u.index()].len() {
                    stack[top].next += 1;
                    let (edge, v) = adj[u.index()][next];
                    if Some(edge) == stack[top].parent_edge {
                        continue;
                    }
                    if disc[v.index()] == UNVISITED {
                        disc[v.index()] = timer;
                        low[v.index()] = timer;
                        timer += 1;
                        stack.push(Frame {
                            node: v,
                            parent_edge: Some(edge),
                            next: 0,
                        });
                    } else {
                        low[u.index()] = low[u.index()].min(disc[v.index()]);
                    }
                    continue;
                }

                let done = stack.pop();
                if let (Some(done), Some(parent)) = (done, stack.last()) {
                    let p = parent.node.index();
                    low[p] = low[p].min(low[u.index()]);
                    if low[u.index()] > disc[p] {
                        if let Some(edge) = done.parent_edge {
                            cyclic_bonds[edge.index()] = false;
                        }
                    }
                }
            }
        }

        let mut cyclic_atoms = vec![false; n];
        for edge in mol.bonds() {
            if !cyclic_bonds[edge.index()] {
                continue;
            }
            if let Some((u, v)) = mol.bond_endpoints(edge) {
                cyclic_atoms[u.index()] = true;
                cyclic_atoms[v.index()] = true;
            }
        }

        Self {
            cyclic_atoms,
            cyclic_bonds,
        }
    }

    pub fn is_cyclic_bond(&self, bond: EdgeIndex) -> bool {
        self.cyclic_bonds.get(bond.index()).copied().unwrap_or(false)
    }

    pub fn cyclic_atoms(&self) -> &[bool] {
        &self.cyclic_atoms
    }

    pub fn num_cyclic_atoms(&self) -> usize {
        self.cyclic_atoms.iter().filter(|&&c| c).count()
    }
}

impl RingMembership for RingSearch {
    fn cyclic(&self, atom: NodeIndex) -> bool {
        self.cyclic_atoms.get(atom.index()).copied().unwrap_or(false)
    }
}

impl RingMembership for [bool] {
    fn cyclic(&self, atom: NodeIndex) -> bool {
        self.get(atom.index()).copied().unwrap_or(false)
    }
}

impl RingMembership for Vec<bool> {
    fn cyclic(&self, atom: NodeIndex) -> bool {
        self.as_slice().cyclic(atom)
    }
}
