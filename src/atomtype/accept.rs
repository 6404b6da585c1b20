//! Acceptance of a candidate prototype for a concrete atom.
//!
//! A classifier only proposes a prototype; [`is_acceptable`] decides whether
//! the atom's actual environment fits inside it. The five checks are
//! independent pure predicates evaluated in order, stopping at the first
//! failure.

use petgraph::graph::{EdgeIndex, NodeIndex};

use super::catalog::AtomType;
use super::PerceptionMode;
use crate::bond::BondOrder;
use crate::mol::Mol;
use crate::traits::{
    HasBondOrder, HasFormalCharge, HasHydrogenCount, HasRadicalElectrons, TypeableAtom,
    TypeableBond,
};

pub fn is_acceptable<A, B>(
    mol: &Mol<A, B>,
    atom: NodeIndex,
    atom_type: &AtomType,
    connected: &[EdgeIndex],
    mode: PerceptionMode,
) -> bool
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let a = mol.atom(atom);
    neighbour_count_fits(a, connected.len(), atom_type, mode)
        && bond_orders_fit(mol, connected, atom_type)
        && valence_fits(mol, a, connected, atom_type)
        && charge_matches(a, atom_type)
        && radicals_match(a, atom_type)
}

/// With explicit hydrogens required the connected-bond count must equal the
/// prototype's neighbour count. Otherwise connected bonds plus known
/// implicit hydrogens must not exceed it; an unknown hydrogen count passes.
pub fn neighbour_count_fits<A: HasHydrogenCount>(
    atom: &A,
    connected: usize,
    atom_type: &AtomType,
    mode: PerceptionMode,
) -> bool {
    let required = atom_type.formal_neighbour_count as usize;
    match mode {
        PerceptionMode::RequireExplicitHydrogens => connected == required,
        PerceptionMode::RequireNothing => match atom.hydrogen_count() {
            Some(h) => connected + h as usize <= required,
            None => true,
        },
    }
}

/// No incident bond may exceed the prototype's maximum order. An unresolved
/// single-or-double bond fits only a single or double ceiling.
pub fn bond_orders_fit<A, B: HasBondOrder>(
    mol: &Mol<A, B>,
    connected: &[EdgeIndex],
    atom_type: &AtomType,
) -> bool {
    let ceiling = atom_type.max_bond_order;
    connected.iter().all(|&ei| match mol.bond(ei).bond_order() {
        BondOrder::SingleOrDouble => matches!(ceiling, BondOrder::Single | BondOrder::Double),
        order => !order.is_higher_than(ceiling),
    })
}

pub fn valence_fits<A, B>(
    mol: &Mol<A, B>,
    atom: &A,
    connected: &[EdgeIndex],
    atom_type: &AtomType,
) -> bool
where
    A: HasHydrogenCount,
    B: HasBondOrder,
{
    let bond_sum: u32 = connected
        .iter()
        .map(|&ei| mol.bond(ei).bond_order().electrons() as u32)
        .sum();
    let valence = bond_sum + atom.hydrogen_count().unwrap_or(0) as u32;
    valence <= atom_type.valency as u32
}

/// An unknown charge is compatible with any prototype.
pub fn charge_matches<A: HasFormalCharge>(atom: &A, atom_type: &AtomType) -> bool {
    match atom.formal_charge() {
        Some(charge) => charge == atom_type.formal_charge,
        None => true,
    }
}

pub fn radicals_match<A: HasRadicalElectrons>(atom: &A, atom_type: &AtomType) -> bool {
    match atom_type.single_electrons {
        Some(required) => atom.radical_electrons() == required,
        None => true,
    }
}
