//! Per-call state of one matching pass.
//!
//! A [`Perception`] owns the connected-bonds cache and the ring oracle for a
//! single graph snapshot. It is created by the matcher for each call and
//! dropped when the call returns; it is never shared between graphs.

use std::cell::OnceCell;

use petgraph::graph::{EdgeIndex, NodeIndex};
use tracing::trace;

use super::accept::is_acceptable;
use super::catalog::{AtomType, AtomTypeCatalog};
use super::error::AtomTypeError;
use super::PerceptionMode;
use crate::bond::BondOrder;
use crate::element::Element;
use crate::hybridization::Hybridization;
use crate::mol::{max_bond_order, Mol};
use crate::rings::{RingMembership, RingSearch};
use crate::traits::{
    HasAromaticity, HasAtomicNum, HasBondOrder, HasFormalCharge, HasHybridization,
    HasHydrogenCount, HasRadicalElectrons, HasRingFlag, TypeableAtom, TypeableBond,
};

/// Outcome of a classifier: an accepted prototype, no match, or a catalog fault.
pub type Perceived<'c> = Result<Option<&'c AtomType>, AtomTypeError>;

/// Atom → incident bonds, built by one pass over the bond list.
#[derive(Debug, Clone)]
pub struct ConnectedBonds {
    bonds: Vec<Vec<EdgeIndex>>,
}

impl ConnectedBonds {
    pub fn new<A, B>(mol: &Mol<A, B>) -> Self {
        let mut bonds = vec![Vec::new(); mol.atom_count()];
        for edge in mol.bonds() {
            if let Some((u, v)) = mol.bond_endpoints(edge) {
                bonds[u.index()].push(edge);
                if u != v {
                    bonds[v.index()].push(edge);
                }
            }
        }
        Self { bonds }
    }

    pub fn of(&self, atom: NodeIndex) -> &[EdgeIndex] {
        self.bonds.get(atom.index()).map(Vec::as_slice).unwrap_or(&[])
    }
}

enum Rings<'m> {
    Provided(&'m dyn RingMembership),
    Lazy(OnceCell<RingSearch>),
}

pub struct Perception<'m, 'c, A, B> {
    mol: &'m Mol<A, B>,
    catalog: &'c AtomTypeCatalog,
    mode: PerceptionMode,
    connected: ConnectedBonds,
    rings: Rings<'m>,
}

impl<'m, 'c, A, B> Perception<'m, 'c, A, B>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    pub fn new(
        mol: &'m Mol<A, B>,
        catalog: &'c AtomTypeCatalog,
        mode: PerceptionMode,
        rings: Option<&'m dyn RingMembership>,
    ) -> Self {
        Self {
            mol,
            catalog,
            mode,
            connected: ConnectedBonds::new(mol),
            rings: match rings {
                Some(r) => Rings::Provided(r),
                None => Rings::Lazy(OnceCell::new()),
            },
        }
    }

    pub fn mol(&self) -> &'m Mol<A, B> {
        self.mol
    }

    pub fn catalog(&self) -> &'c AtomTypeCatalog {
        self.catalog
    }

    pub fn atom(&self, idx: NodeIndex) -> &'m A {
        self.mol.atom(idx)
    }

    pub fn element(&self, idx: NodeIndex) -> Option<Element> {
        Element::from_atomic_num(self.atom(idx).atomic_num())
    }

    pub fn is_element(&self, idx: NodeIndex, element: Element) -> bool {
        self.atom(idx).atomic_num() == element.atomic_num()
    }

    pub fn bonds(&self, idx: NodeIndex) -> &[EdgeIndex] {
        self.connected.of(idx)
    }

    /// Connected-bond count.
    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.bonds(idx).len()
    }

    pub fn order(&self, bond: EdgeIndex) -> BondOrder {
        self.mol.bond(bond).bond_order()
    }

    pub fn other(&self, bond: EdgeIndex, idx: NodeIndex) -> Option<NodeIndex> {
        self.mol.other_atom(bond, idx)
    }

    pub fn charge(&self, idx: NodeIndex) -> Option<i8> {
        self.atom(idx).formal_charge()
    }

    /// Known and nonzero.
    pub fn is_charged(&self, idx: NodeIndex) -> bool {
        matches!(self.charge(idx), Some(c) if c != 0)
    }

    /// Unknown or zero.
    pub fn is_neutral(&self, idx: NodeIndex) -> bool {
        matches!(self.charge(idx), None | Some(0))
    }

    pub fn has_charge(&self, idx: NodeIndex, charge: i8) -> bool {
        self.charge(idx) == Some(charge)
    }

    /// A neutral requirement is also met by an unknown charge; a charged one
    /// needs the exact known value.
    pub fn charge_is(&self, idx: NodeIndex, charge: i8) -> bool {
        if charge == 0 {
            self.is_neutral(idx)
        } else {
            self.has_charge(idx, charge)
        }
    }

    /// Connected bonds plus known implicit hydrogens.
    pub fn total_connections(&self, idx: NodeIndex) -> usize {
        self.degree(idx) + self.implicit_hydrogens(idx).unwrap_or(0) as usize
    }

    pub fn hybridization(&self, idx: NodeIndex) -> Option<Hybridization> {
        self.atom(idx).hybridization()
    }

    pub fn implicit_hydrogens(&self, idx: NodeIndex) -> Option<u8> {
        self.atom(idx).hydrogen_count()
    }

    pub fn radicals(&self, idx: NodeIndex) -> u8 {
        self.atom(idx).radical_electrons()
    }

    pub fn is_radical(&self, idx: NodeIndex) -> bool {
        self.radicals(idx) > 0
    }

    /// Highest ranked incident order; `Single` when there are no bonds.
    pub fn max_bond_order(&self, idx: NodeIndex) -> BondOrder {
        max_bond_order(self.bonds(idx).iter().map(|&ei| self.order(ei)))
    }

    /// Double bonds on `idx`, optionally only those to `to`.
    pub fn double_bond_count(&self, idx: NodeIndex, to: Option<Element>) -> usize {
        self.bonds(idx)
            .iter()
            .filter(|&&ei| self.order(ei) == BondOrder::Double)
            .filter(|&&ei| match to {
                Some(element) => self
                    .other(ei, idx)
                    .is_some_and(|other| self.is_element(other, element)),
                None => true,
            })
            .count()
    }

    pub fn single_bond_count(&self, idx: NodeIndex) -> usize {
        self.bonds(idx)
            .iter()
            .filter(|&&ei| self.order(ei) == BondOrder::Single)
            .count()
    }

    pub fn has_single_or_double_bond(&self, idx: NodeIndex) -> bool {
        self.bonds(idx)
            .iter()
            .any(|&ei| self.order(ei) == BondOrder::SingleOrDouble)
    }

    pub fn has_aromatic_bond(&self, idx: NodeIndex) -> bool {
        self.bonds(idx)
            .iter()
            .any(|&ei| self.mol.bond(ei).is_aromatic())
    }

    pub fn explicit_hydrogens(&self, idx: NodeIndex) -> usize {
        self.neighbors(idx)
            .into_iter()
            .filter(|&n| self.is_element(n, Element::H))
            .count()
    }

    /// Bonds to atoms other than explicit hydrogens.
    pub fn heavy_bonds(&self, idx: NodeIndex) -> Vec<EdgeIndex> {
        self.bonds(idx)
            .iter()
            .copied()
            .filter(|&ei| {
                self.other(ei, idx)
                    .is_some_and(|n| !self.is_element(n, Element::H))
            })
            .collect()
    }

    pub fn neighbors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.bonds(idx)
            .iter()
            .filter_map(|&ei| self.other(ei, idx))
            .collect()
    }

    /// True when at least two neighbours look sp2: the shared bond is double
    /// or aromatic, the neighbour is declared sp2, or the neighbour carries a
    /// double bond of its own. Stops at the second hit.
    pub fn neighbors_are_sp2(&self, idx: NodeIndex) -> bool {
        let mut count = 0;
        for &ei in self.bonds(idx) {
            if count >= 2 {
                break;
            }
            let Some(next) = self.other(ei, idx) else {
                continue;
            };
            let bond = self.mol.bond(ei);
            if bond.bond_order() == BondOrder::Double
                || bond.is_aromatic()
                || self.hybridization(next) == Some(Hybridization::SP2)
                || self.double_bond_count(next, None) > 0
            {
                count += 1;
            }
        }
        count >= 2
    }

    /// `idx` is an oxygen with a single carbon neighbour, and that carbon
    /// carries exactly two oxygens: one double bonded, one single bonded
    /// with charge −1.
    pub fn is_carboxylate(&self, idx: NodeIndex) -> bool {
        let [bond] = self.bonds(idx) else {
            return false;
        };
        let Some(carbon) = self.other(*bond, idx) else {
            return false;
        };
        if !self.is_element(carbon, Element::C) {
            return false;
        }

        let mut oxygens = 0;
        let mut double_o = 0;
        let mut anionic_o = 0;
        for &ei in self.bonds(carbon) {
            let Some(other) = self.other(ei, carbon) else {
                continue;
            };
            if !self.is_element(other, Element::O) {
                continue;
            }
            oxygens += 1;
            match self.order(ei) {
                BondOrder::Double => double_o += 1,
                BondOrder::Single if self.has_charge(other, -1) => anionic_o += 1,
                _ => {}
            }
        }
        oxygens == 2 && double_o == 1 && anionic_o == 1
    }

    /// Bonded to a carbon that has exactly one double bond to oxygen.
    pub fn is_amide(&self, idx: NodeIndex) -> bool {
        self.next_to_carbonyl_like(idx, Element::O)
    }

    /// Bonded to a carbon that has exactly one double bond to sulfur.
    pub fn is_thioamide(&self, idx: NodeIndex) -> bool {
        self.next_to_carbonyl_like(idx, Element::S)
    }

    fn next_to_carbonyl_like(&self, idx: NodeIndex, hetero: Element) -> bool {
        self.neighbors(idx).into_iter().any(|n| {
            self.is_element(n, Element::C) && self.double_bond_count(n, Some(hetero)) == 1
        })
    }

    /// False if any non-carbon atom sits within two aromatic bonds of `idx`.
    pub fn is_single_hetero_atom(&self, idx: NodeIndex) -> bool {
        for &ei in self.bonds(idx) {
            if !self.mol.bond(ei).is_aromatic() {
                continue;
            }
            let Some(first) = self.other(ei, idx) else {
                continue;
            };
            if !self.is_element(first, Element::C) {
                return false;
            }
            for &ej in self.bonds(first) {
                if !self.mol.bond(ej).is_aromatic() {
                    continue;
                }
                match self.other(ej, first) {
                    Some(second) if second != idx && !self.is_element(second, Element::C) => {
                        return false;
                    }
                    _ => {}
                }
            }
        }
        true
    }

    /// Ring membership. A preset ring flag is trusted; otherwise the oracle
    /// is consulted, building a [`RingSearch`] on first use.
    pub fn is_cyclic(&self, idx: NodeIndex) -> bool {
        if self.atom(idx).in_ring() {
            return true;
        }
        match &self.rings {
            Rings::Provided(rings) => rings.cyclic(idx),
            Rings::Lazy(cell) => cell.get_or_init(|| RingSearch::new(self.mol)).cyclic(idx),
        }
    }

    /// Looks up `id` and runs it through the acceptance validator.
    ///
    /// A missing id is a catalog fault and propagates; rejection is `Ok(None)`.
    pub fn propose(&self, idx: NodeIndex, id: &str) -> Perceived<'c> {
        let atom_type = self.catalog.get(id)?;
        if is_acceptable(self.mol, idx, atom_type, self.bonds(idx), self.mode) {
            Ok(Some(atom_type))
        } else {
            trace!(atom = idx.index(), candidate = id, "candidate rejected");
            Ok(None)
        }
    }
}
