//! Small molecule builder shared by the classifier tests.

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::atom::Atom;
use crate::atomtype::{AtomTypeMatcher, PerceptionMode};
use crate::bond::{Bond, BondOrder};
use crate::element::Element;
use crate::hybridization::Hybridization;
use crate::mol::Mol;

pub(crate) struct MolBuilder {
    mol: Mol<Atom, Bond>,
}

impl MolBuilder {
    pub(crate) fn new() -> Self {
        Self { mol: Mol::new() }
    }

    /// Neutral atom with `h` implicit hydrogens.
    pub(crate) fn atom(&mut self, element: Element, h: u8) -> NodeIndex {
        self.charged(element, h, 0)
    }

    pub(crate) fn charged(&mut self, element: Element, h: u8, charge: i8) -> NodeIndex {
        self.mol.add_atom(Atom {
            formal_charge: Some(charge),
            hydrogen_count: Some(h),
            ..Atom::new(element)
        })
    }

    pub(crate) fn bond(&mut self, a: NodeIndex, b: NodeIndex, order: BondOrder) -> EdgeIndex {
        self.mol.add_bond(a, b, Bond::new(order))
    }

    /// Aromatic ring of the given elements with unresolved bond orders.
    /// Carbons carry one hydrogen; heteroatoms have an unknown count.
    pub(crate) fn aromatic_ring(&mut self, elements: &[Element]) -> Vec<NodeIndex> {
        let ring: Vec<_> = elements
            .iter()
            .map(|&e| {
                self.mol.add_atom(Atom {
                    formal_charge: Some(0),
                    hydrogen_count: (e == Element::C).then_some(1),
                    is_aromatic: true,
                    ..Atom::new(e)
                })
            })
            .collect();
        for (i, &a) in ring.iter().enumerate() {
            let b = ring[(i + 1) % ring.len()];
            self.mol
                .add_bond(a, b, Bond::aromatic(BondOrder::SingleOrDouble));
        }
        ring
    }

    pub(crate) fn benzene(&mut self) -> Vec<NodeIndex> {
        self.aromatic_ring(&[Element::C; 6])
    }

    pub(crate) fn set_charge(&mut self, idx: NodeIndex, charge: i8) {
        self.mol.atom_mut(idx).formal_charge = Some(charge);
    }

    pub(crate) fn clear_charge(&mut self, idx: NodeIndex) {
        self.mol.atom_mut(idx).formal_charge = None;
    }

    pub(crate) fn set_hydrogens(&mut self, idx: NodeIndex, h: Option<u8>) {
        self.mol.atom_mut(idx).hydrogen_count = h;
    }

    pub(crate) fn set_hybridization(&mut self, idx: NodeIndex, hyb: Hybridization) {
        self.mol.atom_mut(idx).hybridization = Some(hyb);
    }

    pub(crate) fn set_radicals(&mut self, idx: NodeIndex, n: u8) {
        self.mol.atom_mut(idx).radical_electrons = n;
    }

    pub(crate) fn type_in(&self, idx: NodeIndex, mode: PerceptionMode) -> String {
        AtomTypeMatcher::<Atom, Bond>::with_builtin_catalog(mode)
            .find_matching_atom_type(&self.mol, idx)
            .unwrap()
            .id
            .clone()
    }

    pub(crate) fn type_of(&self, idx: NodeIndex) -> String {
        self.type_in(idx, PerceptionMode::RequireNothing)
    }

    pub(crate) fn types(&self) -> Vec<String> {
        AtomTypeMatcher::<Atom, Bond>::with_builtin_catalog(PerceptionMode::RequireNothing)
            .find_matching_atom_types(&self.mol)
            .unwrap()
            .into_iter()
            .map(|t| t.id.clone())
            .collect()
    }
}
