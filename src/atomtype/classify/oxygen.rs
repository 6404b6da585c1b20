use petgraph::graph::NodeIndex;

use crate::atomtype::perception::{Perceived, Perception};
use crate::bond::BondOrder;
use crate::hybridization::Hybridization;
use crate::traits::{TypeableAtom, TypeableBond};

pub(super) fn perceive<'c, A, B>(p: &Perception<'_, 'c, A, B>, idx: NodeIndex) -> Perceived<'c>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if p.is_radical(idx) {
        return radical(p, idx);
    }

    if let (Some(hyb), false) = (p.hybridization(idx), p.is_charged(idx)) {
        match hyb {
            Hybridization::SP2 => match p.degree(idx) {
                0 | 1 => {
                    if p.is_carboxylate(idx) {
                        propose!(p, idx, "O.sp2.co2");
                    }
                    propose!(p, idx, "O.sp2");
                }
                2 => propose!(p, idx, "O.planar3"),
                _ => {}
            },
            Hybridization::SP3 => propose!(p, idx, "O.sp3"),
            Hybridization::Planar3 => propose!(p, idx, "O.planar3"),
            _ => {}
        }
        return Ok(None);
    }

    if p.is_charged(idx) {
        return charged(p, idx);
    }

    let degree = p.degree(idx);
    if degree > 2 {
        return Ok(None);
    }

    if p.atom(idx).is_aromatic() || p.has_single_or_double_bond(idx) {
        return p.propose(idx, "O.planar3");
    }

    match p.max_bond_order(idx) {
        BondOrder::Double => {
            if p.is_carboxylate(idx) {
                propose!(p, idx, "O.sp2.co2");
            }
            p.propose(idx, "O.sp2")
        }
        BondOrder::Single => {
            // furan-like ring oxygen between two sp2 centres
            if p.heavy_bonds(idx).len() == 2 && p.neighbors_are_sp2(idx) && p.is_cyclic(idx) {
                propose!(p, idx, "O.planar3");
            }
            p.propose(idx, "O.sp3")
        }
        _ => Ok(None),
    }
}

fn charged<'c, A, B>(p: &Perception<'_, 'c, A, B>, idx: NodeIndex) -> Perceived<'c>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let degree = p.degree(idx);
    match p.charge(idx) {
        Some(-1) => {
            if p.is_carboxylate(idx) {
                propose!(p, idx, "O.minus.co2");
            }
            if degree <= 1 && p.max_bond_order(idx) == BondOrder::Single {
                return p.propose(idx, "O.minus");
            }
            Ok(None)
        }
        Some(-2) if degree == 0 => p.propose(idx, "O.minus2"),
        Some(1) => {
            if degree == 0 {
                return p.propose(idx, "O.plus");
            }
            match p.max_bond_order(idx) {
                BondOrder::Triple => p.propose(idx, "O.plus.sp1"),
                BondOrder::Double => p.propose(idx, "O.plus.sp2"),
                BondOrder::Single => p.propose(idx, "O.plus"),
                _ => Ok(None),
            }
        }
        _ => Ok(None),
    }
}

fn radical<'c, A, B>(p: &Perception<'_, 'c, A, B>, idx: NodeIndex) -> Perceived<'c>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let degree = p.degree(idx);
    match p.charge(idx) {
        Some(0) | None if degree <= 1 => p.propose(idx, "O.sp3.radical"),
        Some(1) => match p.max_bond_order(idx) {
            BondOrder::Double if degree <= 1 => p.propose(idx, "O.plus.sp2.radical"),
            BondOrder::Single if degree <= 2 => p.propose(idx, "O.plus.radical"),
            _ => Ok(None),
        },
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use crate::atomtype::classify::testing::*;
    use crate::bond::BondOrder::*;
    use crate::element::Element::*;
    use crate::hybridization::Hybridization;

    #[test]
    fn water_and_hydroxide() {
        let mut b = MolBuilder::new();
        b.atom(O, 2);
        b.charged(O, 1, -1);
        b.charged(O, 3, 1);
        assert_eq!(b.types(), ["O.sp3", "O.minus", "O.plus"]);
    }

    #[test]
    fn carbonyl_oxygen() {
        let mut b = MolBuilder::new();
        let c = b.atom(C, 2);
        let o = b.atom(O, 0);
        b.bond(c, o, Double);
        assert_eq!(b.type_of(o), "O.sp2");
    }

    #[test]
    fn carboxylate_pair() {
        let mut b = MolBuilder::new();
        let me = b.atom(C, 3);
        let c = b.atom(C, 0);
        let o1 = b.atom(O, 0);
        let o2 = b.charged(O, 0, -1);
        b.bond(me, c, Single);
        b.bond(c, o1, Double);
        b.bond(c, o2, Single);
        assert_eq!(b.types(), ["C.sp3", "C.sp2", "O.sp2.co2", "O.minus.co2"]);
    }

    #[test]
    fn alkoxide_is_plain_minus() {
        let mut b = MolBuilder::new();
        let c = b.atom(C, 3);
        let o = b.charged(O, 0, -1);
        b.bond(c, o, Single);
        assert_eq!(b.type_of(o), "O.minus");
    }

    #[test]
    fn furan_oxygen_is_planar() {
        let mut b = MolBuilder::new();
        let o = b.atom(O, 0);
        let ring: Vec<_> = (0..4).map(|_| b.atom(C, 1)).collect();
        b.bond(o, ring[0], Single);
        b.bond(ring[0], ring[1], Double);
        b.bond(ring[1], ring[2], Single);
        b.bond(ring[2], ring[3], Double);
        b.bond(ring[3], o, Single);
        assert_eq!(b.type_of(o), "O.planar3");
    }

    #[test]
    fn ether_oxygen_is_sp3() {
        let mut b = MolBuilder::new();
        let o = b.atom(O, 0);
        for _ in 0..2 {
            let c = b.atom(C, 3);
            b.bond(o, c, Single);
        }
        assert_eq!(b.type_of(o), "O.sp3");
    }

    #[test]
    fn explicit_hybridization() {
        let mut b = MolBuilder::new();
        let o = b.atom(O, 2);
        b.set_hybridization(o, Hybridization::SP3);
        assert_eq!(b.type_of(o), "O.sp3");
    }

    #[test]
    fn oxonium_and_carbon_monoxide() {
        let mut b = MolBuilder::new();
        let c = b.charged(C, 0, -1);
        let o = b.charged(O, 0, 1);
        b.bond(c, o, Triple);
        assert_eq!(b.types(), ["C.minus.sp1", "O.plus.sp1"]);
    }

    #[test]
    fn hydroxyl_radical() {
        let mut b = MolBuilder::new();
        let o = b.atom(O, 1);
        b.set_radicals(o, 1);
        assert_eq!(b.type_of(o), "O.sp3.radical");
    }
}
