//! Boron, silicon and the heavier p-block elements.

use petgraph::graph::NodeIndex;

use crate::atomtype::perception::{Perceived, Perception};
use super::coordination::{exactly, up_to, Rule};
use crate::bond::BondOrder;
use crate::element::Element;
use crate::traits::{TypeableAtom, TypeableBond};

pub(super) static TABLES: &[(Element, &[Rule])] = &[
    (Element::Be, BE),
    (Element::Al, AL),
    (Element::Ga, GA),
    (Element::In, IN),
    (Element::Tl, TL),
    (Element::Ge, GE),
    (Element::Pb, PB),
    (Element::Sb, SB),
    (Element::Te, TE),
];

const BE: &[Rule] = &[up_to(-2, 4, "Be.2minus"), exactly(0, 0, "Be.neutral")];

const AL: &[Rule] = &[
    exactly(3, 0, "Al.3plus"),
    exactly(0, 3, "Al"),
    exactly(-3, 6, "Al.3minus"),
];

const GA: &[Rule] = &[exactly(0, 3, "Ga"), exactly(3, 0, "Ga.3plus")];

const IN: &[Rule] = &[
    exactly(3, 0, "In.3plus"),
    exactly(0, 3, "In.3"),
    exactly(0, 1, "In.1"),
    exactly(0, 0, "In"),
];

const TL: &[Rule] = &[
    exactly(1, 0, "Tl.plus"),
    exactly(0, 0, "Tl"),
    exactly(0, 1, "Tl.1"),
];

const GE: &[Rule] = &[exactly(0, 4, "Ge"), exactly(0, 3, "Ge.3")];

const PB: &[Rule] = &[
    exactly(0, 0, "Pb.neutral"),
    exactly(2, 0, "Pb.2plus"),
    exactly(0, 1, "Pb.1"),
];

const SB: &[Rule] = &[exactly(0, 3, "Sb.3"), exactly(0, 4, "Sb.4")];

const TE: &[Rule] = &[up_to(0, 2, "Te.3"), exactly(4, 0, "Te.4plus")];

pub(super) fn silicon<'c, A, B>(p: &Perception<'_, 'c, A, B>, idx: NodeIndex) -> Perceived<'c>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if p.is_radical(idx) {
        return Ok(None);
    }
    if p.is_charged(idx) {
        if p.has_charge(idx, -2) && p.degree(idx) == 6 {
            return p.propose(idx, "Si.2minus.6");
        }
        return Ok(None);
    }
    match p.max_bond_order(idx) {
        BondOrder::Single if p.degree(idx) <= 4 => {
            if p.degree(idx) == 3 && p.implicit_hydrogens(idx) == Some(0) {
                propose!(p, idx, "Si.3");
            }
            p.propose(idx, "Si.sp3")
        }
        BondOrder::Double => p.propose(idx, "Si.sp2"),
        BondOrder::Triple => p.propose(idx, "Si.sp"),
        _ => Ok(None),
    }
}

pub(super) fn boron<'c, A, B>(p: &Perception<'_, 'c, A, B>, idx: NodeIndex) -> Perceived<'c>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if p.is_radical(idx) {
        return Ok(None);
    }
    match p.charge(idx) {
        Some(-1) => {
            if p.max_bond_order(idx) == BondOrder::Single && p.degree(idx) <= 4 {
                return p.propose(idx, "B.minus");
            }
            Ok(None)
        }
        Some(3) if p.degree(idx) == 0 => p.propose(idx, "B.3plus"),
        Some(0) | None => {
            if p.degree(idx) <= 3 {
                return p.propose(idx, "B");
            }
            Ok(None)
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use crate::atomtype::classify::testing::*;
    use crate::bond::BondOrder::*;
    use crate::element::Element::*;

    #[test]
    fn tetramethylsilane() {
        let mut b = MolBuilder::new();
        let si = b.atom(Si, 0);
        for _ in 0..4 {
            let c = b.atom(C, 3);
            b.bond(si, c, Single);
        }
        assert_eq!(b.type_of(si), "Si.sp3");
    }

    #[test]
    fn silene() {
        let mut b = MolBuilder::new();
        let si = b.atom(Si, 2);
        let c = b.atom(C, 2);
        b.bond(si, c, Double);
        assert_eq!(b.type_of(si), "Si.sp2");
    }

    #[test]
    fn borane_and_borate() {
        let mut b = MolBuilder::new();
        let bh3 = b.atom(B, 3);
        assert_eq!(b.type_of(bh3), "B");

        let mut b = MolBuilder::new();
        let bf4 = b.charged(B, 0, -1);
        for _ in 0..4 {
            let f = b.atom(F, 0);
            b.bond(bf4, f, Single);
        }
        assert_eq!(b.type_of(bf4), "B.minus");
    }

    #[test]
    fn tetravalent_neutral_boron_unmatched() {
        let mut b = MolBuilder::new();
        let bb = b.atom(B, 0);
        for _ in 0..4 {
            let h = b.atom(H, 0);
            b.bond(bb, h, Single);
        }
        assert_eq!(b.type_of(bb), "X");
    }

    #[test]
    fn tables() {
        let mut b = MolBuilder::new();
        let al = b.atom(Al, 0);
        for _ in 0..3 {
            let cl = b.atom(Cl, 0);
            b.bond(al, cl, Single);
        }
        assert_eq!(b.type_of(al), "Al");

        let mut b = MolBuilder::new();
        let te = b.atom(Te, 2);
        assert_eq!(b.type_of(te), "Te.3");
    }
}
