use petgraph::graph::NodeIndex;

use crate::atomtype::perception::{Perceived, Perception};
use crate::traits::{TypeableAtom, TypeableBond};

pub(super) fn perceive<'c, A, B>(p: &Perception<'_, 'c, A, B>, idx: NodeIndex) -> Perceived<'c>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let degree = p.degree(idx);
    if p.is_radical(idx) {
        if degree == 0 && p.is_neutral(idx) {
            return p.propose(idx, "H.radical");
        }
        return Ok(None);
    }
    match p.charge(idx) {
        Some(1) if degree == 0 => p.propose(idx, "H.plus"),
        Some(-1) if degree == 0 => p.propose(idx, "H.minus"),
        Some(0) | None if degree <= 1 => p.propose(idx, "H"),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use crate::atomtype::classify::testing::*;
    use crate::bond::BondOrder::*;
    use crate::element::Element::*;

    #[test]
    fn bonded_and_free_hydrogen() {
        let mut b = MolBuilder::new();
        let c = b.atom(C, 3);
        let h = b.atom(H, 0);
        b.bond(c, h, Single);
        assert_eq!(b.types(), ["C.sp3", "H"]);
    }

    #[test]
    fn ions_and_radical() {
        let mut b = MolBuilder::new();
        b.charged(H, 0, 1);
        b.charged(H, 0, -1);
        let r = b.atom(H, 0);
        b.set_radicals(r, 1);
        assert_eq!(b.types(), ["H.plus", "H.minus", "H.radical"]);
    }

    #[test]
    fn bridging_hydrogen_unmatched() {
        let mut b = MolBuilder::new();
        let h = b.atom(H, 0);
        for _ in 0..2 {
            let bb = b.atom(B, 2);
            b.bond(h, bb, Single);
        }
        assert_eq!(b.type_of(h), "X");
    }
}
