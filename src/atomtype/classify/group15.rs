//! Phosphorus and arsenic.

use petgraph::graph::NodeIndex;

use crate::atomtype::perception::{Perceived, Perception};
use crate::bond::BondOrder;
use crate::traits::{TypeableAtom, TypeableBond};

pub(super) fn phosphorus<'c, A, B>(p: &Perception<'_, 'c, A, B>, idx: NodeIndex) -> Perceived<'c>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if p.is_radical(idx) {
        return Ok(None);
    }

    let degree = p.degree(idx);
    let doubles = p.double_bond_count(idx, None);
    match p.charge(idx) {
        Some(1) => {
            return match (p.max_bond_order(idx), doubles) {
                (BondOrder::Single, _) if degree <= 4 => p.propose(idx, "P.anium"),
                (BondOrder::Double, 1) => p.propose(idx, "P.sp1.plus"),
                _ => Ok(None),
            };
        }
        Some(-1) if degree == 6 && p.max_bond_order(idx) == BondOrder::Single => {
            return p.propose(idx, "P.minus.octahedral");
        }
        Some(0) | None => {}
        _ => return Ok(None),
    }

    match (degree, p.max_bond_order(idx), doubles) {
        (0..=3, BondOrder::Single, 0) => p.propose(idx, "P.ine"),
        (1, BondOrder::Triple, _) => p.propose(idx, "P.sp1"),
        (1 | 2, BondOrder::Double, 1) => p.propose(idx, "P.irane"),
        (3 | 4, BondOrder::Double, 1) => p.propose(idx, "P.ate"),
        (5, BondOrder::Single, 0) => p.propose(idx, "P.ane"),
        _ => Ok(None),
    }
}

pub(super) fn arsenic<'c, A, B>(p: &Perception<'_, 'c, A, B>, idx: NodeIndex) -> Perceived<'c>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if p.is_radical(idx) {
        return Ok(None);
    }

    let degree = p.degree(idx);
    let doubles = p.double_bond_count(idx, None);
    match p.charge(idx) {
        Some(1) if degree <= 4 && doubles == 0 => p.propose(idx, "As.plus"),
        Some(3) if degree == 0 => p.propose(idx, "As.3plus"),
        Some(-1) if degree == 6 && doubles == 0 => p.propose(idx, "As.minus"),
        Some(0) | None => match (degree, doubles) {
            (0..=3, 0) => p.propose(idx, "As"),
            (1 | 2, 1) => p.propose(idx, "As.2"),
            (3 | 4, 1) => p.propose(idx, "As.5"),
            _ => Ok(None),
        },
        _ => Ok(None),
    }
}
