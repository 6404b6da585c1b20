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
            Hybridization::SP2 => propose!(p, idx, "C.sp2"),
            Hybridization::SP3 => propose!(p, idx, "C.sp3"),
            Hybridization::SP => {
                if p.max_bond_order(idx) == BondOrder::Triple {
                    propose!(p, idx, "C.sp");
                } else {
                    propose!(p, idx, "C.allene");
                }
            }
            _ => {}
        }
        return Ok(None);
    }

    if p.is_charged(idx) {
        return charged(p, idx);
    }

    if p.atom(idx).is_aromatic() || p.has_single_or_double_bond(idx) {
        return p.propose(idx, "C.sp2");
    }

    // more than four connections is not a carbon we know how to type
    if p.degree(idx) > 4 {
        return Ok(None);
    }

    match p.max_bond_order(idx) {
        BondOrder::Quadruple => Ok(None),
        BondOrder::Triple => p.propose(idx, "C.sp"),
        BondOrder::Double => match p.double_bond_count(idx, None) {
            2 => p.propose(idx, "C.allene"),
            1 => p.propose(idx, "C.sp2"),
            _ => Ok(None),
        },
        _ => {
            if p.has_aromatic_bond(idx) {
                propose!(p, idx, "C.sp2");
            }
            p.propose(idx, "C.sp3")
        }
    }
}

fn charged<'c, A, B>(p: &Perception<'_, 'c, A, B>, idx: NodeIndex) -> Perceived<'c>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let degree = p.degree(idx);
    match p.charge(idx) {
        Some(1) => {
            if degree == 0 {
                return p.propose(idx, "C.plus.sp2");
            }
            match p.max_bond_order(idx) {
                BondOrder::Triple => p.propose(idx, "C.plus.sp1"),
                BondOrder::Double => p.propose(idx, "C.plus.sp2"),
                BondOrder::Single => p.propose(idx, "C.plus.planar"),
                _ => Ok(None),
            }
        }
        Some(-1) => match p.max_bond_order(idx) {
            BondOrder::Single if degree <= 3 => {
                if p.neighbors_are_sp2(idx) && p.is_cyclic(idx) {
                    propose!(p, idx, "C.minus.planar");
                }
                p.propose(idx, "C.minus.sp3")
            }
            BondOrder::Double if degree <= 3 => p.propose(idx, "C.minus.sp2"),
            BondOrder::Triple if degree <= 1 => p.propose(idx, "C.minus.sp1"),
            _ => Ok(None),
        },
        _ => Ok(None),
    }
}

fn radical<'c, A, B>(p: &Perception<'_, 'c, A, B>, idx: NodeIndex) -> Perceived<'c>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match p.degree(idx) {
        0 => p.propose(idx, "C.radical.sp3"),
        1..=3 => match p.max_bond_order(idx) {
            BondOrder::Single => p.propose(idx, "C.radical.planar"),
            BondOrder::Double => p.propose(idx, "C.radical.sp2"),
            BondOrder::Triple => p.propose(idx, "C.radical.sp1"),
            _ => Ok(None),
        },
        _ => Ok(None),
    }
}
