//! Sulfur and selenium.

use petgraph::graph::NodeIndex;

use crate::atomtype::perception::{Perceived, Perception};
use crate::bond::BondOrder;
use crate::hybridization::Hybridization;
use crate::traits::{TypeableAtom, TypeableBond};

pub(super) fn sulfur<'c, A, B>(p: &Perception<'_, 'c, A, B>, idx: NodeIndex) -> Perceived<'c>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    // no radical sulfur types
    if p.is_radical(idx) {
        return Ok(None);
    }

    if !p.is_charged(idx) && p.hybridization(idx) == Some(Hybridization::Planar3) {
        return p.propose(idx, "S.planar3");
    }

    let degree = p.degree(idx);
    match p.charge(idx) {
        Some(-1) if degree <= 1 => return p.propose(idx, "S.minus"),
        Some(-2) if degree == 0 => return p.propose(idx, "S.2minus"),
        Some(1) => {
            return match p.max_bond_order(idx) {
                BondOrder::Double => p.propose(idx, "S.plus.2"),
                BondOrder::Single if degree <= 3 => p.propose(idx, "S.plus"),
                _ => Ok(None),
            };
        }
        Some(0) | None => {}
        _ => return Ok(None),
    }

    if p.atom(idx).is_aromatic() || p.has_single_or_double_bond(idx) {
        return p.propose(idx, "S.planar3");
    }

    let doubles = p.double_bond_count(idx, None);
    match (degree, doubles) {
        (0, _) => p.propose(idx, "S.3"),
        (1, 0) => p.propose(idx, "S.3"),
        (1, 1) => p.propose(idx, "S.2"),
        (2, 0) => {
            // thiophene in Kekulé form
            if p.neighbors_are_sp2(idx) && p.is_cyclic(idx) {
                propose!(p, idx, "S.planar3");
            }
            p.propose(idx, "S.3")
        }
        (2, 1) => p.propose(idx, "S.inyl.2"),
        (2, 2) => p.propose(idx, "S.oxide.sp2"),
        (3, 1) => p.propose(idx, "S.inyl"),
        (3, 3) => p.propose(idx, "S.trioxide"),
        (4, 0) => p.propose(idx, "S.anyl"),
        (4, 2) => p.propose(idx, "S.onyl"),
        (6, 0) => p.propose(idx, "S.octahedral"),
        _ => Ok(None),
    }
}

pub(super) fn selenium<'c, A, B>(p: &Perception<'_, 'c, A, B>, idx: NodeIndex) -> Perceived<'c>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if p.is_radical(idx) {
        return Ok(None);
    }

    let degree = p.degree(idx);
    match p.charge(idx) {
        Some(1) if degree <= 3 && p.max_bond_order(idx) == BondOrder::Single => {
            return p.propose(idx, "Se.plus.3");
        }
        Some(-2) if degree == 0 => return p.propose(idx, "Se.2minus"),
        Some(0) | None => {}
        _ => return Ok(None),
    }

    if p.atom(idx).is_aromatic() || p.has_single_or_double_bond(idx) {
        return p.propose(idx, "Se.planar3");
    }

    match (degree, p.double_bond_count(idx, None)) {
        (0..=2, 0) => p.propose(idx, "Se.3"),
        (1, 1) => p.propose(idx, "Se.2"),
        (2, 1) => p.propose(idx, "Se.sp2.2"),
        (3, 1) => p.propose(idx, "Se.4"),
        (4, 0) => p.propose(idx, "Se.sp3.4"),
        (4, 2) => p.propose(idx, "Se.onyl"),
        _ => Ok(None),
    }
}
