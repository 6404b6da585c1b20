use petgraph::graph::NodeIndex;

use crate::atomtype::perception::{Perceived, Perception};
use crate::bond::BondOrder;
use crate::element::Element;
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
        return hybridized(p, idx, hyb);
    }

    if p.is_charged(idx) {
        return charged(p, idx);
    }

    if p.atom(idx).is_aromatic() || p.has_single_or_double_bond(idx) {
        return aromatic(p, idx);
    }

    match p.max_bond_order(idx) {
        BondOrder::Triple => p.propose(idx, "N.sp1"),
        BondOrder::Double => {
            let to_oxygen = p.double_bond_count(idx, Some(Element::O));
            if to_oxygen == 2 {
                propose!(p, idx, "N.nitro");
            }
            if p.degree(idx) == 3 && to_oxygen >= 1 {
                propose!(p, idx, "N.oxide");
            }
            if p.double_bond_count(idx, None) == 2 {
                return p.propose(idx, "N.sp1.2");
            }
            p.propose(idx, "N.sp2")
        }
        BondOrder::Single => {
            if p.is_amide(idx) {
                propose!(p, idx, "N.amide");
            }
            if p.is_thioamide(idx) {
                propose!(p, idx, "N.thioamide");
            }
            let heavy = p.heavy_bonds(idx).len();
            if (2..=3).contains(&heavy) && p.neighbors_are_sp2(idx) && p.is_cyclic(idx) {
                propose!(p, idx, "N.planar3");
            }
            p.propose(idx, "N.sp3")
        }
        _ => Ok(None),
    }
}

fn hybridized<'c, A, B>(
    p: &Perception<'_, 'c, A, B>,
    idx: NodeIndex,
    hyb: Hybridization,
) -> Perceived<'c>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    match hyb {
        Hybridization::SP => {
            if p.double_bond_count(idx, None) == 2 {
                return p.propose(idx, "N.sp1.2");
            }
            p.propose(idx, "N.sp1")
        }
        Hybridization::SP2 => {
            if p.is_amide(idx) {
                propose!(p, idx, "N.amide");
            }
            if p.is_thioamide(idx) {
                propose!(p, idx, "N.thioamide");
            }
            if p.max_bond_order(idx) == BondOrder::Single
                && p.total_connections(idx) == 3
                && p.neighbors_are_sp2(idx)
                && p.is_cyclic(idx)
            {
                propose!(p, idx, "N.planar3");
            }
            p.propose(idx, "N.sp2")
        }
        Hybridization::SP3 => p.propose(idx, "N.sp3"),
        Hybridization::Planar3 => p.propose(idx, "N.planar3"),
        _ => Ok(None),
    }
}

/// Ring nitrogen in a delocalized system. Three connections make it
/// pyrrole-like; two make it pyridine-like unless the hydrogen count is
/// unknown and it is the only heteroatom nearby.
fn aromatic<'c, A, B>(p: &Perception<'_, 'c, A, B>, idx: NodeIndex) -> Perceived<'c>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if p.total_connections(idx) == 3 {
        return p.propose(idx, "N.planar3");
    }
    if p.implicit_hydrogens(idx).is_none() && p.degree(idx) == 2 && p.is_single_hetero_atom(idx)
    {
        propose!(p, idx, "N.planar3");
    }
    p.propose(idx, "N.sp2")
}

fn charged<'c, A, B>(p: &Perception<'_, 'c, A, B>, idx: NodeIndex) -> Perceived<'c>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let degree = p.degree(idx);
    match p.charge(idx) {
        Some(1) => {
            if p.atom(idx).is_aromatic() || p.has_single_or_double_bond(idx) {
                return p.propose(idx, "N.plus.sp2");
            }
            match p.max_bond_order(idx) {
                BondOrder::Triple => p.propose(idx, "N.plus.sp1"),
                BondOrder::Double => {
                    if p.double_bond_count(idx, None) == 2 {
                        return p.propose(idx, "N.plus.sp1");
                    }
                    p.propose(idx, "N.plus.sp2")
                }
                BondOrder::Single if degree <= 4 => p.propose(idx, "N.plus"),
                _ => Ok(None),
            }
        }
        Some(-1) => match p.max_bond_order(idx) {
            BondOrder::Single if degree <= 2 => {
                if p.neighbors_are_sp2(idx) && p.is_cyclic(idx) {
                    propose!(p, idx, "N.minus.planar3");
                }
                p.propose(idx, "N.minus.sp3")
            }
            BondOrder::Double if degree <= 1 => p.propose(idx, "N.minus.sp2"),
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
    let degree = p.degree(idx);
    match p.charge(idx) {
        Some(1) => match p.max_bond_order(idx) {
            BondOrder::Double => p.propose(idx, "N.plus.sp2.radical"),
            BondOrder::Single if degree <= 3 => p.propose(idx, "N.plus.sp3.radical"),
            _ => Ok(None),
        },
        Some(0) | None => match p.max_bond_order(idx) {
            BondOrder::Single if degree <= 2 => p.propose(idx, "N.sp3.radical"),
            BondOrder::Double if degree <= 1 => p.propose(idx, "N.sp2.radical"),
            _ => Ok(None),
        },
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use crate::atomtype::classify::testing::*;
    use crate::atomtype::PerceptionMode;
    use crate::bond::BondOrder::*;
    use crate::element::Element::*;
    use crate::hybridization::Hybridization;

    #[test]
    fn ammonia_and_ammonium() {
        let mut b = MolBuilder::new();
        b.atom(N, 3);
        b.charged(N, 4, 1);
        assert_eq!(b.types(), ["N.sp3", "N.plus"]);
    }

    #[test]
    fn nitrile_and_imine() {
        let mut b = MolBuilder::new();
        let c = b.atom(C, 3);
        let cn = b.atom(C, 0);
        let n = b.atom(N, 0);
        b.bond(c, cn, Single);
        b.bond(cn, n, Triple);
        assert_eq!(b.types(), ["C.sp3", "C.sp", "N.sp1"]);

        let mut b = MolBuilder::new();
        let c = b.atom(C, 2);
        let n = b.atom(N, 1);
        b.bond(c, n, Double);
        assert_eq!(b.type_of(n), "N.sp2");
    }

    #[test]
    fn acetamide_nitrogen() {
        let mut b = MolBuilder::new();
        let me = b.atom(C, 3);
        let c = b.atom(C, 0);
        let o = b.atom(O, 0);
        let n = b.atom(N, 2);
        b.bond(me, c, Single);
        b.bond(c, o, Double);
        b.bond(c, n, Single);
        assert_eq!(b.type_of(n), "N.amide");
    }

    #[test]
    fn thioamide_nitrogen() {
        let mut b = MolBuilder::new();
        let c = b.atom(C, 1);
        let s = b.atom(S, 0);
        let n = b.atom(N, 2);
        b.bond(c, s, Double);
        b.bond(c, n, Single);
        assert_eq!(b.type_of(n), "N.thioamide");
    }

    #[test]
    fn nitro_group() {
        let mut b = MolBuilder::new();
        let c = b.atom(C, 3);
        let n = b.atom(N, 0);
        let o1 = b.atom(O, 0);
        let o2 = b.atom(O, 0);
        b.bond(c, n, Single);
        b.bond(n, o1, Double);
        b.bond(n, o2, Double);
        assert_eq!(b.type_of(n), "N.nitro");
    }

    #[test]
    fn charge_separated_nitro() {
        let mut b = MolBuilder::new();
        let c = b.atom(C, 3);
        let n = b.charged(N, 0, 1);
        let o1 = b.atom(O, 0);
        let o2 = b.charged(O, 0, -1);
        b.bond(c, n, Single);
        b.bond(n, o1, Double);
        b.bond(n, o2, Single);
        assert_eq!(b.types(), ["C.sp3", "N.plus.sp2", "O.sp2", "O.minus"]);
    }

    /// Kekulé pyrrole: N0 bonded to C1 and C4, C1=C2, C3=C4.
    fn pyrrole(n_h: u8) -> (MolBuilder, petgraph::graph::NodeIndex) {
        let mut b = MolBuilder::new();
        let n = b.atom(N, n_h);
        let c: Vec<_> = (0..4).map(|_| b.atom(C, 1)).collect();
        b.bond(n, c[0], Single);
        b.bond(c[0], c[1], Double);
        b.bond(c[1], c[2], Single);
        b.bond(c[2], c[3], Double);
        b.bond(c[3], n, Single);
        (b, n)
    }

    #[test]
    fn kekule_pyrrole_is_planar() {
        let (b, n) = pyrrole(1);
        assert_eq!(b.type_of(n), "N.planar3");
    }

    #[test]
    fn aromatic_pyridine_and_pyrrole() {
        let mut b = MolBuilder::new();
        let ring = b.aromatic_ring(&[N, C, C, C, C, C]);
        b.set_hydrogens(ring[0], Some(0));
        assert_eq!(b.type_of(ring[0]), "N.sp2");

        let mut b = MolBuilder::new();
        let ring = b.aromatic_ring(&[N, C, C, C, C]);
        b.set_hydrogens(ring[0], Some(1));
        assert_eq!(b.type_of(ring[0]), "N.planar3");

        // unknown hydrogen count, lone heteroatom: pyrrole-like guess
        b.set_hydrogens(ring[0], None);
        assert_eq!(b.type_of(ring[0]), "N.planar3");
    }

    #[test]
    fn imidazole_unknown_hydrogens_falls_back_to_sp2() {
        let mut b = MolBuilder::new();
        let ring = b.aromatic_ring(&[N, C, N, C, C]);
        b.set_hydrogens(ring[0], None);
        assert_eq!(b.type_of(ring[0]), "N.sp2");
    }

    #[test]
    fn explicit_sp2_on_ring_nitrogen() {
        let (mut b, n) = pyrrole(1);
        b.set_hybridization(n, Hybridization::SP2);
        assert_eq!(b.type_of(n), "N.planar3");
    }

    #[test]
    fn strict_mode_needs_explicit_hydrogens() {
        let mut b = MolBuilder::new();
        let n = b.atom(N, 3);
        assert_eq!(b.type_in(n, PerceptionMode::RequireNothing), "N.sp3");
        assert_eq!(b.type_in(n, PerceptionMode::RequireExplicitHydrogens), "X");

        let mut b = MolBuilder::new();
        let n = b.atom(N, 0);
        for _ in 0..3 {
            let h = b.atom(H, 0);
            b.bond(n, h, Single);
        }
        assert_eq!(b.type_in(n, PerceptionMode::RequireExplicitHydrogens), "N.sp3");
    }

    #[test]
    fn aminyl_radical() {
        let mut b = MolBuilder::new();
        let n = b.atom(N, 2);
        b.set_radicals(n, 1);
        assert_eq!(b.type_of(n), "N.sp3.radical");
    }
}
