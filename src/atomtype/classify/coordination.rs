use petgraph::graph::NodeIndex;

use crate::atomtype::perception::{Perceived, Perception};
use crate::traits::{TypeableAtom, TypeableBond};

/// One row of a charge/coordination table: atoms with `charge` and a
/// connected-bond count in `min_degree..=max_degree` are proposed `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rule {
    pub(super) charge: i8,
    pub(super) min_degree: usize,
    pub(super) max_degree: usize,
    pub(super) id: &'static str,
}

impl Rule {
    fn applies(&self, charge_ok: bool, degree: usize) -> bool {
        charge_ok && (self.min_degree..=self.max_degree).contains(&degree)
    }
}

pub(crate) const fn exactly(charge: i8, degree: usize, id: &'static str) -> Rule {
    Rule {
        charge,
        min_degree: degree,
        max_degree: degree,
        id,
    }
}

pub(crate) const fn up_to(charge: i8, degree: usize, id: &'static str) -> Rule {
    Rule {
        charge,
        min_degree: 0,
        max_degree: degree,
        id,
    }
}

/// Rows are tried in order; a row whose candidate the validator rejects
/// does not stop the scan. Radicals are not typed by tables.
pub(super) fn perceive<'c, A, B>(
    p: &Perception<'_, 'c, A, B>,
    idx: NodeIndex,
    rules: &[Rule],
) -> Perceived<'c>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    if p.is_radical(idx) {
        return Ok(None);
    }
    let degree = p.degree(idx);
    for rule in rules {
        if rule.applies(p.charge_is(idx, rule.charge), degree) {
            propose!(p, idx, rule.id);
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use crate::atomtype::classify::testing::*;
    use super::*;
    use crate::bond::BondOrder::*;
    use crate::element::Element::*;

    #[test]
    fn degree_window() {
        let r = up_to(0, 2, "Zn");
        assert!(r.applies(true, 0));
        assert!(r.applies(true, 2));
        assert!(!r.applies(true, 3));
        assert!(!r.applies(false, 1));
        let r = exactly(2, 0, "Zn.2plus");
        assert!(r.applies(true, 0));
        assert!(!r.applies(true, 1));
    }

    #[test]
    fn metal_ions() {
        let mut b = MolBuilder::new();
        let zn = b.charged(Zn, 0, 2);
        let fe = b.charged(Fe, 0, 3);
        let na = b.charged(Na, 0, 1);
        assert_eq!(b.type_of(zn), "Zn.2plus");
        assert_eq!(b.type_of(fe), "Fe.3plus");
        assert_eq!(b.type_of(na), "Na.plus");
    }

    #[test]
    fn unknown_charge_counts_as_neutral() {
        let mut b = MolBuilder::new();
        let cu = b.atom(Cu, 0);
        b.clear_charge(cu);
        assert_eq!(b.type_of(cu), "Cu.metallic");
    }

    #[test]
    fn coordinated_metal() {
        // dichlorozinc
        let mut b = MolBuilder::new();
        let zn = b.atom(Zn, 0);
        for _ in 0..2 {
            let cl = b.atom(Cl, 0);
            b.bond(zn, cl, Single);
        }
        assert_eq!(b.type_of(zn), "Zn");
    }

    #[test]
    fn radical_metal_is_unsupported() {
        let mut b = MolBuilder::new();
        let fe = b.atom(Fe, 0);
        b.set_radicals(fe, 1);
        assert_eq!(b.type_of(fe), "X");
    }

    #[test]
    fn exotic_coordination_is_unsupported() {
        let mut b = MolBuilder::new();
        let au = b.atom(Au, 0);
        for _ in 0..3 {
            let c = b.atom(C, 3);
            b.bond(au, c, Single);
        }
        assert_eq!(b.type_of(au), "X");
    }
}
