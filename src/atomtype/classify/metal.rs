//! Alkali, alkaline earth, transition and f-block metals.
//!
//! These are typed purely from formal charge and coordination number. Any
//! combination not listed (radicals, unusual oxidation states, odd
//! coordination numbers) is left unmatched.

use super::coordination::{exactly, up_to, Rule};
use crate::element::Element;

pub(super) static TABLES: &[(Element, &[Rule])] = &[
    (Element::Li, LI),
    (Element::Na, NA),
    (Element::K, K),
    (Element::Rb, RB),
    (Element::Mg, MG),
    (Element::Ca, CA),
    (Element::Sr, SR),
    (Element::Ba, BA),
    (Element::Ra, RA),
    (Element::Ti, TI),
    (Element::V, V),
    (Element::Cr, CR),
    (Element::Mn, MN),
    (Element::Fe, FE),
    (Element::Co, CO),
    (Element::Ni, NI),
    (Element::Cu, CU),
    (Element::Zn, ZN),
    (Element::Mo, MO),
    (Element::Ru, RU),
    (Element::Ag, AG),
    (Element::Cd, CD),
    (Element::Pt, PT),
    (Element::Au, AU),
    (Element::Hg, HG),
    (Element::Gd, GD),
    (Element::Th, TH),
    (Element::Pu, PU),
];

const LI: &[Rule] = &[
    exactly(0, 1, "Li"),
    exactly(1, 0, "Li.plus"),
    exactly(0, 0, "Li.neutral"),
];

const NA: &[Rule] = &[
    exactly(1, 0, "Na.plus"),
    exactly(0, 1, "Na"),
    exactly(0, 0, "Na.neutral"),
];

const K: &[Rule] = &[
    exactly(1, 0, "K.plus"),
    exactly(0, 1, "K.neutral"),
    exactly(0, 0, "K.metallic"),
];

const RB: &[Rule] = &[exactly(1, 0, "Rb.plus"), exactly(0, 0, "Rb.neutral")];

const MG: &[Rule] = &[
    exactly(0, 4, "Mg.neutral"),
    exactly(0, 2, "Mg.neutral.2"),
    exactly(0, 1, "Mg.neutral.1"),
    exactly(0, 0, "Mg.neutral"),
    exactly(2, 0, "Mg.2plus"),
];

const CA: &[Rule] = &[
    exactly(2, 0, "Ca.2plus"),
    exactly(0, 2, "Ca.2"),
    exactly(0, 1, "Ca.1"),
];

const SR: &[Rule] = &[exactly(2, 0, "Sr.2plus")];

const BA: &[Rule] = &[exactly(2, 0, "Ba.2plus")];

const RA: &[Rule] = &[exactly(0, 0, "Ra.neutral")];

const TI: &[Rule] = &[
    exactly(-3, 6, "Ti.3minus"),
    exactly(0, 4, "Ti.sp3"),
    exactly(0, 2, "Ti.2"),
];

const V: &[Rule] = &[exactly(3, 0, "V.3plus"), exactly(-3, 6, "V.3minus")];

const CR: &[Rule] = &[
    exactly(0, 6, "Cr"),
    exactly(0, 4, "Cr.4"),
    exactly(6, 0, "Cr.6plus"),
    exactly(0, 0, "Cr.neutral"),
    exactly(3, 0, "Cr.3plus"),
];

const MN: &[Rule] = &[
    exactly(0, 2, "Mn.2"),
    exactly(0, 0, "Mn.metallic"),
    exactly(2, 0, "Mn.2plus"),
    exactly(3, 0, "Mn.3plus"),
];

const FE: &[Rule] = &[
    exactly(0, 0, "Fe.metallic"),
    exactly(0, 2, "Fe.2"),
    exactly(0, 3, "Fe.3"),
    exactly(0, 4, "Fe.4"),
    exactly(0, 5, "Fe.5"),
    exactly(0, 6, "Fe.6"),
    exactly(2, 0, "Fe.2plus"),
    exactly(1, 2, "Fe.plus"),
    exactly(3, 0, "Fe.3plus"),
    exactly(-2, 6, "Fe.2minus"),
    exactly(-3, 6, "Fe.3minus"),
    exactly(-4, 6, "Fe.4minus"),
];

const CO: &[Rule] = &[
    exactly(2, 0, "Co.2plus"),
    exactly(3, 0, "Co.3plus"),
    exactly(0, 0, "Co.metallic"),
    exactly(0, 1, "Co.1"),
    exactly(0, 2, "Co.2"),
    exactly(0, 4, "Co.4"),
    exactly(0, 6, "Co.6"),
    exactly(1, 0, "Co.plus"),
    exactly(1, 1, "Co.plus.1"),
    exactly(1, 2, "Co.plus.2"),
    exactly(1, 4, "Co.plus.4"),
    exactly(1, 5, "Co.plus.5"),
    exactly(1, 6, "Co.plus.6"),
];

const NI: &[Rule] = &[
    exactly(2, 0, "Ni.2plus"),
    exactly(0, 2, "Ni"),
    exactly(0, 0, "Ni.metallic"),
    exactly(1, 1, "Ni.plus"),
];

const CU: &[Rule] = &[
    exactly(2, 0, "Cu.2plus"),
    exactly(0, 1, "Cu.1"),
    exactly(0, 0, "Cu.metallic"),
    exactly(1, 0, "Cu.plus"),
];

const ZN: &[Rule] = &[
    exactly(0, 0, "Zn.metallic"),
    exactly(2, 0, "Zn.2plus"),
    exactly(0, 1, "Zn.1"),
    exactly(0, 2, "Zn"),
];

const MO: &[Rule] = &[exactly(0, 4, "Mo.4"), exactly(0, 0, "Mo.metallic")];

const RU: &[Rule] = &[
    exactly(0, 6, "Ru.6"),
    exactly(-2, 6, "Ru.2minus.6"),
    exactly(-3, 6, "Ru.3minus.6"),
];

const AG: &[Rule] = &[
    exactly(0, 0, "Ag.neutral"),
    exactly(1, 0, "Ag.plus"),
    exactly(0, 1, "Ag.1"),
];

const CD: &[Rule] = &[
    exactly(2, 0, "Cd.2plus"),
    exactly(0, 0, "Cd.metallic"),
    exactly(0, 2, "Cd.2"),
];

const PT: &[Rule] = &[
    exactly(2, 4, "Pt.2plus.4"),
    exactly(0, 2, "Pt.2"),
    exactly(0, 4, "Pt.4"),
    exactly(0, 6, "Pt.6"),
    exactly(2, 0, "Pt.2plus"),
];

const AU: &[Rule] = &[exactly(0, 1, "Au.1")];

const HG: &[Rule] = &[
    exactly(-1, 1, "Hg.minus"),
    exactly(2, 0, "Hg.2plus"),
    up_to(1, 1, "Hg.plus"),
    exactly(0, 2, "Hg.2"),
    exactly(0, 1, "Hg.1"),
    exactly(0, 0, "Hg.metallic"),
];

const GD: &[Rule] = &[exactly(3, 0, "Gd.3plus")];

const TH: &[Rule] = &[exactly(0, 0, "Th")];

const PU: &[Rule] = &[exactly(0, 0, "Pu")];

#[cfg(test)]
mod tests {
    use crate::atomtype::classify::testing::*;
    use super::*;
    use crate::atomtype::AtomTypeCatalog;
    use crate::bond::BondOrder::*;
    use crate::element::Element::*;

    #[test]
    fn every_table_id_is_in_the_catalog() {
        let catalog = AtomTypeCatalog::builtin();
        for (element, rules) in TABLES {
            for rule in rules.iter() {
                let t = catalog.get(rule.id).unwrap();
                assert_eq!(t.symbol, element.symbol(), "{}", rule.id);
            }
        }
    }

    #[test]
    fn ferrocene_like_iron() {
        let mut b = MolBuilder::new();
        let fe = b.atom(Fe, 0);
        for _ in 0..6 {
            let c = b.atom(C, 1);
            b.bond(fe, c, Single);
        }
        assert_eq!(b.type_of(fe), "Fe.6");
    }

    #[test]
    fn hexacyanoferrate() {
        let mut b = MolBuilder::new();
        let fe = b.charged(Fe, 0, -4);
        for _ in 0..6 {
            let c = b.atom(C, 0);
            let n = b.atom(N, 0);
            b.bond(fe, c, Single);
            b.bond(c, n, Triple);
        }
        assert_eq!(b.type_of(fe), "Fe.4minus");
    }

    #[test]
    fn grignard_magnesium() {
        let mut b = MolBuilder::new();
        let mg = b.atom(Mg, 0);
        let c = b.atom(C, 3);
        let br = b.atom(Br, 0);
        b.bond(mg, c, Single);
        b.bond(mg, br, Single);
        assert_eq!(b.type_of(mg), "Mg.neutral.2");
        assert_eq!(b.type_of(c), "C.sp3");
    }

    #[test]
    fn mercury_cation_with_ligand() {
        let mut b = MolBuilder::new();
        let hg = b.charged(Hg, 0, 1);
        let c = b.atom(C, 3);
        b.bond(hg, c, Single);
        assert_eq!(b.type_of(hg), "Hg.plus");
    }
}
