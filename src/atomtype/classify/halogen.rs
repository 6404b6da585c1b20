use petgraph::graph::NodeIndex;

use crate::atomtype::perception::{Perceived, Perception};
use crate::bond::BondOrder;
use crate::traits::{TypeableAtom, TypeableBond};

/// Catalog ids for one halogen. Oxyanion centres exist only for the heavier
/// halogens.
pub(super) struct Halide {
    plain: &'static str,
    minus: &'static str,
    plus: &'static str,
    radical: Option<&'static str>,
    /// Trivalent centre with all single bonds (e.g. ICl3).
    three: Option<&'static str>,
    /// XO3 centre: three connections, two of them double.
    ate: Option<&'static str>,
    /// XO4 centre: four connections, three of them double.
    perate: Option<&'static str>,
}

pub(super) const FLUORINE: Halide = Halide {
    plain: "F",
    minus: "F.minus",
    plus: "F.plus",
    radical: Some("F.radical"),
    three: None,
    ate: None,
    perate: None,
};

pub(super) const CHLORINE: Halide = Halide {
    plain: "Cl",
    minus: "Cl.minus",
    plus: "Cl.plus",
    radical: Some("Cl.radical"),
    three: None,
    ate: Some("Cl.chlorate"),
    perate: Some("Cl.perchlorate"),
};

pub(super) const BROMINE: Halide = Halide {
    plain: "Br",
    minus: "Br.minus",
    plus: "Br.plus",
    radical: Some("Br.radical"),
    three: None,
    ate: Some("Br.3"),
    perate: None,
};

pub(super) const IODINE: Halide = Halide {
    plain: "I",
    minus: "I.minus",
    plus: "I.plus",
    radical: None,
    three: Some("I.3"),
    ate: Some("I.5"),
    perate: None,
};

pub(super) fn perceive<'c, A, B>(
    p: &Perception<'_, 'c, A, B>,
    idx: NodeIndex,
    ids: &Halide,
) -> Perceived<'c>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let degree = p.degree(idx);

    if p.is_radical(idx) {
        return match ids.radical {
            Some(id) if degree == 0 => p.propose(idx, id),
            _ => Ok(None),
        };
    }

    match p.charge(idx) {
        Some(-1) if degree == 0 => p.propose(idx, ids.minus),
        Some(1) if degree <= 2 && !p.max_bond_order(idx).is_higher_than(BondOrder::Double) => {
            p.propose(idx, ids.plus)
        }
        Some(0) | None => match degree {
            0 | 1 => p.propose(idx, ids.plain),
            3 => {
                let doubles = p.double_bond_count(idx, None);
                match (doubles, ids.three, ids.ate) {
                    (0, Some(id), _) => p.propose(idx, id),
                    (2, _, Some(id)) => p.propose(idx, id),
                    _ => Ok(None),
                }
            }
            4 => match ids.perate {
                Some(id) if p.double_bond_count(idx, None) == 3 => p.propose(idx, id),
                _ => Ok(None),
            },
            _ => Ok(None),
        },
        _ => Ok(None),
    }
}
