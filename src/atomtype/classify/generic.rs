//! Elements without a dedicated entry: the remaining halogens, common salt
//! cations, a few organometallic centres and the noble gases. Everything
//! else is unmatched.

use petgraph::graph::NodeIndex;

use crate::atomtype::perception::{Perceived, Perception};
use super::coordination::{self, exactly, up_to, Rule};
use super::halogen;
use crate::element::Element;
use crate::traits::{TypeableAtom, TypeableBond};

const CS: &[Rule] = &[exactly(1, 0, "Cs.plus")];

const SN: &[Rule] = &[up_to(0, 4, "Sn.sp3")];
const SC: &[Rule] = &[exactly(-3, 6, "Sc.3minus")];
const PO: &[Rule] = &[exactly(0, 2, "Po")];
const W: &[Rule] = &[exactly(0, 0, "W.metallic")];

const HE: &[Rule] = &[exactly(0, 0, "He")];
const NE: &[Rule] = &[exactly(0, 0, "Ne")];
const AR: &[Rule] = &[exactly(0, 0, "Ar")];
const KR: &[Rule] = &[exactly(0, 0, "Kr")];
const XE: &[Rule] = &[exactly(0, 0, "Xe")];
const RN: &[Rule] = &[exactly(0, 0, "Rn")];

pub(super) fn perceive<'c, A, B>(p: &Perception<'_, 'c, A, B>, idx: NodeIndex) -> Perceived<'c>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    let Some(element) = p.element(idx) else {
        return Ok(None);
    };
    let rules = match element {
        Element::F => return halogen::perceive(p, idx, &halogen::FLUORINE),
        Element::I => return halogen::perceive(p, idx, &halogen::IODINE),
        Element::Cs => CS,
        Element::Sn => SN,
        Element::Sc => SC,
        Element::Po => PO,
        Element::W => W,
        Element::He => HE,
        Element::Ne => NE,
        Element::Ar => AR,
        Element::Kr => KR,
        Element::Xe => XE,
        Element::Rn => RN,
        _ => return Ok(None),
    };
    coordination::perceive(p, idx, rules)
}
