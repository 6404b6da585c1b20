//! Per-element decision procedures.
//!
//! Each classifier walks the same priority order: radical state, then an
//! externally supplied hybridization on an uncharged atom, then formal charge,
//! then plain connectivity. Every leaf proposes one catalog id through
//! [`Perception::propose`]; `Ok(None)` means nothing fitted and the matcher
//! falls back to the wildcard.

/// Proposes `$id` and returns it from the enclosing classifier when the
/// validator accepts it; otherwise execution continues with the next leaf.
macro_rules! propose {
    ($p:expr, $idx:expr, $id:expr) => {
        if let Some(t) = $p.propose($idx, $id)? {
            return Ok(Some(t));
        }
    };
}

mod carbon;
mod coordination;
mod generic;
mod group15;
mod group16;
mod halogen;
mod hydrogen;
mod main_group;
mod metal;
mod nitrogen;
mod oxygen;

#[cfg(test)]
mod testing;

use std::collections::HashMap;

use petgraph::graph::NodeIndex;

use super::perception::{Perceived, Perception};
use crate::element::Element;
use crate::traits::{TypeableAtom, TypeableBond};
use coordination::Rule;

/// The decision procedure registered for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Classifier {
    Carbon,
    Hydrogen,
    Nitrogen,
    Oxygen,
    Sulfur,
    Selenium,
    Phosphorus,
    Arsenic,
    Silicon,
    Boron,
    Chlorine,
    Bromine,
    /// Elements typed purely by formal charge and coordination number.
    Coordination(&'static [Rule]),
}

impl Classifier {
    pub(crate) fn classify<'c, A, B>(
        self,
        p: &Perception<'_, 'c, A, B>,
        idx: NodeIndex,
    ) -> Perceived<'c>
    where
        A: TypeableAtom,
        B: TypeableBond,
    {
        match self {
            Classifier::Carbon => carbon::perceive(p, idx),
            Classifier::Hydrogen => hydrogen::perceive(p, idx),
            Classifier::Nitrogen => nitrogen::perceive(p, idx),
            Classifier::Oxygen => oxygen::perceive(p, idx),
            Classifier::Sulfur => group16::sulfur(p, idx),
            Classifier::Selenium => group16::selenium(p, idx),
            Classifier::Phosphorus => group15::phosphorus(p, idx),
            Classifier::Arsenic => group15::arsenic(p, idx),
            Classifier::Silicon => main_group::silicon(p, idx),
            Classifier::Boron => main_group::boron(p, idx),
            Classifier::Chlorine => halogen::perceive(p, idx, &halogen::CHLORINE),
            Classifier::Bromine => halogen::perceive(p, idx, &halogen::BROMINE),
            Classifier::Coordination(rules) => coordination::perceive(p, idx, rules),
        }
    }
}

/// Element → classifier. Elements absent here go to [`fallback`].
pub(crate) fn by_element() -> HashMap<Element, Classifier> {
    use Element::*;

    let mut map = HashMap::from([
        (C, Classifier::Carbon),
        (H, Classifier::Hydrogen),
        (N, Classifier::Nitrogen),
        (O, Classifier::Oxygen),
        (S, Classifier::Sulfur),
        (Se, Classifier::Selenium),
        (P, Classifier::Phosphorus),
        (As, Classifier::Arsenic),
        (Si, Classifier::Silicon),
        (B, Classifier::Boron),
        (Cl, Classifier::Chlorine),
        (Br, Classifier::Bromine),
    ]);
    for &(element, rules) in main_group::TABLES.iter().chain(metal::TABLES) {
        map.insert(element, Classifier::Coordination(rules));
    }
    map
}

/// Last resort for elements without a registered classifier.
pub(crate) fn fallback<'c, A, B>(p: &Perception<'_, 'c, A, B>, idx: NodeIndex) -> Perceived<'c>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    generic::perceive(p, idx)
}
