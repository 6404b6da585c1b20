//! Atom type perception.
//!
//! Every atom of a molecule is assigned one prototype from an
//! [`AtomTypeCatalog`] by looking at its element, charge, hybridization,
//! bonds, ring membership and radical state. The element picks a classifier;
//! the classifier proposes candidates in priority order; the first candidate
//! that passes [`accept::is_acceptable`] is the atom's type. An atom nothing
//! fits gets the wildcard prototype `X`.
//!
//! ```
//! use atomtyper::{Atom, Bond, BondOrder, Element, Mol};
//! use atomtyper::atomtype::{AtomTypeMatcher, PerceptionMode};
//!
//! // formaldehyde
//! let mut mol = Mol::new();
//! let c = mol.add_atom(Atom { hydrogen_count: Some(2), ..Atom::new(Element::C) });
//! let o = mol.add_atom(Atom { hydrogen_count: Some(0), ..Atom::new(Element::O) });
//! mol.add_bond(c, o, Bond::new(BondOrder::Double));
//!
//! let matcher = AtomTypeMatcher::with_builtin_catalog(PerceptionMode::RequireNothing);
//! let types = matcher.find_matching_atom_types(&mol).unwrap();
//! assert_eq!(types[0].id, "C.sp2");
//! assert_eq!(types[1].id, "O.sp2");
//! ```

pub mod accept;
mod catalog;
mod classify;
mod error;
mod matcher;
mod perception;
mod registry;

use serde::{Deserialize, Serialize};

pub use catalog::{AtomType, AtomTypeCatalog, WILDCARD};
pub use error::AtomTypeError;
pub use matcher::AtomTypeMatcher;
pub use perception::{ConnectedBonds, Perceived, Perception};
pub use registry::{matcher, MatcherRegistry};

use crate::atom::Atom;
use crate::bond::Bond;
use crate::mol::Mol;

/// How strictly neighbour counts must match a prototype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerceptionMode {
    /// Implicit hydrogen counts are trusted and fill the gap up to the
    /// prototype's neighbour count.
    #[default]
    RequireNothing,
    /// Every hydrogen is an explicit atom; the connected-bond count must equal
    /// the prototype's neighbour count.
    RequireExplicitHydrogens,
}

/// Types every atom and fills in unknown hybridization and formal charge
/// from the matched prototype. Known values are left alone, as are atoms that
/// only matched the wildcard.
///
/// Returns the matched type ids in atom order.
pub fn perceive_and_configure(
    mol: &mut Mol<Atom, Bond>,
    mode: PerceptionMode,
) -> Result<Vec<String>, AtomTypeError> {
    let matcher = registry::matcher::<Atom, Bond>(mode);
    let matched: Vec<AtomType> = matcher
        .find_matching_atom_types(mol)?
        .into_iter()
        .cloned()
        .collect();

    let atoms: Vec<_> = mol.atoms().collect();
    for (idx, atom_type) in atoms.into_iter().zip(&matched) {
        if atom_type.is_wildcard() {
            continue;
        }
        let atom = mol.atom_mut(idx);
        if atom.hybridization.is_none() {
            atom.hybridization = atom_type.hybridization;
        }
        if atom.formal_charge.is_none() {
            atom.formal_charge = Some(atom_type.formal_charge);
        }
    }

    Ok(matched.into_iter().map(|t| t.id).collect())
}
