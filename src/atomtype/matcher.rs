use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use petgraph::graph::NodeIndex;
use tracing::trace;

use super::catalog::{AtomType, AtomTypeCatalog};
use super::classify::{self, Classifier};
use super::error::AtomTypeError;
use super::perception::Perception;
use super::PerceptionMode;
use crate::element::Element;
use crate::mol::Mol;
use crate::rings::RingMembership;
use crate::traits::{TypeableAtom, TypeableBond};

/// Assigns catalog prototypes to the atoms of `Mol<A, B>` graphs.
///
/// A matcher is immutable after construction and can be shared between
/// threads; all per-molecule state lives in a [`Perception`] built for each
/// call.
pub struct AtomTypeMatcher<A, B> {
    catalog: Arc<AtomTypeCatalog>,
    mode: PerceptionMode,
    classifiers: HashMap<Element, Classifier>,
    _payload: PhantomData<fn() -> (A, B)>,
}

impl<A, B> fmt::Debug for AtomTypeMatcher<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomTypeMatcher")
            .field("mode", &self.mode)
            .field("catalog_len", &self.catalog.len())
            .field("classifiers", &self.classifiers.len())
            .finish()
    }
}

impl<A, B> AtomTypeMatcher<A, B>
where
    A: TypeableAtom,
    B: TypeableBond,
{
    pub fn new(catalog: Arc<AtomTypeCatalog>, mode: PerceptionMode) -> Self {
        Self {
            catalog,
            mode,
            classifiers: classify::by_element(),
            _payload: PhantomData,
        }
    }

    pub fn with_builtin_catalog(mode: PerceptionMode) -> Self {
        Self::new(AtomTypeCatalog::builtin(), mode)
    }

    pub fn mode(&self) -> PerceptionMode {
        self.mode
    }

    pub fn catalog(&self) -> &AtomTypeCatalog {
        &self.catalog
    }

    /// One prototype per atom, in atom order.
    ///
    /// Unmatched atoms get the wildcard. The only error is a classifier
    /// asking for an id the catalog does not define.
    pub fn find_matching_atom_types(&self, mol: &Mol<A, B>) -> Result<Vec<&AtomType>, AtomTypeError> {
        let p = Perception::new(mol, &self.catalog, self.mode, None);
        self.match_all(&p)
    }

    /// Like [`find_matching_atom_types`](Self::find_matching_atom_types) with
    /// a caller-supplied ring membership index for the same graph.
    pub fn find_matching_atom_types_with_rings(
        &self,
        mol: &Mol<A, B>,
        rings: &dyn RingMembership,
    ) -> Result<Vec<&AtomType>, AtomTypeError> {
        let p = Perception::new(mol, &self.catalog, self.mode, Some(rings));
        self.match_all(&p)
    }

    /// Types one atom. `atom` must be a node of `mol`; an index past the
    /// last atom is an [`AtomTypeError::AtomOutOfRange`].
    pub fn find_matching_atom_type(
        &self,
        mol: &Mol<A, B>,
        atom: NodeIndex,
    ) -> Result<&AtomType, AtomTypeError> {
        check_in_range(mol, atom)?;
        let p = Perception::new(mol, &self.catalog, self.mode, None);
        self.match_one(&p, atom)
    }

    pub fn find_matching_atom_type_with_rings(
        &self,
        mol: &Mol<A, B>,
        atom: NodeIndex,
        rings: &dyn RingMembership,
    ) -> Result<&AtomType, AtomTypeError> {
        check_in_range(mol, atom)?;
        let p = Perception::new(mol, &self.catalog, self.mode, Some(rings));
        self.match_one(&p, atom)
    }

    fn match_all<'c>(&'c self, p: &Perception<'_, 'c, A, B>) -> Result<Vec<&'c AtomType>, AtomTypeError> {
        p.mol().atoms().map(|idx| self.match_one(p, idx)).collect()
    }

    fn match_one<'c>(
        &'c self,
        p: &Perception<'_, 'c, A, B>,
        idx: NodeIndex,
    ) -> Result<&'c AtomType, AtomTypeError> {
        let element = p.element(idx);
        let matched = match element {
            // pseudo atoms and unknown atomic numbers
            None => None,
            Some(element) => match self.classifiers.get(&element) {
                Some(classifier) => classifier.classify(p, idx)?,
                None => classify::fallback(p, idx)?,
            },
        };
        match matched {
            Some(atom_type) => Ok(atom_type),
            None => {
                trace!(atom = idx.index(), element = ?element, "no atom type matched");
                self.catalog.wildcard()
            }
        }
    }
}

fn check_in_range<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> Result<(), AtomTypeError> {
    let atom_count = mol.atom_count();
    if atom.index() < atom_count {
        Ok(())
    } else {
        Err(AtomTypeError::AtomOutOfRange {
            index: atom.index(),
            atom_count,
        })
    }
}
