//! Atom type perception for molecular graphs.
//!
//! A [`Mol`] is a petgraph-backed undirected graph of atoms and bonds. The
//! [`atomtype`] module assigns every atom a named prototype (`"C.sp3"`,
//! `"N.planar3"`, `"O.minus.co2"`, ...) from an [`AtomTypeCatalog`] by
//! looking at its element, charge, hybridization, bonding pattern, ring
//! membership and radical state.
//!
//! The engine is generic over atom and bond payloads: anything implementing
//! [`TypeableAtom`] and [`TypeableBond`] can be typed. [`Atom`] and [`Bond`]
//! are the default payloads.

pub mod atom;
pub mod atomtype;
pub mod bond;
pub mod element;
pub mod hybridization;
pub mod mol;
pub mod rings;
pub mod traits;

pub use atom::Atom;
pub use atomtype::{
    matcher, perceive_and_configure, AtomType, AtomTypeCatalog, AtomTypeError, AtomTypeMatcher,
    MatcherRegistry, PerceptionMode,
};
pub use bond::{Bond, BondOrder};
pub use element::Element;
pub use hybridization::Hybridization;
pub use mol::Mol;
pub use rings::{RingMembership, RingSearch};
pub use traits::{
    HasAromaticity, HasAtomicNum, HasBondOrder, HasFormalCharge, HasHybridization,
    HasHydrogenCount, HasRadicalElectrons, HasRingFlag, TypeableAtom, TypeableBond,
};
