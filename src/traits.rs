use crate::bond::BondOrder;
use crate::hybridization::Hybridization;

/// Atomic number; `0` marks a pseudo atom (R group, attachment point, dummy).
pub trait HasAtomicNum {
    fn atomic_num(&self) -> u8;
}

/// `None` when the charge was never specified. Distinct from a known zero.
pub trait HasFormalCharge {
    fn formal_charge(&self) -> Option<i8>;
}

pub trait HasHybridization {
    fn hybridization(&self) -> Option<Hybridization>;
}

/// Implicit (suppressed) hydrogen count, `None` when unknown.
pub trait HasHydrogenCount {
    fn hydrogen_count(&self) -> Option<u8>;
}

pub trait HasAromaticity {
    fn is_aromatic(&self) -> bool;
}

pub trait HasRingFlag {
    fn in_ring(&self) -> bool;
}

pub trait HasRadicalElectrons {
    fn radical_electrons(&self) -> u8;
}

pub trait HasBondOrder {
    fn bond_order(&self) -> BondOrder;
}

/// Everything atom type perception reads from an atom.
pub trait TypeableAtom:
    HasAtomicNum
    + HasFormalCharge
    + HasHybridization
    + HasHydrogenCount
    + HasAromaticity
    + HasRingFlag
    + HasRadicalElectrons
{
}

impl<T> TypeableAtom for T where
    T: HasAtomicNum
        + HasFormalCharge
        + HasHybridization
        + HasHydrogenCount
        + HasAromaticity
        + HasRingFlag
        + HasRadicalElectrons
{
}

/// Everything atom type perception reads from a bond.
pub trait TypeableBond: HasBondOrder + HasAromaticity {}

impl<T> TypeableBond for T where T: HasBondOrder + HasAromaticity {}
