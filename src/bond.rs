use serde::{Deserialize, Serialize};

/// Bond multiplicity.
///
/// `SingleOrDouble` is an unresolved order, typically a delocalized bond in
/// an aromatic ring that has not been kekulized. It has no rank and takes no
/// part in maximum-order scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
    Quadruple,
    SingleOrDouble,
}

impl BondOrder {
    /// Ordinal used for comparisons: single < double < triple < quadruple.
    pub fn rank(self) -> Option<u8> {
        match self {
            BondOrder::Single => Some(1),
            BondOrder::Double => Some(2),
            BondOrder::Triple => Some(3),
            BondOrder::Quadruple => Some(4),
            BondOrder::SingleOrDouble => None,
        }
    }

    /// Contribution to a bond-order sum. An unresolved bond counts as its
    /// guaranteed minimum of one.
    pub fn electrons(self) -> u8 {
        self.rank().unwrap_or(1)
    }

    pub fn is_higher_than(self, other: BondOrder) -> bool {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => a > b,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bond {
    pub order: BondOrder,
    pub is_aromatic: bool,
}

impl Bond {
    pub fn new(order: BondOrder) -> Self {
        Self {
            order,
            is_aromatic: false,
        }
    }

    pub fn aromatic(order: BondOrder) -> Self {
        Self {
            order,
            is_aromatic: true,
        }
    }
}

impl crate::traits::HasBondOrder for Bond {
    fn bond_order(&self) -> BondOrder {
        self.order
    }
}

impl crate::traits::HasAromaticity for Bond {
    fn is_aromatic(&self) -> bool {
        self.is_aromatic
    }
}
