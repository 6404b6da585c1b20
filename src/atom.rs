use crate::element::Element;
use crate::hybridization::Hybridization;

/// Default atom type for a molecular graph node.
///
/// Optional fields are tri-state: `None` means "not specified", which atom
/// type perception treats differently from a specified zero or a specified
/// hybridization.
///
/// # Examples
///
/// ```
/// use atomtyper::{Atom, Element};
///
/// let carbon = Atom {
///     formal_charge: Some(0),
///     hydrogen_count: Some(3),
///     ..Atom::new(Element::C)
/// };
/// assert_eq!(carbon.atomic_num, 6);
/// assert_eq!(carbon.hybridization, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Atom {
    /// Atomic number. `0` is a pseudo atom.
    pub atomic_num: u8,
    pub formal_charge: Option<i8>,
    /// Externally supplied hybridization, if any.
    pub hybridization: Option<Hybridization>,
    /// Number of implicit hydrogens. These are not graph nodes.
    pub hydrogen_count: Option<u8>,
    pub is_aromatic: bool,
    /// Ring membership perceived upstream. `false` means "not known to be in
    /// a ring", so perception still consults the ring search.
    pub in_ring: bool,
    /// Unpaired electrons localized on this atom.
    pub radical_electrons: u8,
}

impl Atom {
    pub fn new(element: Element) -> Self {
        Self {
            atomic_num: element.atomic_num(),
            ..Self::default()
        }
    }

    /// A placeholder atom with no element.
    pub fn pseudo() -> Self {
        Self::default()
    }

    pub fn element(&self) -> Option<Element> {
        Element::from_atomic_num(self.atomic_num)
    }

    pub fn is_pseudo(&self) -> bool {
        self.atomic_num == 0
    }
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> Option<i8> {
        self.formal_charge
    }
}

impl crate::traits::HasHybridization for Atom {
    fn hybridization(&self) -> Option<Hybridization> {
        self.hybridization
    }
}

impl crate::traits::HasHydrogenCount for Atom {
    fn hydrogen_count(&self) -> Option<u8> {
        self.hydrogen_count
    }
}

impl crate::traits::HasAromaticity for Atom {
    fn is_aromatic(&self) -> bool {
        self.is_aromatic
    }
}

impl crate::traits::HasRingFlag for Atom {
    fn in_ring(&self) -> bool {
        self.in_ring
    }
}

impl crate::traits::HasRadicalElectrons for Atom {
    fn radical_electrons(&self) -> u8 {
        self.radical_electrons
    }
}
