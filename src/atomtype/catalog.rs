use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::AtomTypeError;
use crate::bond::BondOrder;
use crate::hybridization::Hybridization;

/// Identifier of the "no rule matched" prototype.
pub const WILDCARD: &str = "X";

/// A named prototype describing one class of chemically equivalent atoms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtomType {
    /// Catalog identifier, e.g. `"C.sp3"` or `"O.minus.co2"`.
    pub id: String,
    /// Element symbol; `"X"` for the wildcard.
    pub symbol: String,
    #[serde(default)]
    pub hybridization: Option<Hybridization>,
    /// Highest bond order any incident bond may have.
    pub max_bond_order: BondOrder,
    /// Ceiling on bond-order sum plus implicit hydrogens.
    pub valency: u8,
    #[serde(default)]
    pub formal_charge: i8,
    /// Total neighbour count (explicit plus implicit hydrogens).
    #[serde(rename = "neighbours")]
    pub formal_neighbour_count: u8,
    /// Required number of unpaired electrons, when the type prescribes one.
    #[serde(default)]
    pub single_electrons: Option<u8>,
}

impl AtomType {
    pub fn is_wildcard(&self) -> bool {
        self.id == WILDCARD
    }
}

/// Read-only table of atom type prototypes keyed by identifier.
#[derive(Debug, Clone)]
pub struct AtomTypeCatalog {
    types: Vec<AtomType>,
    by_id: HashMap<String, usize>,
}

static BUILTIN: OnceLock<Arc<AtomTypeCatalog>> = OnceLock::new();

impl AtomTypeCatalog {
    pub fn new(types: Vec<AtomType>) -> Result<Self, AtomTypeError> {
        let mut by_id = HashMap::with_capacity(types.len());
        for (i, t) in types.iter().enumerate() {
            if by_id.insert(t.id.clone(), i).is_some() {
                return Err(AtomTypeError::DuplicateAtomType(t.id.clone()));
            }
        }
        if !by_id.contains_key(WILDCARD) {
            return Err(AtomTypeError::MissingWildcard);
        }
        debug!(types = types.len(), "loaded atom type catalog");
        Ok(Self { types, by_id })
    }

    /// Parses a JSON array of prototype records.
    pub fn from_json(json: &str) -> Result<Self, AtomTypeError> {
        let types: Vec<AtomType> = serde_json::from_str(json)?;
        Self::new(types)
    }

    /// The bundled catalog, parsed on first use and shared afterwards.
    pub fn builtin() -> Arc<AtomTypeCatalog> {
        BUILTIN
            .get_or_init(|| {
                let json = include_str!("../../data/atom_types.json");
                let catalog = Self::from_json(json)
                    .unwrap_or_else(|e| panic!("bundled atom type catalog is invalid: {e}"));
                Arc::new(catalog)
            })
            .clone()
    }

    pub fn get(&self, id: &str) -> Result<&AtomType, AtomTypeError> {
        self.by_id
            .get(id)
            .map(|&i| &self.types[i])
            .ok_or_else(|| AtomTypeError::UnknownAtomType(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn wildcard(&self) -> Result<&AtomType, AtomTypeError> {
        self.get(WILDCARD)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// All prototypes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &AtomType> + '_ {
        self.types.iter()
    }

    /// Prototypes sharing an element symbol, in declaration order.
    pub fn for_symbol<'a>(&'a self, symbol: &'a str) -> impl Iterator<Item = &'a AtomType> + 'a {
        self.types.iter().filter(move |t| t.symbol == symbol)
    }
}
