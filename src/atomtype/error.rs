use thiserror::Error;

/// Errors raised while loading a catalog or perceiving atom types.
///
/// An atom that matches no prototype is *not* an error; it receives the
/// wildcard type. These variants all indicate a defect in the catalog or
/// in the rules that reference it.
#[derive(Debug, Error)]
pub enum AtomTypeError {
    /// A classifier asked for a prototype the catalog does not define.
    #[error("atom type '{0}' is not defined in the catalog")]
    UnknownAtomType(String),

    /// A single-atom query named a node the molecule does not have.
    #[error("atom {index} is out of range for a molecule with {atom_count} atoms")]
    AtomOutOfRange { index: usize, atom_count: usize },

    #[error("failed to parse atom type catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("atom type '{0}' is defined more than once")]
    DuplicateAtomType(String),

    /// Every catalog must define the wildcard type `X`.
    #[error("atom type catalog does not define the wildcard type 'X'")]
    MissingWildcard,
}
