use serde::{Deserialize, Serialize};

/// Qualitative orbital geometry of an atom.
///
/// `Planar3` marks trigonal atoms whose lone pair joins a π system
/// (pyrrole nitrogen, amide nitrogen, furan oxygen) as distinct from a
/// formal sp2 centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hybridization {
    S,
    SP,
    SP2,
    SP3,
    Planar3,
    SP3D,
    SP3D2,
    SP3D3,
    SP3D4,
    SP3D5,
    Other,
}
