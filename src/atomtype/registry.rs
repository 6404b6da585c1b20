use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use tracing::debug;

use super::catalog::AtomTypeCatalog;
use super::matcher::AtomTypeMatcher;
use super::PerceptionMode;
use crate::traits::{TypeableAtom, TypeableBond};

type Key = (PerceptionMode, TypeId);

/// Shares one matcher per perception mode and atom/bond payload pair.
///
/// The lock is held only while looking up or inserting; matching itself
/// runs on the returned `Arc` without any locking.
pub struct MatcherRegistry {
    catalog: Arc<AtomTypeCatalog>,
    matchers: Mutex<HashMap<Key, Arc<dyn Any + Send + Sync>>>,
}

impl MatcherRegistry {
    pub fn new(catalog: Arc<AtomTypeCatalog>) -> Self {
        Self {
            catalog,
            matchers: Mutex::new(HashMap::new()),
        }
    }

    pub fn get<A, B>(&self, mode: PerceptionMode) -> Arc<AtomTypeMatcher<A, B>>
    where
        A: TypeableAtom + 'static,
        B: TypeableBond + 'static,
    {
        let key = (mode, TypeId::of::<AtomTypeMatcher<A, B>>());
        let mut matchers = self.matchers.lock();
        if let Some(existing) = matchers.get(&key) {
            if let Ok(matcher) = Arc::clone(existing).downcast::<AtomTypeMatcher<A, B>>() {
                return matcher;
            }
        }

        debug!(
            ?mode,
            atom = type_name::<A>(),
            bond = type_name::<B>(),
            "constructing atom type matcher"
        );
        let matcher = Arc::new(AtomTypeMatcher::<A, B>::new(Arc::clone(&self.catalog), mode));
        matchers.insert(key, matcher.clone());
        matcher
    }

    /// Number of matchers constructed so far.
    pub fn len(&self) -> usize {
        self.matchers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn catalog(&self) -> &Arc<AtomTypeCatalog> {
        &self.catalog
    }
}

impl std::fmt::Debug for MatcherRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatcherRegistry")
            .field("matchers", &self.len())
            .finish()
    }
}

static GLOBAL: OnceLock<MatcherRegistry> = OnceLock::new();

/// The process-wide matcher for `mode` over the bundled catalog.
pub fn matcher<A, B>(mode: PerceptionMode) -> Arc<AtomTypeMatcher<A, B>>
where
    A: TypeableAtom + 'static,
    B: TypeableBond + 'static,
{
    GLOBAL
        .get_or_init(|| MatcherRegistry::new(AtomTypeCatalog::builtin()))
        .get(mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::Bond;
    use crate::traits::{
        HasAromaticity, HasAtomicNum, HasFormalCharge, HasHybridization, HasHydrogenCount,
        HasRadicalElectrons, HasRingFlag,
    };
    use crate::hybridization::Hybridization;
    use std::thread;

    /// A second atom payload so the registry sees a different graph context.
    #[derive(Debug, Clone, Default)]
    struct Bare(u8);

    impl HasAtomicNum for Bare {
        fn atomic_num(&self) -> u8 {
            self.0
        }
    }
    impl HasFormalCharge for Bare {
        fn formal_charge(&self) -> Option<i8> {
            None
        }
    }
    impl HasHybridization for Bare {
        fn hybridization(&self) -> Option<Hybridization> {
            None
        }
    }
    impl HasHydrogenCount for Bare {
        fn hydrogen_count(&self) -> Option<u8> {
            None
        }
    }
    impl HasAromaticity for Bare {
        fn is_aromatic(&self) -> bool {
            false
        }
    }
    impl HasRingFlag for Bare {
        fn in_ring(&self) -> bool {
            false
        }
    }
    impl HasRadicalElectrons for Bare {
        fn radical_electrons(&self) -> u8 {
            0
        }
    }

    fn registry() -> MatcherRegistry {
        MatcherRegistry::new(AtomTypeCatalog::builtin())
    }

    #[test]
    fn same_key_same_instance() {
        let reg = registry();
        let a = reg.get::<Atom, Bond>(PerceptionMode::RequireNothing);
        let b = reg.get::<Atom, Bond>(PerceptionMode::RequireNothing);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn keys_are_mode_and_payload() {
        let reg = registry();
        let loose = reg.get::<Atom, Bond>(PerceptionMode::RequireNothing);
        let strict = reg.get::<Atom, Bond>(PerceptionMode::RequireExplicitHydrogens);
        let bare = reg.get::<Bare, Bond>(PerceptionMode::RequireNothing);
        assert_eq!(loose.mode(), PerceptionMode::RequireNothing);
        assert_eq!(strict.mode(), PerceptionMode::RequireExplicitHydrogens);
        assert_eq!(bare.mode(), PerceptionMode::RequireNothing);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn concurrent_get_constructs_once() {
        let reg = Arc::new(registry());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let reg = Arc::clone(&reg);
                thread::spawn(move || reg.get::<Atom, Bond>(PerceptionMode::RequireExplicitHydrogens))
            })
            .collect();
        let matchers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(matchers.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn global_matcher_is_shared() {
        let a = matcher::<Atom, Bond>(PerceptionMode::RequireNothing);
        let b = matcher::<Atom, Bond>(PerceptionMode::RequireNothing);
        assert!(Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(
            GLOBAL.get().unwrap().catalog(),
            &AtomTypeCatalog::builtin()
        ));
    }

    #[test]
    fn bare_payload_types_carbon() {
        let mut mol = crate::mol::Mol::<Bare, Bond>::new();
        let c = mol.add_atom(Bare(6));
        let m = matcher::<Bare, Bond>(PerceptionMode::RequireNothing);
        // unknown charge and hydrogens: first structural candidate is accepted
        assert_eq!(m.find_matching_atom_type(&mol, c).unwrap().id, "C.sp3");
    }
}
