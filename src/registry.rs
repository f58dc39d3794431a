//! Thread-safe registry of kinds.
//!
//! The registry owns the id map and the suffix trie behind one reader/writer
//! lock, so readers always see both updated together. Registration is
//! append-only: kinds are never removed or replaced once accepted.

use crate::error::{InvalidSuffixReason, RESERVED_SUFFIX_CHARS, ValidationError};
use crate::kind::{Kind, KindId};
use crate::suffix::{InsertError, SuffixTree, file_name, tokenize_suffix};
use parking_lot::{RwLock, RwLockReadGuard};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

#[derive(Default)]
struct Inner {
    by_id: HashMap<KindId, Arc<dyn Kind>>,
    suffixes: SuffixTree<Arc<dyn Kind>>,
}

/// Catalog of registered kinds, resolvable by id or by file name.
#[derive(Default)]
pub struct KindRegistry {
    inner: RwLock<Inner>,
}

impl fmt::Debug for KindRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.read();
        f.debug_struct("KindRegistry")
            .field("kinds", &view.len())
            .field("suffixes", &view.suffix_count())
            .finish()
    }
}

impl KindRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with `kinds`.
    ///
    /// Either every kind registers or the error is returned and the partly
    /// built registry is dropped.
    pub fn with_kinds<I>(kinds: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = Arc<dyn Kind>>,
    {
        let registry = Self::new();
        registry.register(kinds)?;
        Ok(registry)
    }

    /// Register kinds in order under a single write lock.
    ///
    /// Stops at the first rejected kind. Kinds accepted earlier in the same
    /// call stay registered, so callers can tell which kind failed.
    pub fn register<I>(&self, kinds: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = Arc<dyn Kind>>,
    {
        let mut inner = self.inner.write();
        for kind in kinds {
            if let Err(err) = inner.insert(kind) {
                debug!(error = %err, "kind rejected");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Register a single kind.
    pub fn register_one(&self, kind: Arc<dyn Kind>) -> Result<(), ValidationError> {
        self.register([kind])
    }

    /// Consistent view of the registry.
    ///
    /// Holds the read lock until dropped, so every lookup through the view
    /// sees the same set of kinds. Registration blocks while a view is alive.
    pub fn read(&self) -> RegistryView<'_> {
        RegistryView {
            inner: self.inner.read(),
        }
    }

    /// Kind registered under `id`, if any.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Kind>> {
        self.read().get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read().contains(id)
    }

    /// Snapshot of all registered kinds in no particular order.
    pub fn list(&self) -> Vec<Arc<dyn Kind>> {
        self.read().list()
    }

    /// Registered ids in sorted order.
    pub fn ids(&self) -> Vec<KindId> {
        self.read().ids()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Most specific kind whose suffix matches the file name of `path`.
    ///
    /// The file name is tokenized like a suffix and matched from its last
    /// token backward; the longest registered token suffix wins.
    pub fn resolve_by_suffix(&self, path: &str) -> Option<Arc<dyn Kind>> {
        self.read().resolve_by_suffix(path)
    }
}

/// Read-locked view returned by `KindRegistry::read`.
pub struct RegistryView<'a> {
    inner: RwLockReadGuard<'a, Inner>,
}

impl RegistryView<'_> {
    pub fn get(&self, id: &str) -> Option<Arc<dyn Kind>> {
        self.inner.by_id.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.by_id.contains_key(id)
    }

    pub fn list(&self) -> Vec<Arc<dyn Kind>> {
        self.inner.by_id.values().cloned().collect()
    }

    pub fn ids(&self) -> Vec<KindId> {
        let mut ids: Vec<KindId> = self.inner.by_id.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.inner.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.by_id.is_empty()
    }

    /// Number of suffixes in the trie; equals `len()` at all times.
    pub fn suffix_count(&self) -> usize {
        self.inner.suffixes.len()
    }

    pub fn resolve_by_suffix(&self, path: &str) -> Option<Arc<dyn Kind>> {
        let tokens = tokenize_suffix(file_name(path));
        self.inner.suffixes.longest_match(&tokens).cloned()
    }
}

impl Inner {
    fn insert(&mut self, kind: Arc<dyn Kind>) -> Result<(), ValidationError> {
        let info = kind.info();
        if info.id.is_empty() {
            return Err(ValidationError::MissingId);
        }
        if self.by_id.contains_key(&info.id) {
            return Err(ValidationError::DuplicateId {
                id: info.id.clone(),
            });
        }
        if info.file_suffix.is_empty() {
            return Err(ValidationError::MissingSuffix {
                id: info.id.clone(),
            });
        }
        if let Some(reserved) = info
            .file_suffix
            .chars()
            .find(|c| RESERVED_SUFFIX_CHARS.contains(c))
        {
            return Err(invalid_suffix(
                kind.as_ref(),
                InvalidSuffixReason::ReservedChar(reserved),
            ));
        }

        let tokens = tokenize_suffix(&info.file_suffix);
        match self.suffixes.insert(&tokens, Arc::clone(&kind)) {
            Ok(()) => {}
            Err(InsertError::NoTokens) => {
                return Err(invalid_suffix(kind.as_ref(), InvalidSuffixReason::NoTokens));
            }
            Err(InsertError::Occupied(existing)) => {
                return Err(ValidationError::SuffixAlreadyRegistered {
                    id: info.id.clone(),
                    suffix: info.file_suffix.clone(),
                    existing: existing.info().id.clone(),
                });
            }
        }

        debug!(id = %info.id, suffix = %info.file_suffix, ?tokens, "kind registered");
        self.by_id.insert(info.id.clone(), Arc::clone(&kind));
        Ok(())
    }
}

fn invalid_suffix(kind: &dyn Kind, reason: InvalidSuffixReason) -> ValidationError {
    let info = kind.info();
    ValidationError::InvalidSuffix {
        id: info.id.clone(),
        suffix: info.file_suffix.clone(),
        reason,
    }
}
