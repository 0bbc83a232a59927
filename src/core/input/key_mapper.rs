//=========================================================================
// Key Mapper
//=========================================================================
//
// Immutable translation table from platform key codes to engine keys.
//
// Architecture:
//   P::key_table() → KeyMapper::new() (once) → map(code) → Key
//
// The table is built when the mapper is constructed and never mutated
// afterwards, so a mapper can be shared freely between event threads.
// Lookups are total: codes without an entry resolve to `Key::None`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

//=== Internal Dependencies ===============================================

use super::event::Key;

//=== PlatformKeyCode =====================================================

/// A platform's native key code type.
///
/// Implementors supply the translation table used to build their
/// [`KeyMapper`]. Entries later in the table win over earlier ones.
pub trait PlatformKeyCode: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Returns the `(platform code, engine key)` pairs for this platform.
    fn key_table() -> Vec<(Self, Key)>;
}

//=== KeyMapper ===========================================================

/// Platform key code → engine [`Key`] lookup.
#[derive(Debug, Clone)]
pub struct KeyMapper<P: PlatformKeyCode> {
    table: HashMap<P, Key>,
}

impl<P: PlatformKeyCode> KeyMapper<P> {
    /// Builds the mapper from the platform's own key table.
    pub fn new() -> Self {
        Self::from_table(P::key_table())
    }

    /// Builds a mapper from an explicit table.
    pub fn from_table(entries: impl IntoIterator<Item = (P, Key)>) -> Self {
        Self {
            table: entries.into_iter().collect(),
        }
    }

    /// Translates a platform key code. Unmapped codes return [`Key::None`].
    pub fn map(&self, code: P) -> Key {
        self.table.get(&code).copied().unwrap_or(Key::None)
    }

    /// Returns `true` if `code` has an explicit entry.
    pub fn contains(&self, code: P) -> bool {
        self.table.contains_key(&code)
    }

    /// Number of mapped codes.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<P: PlatformKeyCode> Default for KeyMapper<P> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
