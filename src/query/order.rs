//! Sort keys, directions, and the named conditional-order table.
//!
//! Dynamic string-to-sort dispatch is a closed registration API: a builder
//! registers typed key selectors under names, and a request selects one by
//! name at execute time. No reflection, no stringly-typed comparisons on
//! the key itself.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Direction applied to a resolved sort key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn is_ascending(self) -> bool {
        matches!(self, SortDirection::Ascending)
    }
}

/// Type-erased comparator built from a typed key selector.
///
/// The key type only needs `Ord` at construction and never resurfaces,
/// which keeps a table of differently-keyed entries homogeneous.
pub struct SortKey<E> {
    compare: Arc<dyn Fn(&E, &E) -> Ordering + Send + Sync>,
}

impl<E> SortKey<E> {
    /// Build a key from a selector returning any `Ord` value.
    pub fn by<K, F>(selector: F) -> Self
    where
        K: Ord,
        F: Fn(&E) -> K + Send + Sync + 'static,
    {
        Self {
            compare: Arc::new(move |a, b| selector(a).cmp(&selector(b))),
        }
    }

    /// Ascending comparison of two entities under this key.
    pub fn compare(&self, a: &E, b: &E) -> Ordering {
        (self.compare)(a, b)
    }

    /// Attach a direction, yielding a complete ordering.
    pub fn with_direction(self, direction: SortDirection) -> OrderSpec<E> {
        OrderSpec {
            key: self,
            direction,
        }
    }
}

impl<E> Clone for SortKey<E> {
    fn clone(&self) -> Self {
        Self {
            compare: Arc::clone(&self.compare),
        }
    }
}

impl<E> fmt::Debug for SortKey<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortKey").finish_non_exhaustive()
    }
}

/// A sort key plus the direction to apply it in.
#[derive(Clone, Debug)]
pub struct OrderSpec<E> {
    key: SortKey<E>,
    direction: SortDirection,
}

impl<E> OrderSpec<E> {
    pub fn ascending(key: SortKey<E>) -> Self {
        key.with_direction(SortDirection::Ascending)
    }

    pub fn descending(key: SortKey<E>) -> Self {
        key.with_direction(SortDirection::Descending)
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Direction-honoring comparison. Equal keys stay equal in either
    /// direction, so a stable sort keeps their underlying order.
    pub fn compare(&self, a: &E, b: &E) -> Ordering {
        let ordering = self.key.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Registry of request-selectable sort keys, keyed by name.
///
/// Lookup is a pure, case-sensitive exact match. Registration never
/// overwrites: a duplicate name is reported to the caller, which the
/// builder turns into a configuration error.
#[derive(Debug)]
pub struct ConditionalOrders<E> {
    entries: HashMap<String, SortKey<E>>,
}

impl<E> ConditionalOrders<E> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a named key. Returns `false` when the name is already
    /// taken; the existing entry is left untouched.
    pub fn insert(&mut self, name: impl Into<String>, key: SortKey<E>) -> bool {
        match self.entries.entry(name.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(key);
                true
            }
        }
    }

    /// Key registered for a requested sort field, or `None` when the
    /// request carries no field or names nothing registered.
    pub fn resolve(&self, requested: Option<&str>) -> Option<&SortKey<E>> {
        requested.and_then(|name| self.entries.get(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for ConditionalOrders<E> {
    fn default() -> Self {
        Self::new()
    }
}
