//! Filter and projection expressions.
//!
//! Both types wrap pure functions behind `Arc`, so builders can hold and
//! clone them freely without lifetimes leaking into their signatures.
//! They are the abstract mapping contract: each query-source adapter
//! decides how to apply them with its own composition primitives, and the
//! bundled in-memory source applies them directly during its scan.

use std::fmt;
use std::sync::Arc;

/// Pure filter over stored entities.
///
/// Multiple predicates supplied to a builder compose conjunctively via
/// [`Predicate::and`].
pub struct Predicate<E> {
    test: Arc<dyn Fn(&E) -> bool + Send + Sync>,
}

impl<E> Predicate<E> {
    pub fn new(test: impl Fn(&E) -> bool + Send + Sync + 'static) -> Self {
        Self {
            test: Arc::new(test),
        }
    }

    /// Evaluate against one entity.
    pub fn test(&self, entity: &E) -> bool {
        (self.test)(entity)
    }

    /// Conjunction: matches only entities both predicates match.
    pub fn and(self, other: Predicate<E>) -> Predicate<E>
    where
        E: 'static,
    {
        let left = self.test;
        let right = other.test;
        Predicate {
            test: Arc::new(move |entity| left(entity) && right(entity)),
        }
    }
}

impl<E> Clone for Predicate<E> {
    fn clone(&self) -> Self {
        Self {
            test: Arc::clone(&self.test),
        }
    }
}

impl<E> fmt::Debug for Predicate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

/// Pure mapping from a stored entity to an output shape.
///
/// The query builder holds a projection and hands it to the source, which
/// must apply it before materializing results so that nothing outside the
/// output shape is carried across the source boundary.
pub struct Projection<E, T> {
    map: Arc<dyn Fn(&E) -> T + Send + Sync>,
}

impl<E, T> Projection<E, T> {
    pub fn new(map: impl Fn(&E) -> T + Send + Sync + 'static) -> Self {
        Self { map: Arc::new(map) }
    }

    /// Apply to one entity.
    pub fn apply(&self, entity: &E) -> T {
        (self.map)(entity)
    }

    /// Post-compose with a pure transform of the output shape.
    pub fn then<U>(self, next: impl Fn(T) -> U + Send + Sync + 'static) -> Projection<E, U>
    where
        E: 'static,
        T: 'static,
    {
        let map = self.map;
        Projection {
            map: Arc::new(move |entity| next(map(entity))),
        }
    }
}

impl<E, T> Clone for Projection<E, T> {
    fn clone(&self) -> Self {
        Self {
            map: Arc::clone(&self.map),
        }
    }
}

impl<E, T> fmt::Debug for Projection<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projection").finish_non_exhaustive()
    }
}
