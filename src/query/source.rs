//! The query-source capability: the seam between the core and whatever
//! engine actually holds the data.
//!
//! The core never assumes a storage technology. It issues declarative
//! [`ListQuery`] values and counts through [`QuerySource`]; an adapter
//! translates them with whatever primitives its engine understands. The
//! bundled [`InMemorySource`](crate::sources::InMemorySource) is the
//! reference adapter.

use std::fmt;

use async_trait::async_trait;

use crate::error::Result;
use crate::query::expr::{Predicate, Projection};
use crate::query::order::OrderSpec;

/// A stored record with an identity field.
///
/// The core never inspects entities beyond what filter, projection, and
/// sort expressions reference; the id only backs the CRUD pass-through.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Clone + Eq + fmt::Debug + Send + Sync + 'static;

    fn id(&self) -> Self::Id;
}

/// One declarative list query: filter + projection + order + window.
///
/// Sources apply the stages as filter, then order, then skip/take, then
/// projection - and must apply the projection before materializing
/// results, so only projected values cross the source boundary.
pub struct ListQuery<'q, E, T> {
    pub filter: Option<&'q Predicate<E>>,
    pub projection: &'q Projection<E, T>,
    pub order: Option<&'q OrderSpec<E>>,
    pub skip: Option<usize>,
    pub take: Option<usize>,
}

impl<E, T> fmt::Debug for ListQuery<'_, E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListQuery")
            .field("filtered", &self.filter.is_some())
            .field("ordered", &self.order.is_some())
            .field("skip", &self.skip)
            .field("take", &self.take)
            .finish()
    }
}

/// Capability over a collection of entities of one type.
///
/// Read paths (`fetch`, `count`) power the projected-list machinery; the
/// remaining methods back the repository's CRUD pass-through. Adapters
/// report their own failures wrapped in
/// [`RepoError::Source`](crate::error::RepoError::Source) and otherwise
/// untouched; the core adds no retries. Implementations must be safe for
/// concurrent read access.
#[async_trait]
pub trait QuerySource<E: Entity>: Send + Sync {
    /// Run one composed list query and materialize the projected page.
    async fn fetch<T>(&self, query: ListQuery<'_, E, T>) -> Result<Vec<T>>
    where
        T: Send + 'static;

    /// Count entities matching the filter, ignoring order and paging.
    async fn count(&self, filter: Option<&Predicate<E>>) -> Result<u64>;

    async fn insert(&self, entity: E) -> Result<E>;

    async fn update(&self, entity: E) -> Result<E>;

    /// Remove by id; `false` when nothing matched.
    async fn remove(&self, id: &E::Id) -> Result<bool>;

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>>;
}
