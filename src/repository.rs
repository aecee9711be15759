//! Caller-facing repository façade.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::debug;

use crate::config::RepoConfig;
use crate::error::Result;
use crate::query::builder::ProjectedListBuilder;
use crate::query::expr::{Predicate, Projection};
use crate::query::pagination::Pagination;
use crate::query::source::{Entity, ListQuery, QuerySource};
use crate::request::ListRequest;

/// Entry point for projected list queries and CRUD pass-through over an
/// injected query source.
///
/// Clones are cheap and share the source handle. Each list call
/// constructs one short-lived [`ProjectedListBuilder`]; builders are not
/// shared across callers and carry no state between operations.
pub struct Repository<E, S> {
    source: Arc<S>,
    config: RepoConfig,
    _entity: PhantomData<fn() -> E>,
}

impl<E, S> Clone for Repository<E, S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            config: self.config.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E, S> Repository<E, S>
where
    E: Entity,
    S: QuerySource<E>,
{
    pub fn new(source: Arc<S>) -> Self {
        Self::with_config(source, RepoConfig::default())
    }

    pub fn with_config(source: Arc<S>, config: RepoConfig) -> Self {
        Self {
            source,
            config,
            _entity: PhantomData,
        }
    }

    pub fn config(&self) -> &RepoConfig {
        &self.config
    }

    /// One-shot filtered, projected fetch: all matches, no ordering, no
    /// paging.
    pub async fn projected_list<T>(
        &self,
        projection: Projection<E, T>,
        filter: Option<Predicate<E>>,
    ) -> Result<Vec<T>>
    where
        T: Send + 'static,
    {
        debug!(filtered = filter.is_some(), "projected list fetch");
        self.source
            .fetch(ListQuery {
                filter: filter.as_ref(),
                projection: &projection,
                order: None,
                skip: None,
                take: None,
            })
            .await
    }

    /// Builder pre-seeded with projection, filter, and the request's
    /// pagination.
    ///
    /// The request's sort field and direction ride along on the builder
    /// and are consumed when it executes, after the caller has registered
    /// its conditional orders.
    pub fn projected_list_builder<T>(
        &self,
        projection: Projection<E, T>,
        request: &ListRequest,
        filter: Option<Predicate<E>>,
    ) -> ProjectedListBuilder<'_, E, T, S>
    where
        T: Send + 'static,
    {
        ProjectedListBuilder::new(
            self.source.as_ref(),
            projection,
            filter,
            Pagination::from_request(request, &self.config),
            request.sort_field.clone(),
            request.sort_direction,
        )
    }

    // CRUD pass-through. Conflict and existence semantics belong to the
    // source.

    pub async fn add(&self, entity: E) -> Result<E> {
        debug!(id = ?entity.id(), "adding entity");
        self.source.insert(entity).await
    }

    pub async fn update(&self, entity: E) -> Result<E> {
        debug!(id = ?entity.id(), "updating entity");
        self.source.update(entity).await
    }

    pub async fn remove(&self, id: &E::Id) -> Result<bool> {
        debug!(id = ?id, "removing entity");
        self.source.remove(id).await
    }

    pub async fn get_by_id(&self, id: &E::Id) -> Result<Option<E>> {
        self.source.find_by_id(id).await
    }
}
