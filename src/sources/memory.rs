//! Reference query source over an in-process `Vec`.

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::trace;

use crate::error::{RepoError, Result};
use crate::query::expr::Predicate;
use crate::query::source::{Entity, ListQuery, QuerySource};

/// In-memory query source, safe for concurrent readers.
///
/// The scan applies the full list-query pipeline - filter, stable order,
/// window, projection - over borrowed entities, so rows outside the
/// requested page are never cloned or projected. The sort is stable,
/// keeping pagination deterministic when sort keys tie.
pub struct InMemorySource<E> {
    rows: RwLock<Vec<E>>,
}

impl<E> InMemorySource<E> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    pub fn with_rows(rows: Vec<E>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// Number of stored entities, unfiltered.
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

impl<E> Default for InMemorySource<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> QuerySource<E> for InMemorySource<E> {
    async fn fetch<T>(&self, query: ListQuery<'_, E, T>) -> Result<Vec<T>>
    where
        T: Send + 'static,
    {
        let rows = self.rows.read();
        let total = rows.len();

        let mut matched: Vec<&E> = rows
            .iter()
            .filter(|entity| query.filter.is_none_or(|f| f.test(entity)))
            .collect();

        if let Some(order) = query.order {
            matched.sort_by(|a, b| order.compare(a, b));
        }

        let skip = query.skip.unwrap_or(0);
        let take = query.take.unwrap_or(usize::MAX);
        let page: Vec<T> = matched
            .into_iter()
            .skip(skip)
            .take(take)
            .map(|entity| query.projection.apply(entity))
            .collect();

        trace!(total, returned = page.len(), skip, "in-memory fetch");
        Ok(page)
    }

    async fn count(&self, filter: Option<&Predicate<E>>) -> Result<u64> {
        let count = self
            .rows
            .read()
            .iter()
            .filter(|entity| filter.is_none_or(|f| f.test(entity)))
            .count();
        Ok(count as u64)
    }

    async fn insert(&self, entity: E) -> Result<E> {
        let mut rows = self.rows.write();
        if rows.iter().any(|row| row.id() == entity.id()) {
            return Err(RepoError::DuplicateId {
                id: format!("{:?}", entity.id()),
            });
        }
        rows.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: E) -> Result<E> {
        let mut rows = self.rows.write();
        match rows.iter_mut().find(|row| row.id() == entity.id()) {
            Some(row) => {
                *row = entity.clone();
                Ok(entity)
            }
            None => Err(RepoError::NotFound {
                id: format!("{:?}", entity.id()),
            }),
        }
    }

    async fn remove(&self, id: &E::Id) -> Result<bool> {
        let mut rows = self.rows.write();
        let before = rows.len();
        rows.retain(|row| row.id() != *id);
        Ok(rows.len() < before)
    }

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>> {
        Ok(self.rows.read().iter().find(|row| row.id() == *id).cloned())
    }
}
