//! The projected-list query builder.
//!
//! Created per list operation by
//! [`Repository::projected_list_builder`](crate::repository::Repository::projected_list_builder),
//! configured by chaining, then executed - conceptually at most twice, one
//! count and one page fetch, both derived from the same composed state so
//! they can never disagree about which entities are eligible.

use futures::try_join;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RepoError, Result};
use crate::query::expr::{Predicate, Projection};
use crate::query::order::{ConditionalOrders, OrderSpec, SortDirection, SortKey};
use crate::query::pagination::Pagination;
use crate::query::source::{Entity, ListQuery, QuerySource};

/// One page of projected results plus the metadata callers need for a
/// paging envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// Deferred accumulator of filter, projection, ordering, and pagination.
///
/// Terminal operations take `&self` and may run concurrently; the builder
/// holds no shared mutable state and is meant to be discarded after one
/// list operation.
///
/// A default ordering is mandatory before [`execute`](Self::execute):
/// natural source order is never used, so pagination stays deterministic
/// across backends.
pub struct ProjectedListBuilder<'repo, E, T, S> {
    source: &'repo S,
    projection: Projection<E, T>,
    filter: Option<Predicate<E>>,
    default_order: Option<OrderSpec<E>>,
    conditional_orders: ConditionalOrders<E>,
    pagination: Pagination,
    sort_field: Option<String>,
    sort_direction: SortDirection,
    config_error: Option<String>,
}

impl<'repo, E, T, S> ProjectedListBuilder<'repo, E, T, S>
where
    E: Entity,
    T: Send + 'static,
    S: QuerySource<E>,
{
    pub(crate) fn new(
        source: &'repo S,
        projection: Projection<E, T>,
        filter: Option<Predicate<E>>,
        pagination: Pagination,
        sort_field: Option<String>,
        sort_direction: SortDirection,
    ) -> Self {
        Self {
            source,
            projection,
            filter,
            default_order: None,
            conditional_orders: ConditionalOrders::new(),
            pagination,
            sort_field,
            sort_direction,
            config_error: None,
        }
    }

    /// Set the mandatory default ordering, ascending. Last call wins.
    pub fn order_by<K, F>(mut self, selector: F) -> Self
    where
        K: Ord,
        F: Fn(&E) -> K + Send + Sync + 'static,
    {
        self.default_order = Some(OrderSpec::ascending(SortKey::by(selector)));
        self
    }

    /// Set the mandatory default ordering, descending. Last call wins.
    pub fn order_by_desc<K, F>(mut self, selector: F) -> Self
    where
        K: Ord,
        F: Fn(&E) -> K + Send + Sync + 'static,
    {
        self.default_order = Some(OrderSpec::descending(SortKey::by(selector)));
        self
    }

    /// Register a request-selectable sort key under `name`.
    ///
    /// The key is consulted only when the list request's sort field equals
    /// `name` (case-sensitive); the request's direction is applied at
    /// resolve time. Registering a name twice is a configuration error
    /// reported by the terminal operations - neither registration wins.
    pub fn conditional_order<K, F>(mut self, name: &str, selector: F) -> Self
    where
        K: Ord,
        F: Fn(&E) -> K + Send + Sync + 'static,
    {
        if !self.conditional_orders.insert(name, SortKey::by(selector)) {
            self.config_error = Some(format!("conditional order '{name}' registered twice"));
        }
        self
    }

    /// AND-compose `predicate` with any filter already present.
    pub fn filter(mut self, predicate: Predicate<E>) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => existing.and(predicate),
            None => predicate,
        });
        self
    }

    fn check_config(&self) -> Result<()> {
        match &self.config_error {
            Some(message) => Err(RepoError::configuration(message.clone())),
            None => Ok(()),
        }
    }

    /// Ordering for this request: the conditional entry named by the
    /// request when one matches, otherwise the default. The default must
    /// exist either way.
    fn resolve_order(&self) -> Result<OrderSpec<E>> {
        let default = self.default_order.clone().ok_or_else(|| {
            RepoError::configuration("default order not set: call order_by before executing")
        })?;
        Ok(
            match self.conditional_orders.resolve(self.sort_field.as_deref()) {
                Some(key) => key.clone().with_direction(self.sort_direction),
                None => default,
            },
        )
    }

    /// Fetch the requested page: filter, resolved order, window, and
    /// projection composed into one query against the source.
    pub async fn execute(&self) -> Result<Vec<T>> {
        self.check_config()?;
        let order = self.resolve_order()?;
        debug!(
            skip = self.pagination.skip(),
            take = self.pagination.take(),
            sort_field = self.sort_field.as_deref(),
            ascending = self.sort_direction.is_ascending(),
            "executing projected list query"
        );
        self.source
            .fetch(ListQuery {
                filter: self.filter.as_ref(),
                projection: &self.projection,
                order: Some(&order),
                skip: Some(self.pagination.skip()),
                take: Some(self.pagination.take()),
            })
            .await
    }

    /// Total count of entities matching the filter, with no projection,
    /// order, or paging, so the total stays stable across pages.
    pub async fn count(&self) -> Result<u64> {
        self.check_config()?;
        debug!("counting projected list query");
        self.source.count(self.filter.as_ref()).await
    }

    /// First element under the resolved ordering, if any.
    pub async fn first(&self) -> Result<Option<T>> {
        self.check_config()?;
        let order = self.resolve_order()?;
        let items = self
            .source
            .fetch(ListQuery {
                filter: self.filter.as_ref(),
                projection: &self.projection,
                order: Some(&order),
                skip: None,
                take: Some(1),
            })
            .await?;
        Ok(items.into_iter().next())
    }

    /// Whether any entity matches the filter.
    pub async fn exists(&self) -> Result<bool> {
        Ok(self.count().await? > 0)
    }

    /// Page fetch and total count issued concurrently, assembled with
    /// paging metadata.
    ///
    /// Both queries share the builder's filter. Under concurrent writes to
    /// the backing store they may observe different snapshots; that skew
    /// is inherited from the source, not reconciled here.
    pub async fn execute_paged(&self) -> Result<PagedResult<T>> {
        let (items, total_count) = try_join!(self.execute(), self.count())?;
        Ok(PagedResult {
            items,
            total_count,
            page_number: self.pagination.page_number(),
            page_size: self.pagination.page_size(),
            total_pages: self.pagination.total_pages(total_count),
            has_next_page: self.pagination.has_next_page(total_count),
            has_previous_page: self.pagination.has_previous_page(),
        })
    }
}
