#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # repolens
//!
//! Projected-list repository core: composable filters, request-driven
//! sorting, and pagination over pluggable query sources.
//!
//! ## Overview
//!
//! repolens decouples callers from a concrete query engine behind three
//! composable capabilities:
//!
//! - **Shape-changing projection** - map a stored entity graph into a
//!   smaller output shape, applied by the source before materialization so
//!   nothing outside the declared shape is carried across the boundary.
//! - **Deferred, composable queries** - filters, orderings, and paging
//!   combine declaratively; nothing runs until a terminal operation.
//! - **Request-driven dynamic sorting** - a list request selects a sort
//!   key by name from a whitelist of typed key selectors registered per
//!   endpoint, with a mandatory default ordering as the fallback.
//!
//! The central piece is the [`ProjectedListBuilder`]: it accumulates a
//! projected base query, an optional filter, a default ordering, named
//! conditional orders, and pagination, then derives exactly two queries
//! from that one state - a page fetch and a total count - so the pair can
//! never disagree about which entities are eligible.
//!
//! ## Module Organization
//!
//! - [`repository`] - caller-facing façade: one-shot lists, builder
//!   factory, CRUD pass-through
//! - [`query`] - expressions, ordering, pagination, the builder, and the
//!   query-source capability
//! - [`sources`] - the bundled in-memory reference adapter
//! - [`request`] - caller-supplied paging/sorting parameters
//! - [`config`] - page-size defaults and bounds
//! - [`error`] - structured error handling
//! - [`logging`] - opt-in tracing initialization
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use repolens::{Entity, InMemorySource, ListRequest, Projection, Repository};
//!
//! #[derive(Clone)]
//! struct Order {
//!     id: u32,
//!     total: u32,
//! }
//!
//! impl Entity for Order {
//!     type Id = u32;
//!
//!     fn id(&self) -> u32 {
//!         self.id
//!     }
//! }
//!
//! # async fn example() -> repolens::Result<()> {
//! let source = Arc::new(InMemorySource::with_rows(vec![
//!     Order { id: 1, total: 90 },
//!     Order { id: 2, total: 140 },
//! ]));
//! let repo = Repository::new(source);
//!
//! let request = ListRequest::new().with_page(10, 1);
//! let builder = repo
//!     .projected_list_builder(Projection::new(|o: &Order| o.id), &request, None)
//!     .order_by(|o: &Order| o.id)
//!     .conditional_order("total", |o: &Order| o.total);
//!
//! let page = builder.execute().await?;
//! let total = builder.count().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod query;
pub mod repository;
pub mod request;
pub mod sources;

pub use config::RepoConfig;
pub use error::{RepoError, Result};
pub use query::{
    ConditionalOrders, Entity, ListQuery, OrderSpec, PagedResult, Pagination, Predicate,
    ProjectedListBuilder, Projection, QuerySource, SortDirection, SortKey,
};
pub use repository::Repository;
pub use request::ListRequest;
pub use sources::InMemorySource;
