//! Deferred, composable query construction.
//!
//! A list operation is assembled from small pieces that stay declarative
//! until the moment a query source runs them:
//!
//! - [`expr`] - filter predicates and shape-changing projections
//! - [`order`] - sort keys, directions, and the named conditional-order table
//! - [`pagination`] - page arithmetic with tail-window semantics
//! - [`source`] - the query-source capability the core executes against
//! - [`builder`] - the projected-list builder tying it all together
//!
//! The builder derives its page fetch and its total count from one
//! composed state, so the two can never disagree about which entities are
//! eligible.

pub mod builder;
pub mod expr;
pub mod order;
pub mod pagination;
pub mod source;

pub use builder::{PagedResult, ProjectedListBuilder};
pub use expr::{Predicate, Projection};
pub use order::{ConditionalOrders, OrderSpec, SortDirection, SortKey};
pub use pagination::Pagination;
pub use source::{Entity, ListQuery, QuerySource};
