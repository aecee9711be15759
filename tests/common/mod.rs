//! Shared sales-domain fixture: entities, projections, and seeded sources.
//!
//! The seed produces 55 orders with customers cycling through 3 names and
//! products cycling through 4, two items per order with formula-driven
//! prices and quantities, so ordering and paging assertions can be
//! computed by hand.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};

use repolens::{Entity, InMemorySource, ListQuery, Predicate, Projection, QuerySource, RepoError};

pub const SEEDED_ORDER_COUNT: u64 = 55;

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: u32,
    pub street: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub quantity_in_stock: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: u32,
    pub product: Product,
    pub quantity: u32,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: u32,
    pub customer: Customer,
    pub delivery_address: Address,
    pub items: Vec<OrderItem>,
    pub ordered_at: NaiveDateTime,
}

impl Entity for Order {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

/// Narrow output shape for order lists.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub id: u32,
    pub customer_name: String,
    pub delivery_address: String,
    pub items: Vec<OrderItemView>,
    pub has_expensive_items: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemView {
    pub product_name: String,
    pub quantity: u32,
    pub price: u32,
}

/// Projection from the order graph into [`OrderSummary`], traversing the
/// customer, address, and product relations.
pub fn order_summary_projection() -> Projection<Order, OrderSummary> {
    Projection::new(|order: &Order| OrderSummary {
        id: order.id,
        customer_name: order.customer.name.clone(),
        delivery_address: format!(
            "{}, country: {}",
            order.delivery_address.street, order.delivery_address.country
        ),
        items: order
            .items
            .iter()
            .map(|item| OrderItemView {
                product_name: item.product.name.clone(),
                quantity: item.quantity,
                price: item.price,
            })
            .collect(),
        has_expensive_items: order.items.iter().any(|item| item.price > 100),
    })
}

/// Orders carrying at least one item priced strictly over `threshold`.
pub fn items_over_price(threshold: u32) -> Predicate<Order> {
    Predicate::new(move |order: &Order| order.items.iter().any(|item| item.price > threshold))
}

pub fn customer_names() -> [&'static str; 3] {
    ["Alma Reyes", "Booker Hale", "Cleo Yamada"]
}

fn customers() -> Vec<Customer> {
    customer_names()
        .iter()
        .enumerate()
        .map(|(index, name)| Customer {
            id: index as u32 + 1,
            name: (*name).to_string(),
        })
        .collect()
}

pub fn product_names() -> [&'static str; 4] {
    ["Espresso Beans", "Oat Milk", "Moka Pot", "Burr Grinder"]
}

fn products() -> Vec<Product> {
    let stock = [24, 80, 15, 9];
    product_names()
        .iter()
        .zip(stock)
        .enumerate()
        .map(|(index, (name, quantity_in_stock))| Product {
            id: index as u32 + 1,
            name: (*name).to_string(),
            quantity_in_stock,
        })
        .collect()
}

fn seed_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

/// Builder-style factory for one order.
pub struct OrderFactory {
    id: u32,
    customer: Customer,
    country: String,
    item_prices: Vec<u32>,
}

impl OrderFactory {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            customer: customers()[0].clone(),
            country: "Portugal".to_string(),
            item_prices: vec![40, 60],
        }
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = customer;
        self
    }

    pub fn with_customer_name(mut self, name: &str) -> Self {
        self.customer.name = name.to_string();
        self
    }

    pub fn with_item_prices(mut self, prices: &[u32]) -> Self {
        self.item_prices = prices.to_vec();
        self
    }

    pub fn build(self) -> Order {
        let catalog = products();
        let items = self
            .item_prices
            .iter()
            .enumerate()
            .map(|(index, price)| OrderItem {
                id: self.id * 1000 + index as u32,
                product: catalog[index % catalog.len()].clone(),
                quantity: price / 2,
                price: *price,
            })
            .collect();
        Order {
            id: self.id,
            customer: self.customer,
            delivery_address: Address {
                id: self.id * 1000,
                street: format!("{} Harbor Lane", self.id),
                country: self.country,
            },
            items,
            ordered_at: seed_epoch() + Duration::days(i64::from(self.id)),
        }
    }
}

/// The 55-order seed: customer cycle of 3, two items per order with
/// product cycles of 4, `price = i*40, qty = i*25` on the first item and
/// `price = i*60, qty = i*15` on the second.
pub fn seeded_orders() -> Vec<Order> {
    let customers = customers();
    let catalog = products();

    (1..=55u32)
        .map(|i| {
            let customer = customers[((i - 1) % 3) as usize].clone();
            let product_a = catalog[((i - 1) % 4) as usize].clone();
            let product_b = catalog[((i + 1) % 4) as usize].clone();
            Order {
                id: i,
                customer,
                delivery_address: Address {
                    id: i * 1000,
                    street: format!("{i} Harbor Lane"),
                    country: "Portugal".to_string(),
                },
                items: vec![
                    OrderItem {
                        id: i * 1000,
                        product: product_a,
                        quantity: i * 25,
                        price: i * 40,
                    },
                    OrderItem {
                        id: i * 1000 + 1,
                        product: product_b,
                        quantity: i * 15,
                        price: i * 60,
                    },
                ],
                ordered_at: seed_epoch() + Duration::days(i64::from(i)),
            }
        })
        .collect()
}

pub fn seeded_source() -> Arc<InMemorySource<Order>> {
    Arc::new(InMemorySource::with_rows(seeded_orders()))
}

/// Source whose every operation fails, for error-propagation tests.
pub struct BrokenSource;

fn broken() -> RepoError {
    RepoError::source(std::io::Error::new(
        std::io::ErrorKind::ConnectionReset,
        "backend unreachable",
    ))
}

#[async_trait]
impl QuerySource<Order> for BrokenSource {
    async fn fetch<T>(&self, _query: ListQuery<'_, Order, T>) -> repolens::Result<Vec<T>>
    where
        T: Send + 'static,
    {
        Err(broken())
    }

    async fn count(&self, _filter: Option<&Predicate<Order>>) -> repolens::Result<u64> {
        Err(broken())
    }

    async fn insert(&self, _entity: Order) -> repolens::Result<Order> {
        Err(broken())
    }

    async fn update(&self, _entity: Order) -> repolens::Result<Order> {
        Err(broken())
    }

    async fn remove(&self, _id: &u32) -> repolens::Result<bool> {
        Err(broken())
    }

    async fn find_by_id(&self, _id: &u32) -> repolens::Result<Option<Order>> {
        Err(broken())
    }
}
