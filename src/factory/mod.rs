//! Polymorphic order creation.
//!
//! Each concrete factory is bound at construction to exactly the data its
//! variant needs: a [`DineInOrderFactory`] carries the table number once and
//! can then stamp out orders for that table, while [`TakeawayOrderFactory`]
//! needs nothing. The [`OrderType`] tag is the string boundary for drivers;
//! parsing it rejects unknown discriminants instead of guessing.

pub mod error;

pub use error::*;

use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::model::{Order, OrderKind};

/// Boundary tag naming an order variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    DineIn,
    Takeaway,
}

impl FromStr for OrderType {
    type Err = FactoryError;

    /// Accepts `"dine-in"` / `"takeaway"`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dine-in" => Ok(OrderType::DineIn),
            "takeaway" => Ok(OrderType::Takeaway),
            other => Err(FactoryError::UnknownOrderType(other.to_string())),
        }
    }
}

/// Capability to produce one order variant.
pub trait OrderFactory: std::fmt::Debug {
    /// Builds an order with an empty item list; items are attached by the
    /// caller afterwards. No side effects beyond construction.
    fn create_order(&self, id: u64, customer_name: &str) -> Order;
}

/// Factory for dine-in orders, parameterized once by table number.
#[derive(Debug, Clone)]
pub struct DineInOrderFactory {
    table_number: u32,
}

impl DineInOrderFactory {
    pub fn new(table_number: u32) -> Self {
        Self { table_number }
    }
}

impl OrderFactory for DineInOrderFactory {
    fn create_order(&self, id: u64, customer_name: &str) -> Order {
        Order::new(
            id,
            customer_name,
            OrderKind::DineIn {
                table_number: self.table_number,
            },
        )
    }
}

/// Factory for takeaway orders.
#[derive(Debug, Clone, Default)]
pub struct TakeawayOrderFactory;

impl OrderFactory for TakeawayOrderFactory {
    fn create_order(&self, id: u64, customer_name: &str) -> Order {
        Order::new(id, customer_name, OrderKind::Takeaway)
    }
}

/// Resolves the factory for a parsed order type.
///
/// Fails with [`FactoryError::MissingTableNumber`] when a dine-in order is
/// requested without a table.
pub fn factory_for(
    order_type: OrderType,
    table_number: Option<u32>,
) -> Result<Box<dyn OrderFactory>, FactoryError> {
    match order_type {
        OrderType::DineIn => {
            let table = table_number.ok_or(FactoryError::MissingTableNumber)?;
            Ok(Box::new(DineInOrderFactory::new(table)))
        }
        OrderType::Takeaway => Ok(Box::new(TakeawayOrderFactory)),
    }
}
