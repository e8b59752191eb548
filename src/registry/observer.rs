//! Observers reacting to newly stored orders.

use tracing::info;

use super::ObserverError;
use crate::model::Order;

/// Capability to react to a newly added order.
///
/// Observers only read the order; they never own it. Returning `Err` tells
/// the registry the side effect failed — the registry logs and moves on.
pub trait OrderObserver: Send {
    fn update(&self, order: &Order) -> Result<(), ObserverError>;
}

/// Emits the identity and customer of every new order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl OrderObserver for LoggingObserver {
    fn update(&self, order: &Order) -> Result<(), ObserverError> {
        info!(order_id = order.id, customer = %order.customer_name, "Order added");
        Ok(())
    }
}

/// Emits the order-type description, signalling a report can be produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportTriggerObserver;

impl OrderObserver for ReportTriggerObserver {
    fn update(&self, order: &Order) -> Result<(), ObserverError> {
        info!(order_type = %order.order_type(), "New order ready for reporting");
        Ok(())
    }
}
