//! Ingestion of external order payloads.
//!
//! Upstream systems hand over orders as loosely-shaped documents (JSON and
//! friends). [`ExternalOrder`] deserializes that shape and maps it onto the
//! internal [`Order`] through the same factories the facade uses.
//!
//! This boundary is deliberately more tolerant than the facade: a payload
//! with no `order_type` at all is treated as takeaway, with a warning so the
//! caller knows which branch was taken. An *explicit* unknown type is still
//! rejected.

use serde::Deserialize;
use tracing::warn;

use crate::factory::{factory_for, FactoryError, OrderType};
use crate::model::{LineItem, Order};

/// A line item as supplied by an external system.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalLineItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

/// An order as supplied by an external system.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalOrder {
    pub id: u64,
    pub customer_name: String,
    pub items: Vec<ExternalLineItem>,
    #[serde(default)]
    pub order_type: Option<String>,
    #[serde(default)]
    pub table_number: Option<u32>,
}

impl ExternalOrder {
    /// Converts the external payload into an internal [`Order`].
    ///
    /// Dine-in payloads without a table number are rejected, like everywhere
    /// else in the system.
    pub fn into_order(self) -> Result<Order, FactoryError> {
        let order_type = match self.order_type {
            Some(tag) => tag.parse::<OrderType>()?,
            None => {
                warn!(order_id = self.id, "No order type supplied; defaulting to takeaway");
                OrderType::Takeaway
            }
        };

        let factory = factory_for(order_type, self.table_number)?;
        let mut order = factory.create_order(self.id, &self.customer_name);
        order.attach_items(
            self.items
                .into_iter()
                .map(|item| LineItem::new(item.name, item.quantity, item.price)),
        );
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderKind;

    #[test]
    fn dine_in_payload_maps_onto_internal_order() {
        let payload = ExternalOrder {
            id: 12,
            customer_name: "Alice".to_string(),
            items: vec![ExternalLineItem {
                name: "Steak".to_string(),
                quantity: 1,
                price: 20.0,
            }],
            order_type: Some("dine-in".to_string()),
            table_number: Some(4),
        };

        let order = payload.into_order().unwrap();
        assert_eq!(order.kind, OrderKind::DineIn { table_number: 4 });
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].name, "Steak");
    }

    #[test]
    fn missing_order_type_defaults_to_takeaway() {
        let payload = ExternalOrder {
            id: 13,
            customer_name: "Bob".to_string(),
            items: vec![],
            order_type: None,
            table_number: None,
        };

        let order = payload.into_order().unwrap();
        assert_eq!(order.kind, OrderKind::Takeaway);
    }

    #[test]
    fn explicit_unknown_order_type_is_rejected() {
        let payload = ExternalOrder {
            id: 14,
            customer_name: "Carol".to_string(),
            items: vec![],
            order_type: Some("delivery".to_string()),
            table_number: None,
        };

        assert_eq!(
            payload.into_order().unwrap_err(),
            FactoryError::UnknownOrderType("delivery".to_string())
        );
    }
}
