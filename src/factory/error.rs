//! Error types for order creation.

use thiserror::Error;

/// Errors that can occur while resolving a factory or creating an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FactoryError {
    /// The order-type discriminant did not match any known variant.
    ///
    /// Unknown types are rejected rather than silently defaulted, so a
    /// caller always learns which tag it got wrong.
    #[error("Unknown order type: {0}")]
    UnknownOrderType(String),

    /// A dine-in order was requested without a table number.
    #[error("Dine-in orders require a table number")]
    MissingTableNumber,
}
