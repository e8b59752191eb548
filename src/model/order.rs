use serde::{Serialize, Deserialize};

/// A single priced line on an order.
///
/// Quantities and prices are carried exactly as supplied — validating them
/// (negative prices, zero quantities) is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl LineItem {
    /// Creates a new line item.
    ///
    /// # Arguments
    /// * `name` - Menu item name
    /// * `quantity` - Number of units ordered
    /// * `unit_price` - Price per unit
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }
}

/// The variant-specific payload of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrderKind {
    /// Served at a table inside the restaurant.
    DineIn { table_number: u32 },
    /// Packed for pickup; no table.
    Takeaway,
}

/// A captured restaurant order.
///
/// The item list starts empty and is populated after construction
/// (see [`Order::add_item`] and [`Order::attach_items`]); it must be fully
/// populated before the order is priced or reported on. Id uniqueness is
/// not enforced here — ids are caller-supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub customer_name: String,
    pub items: Vec<LineItem>,
    pub kind: OrderKind,
}

impl Order {
    /// Creates a new order with an empty item list.
    pub fn new(id: u64, customer_name: impl Into<String>, kind: OrderKind) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            items: Vec::new(),
            kind,
        }
    }

    /// Appends a single line item.
    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Appends every supplied line item, preserving their order.
    pub fn attach_items(&mut self, items: impl IntoIterator<Item = LineItem>) {
        self.items.extend(items);
    }

    /// Human-readable description of the order variant.
    pub fn order_type(&self) -> String {
        match self.kind {
            OrderKind::DineIn { table_number } => {
                format!("Dine-In Order at Table {table_number}")
            }
            OrderKind::Takeaway => "Takeaway Order".to_string(),
        }
    }
}
