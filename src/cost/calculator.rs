use crate::model::Order;

/// Capability to price an order from its line items.
///
/// Implementations read `order.items` and never mutate the order. Line item
/// contents are trusted as-is; garbage in, garbage out.
pub trait CostCalculator {
    fn calculate_total(&self, order: &Order) -> f64;
}

/// Boxed chains satisfy the contract too, so decorator stacks can be
/// assembled at runtime.
impl<C: CostCalculator + ?Sized> CostCalculator for Box<C> {
    fn calculate_total(&self, order: &Order) -> f64 {
        (**self).calculate_total(order)
    }
}

/// Plain sum of quantity × unit price.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularCostCalculator;

impl CostCalculator for RegularCostCalculator {
    fn calculate_total(&self, order: &Order) -> f64 {
        order
            .items
            .iter()
            .map(|item| f64::from(item.quantity) * item.unit_price)
            .sum()
    }
}

/// Regular total minus a percentage fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct DiscountedCostCalculator {
    discount_percentage: f64,
}

impl DiscountedCostCalculator {
    pub fn new(discount_percentage: f64) -> Self {
        Self {
            discount_percentage,
        }
    }
}

impl CostCalculator for DiscountedCostCalculator {
    fn calculate_total(&self, order: &Order) -> f64 {
        let total = RegularCostCalculator.calculate_total(order);
        total - total * self.discount_percentage / 100.0
    }
}
