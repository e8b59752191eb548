use super::CostCalculator;
use crate::model::Order;

/// Adds a percentage of the wrapped calculator's total.
///
/// Wrapping order matters: tax applies to whatever the inner chain already
/// produced, so `ServiceChargeDecorator` outside `TaxDecorator` taxes only
/// the base, while the reverse taxes the charge too.
#[derive(Debug, Clone)]
pub struct TaxDecorator<C> {
    inner: C,
    tax_rate: f64,
}

impl<C: CostCalculator> TaxDecorator<C> {
    pub fn new(inner: C, tax_rate: f64) -> Self {
        Self { inner, tax_rate }
    }
}

impl<C: CostCalculator> CostCalculator for TaxDecorator<C> {
    fn calculate_total(&self, order: &Order) -> f64 {
        let total = self.inner.calculate_total(order);
        total + total * self.tax_rate / 100.0
    }
}

/// Adds a flat amount to the wrapped calculator's total.
#[derive(Debug, Clone)]
pub struct ServiceChargeDecorator<C> {
    inner: C,
    service_charge: f64,
}

impl<C: CostCalculator> ServiceChargeDecorator<C> {
    pub fn new(inner: C, service_charge: f64) -> Self {
        Self {
            inner,
            service_charge,
        }
    }
}

impl<C: CostCalculator> CostCalculator for ServiceChargeDecorator<C> {
    fn calculate_total(&self, order: &Order) -> f64 {
        self.inner.calculate_total(order) + self.service_charge
    }
}
