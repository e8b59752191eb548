use tracing::{debug, info, instrument};

use crate::cost::{CostCalculator, RegularCostCalculator, ServiceChargeDecorator, TaxDecorator};
use crate::factory::{factory_for, FactoryError, OrderType};
use crate::model::{LineItem, Order};
use crate::registry::{LoggingObserver, OrderRegistry, ReportTriggerObserver};
use crate::report::{
    HtmlReportGenerator, ReportError, ReportFormat, ReportGenerator, TextReportGenerator,
};

/// The single entry point combining factory, registry, calculator chain, and
/// report generators.
///
/// `OrderSystem` is responsible for:
/// - **Creation**: resolving the right factory for an order-type tag
/// - **Registration**: storing new orders in the registry, which fans out to
///   the observers
/// - **Pricing**: assembling the decorator chain the caller asked for
/// - **Reporting**: dispatching to the text or HTML generator
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
///
/// let order = system.create_order("takeaway", 1, "Alice",
///     vec![LineItem::new("Coffee", 2, 3.0)], None)?;
/// let total = system.calculate_cost(&order, 10.0, 2.0);
/// let report = system.generate_report(&order, "text")?;
/// ```
pub struct OrderSystem {
    registry: OrderRegistry,
    text_report: TextReportGenerator,
    html_report: HtmlReportGenerator,
}

impl OrderSystem {
    /// Creates a facade wired to the process-wide registry.
    ///
    /// Registers a [`LoggingObserver`] and a [`ReportTriggerObserver`]; each
    /// `OrderSystem` contributes its own pair.
    pub fn new() -> Self {
        Self::with_registry(OrderRegistry::global())
    }

    /// Creates a facade over an explicitly supplied registry.
    ///
    /// This is the dependency-injection seam: tests and embedders get an
    /// isolated registry instead of the process-wide one.
    pub fn with_registry(registry: OrderRegistry) -> Self {
        registry.register_observer(Box::new(LoggingObserver));
        registry.register_observer(Box::new(ReportTriggerObserver));

        Self {
            registry,
            text_report: TextReportGenerator,
            html_report: HtmlReportGenerator,
        }
    }

    /// The registry this facade stores orders in.
    pub fn registry(&self) -> &OrderRegistry {
        &self.registry
    }

    /// Creates an order from boundary data, attaches its items, and stores
    /// it in the registry (notifying every observer).
    ///
    /// `order_type` is the "dine-in"/"takeaway" tag, case-insensitive;
    /// unknown tags are rejected. Dine-in requires `table_number`.
    #[instrument(skip(self, items))]
    pub fn create_order(
        &self,
        order_type: &str,
        id: u64,
        customer_name: &str,
        items: Vec<LineItem>,
        table_number: Option<u32>,
    ) -> Result<Order, FactoryError> {
        debug!(?items, "create_order called");

        let order_type: OrderType = order_type.parse()?;
        let factory = factory_for(order_type, table_number)?;

        let mut order = factory.create_order(id, customer_name);
        order.attach_items(items);

        self.registry.add_order(order.clone());
        info!(order_id = order.id, order_type = %order.order_type(), "Order created");

        Ok(order)
    }

    /// Prices an order through the decorator chain.
    ///
    /// The chain starts from the regular calculator; a tax wrapper is added
    /// only when `tax_rate > 0`, then a service-charge wrapper only when
    /// `service_charge > 0`. Zero values skip decoration entirely, so the
    /// default path stays a plain sum. When both wrappers apply, the flat
    /// charge lands on the post-tax total.
    #[instrument(skip(self, order), fields(order_id = order.id))]
    pub fn calculate_cost(&self, order: &Order, tax_rate: f64, service_charge: f64) -> f64 {
        let mut calculator: Box<dyn CostCalculator> = Box::new(RegularCostCalculator);
        if tax_rate > 0.0 {
            calculator = Box::new(TaxDecorator::new(calculator, tax_rate));
        }
        if service_charge > 0.0 {
            calculator = Box::new(ServiceChargeDecorator::new(calculator, service_charge));
        }

        let total = calculator.calculate_total(order);
        debug!(total, tax_rate, service_charge, "Cost calculated");
        total
    }

    /// Renders a report for the order in the requested format.
    ///
    /// The total comes from the undecorated regular calculator; callers who
    /// want a decorated total can pass one to the generators directly.
    /// Unknown format tags yield [`ReportError::UnknownFormat`] — no report
    /// is produced.
    #[instrument(skip(self, order), fields(order_id = order.id))]
    pub fn generate_report(&self, order: &Order, format: &str) -> Result<String, ReportError> {
        let total_cost = RegularCostCalculator.calculate_total(order);

        let report = match format.parse::<ReportFormat>()? {
            ReportFormat::Text => self.text_report.generate_report(order, total_cost),
            ReportFormat::Html => self.html_report.generate_report(order, total_cost),
        };
        Ok(report)
    }

    /// Order-type descriptions of every stored order, in insertion order.
    pub fn list_all_orders(&self) -> Vec<String> {
        self.registry
            .list_orders()
            .iter()
            .map(Order::order_type)
            .collect()
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
