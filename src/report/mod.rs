//! Rendering an order plus a computed total into text or HTML.
//!
//! Generators trust the caller's `total_cost` instead of recomputing it, so
//! they can render any calculator's result, decorated or not. They hold no
//! state: identical inputs always produce byte-identical output.

pub mod error;

pub use error::*;

use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::model::Order;

/// Boundary tag naming a report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Html,
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    /// Accepts `"text"` / `"html"`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "html" => Ok(ReportFormat::Html),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Capability to render an order and its total.
pub trait ReportGenerator {
    fn generate_report(&self, order: &Order, total_cost: f64) -> String;
}

/// Line-oriented plain-text report.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReportGenerator;

impl ReportGenerator for TextReportGenerator {
    fn generate_report(&self, order: &Order, total_cost: f64) -> String {
        // {:?} keeps the trailing .0 on whole amounts (6.0 renders as "6.0").
        let mut report = format!("Order ID: {}\nItems:\n", order.id);
        for item in &order.items {
            report.push_str(&format!(
                "{} - {} @ {:?} each\n",
                item.name, item.quantity, item.unit_price
            ));
        }
        report.push_str(&format!("Total Cost: {total_cost:?}\n"));
        report
    }
}

/// Heading, unordered item list, and a total paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlReportGenerator;

impl ReportGenerator for HtmlReportGenerator {
    fn generate_report(&self, order: &Order, total_cost: f64) -> String {
        let mut report = format!("<h1>Order ID: {}</h1>\n<ul>\n", order.id);
        for item in &order.items {
            report.push_str(&format!(
                "<li>{} - {} @ {:?} each</li>\n",
                item.name, item.quantity, item.unit_price
            ));
        }
        report.push_str(&format!("</ul>\n<p>Total Cost: {total_cost:?}</p>\n"));
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineItem, Order, OrderKind};

    fn coffee_order() -> Order {
        let mut order = Order::new(1, "Alice", OrderKind::Takeaway);
        order.add_item(LineItem::new("Coffee", 2, 3.0));
        order
    }

    #[test]
    fn report_format_parses_case_insensitively() {
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("HTML".parse::<ReportFormat>().unwrap(), ReportFormat::Html);
    }

    #[test]
    fn unknown_report_format_is_rejected() {
        let err = "pdf".parse::<ReportFormat>().unwrap_err();
        assert_eq!(err, ReportError::UnknownFormat("pdf".to_string()));
    }

    #[test]
    fn text_report_enumerates_items_and_total() {
        let report = TextReportGenerator.generate_report(&coffee_order(), 6.0);
        assert_eq!(
            report,
            "Order ID: 1\nItems:\nCoffee - 2 @ 3.0 each\nTotal Cost: 6.0\n"
        );
    }

    #[test]
    fn html_report_enumerates_items_and_total() {
        let report = HtmlReportGenerator.generate_report(&coffee_order(), 6.0);
        assert_eq!(
            report,
            "<h1>Order ID: 1</h1>\n<ul>\n<li>Coffee - 2 @ 3.0 each</li>\n</ul>\n<p>Total Cost: 6.0</p>\n"
        );
    }

    #[test]
    fn generators_trust_the_supplied_total() {
        // The caller's total is rendered verbatim, decorated or not.
        let report = TextReportGenerator.generate_report(&coffee_order(), 24.0);
        assert!(report.contains("Total Cost: 24.0"));
    }

    #[test]
    fn empty_order_renders_an_empty_section() {
        let order = Order::new(3, "Bob", OrderKind::Takeaway);

        let text = TextReportGenerator.generate_report(&order, 0.0);
        assert_eq!(text, "Order ID: 3\nItems:\nTotal Cost: 0.0\n");

        let html = HtmlReportGenerator.generate_report(&order, 0.0);
        assert_eq!(html, "<h1>Order ID: 3</h1>\n<ul>\n</ul>\n<p>Total Cost: 0.0</p>\n");
    }

    #[test]
    fn reports_are_idempotent() {
        let order = coffee_order();
        let first = HtmlReportGenerator.generate_report(&order, 6.0);
        let second = HtmlReportGenerator.generate_report(&order, 6.0);
        assert_eq!(first, second);
    }
}
