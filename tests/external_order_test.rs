use order_desk::adapter::ExternalOrder;
use order_desk::cost::{CostCalculator, RegularCostCalculator};
use order_desk::factory::FactoryError;
use order_desk::model::OrderKind;
use order_desk::report::{ReportGenerator, TextReportGenerator};

/// End-to-end ingestion: a JSON payload from an external system becomes an
/// internal order that prices and reports like any other.
#[test]
fn json_payload_flows_through_pricing_and_reporting() {
    let payload: ExternalOrder = serde_json::from_str(
        r#"{
            "id": 41,
            "customer_name": "Alice",
            "order_type": "dine-in",
            "table_number": 7,
            "items": [
                { "name": "Steak", "quantity": 1, "price": 20.0 },
                { "name": "Coffee", "quantity": 2, "price": 3.0 }
            ]
        }"#,
    )
    .unwrap();

    let order = payload.into_order().unwrap();
    assert_eq!(order.kind, OrderKind::DineIn { table_number: 7 });

    let total = RegularCostCalculator.calculate_total(&order);
    assert_eq!(total, 26.0);

    let report = TextReportGenerator.generate_report(&order, total);
    assert!(report.contains("Order ID: 41"));
    assert!(report.contains("Steak - 1 @ 20.0 each"));
    assert!(report.contains("Total Cost: 26.0"));
}

#[test]
fn payload_without_order_type_defaults_to_takeaway() {
    let payload: ExternalOrder = serde_json::from_str(
        r#"{
            "id": 42,
            "customer_name": "Bob",
            "items": []
        }"#,
    )
    .unwrap();

    let order = payload.into_order().unwrap();
    assert_eq!(order.kind, OrderKind::Takeaway);
}

#[test]
fn payload_with_unknown_order_type_is_rejected() {
    let payload: ExternalOrder = serde_json::from_str(
        r#"{
            "id": 43,
            "customer_name": "Carol",
            "order_type": "drive-thru",
            "items": []
        }"#,
    )
    .unwrap();

    assert_eq!(
        payload.into_order().unwrap_err(),
        FactoryError::UnknownOrderType("drive-thru".to_string())
    );
}

#[test]
fn dine_in_payload_without_table_is_rejected() {
    let payload: ExternalOrder = serde_json::from_str(
        r#"{
            "id": 44,
            "customer_name": "Dave",
            "order_type": "dine-in",
            "items": []
        }"#,
    )
    .unwrap();

    assert_eq!(payload.into_order().unwrap_err(), FactoryError::MissingTableNumber);
}
