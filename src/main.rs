//! Scripted walkthrough of the order workflow with fixed data.

use order_desk::lifecycle::{setup_tracing, OrderSystem};
use order_desk::model::LineItem;

fn main() {
    setup_tracing();

    let system = OrderSystem::new();

    let takeaway = system
        .create_order(
            "takeaway",
            1,
            "Alice",
            vec![LineItem::new("Coffee", 2, 3.0)],
            None,
        )
        .expect("takeaway is a known order type");

    let dine_in = system
        .create_order(
            "dine-in",
            2,
            "Bob",
            vec![LineItem::new("Steak", 1, 20.0)],
            Some(4),
        )
        .expect("dine-in with a table is a known order type");

    println!("{}", system.generate_report(&takeaway, "text").expect("text is a known format"));
    println!("{}", system.generate_report(&dine_in, "html").expect("html is a known format"));

    let decorated = system.calculate_cost(&dine_in, 10.0, 2.0);
    println!("Dine-in total with 10% tax and a 2.0 service charge: {decorated:?}");

    println!("\nAll Orders:");
    for description in system.list_all_orders() {
        println!("{description}");
    }
}
