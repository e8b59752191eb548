//! # Order Desk
//!
//! > **A composition core for a restaurant order workflow.**
//!
//! This crate captures orders (dine-in or takeaway), prices them through a
//! stackable chain of cost policies, and renders text or HTML reports. There
//! is no persistence and no network surface; the interesting part is the
//! small object graph connecting creation, pricing, notification, and
//! reporting.
//!
//! ## Design Philosophy
//!
//! Every seam is a small trait with a single capability:
//! [`OrderFactory`](factory::OrderFactory) creates,
//! [`CostCalculator`](cost::CostCalculator) prices,
//! [`ReportGenerator`](report::ReportGenerator) renders, and
//! [`OrderObserver`](registry::OrderObserver) reacts. Behavior never shares
//! implementation across variants, so there is no hierarchy — just values
//! implementing the trait, composed by nesting where augmentation is needed
//! (the cost decorators).
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`])
//! Pure structures: [`Order`](model::Order), [`LineItem`](model::LineItem),
//! and the dine-in/takeaway discriminant.
//!
//! ### 2. The Builders ([`factory`], [`menu`])
//! Factories bound to exactly the data their variant needs, plus the
//! step-wise combo-meal builder.
//!
//! ### 3. The Policies ([`cost`], [`report`])
//! Pricing strategies with decorator wrappers for tax and service charge,
//! and the stateless text/HTML report generators.
//!
//! ### 4. The Subject ([`registry`])
//! The process-wide order registry: stores every created order and fans out
//! synchronous notifications to registered observers.
//!
//! ### 5. The Boundary ([`lifecycle`], [`adapter`])
//! [`OrderSystem`](lifecycle::OrderSystem) is the facade any driver talks
//! to; [`adapter`] ingests external order payloads via serde.
//!
//! ## Quick Start
//!
//! ```ignore
//! use order_desk::lifecycle::OrderSystem;
//! use order_desk::model::LineItem;
//!
//! let system = OrderSystem::new();
//! let order = system.create_order(
//!     "takeaway", 1, "Alice",
//!     vec![LineItem::new("Coffee", 2, 3.0)], None,
//! )?;
//! println!("{}", system.generate_report(&order, "text")?);
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod adapter;
pub mod cost;
pub mod factory;
pub mod lifecycle;
pub mod menu;
pub mod model;
pub mod registry;
pub mod report;
