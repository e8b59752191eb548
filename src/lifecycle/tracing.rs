//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing`
//! crate for the whole system.
//!
//! The compact format hides the crate/module prefix (`with_target(false)`);
//! structured fields carry the interesting context instead.
//!
//! ## What Gets Traced
//!
//! - **Facade operations**: each `create_order` / `calculate_cost` /
//!   `generate_report` call gets its own span via `#[instrument]`.
//! - **Registry activity**: stored orders at `debug`, observer failures at
//!   `warn`.
//! - **Observer side effects**: the logging and report-trigger observers
//!   emit at `info`.
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Full payloads at function entry points
//! RUST_LOG=debug cargo run
//!
//! # Filter to one module
//! RUST_LOG=order_desk::registry=debug cargo run
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Structured fields carry the context instead
        .compact()
        .init();
}
