//! Cost strategies and the decorator chain that augments them.
//!
//! # Architecture Note
//! Every pricing policy satisfies the same [`CostCalculator`] contract, so
//! the facade can hand any chain — plain, discounted, or decorated — to a
//! report without caring how the number was produced. Decorators are plain
//! values holding an inner calculator plus an adjustment policy, composed by
//! nesting rather than inheritance; stacking order is caller-controlled and
//! observably changes the result.

pub mod calculator;
pub mod decorator;

pub use calculator::*;
pub use decorator::*;
