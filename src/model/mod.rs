//! Pure data structures shared by every layer of the system.

pub mod order;

pub use order::*;
