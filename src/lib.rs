//! Two small teaching programs sharing one crate.
//!
//! - [`record`]: a nested record copied by value, mutated through a by-value
//!   parameter (no effect on the caller) and overwritten through `&mut`.
//! - [`fib`]: naive recursive Fibonacci with a sentinel for negative input,
//!   fed by the integer [`scan`]ner.
//!
//! The two programs do not talk to each other; [`error`] and [`logging`] are
//! the only shared pieces.

pub mod config;
pub mod error;
pub mod fib;
pub mod logging;
pub mod record;
pub mod scan;

pub use error::AppError;
