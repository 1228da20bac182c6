//! Board state and step-by-step replay
//!
//! - [`towers`]: [`Towers`], the three peg stacks and their move checks
//! - [`replay`]: [`Navigator`], a cursor over a solved sequence that keeps the
//!   board in sync while stepping forward, backward or jumping
//!
//! # State Machine
//!
//! States are cursor values `0..=2^N - 1`. Stepping forward from the last
//! state and stepping backward from state 0 are no-ops; `reset` returns to 0
//! from anywhere. Jumps outside that range are rejected.

pub mod replay;
pub mod towers;

pub use replay::Navigator;
pub use towers::Towers;
