//! Optimal move sequence for the Tower of Hanoi
//!
//! - [`moves`]: [`Peg`] identifiers and the [`Move`] record
//! - [`sequence`]: [`Solver`], which computes the full ordered move list
//!
//! # Move order
//!
//! The sequence follows the standard recursive decomposition, source A,
//! destination C, spare B:
//!
//! ```text
//! solve(k, begin, dest, spare):
//!     solve(k-1, begin, spare, dest)
//!     move disk k from begin to dest
//!     solve(k-1, spare, dest, begin)
//! ```
//!
//! The recursion is unrolled onto an explicit work stack, so the order is
//! identical to the recursive form without using the call stack.

pub mod moves;
pub mod sequence;

pub use moves::{Move, Peg};
pub use sequence::Solver;
