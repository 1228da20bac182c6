//! # Introduction
//!
//! `hanoi` computes the optimal move sequence for the Tower of Hanoi and
//! replays it one move at a time, forward or backward, keeping a live board
//! of three pegs in sync with a step cursor.
//!
//! ## Pipeline
//!
//! ```text
//! Disk count → Solver → Move sequence → Navigator → Towers → front end
//! ```
//!
//! 1. [`solver`] — builds the `2^N - 1` moves for N disks (A to C via B).
//! 2. [`navigator`] — [`navigator::Towers`] holds the pegs;
//!    [`navigator::Navigator`] steps, jumps and resets over the sequence.
//! 3. [`errors`] — [`errors::HanoiError`], shared by both.
//! 4. [`config`] — optional TOML settings merged with command-line flags.
//!
//! ## Example
//!
//! ```
//! use hanoi::navigator::Navigator;
//! use hanoi::solver::Peg;
//!
//! let mut nav = Navigator::new(3)?;
//! nav.move_to_step(nav.max_step())?;
//! assert_eq!(nav.peg(Peg::C), &[2, 1, 0]);
//! # Ok::<(), hanoi::errors::HanoiError>(())
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod navigator;
pub mod solver;
