//! Error types for the solver and the replay navigator
//!
//! This module defines [`HanoiError`], which covers every failure the core can
//! report: bad construction arguments, out-of-range lookups and jumps, and moves
//! that do not fit the current board.
//!
//! None of these are transient. Callers that keep their inputs in range never
//! see them; they exist so a bad request fails loudly instead of producing a
//! silently wrong board.

use crate::solver::Peg;
use std::fmt;

/// Errors reported by [`Solver`](crate::solver::Solver),
/// [`Towers`](crate::navigator::Towers) and [`Navigator`](crate::navigator::Navigator)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HanoiError {
    /// Disk count of zero
    InvalidDiskCount { disks: u32 },

    /// Disk count whose move sequence would be too large to hold in memory
    TooManyDisks { disks: u32, limit: u32 },

    /// Move lookup outside the solved sequence
    MoveIndexOutOfBounds { index: usize, len: usize },

    /// Jump target outside `[0, max]`
    StepOutOfRange { target: usize, max: usize },

    /// 1-based step label outside `[1, max]`
    LabelOutOfRange { label: usize, max: usize },

    /// Tried to take a disk from an empty peg
    EmptyPeg { peg: Peg },

    /// The disk on top of the source peg is not the one the move names
    DiskMismatch { peg: Peg, expected: u32, found: u32 },

    /// The move would put a disk on top of a smaller one
    LargerOnSmaller { disk: u32, onto: u32, peg: Peg },

    /// Board audit failed (missing, duplicated or misordered disks)
    Inconsistent { message: String },
}

impl fmt::Display for HanoiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HanoiError::InvalidDiskCount { disks } => {
                write!(f, "Invalid disk count {}: need at least one disk", disks)
            }
            HanoiError::TooManyDisks { disks, limit } => {
                write!(f, "Too many disks: {} requested, limit is {}", disks, limit)
            }
            HanoiError::MoveIndexOutOfBounds { index, len } => {
                write!(
                    f,
                    "Move index {} out of bounds for a sequence of {} move{}",
                    index,
                    len,
                    if *len == 1 { "" } else { "s" }
                )
            }
            HanoiError::StepOutOfRange { target, max } => {
                write!(f, "Step {} out of range: valid steps are 0..={}", target, max)
            }
            HanoiError::LabelOutOfRange { label, max } => {
                write!(f, "Step {} out of range: valid steps are 1..={}", label, max)
            }
            HanoiError::EmptyPeg { peg } => {
                write!(f, "Peg {} is empty", peg)
            }
            HanoiError::DiskMismatch {
                peg,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Expected disk {} on top of peg {}, found disk {}",
                    expected, peg, found
                )
            }
            HanoiError::LargerOnSmaller { disk, onto, peg } => {
                write!(
                    f,
                    "Cannot place disk {} on smaller disk {} on peg {}",
                    disk, onto, peg
                )
            }
            HanoiError::Inconsistent { message } => {
                write!(f, "Inconsistent board: {}", message)
            }
        }
    }
}

impl std::error::Error for HanoiError {}
