// Optimal move sequence generation

use super::moves::{Move, Peg};
use crate::constants::{step_count, MAX_DISKS};
use crate::errors::HanoiError;
use log::debug;
use std::fmt;

/// Pending work for the iterative solver.
///
/// `Solve` expands into solve(k-1, begin, spare, dest), emit k, solve(k-1, spare, dest, begin);
/// the three parts are pushed in reverse so they pop in order.
enum Task {
    Solve {
        k: u32,
        begin: Peg,
        destination: Peg,
        spare: Peg,
    },
    Emit(Move),
}

/// The complete optimal solution for a fixed number of disks
///
/// Built once, then read-only. Moving N disks from A to C via B takes
/// exactly `2^N - 1` moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solver {
    disks: u32,
    moves: Vec<Move>,
}

impl Solver {
    /// Solve the puzzle for `disks` disks
    ///
    /// Fails with [`HanoiError::InvalidDiskCount`] for zero disks and
    /// [`HanoiError::TooManyDisks`] above [`MAX_DISKS`].
    pub fn new(disks: u32) -> Result<Self, HanoiError> {
        if disks == 0 {
            return Err(HanoiError::InvalidDiskCount { disks });
        }
        if disks > MAX_DISKS {
            return Err(HanoiError::TooManyDisks {
                disks,
                limit: MAX_DISKS,
            });
        }

        let total = step_count(disks);
        let mut moves = Vec::with_capacity(total);

        // Depth never exceeds 2 * disks + 1, no matter how many moves are emitted
        let mut pending = Vec::with_capacity(2 * disks as usize + 1);
        pending.push(Task::Solve {
            k: disks,
            begin: Peg::A,
            destination: Peg::C,
            spare: Peg::B,
        });

        while let Some(task) = pending.pop() {
            match task {
                Task::Emit(mv) => moves.push(mv),
                Task::Solve {
                    k: 1,
                    begin,
                    destination,
                    ..
                } => moves.push(Move::new(1, begin, destination)),
                Task::Solve {
                    k,
                    begin,
                    destination,
                    spare,
                } => {
                    pending.push(Task::Solve {
                        k: k - 1,
                        begin: spare,
                        destination,
                        spare: begin,
                    });
                    pending.push(Task::Emit(Move::new(k, begin, destination)));
                    pending.push(Task::Solve {
                        k: k - 1,
                        begin,
                        destination: spare,
                        spare: destination,
                    });
                }
            }
        }

        debug_assert_eq!(moves.len(), total);
        debug!("Solved {} disk(s) in {} move(s)", disks, moves.len());

        Ok(Solver { disks, moves })
    }

    /// Number of disks this sequence solves
    pub fn disks(&self) -> u32 {
        self.disks
    }

    /// Number of moves in the solution, `2^N - 1`
    pub fn step_count(&self) -> usize {
        self.moves.len()
    }

    /// The move at 0-based `index`
    pub fn move_at(&self, index: usize) -> Result<&Move, HanoiError> {
        self.moves
            .get(index)
            .ok_or(HanoiError::MoveIndexOutOfBounds {
                index,
                len: self.moves.len(),
            })
    }

    /// The whole sequence, in order
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tower of Hanoi for {} disks:", self.disks)?;
        for mv in &self.moves {
            write!(f, "\n{}", mv)?;
        }
        Ok(())
    }
}
