// Forward/backward replay of a solved move sequence

use super::towers::Towers;
use crate::errors::HanoiError;
use crate::solver::{Move, Peg, Solver};
use log::{debug, trace};

/// Replays a [`Solver`]'s moves over a live [`Towers`] board
///
/// The cursor counts applied moves: 0 is the initial configuration and
/// [`max_step`](Self::max_step) (`2^N - 1`) is the solved board. Every
/// navigation call keeps the board and the cursor in sync.
#[derive(Debug, Clone)]
pub struct Navigator {
    /// Solved sequence being replayed
    solver: Solver,

    /// Current board
    towers: Towers,

    /// Number of moves applied since the initial configuration
    cursor: usize,
}

impl Navigator {
    /// Solve for `disks` disks and start at the initial configuration
    pub fn new(disks: u32) -> Result<Self, HanoiError> {
        Ok(Self::from_solver(Solver::new(disks)?))
    }

    /// Replay an already solved sequence
    pub fn from_solver(solver: Solver) -> Self {
        let towers = Towers::new(solver.disks());
        debug!(
            "Navigator ready: {} disk(s), {} step(s)",
            solver.disks(),
            solver.step_count()
        );
        Navigator {
            solver,
            towers,
            cursor: 0,
        }
    }

    /// Return to the initial configuration
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.towers.reset();
        debug!("Reset to initial configuration");
    }

    /// Apply the next move. Returns `false` (and does nothing) when already solved.
    ///
    /// # Panics
    ///
    /// Panics if the board no longer matches the cursor, which means the
    /// navigator's internal state has been corrupted.
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }

        let mv = self.solver.moves()[self.cursor];
        if let Err(e) = self.towers.apply(&mv) {
            panic!(
                "board out of sync stepping forward to {}: {}",
                self.cursor + 1,
                e
            );
        }
        self.cursor += 1;
        true
    }

    /// Take back the last applied move. Returns `false` (and does nothing) at the start.
    ///
    /// # Panics
    ///
    /// Panics under the same corruption condition as [`step_forward`](Self::step_forward).
    pub fn step_backward(&mut self) -> bool {
        if self.is_at_start() {
            return false;
        }

        let mv = self.solver.moves()[self.cursor - 1];
        if let Err(e) = self.towers.undo(&mv) {
            panic!(
                "board out of sync stepping backward from {}: {}",
                self.cursor, e
            );
        }
        self.cursor -= 1;
        true
    }

    /// Jump to the state after `target` moves
    ///
    /// Targets past [`max_step`](Self::max_step) fail with
    /// [`HanoiError::StepOutOfRange`] and leave the board untouched.
    pub fn move_to_step(&mut self, target: usize) -> Result<(), HanoiError> {
        let max = self.max_step();
        if target > max {
            return Err(HanoiError::StepOutOfRange { target, max });
        }

        if target == self.cursor {
            return Ok(());
        }

        if target == 0 {
            self.reset();
            return Ok(());
        }

        // Going back more than halfway: replaying from scratch is shorter
        if target < self.cursor && target < self.cursor - target {
            trace!(
                "Jump {} -> {}: replaying from the start",
                self.cursor,
                target
            );
            self.reset();
        } else {
            trace!("Jump {} -> {}: stepping", self.cursor, target);
        }

        while self.cursor < target {
            self.step_forward();
        }
        while self.cursor > target {
            self.step_backward();
        }

        Ok(())
    }

    /// Jump using a 1-based step label, where label 1 is the initial configuration
    pub fn move_to_label(&mut self, label: usize) -> Result<(), HanoiError> {
        let max = self.max_step() + 1;
        match label.checked_sub(1) {
            Some(target) if label <= max => self.move_to_step(target),
            _ => Err(HanoiError::LabelOutOfRange { label, max }),
        }
    }

    /// Jump straight to the solved board
    pub fn jump_to_end(&mut self) {
        let max = self.max_step();
        while self.cursor < max {
            self.step_forward();
        }
    }

    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor == self.max_step()
    }

    /// Number of moves applied so far
    pub fn current_step(&self) -> usize {
        self.cursor
    }

    /// 1-based label for the current state, as shown next to a step slider
    pub fn step_label(&self) -> usize {
        self.cursor + 1
    }

    /// Cursor value of the solved board, `2^N - 1`
    pub fn max_step(&self) -> usize {
        self.solver.step_count()
    }

    /// The move that produced the current board, if any
    pub fn last_move(&self) -> Option<&Move> {
        self.cursor
            .checked_sub(1)
            .and_then(|i| self.solver.moves().get(i))
    }

    pub fn disks(&self) -> u32 {
        self.solver.disks()
    }

    pub fn solver(&self) -> &Solver {
        &self.solver
    }

    pub fn towers(&self) -> &Towers {
        &self.towers
    }

    /// Disks on `peg`, bottom to top
    pub fn peg(&self, peg: Peg) -> &[u32] {
        self.towers.peg(peg)
    }
}
