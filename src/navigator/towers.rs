//! The three peg stacks
//!
//! Each peg holds 0-based disk identifiers ordered bottom to top, so a legal
//! peg is strictly decreasing (the largest disk sits at the bottom). Every
//! disk `0..N` lives on exactly one peg.
//!
//! [`Towers::apply`] and [`Towers::undo`] check a move against the board before
//! touching it: a rejected move leaves every peg unchanged.

use crate::errors::HanoiError;
use crate::solver::{Move, Peg};
use rustc_hash::FxHashSet;
use std::fmt;

/// Board state: three pegs of disks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Towers {
    disks: u32,
    pegs: [Vec<u32>; 3],
}

impl Towers {
    /// Initial configuration: all `disks` disks on peg A, largest at the bottom
    pub fn new(disks: u32) -> Self {
        let mut towers = Towers {
            disks,
            pegs: [
                Vec::with_capacity(disks as usize),
                Vec::with_capacity(disks as usize),
                Vec::with_capacity(disks as usize),
            ],
        };
        towers.reset();
        towers
    }

    /// Put every disk back on peg A
    pub fn reset(&mut self) {
        let [a, b, c] = &mut self.pegs;
        a.clear();
        a.extend((0..self.disks).rev());
        b.clear();
        c.clear();
    }

    pub fn disks(&self) -> u32 {
        self.disks
    }

    /// Disks on `peg`, bottom to top
    pub fn peg(&self, peg: Peg) -> &[u32] {
        &self.pegs[peg.index()]
    }

    /// Disk on top of `peg`, if any
    pub fn top(&self, peg: Peg) -> Option<u32> {
        self.pegs[peg.index()].last().copied()
    }

    /// True when every disk is on peg C
    pub fn is_solved(&self) -> bool {
        self.pegs[Peg::C.index()].len() == self.disks as usize
    }

    /// Move the top disk of `mv.from` onto `mv.to`, returning the disk moved
    pub fn apply(&mut self, mv: &Move) -> Result<u32, HanoiError> {
        let disk = self.check(mv)?;
        self.pegs[mv.from.index()].pop();
        self.pegs[mv.to.index()].push(disk);
        Ok(disk)
    }

    /// Take back `mv`: move its disk from `mv.to` back onto `mv.from`
    pub fn undo(&mut self, mv: &Move) -> Result<u32, HanoiError> {
        self.apply(&mv.reversed())
    }

    fn check(&self, mv: &Move) -> Result<u32, HanoiError> {
        let found = self.top(mv.from).ok_or(HanoiError::EmptyPeg { peg: mv.from })?;

        // Move::disk is 1-based; a disk number of 0 can never match
        if mv.disk == 0 || found != mv.disk_id() {
            return Err(HanoiError::DiskMismatch {
                peg: mv.from,
                expected: mv.disk.saturating_sub(1),
                found,
            });
        }

        if let Some(onto) = self.top(mv.to) {
            if onto <= found {
                return Err(HanoiError::LargerOnSmaller {
                    disk: found,
                    onto,
                    peg: mv.to,
                });
            }
        }

        Ok(found)
    }

    /// Audit the board: every disk present exactly once, every peg strictly decreasing
    pub fn validate(&self) -> Result<(), HanoiError> {
        let mut seen = FxHashSet::default();

        for peg in Peg::ALL {
            let stack = self.peg(peg);

            if let Some(pair) = stack.windows(2).find(|pair| pair[0] <= pair[1]) {
                return Err(HanoiError::Inconsistent {
                    message: format!(
                        "disk {} rests on disk {} on peg {}",
                        pair[1], pair[0], peg
                    ),
                });
            }

            for &disk in stack {
                if disk >= self.disks {
                    return Err(HanoiError::Inconsistent {
                        message: format!("unknown disk {} on peg {}", disk, peg),
                    });
                }
                if !seen.insert(disk) {
                    return Err(HanoiError::Inconsistent {
                        message: format!("disk {} appears more than once", disk),
                    });
                }
            }
        }

        if seen.len() != self.disks as usize {
            let missing = (0..self.disks).find(|d| !seen.contains(d)).unwrap_or(0);
            return Err(HanoiError::Inconsistent {
                message: format!("disk {} is missing", missing),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Towers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, peg) in Peg::ALL.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {:?}", peg, self.peg(*peg))?;
        }
        Ok(())
    }
}
