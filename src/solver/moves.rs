//! Pegs and single moves

use std::fmt;

/// One of the three fixed peg positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    A,
    B,
    C,
}

impl Peg {
    /// All pegs, left to right
    pub const ALL: [Peg; 3] = [Peg::A, Peg::B, Peg::C];

    /// Position of this peg, 0 for A through 2 for C
    pub fn index(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }

    /// Peg letter as shown to users
    pub fn letter(self) -> char {
        match self {
            Peg::A => 'A',
            Peg::B => 'B',
            Peg::C => 'C',
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A single relocation of the top disk of one peg onto another
///
/// `disk` is 1-based (1 is the smallest disk), matching how moves are
/// listed to users. The peg stacks use 0-based disk identifiers; see
/// [`Move::disk_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub disk: u32,
    pub from: Peg,
    pub to: Peg,
}

impl Move {
    pub fn new(disk: u32, from: Peg, to: Peg) -> Self {
        Move { disk, from, to }
    }

    /// 0-based identifier of the moved disk, as stored on the pegs
    pub fn disk_id(&self) -> u32 {
        self.disk - 1
    }

    /// The same disk moving back the way it came
    pub fn reversed(&self) -> Self {
        Move {
            disk: self.disk,
            from: self.to,
            to: self.from,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move disk {} from {} to {}.", self.disk, self.from, self.to)
    }
}
