// Limits and defaults shared by the solver, navigator and front end

/// Largest disk count the solver accepts.
/// 2^24 - 1 moves at 8 bytes each keeps the sequence around 128 MiB.
pub const MAX_DISKS: u32 = 24;

/// Disk count used when nothing else is configured
pub const DEFAULT_DISKS: u32 = 5;

/// Upper bound offered to users by the settings prompt
pub const DEFAULT_MAX_DISKS: u32 = 10;

/// Number of moves needed to solve `disks` disks: 2^disks - 1
pub const fn step_count(disks: u32) -> usize {
    (1usize << disks) - 1
}
