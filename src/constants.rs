// Board geometry
pub const BOARD_SIZE: usize = 15;
pub const CENTER: usize = BOARD_SIZE / 2;
pub const WIN_LENGTH: usize = 5;

// How far the win collector walks from the placed stone in each direction
pub const WIN_REACH: usize = WIN_LENGTH - 1;

// Threat weights keyed by (count, open ends)
pub const WEIGHT_FIVE: i32 = 100_000;
pub const WEIGHT_FOUR: i32 = 10_000;
pub const WEIGHT_OPEN_THREE: i32 = 1_000;
pub const WEIGHT_BLOCKED_THREE: i32 = 100;
pub const WEIGHT_OPEN_TWO: i32 = 100;
pub const WEIGHT_BLOCKED_TWO: i32 = 10;

// Scored search. Totals are kept in tenths so the 1.2x defense factor stays exact.
pub const SCORE_TENTHS: i64 = 10;
pub const DEFENSE_TENTHS: i64 = 12;
pub const CENTER_PULL: i32 = 2 * BOARD_SIZE as i32;
