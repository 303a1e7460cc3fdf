pub const BOARD_SIZE: usize = 6;
pub const FLEET_SIZE: usize = 7;

/// Ship lengths placed on every board, in placement order.
pub const FLEET: [usize; FLEET_SIZE] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed before the generator discards a partial board.
pub const PLACEMENT_ATTEMPTS: usize = 10_000;
