use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Submarine", 3),
    ShipType::new("Cruiser", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Display names of the two seats at the terminal.
pub const PLAYER_NAMES: [&str; 2] = ["Player 1", "Player 2"];

/// Environment variable read by [`init_logging`](crate::init_logging).
pub const LOG_ENV_VAR: &str = "BATTLESHIP_LOG";
