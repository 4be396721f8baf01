//! Common types for Battleship: shot results and the errors raised by
//! coordinates, ships and boards.

use core::fmt;

use crate::coord::Coordinate;

/// Outcome of a shot that resolved a fresh cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot landed on open water.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot sank a ship, carrying its name.
    Sunk(&'static str),
    /// Shot sank the final ship of the fleet; the board is defeated.
    SunkLastShip(&'static str),
}

impl ShotResult {
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Errors from parsing a single coordinate token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordError {
    /// Token is not a letter followed by a number.
    Malformed,
    /// Token is well formed but names a cell outside A1..J10.
    OutOfRange,
}

/// Internal consistency failures of a ship. These never come from user
/// input; seeing one means the caller dispatched to the wrong ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipError {
    /// Ship already occupies as many cells as its size.
    CapacityExceeded(Coordinate),
    /// Ship already occupies this cell.
    DuplicateCoordinate(Coordinate),
    /// Ship has no unhit cells left.
    AlreadySunk(Coordinate),
    /// Ship does not occupy this (unhit) cell.
    NotOccupied(Coordinate),
    /// No ship in the fleet owns this cell.
    NoShipAtCoordinate(Coordinate),
}

/// Reasons a ship placement is refused. All but [`PlacementError::Ship`]
/// are expected and lead to a re-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Input was not two coordinate tokens.
    MalformedInput,
    /// A coordinate lies outside the board.
    OutOfRange,
    /// Endpoints are on neither the same row nor the same column.
    NotStraight,
    /// Inclusive span between the endpoints differs from the ship size.
    WrongLength { expected: usize, found: usize },
    /// Ship or its one-cell halo touches another ship.
    TooCloseToOtherShip,
    /// Ship is already on the board.
    AlreadyPlaced,
    /// No ship with that index in the fleet.
    UnknownShip,
    /// No legal position is left for the ship.
    UnableToPlace,
    /// Ship bookkeeping failed while recording the placement.
    Ship(ShipError),
}

/// Errors returned when resolving an incoming shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Cell was already shot at.
    AlreadyTargeted(Coordinate),
    /// Grid and fleet disagree about who owns the cell.
    Ship(ShipError),
}

impl From<CoordError> for PlacementError {
    fn from(err: CoordError) -> Self {
        match err {
            CoordError::Malformed => PlacementError::MalformedInput,
            CoordError::OutOfRange => PlacementError::OutOfRange,
        }
    }
}

impl From<ShipError> for PlacementError {
    fn from(err: ShipError) -> Self {
        PlacementError::Ship(err)
    }
}

impl From<ShipError> for ShotError {
    fn from(err: ShipError) -> Self {
        ShotError::Ship(err)
    }
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::Malformed => write!(f, "Error! You entered the wrong coordinates"),
            CoordError::OutOfRange => write!(f, "Error! Coordinates must be within A1..J10"),
        }
    }
}

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipError::CapacityExceeded(c) => write!(f, "Ship size exceeded at {}", c),
            ShipError::DuplicateCoordinate(c) => write!(f, "Ship already occupies {}", c),
            ShipError::AlreadySunk(c) => write!(f, "Ship is already sunk (struck at {})", c),
            ShipError::NotOccupied(c) => write!(f, "Ship does not occupy {}", c),
            ShipError::NoShipAtCoordinate(c) => write!(f, "There was no ship at {}", c),
        }
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::MalformedInput => write!(f, "Error! Please enter valid coordinates"),
            PlacementError::OutOfRange => {
                write!(f, "Error! Please enter coordinates within range")
            }
            PlacementError::NotStraight => write!(f, "Error! Wrong ship location"),
            PlacementError::WrongLength { expected, found } => write!(
                f,
                "Error! Wrong length of the ship: needs {} cells, got {}",
                expected, found
            ),
            PlacementError::TooCloseToOtherShip => {
                write!(f, "Error! You placed it too close to another one")
            }
            PlacementError::AlreadyPlaced => write!(f, "Ship is already placed on the board"),
            PlacementError::UnknownShip => write!(f, "No such ship in the fleet"),
            PlacementError::UnableToPlace => write!(f, "Unable to place ship"),
            PlacementError::Ship(e) => write!(f, "Ship error: {}", e),
        }
    }
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::AlreadyTargeted(_) => write!(f, "Coordinate has been entered before!"),
            ShotError::Ship(e) => write!(f, "Ship error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordError {}
#[cfg(feature = "std")]
impl std::error::Error for ShipError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for ShotError {}
