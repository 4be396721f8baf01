//! One player's grid and fleet: placement validation, shot resolution and
//! rendering.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{PlacementError, ShotError, ShotResult};
use crate::config::{BOARD_SIZE, SHIPS};
use crate::coord::Coordinate;
use crate::ship::{Ship, ShipType};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Ship(Orientation),
    Miss,
    Hit,
}

impl Cell {
    pub fn is_ship(&self) -> bool {
        matches!(self, Cell::Ship(_))
    }

    pub fn is_targeted(&self) -> bool {
        matches!(self, Cell::Miss | Cell::Hit)
    }

    /// Character shown for this cell. Under fog, ships look like water.
    pub fn symbol(&self, fog_of_war: bool) -> char {
        match self {
            Cell::Empty => '~',
            Cell::Ship(_) if fog_of_war => '~',
            Cell::Ship(_) => 'O',
            Cell::Miss => 'M',
            Cell::Hit => 'X',
        }
    }
}

/// Lifecycle of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardPhase {
    /// Some ship is still waiting to be placed.
    Setup,
    /// Fleet is deployed and at least one ship is afloat.
    Playing,
    /// Every ship is sunk.
    Defeated,
}

/// A validated placement, ends ordered so `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub start: Coordinate,
    pub end: Coordinate,
    pub orientation: Orientation,
}

impl Placement {
    /// Cells covered, in increasing row/column order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (start, end) = (self.start, self.end);
        (start.row()..=end.row())
            .flat_map(move |r| (start.col()..=end.col()).filter_map(move |c| Coordinate::new(r, c)))
    }
}

type Grid<T> = [[T; BOARD_SIZE]; BOARD_SIZE];

pub struct Board {
    grid: Grid<Cell>,
    // fleet slot owning each ship cell
    owners: Grid<Option<usize>>,
    // `None` once the ship in that slot is sunk
    fleet: Vec<Option<Ship>>,
}

impl Board {
    /// Empty board carrying the standard fleet.
    pub fn new() -> Self {
        Self::with_fleet(&SHIPS)
    }

    /// Empty board carrying the given ships, addressed by their index.
    pub fn with_fleet(ships: &[ShipType]) -> Self {
        Board {
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            owners: [[None; BOARD_SIZE]; BOARD_SIZE],
            fleet: ships.iter().map(|&t| Some(Ship::new(t))).collect(),
        }
    }

    pub fn cell(&self, coord: Coordinate) -> Cell {
        self.grid[coord.row()][coord.col()]
    }

    /// Number of cells currently showing an unhit ship segment.
    pub fn ship_cells(&self) -> usize {
        self.grid.iter().flatten().filter(|c| c.is_ship()).count()
    }

    /// Ships not yet sunk.
    pub fn fleet(&self) -> impl Iterator<Item = &Ship> {
        self.fleet.iter().flatten()
    }

    /// Ship at fleet `index`, or `None` if unknown or sunk.
    pub fn ship(&self, index: usize) -> Option<&Ship> {
        self.fleet.get(index).and_then(Option::as_ref)
    }

    /// Index of the first ship still waiting for a position.
    pub fn next_unplaced(&self) -> Option<usize> {
        self.fleet
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|s| !s.is_placed()))
    }

    pub fn phase(&self) -> BoardPhase {
        if self.is_defeated() {
            BoardPhase::Defeated
        } else if self.next_unplaced().is_some() {
            BoardPhase::Setup
        } else {
            BoardPhase::Playing
        }
    }

    /// `true` once the fleet is empty.
    pub fn is_defeated(&self) -> bool {
        self.fleet.iter().all(Option::is_none)
    }

    /// Validate a placement for ship `index` between `a` and `b` without
    /// touching the board.
    pub fn check_placement(
        &self,
        index: usize,
        a: Coordinate,
        b: Coordinate,
    ) -> Result<Placement, PlacementError> {
        let slot = self.fleet.get(index).ok_or(PlacementError::UnknownShip)?;
        let ship = match slot {
            Some(ship) if !ship.is_placed() => ship,
            _ => return Err(PlacementError::AlreadyPlaced),
        };

        let start = Coordinate::new(a.row().min(b.row()), a.col().min(b.col()));
        let end = Coordinate::new(a.row().max(b.row()), a.col().max(b.col()));
        let (start, end) = start.zip(end).ok_or(PlacementError::OutOfRange)?;

        if start.row() != end.row() && start.col() != end.col() {
            return Err(PlacementError::NotStraight);
        }
        let orientation = if start.row() == end.row() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let span = (end.row() - start.row()) + (end.col() - start.col()) + 1;
        if span != ship.size() {
            return Err(PlacementError::WrongLength {
                expected: ship.size(),
                found: span,
            });
        }

        let rows = start.row().saturating_sub(1)..=(end.row() + 1).min(BOARD_SIZE - 1);
        let cols = start.col().saturating_sub(1)..=(end.col() + 1).min(BOARD_SIZE - 1);
        for r in rows {
            for c in cols.clone() {
                if self.grid[r][c] != Cell::Empty {
                    return Err(PlacementError::TooCloseToOtherShip);
                }
            }
        }

        Ok(Placement {
            start,
            end,
            orientation,
        })
    }

    /// Place ship `index` with ends `a` and `b`. On error the board is
    /// unchanged.
    pub fn place_ship(
        &mut self,
        index: usize,
        a: Coordinate,
        b: Coordinate,
    ) -> Result<Placement, PlacementError> {
        let placement = self.check_placement(index, a, b)?;
        let ship = self
            .fleet
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(PlacementError::UnknownShip)?;

        // record on the ship first so a bookkeeping failure leaves the grid alone
        let mut staged = ship.clone();
        for coord in placement.cells() {
            staged.occupy(coord)?;
        }
        *ship = staged;
        for coord in placement.cells() {
            self.grid[coord.row()][coord.col()] = Cell::Ship(placement.orientation);
            self.owners[coord.row()][coord.col()] = Some(index);
        }
        log::debug!(
            "placed {} from {} to {} ({:?})",
            ship.name(),
            placement.start,
            placement.end,
            placement.orientation
        );
        Ok(placement)
    }

    /// Pick a uniformly random legal placement for ship `index`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        index: usize,
    ) -> Result<Placement, PlacementError> {
        let size = match self.fleet.get(index) {
            None => return Err(PlacementError::UnknownShip),
            Some(Some(ship)) if !ship.is_placed() => ship.size(),
            Some(_) => return Err(PlacementError::AlreadyPlaced),
        };
        let mut candidates = Vec::new();
        for start in Coordinate::all() {
            let ends = [
                Coordinate::new(start.row(), start.col() + size - 1),
                Coordinate::new(start.row() + size - 1, start.col()),
            ];
            for end in ends.into_iter().flatten() {
                if let Ok(p) = self.check_placement(index, start, end) {
                    if !candidates.contains(&p) {
                        candidates.push(p);
                    }
                }
            }
        }
        if candidates.is_empty() {
            return Err(PlacementError::UnableToPlace);
        }
        Ok(candidates[rng.random_range(0..candidates.len())])
    }

    /// Place every ship that is still off the board at random.
    pub fn place_remaining_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<(), PlacementError> {
        while let Some(index) = self.next_unplaced() {
            let p = self.random_placement(rng, index)?;
            self.place_ship(index, p.start, p.end)?;
        }
        Ok(())
    }

    /// Resolve an incoming shot at `coord`.
    pub fn receive_shot(&mut self, coord: Coordinate) -> Result<ShotResult, ShotError> {
        let (r, c) = (coord.row(), coord.col());
        match self.grid[r][c] {
            Cell::Miss | Cell::Hit => Err(ShotError::AlreadyTargeted(coord)),
            Cell::Empty => {
                self.grid[r][c] = Cell::Miss;
                log::debug!("shot at {} missed", coord);
                Ok(ShotResult::Miss)
            }
            Cell::Ship(_) => {
                let slot = self.owners[r][c];
                let ship = Ship::locate(
                    coord,
                    slot.and_then(|i| self.fleet.get_mut(i)).and_then(Option::as_mut),
                )?;
                ship.strike(coord)?;
                self.grid[r][c] = Cell::Hit;

                if !ship.is_sunk() {
                    log::debug!("shot at {} hit {}", coord, ship.name());
                    return Ok(ShotResult::Hit);
                }
                let name = ship.name();
                if let Some(i) = slot {
                    self.fleet[i] = None;
                }
                log::debug!("shot at {} sank {}", coord, name);
                if self.is_defeated() {
                    Ok(ShotResult::SunkLastShip(name))
                } else {
                    Ok(ShotResult::Sunk(name))
                }
            }
        }
    }

    /// Borrowing view that renders the grid with or without fog-of-war.
    pub fn view(&self, fog_of_war: bool) -> BoardView<'_> {
        BoardView {
            board: self,
            fog_of_war,
        }
    }

    pub fn render(&self, fog_of_war: bool) -> String {
        self.view(fog_of_war).to_string()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ phase: {:?}, fleet: {:?} }}", self.phase(), self.fleet)?;
        write!(f, "{}", self.view(false))
    }
}

/// Text rendering of a [`Board`]: column numbers across the top, row
/// letters down the side.
pub struct BoardView<'a> {
    board: &'a Board,
    fog_of_war: bool,
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {}", c + 1)?;
        }
        writeln!(f)?;
        for (r, row) in self.board.grid.iter().enumerate() {
            write!(f, "{}", Coordinate::row_label(r))?;
            for cell in row {
                write!(f, " {}", cell.symbol(self.fog_of_war))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
