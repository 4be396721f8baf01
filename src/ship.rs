//! Ship definitions and per-ship damage tracking.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use crate::common::ShipError;
use crate::coord::Coordinate;

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    size: usize,
}

impl ShipType {
    /// Create a new ship type. `size` must be positive.
    pub const fn new(name: &'static str, size: usize) -> Self {
        assert!(size > 0, "ship size must be positive");
        Self { name, size }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length in cells.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// A ship and the cells it still holds unhit.
///
/// `cells` is the full footprint in placement order; `remaining` shrinks by
/// one per hit, so `remaining.len() <= size` always holds.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    cells: Vec<Coordinate>,
    remaining: BTreeSet<Coordinate>,
}

impl Ship {
    /// A ship not yet on the board.
    pub fn new(ship_type: ShipType) -> Self {
        Ship {
            ship_type,
            cells: Vec::with_capacity(ship_type.size()),
            remaining: BTreeSet::new(),
        }
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn size(&self) -> usize {
        self.ship_type.size()
    }

    /// Add `coord` to the ship's footprint.
    pub fn occupy(&mut self, coord: Coordinate) -> Result<(), ShipError> {
        if self.cells.len() >= self.size() {
            return Err(ShipError::CapacityExceeded(coord));
        }
        if !self.remaining.insert(coord) {
            return Err(ShipError::DuplicateCoordinate(coord));
        }
        self.cells.push(coord);
        Ok(())
    }

    /// Register a hit on `coord`, removing it from the unhit cells.
    pub fn strike(&mut self, coord: Coordinate) -> Result<(), ShipError> {
        if self.remaining.is_empty() {
            return Err(ShipError::AlreadySunk(coord));
        }
        if !self.remaining.remove(&coord) {
            return Err(ShipError::NotOccupied(coord));
        }
        Ok(())
    }

    /// `true` once no unhit cell is left.
    pub fn is_sunk(&self) -> bool {
        self.remaining.is_empty()
    }

    /// `true` once the ship covers `size` cells.
    pub fn is_placed(&self) -> bool {
        self.cells.len() == self.size()
    }

    /// Whether `coord` is one of the ship's unhit cells.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.remaining.contains(&coord)
    }

    /// Number of unhit cells.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Footprint in placement order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().copied()
    }

    /// Find the ship among `ships` that still holds `coord` unhit.
    pub fn locate<'a, I>(coord: Coordinate, ships: I) -> Result<&'a mut Ship, ShipError>
    where
        I: IntoIterator<Item = &'a mut Ship>,
    {
        ships
            .into_iter()
            .find(|ship| ship.occupies(coord))
            .ok_or(ShipError::NoShipAtCoordinate(coord))
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", size: {}, placed: {}, remaining: {} }}",
            self.name(),
            self.size(),
            self.cells.len(),
            self.remaining.len(),
        )
    }
}
