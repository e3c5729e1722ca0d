use std::sync::Arc;

use log::debug;

use super::{Cell, NeighborSet, Position, Topology};
use crate::error::{LifeError, Result};

/// Board owns the square grid of cells and the neighbour table for its size.
///
/// Positions handed to `is_alive` / `set_alive` must lie inside the board.
/// Addressing outside it is a caller bug and panics immediately; use
/// [`Board::position`] to build a checked position from untrusted input.
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    topology: Arc<Topology>,
}

impl Board {
    /// Create a new board with all cells initially dead
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(LifeError::InvalidBoardSize { size });
        }

        debug!("building {size}x{size} board");
        Ok(Self::with_topology(Arc::new(Topology::new(size))))
    }

    /// Empty board sharing an already computed neighbour table.
    pub(crate) fn with_topology(topology: Arc<Topology>) -> Self {
        let size = topology.size();
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
            topology,
        }
    }

    /// A fresh, all-dead board of the same size sharing this board's topology
    pub fn blank_like(&self) -> Self {
        Self::with_topology(Arc::clone(&self.topology))
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    /// Checked position constructor
    pub fn position(&self, row: usize, col: usize) -> Result<Position> {
        let pos = Position::new(row, col);
        if pos.is_within(self.size) {
            Ok(pos)
        } else {
            Err(LifeError::OutOfBounds {
                row: row as isize,
                col: col as isize,
                size: self.size,
            })
        }
    }

    pub const fn contains(&self, position: Position) -> bool {
        position.is_within(self.size)
    }

    fn index_of(&self, position: Position) -> usize {
        assert!(
            self.contains(position),
            "position ({}, {}) is outside the {}x{} board",
            position.row,
            position.col,
            self.size,
            self.size
        );
        position.index(self.size)
    }

    pub fn cell(&self, position: Position) -> Cell {
        self.cells[self.index_of(position)]
    }

    pub fn is_alive(&self, position: Position) -> bool {
        self.cell(position).is_alive()
    }

    pub fn set_alive(&mut self, position: Position, alive: bool) {
        let idx = self.index_of(position);
        self.cells[idx] = Cell::from_alive(alive);
    }

    /// Precomputed neighbours of `position`
    pub fn neighbors_of(&self, position: Position) -> &NeighborSet {
        self.index_of(position); // bounds check
        self.topology.neighbors_of(position)
    }

    /// Number of alive cells among the neighbours of `position`
    pub fn live_neighbors(&self, position: Position) -> u8 {
        self.neighbors_of(position)
            .iter()
            .filter(|&n| self.cells[n.index(self.size)].is_alive())
            .count() as u8
    }

    /// Count total alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Clear all cells
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (Position::new(idx / self.size, idx % self.size), cell))
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Positions of all alive cells, row-major
    pub fn alive_positions(&self) -> Vec<Position> {
        self.iter_cells()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(pos, _)| pos)
            .collect()
    }

    pub(crate) fn topology(&self) -> &Arc<Topology> {
        &self.topology
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}

/// Boards are equal when they have the same size and the same alive pattern.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl Eq for Board {}
