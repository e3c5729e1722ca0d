//! Generation stepping.
//!
//! Every next state is computed from the previous generation only: the
//! source board is read-only for the whole step and the result is written
//! into a second buffer. [`Stepper`] keeps two buffers and swaps them so a
//! long run never reallocates.

use std::sync::Arc;

use log::debug;

use super::{Board, Position};

/// Pure evolution - returns the successor board, leaving `board` untouched
pub fn step(board: &Board) -> Board {
    let mut next = board.blank_like();
    step_into(board, &mut next);
    next
}

/// Write the successor of `current` into `next`.
///
/// Both boards must have the same size. Every cell of `next` is overwritten,
/// so its previous contents do not matter.
pub fn step_into(current: &Board, next: &mut Board) {
    assert!(
        Arc::ptr_eq(current.topology(), next.topology()) || current.size() == next.size(),
        "cannot step a {}x{} board into a {}x{} buffer",
        current.size(),
        current.size(),
        next.size(),
        next.size()
    );

    let size = current.size();
    for (idx, cell) in next.cells_mut().iter_mut().enumerate() {
        let pos = Position::new(idx / size, idx % size);
        *cell = current.cell(pos).evolve(current.live_neighbors(pos));
    }
}

/// Double-buffered stepper that owns the board being simulated.
#[derive(Clone, Debug)]
pub struct Stepper {
    current: Board,
    spare: Board,
    generation: u64,
}

impl Stepper {
    pub fn new(board: Board) -> Self {
        let spare = board.blank_like();
        Self {
            current: board,
            spare,
            generation: 0,
        }
    }

    /// Board for the current generation
    pub fn current(&self) -> &Board {
        &self.current
    }

    /// Mutable access for seeding or editing between generations
    pub fn current_mut(&mut self) -> &mut Board {
        &mut self.current
    }

    /// Number of generations advanced since construction
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance one generation and return the new current board
    pub fn advance(&mut self) -> &Board {
        step_into(&self.current, &mut self.spare);
        std::mem::swap(&mut self.current, &mut self.spare);
        self.generation += 1;

        debug!(
            "generation {}: population {}",
            self.generation,
            self.current.population()
        );
        &self.current
    }

    /// Advance `generations` times
    pub fn advance_by(&mut self, generations: u64) -> &Board {
        for _ in 0..generations {
            self.advance();
        }
        &self.current
    }

    pub fn into_board(self) -> Board {
        self.current
    }
}
