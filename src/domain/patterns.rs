use log::trace;

use super::{Board, Position};
use crate::error::{LifeError, Result};

/// Offset of one alive cell from a pattern's anchor.
/// `dx` moves along columns (right is positive), `dy` along rows (down is positive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Offset {
    pub dx: isize,
    pub dy: isize,
}

const fn offset(dx: isize, dy: isize) -> Offset {
    Offset { dx, dy }
}

/// Travel direction along one axis; flips a pattern when `Backward`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub const fn sign(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    pub const fn from_forward(forward: bool) -> Self {
        if forward { Direction::Forward } else { Direction::Backward }
    }
}

/// Reflection of a pattern across either axis.
/// Forward/Forward is the pattern as written; for the glider that means
/// travelling right and down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Orientation {
    pub horizontal: Direction,
    pub vertical: Direction,
}

impl Orientation {
    pub const fn new(horizontal: Direction, vertical: Direction) -> Self {
        Self { horizontal, vertical }
    }

    /// All four reflections
    pub const ALL: [Orientation; 4] = [
        Orientation::new(Direction::Forward, Direction::Forward),
        Orientation::new(Direction::Backward, Direction::Forward),
        Orientation::new(Direction::Forward, Direction::Backward),
        Orientation::new(Direction::Backward, Direction::Backward),
    ];

    const fn apply(self, offset: Offset) -> (isize, isize) {
        (offset.dy * self.vertical.sign(), offset.dx * self.horizontal.sign())
    }
}

/// Represents a pattern that can be placed on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: &'static [Offset],
}

impl Pattern {
    /// Inclusive range of valid anchor (rows, cols) for this orientation,
    /// or `None` when the pattern cannot fit on a board of this size at all.
    pub fn anchor_range(
        &self,
        orientation: Orientation,
        size: usize,
    ) -> Option<(std::ops::RangeInclusive<usize>, std::ops::RangeInclusive<usize>)> {
        let deltas = self.cells.iter().map(|&o| orientation.apply(o));
        let (min_row, max_row, min_col, max_col) = deltas.fold(
            (0isize, 0isize, 0isize, 0isize),
            |(lo_r, hi_r, lo_c, hi_c), (d_row, d_col)| {
                (lo_r.min(d_row), hi_r.max(d_row), lo_c.min(d_col), hi_c.max(d_col))
            },
        );

        let last = size as isize - 1;
        let rows = (-min_row, last - max_row);
        let cols = (-min_col, last - max_col);
        if rows.0 > rows.1 || cols.0 > cols.1 {
            return None;
        }

        Some((
            rows.0 as usize..=rows.1 as usize,
            cols.0 as usize..=cols.1 as usize,
        ))
    }

    /// Every cell of the pattern fits on the board from this anchor
    pub fn fits(&self, anchor: Position, orientation: Orientation, size: usize) -> bool {
        self.positions(anchor, orientation, size).is_ok()
    }

    /// Board positions covered by the pattern placed at `anchor`
    pub fn positions(
        &self,
        anchor: Position,
        orientation: Orientation,
        size: usize,
    ) -> Result<Vec<Position>> {
        self.cells
            .iter()
            .map(|&o| {
                let (d_row, d_col) = orientation.apply(o);
                anchor
                    .offset(d_row, d_col, size)
                    .ok_or(LifeError::PatternOutOfBounds {
                        pattern: self.name,
                        row: anchor.row,
                        col: anchor.col,
                        size,
                    })
            })
            .collect()
    }

    /// Place pattern on board at `anchor`.
    ///
    /// Only ever turns cells on, so overlapping placements compose. The whole
    /// placement is checked first; a pattern that would cross the edge is
    /// rejected and the board is left untouched.
    pub fn spawn(&self, board: &mut Board, anchor: Position, orientation: Orientation) -> Result<()> {
        let positions = self.positions(anchor, orientation, board.size())?;
        for pos in positions {
            board.set_alive(pos, true);
        }

        trace!(
            "spawned {} at ({}, {}) {:?}",
            self.name, anchor.row, anchor.col, orientation
        );
        Ok(())
    }
}

/// Horizontal blinker centred on `anchor`
pub fn spawn_blinker(board: &mut Board, anchor: Position) -> Result<()> {
    presets::BLINKER.spawn(board, anchor, Orientation::default())
}

/// Glider around `anchor`, reflected so it travels in the given directions
pub fn spawn_glider(
    board: &mut Board,
    anchor: Position,
    horizontal: Direction,
    vertical: Direction,
) -> Result<()> {
    presets::GLIDER.spawn(board, anchor, Orientation::new(horizontal, vertical))
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Blinker - period 2 oscillator
    pub const BLINKER: Pattern = Pattern {
        name: "Blinker",
        description: "Oscillator (period 2)",
        cells: &[offset(-1, 0), offset(0, 0), offset(1, 0)],
    };

    /// Glider - simplest spaceship, moves diagonally
    pub const GLIDER: Pattern = Pattern {
        name: "Glider",
        description: "Moves diagonally (period 4)",
        cells: &[
                                    offset(1, -1),
            offset(-1, 0),                 offset(1, 0),
                           offset(0, 1),   offset(1, 1),
        ],
    };

    /// Block - simple still life
    pub const BLOCK: Pattern = Pattern {
        name: "Block",
        description: "Still life",
        cells: &[offset(0, 0), offset(1, 0), offset(0, 1), offset(1, 1)],
    };

    const ALL: &[Pattern] = &[BLINKER, GLIDER, BLOCK];

    /// Get all available patterns
    pub fn all_patterns() -> &'static [Pattern] {
        ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stepper::{step, Stepper};

    fn sorted(mut positions: Vec<Position>) -> Vec<Position> {
        positions.sort();
        positions
    }

    #[test]
    fn test_blinker_is_horizontal() {
        let mut board = Board::new(5).unwrap();
        spawn_blinker(&mut board, Position::new(2, 2)).unwrap();

        assert_eq!(
            board.alive_positions(),
            vec![Position::new(2, 1), Position::new(2, 2), Position::new(2, 3)]
        );
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let mut board = Board::new(9).unwrap();
        spawn_blinker(&mut board, Position::new(4, 4)).unwrap();

        let once = step(&board);
        assert_ne!(once, board);
        assert_eq!(step(&once), board);
    }

    #[test]
    fn test_glider_shape() {
        let mut board = Board::new(5).unwrap();
        spawn_glider(&mut board, Position::new(2, 2), Direction::Forward, Direction::Forward).unwrap();

        // ..#
        // #.#
        // .##
        assert_eq!(
            board.alive_positions(),
            vec![
                Position::new(1, 3),
                Position::new(2, 1),
                Position::new(2, 3),
                Position::new(3, 2),
                Position::new(3, 3),
            ]
        );
    }

    #[test]
    fn test_glider_travels_in_all_orientations() {
        for orientation in Orientation::ALL {
            let anchor = Position::new(8, 8);
            let mut board = Board::new(17).unwrap();
            spawn_glider(&mut board, anchor, orientation.horizontal, orientation.vertical).unwrap();

            let mut stepper = Stepper::new(board);
            stepper.advance_by(4);

            let moved = Position::new(
                (8 + orientation.vertical.sign()) as usize,
                (8 + orientation.horizontal.sign()) as usize,
            );
            let expected = presets::GLIDER.positions(moved, orientation, 17).unwrap();
            assert_eq!(
                sorted(stepper.current().alive_positions()),
                sorted(expected),
                "orientation {:?}",
                orientation
            );
        }
    }

    #[test]
    fn test_reflection_flips_shape() {
        let mut board = Board::new(5).unwrap();
        spawn_glider(&mut board, Position::new(2, 2), Direction::Backward, Direction::Backward).unwrap();

        // ##.
        // #.#
        // #..
        assert_eq!(
            board.alive_positions(),
            vec![
                Position::new(1, 1),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 3),
                Position::new(3, 1),
            ]
        );
    }

    #[test]
    fn test_out_of_bounds_rejected_without_writing() {
        let mut board = Board::new(5).unwrap();

        let err = spawn_blinker(&mut board, Position::new(2, 4)).unwrap_err();
        assert!(matches!(
            err,
            LifeError::PatternOutOfBounds { pattern: "Blinker", row: 2, col: 4, size: 5 }
        ));
        assert_eq!(board.population(), 0);

        assert!(spawn_glider(&mut board, Position::new(0, 2), Direction::Forward, Direction::Forward).is_err());
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn test_overlapping_spawns_are_additive() {
        let mut board = Board::new(7).unwrap();
        spawn_blinker(&mut board, Position::new(3, 3)).unwrap();
        spawn_blinker(&mut board, Position::new(3, 4)).unwrap();

        assert_eq!(board.population(), 4);
        assert!(board.is_alive(Position::new(3, 2)));
        assert!(board.is_alive(Position::new(3, 5)));
    }

    #[test]
    fn test_anchor_range_blinker_needs_horizontal_margin() {
        let (rows, cols) = presets::BLINKER
            .anchor_range(Orientation::default(), 10)
            .unwrap();
        assert_eq!(rows, 0..=9);
        assert_eq!(cols, 1..=8);

        assert!(presets::BLINKER.anchor_range(Orientation::default(), 2).is_none());
        assert!(presets::BLINKER.anchor_range(Orientation::default(), 3).is_some());
    }

    #[test]
    fn test_anchor_range_matches_fits() {
        let size = 6;
        for pattern in presets::all_patterns() {
            for orientation in Orientation::ALL {
                let range = pattern.anchor_range(orientation, size);
                for row in 0..size {
                    for col in 0..size {
                        let anchor = Position::new(row, col);
                        let in_range = range
                            .as_ref()
                            .is_some_and(|(r, c)| r.contains(&row) && c.contains(&col));
                        assert_eq!(
                            pattern.fits(anchor, orientation, size),
                            in_range,
                            "{} at {:?} {:?}",
                            pattern.name,
                            anchor,
                            orientation
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_block_is_still_life() {
        let mut board = Board::new(6).unwrap();
        presets::BLOCK
            .spawn(&mut board, Position::new(2, 2), Orientation::default())
            .unwrap();
        assert_eq!(step(&board), board);
    }
}
