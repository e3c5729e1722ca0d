//! Neighbour lookup for a bounded square board.
//!
//! The board edge is a hard wall: cells past it simply do not exist, so
//! edge cells have 5 neighbours and corner cells 3.

use super::Position;

/// The eight compass offsets as (d_row, d_col), in row-major order.
const DELTAS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Up to eight in-bounds neighbours of one position, in a stable order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighborSet {
    positions: [Position; 8],
    len: u8,
}

impl NeighborSet {
    const fn empty() -> Self {
        Self {
            positions: [Position::new(0, 0); 8],
            len: 0,
        }
    }

    fn push(&mut self, pos: Position) {
        self.positions[self.len as usize] = pos;
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.positions[..self.len as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.as_slice().iter().copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.as_slice().contains(&pos)
    }
}

/// Compute the neighbours of `position` on a board of side `board_size`.
///
/// Pure function of its inputs. A candidate is kept only when both of its
/// coordinates fall in `[0, board_size)`.
pub fn neighbors_of(position: Position, board_size: usize) -> NeighborSet {
    DELTAS
        .iter()
        .filter_map(|&(d_row, d_col)| position.offset(d_row, d_col, board_size))
        .fold(NeighborSet::empty(), |mut set, pos| {
            set.push(pos);
            set
        })
}

/// Neighbour sets for every position of one board size, computed once.
#[derive(Debug, PartialEq, Eq)]
pub struct Topology {
    size: usize,
    neighbors: Vec<NeighborSet>,
}

impl Topology {
    pub fn new(size: usize) -> Self {
        let neighbors = (0..size)
            .flat_map(|row| (0..size).map(move |col| Position::new(row, col)))
            .map(|pos| neighbors_of(pos, size))
            .collect();

        Self { size, neighbors }
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    /// Precomputed neighbours of an in-bounds position
    pub fn neighbors_of(&self, position: Position) -> &NeighborSet {
        &self.neighbors[position.index(self.size)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_has_eight() {
        let set = neighbors_of(Position::new(2, 2), 5);
        assert_eq!(set.len(), 8);
        assert!(!set.contains(Position::new(2, 2)));
    }

    #[test]
    fn test_corners_have_three() {
        let n = 6;
        for corner in [(0, 0), (0, n - 1), (n - 1, 0), (n - 1, n - 1)] {
            let set = neighbors_of(corner.into(), n);
            assert_eq!(set.len(), 3, "corner {:?}", corner);
        }

        let origin = neighbors_of(Position::new(0, 0), n);
        assert_eq!(
            origin.as_slice(),
            &[Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn test_edges_have_five() {
        let n = 6;
        assert_eq!(neighbors_of(Position::new(0, 3), n).len(), 5);
        assert_eq!(neighbors_of(Position::new(3, 0), n).len(), 5);
        assert_eq!(neighbors_of(Position::new(n - 1, 3), n).len(), 5);
        assert_eq!(neighbors_of(Position::new(3, n - 1), n).len(), 5);
    }

    #[test]
    fn test_all_neighbors_in_bounds_for_every_size() {
        for n in 2..=7 {
            for row in 0..n {
                for col in 0..n {
                    let pos = Position::new(row, col);
                    let set = neighbors_of(pos, n);

                    assert!((3..=8).contains(&set.len()));
                    assert!(!set.contains(pos));
                    for neighbor in set.iter() {
                        assert!(neighbor.is_within(n));
                        assert!(neighbor.row.abs_diff(row) <= 1);
                        assert!(neighbor.col.abs_diff(col) <= 1);
                    }
                }
            }
        }
    }

    #[test]
    fn test_single_cell_board_has_no_neighbors() {
        assert!(neighbors_of(Position::new(0, 0), 1).is_empty());
    }

    #[test]
    fn test_topology_matches_direct_computation() {
        let topology = Topology::new(4);
        for row in 0..4 {
            for col in 0..4 {
                let pos = Position::new(row, col);
                assert_eq!(topology.neighbors_of(pos), &neighbors_of(pos, 4));
            }
        }
    }
}
