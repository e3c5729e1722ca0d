use super::rules;

/// Cell represents the state of one grid position: Dead or Alive.
/// Cells carry no identity of their own beyond where they sit on the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Next state of this cell given its live-neighbour count
    pub const fn evolve(self, live_neighbors: u8) -> Self {
        Self::from_alive(rules::next_state(self.is_alive(), live_neighbors))
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Self::from_alive(alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dead() {
        assert_eq!(Cell::default(), Cell::Dead);
    }

    #[test]
    fn test_bool_conversion() {
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::from(false), Cell::Dead);
        assert!(Cell::Alive.is_alive());
        assert!(!Cell::Dead.is_alive());
    }

    #[test]
    fn test_evolve_follows_rule() {
        assert_eq!(Cell::Alive.evolve(1), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(2), Cell::Alive);
        assert_eq!(Cell::Dead.evolve(3), Cell::Alive);
        assert_eq!(Cell::Dead.evolve(2), Cell::Dead);
    }
}
