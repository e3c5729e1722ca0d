//! Random initial seeding.
//!
//! The random source is injected so callers (and tests) control it; pass a
//! seeded `StdRng` for a reproducible board.

use log::info;
use rand::Rng;

use super::patterns::{presets, Direction, Orientation, Pattern};
use super::{Board, Position};
use crate::error::{LifeError, Result};

/// How many of each pattern to scatter over the board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedPlan {
    pub blinkers: usize,
    pub gliders: usize,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            blinkers: 3,
            gliders: 5,
        }
    }
}

/// One pattern written onto the board during seeding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub pattern: &'static str,
    pub anchor: Position,
    pub orientation: Orientation,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub placements: Vec<Placement>,
}

/// Pick a uniformly random anchor from which `pattern` fits entirely on the board
pub fn random_anchor<R: Rng + ?Sized>(
    pattern: &Pattern,
    orientation: Orientation,
    size: usize,
    rng: &mut R,
) -> Result<Position> {
    let (rows, cols) = pattern
        .anchor_range(orientation, size)
        .ok_or(LifeError::PatternDoesNotFit {
            pattern: pattern.name,
            size,
        })?;

    Ok(Position::new(rng.random_range(rows), rng.random_range(cols)))
}

/// Random orientation, each axis flipped with probability 1/2
pub fn random_orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    Orientation::new(
        Direction::from_forward(rng.random_bool(0.5)),
        Direction::from_forward(rng.random_bool(0.5)),
    )
}

/// Scatter blinkers then gliders over `board`.
///
/// Blinkers keep their horizontal orientation; each glider gets a random
/// travel direction. Placements may overlap.
pub fn seed<R: Rng + ?Sized>(board: &mut Board, plan: SeedPlan, rng: &mut R) -> Result<SeedReport> {
    let size = board.size();
    let mut report = SeedReport::default();

    for _ in 0..plan.blinkers {
        let orientation = Orientation::default();
        let anchor = random_anchor(&presets::BLINKER, orientation, size, rng)?;
        place(board, &presets::BLINKER, anchor, orientation, &mut report)?;
    }

    for _ in 0..plan.gliders {
        let orientation = random_orientation(rng);
        let anchor = random_anchor(&presets::GLIDER, orientation, size, rng)?;
        place(board, &presets::GLIDER, anchor, orientation, &mut report)?;
    }

    info!(
        "seeded {} blinkers and {} gliders, population {}",
        plan.blinkers,
        plan.gliders,
        board.population()
    );
    Ok(report)
}

fn place(
    board: &mut Board,
    pattern: &Pattern,
    anchor: Position,
    orientation: Orientation,
    report: &mut SeedReport,
) -> Result<()> {
    pattern.spawn(board, anchor, orientation)?;
    report.placements.push(Placement {
        pattern: pattern.name,
        anchor,
        orientation,
    });
    Ok(())
}
