mod position;
mod cell;
mod board;
pub mod topology;
pub mod rules;
pub mod stepper;
pub mod patterns;
pub mod seeding;

pub use position::Position;
pub use cell::Cell;
pub use board::Board;
pub use topology::{NeighborSet, Topology, neighbors_of};
pub use rules::next_state;
pub use stepper::{Stepper, step, step_into};
pub use patterns::{Direction, Offset, Orientation, Pattern, presets, spawn_blinker, spawn_glider};
pub use seeding::{Placement, SeedPlan, SeedReport, seed};
