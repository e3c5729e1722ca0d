// Domain layer - board, topology, rule, stepping, patterns, seeding
pub mod domain;

// Application layer - seeding from config and the driving loop
pub mod application;

// Infrastructure layer - rendering, configuration, errors
pub mod rendering;
pub mod config;
pub mod error;

// Re-exports for convenience
pub use domain::{Board, Cell, Position, Stepper, presets, step};
pub use application::{RunSummary, Simulation, StopReason};
pub use config::DemoConfig;
pub use error::{LifeError, Result};
