mod simulation;

pub use simulation::{RunSummary, Simulation, StopReason};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::DemoConfig;
use crate::domain::{Board, SeedReport, seed};
use crate::error::Result;

/// Build and seed the starting board described by `config`
pub fn initial_board(config: &DemoConfig) -> Result<(Board, SeedReport)> {
    config.validate()?;

    let mut board = Board::new(config.board_size)?;
    let mut rng = match config.seed {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::from_os_rng(),
    };
    let report = seed(&mut board, config.seed_plan(), &mut rng)?;
    Ok((board, report))
}

/// Simulation ready to run with the config's pacing and limit
pub fn simulation_from_config(config: &DemoConfig) -> Result<Simulation> {
    let (board, _) = initial_board(config)?;
    Ok(Simulation::new(board, config.frame_delay()).with_max_generations(config.max_generations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;

    #[test]
    fn test_seeded_config_is_reproducible() {
        let config = DemoConfig {
            board_size: 25,
            seed: Some(2024),
            ..Default::default()
        };

        let (a, report_a) = initial_board(&config).unwrap();
        let (b, report_b) = initial_board(&config).unwrap();
        assert_eq!(a, b);
        assert_eq!(report_a, report_b);
        assert_eq!(report_a.placements.len(), 8);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DemoConfig {
            board_size: 0,
            ..Default::default()
        };
        assert!(matches!(initial_board(&config), Err(LifeError::InvalidConfig(_))));
    }

    #[test]
    fn test_simulation_from_config_respects_limit() {
        let config = DemoConfig {
            board_size: 10,
            seed: Some(1),
            frame_delay_ms: 0,
            max_generations: Some(3),
            ..Default::default()
        };
        let mut sim = simulation_from_config(&config).unwrap();
        let mut sink = crate::rendering::TerminalSink::new(Vec::<u8>::new(), Default::default());

        let summary = sim.run(&mut sink).unwrap();
        assert_eq!(summary.generations, 3);
        assert_eq!(summary.reason, StopReason::GenerationLimit);
    }
}
