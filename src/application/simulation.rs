use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::info;

use crate::domain::{Board, Stepper};
use crate::error::Result;
use crate::rendering::FrameSink;

/// Why a run stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    GenerationLimit,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub population: usize,
    pub reason: StopReason,
}

/// Simulation owns the board and drives render / step cycles.
/// This is the application layer that coordinates domain logic.
pub struct Simulation {
    stepper: Stepper,
    frame_delay: Duration,
    max_generations: Option<u64>,
    stop: Arc<AtomicBool>,
}

impl Simulation {
    pub fn new(board: Board, frame_delay: Duration) -> Self {
        Self {
            stepper: Stepper::new(board),
            frame_delay,
            max_generations: None,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Stop once `limit` generations have been stepped (builder pattern)
    pub fn with_max_generations(mut self, limit: Option<u64>) -> Self {
        self.max_generations = limit;
        self
    }

    /// Use an externally owned flag; setting it ends `run` before the next step
    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = stop;
        self
    }

    /// Handle that cancels the run when set
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    pub fn board(&self) -> &Board {
        self.stepper.current()
    }

    pub fn generation(&self) -> u64 {
        self.stepper.generation()
    }

    /// Advance one generation without rendering
    pub fn tick(&mut self) -> &Board {
        self.stepper.advance()
    }

    fn should_stop(&self) -> Option<StopReason> {
        if self.stop.load(Ordering::Relaxed) {
            return Some(StopReason::Cancelled);
        }
        match self.max_generations {
            Some(limit) if self.stepper.generation() >= limit => Some(StopReason::GenerationLimit),
            _ => None,
        }
    }

    /// Render, wait, step; repeat until the generation limit or the stop flag.
    ///
    /// The current generation is always presented before the stop check, so a
    /// limit of `n` shows `n + 1` frames.
    pub fn run<S: FrameSink + ?Sized>(&mut self, sink: &mut S) -> Result<RunSummary> {
        info!(
            "running {}x{} board, limit {:?}, {:?} per frame",
            self.board().size(),
            self.board().size(),
            self.max_generations,
            self.frame_delay
        );

        let reason = loop {
            sink.present(self.stepper.current(), self.stepper.generation())?;

            if let Some(reason) = self.should_stop() {
                break reason;
            }
            if !self.frame_delay.is_zero() {
                std::thread::sleep(self.frame_delay);
            }
            self.stepper.advance();
        };

        let summary = RunSummary {
            generations: self.stepper.generation(),
            population: self.stepper.current().population(),
            reason,
        };
        info!(
            "stopped after {} generations ({:?}), population {}",
            summary.generations, summary.reason, summary.population
        );
        Ok(summary)
    }
}
