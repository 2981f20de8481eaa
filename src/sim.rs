//! Headless simulation driver
//!
//! Runs one or more CPU-controlled games at a fixed timestep with no rendering.
//! Each seat owns its game, its bot and a garbage sequencer; seats share nothing.

use crate::core::{CoreError, GameConfig, GameSnapshot, GameState, InputProvider, SimpleRng};
use crate::engine::{CpuProvider, EvaluatorKind};

/// Simulated seconds between garbage waves
pub const GARBAGE_INTERVAL_SECS: f32 = 30.0;

/// Offset applied to the game seed for the garbage sequencer
const GARBAGE_SEED_OFFSET: u32 = 0x9E37_79B9;

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Upper bound on simulated ticks
    pub ticks: u64,
    pub tick_secs: f32,
    pub evaluator: EvaluatorKind,
    /// Add a second seat named "CPU"
    pub versus: bool,
    /// Garbage lines per wave (0 disables garbage)
    pub garbage_lines: u32,
    pub log_decisions: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ticks: 10_000,
            tick_secs: 1.0 / 60.0,
            evaluator: EvaluatorKind::default(),
            versus: false,
            garbage_lines: 0,
            log_decisions: false,
        }
    }
}

struct Seat {
    game: GameState,
    cpu: CpuProvider<EvaluatorKind>,
    garbage_rng: SimpleRng,
}

impl Seat {
    fn new(config: &GameConfig, sim: &SimConfig) -> Result<Self, CoreError> {
        Ok(Self {
            game: GameState::from_config(config)?,
            cpu: CpuProvider::new(sim.evaluator).with_decision_logging(sim.log_decisions),
            garbage_rng: SimpleRng::new(config.seed.wrapping_add(GARBAGE_SEED_OFFSET)),
        })
    }
}

pub struct Simulation {
    seats: Vec<Seat>,
    config: SimConfig,
    ticks_run: u64,
    elapsed_secs: f32,
    next_garbage_at: f32,
}

impl Simulation {
    pub fn new(game: &GameConfig, config: SimConfig) -> Result<Self, CoreError> {
        let mut seats = vec![Seat::new(game, &config)?];
        if config.versus {
            let rival = GameConfig {
                name: "CPU".to_string(),
                ..game.clone()
            };
            seats.push(Seat::new(&rival, &config)?);
        }

        Ok(Self {
            seats,
            config,
            ticks_run: 0,
            elapsed_secs: 0.0,
            next_garbage_at: GARBAGE_INTERVAL_SECS,
        })
    }

    pub fn ticks_run(&self) -> u64 {
        self.ticks_run
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed_secs
    }

    pub fn games(&self) -> impl Iterator<Item = &GameState> {
        self.seats.iter().map(|seat| &seat.game)
    }

    pub fn all_over(&self) -> bool {
        self.seats.iter().all(|seat| seat.game.game_over())
    }

    /// Advance every seat by one tick: bot input, garbage, then the game tick
    pub fn step(&mut self) {
        let dt = self.config.tick_secs;
        self.elapsed_secs += dt;

        let garbage_due =
            self.config.garbage_lines > 0 && self.elapsed_secs >= self.next_garbage_at;
        if garbage_due {
            self.next_garbage_at += GARBAGE_INTERVAL_SECS;
        }

        for seat in &mut self.seats {
            if seat.game.game_over() {
                continue;
            }
            seat.cpu.pump(&mut seat.game);
            if garbage_due {
                seat.game
                    .add_garbage(self.config.garbage_lines, &mut seat.garbage_rng);
            }
            seat.game.update(dt);
        }

        self.ticks_run += 1;
    }

    /// Run until the tick budget is spent or every game is over
    pub fn run(&mut self) -> u64 {
        while self.ticks_run < self.config.ticks && !self.all_over() {
            self.step();
        }
        self.ticks_run
    }

    pub fn snapshots(&self) -> Vec<GameSnapshot> {
        self.games().map(GameState::snapshot).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick(ticks: u64) -> SimConfig {
        SimConfig {
            ticks,
            ..SimConfig::default()
        }
    }

    #[test]
    fn test_single_seat_runs() {
        let mut sim = Simulation::new(&GameConfig::default(), quick(600)).unwrap();
        let ran = sim.run();
        assert!(ran <= 600);
        assert_eq!(sim.snapshots().len(), 1);
        assert!(sim.games().all(|g| g.piece_id() > 1));
    }

    #[test]
    fn test_versus_seats_are_identical_without_interaction() {
        let config = SimConfig {
            versus: true,
            ..quick(900)
        };
        let mut sim = Simulation::new(&GameConfig::default(), config).unwrap();
        sim.run();

        let snaps = sim.snapshots();
        assert_eq!(snaps.len(), 2);
        assert_eq!(snaps[1].name, "CPU");
        assert_eq!(snaps[0].board, snaps[1].board);
        assert_eq!(snaps[0].points, snaps[1].points);
    }

    #[test]
    fn test_garbage_wave_arrives() {
        let config = SimConfig {
            tick_secs: 1.0,
            garbage_lines: 2,
            ..quick(31)
        };
        let mut sim = Simulation::new(&GameConfig::default(), config).unwrap();
        sim.run();
        assert!(sim.elapsed_secs() >= GARBAGE_INTERVAL_SECS);

        let snap = &sim.snapshots()[0];
        assert!(snap.board.iter().flatten().any(|&tag| tag == 8) || snap.game_over);
    }
}
