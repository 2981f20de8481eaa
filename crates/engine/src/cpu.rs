//! CPU input provider
//!
//! The CPU plays through the same intent vocabulary a human does. It plans once per
//! piece with [`decide_next_move`], then each pump emits a single intent toward the
//! plan: rotate right until the rotation matches, shift until the column matches,
//! then hard drop. A plan is tied to the game's `piece_id`, so a piece that locked
//! some other way (gravity, a failed rotation) never inherits a stale plan.

use crate::core::{GameState, InputProvider, Tetromino};
use crate::eval::{Evaluator, EvaluatorKind};
use crate::search::{decide_next_move, MoveCandidate};
use crate::types::Intent;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Plan {
    piece_id: u32,
    target: MoveCandidate,
}

/// Bot that drives a game toward the best placement found by the move search
#[derive(Debug, Clone)]
pub struct CpuProvider<E = EvaluatorKind> {
    evaluator: E,
    plan: Option<Plan>,
    log_decisions: bool,
}

impl<E: Evaluator> CpuProvider<E> {
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            plan: None,
            log_decisions: false,
        }
    }

    /// Log every decision to stderr
    pub fn with_decision_logging(mut self, enabled: bool) -> Self {
        self.log_decisions = enabled;
        self
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Target of the active plan, if any
    pub fn target(&self) -> Option<MoveCandidate> {
        self.plan.map(|plan| plan.target)
    }

    fn ensure_plan(&mut self, game: &GameState) -> Option<MoveCandidate> {
        if let Some(plan) = self.plan {
            if plan.piece_id == game.piece_id() {
                return Some(plan.target);
            }
        }

        let target = decide_next_move(game, &self.evaluator)?;
        if self.log_decisions {
            eprintln!(
                "[Cpu] {} decided on move: piece={} x={} rot={} score={:.2}",
                game.name(),
                game.current().kind.as_str(),
                target.x,
                target.rotation.index(),
                target.score
            );
        }
        self.plan = Some(Plan {
            piece_id: game.piece_id(),
            target,
        });
        Some(target)
    }
}

/// Next intent that moves `current` toward `target`
pub fn step_toward(current: &Tetromino, target: &MoveCandidate) -> Intent {
    if current.rotation != target.rotation {
        Intent::RotateRight
    } else if current.x < target.x {
        Intent::MoveRight
    } else if current.x > target.x {
        Intent::MoveLeft
    } else {
        Intent::HardDrop
    }
}

impl<E: Evaluator> InputProvider for CpuProvider<E> {
    fn pump(&mut self, game: &mut GameState) {
        if game.game_over() {
            self.plan = None;
            return;
        }

        // Nowhere to go: drop in place and let the game decide
        let intent = match self.ensure_plan(game) {
            Some(target) => step_toward(&game.current(), &target),
            None => Intent::HardDrop,
        };

        if game.register_intent(intent).is_ok() && intent == Intent::HardDrop {
            self.plan = None;
        }
    }
}
