//! Placement evaluation functions
//!
//! An evaluator scores a scratch board that already has the candidate piece
//! stamped in. Full rows are left in place, so "lines" means rows this placement
//! would complete. Higher scores are better.

use crate::core::{Board, Tetromino};

/// Scores a simulated post-placement board
pub trait Evaluator {
    fn evaluate(&self, scratch: &Board, placement: &Tetromino) -> f32;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn evaluate(&self, scratch: &Board, placement: &Tetromino) -> f32 {
        (**self).evaluate(scratch, placement)
    }
}

/// Aggregate board shape features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardFeatures {
    /// Sum of column heights, measured from the bottom
    pub total_height: u32,
    /// Rows with every column filled
    pub complete_lines: u32,
    /// Empty cells with a filled cell somewhere above them
    pub holes: u32,
    /// Sum of absolute height differences between neighbouring columns
    pub bumpiness: u32,
}

impl BoardFeatures {
    pub fn compute(board: &Board) -> Self {
        let mut features = Self {
            complete_lines: board.count_full_rows() as u32,
            ..Self::default()
        };

        let mut previous: Option<usize> = None;
        for x in 0..board.cols() {
            let height = board.column_height(x);
            features.total_height += height as u32;
            features.holes += board.column_holes(x) as u32;
            if let Some(prev) = previous {
                features.bumpiness += prev.abs_diff(height) as u32;
            }
            previous = Some(height);
        }

        features
    }
}

/// Prefer clearing lines now, otherwise land as low as possible
#[derive(Debug, Clone, Copy, Default)]
pub struct Greedy;

impl Evaluator for Greedy {
    fn evaluate(&self, scratch: &Board, placement: &Tetromino) -> f32 {
        let lines = scratch.count_full_rows() as f32;
        lines * 1000.0 + placement.y as f32
    }
}

/// Linear feature weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub height: f32,
    pub lines: f32,
    pub holes: f32,
    pub bumpiness: f32,
}

impl Default for Weights {
    fn default() -> Self {
        // Genetic-algorithm tuned (CodemyRoad)
        Self {
            height: -0.510066,
            lines: 0.760666,
            holes: -0.35663,
            bumpiness: -0.184483,
        }
    }
}

/// Weighted sum of height, completed lines, holes and bumpiness
#[derive(Debug, Clone, Copy, Default)]
pub struct Weighted {
    pub weights: Weights,
}

impl Weighted {
    pub fn score_features(&self, f: &BoardFeatures) -> f32 {
        let w = &self.weights;
        w.height * f.total_height as f32
            + w.lines * f.complete_lines as f32
            + w.holes * f.holes as f32
            + w.bumpiness * f.bumpiness as f32
    }
}

impl Evaluator for Weighted {
    fn evaluate(&self, scratch: &Board, _placement: &Tetromino) -> f32 {
        self.score_features(&BoardFeatures::compute(scratch))
    }
}

/// Built-in evaluators, selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluatorKind {
    Greedy,
    #[default]
    Weighted,
}

impl EvaluatorKind {
    /// Parse evaluator name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "greedy" => Some(EvaluatorKind::Greedy),
            "weighted" => Some(EvaluatorKind::Weighted),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluatorKind::Greedy => "greedy",
            EvaluatorKind::Weighted => "weighted",
        }
    }
}

impl Evaluator for EvaluatorKind {
    fn evaluate(&self, scratch: &Board, placement: &Tetromino) -> f32 {
        match self {
            EvaluatorKind::Greedy => Greedy.evaluate(scratch, placement),
            EvaluatorKind::Weighted => Weighted::default().evaluate(scratch, placement),
        }
    }
}
