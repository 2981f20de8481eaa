//! Game state module - board/piece state machine
//!
//! This module ties together the board, the shape table, the sequencer, scoring and
//! the intent queue. Every transition is total: illegal moves degrade to no-ops and
//! an unrecoverable spawn collision sets `game_over`. Nothing here returns an error
//! once the state has been constructed.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::CoreError;
use crate::pieces::{get_shape, spawn_x, PieceShape};
use crate::queue::IntentQueue;
use crate::rng::SimpleRng;
use crate::scoring::{fall_interval_secs, level_for, line_score, LineStats};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Result of a collision-checked move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// Every cell landed on an empty in-bounds position
    Moved,
    /// A cell hit the floor or an occupied cell
    Blocked,
    /// A cell left the side walls or went above the top row
    OutOfBounds,
}

/// A piece on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl Tetromino {
    /// Create a new tetromino at the spawn point of a board `cols` wide
    pub fn new(kind: PieceKind, cols: usize) -> Self {
        Self {
            kind,
            rotation: Rotation::SPAWN,
            x: spawn_x(cols),
            y: 0,
        }
    }

    /// Get the shape (cell offsets) for the current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board positions of the four cells
    pub fn cells(&self) -> [(i32, i32); CELLS_PER_PIECE] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Classify a move by (dx, dy) without applying it
    ///
    /// Cells are checked in shape order and the first failing cell decides the
    /// outcome.
    pub fn check(&self, board: &Board, dx: i32, dy: i32) -> MoveOutcome {
        for (cx, cy) in self.cells() {
            let (x, y) = (cx + dx, cy + dy);
            if x < 0 || x >= board.cols() as i32 || y < 0 {
                return MoveOutcome::OutOfBounds;
            }
            if y >= board.rows() as i32 || board.is_occupied(x, y) {
                return MoveOutcome::Blocked;
            }
        }
        MoveOutcome::Moved
    }

    /// Move by (dx, dy) if the target is free
    pub fn try_shift(&mut self, board: &Board, dx: i32, dy: i32) -> MoveOutcome {
        let outcome = self.check(board, dx, dy);
        if outcome == MoveOutcome::Moved {
            self.x += dx;
            self.y += dy;
        }
        outcome
    }

    /// Check if all cells are at valid positions on the board
    pub fn fits(&self, board: &Board) -> bool {
        self.check(board, 0, 0) == MoveOutcome::Moved
    }

    /// Copy of this piece moved straight down as far as it can go
    pub fn dropped(&self, board: &Board) -> Tetromino {
        let mut preview = *self;
        while preview.try_shift(board, 0, 1) == MoveOutcome::Moved {}
        preview
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    name: String,
    seed: u32,
    rng: SimpleRng,
    board: Board,
    current: Tetromino,
    next: PieceKind,
    hold: Option<Tetromino>,
    /// Hold already used since the last lock
    has_held: bool,
    points: u32,
    level: u32,
    lines_per_level: u32,
    stats: LineStats,
    lock_grace: u8,
    gravity_timer: f32,
    move_timer: f32,
    drop_timer: f32,
    game_over: bool,
    queue: IntentQueue,
    preview_count: usize,
    /// Monotonic id, bumped every time a piece is placed into `current`
    piece_id: u32,
}

impl GameState {
    /// Create a game with default settings apart from size, seed and name
    pub fn new(rows: usize, cols: usize, seed: u32, name: impl Into<String>) -> Result<Self, CoreError> {
        Self::from_config(&GameConfig {
            rows,
            cols,
            seed,
            name: name.into(),
            ..GameConfig::default()
        })
    }

    /// Create a game from a full configuration
    pub fn from_config(config: &GameConfig) -> Result<Self, CoreError> {
        if config.lines_per_level == 0 {
            return Err(CoreError::InvalidLevelGoal);
        }

        let board = Board::new(config.rows, config.cols)?;
        let mut rng = SimpleRng::new(config.seed);
        let first = rng.next_piece();
        let next = rng.next_piece();

        let mut state = Self {
            name: config.name.clone(),
            seed: config.seed,
            rng,
            current: Tetromino::new(first, config.cols),
            board,
            next,
            hold: None,
            has_held: false,
            points: 0,
            level: 0,
            lines_per_level: config.lines_per_level,
            stats: LineStats::default(),
            lock_grace: 0,
            gravity_timer: 0.0,
            move_timer: 0.0,
            drop_timer: 0.0,
            game_over: false,
            queue: IntentQueue::new(),
            preview_count: config.preview_count.min(MAX_PREVIEW_COUNT),
            piece_id: 0,
        };
        state.place_current_at_top();
        Ok(state)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scenario setup (tests, puzzles, replays)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Occupant of cell (x, y), `None` when out of bounds
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.board.get(x, y)
    }

    pub fn current(&self) -> Tetromino {
        self.current
    }

    /// Replace the falling piece (scenario setup); does not touch the sequencer
    pub fn set_current(&mut self, piece: Tetromino) {
        self.current = piece;
        self.lock_grace = 0;
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn hold_piece(&self) -> Option<Tetromino> {
        self.hold
    }

    pub fn has_held(&self) -> bool {
        self.has_held
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_per_level(&self) -> u32 {
        self.lines_per_level
    }

    pub fn stats(&self) -> &LineStats {
        &self.stats
    }

    pub fn lock_grace(&self) -> u8 {
        self.lock_grace
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn preview_count(&self) -> usize {
        self.preview_count
    }

    /// Intents waiting for the next drain
    pub fn pending_intents(&self) -> usize {
        self.queue.len()
    }

    /// Where the current piece would land (ghost piece)
    pub fn drop_preview(&self) -> Tetromino {
        self.current.dropped(&self.board)
    }

    /// The `preview_count` kinds that follow `next`, without advancing the sequencer
    pub fn preview(&self) -> ArrayVec<PieceKind, MAX_PREVIEW_COUNT> {
        self.rng.preview(self.preview_count)
    }

    /// Kind `n` draws ahead of the sequencer (`peek_next(1)` is the one after `next`)
    pub fn peek_next(&self, n: u32) -> PieceKind {
        self.rng.peek_piece(n)
    }

    /// Gravity interval at the current level, in seconds
    pub fn fall_interval(&self) -> f32 {
        fall_interval_secs(self.level)
    }

    /// Read-only export for presentation
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_state(self)
    }

    /// Move the current piece back to the spawn point, ending the game if it collides
    fn place_current_at_top(&mut self) {
        self.current.x = spawn_x(self.board.cols());
        self.current.y = 0;
        self.piece_id = self.piece_id.wrapping_add(1);

        if !self.current.fits(&self.board) {
            self.game_over = true;
            eprintln!(
                "[Game] {}: spawn blocked, game over (points={} level={})",
                self.name, self.points, self.level
            );
        }
    }

    /// Promote `next` into `current` and draw a fresh `next`
    fn retrieve_next_piece(&mut self) {
        self.current = Tetromino::new(self.next, self.board.cols());
        self.next = self.rng.next_piece();
        self.place_current_at_top();
        self.lock_grace = 0;
    }

    /// Collision-checked move of the current piece, no cooldown
    pub fn try_move(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        self.current.try_shift(&self.board, dx, dy)
    }

    /// Horizontal move gated by the move cooldown
    ///
    /// `dt` accumulates into the move timer; the attempt only happens once the
    /// timer reaches `MOVE_COOLDOWN_SECS`. Returns true if the piece moved.
    pub fn move_piece(&mut self, dx: i32, dt: f32) -> bool {
        self.move_timer += dt;
        if self.move_timer < MOVE_COOLDOWN_SECS {
            return false;
        }

        let outcome = self.try_move(dx, 0);
        self.move_timer = 0.0;
        outcome == MoveOutcome::Moved
    }

    /// Rotate in place, sweeping up to four orientations
    ///
    /// Each attempt steps the rotation once more in `direction`; the first
    /// orientation that fits is kept. The fourth attempt is the original
    /// orientation, so a fully boxed-in piece ends up unchanged. Returns true if
    /// the orientation changed.
    pub fn rotate(&mut self, direction: RotateDirection) -> bool {
        let original = self.current.rotation;
        let mut candidate = self.current;

        for _ in 0..NUM_ORIENTATIONS {
            candidate.rotation = candidate.rotation.step(direction);
            if candidate.fits(&self.board) {
                self.current = candidate;
                return candidate.rotation != original;
            }
        }

        self.current.rotation = original;
        false
    }

    /// One gravity step with lock grace
    ///
    /// A blocked step bumps the grace counter and locks once it reaches
    /// `LOCK_GRACE_LIMIT`; any successful step resets it.
    pub fn apply_gravity(&mut self) {
        match self.try_move(0, 1) {
            MoveOutcome::Blocked => {
                self.lock_grace += 1;
                if self.lock_grace >= LOCK_GRACE_LIMIT {
                    self.lock_piece();
                }
            }
            MoveOutcome::Moved | MoveOutcome::OutOfBounds => {
                self.lock_grace = 0;
            }
        }
    }

    /// Extra gravity step gated by the soft-drop cooldown
    ///
    /// Only steps when the piece can actually move down, so soft drop never
    /// advances the lock grace counter on its own.
    pub fn soft_drop(&mut self, dt: f32) -> bool {
        self.drop_timer += dt;
        if self.drop_timer < SOFT_DROP_COOLDOWN_SECS {
            return false;
        }
        self.drop_timer = 0.0;

        if self.current.check(&self.board, 0, 1) == MoveOutcome::Moved {
            self.apply_gravity();
            return true;
        }
        false
    }

    /// Drop to the landing row and lock immediately. Returns rows dropped.
    pub fn hard_drop(&mut self) -> u32 {
        let mut distance = 0;
        while self.try_move(0, 1) == MoveOutcome::Moved {
            distance += 1;
        }
        self.lock_piece();
        distance
    }

    /// Stamp the current piece, clear and score, then spawn the next piece
    pub fn lock_piece(&mut self) {
        let block = Some(Block::Piece(self.current.kind));
        for (x, y) in self.current.cells() {
            self.board.set(x, y, block);
        }

        self.clear_and_score();
        self.retrieve_next_piece();
        self.has_held = false;
        self.lock_grace = 0;
    }

    /// Clear every full row and update points, statistics and level
    ///
    /// Points use the level before this clear. Returns the number of rows cleared.
    pub fn clear_and_score(&mut self) -> usize {
        let cleared = self.board.clear_full_rows();
        if cleared == 0 {
            return 0;
        }

        self.points = self.points.saturating_add(line_score(cleared, self.level));
        self.stats.record(cleared);
        self.level = level_for(self.stats.lines, self.lines_per_level, self.level);
        cleared
    }

    /// Swap the current piece with the hold slot (once per lock)
    ///
    /// The first hold stores the piece and promotes `next`; later holds swap
    /// directly. The held piece keeps its rotation. Returns false when hold was
    /// already used for this piece.
    pub fn hold(&mut self) -> bool {
        if self.has_held {
            return false;
        }
        self.has_held = true;

        match self.hold.replace(self.current) {
            Some(held) => {
                self.current = held;
                self.place_current_at_top();
            }
            None => self.retrieve_next_piece(),
        }

        self.lock_grace = 0;
        true
    }

    /// Raise the stack by `lines` garbage rows, each with one random hole
    ///
    /// `lines` is clamped to `rows - 1`. Hole columns come from `rng`, one step
    /// per row, so the game's own sequencer is never disturbed.
    pub fn add_garbage(&mut self, lines: u32, rng: &mut SimpleRng) {
        let lines = (lines as usize).min(self.board.rows() - 1);
        let cols = self.board.cols() as u32;
        for _ in 0..lines {
            let hole = rng.next_range(cols) as usize;
            self.board.push_garbage_row(hole);
        }
    }

    /// Restart from the original seed, keeping configuration
    pub fn reset(&mut self) {
        self.rng = SimpleRng::new(self.seed);
        self.board.clear();
        self.points = 0;
        self.level = 0;
        self.stats = LineStats::default();
        self.hold = None;
        self.has_held = false;
        self.lock_grace = 0;
        self.gravity_timer = 0.0;
        self.move_timer = 0.0;
        self.drop_timer = 0.0;
        self.game_over = false;

        let first = self.rng.next_piece();
        self.next = self.rng.next_piece();
        self.current = Tetromino::new(first, self.board.cols());
        self.place_current_at_top();
    }

    /// Jump to `level`, crediting the lines that level implies
    pub fn goto_level(&mut self, level: u32) {
        self.level = level;
        self.stats.lines = level.saturating_mul(self.lines_per_level);
    }

    /// Enqueue an intent for the next drain
    ///
    /// A full queue drops the intent; the error is logged and returned.
    pub fn register_intent(&mut self, intent: Intent) -> Result<(), CoreError> {
        self.queue.enqueue(intent).map_err(|err| {
            eprintln!("[Queue] {}: {}", self.name, err);
            err
        })
    }

    /// Apply one intent immediately
    ///
    /// After game over only `Reset` has an effect.
    pub fn apply_intent(&mut self, intent: Intent, dt: f32) {
        if self.game_over && intent != Intent::Reset {
            return;
        }

        match intent {
            Intent::Gravity => self.apply_gravity(),
            Intent::MoveLeft => {
                self.move_piece(-1, dt);
            }
            Intent::MoveRight => {
                self.move_piece(1, dt);
            }
            Intent::SoftDrop => {
                self.soft_drop(dt);
            }
            Intent::RotateLeft => {
                self.rotate(RotateDirection::Left);
            }
            Intent::RotateRight => {
                self.rotate(RotateDirection::Right);
            }
            Intent::HardDrop => {
                self.hard_drop();
            }
            Intent::Hold => {
                self.hold();
            }
            Intent::Reset => self.reset(),
        }
    }

    /// Drain the queue, applying intents in arrival order
    pub fn process_intents(&mut self, dt: f32) {
        while let Some(intent) = self.queue.dequeue() {
            self.apply_intent(intent, dt);
        }
    }

    /// Main game tick
    ///
    /// Accumulates `dt` into the gravity timer and enqueues `Gravity` once it
    /// exceeds the level interval, then drains the queue. When the queue is full
    /// the timer is left running, so gravity is enqueued again on the next tick.
    pub fn update(&mut self, dt: f32) {
        if !self.game_over {
            self.gravity_timer += dt;
            if self.gravity_timer > self.fall_interval()
                && self.register_intent(Intent::Gravity).is_ok()
            {
                self.gravity_timer = 0.0;
            }
        }

        self.process_intents(dt);
    }
}
