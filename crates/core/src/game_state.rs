//! Game state module - orchestrates one run
//!
//! This module ties together the snake, the food, the reward and the RNG. It
//! owns the phase machine (running, paused, game over, viewing the scoreboard)
//! and applies one discrete simulation step per [`GameState::advance_tick`],
//! returning the events that occurred in order.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::CoreError;
use crate::food::Food;
use crate::grid::Grid;
use crate::reward::Reward;
use crate::rng::SimpleRng;
use crate::scoreboard::Scoreboard;
use crate::snake::Snake;
use crate::snapshot::{GameSnapshot, RewardSnapshot};
use crate::types::*;

/// Events of a single tick (at most one of each kind, so this never spills)
pub type TickEvents = ArrayVec<GameEvent, 8>;

/// Turns buffered between ticks
const TURN_QUEUE_CAPACITY: usize = 2;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Food,
    reward: Reward,
    rng: SimpleRng,
    phase: Phase,
    /// Phase restored when leaving the scoreboard view
    resume_phase: Phase,
    turn_queue: ArrayVec<Direction, TURN_QUEUE_CAPACITY>,
    /// Ticks simulated in the current run
    tick: u64,
    /// Monotonic run id (increments on restart)
    episode_id: u32,
    game_over_reason: Option<GameOverReason>,
    high_score_settled: bool,
    pending_high_score_rank: Option<usize>,
    last_rank: Option<usize>,
    quit_requested: bool,
}

impl GameState {
    /// Start a run with the given RNG seed
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, CoreError> {
        config.validate()?;
        let grid = config.grid();
        let mut rng = SimpleRng::new(seed);
        let snake = Snake::new(grid, config.base_speed);
        let food = Food::spawn(&grid, snake.body().iter().copied(), &mut rng)?;

        info!(
            width = grid.width(),
            height = grid.height(),
            seed,
            "run started"
        );
        Ok(Self::assemble(config, rng, snake, food))
    }

    /// Start a run from an explicit snake and food position.
    ///
    /// Used for scripted scenarios and replays; the snake must live on the
    /// configured grid and the food must be inside it.
    pub fn from_parts(
        config: GameConfig,
        seed: u32,
        snake: Snake,
        food: Food,
    ) -> Result<Self, CoreError> {
        config.validate()?;
        if snake.grid() != config.grid() {
            return Err(CoreError::InvalidConfig(
                "snake grid does not match the configured grid".into(),
            ));
        }
        if !config.grid().contains(food.position()) {
            return Err(CoreError::InvalidConfig("food is outside the grid".into()));
        }
        Ok(Self::assemble(config, SimpleRng::new(seed), snake, food))
    }

    fn assemble(config: GameConfig, rng: SimpleRng, snake: Snake, food: Food) -> Self {
        Self {
            grid: config.grid(),
            reward: Reward::new(config.reward_spawn_chance, config.reward_duration_ticks),
            config,
            snake,
            food,
            rng,
            phase: Phase::Running,
            resume_phase: Phase::Running,
            turn_queue: ArrayVec::new(),
            tick: 0,
            episode_id: 0,
            game_over_reason: None,
            high_score_settled: false,
            pending_high_score_rank: None,
            last_rank: None,
            quit_requested: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn reward(&self) -> &Reward {
        &self.reward
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.game_over_reason.is_some()
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.snake.score()
    }

    pub fn speed(&self) -> u32 {
        self.snake.speed()
    }

    /// Current tick period in milliseconds (driven by the snake's speed)
    pub fn tick_interval_ms(&self) -> u64 {
        self.snake.tick_interval_ms()
    }

    pub fn pending_high_score_rank(&self) -> Option<usize> {
        self.pending_high_score_rank
    }

    /// Rank of the last submitted high score of this run
    pub fn last_rank(&self) -> Option<usize> {
        self.last_rank
    }

    /// True while the driver should collect a name for the board
    pub fn awaiting_name(&self) -> bool {
        self.phase == Phase::GameOver && self.pending_high_score_rank.is_some()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Place an active reward directly (scripted scenarios and replays)
    pub fn force_reward(&mut self, position: Cell, tier: RewardTier) {
        self.reward.activate_at(position, tier);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid_width = self.grid.width();
        out.grid_height = self.grid.height();
        out.body.clear();
        out.body.extend(self.snake.body().iter().copied());
        out.direction = self.snake.direction();
        out.food = self.food.position();
        out.reward = self.reward.is_active().then(|| RewardSnapshot {
            position: self.reward.position(),
            tier: self.reward.tier(),
            points: self.reward.points(),
            remaining_ticks: self.reward.remaining_ticks(),
            duration: self.reward.duration(),
        });
        out.score = self.snake.score();
        out.speed = self.snake.speed();
        out.target_length = self.snake.target_length();
        out.phase = self.phase;
        out.tick = self.tick;
        out.episode_id = self.episode_id;
        out.pending_high_score_rank = self.pending_high_score_rank;
        out.last_rank = self.last_rank;
        out.game_over_reason = self.game_over_reason;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the simulation by one tick using the next buffered turn
    pub fn tick(&mut self) -> TickEvents {
        let pending = if self.turn_queue.is_empty() {
            None
        } else {
            Some(self.turn_queue.remove(0))
        };
        self.advance_tick(pending)
    }

    /// Apply one simulation step.
    ///
    /// Does nothing outside [`Phase::Running`]. Otherwise: turn (unless the
    /// turn reverses the snake), move, eat food, eat the reward, count the
    /// reward down, and roll for a new reward.
    pub fn advance_tick(&mut self, pending_direction: Option<Direction>) -> TickEvents {
        let mut events = TickEvents::new();
        if self.phase != Phase::Running {
            return events;
        }
        self.tick += 1;

        if let Some(direction) = pending_direction {
            self.snake.change_direction(direction);
        }

        match self.snake.step() {
            StepOutcome::Collision(collision) => {
                self.end_run(GameOverReason::Collision(collision));
                events.push(GameEvent::GameOver(self.snake.score()));
                return events;
            }
            StepOutcome::Moved => events.push(GameEvent::Moved),
        }

        let head = self.snake.head();

        if head == self.food.position() {
            self.snake.grow(1);
            self.snake.add_score(self.config.food_points);
            events.push(GameEvent::FoodEaten);
            debug!(score = self.snake.score(), "food eaten");

            let relocated =
                self.food
                    .relocate(&self.grid, self.snake.body().iter().copied(), &mut self.rng);
            if let Err(err) = relocated {
                debug!(%err, "food could not be placed");
                self.end_run(GameOverReason::BoardFull);
                events.push(GameEvent::GameOver(self.snake.score()));
                return events;
            }
        }

        if self.reward.is_active() && head == self.reward.position() {
            if let Some(points) = self.reward.consume() {
                self.snake.add_score(points);
                self.snake.grow(1);
                events.push(GameEvent::RewardEaten(points));
                debug!(points, score = self.snake.score(), "reward eaten");
            }
        }

        if self.reward.tick() {
            events.push(GameEvent::RewardExpired);
            debug!("reward expired");
        }

        if !self.reward.is_active() {
            match self
                .reward
                .maybe_spawn(&self.grid, self.snake.body().iter().copied(), &mut self.rng)
            {
                Ok(true) => {
                    events.push(GameEvent::RewardSpawned);
                    debug!(
                        x = self.reward.position().x,
                        y = self.reward.position().y,
                        points = self.reward.points(),
                        "reward spawned"
                    );
                }
                Ok(false) => {}
                Err(err) => debug!(%err, "reward spawn skipped"),
            }
        }

        events
    }

    fn end_run(&mut self, reason: GameOverReason) {
        self.phase = Phase::GameOver;
        self.game_over_reason = Some(reason);
        self.turn_queue.clear();
        info!(
            score = self.snake.score(),
            length = self.snake.len(),
            ticks = self.tick,
            ?reason,
            "run ended"
        );
    }

    /// Buffer a turn for the next tick.
    ///
    /// Turns that repeat or reverse the last buffered heading are dropped, as
    /// are turns beyond the buffer capacity.
    fn queue_turn(&mut self, direction: Direction) -> bool {
        let last = self
            .turn_queue
            .last()
            .copied()
            .unwrap_or(self.snake.direction());
        if direction == last || direction.is_opposite(last) {
            return false;
        }
        self.turn_queue.try_push(direction).is_ok()
    }

    /// Apply a driver action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(direction) => {
                if self.phase != Phase::Running {
                    return false;
                }
                self.queue_turn(direction)
            }
            GameAction::TogglePause => match self.phase {
                Phase::Running => {
                    self.phase = Phase::Paused;
                    true
                }
                Phase::Paused => {
                    self.phase = Phase::Running;
                    true
                }
                _ => false,
            },
            GameAction::Restart => match self.restart() {
                Ok(()) => true,
                Err(err) => {
                    tracing::error!(%err, "restart failed");
                    false
                }
            },
            GameAction::ViewScoreboard => {
                if self.phase == Phase::ViewingScoreboard {
                    self.phase = self.resume_phase;
                } else {
                    // A live run is resumed paused.
                    self.resume_phase = match self.phase {
                        Phase::Running => Phase::Paused,
                        other => other,
                    };
                    self.phase = Phase::ViewingScoreboard;
                }
                true
            }
            GameAction::Quit => {
                self.quit_requested = true;
                true
            }
        }
    }

    /// Start a fresh run, keeping the RNG stream
    pub fn restart(&mut self) -> Result<(), CoreError> {
        let snake = Snake::new(self.grid, self.config.base_speed);
        let food = Food::spawn(&self.grid, snake.body().iter().copied(), &mut self.rng)?;

        self.snake = snake;
        self.food = food;
        self.reward = Reward::new(
            self.config.reward_spawn_chance,
            self.config.reward_duration_ticks,
        );
        self.phase = Phase::Running;
        self.resume_phase = Phase::Running;
        self.turn_queue.clear();
        self.tick = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.game_over_reason = None;
        self.high_score_settled = false;
        self.pending_high_score_rank = None;
        self.last_rank = None;
        info!(episode = self.episode_id, "run restarted");
        Ok(())
    }

    /// Check the finished run against the board, once per run.
    ///
    /// Sets and returns the pending rank when the score qualifies. Later calls
    /// in the same run return the already computed value.
    pub fn settle_game_over<S: Scoreboard + ?Sized>(&mut self, board: &S) -> Option<usize> {
        if self.game_over_reason.is_none() || self.high_score_settled {
            return self.pending_high_score_rank;
        }
        self.high_score_settled = true;

        let score = self.snake.score();
        self.pending_high_score_rank = if board.is_qualifying(score) {
            board.rank_for(score)
        } else {
            None
        };
        if let Some(rank) = self.pending_high_score_rank {
            info!(score, rank, "new high score");
        }
        self.pending_high_score_rank
    }

    /// Record the player's name for a qualifying score.
    ///
    /// Returns the rank the board reports, or `None` when no high score is
    /// pending. Moves to the scoreboard view, which returns to game over.
    pub fn submit_high_score<S: Scoreboard + ?Sized>(
        &mut self,
        name: &str,
        board: &mut S,
    ) -> Option<usize> {
        self.pending_high_score_rank.take()?;

        let score = self.snake.score();
        let rank = board.insert(name, score);
        self.last_rank = rank;
        self.resume_phase = Phase::GameOver;
        self.phase = Phase::ViewingScoreboard;
        info!(name, score, ?rank, "high score recorded");
        rank
    }

    /// Skip the name prompt for this run
    pub fn dismiss_high_score(&mut self) {
        self.pending_high_score_rank = None;
    }
}
