use crate::types::{Cell, Direction, GameOverReason, Phase, RewardTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RewardSnapshot {
    pub position: Cell,
    pub tier: RewardTier,
    pub points: u32,
    pub remaining_ticks: u32,
    pub duration: u32,
}

/// Read-only view of a game for renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid_width: i32,
    pub grid_height: i32,
    /// Head first
    pub body: Vec<Cell>,
    pub direction: Direction,
    pub food: Cell,
    pub reward: Option<RewardSnapshot>,
    pub score: u32,
    pub speed: u32,
    pub target_length: usize,
    pub phase: Phase,
    pub tick: u64,
    pub episode_id: u32,
    pub pending_high_score_rank: Option<usize>,
    pub last_rank: Option<usize>,
    pub game_over_reason: Option<GameOverReason>,
}

impl GameSnapshot {
    /// Reset every field, keeping the body allocation
    pub fn clear(&mut self) {
        self.grid_width = 0;
        self.grid_height = 0;
        self.body.clear();
        self.direction = Direction::Right;
        self.food = Cell::default();
        self.reward = None;
        self.score = 0;
        self.speed = 0;
        self.target_length = 0;
        self.phase = Phase::Running;
        self.tick = 0;
        self.episode_id = 0;
        self.pending_high_score_rank = None;
        self.last_rank = None;
        self.game_over_reason = None;
    }

    pub fn head(&self) -> Option<Cell> {
        self.body.first().copied()
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn awaiting_name(&self) -> bool {
        self.phase == Phase::GameOver && self.pending_high_score_rank.is_some()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            grid_width: 0,
            grid_height: 0,
            body: Vec::new(),
            direction: Direction::Right,
            food: Cell::default(),
            reward: None,
            score: 0,
            speed: 0,
            target_length: 0,
            phase: Phase::Running,
            tick: 0,
            episode_id: 0,
            pending_high_score_rank: None,
            last_rank: None,
            game_over_reason: None,
        };
        s.clear();
        s
    }
}
