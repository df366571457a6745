//! Scoreboard seam
//!
//! The simulation only talks to the high-score board when a run ends. The
//! persisted implementation lives in `tui-snake-scoreboard`; tests can use any
//! in-memory type implementing this trait.

pub trait Scoreboard {
    /// Would `score` make it onto the board?
    fn is_qualifying(&self, score: u32) -> bool;

    /// 0-based rank `score` would take if inserted now, `None` if it would not
    /// make the board.
    fn rank_for(&self, score: u32) -> Option<usize>;

    /// Record an entry. Returns its 0-based rank, or `None` if it fell off the
    /// board.
    fn insert(&mut self, name: &str, score: u32) -> Option<usize>;
}
