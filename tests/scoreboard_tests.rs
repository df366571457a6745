//! Scoreboard persistence and the game-over handoff, end to end

use std::fs;

use tempfile::tempdir;

use tui_snake::core::{Food, GameConfig, GameState, Snake};
use tui_snake::scoreboard::{sanitize_name, HighScoreTable, Scoreboard, ScoreEntry, ScoreboardFile};
use tui_snake::types::{Cell, Direction, GameAction, Phase};

fn crash_with_score(food_points: u32) -> GameState {
    // Eat one food, then run into the right wall.
    let config = GameConfig {
        food_points,
        ..GameConfig::default().with_grid(6, 3).with_reward(0.0, 10)
    };
    let snake = Snake::from_body(
        config.grid(),
        [Cell::new(2, 1), Cell::new(1, 1), Cell::new(0, 1)],
        Direction::Right,
        config.base_speed,
    )
    .unwrap();
    let mut state = GameState::from_parts(config, 3, snake, Food::at(Cell::new(5, 1))).unwrap();
    while !state.game_over() {
        state.tick();
    }
    state
}

#[test]
fn test_save_then_load_is_equivalent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scoreboard.json");

    let mut board = ScoreboardFile::load(&path);
    for (name, score) in [("a", 30), ("b", 90), ("c", 60), ("d", 90)] {
        board.insert(name, score);
    }
    board.save().unwrap();

    let reloaded = ScoreboardFile::load(&path);
    assert_eq!(reloaded.entries(), board.entries());
    let names: Vec<&str> = reloaded.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["b", "d", "c", "a"]);
}

#[test]
fn test_eleventh_low_score_leaves_board_unchanged() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scoreboard.json");

    let mut board = ScoreboardFile::load(&path);
    for i in 1..=10u32 {
        assert!(board.is_qualifying(i * 10));
        board.insert(&format!("p{i}"), i * 10);
    }
    let before = fs::read_to_string(&path).unwrap();

    assert!(!board.is_qualifying(5));
    assert_eq!(board.insert("late", 5), None);
    assert_eq!(board.entries().len(), 10);
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_file_format_matches_expected_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scoreboard.json");

    let mut board = ScoreboardFile::load(&path);
    board.insert("ann", 70);

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "high_scores": [ { "name": "ann", "score": 70 } ] })
    );
}

#[test]
fn test_oversized_unsorted_file_is_truncated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scoreboard.json");
    let entries: Vec<ScoreEntry> = (0..14).map(|i| ScoreEntry::new("x", i)).collect();
    let raw = serde_json::json!({ "high_scores": entries });
    fs::write(&path, raw.to_string()).unwrap();

    let board = ScoreboardFile::load(&path);
    assert_eq!(board.entries().len(), 10);
    assert_eq!(board.entries()[0].score, 13);
    assert_eq!(board.entries()[9].score, 4);
}

#[test]
fn test_wrong_shape_file_is_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scoreboard.json");
    fs::write(&path, r#"{"high_scores": "nope"}"#).unwrap();
    assert!(ScoreboardFile::load(&path).entries().is_empty());
}

#[test]
fn test_game_over_records_high_score() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scoreboard.json");
    let mut board = ScoreboardFile::load(&path);
    board.insert("old", 5);

    let mut state = crash_with_score(10);
    assert_eq!(state.score(), 10);
    assert_eq!(state.settle_game_over(&board), Some(0));
    assert!(state.awaiting_name());

    let rank = state.submit_high_score(&sanitize_name("Zed!!"), &mut board);
    assert_eq!(rank, Some(0));
    assert_eq!(state.phase(), Phase::ViewingScoreboard);

    let reloaded = ScoreboardFile::load(&path);
    assert_eq!(
        reloaded.entries(),
        &[ScoreEntry::new("Zed", 10), ScoreEntry::new("old", 5)]
    );

    // Leaving the board returns to the finished run; restart starts fresh.
    state.apply_action(GameAction::ViewScoreboard);
    assert_eq!(state.phase(), Phase::GameOver);
    state.apply_action(GameAction::Restart);
    assert_eq!(state.pending_high_score_rank(), None);
    assert_eq!(state.last_rank(), None);
}

#[test]
fn test_non_qualifying_run_skips_prompt() {
    let table = HighScoreTable::from_entries((1..=10).map(|i| ScoreEntry::new("p", i * 100)));
    let mut state = crash_with_score(10);
    assert_eq!(state.settle_game_over(&table), None);
    assert!(!state.awaiting_name());
    assert_eq!(state.phase(), Phase::GameOver);
}
