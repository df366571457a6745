//! Terminal Snake runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! The loop renders, waits for input until the next tick is due, then advances
//! the simulation by one tick at the snake's current speed.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::input::{handle_key_event, NameEntry, NameInput};
use tui_snake::logging::init_file_logging;
use tui_snake::scoreboard::{sanitize_name, ScoreboardFile};
use tui_snake::term::{FrameBuffer, GameView, HudInfo, TerminalRenderer, Viewport};
use tui_snake::types::GameEvent;
use tui_snake::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    if let Some(path) = &config.log_path {
        init_file_logging(path)?;
    }

    let seed = config.seed.unwrap_or_else(clock_seed);
    let game = GameState::new(config.game, seed)?;
    let board = ScoreboardFile::load(&config.scoreboard_path);
    info!(seed, scoreboard = %config.scoreboard_path.display(), "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, board);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState, mut board: ScoreboardFile) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut name_entry: Option<NameEntry> = None;

    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        let hud = HudInfo {
            scores: board.entries(),
            name_input: name_entry.as_ref().map(NameEntry::as_str),
        };
        view.render_into(&snap, hud, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let tick_duration = Duration::from_millis(game.tick_interval_ms());
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(entry) = name_entry.as_mut() {
                        match entry.handle_key(key) {
                            NameInput::Editing => {}
                            NameInput::Submitted(name) => {
                                game.submit_high_score(&sanitize_name(&name), &mut board);
                                name_entry = None;
                            }
                            NameInput::Cancelled => {
                                game.dismiss_high_score();
                                name_entry = None;
                            }
                        }
                        continue;
                    }

                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                        if game.quit_requested() {
                            info!(score = game.score(), "quit");
                            return Ok(());
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            let events = game.tick();
            let ended = events.iter().any(|e| matches!(e, GameEvent::GameOver(_)));
            if ended && game.settle_game_over(&board).is_some() {
                name_entry = Some(NameEntry::new());
            }
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
