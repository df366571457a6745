//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::scoreboard::ScoreEntry;
use crate::types::{Cell, Phase, RewardTier};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Things drawn next to the run that the snapshot does not carry.
#[derive(Debug, Clone, Copy, Default)]
pub struct HudInfo<'a> {
    /// High-score board, best first
    pub scores: &'a [ScoreEntry],
    /// Name typed so far while a high score is pending
    pub name_input: Option<&'a str>,
}

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

const FIELD_BG: Rgb = Rgb::new(20, 24, 20);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const GOLD: Rgb = Rgb::new(255, 215, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);

pub const HEAD_GLYPH: char = '▓';
pub const BODY_GLYPH: char = '█';
pub const FOOD_GLYPH: char = '●';

pub fn reward_glyph(tier: RewardTier) -> char {
    match tier {
        RewardTier::Small => '◇',
        RewardTier::Medium => '◆',
        RewardTier::Large => '★',
    }
}

fn reward_color(tier: RewardTier) -> Rgb {
    match tier {
        RewardTier::Small => Rgb::new(0, 200, 255),
        RewardTier::Medium => Rgb::new(200, 120, 255),
        RewardTier::Large => GOLD,
    }
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {

    /// Terminal size needed to show the whole field and its border
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let side = |n: i32| u16::try_from(n.max(0)).unwrap_or(u16::MAX);
        let w = side(snap.grid_width).saturating_mul(self.cell_w);
        let h = side(snap.grid_height).saturating_mul(self.cell_h);
        (w.saturating_add(2), h.saturating_add(2))
    }

    /// Top-left corner of the border for this snapshot and viewport
    pub fn frame_origin(&self, snap: &GameSnapshot, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size(snap);
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Render the current game into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: HudInfo<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        let (start_x, start_y) = self.frame_origin(snap, viewport);

        let field = CellStyle::new(Rgb::new(60, 70, 60), FIELD_BG).dim();
        let border = CellStyle::new(Rgb::new(200, 200, 200), BLACK);

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w.saturating_sub(2),
            frame_h.saturating_sub(2),
            ' ',
            field,
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let origin = (start_x, start_y);

        // Food.
        self.fill_cell_rect(
            fb,
            origin,
            snap.food,
            FOOD_GLYPH,
            CellStyle::new(Rgb::new(230, 60, 60), FIELD_BG).bold(),
        );

        // Reward.
        if let Some(reward) = snap.reward {
            self.fill_cell_rect(
                fb,
                origin,
                reward.position,
                reward_glyph(reward.tier),
                CellStyle::new(reward_color(reward.tier), FIELD_BG).bold(),
            );
        }

        // Snake, tail first so the head always wins.
        let body_style = CellStyle::new(Rgb::new(40, 180, 60), FIELD_BG);
        for &cell in snap.body.iter().skip(1).rev() {
            self.fill_cell_rect(fb, origin, cell, BODY_GLYPH, body_style);
        }
        if let Some(head) = snap.head() {
            self.fill_cell_rect(
                fb,
                origin,
                head,
                HEAD_GLYPH,
                CellStyle::new(Rgb::new(120, 255, 120), FIELD_BG).bold(),
            );
        }

        self.draw_side_panel(fb, snap, hud, viewport, start_x, start_y, frame_w);

        // Overlays.
        let frame = (start_x, start_y, frame_w, frame_h);
        match snap.phase {
            Phase::Running => {}
            Phase::Paused => {
                self.draw_overlay_lines(fb, frame, &[("PAUSED", true)]);
            }
            Phase::GameOver => {
                if let Some(name) = hud.name_input {
                    self.draw_name_prompt(fb, frame, snap.score, name);
                } else {
                    self.draw_overlay_lines(
                        fb,
                        frame,
                        &[("GAME OVER", true), ("", false), ("R restart  V scores", false)],
                    );
                }
            }
            Phase::ViewingScoreboard => {
                self.draw_high_scores(fb, frame, hud.scores, snap.last_rank);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: HudInfo<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    /// Terminal position of the top-left column of a grid cell
    pub fn cell_origin(&self, frame_origin: (u16, u16), cell: Cell) -> Option<(u16, u16)> {
        let x = u16::try_from(cell.x).ok()?;
        let y = u16::try_from(cell.y).ok()?;
        let px = frame_origin
            .0
            .checked_add(1)?
            .checked_add(x.checked_mul(self.cell_w)?)?;
        let py = frame_origin
            .1
            .checked_add(1)?
            .checked_add(y.checked_mul(self.cell_h)?)?;
        Some((px, py))
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame_origin: (u16, u16),
        cell: Cell,
        ch: char,
        style: CellStyle,
    ) {
        if let Some((px, py)) = self.cell_origin(frame_origin, cell) {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: HudInfo<'_>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), BLACK).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BLACK);

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.speed, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LENGTH", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.body.len() as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        match hud.scores.first() {
            Some(best) => {
                fb.put_u32(panel_x, y, best.score, value);
            }
            None => {
                fb.put_str(panel_x, y, "-", value);
            }
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BONUS", label);
        y = y.saturating_add(1);
        match snap.reward {
            Some(reward) => {
                let style = CellStyle::new(reward_color(reward.tier), BLACK).bold();
                let x = fb.put_u32(panel_x, y, reward.points, style);
                let x = fb.put_str(x, y, " pts ", value);
                fb.put_u32(x, y, reward.remaining_ticks, value.dim());
            }
            None => {
                fb.put_str(panel_x, y, "-", value);
            }
        }
    }

    fn draw_overlay_lines(
        &self,
        fb: &mut FrameBuffer,
        frame: (u16, u16, u16, u16),
        lines: &[(&str, bool)],
    ) {
        let (start_x, start_y, frame_w, frame_h) = frame;
        let top = start_y
            .saturating_add(frame_h / 2)
            .saturating_sub(lines.len() as u16 / 2);
        for (i, (text, bold)) in lines.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            let style = if *bold {
                CellStyle::new(WHITE, BLACK).bold()
            } else {
                CellStyle::new(Rgb::new(200, 200, 200), BLACK)
            };
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, top.saturating_add(i as u16), text, style);
        }
    }

    fn draw_name_prompt(
        &self,
        fb: &mut FrameBuffer,
        frame: (u16, u16, u16, u16),
        score: u32,
        name: &str,
    ) {
        let (start_x, start_y, frame_w, frame_h) = frame;
        let mid_y = start_y.saturating_add(frame_h / 2);
        let center = |w: u16| start_x.saturating_add(frame_w.saturating_sub(w) / 2);

        let title = "NEW HIGH SCORE!";
        fb.put_str(
            center(title.len() as u16),
            mid_y.saturating_sub(2),
            title,
            CellStyle::new(GOLD, BLACK).bold(),
        );

        let plain = CellStyle::new(WHITE, BLACK);
        let score_w = "Your score: ".len() as u16 + digits(score);
        let x = fb.put_str(center(score_w), mid_y.saturating_sub(1), "Your score: ", plain);
        fb.put_u32(x, mid_y.saturating_sub(1), score, plain);

        let prompt_w = "Name: ".len() as u16 + name.chars().count() as u16 + 1;
        let x = fb.put_str(center(prompt_w), mid_y.saturating_add(1), "Name: ", plain);
        let x = fb.put_str(x, mid_y.saturating_add(1), name, plain.bold());
        fb.put_char(x, mid_y.saturating_add(1), '_', plain);

        let hint = "ENTER save  ESC skip";
        fb.put_str(
            center(hint.len() as u16),
            mid_y.saturating_add(3),
            hint,
            plain.dim(),
        );
    }

    fn draw_high_scores(
        &self,
        fb: &mut FrameBuffer,
        frame: (u16, u16, u16, u16),
        scores: &[ScoreEntry],
        highlight: Option<usize>,
    ) {
        let (start_x, start_y, frame_w, frame_h) = frame;
        let table_w: u16 = 24;
        let rows = scores.len() as u16;
        let left = start_x.saturating_add(frame_w.saturating_sub(table_w) / 2);
        let mut y = start_y
            .saturating_add(frame_h / 2)
            .saturating_sub((rows + 4) / 2);

        let title = "HIGH SCORES";
        fb.put_str(
            start_x.saturating_add(frame_w.saturating_sub(title.len() as u16) / 2),
            y,
            title,
            CellStyle::new(GOLD, BLACK).bold(),
        );
        y = y.saturating_add(2);

        if scores.is_empty() {
            let empty = "no scores yet";
            fb.put_str(
                start_x.saturating_add(frame_w.saturating_sub(empty.len() as u16) / 2),
                y,
                empty,
                CellStyle::new(WHITE, BLACK).dim(),
            );
        }

        for (rank, entry) in scores.iter().enumerate() {
            // Top three in gold.
            let mut style = if rank < 3 {
                CellStyle::new(GOLD, BLACK)
            } else {
                CellStyle::new(WHITE, BLACK)
            };
            if highlight == Some(rank) {
                style = style.bold();
            }
            fb.fill_rect(left, y, table_w, 1, ' ', style);
            let x = fb.put_u32(left, y, rank as u32 + 1, style);
            fb.put_char(x, y, '.', style);
            fb.put_str(left.saturating_add(4), y, &entry.name, style);
            let score_x = left.saturating_add(table_w).saturating_sub(digits(entry.score));
            fb.put_u32(score_x, y, entry.score, style);
            y = y.saturating_add(1);
        }

        let back = "V or TAB to return";
        fb.put_str(
            start_x.saturating_add(frame_w.saturating_sub(back.len() as u16) / 2),
            y.saturating_add(1),
            back,
            CellStyle::new(WHITE, BLACK).dim(),
        );
    }
}

/// Number of decimal digits in `n`
fn digits(n: u32) -> u16 {
    let mut n = n;
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(u32::MAX), 10);
    }

    #[test]
    fn test_cell_origin_rejects_negative() {
        let view = GameView::default();
        assert_eq!(view.cell_origin((0, 0), Cell::new(-1, 0)), None);
        assert_eq!(view.cell_origin((0, 0), Cell::new(3, 2)), Some((7, 3)));
    }

    #[test]
    fn test_reward_glyphs_differ() {
        let glyphs = [
            reward_glyph(RewardTier::Small),
            reward_glyph(RewardTier::Medium),
            reward_glyph(RewardTier::Large),
        ];
        assert_ne!(glyphs[0], glyphs[1]);
        assert_ne!(glyphs[1], glyphs[2]);
        assert_ne!(glyphs[0], glyphs[2]);
    }
}
