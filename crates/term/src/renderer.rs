//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame, and any frame after a resize or `invalidate`, repaints
//! every row. Otherwise only the spans of a row that differ from the last
//! frame are written.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen; `None` forces a full repaint
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode plus the alternate screen with a hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next draw.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Draw `fb` and keep it as the on-screen frame.
    ///
    /// The previously shown buffer is handed back through `fb`, so one pair
    /// of buffers ping-pongs between caller and renderer.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let same_size = |prev: &FrameBuffer| prev.width() == fb.width() && prev.height() == fb.height();
        let prev = self.shown.take().filter(same_size);

        self.buf.clear();
        match &prev {
            Some(prev) => encode_diff_into(prev, fb, &mut self.buf)?,
            None => encode_full_into(fb, &mut self.buf)?,
        }
        self.flush()?;

        let mut back = prev.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        std::mem::swap(&mut back, fb);
        self.shown = Some(back);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Commands that clear the screen and paint every row of `fb`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..fb.height() {
        pen.paint(out, 0, y, fb.row(y))?;
    }
    pen.finish(out)
}

/// Commands that repaint only the spans where `next` differs from `prev`.
///
/// Both buffers must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    for y in 0..next.height() {
        let row = next.row(y);
        for span in changed_spans(prev.row(y), row) {
            pen.paint(out, span.start as u16, y, &row[span])?;
        }
    }
    pen.finish(out)
}

/// Tracks the style last sent so runs of equal style share one escape sequence.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn paint(&mut self, out: &mut Vec<u8>, x: u16, y: u16, glyphs: &[Glyph]) -> Result<()> {
        out.queue(cursor::MoveTo(x, y))?;
        for glyph in glyphs {
            if self.style != Some(glyph.style) {
                set_style(out, glyph.style)?;
                self.style = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
        Ok(())
    }

    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn set_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    let color = |c: Rgb| Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    };
    out.queue(SetForegroundColor(color(style.fg)))?
        .queue(SetBackgroundColor(color(style.bg)))?
        .queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

/// Maximal column ranges where two equally long rows differ.
fn changed_spans<'a>(old: &'a [Glyph], new: &'a [Glyph]) -> impl Iterator<Item = Range<usize>> + 'a {
    let differs = move |x: usize| old.get(x) != new.get(x);
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < new.len() && !differs(x) {
            x += 1;
        }
        if x == new.len() {
            return None;
        }
        let start = x;
        while x < new.len() && differs(x) {
            x += 1;
        }
        Some(start..x)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(a: &FrameBuffer, b: &FrameBuffer, y: u16) -> Vec<Range<usize>> {
        changed_spans(a.row(y), b.row(y)).collect()
    }

    #[test]
    fn full_encode_contains_every_row() {
        let mut fb = FrameBuffer::new(2, 2);
        let style = CellStyle::default();
        fb.put_str(0, 0, "AB", style);
        fb.put_str(0, 1, "CD", style);

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("AB"));
        assert!(text.contains("CD"));
    }

    #[test]
    fn identical_frames_have_no_spans() {
        let mut a = FrameBuffer::new(4, 2);
        a.put_str(0, 0, "snek", CellStyle::default());
        let b = a.clone();

        assert!(spans(&a, &b, 0).is_empty());
        assert!(spans(&a, &b, 1).is_empty());

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        assert!(!String::from_utf8_lossy(&out).contains("snek"));
    }

    #[test]
    fn adjacent_changes_form_one_span() {
        let a = FrameBuffer::new(6, 1);
        let mut b = FrameBuffer::new(6, 1);
        for x in 1..=3 {
            b.put_char(x, 0, 'X', CellStyle::default());
        }
        b.put_char(5, 0, 'Y', CellStyle::default());

        assert_eq!(spans(&a, &b, 0), vec![1..4, 5..6]);

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("XXX"));
        assert!(text.contains('Y'));
    }

    #[test]
    fn style_only_change_is_a_span() {
        let a = FrameBuffer::new(3, 1);
        let mut b = FrameBuffer::new(3, 1);
        b.put_char(2, 0, ' ', CellStyle::default().bold());

        assert_eq!(spans(&a, &b, 0), vec![2..3]);
    }
}
