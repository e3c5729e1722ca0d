use std::io::Write;

use crate::config::DemoConfig;
use crate::domain::Board;
use crate::error::Result;

#[cfg(feature = "window")]
pub mod window;

/// Turns a board snapshot into a text frame, one line per row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextRenderer {
    pub alive: char,
    pub dead: char,
    pub border: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            alive: '#',
            dead: ' ',
            border: true,
        }
    }
}

impl TextRenderer {
    pub fn from_config(config: &DemoConfig) -> Self {
        Self {
            alive: config.alive_glyph,
            dead: config.dead_glyph,
            border: config.border,
        }
    }

    /// Render the board; every line, including the last, ends in `\n`
    pub fn render(&self, board: &Board) -> String {
        let size = board.size();
        let ruler = format!(" {}", "=".repeat(size));
        let mut frame = String::with_capacity((size + 3) * (size + 2));

        if self.border {
            frame.push_str(&ruler);
            frame.push('\n');
        }

        for row in board.rows() {
            if self.border {
                frame.push('|');
            }
            frame.extend(row.iter().map(|cell| if cell.is_alive() { self.alive } else { self.dead }));
            if self.border {
                frame.push('|');
            }
            frame.push('\n');
        }

        if self.border {
            frame.push_str(&ruler);
            frame.push('\n');
        }
        frame
    }
}

/// Anything that can show a generation to the user
pub trait FrameSink {
    fn present(&mut self, board: &Board, generation: u64) -> Result<()>;
}

/// Writes text frames to a terminal (or any writer), blank line between frames
pub struct TerminalSink<W: Write> {
    out: W,
    renderer: TextRenderer,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, renderer: TextRenderer) -> Self {
        Self { out, renderer }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn present(&mut self, board: &Board, _generation: u64) -> Result<()> {
        let frame = self.renderer.render(board);
        self.out.write_all(frame.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}
