//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is a full redraw: clear, home, then each row followed by a line
//! break, then a two-line footer with the message counter. Encoding is split
//! from I/O so frames can be inspected in tests.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer};

const SEPARATOR_GLYPH: char = '─';
const MARKER_GLYPH: char = '▌';

pub struct TerminalRenderer {
    stdout: io::Stdout,
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
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one frame plus the footer.
    pub fn present(&mut self, fb: &FrameBuffer, total_messages: u32) -> Result<()> {
        self.buf.clear();
        encode_frame_into(fb, total_messages, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full frame (grid and footer) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(fb: &FrameBuffer, total_messages: u32, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        if let Some(row) = fb.row(y) {
            for cell in row {
                let style = cell.style();
                if current_style != Some(style) {
                    apply_style_into(out, style)?;
                    current_style = Some(style);
                }
                out.queue(Print(cell.ch))?;
            }
        }
        out.queue(Print("\r\n"))?;
    }

    encode_footer_into(fb.width(), total_messages, out)?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn encode_footer_into(width: u16, total_messages: u32, out: &mut Vec<u8>) -> Result<()> {
    out.queue(SetForegroundColor(Color::Grey))?;
    for _ in 0..width {
        out.queue(Print(SEPARATOR_GLYPH))?;
    }
    out.queue(ResetColor)?;
    out.queue(Print("\r\n"))?;

    out.queue(SetForegroundColor(Color::DarkRed))?;
    out.queue(Print(MARKER_GLYPH))?;
    out.queue(ResetColor)?;
    out.queue(Print(' '))?;
    out.queue(SetForegroundColor(Color::Grey))?;
    out.queue(Print(format_args!("OSC MESSAGES: {}", total_messages)))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    match style_color(style) {
        Some(color) => out.queue(SetForegroundColor(color))?,
        None => out.queue(ResetColor)?,
    };
    Ok(())
}

fn style_color(style: CellStyle) -> Option<Color> {
    match style {
        CellStyle::Plain => None,
        CellStyle::Highlight => Some(Color::DarkYellow),
        CellStyle::Wire => Some(Color::DarkRed),
    }
}
