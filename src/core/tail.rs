//! Tail extraction for monitored files
//!
//! Two views of a file's tail are produced here:
//!
//! - the *last line*, a short cached string shown next to the file name in the
//!   dashboard list. It is read from a fixed window at the end of the file and
//!   does not depend on the terminal geometry, so it survives resizes.
//! - the *detail view*, the end of the file re-wrapped to fit a bordered pane
//!   of a given size. It is recomputed every time it is shown.
//!
//! Both work on any `Read + Seek` handle.

use std::io::{self, Read, Seek, SeekFrom};

use unicode_width::UnicodeWidthChar;

/// Max bytes kept for a cached last line (longer lines are truncated)
pub const DEFAULT_LINE_MAX: usize = 127;

/// Bytes read from the end of the file when looking for the last line
pub const DEFAULT_TAIL_WINDOW: usize = 1024;

const TAB_STOP: usize = 8;

/// Size limits used by the last-line extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TailLimits {
    pub line_max: usize,
    pub window: usize,
}

impl Default for TailLimits {
    fn default() -> Self {
        Self {
            line_max: DEFAULT_LINE_MAX,
            window: DEFAULT_TAIL_WINDOW,
        }
    }
}

fn is_line_terminator(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

/// Read everything from `max(0, size - budget)` to the end of the file
fn read_tail<R: Read + Seek>(reader: &mut R, budget: usize) -> io::Result<Vec<u8>> {
    let size = reader.seek(SeekFrom::End(0))?;
    let start = size.saturating_sub(budget as u64);
    reader.seek(SeekFrom::Start(start))?;

    let mut buf = Vec::with_capacity(budget.min(size as usize));
    reader.take(budget as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Truncate `s` to at most `max` bytes without splitting a character
pub fn truncate_on_char_boundary(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}

/// Extract the last complete line of a file.
///
/// Reads the final `limits.window` bytes, skips any trailing line terminators
/// and returns the text after the previous terminator, truncated to
/// `limits.line_max` bytes. An empty file yields an empty string.
pub fn extract_last_line<R: Read + Seek>(reader: &mut R, limits: TailLimits) -> io::Result<String> {
    let buf = read_tail(reader, limits.window)?;

    let end = buf
        .iter()
        .rposition(|&b| !is_line_terminator(b))
        .map_or(0, |i| i + 1);
    let start = buf[..end]
        .iter()
        .rposition(|&b| is_line_terminator(b))
        .map_or(0, |i| i + 1);

    let mut line = String::from_utf8_lossy(&buf[start..end]).into_owned();
    truncate_on_char_boundary(&mut line, limits.line_max);
    Ok(line)
}

/// How a source character is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// A character and its width in columns
    Char(char, usize),
    /// Spaces up to the next tab stop
    Tab,
    /// Not drawn at all
    Skip,
}

/// Classify one character of file content for display.
///
/// Line terminators are skipped, tabs expand, other control characters
/// (ESC included) show as `.` so they take one visible cell.
pub fn glyph(ch: char) -> Glyph {
    match ch {
        '\n' | '\r' => Glyph::Skip,
        '\t' => Glyph::Tab,
        c if c.is_control() => Glyph::Char('.', 1),
        c => Glyph::Char(c, c.width().unwrap_or(0)),
    }
}

/// Columns a tab occupies when it starts at `column`
pub fn tab_width(column: usize) -> usize {
    TAB_STOP - column % TAB_STOP
}

/// Make a single line of file content safe to draw: tabs become spaces and
/// control characters become `.`, exactly as in the detail view.
pub fn sanitize_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;

    for ch in text.chars() {
        match glyph(ch) {
            Glyph::Skip => {}
            Glyph::Tab => {
                let spaces = tab_width(column);
                out.extend(std::iter::repeat(' ').take(spaces));
                column += spaces;
            }
            Glyph::Char(c, w) => {
                out.push(c);
                column += w;
            }
        }
    }
    out
}

/// Incremental line wrapper that keeps every line within `width` columns
struct Wrapper {
    width: usize,
    lines: Vec<String>,
    current: String,
    column: usize,
}

impl Wrapper {
    fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
            current: String::new(),
            column: 0,
        }
    }

    fn break_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
        self.column = 0;
    }

    fn push_cell(&mut self, ch: char, width: usize) {
        if self.column + width > self.width {
            self.break_line();
        }
        self.current.push(ch);
        self.column += width;
    }

    fn push(&mut self, ch: char) {
        if ch == '\n' {
            self.break_line();
            return;
        }

        match glyph(ch) {
            Glyph::Skip => {}
            Glyph::Tab => {
                if self.column >= self.width {
                    self.break_line();
                }
                let spaces = tab_width(self.column).min(self.width - self.column);
                for _ in 0..spaces {
                    self.push_cell(' ', 1);
                }
            }
            Glyph::Char(c, 0) => self.current.push(c),
            // Wider than the pane: nothing sensible to draw
            Glyph::Char(_, w) if w > self.width => self.push_cell('?', 1),
            Glyph::Char(c, w) => self.push_cell(c, w),
        }
    }

    fn finish(mut self) -> Vec<String> {
        if !self.current.is_empty() {
            self.lines.push(self.current);
        }
        self.lines
    }
}

/// Render the tail of a file wrapped for a bordered pane of `rows` x `cols`.
///
/// The byte budget is `(rows - 2) * (cols - 2)`. Source newlines force a
/// wrap; other text wraps at `cols - 2` columns. When the wrapped text has
/// more than `rows - 2` lines only the last ones are kept. Never fails: an
/// unreadable file or a pane too small for any content gives no lines.
pub fn extract_detail_view<R: Read + Seek>(reader: &mut R, rows: u16, cols: u16) -> Vec<String> {
    let height = usize::from(rows.saturating_sub(2));
    let width = usize::from(cols.saturating_sub(2));
    if height == 0 || width == 0 {
        return Vec::new();
    }

    let Ok(buf) = read_tail(reader, height * width) else {
        return Vec::new();
    };

    // The budget seek may land inside a multi-byte character
    let skip = buf
        .iter()
        .take(3)
        .take_while(|&&b| b & 0xC0 == 0x80)
        .count();
    let text = String::from_utf8_lossy(&buf[skip..]);

    let mut wrapper = Wrapper::new(width);
    for ch in text.chars() {
        wrapper.push(ch);
    }

    let mut lines = wrapper.finish();
    if lines.len() > height {
        lines.drain(..lines.len() - height);
    }
    lines
}
