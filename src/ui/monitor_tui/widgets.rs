use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::tail::sanitize_line;

/// Drawn beside a row whose file changed since the previous frame
pub const UPDATED_MARK: char = '*';

/// Truncate or right-pad `text` with spaces to exactly `width` columns
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;

    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }

    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

/// Text of one list row (without the highlight mark).
///
/// Layout: marker slot, space, name padded to `name_width`, space,
/// description, all padded to `width` so the previous contents of the row
/// are fully overwritten. The description is drawn the way the detail pane
/// draws file content.
pub fn file_row(name: &str, name_width: usize, description: &str, marked: bool, width: usize) -> String {
    let mark = if marked { UPDATED_MARK } else { ' ' };
    let pad = name_width.saturating_sub(name.width());
    let row = format!(
        "{} {}{} {}",
        mark,
        name,
        " ".repeat(pad),
        sanitize_line(description)
    );
    fit_to_width(&row, width)
}
