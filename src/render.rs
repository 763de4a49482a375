//! Runtime bar rendering.
//!
//! Produces the same shape as the static tables, for any interior width.

use crate::types::{BarStyle, DispBarError, LEVELS, Level, MAX_RENDER_WIDTH};

/// Render the row for `level` at the table's native width.
pub fn render_bar(level: Level, style: BarStyle) -> String {
    build(level.fill_count(), LEVELS, style)
}

/// Render a bar with `width` interior cells and `filled` of them set.
///
/// `filled` is clamped to `1..=width` so the bar always shows progress,
/// matching the tables where level 0 already draws one cell. `width` must be
/// in `1..=MAX_RENDER_WIDTH`.
pub fn render_bar_width(
    filled: usize,
    width: usize,
    style: BarStyle,
) -> Result<String, DispBarError> {
    if width == 0 {
        return Err(DispBarError::Invalid("bar width must be at least 1"));
    }
    if width > MAX_RENDER_WIDTH {
        return Err(DispBarError::Invalid("bar width exceeds MAX_RENDER_WIDTH"));
    }
    Ok(build(filled.clamp(1, width), width, style))
}

/// Render `done` out of `total` onto a bar with `width` interior cells.
pub fn render_ratio(
    done: u64,
    total: u64,
    width: usize,
    style: BarStyle,
) -> Result<String, DispBarError> {
    if total == 0 {
        return Err(DispBarError::Invalid("total must be non-zero"));
    }
    let done = done.min(total);
    let filled = (done as u128 * width as u128 / total as u128) as usize;
    render_bar_width(filled, width, style)
}

fn build(filled: usize, width: usize, style: BarStyle) -> String {
    let mut out = String::with_capacity(width + 2);
    out.push(char::from(style.open()));
    out.extend(std::iter::repeat_n(char::from(style.fill()), filled));
    out.extend(std::iter::repeat_n(char::from(style.empty()), width - filled));
    out.push(char::from(style.close()));
    out
}
