//! Core types and constants for disp_bar.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of discrete progress levels (0..=59).
pub const LEVELS: usize = 60;

/// Visible characters per row (brackets included).
pub const ROW_WIDTH: usize = 62;

/// Bytes per row including the trailing NUL terminator.
pub const ROW_BYTES: usize = ROW_WIDTH + 1;

/// Widest interior accepted by runtime rendering.
pub const MAX_RENDER_WIDTH: usize = 4096;

/// Supported bar renderings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BarStyle {
    /// `[|||   ]`. Default.
    #[default]
    Pipe,
    /// ` ...    ` (blank frame, dotted fill).
    Dot,
}

impl BarStyle {
    /// All styles, in table order.
    pub const ALL: [BarStyle; 2] = [BarStyle::Pipe, BarStyle::Dot];

    /// Left frame character.
    pub const fn open(self) -> u8 {
        match self {
            BarStyle::Pipe => b'[',
            BarStyle::Dot => b' ',
        }
    }

    /// Character drawn for each filled cell.
    pub const fn fill(self) -> u8 {
        match self {
            BarStyle::Pipe => b'|',
            BarStyle::Dot => b'.',
        }
    }

    /// Padding for unfilled cells.
    pub const fn empty(self) -> u8 {
        b' '
    }

    /// Right frame character.
    pub const fn close(self) -> u8 {
        match self {
            BarStyle::Pipe => b']',
            BarStyle::Dot => b' ',
        }
    }

    /// Lowercase name, as used on the command line and in JSON.
    pub fn name(self) -> &'static str {
        match self {
            BarStyle::Pipe => "pipe",
            BarStyle::Dot => "dot",
        }
    }
}

/// Output formats for a dumped table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// One row per line.
    #[default]
    Text,
    /// A `char dispBar[60][63]` declaration for firmware sources.
    C,
    /// JSON document with the rows and their geometry.
    Json,
}

/// Options for exporting a table.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub style: BarStyle,
    pub format: ExportFormat,
    /// When `true`, allow overwriting existing output file paths.
    pub force: bool,
}

impl ExportOptions {
    pub fn with_style(mut self, style: BarStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_force(mut self, on: bool) -> Self {
        self.force = on;
        self
    }
}

/// A progress level, guaranteed to index the table.
///
/// Level `n` renders `n + 1` fill characters, so even level 0 shows one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(0);
    pub const MAX: Level = Level((LEVELS - 1) as u8);

    /// Checked constructor. Fails for `n >= LEVELS`.
    pub fn new(n: usize) -> Result<Self, DispBarError> {
        if n < LEVELS {
            Ok(Level(n as u8))
        } else {
            Err(DispBarError::LevelOutOfRange(n))
        }
    }

    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Number of fill characters drawn at this level.
    pub const fn fill_count(self) -> usize {
        self.0 as usize + 1
    }

    /// Map `done` out of `total` onto a level.
    ///
    /// `done > total` saturates at [`Level::MAX`]. `total == 0` is rejected.
    pub fn from_ratio(done: u64, total: u64) -> Result<Self, DispBarError> {
        if total == 0 {
            return Err(DispBarError::Invalid("total must be non-zero"));
        }
        let done = done.min(total);
        let scaled = (done as u128 * LEVELS as u128) / total as u128;
        let n = (scaled as usize).min(LEVELS - 1);
        Ok(Level(n as u8))
    }

    /// Map a percentage onto a level. Values above 100 clamp to 100.
    pub fn from_percent(percent: u8) -> Self {
        let p = u64::from(percent.min(100));
        let n = ((p as usize * LEVELS) / 100).min(LEVELS - 1);
        Level(n as u8)
    }

    /// All levels in ascending order.
    pub fn all() -> impl ExactSizeIterator<Item = Level> {
        (0..LEVELS as u8).map(Level)
    }
}

impl TryFrom<usize> for Level {
    type Error = DispBarError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Level::new(n)
    }
}

impl From<Level> for usize {
    fn from(l: Level) -> Self {
        l.get()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Library error type (no panics for expected failures).
#[derive(Error, Debug)]
pub enum DispBarError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("level {0} out of range (0..={max})", max = LEVELS - 1)]
    LevelOutOfRange(usize),
    #[error("invalid argument: {0}")]
    Invalid(&'static str),
    #[error("serialization error")]
    Json(#[from] serde_json::Error),
}
