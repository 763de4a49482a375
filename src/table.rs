//! Compile-time progress-bar tables.
//!
//! Each table holds `LEVELS` rows of `ROW_WIDTH` visible characters. Row `i`
//! is the open character, `i + 1` fill characters, padding, and the close
//! character. The backing storage keeps a NUL after every row so the same
//! bytes serve both `&str` and `&CStr` callers.

use std::ffi::CStr;

use crate::types::{BarStyle, DispBarError, LEVELS, Level, ROW_BYTES, ROW_WIDTH};

/// A full table of pre-rendered rows for one style.
#[derive(Debug)]
pub struct BarTable {
    style: BarStyle,
    rows: [&'static str; LEVELS],
    c_rows: [&'static CStr; LEVELS],
}

type RawRows = [[u8; ROW_BYTES]; LEVELS];

const fn build_rows(style: BarStyle) -> RawRows {
    let mut raw = [[0u8; ROW_BYTES]; LEVELS];
    let mut level = 0;
    while level < LEVELS {
        let row = &mut raw[level];
        row[0] = style.open();
        let mut col = 1;
        while col < ROW_WIDTH - 1 {
            // col 1..=level+1 are filled
            row[col] = if col <= level + 1 {
                style.fill()
            } else {
                style.empty()
            };
            col += 1;
        }
        row[ROW_WIDTH - 1] = style.close();
        level += 1;
    }
    raw
}

const fn as_strs(raw: &'static RawRows) -> [&'static str; LEVELS] {
    let mut out = [""; LEVELS];
    let mut i = 0;
    while i < LEVELS {
        let (visible, _nul) = raw[i].split_at(ROW_WIDTH);
        out[i] = match std::str::from_utf8(visible) {
            Ok(s) => s,
            Err(_) => panic!("bar rows must be ASCII"),
        };
        i += 1;
    }
    out
}

const fn as_cstrs(raw: &'static RawRows) -> [&'static CStr; LEVELS] {
    let mut out = [c""; LEVELS];
    let mut i = 0;
    while i < LEVELS {
        out[i] = match CStr::from_bytes_with_nul(&raw[i]) {
            Ok(s) => s,
            Err(_) => panic!("bar rows must end in a single NUL"),
        };
        i += 1;
    }
    out
}

static PIPE_RAW: RawRows = build_rows(BarStyle::Pipe);
static DOT_RAW: RawRows = build_rows(BarStyle::Dot);

/// `[|      ]` .. `[||||||]`, the default table.
pub static PIPE: BarTable = BarTable {
    style: BarStyle::Pipe,
    rows: as_strs(&PIPE_RAW),
    c_rows: as_cstrs(&PIPE_RAW),
};

/// ` .      ` .. ` ...... `, the alternative dotted table.
pub static DOT: BarTable = BarTable {
    style: BarStyle::Dot,
    rows: as_strs(&DOT_RAW),
    c_rows: as_cstrs(&DOT_RAW),
};

impl BarTable {
    /// The static table for `style`.
    pub fn for_style(style: BarStyle) -> &'static BarTable {
        match style {
            BarStyle::Pipe => &PIPE,
            BarStyle::Dot => &DOT,
        }
    }

    pub fn style(&self) -> BarStyle {
        self.style
    }

    /// Row for a level. Never fails: `Level` is always in range.
    pub fn get(&self, level: Level) -> &'static str {
        self.rows[level.get()]
    }

    /// NUL-terminated row for a level, for C display drivers.
    pub fn get_c(&self, level: Level) -> &'static CStr {
        self.c_rows[level.get()]
    }

    /// Checked raw index, `dispBar[n]` style.
    pub fn row(&self, n: usize) -> Result<&'static str, DispBarError> {
        Level::new(n).map(|level| self.get(level))
    }

    /// All rows as a slice, index == level.
    pub fn rows(&self) -> &[&'static str; LEVELS] {
        &self.rows
    }

    /// Rows paired with their level, ascending.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Level, &'static str)> + '_ {
        Level::all().map(move |level| (level, self.get(level)))
    }
}

/// Row `n` of the default (pipe) table.
pub fn bar(n: usize) -> Result<&'static str, DispBarError> {
    PIPE.row(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_pipe_rows() {
        assert_eq!(
            PIPE.get(Level::MIN),
            "[|                                                           ]"
        );
        assert_eq!(
            PIPE.get(Level::MAX),
            "[||||||||||||||||||||||||||||||||||||||||||||||||||||||||||||]"
        );
    }

    #[test]
    fn first_and_last_dot_rows() {
        assert_eq!(
            DOT.get(Level::MIN),
            " .                                                            "
        );
        assert_eq!(
            DOT.get(Level::MAX),
            " ............................................................ "
        );
    }

    #[test]
    fn c_rows_share_visible_bytes() {
        for table in [&PIPE, &DOT] {
            for (level, s) in table.iter() {
                let c = table.get_c(level);
                assert_eq!(c.to_bytes(), s.as_bytes());
                assert_eq!(c.to_bytes_with_nul().len(), ROW_BYTES);
            }
        }
    }

    #[test]
    fn row_rejects_out_of_range() {
        assert!(bar(59).is_ok());
        assert!(matches!(bar(60), Err(DispBarError::LevelOutOfRange(60))));
        assert!(matches!(
            DOT.row(usize::MAX),
            Err(DispBarError::LevelOutOfRange(_))
        ));
    }

    #[test]
    fn for_style_matches() {
        for style in BarStyle::ALL {
            assert_eq!(BarTable::for_style(style).style(), style);
        }
    }
}
