#![forbid(unsafe_code)]
//! # disp_bar — fixed-width text progress bars for small displays.
//!
//! `disp_bar` provides a compile-time table of 60 pre-rendered progress-bar
//! rows, 62 characters wide, for character LCDs and serial consoles. Level `n`
//! draws `n + 1` fill characters. Every row is also available NUL-terminated
//! for C display drivers.
//!
//! ## Features
//! - **Static tables** for the `[|||   ]` and ` ...    ` styles, built by `const fn`
//! - **Checked levels** via [`Level`], plus ratio / percentage mapping
//! - **Runtime rendering** of the same shape at any width
//! - **Export** of a table as text, a C array declaration, or JSON
//!
//! ## Example: Look up a row
//! ```
//! use disp_bar::{BarStyle, BarTable, Level};
//!
//! let level = Level::from_ratio(3, 4).unwrap();
//! let row = BarTable::for_style(BarStyle::Pipe).get(level);
//! assert_eq!(row.len(), 62);
//! assert_eq!(row.matches('|').count(), level.fill_count());
//! ```
//!
//! ## Example: Raw index
//! ```
//! assert!(disp_bar::bar(59).is_ok());
//! assert!(disp_bar::bar(60).is_err());
//! ```

mod types;
mod table;
mod render;
mod export;

// Re-export public API from modules
pub use types::*;
pub use table::{BarTable, DOT, PIPE, bar};
pub use render::{render_bar, render_bar_width, render_ratio};
pub use export::{format_table, write_table};
