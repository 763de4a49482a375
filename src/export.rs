//! Table export: text, C source and JSON, with atomic file output.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::table::BarTable;
use crate::types::{BarStyle, DispBarError, ExportFormat, ExportOptions, LEVELS, ROW_BYTES, ROW_WIDTH};

/// JSON shape of a dumped table.
#[derive(Debug, Serialize)]
struct TableDump<'a> {
    style: BarStyle,
    levels: usize,
    row_width: usize,
    rows: &'a [&'a str],
}

/// Render a whole table in the requested format.
pub fn format_table(table: &BarTable, format: ExportFormat) -> Result<String, DispBarError> {
    match format {
        ExportFormat::Text => {
            let mut out = String::with_capacity(LEVELS * (ROW_WIDTH + 1));
            for row in table.rows() {
                out.push_str(row);
                out.push('\n');
            }
            Ok(out)
        }
        ExportFormat::C => Ok(format_c(table)),
        ExportFormat::Json => {
            let dump = TableDump {
                style: table.style(),
                levels: LEVELS,
                row_width: ROW_WIDTH,
                rows: table.rows(),
            };
            let mut s = serde_json::to_string_pretty(&dump)?;
            s.push('\n');
            Ok(s)
        }
    }
}

fn format_c(table: &BarTable) -> String {
    let mut out = String::new();
    out.push_str(&format!("/* disp_bar: {} style */\n", table.style().name()));
    out.push_str(&format!("const char dispBar[{LEVELS}][{ROW_BYTES}] =\n"));
    out.push_str("{\n");
    for (level, row) in table.iter() {
        let sep = if level.get() + 1 < LEVELS { "," } else { " " };
        out.push_str(&format!("  \"{row}\"{sep}     //  {level}\n"));
    }
    out.push_str("};\n");
    out
}

/// Format the table selected by `opts` and write it to `path` atomically.
///
/// Refuses to replace an existing file unless `opts.force` is set.
pub fn write_table(path: &Path, opts: &ExportOptions) -> Result<PathBuf, DispBarError> {
    let table = BarTable::for_style(opts.style);
    let body = format_table(table, opts.format)?;

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        Some(_) => Path::new("."),
        None => return Err(DispBarError::Invalid("output path has no parent")),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(body.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    log::debug!(
        "exporting {} table as {:?} to {}",
        opts.style.name(),
        opts.format,
        path.display()
    );
    persist_tempfile_atomic(tmp, path, opts.force)
}

/// Atomically persist a tempfile to the target path, honoring the force overwrite policy.
///
/// With `force` the rename replaces `out` in one step, so the old file stays
/// intact if the rename fails. Without it the rename itself refuses an
/// existing target.
fn persist_tempfile_atomic(
    tmp: NamedTempFile,
    out: &Path,
    force: bool,
) -> Result<PathBuf, DispBarError> {
    let tmp_path = tmp.into_temp_path();

    if force {
        log::debug!("replacing {} if present", out.display());
        tmp_path.persist(out).map_err(|e| DispBarError::Io(e.error))?;
    } else {
        tmp_path.persist_noclobber(out).map_err(|e| {
            if e.error.kind() == std::io::ErrorKind::AlreadyExists {
                DispBarError::Invalid("output exists; use --force to overwrite")
            } else {
                DispBarError::Io(e.error)
            }
        })?;
    }
    Ok(out.to_path_buf())
}
