#![forbid(unsafe_code)]
//! `disp-bar`: show, render and export fixed-width progress bars.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use disp_bar::{
    BarStyle, BarTable, ExportFormat, ExportOptions, LEVELS, Level, format_table,
    render_bar_width, write_table,
};

#[derive(Parser, Debug)]
#[command(
    name = "disp-bar",
    version,
    about = "Show and export fixed-width text progress bars"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the row for a level (0..=59)
    Show(ShowArgs),
    /// Map DONE out of TOTAL to a level and print its row
    Progress(ProgressArgs),
    /// Render a bar of any width at runtime
    Render(RenderArgs),
    /// Dump a whole table to stdout or a file
    Table(TableArgs),
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Level to show
    level: usize,

    /// Bar style (pipe: "[||  ]", dot: " ..   ")
    #[arg(short = 's', long, value_enum, default_value_t = StyleChoice::Pipe)]
    style: StyleChoice,

    /// Write the raw NUL-terminated row bytes instead of a text line
    #[arg(long)]
    c_bytes: bool,
}

#[derive(Args, Debug)]
struct ProgressArgs {
    /// Units completed
    done: u64,
    /// Total units (must be non-zero)
    total: u64,

    /// Bar style (pipe: "[||  ]", dot: " ..   ")
    #[arg(short = 's', long, value_enum, default_value_t = StyleChoice::Pipe)]
    style: StyleChoice,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Number of filled cells (clamped to 1..=width)
    filled: usize,

    /// Interior width in cells
    #[arg(short = 'w', long, default_value_t = LEVELS)]
    width: usize,

    /// Bar style (pipe: "[||  ]", dot: " ..   ")
    #[arg(short = 's', long, value_enum, default_value_t = StyleChoice::Pipe)]
    style: StyleChoice,
}

#[derive(Args, Debug)]
struct TableArgs {
    /// Bar style (pipe: "[||  ]", dot: " ..   ")
    #[arg(short = 's', long, value_enum, default_value_t = StyleChoice::Pipe)]
    style: StyleChoice,

    /// Output format (text: one row per line, c: array declaration, json)
    #[arg(long, value_enum, default_value_t = FormatChoice::Text)]
    format: FormatChoice,

    /// Output file. If omitted, the table goes to stdout.
    #[arg(short = 'o', long = "out")]
    output: Option<PathBuf>,

    /// Overwrite output if it exists
    #[arg(short = 'f', long = "force")]
    force: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum StyleChoice {
    Pipe,
    Dot,
}

impl From<StyleChoice> for BarStyle {
    fn from(v: StyleChoice) -> Self {
        match v {
            StyleChoice::Pipe => BarStyle::Pipe,
            StyleChoice::Dot => BarStyle::Dot,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum FormatChoice {
    Text,
    C,
    Json,
}

impl From<FormatChoice> for ExportFormat {
    fn from(v: FormatChoice) -> Self {
        match v {
            FormatChoice::Text => ExportFormat::Text,
            FormatChoice::C => ExportFormat::C,
            FormatChoice::Json => ExportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init(); // RUST_LOG=debug for export details
    let cli = Cli::parse();
    match cli.cmd {
        Command::Show(a) => cmd_show(a),
        Command::Progress(a) => cmd_progress(a),
        Command::Render(a) => cmd_render(a),
        Command::Table(a) => cmd_table(a),
    }
}

fn cmd_show(a: ShowArgs) -> Result<()> {
    let level = Level::new(a.level).context("invalid level")?;
    let table = BarTable::for_style(a.style.into());
    if a.c_bytes {
        std::io::stdout().write_all(table.get_c(level).to_bytes_with_nul())?;
    } else {
        println!("{}", table.get(level));
    }
    Ok(())
}

fn cmd_progress(a: ProgressArgs) -> Result<()> {
    let level = Level::from_ratio(a.done, a.total)
        .with_context(|| format!("cannot map {}/{}", a.done, a.total))?;
    log::debug!("{}/{} -> level {}", a.done, a.total, level);
    println!("{}", BarTable::for_style(a.style.into()).get(level));
    Ok(())
}

fn cmd_render(a: RenderArgs) -> Result<()> {
    let bar = render_bar_width(a.filled, a.width, a.style.into()).context("render failed")?;
    println!("{bar}");
    Ok(())
}

fn cmd_table(a: TableArgs) -> Result<()> {
    let opts = ExportOptions::default()
        .with_style(a.style.into())
        .with_format(a.format.into())
        .with_force(a.force);

    match a.output {
        Some(path) => {
            let out = write_table(&path, &opts).with_context(|| "export failed")?;
            eprintln!("Wrote {}", out.display());
        }
        None => {
            let body = format_table(BarTable::for_style(opts.style), opts.format)?;
            std::io::stdout().write_all(body.as_bytes())?;
        }
    }
    Ok(())
}
