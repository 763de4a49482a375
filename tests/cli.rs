use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

use disp_bar::{BarStyle, BarTable, Level, ROW_BYTES};

#[test]
fn show_prints_row() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("disp-bar")?
        .args(["show", "0"])
        .assert()
        .success()
        .stdout("[|                                                           ]\n");

    Command::cargo_bin("disp-bar")?
        .args(["show", "59", "--style", "dot"])
        .assert()
        .success()
        .stdout(format!("{}\n", BarTable::for_style(BarStyle::Dot).get(Level::MAX)));
    Ok(())
}

#[test]
fn show_c_bytes_includes_nul() -> Result<(), Box<dyn std::error::Error>> {
    let assert = Command::cargo_bin("disp-bar")?
        .args(["show", "3", "--c-bytes"])
        .assert()
        .success();
    let out = &assert.get_output().stdout;
    assert_eq!(out.len(), ROW_BYTES);
    assert_eq!(out.last(), Some(&0));
    Ok(())
}

#[test]
fn show_rejects_out_of_range() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("disp-bar")?
        .args(["show", "60"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
    Ok(())
}

#[test]
fn progress_maps_ratio() -> Result<(), Box<dyn std::error::Error>> {
    let expected = BarTable::for_style(BarStyle::Pipe).get(Level::from_ratio(1, 2)?);
    Command::cargo_bin("disp-bar")?
        .args(["progress", "1", "2"])
        .assert()
        .success()
        .stdout(format!("{expected}\n"));

    Command::cargo_bin("disp-bar")?
        .args(["progress", "1", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-zero"));
    Ok(())
}

#[test]
fn render_custom_width() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("disp-bar")?
        .args(["render", "2", "--width", "4"])
        .assert()
        .success()
        .stdout("[||  ]\n");
    Ok(())
}

#[test]
fn render_rejects_oversized_width() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("disp-bar")?
        .args(["render", "1", "--width", "18446744073709551615"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("MAX_RENDER_WIDTH"));
    Ok(())
}

#[test]
fn table_to_stdout_and_file() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("disp-bar")?
        .args(["table", "--format", "c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("const char dispBar[60][63] ="));

    let td = assert_fs::TempDir::new()?;
    let out = td.child("bars.txt");
    out.write_str("preexisting")?;

    Command::cargo_bin("disp-bar")?
        .args(["table", "--out"])
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("use --force"));
    out.assert("preexisting");

    Command::cargo_bin("disp-bar")?
        .args(["table", "--style", "dot", "--force", "--out"])
        .arg(out.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote"));
    out.assert(predicate::str::starts_with(" .  "));
    Ok(())
}

#[test]
fn table_help_documents_every_flag() -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("disp-bar")?
        .args(["table", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bar style"))
        .stdout(predicate::str::contains("Output format"))
        .stdout(predicate::str::contains("Overwrite output"));
    Ok(())
}
