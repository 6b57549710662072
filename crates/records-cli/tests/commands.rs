//! Integration tests for the sort command.

use std::fs;
use std::path::PathBuf;

use insta::assert_snapshot;
use records_cli::cli::OutputFormatArg;
use records_cli::commands::load_sorted;
use records_cli::render::render_records;
use records_model::{ErrorPolicy, SortStyle};
use tempfile::TempDir;

const AVATAR: &str = "\
Avatar,Aang,Male,Light-Orange,1760-12-13
MeatAndSarcasmGuy|Sokka|Male|Blue|1845-10-17
SoFullOfHope Katara Female Blue 1846-09-21
BlindBandit,Toph,Female,Green,1846-03-29
";

const MORE_AVATAR: &str = "\
Lee|Zuko|Male|Red|1842-07-04
Crazy Azula Female Blood-Red 1842-12-30
Uncle,Iroh,Male,White,1820-08-24
";

fn fixture() -> (TempDir, Vec<PathBuf>) {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    fs::write(&first, AVATAR).unwrap();
    fs::write(&second, MORE_AVATAR).unwrap();
    (dir, vec![first, second])
}

fn sorted_plain(files: &[PathBuf], style: SortStyle) -> String {
    let persons = load_sorted(files, style, ErrorPolicy::Accumulate).unwrap();
    render_records(&persons, OutputFormatArg::Plain).unwrap()
}

#[test]
fn sorts_by_gender_then_last_name() {
    let (_dir, files) = fixture();
    assert_snapshot!(sorted_plain(&files, SortStyle::GenderLastNameAsc), @r"
    BlindBandit,Toph,Female,Green,03/29/1846
    Crazy,Azula,Female,Blood-Red,12/30/1842
    SoFullOfHope,Katara,Female,Blue,09/21/1846
    Avatar,Aang,Male,Light-Orange,12/13/1760
    Lee,Zuko,Male,Red,07/04/1842
    MeatAndSarcasmGuy,Sokka,Male,Blue,10/17/1845
    Uncle,Iroh,Male,White,08/24/1820
    ");
}

#[test]
fn sorts_by_birthdate() {
    let (_dir, files) = fixture();
    assert_snapshot!(sorted_plain(&files, SortStyle::BirthdateAsc), @r"
    Avatar,Aang,Male,Light-Orange,12/13/1760
    Uncle,Iroh,Male,White,08/24/1820
    Lee,Zuko,Male,Red,07/04/1842
    Crazy,Azula,Female,Blood-Red,12/30/1842
    MeatAndSarcasmGuy,Sokka,Male,Blue,10/17/1845
    BlindBandit,Toph,Female,Green,03/29/1846
    SoFullOfHope,Katara,Female,Blue,09/21/1846
    ");
}

#[test]
fn sorts_by_last_name_descending() {
    let (_dir, files) = fixture();
    assert_snapshot!(sorted_plain(&files, SortStyle::LastNameDesc), @r"
    Uncle,Iroh,Male,White,08/24/1820
    SoFullOfHope,Katara,Female,Blue,09/21/1846
    MeatAndSarcasmGuy,Sokka,Male,Blue,10/17/1845
    Lee,Zuko,Male,Red,07/04/1842
    Crazy,Azula,Female,Blood-Red,12/30/1842
    BlindBandit,Toph,Female,Green,03/29/1846
    Avatar,Aang,Male,Light-Orange,12/13/1760
    ");
}

#[test]
fn reports_problems_with_file_and_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(
        &path,
        "Avatar,Aang,Male,Light-Orange,1760-12-13\nhey|there,buddy\nnoseps\n",
    )
    .unwrap();

    let err = load_sorted(
        std::slice::from_ref(&path),
        SortStyle::default(),
        ErrorPolicy::Accumulate,
    )
    .unwrap_err();
    let name = path.display();
    assert_eq!(
        err.to_string(),
        format!(
            "{name}:2: there should only be one type of separator but multiple ('|', ',') were specified\n\
             {name}:3: there are no delimiters"
        )
    );
}

#[test]
fn fail_fast_reports_one_problem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "noseps\nstill-none\n").unwrap();

    let err = load_sorted(&[path], SortStyle::default(), ErrorPolicy::FailFast).unwrap_err();
    assert_eq!(err.len(), 1);
    assert!(err.to_string().ends_with(":1: there are no delimiters"));
}

#[test]
fn missing_file_is_reported_by_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");

    let err = load_sorted(
        std::slice::from_ref(&path),
        SortStyle::default(),
        ErrorPolicy::Accumulate,
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("{}: file does not exist", path.display())
    );
}
