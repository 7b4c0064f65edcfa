mod common;

use std::fs;

use common::*;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn passes_on_a_clean_tree() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("lib.rs"), "pub fn ok() {}\n").unwrap();

    run_localver(temp.path(), &["max-lines"]).success();
}

#[test]
fn reports_offenders_sorted_by_line_count() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("big.rs"), "fn a() {}\n".repeat(30)).unwrap();
    fs::write(temp.path().join("bigger.rs"), "fn b() {}\n".repeat(40)).unwrap();

    run_localver(temp.path(), &["max-lines", "--max-lines", "20"])
        .failure()
        .stderr(predicate::str::contains("Found 2 Rust files over 20 lines"))
        .stderr(predicate::str::contains("bigger.rs: 40"))
        .stderr(predicate::str::contains("big.rs: 30"));
}

#[test]
fn scans_only_the_given_roots() {
    let temp = TempDir::new().unwrap();
    let scanned = temp.path().join("scanned");
    let ignored = temp.path().join("ignored");
    fs::create_dir(&scanned).unwrap();
    fs::create_dir(&ignored).unwrap();
    fs::write(scanned.join("ok.rs"), "fn a() {}\n").unwrap();
    fs::write(ignored.join("huge.rs"), "fn b() {}\n".repeat(100)).unwrap();

    run_localver(temp.path(), &["max-lines", "--max-lines", "10", "--root", "scanned"]).success();
}
