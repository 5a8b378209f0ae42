//! Demonstrates shape-only comparison of enum values.
//!
//! Run with: `cargo run --example shape_compare`

use caseq::CaseEquatable;

#[derive(CaseEquatable, Debug)]
enum Command {
    Connect(String),
    Retry { attempts: u32 },
    Quit,
}

fn main() {
    let cmd = Command::Connect("example.org:7878".into());

    // Only the active case matters; the payload is never inspected.
    assert!(cmd == CommandRawCase::Connect);
    assert!(cmd != CommandRawCase::Retry);
    assert!(cmd != CommandRawCase::Quit);

    for tag in [CommandRawCase::Connect, CommandRawCase::Retry, CommandRawCase::Quit] {
        println!("{cmd:?} == {tag:?} -> {}", cmd == tag);
    }

    let retry = Command::Retry { attempts: 3 };
    println!("{retry:?} == {:?} -> {}", CommandRawCase::Retry, retry == CommandRawCase::Retry);
}
