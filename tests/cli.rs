// tests/cli.rs

//! Drives the `console` binary through a pseudo-terminal.

use rexpect::session::spawn_command;
use std::process::Command;

const TIMEOUT_MS: Option<u64> = Some(10_000);

fn console(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_console"));
    cmd.args(args)
        .env_remove("CONSOLE_MARKUP_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_usage_without_arguments() {
    let output = console(&[]).output().unwrap();
    assert!(output.status.success(), "exit status {:?}", output.status);
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Usage\n\nconsole \"text to print\"\n\n"
    );
}

#[test]
fn markup_debug_alias_enables_diagnostics() {
    let output = console(&["--markup-debug", "<red>x"]).output().unwrap();
    assert!(output.status.success(), "exit status {:?}", output.status);
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "\x1b[31mx\n");
    let diagnostics = String::from_utf8(output.stderr).unwrap();
    assert!(diagnostics.contains("Tag") && diagnostics.contains("<red>"));
}

#[test]
fn converts_markup_argument() {
    let mut session = spawn_command(console(&["<red>hot</> stuff"]), TIMEOUT_MS).unwrap();
    session.exp_string("\x1b[31mhot\x1b[0m stuff").unwrap();
    session.exp_eof().unwrap();
}

#[test]
fn joins_arguments_with_separator() {
    let mut session = spawn_command(
        console(&["--separator", "+", "<bold>a", "b</>"]),
        TIMEOUT_MS,
    )
    .unwrap();
    session.exp_string("\x1b[1ma+b\x1b[0m").unwrap();
    session.exp_eof().unwrap();
}

#[test]
fn unknown_tags_are_printed_verbatim() {
    let mut session = spawn_command(console(&["<rgb:x:y:z>"]), TIMEOUT_MS).unwrap();
    session.exp_string("<rgb:x:y:z>").unwrap();
    session.exp_eof().unwrap();
}
