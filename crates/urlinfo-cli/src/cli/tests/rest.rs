use super::{parse, CliCommand};
use super::super::Cli;
use clap::Parser;

#[test]
fn cli_parse_current() {
    assert!(matches!(parse(&["urlinfo", "current"]), CliCommand::Current));
}

#[test]
fn cli_parse_slug() {
    match parse(&["urlinfo", "slug", "Hello World"]) {
        CliCommand::Slug { text } => assert_eq!(text, "Hello World"),
        _ => panic!("expected Slug"),
    }
}

#[test]
fn cli_parse_segment() {
    match parse(&["urlinfo", "segment", "/a/b/c"]) {
        CliCommand::Segment { uri, first, last } => {
            assert_eq!(uri, "/a/b/c");
            assert!(!first);
            assert!(!last);
        }
        _ => panic!("expected Segment"),
    }
}

#[test]
fn cli_parse_segment_last() {
    match parse(&["urlinfo", "segment", "/a/b/c", "--last"]) {
        CliCommand::Segment { first, last, .. } => {
            assert!(!first);
            assert!(last);
        }
        _ => panic!("expected Segment"),
    }
}

#[test]
fn cli_parse_segment_first_and_last_conflict() {
    assert!(Cli::try_parse_from(["urlinfo", "segment", "/a", "--first", "--last"]).is_err());
}

#[test]
fn cli_parse_completions() {
    match parse(&["urlinfo", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    assert!(matches!(parse(&["urlinfo", "man"]), CliCommand::Man));
}

#[test]
fn cli_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
