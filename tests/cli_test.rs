use clap::Parser;
use inam_ui::cli::{Args, Command};
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("inam-ui")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_bare_component() {
    let parsed = Args::try_parse_from(make_args(&["button"])).unwrap();

    assert!(parsed.command.is_none());
    assert_eq!(parsed.add.component.as_deref(), Some("button"));
    assert!(!parsed.add.force);
    assert!(!parsed.verbose);
}

#[test]
fn test_no_arguments_is_valid() {
    // triggers the interactive prompt at runtime
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();
    assert!(parsed.command.is_none());
    assert!(parsed.add.component.is_none());
}

#[test]
fn test_add_subcommand_with_flags() {
    let parsed = Args::try_parse_from(make_args(&[
        "add",
        "button",
        "--path",
        "src/components/forms",
        "--force",
        "--skip-checks",
    ]))
    .unwrap();

    match parsed.command {
        Some(Command::Add(add)) => {
            assert_eq!(add.component.as_deref(), Some("button"));
            assert_eq!(add.path, Some(PathBuf::from("src/components/forms")));
            assert!(add.force);
            assert!(add.skip_checks);
        }
        other => panic!("Expected add subcommand, got {:?}", other),
    }
}

#[test]
fn test_short_flags() {
    let parsed =
        Args::try_parse_from(make_args(&["button", "-f", "-p", "./out", "-v"])).unwrap();

    assert!(parsed.add.force);
    assert_eq!(parsed.add.path, Some(PathBuf::from("./out")));
    assert!(parsed.verbose);
}

#[test]
fn test_list_subcommand() {
    let parsed = Args::try_parse_from(make_args(&["list"])).unwrap();
    match parsed.command {
        Some(Command::List(list)) => {
            assert!(list.category.is_none());
            assert!(list.search.is_none());
        }
        other => panic!("Expected list subcommand, got {:?}", other),
    }

    let parsed =
        Args::try_parse_from(make_args(&["list", "-c", "Form", "-s", "input"])).unwrap();
    match parsed.command {
        Some(Command::List(list)) => {
            assert_eq!(list.category.as_deref(), Some("Form"));
            assert_eq!(list.search.as_deref(), Some("input"));
        }
        other => panic!("Expected list subcommand, got {:?}", other),
    }
}

#[test]
fn test_global_verbose_with_subcommand() {
    let parsed = Args::try_parse_from(make_args(&["list", "--verbose"])).unwrap();
    assert!(parsed.verbose);
}

#[test]
fn test_add_flags_conflict_with_subcommands() {
    // top-level positional plus a subcommand cannot be combined
    assert!(Args::try_parse_from(make_args(&["--force", "list"])).is_err());
}
