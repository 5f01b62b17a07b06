//! Tests for the interactive collector.

use super::*;
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

/// Run the collector over `input` and return its outcome and the prompts shown.
fn run(config: &Config, input: &str) -> (Result<Collected>, String) {
    run_bytes(config, input.as_bytes())
}

fn run_bytes(config: &Config, input: &[u8]) -> (Result<Collected>, String) {
    let mut prompts = Vec::new();
    let result = Collector::new(Cursor::new(input), &mut prompts)
        .with_username("Alice")
        .collect(config);
    (result, String::from_utf8(prompts).unwrap())
}

fn ready(result: Result<Collected>) -> (ParameterSet, PathBuf) {
    match result.unwrap() {
        Collected::Ready { params, out } => (params, out),
        Collected::Declined => panic!("expected parameters, got Declined"),
    }
}

/// A config with the output path pointing into `dir`, so nothing exists yet.
fn config_in(dir: &TempDir) -> Config {
    Config {
        out: Some(dir.path().join("out.go").to_string_lossy().to_string()),
        ..Config::default()
    }
}

#[test]
fn test_all_flags_skip_prompts() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        command: Some("foo".to_string()),
        package: Some("main".to_string()),
        synopsis: Some("lorem ipsum dolor".to_string()),
        usage: Some("usage: foo [flags]".to_string()),
        ..config_in(&dir)
    };

    let (result, prompts) = run(&config, "");
    let (params, out) = ready(result);

    assert_eq!(prompts, "");
    assert_eq!(
        params,
        ParameterSet::new("foo", "main", "lorem ipsum dolor", "usage: foo [flags]", "Alice")
    );
    assert_eq!(out, dir.path().join("out.go"));
}

#[test]
fn test_command_reprompts_until_valid() {
    let dir = TempDir::new().unwrap();
    let input = "\n9lives\n  -x\n  foo bar  \n\n\n";
    let config = Config {
        package: Some("main".to_string()),
        ..config_in(&dir)
    };

    let (result, prompts) = run(&config, input);
    let (params, _) = ready(result);

    assert_eq!(params.command(), "foo");
    assert_eq!(prompts.matches("Enter subcommand's name (required): ").count(), 4);
}

#[test]
fn test_command_not_utf8_reprompts() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        package: Some("main".to_string()),
        synopsis: Some("s".to_string()),
        usage: Some("u".to_string()),
        ..config_in(&dir)
    };

    let (result, prompts) = run_bytes(&config, b"\xff\xfe\nfoo\n");
    let (params, _) = ready(result);

    assert_eq!(params.command(), "foo");
    assert_eq!(prompts.matches("Enter subcommand's name (required): ").count(), 2);
}

#[test]
fn test_command_required_before_input_ends() {
    let dir = TempDir::new().unwrap();
    let (result, _) = run(&config_in(&dir), "1\n");

    assert!(matches!(result, Err(GenerateError::InputClosed(_))));
}

#[test]
fn test_out_defaults_to_command_name() {
    let config = Config {
        command: Some("foo".to_string()),
        package: Some("main".to_string()),
        synopsis: Some("s".to_string()),
        usage: Some("u".to_string()),
        ..Config::default()
    };

    let (result, prompts) = run(&config, "\n");
    let (_, out) = ready(result);

    assert_eq!(out, PathBuf::from("foo.go"));
    assert!(prompts.starts_with("Enter out file [foo.go]: "));
}

#[test]
fn test_out_appends_suffix_and_reprompts() {
    let config = Config {
        command: Some("foo".to_string()),
        package: Some("main".to_string()),
        synopsis: Some("s".to_string()),
        usage: Some("u".to_string()),
        ..Config::default()
    };

    // "   " is not empty and matches nothing, so it is asked again
    let (result, prompts) = run(&config, "   \n42\n  generated \n");
    let (_, out) = ready(result);

    assert_eq!(out, PathBuf::from("generated.go"));
    assert_eq!(prompts.matches("Enter out file").count(), 3);
}

#[test]
fn test_out_keeps_existing_suffix() {
    let config = Config {
        command: Some("foo".to_string()),
        package: Some("main".to_string()),
        synopsis: Some("s".to_string()),
        usage: Some("u".to_string()),
        ..Config::default()
    };

    let (result, _) = run(&config, "other.go\n");
    let (_, out) = ready(result);

    assert_eq!(out, PathBuf::from("other.go"));
}

#[test]
fn test_existing_file_declined_by_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.go");
    fs::write(&path, "original").unwrap();

    for answer in ["\n", "n\n", "No\n", ""] {
        let config = Config {
            command: Some("foo".to_string()),
            ..config_in(&dir)
        };
        let (result, prompts) = run(&config, answer);

        assert_eq!(result.unwrap(), Collected::Declined, "answer {:?}", answer);
        assert!(prompts.contains("exists, overwrite? [y/N]: "));
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), "original");
}

#[test]
fn test_existing_file_overwrite_confirmed() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("out.go"), "original").unwrap();
    let config = Config {
        command: Some("foo".to_string()),
        package: Some("main".to_string()),
        synopsis: Some("s".to_string()),
        usage: Some("u".to_string()),
        ..config_in(&dir)
    };

    // An unrecognized answer asks again
    let (result, prompts) = run(&config, "maybe\nYES\n");
    let (params, _) = ready(result);

    assert_eq!(params.command(), "foo");
    assert_eq!(prompts.matches("overwrite? [y/N]: ").count(), 2);
}

#[test]
fn test_overwrite_prompt_quotes_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.go");
    fs::write(&path, "original").unwrap();
    let config = Config {
        command: Some("foo".to_string()),
        ..config_in(&dir)
    };

    let (_, prompts) = run(&config, "n\n");

    assert!(prompts.starts_with(&format!("File \"{}\" exists", path.display())));
}

#[test]
fn test_package_defaults_to_command() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        command: Some("foo".to_string()),
        synopsis: Some("s".to_string()),
        usage: Some("u".to_string()),
        ..config_in(&dir)
    };

    let (result, prompts) = run(&config, "\n");
    let (params, _) = ready(result);

    assert!(prompts.contains("Enter package name [foo]: "));
    assert_eq!(params.package(), "foo");
    // A package other than main exports the command
    assert_eq!(params.command(), "Foo");
}

#[test]
fn test_package_reprompts_until_valid() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        command: Some("foo".to_string()),
        synopsis: Some("s".to_string()),
        usage: Some("u".to_string()),
        ..config_in(&dir)
    };

    let (result, prompts) = run(&config, "_x\n main \n");
    let (params, _) = ready(result);

    assert_eq!(params.package(), "main");
    assert_eq!(params.command(), "foo");
    assert_eq!(prompts.matches("Enter package name").count(), 2);
}

#[test]
fn test_synopsis_is_taken_verbatim() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        command: Some("foo".to_string()),
        package: Some("main".to_string()),
        usage: Some("u".to_string()),
        ..config_in(&dir)
    };

    let (result, _) = run(&config, "  sit amet, consectetur!  \n");
    let (params, _) = ready(result);

    assert_eq!(params.synopsis(), "  sit amet, consectetur!  ");
}

#[test]
fn test_synopsis_not_utf8_is_accepted() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        command: Some("foo".to_string()),
        package: Some("main".to_string()),
        usage: Some("u".to_string()),
        ..config_in(&dir)
    };

    let (result, _) = run_bytes(&config, b"caf\xe9\n");
    let (params, _) = ready(result);

    assert_eq!(params.synopsis(), "caf\u{FFFD}");
}

#[test]
fn test_usage_read_until_end_of_input() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        command: Some("foo".to_string()),
        package: Some("main".to_string()),
        synopsis: Some("s".to_string()),
        ..config_in(&dir)
    };

    let (result, prompts) = run(&config, "y\nusage: foo [flags]\r\n\nwopr foo -q=42\n");
    let (params, _) = ready(result);

    assert_eq!(params.usage(), "usage: foo [flags]\n\nwopr foo -q=42");
    assert!(prompts.ends_with("Enter usage? [y/N]: ^D to end.\n"));
}

#[test]
fn test_usage_skipped() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        command: Some("foo".to_string()),
        package: Some("main".to_string()),
        synopsis: Some("s".to_string()),
        ..config_in(&dir)
    };

    for answer in ["\n", "n\n", "whatever\n", ""] {
        let (result, _) = run(&config, answer);
        let (params, _) = ready(result);
        assert_eq!(params.usage(), "", "answer {:?}", answer);
    }
}

#[test]
fn test_full_interactive_session() {
    let input = "bar\nbar\n\nsit amet\ny\nusage: bar\n";

    let (result, prompts) = run(&Config::default(), input);
    let (params, path) = ready(result);

    assert_eq!(
        params,
        ParameterSet::new("Bar", "bar", "sit amet", "usage: bar", "Alice")
    );
    assert_eq!(path, PathBuf::from("bar.go"));
    assert_eq!(
        prompts,
        concat!(
            "Enter subcommand's name (required): ",
            "Enter out file [bar.go]: ",
            "Enter package name [bar]: ",
            "Enter one-line synopsis (optional): ",
            "Enter usage? [y/N]: ",
            "^D to end.\n",
        )
    );
}
