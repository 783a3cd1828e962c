//! Named-command dispatcher: forwards a bare command name and its residual
//! argument vector to one of a small, hand-registered set of entry points.
//!
//! Argument parsing is intentionally minimal (`std::env::args`, no flags):
//! every command here takes a fixed, small number of positional arguments,
//! the same shape the original test dispatcher used.

mod commands;

use std::process::ExitCode;

/// Exit code used for usage errors: unknown command, wrong argument count.
const USAGE_EXIT_CODE: u8 = 12;

struct Utility {
    name: &'static str,
    min_args: usize,
    usage: &'static str,
    run: fn(&[String]) -> anyhow::Result<()>,
}

struct Test {
    name: &'static str,
    run: fn() -> anyhow::Result<()>,
}

const UTILITIES: &[Utility] = &[
    Utility {
        name: "parse-value",
        min_args: 0,
        usage: "parse-value [FILE]",
        run: |args| commands::parse_value(args.first().map(String::as_str)),
    },
    Utility {
        name: "lines",
        min_args: 1,
        usage: "lines FILE",
        run: |args| commands::lines(&args[0]),
    },
    Utility {
        name: "tree-check",
        min_args: 2,
        usage: "tree-check INSERT_CSV REMOVE_CSV",
        run: |args| commands::tree_check(&args[0], &args[1]),
    },
];

const TESTS: &[Test] = &[
    Test {
        name: "test_parse_value",
        run: || {
            let mut parser = jsonscalar::ValueParser::new();
            let (status, _) = parser.feed(b"\"smoke\"")?;
            anyhow::ensure!(status == jsonscalar::ParseStatus::Ready);
            anyhow::ensure!(
                parser.into_value()? == jsonscalar::JsonValue::String("smoke".to_string())
            );
            Ok(())
        },
    },
    Test {
        name: "test_tree",
        run: || {
            let mut tree = jsonscalar::Tree::new();
            for v in [3, 1, 4, 1, 5, 9, 2, 6] {
                tree.insert(v);
            }
            anyhow::ensure!(tree.validate());
            Ok(())
        },
    },
];

fn usage(program: &str) -> ! {
    println!("{program} usage:\n");
    for utility in UTILITIES {
        println!("  {}\n", utility.usage);
    }
    println!("  test[_PREFIX]\n");
    std::process::exit(USAGE_EXIT_CODE.into());
}

fn run_tests(prefix: &str) -> u8 {
    let mut last_failure = 0u8;
    let mut ran_any = false;
    for test in TESTS {
        if prefix.is_empty() || test.name.starts_with(prefix) {
            ran_any = true;
            match (test.run)() {
                Ok(()) => println!("{}: OK", test.name),
                Err(e) => {
                    println!("{}: FAILED: {e:#}", test.name);
                    last_failure = 1;
                }
            }
        }
    }
    if !ran_any {
        eprintln!("warning: no test matched prefix {prefix:?}");
    }
    last_failure
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("jsonscalar-cli");

    let Some(command) = args.get(1) else {
        usage(program);
    };

    if command.starts_with("test") {
        let prefix = if command == "test" { "" } else { command.as_str() };
        let residual = &args[2..];
        if !residual.is_empty() {
            eprintln!("warning: ignoring trailing arguments {residual:?}");
        }
        return ExitCode::from(run_tests(prefix));
    }

    let Some(utility) = UTILITIES.iter().find(|u| u.name == command) else {
        eprintln!("ERROR: Option \"{command}\" is invalid.\n");
        usage(program);
    };

    let residual = &args[2..];
    if residual.len() < utility.min_args {
        eprintln!(
            "ERROR: Wrong number of parameters for option {}.\n",
            utility.name
        );
        usage(program);
    }

    match (utility.run)(residual) {
        Ok(()) => {
            println!("\nDONE.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("\nERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}
