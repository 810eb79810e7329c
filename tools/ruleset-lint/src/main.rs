//! ruleset-lint: validation and inspection tool for VIGIL rule documents.
//!
//! Usage:
//!   ruleset-lint check --rules rules/
//!   ruleset-lint dump --rules rules/ --craft interceptor

use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use vigil_ruleset::Ruleset;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match args[1].as_str() {
        "check" => cmd_check(&args[2..]),
        "dump" => cmd_dump(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "ruleset-lint: VIGIL rule document validator\n\
         \n\
         Commands:\n\
         \n\
         check     Load a rules directory and report consistency findings\n\
         \n\
           --rules <dir>      Directory of .json rule documents\n\
         \n\
         dump      Print one merged craft rule as JSON\n\
         \n\
           --rules <dir>      Directory of .json rule documents\n\
           --craft <id>       Craft id to dump\n\
         \n\
         Examples:\n\
         \n\
           ruleset-lint check --rules rules/\n\
           ruleset-lint dump --rules rules/ --craft interceptor\n"
    );
}

/// Pull the value following a `--flag` out of the argument list.
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn load_rules(args: &[String]) -> Ruleset {
    let dir = match flag_value(args, "--rules") {
        Some(dir) => PathBuf::from(dir),
        None => {
            eprintln!("Missing --rules <dir>");
            process::exit(1);
        }
    };

    let mut rules = Ruleset::new();
    if let Err(err) = rules.load_dir(&dir) {
        eprintln!("Failed to load {}: {err}", dir.display());
        process::exit(1);
    }
    rules
}

fn cmd_check(args: &[String]) {
    let rules = load_rules(args);

    println!("crafts:      {}", rules.crafts().count());
    println!("armors:      {}", rules.armors().count());
    println!("items:       {}", rules.items().count());
    println!("inventories: {}", rules.inventories().count());
    println!("articles:    {}", rules.articles().count());

    let findings = rules.validate();
    if findings.is_empty() {
        println!("OK");
        return;
    }

    println!("{} finding(s):", findings.len());
    for finding in &findings {
        println!("  {finding}");
    }
    process::exit(2);
}

fn cmd_dump(args: &[String]) {
    let rules = load_rules(args);

    let id = match flag_value(args, "--craft") {
        Some(id) => id,
        None => {
            eprintln!("Missing --craft <id>");
            process::exit(1);
        }
    };

    match rules.craft(&id) {
        Some(craft) => match serde_json::to_string_pretty(craft) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Failed to serialize '{id}': {err}");
                process::exit(1);
            }
        },
        None => {
            eprintln!("No craft rule with id '{id}'");
            process::exit(1);
        }
    }
}
