//! Adder CLI
//!
//! Adds two integers and prints the delivered result message.

use adder::{Adder, AdderConfig, OverflowPolicy};
use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use std::io::IsTerminal;
use std::process;
use tracing::Level;

fn cli() -> Command {
    Command::new("adder")
        .version("0.1.0")
        .about("Add two integers and print the result")
        .arg(
            Arg::new("a")
                .value_name("A")
                .help("First operand")
                .index(1)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i32))
                .default_value("3"),
        )
        .arg(
            Arg::new("b")
                .value_name("B")
                .help("Second operand")
                .index(2)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i32))
                .default_value("5"),
        )
        .arg(
            Arg::new("overflow")
                .short('o')
                .long("overflow")
                .value_name("POLICY")
                .help("Overflow policy: wrapping, saturating or checked [env: ADDER_OVERFLOW]")
                .num_args(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity")
                .action(ArgAction::Count),
        )
}

fn main() {
    let matches = cli().get_matches();

    init_logging(matches.get_count("verbose"));

    match run(&matches, AdderConfig::from_env) {
        Ok(message) => println!("{message}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run<F>(matches: &ArgMatches, from_env: F) -> Result<String, anyhow::Error>
where
    F: FnOnce() -> Result<AdderConfig, adder::AdderError>,
{
    let policy = resolve_policy(matches.get_one::<String>("overflow"), from_env)?;
    let a = operand(matches, "a")?;
    let b = operand(matches, "b")?;
    execute(Adder::new(policy), a, b)
}

/// Operands always carry a clap default, so a missing one is a CLI definition bug
fn operand(matches: &ArgMatches, id: &str) -> Result<i32, anyhow::Error> {
    matches
        .get_one::<i32>(id)
        .copied()
        .with_context(|| format!("missing operand '{id}'"))
}

/// The flag wins over the environment; `from_env` is only consulted without one
fn resolve_policy<F>(flag: Option<&String>, from_env: F) -> Result<OverflowPolicy, anyhow::Error>
where
    F: FnOnce() -> Result<AdderConfig, adder::AdderError>,
{
    let policy = match flag {
        Some(value) => value.parse::<OverflowPolicy>()?,
        None => from_env()?.overflow,
    };
    tracing::info!(%policy, "overflow policy selected");
    Ok(policy)
}

fn execute(adder: Adder, a: i32, b: i32) -> Result<String, anyhow::Error> {
    let mut message = String::new();
    adder.add(a, b, |result| message = result.into_message())?;
    Ok(message)
}
