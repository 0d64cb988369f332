// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::infra::t;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` or `--lang=<VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--lang" {
            return args.next();
        }
        if let Some(value) = arg.strip_prefix("--lang=") {
            return Some(value.to_string());
        }
    }
    None
}

fn run_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("cli.arg_config").to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("bench")
                .long("bench")
                .help(t!("cli.arg_bench").to_string())
                .value_name("ITERATIONS")
                .value_parser(clap::value_parser!(u32))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("warmup")
                .long("warmup")
                .help(t!("cli.arg_warmup").to_string())
                .value_name("WARMUP")
                .value_parser(clap::value_parser!(u32))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help(t!("cli.arg_dry_run").to_string())
                .action(ArgAction::SetTrue),
        )
}

pub fn build_cli() -> Command {
    Command::new("bench-matrix")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about").to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.arg_lang").to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(run_args(
            Command::new("run").about(t!("cli.cmd_run_about").to_string()),
        ))
        .subcommand(
            Command::new("init")
                .about(t!("cli.cmd_init_about").to_string())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(t!("cli.arg_output").to_string())
                        .value_name("OUTPUT")
                        .default_value("BenchMatrix.toml")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("cli.arg_force").to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn run_options(matches: &ArgMatches, explicit_language: bool) -> commands::run::RunOptions {
    commands::run::RunOptions {
        config: matches.get_one::<PathBuf>("config").cloned(),
        iterations: matches.get_one::<u32>("bench").copied(),
        warmup: matches.get_one::<u32>("warmup").copied(),
        dry_run: matches.get_flag("dry-run"),
        explicit_language,
    }
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    match &language {
        Some(lang) => crate::set_language(lang),
        None => crate::init(),
    }

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            commands::run::execute(run_options(run_matches, language.is_some())).await?;
        }
        Some(("init", init_matches)) => {
            let output = init_matches
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("BenchMatrix.toml"));
            let force = init_matches.get_flag("force");
            commands::init::execute(&output, force)?;
        }
        _ => {
            // No subcommand: run the compiled-in matrix.
            commands::run::execute(commands::run::RunOptions {
                explicit_language: language.is_some(),
                ..Default::default()
            })
            .await?;
        }
    }
    Ok(())
}
