// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Definition file checker command-line interface.
//!
//! This is the main entry point for the `shapedef` command.

use clap::{ArgAction, Parser, Subcommand};
use miette::Result;
use tracing_subscriber::EnvFilter;

mod commands;
mod diagnostic;

/// shapedef: check and inspect stereotype icon and toolbar definitions
#[derive(Debug, Parser)]
#[command(name = "shapedef")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse definition files and report every file that fails
    Check {
        /// Definition files or directories (default: paths from shapedef.toml, or ".")
        paths: Vec<String>,
    },

    /// List the icons and toolbars defined in definition files
    List {
        /// Definition files or directories (default: paths from shapedef.toml, or ".")
        paths: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Command::Check { paths } => commands::check::check(&paths),
        Command::List { paths } => commands::list::list(&paths),
    };

    // Exit with appropriate code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    // Targets are module paths: `shapedef_cli` for the binary, `shapedef_core`
    // for the parser.
    match v {
        0 => "shapedef_cli=warn,shapedef_core=warn",
        1 => "shapedef_cli=info,shapedef_core=debug",
        _ => "shapedef_cli=trace,shapedef_core=trace",
    }
}
