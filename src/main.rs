#![forbid(unsafe_code)]
//! cxxinit Command Line Interface

use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use console::style;
use tracing_subscriber::EnvFilter;

use cxxinit::{execute_scaffold, Flags, ScaffoldError, ScaffoldOptions};

#[derive(Parser)]
#[command(name = "cxxinit")]
#[command(about = "Scaffold a makefile-driven C++ project in the current (empty) directory")]
#[command(version)]
#[command(disable_help_flag = true)]
#[command(override_usage = "cxxinit [-h] [-r] [-d] [-n] [-p <name>] [-e <prefix>]")]
struct Cli {
    /// Print this help and exit
    #[arg(short = 'h', action = ArgAction::SetTrue)]
    help: bool,

    /// Add ROOT support
    #[arg(short = 'r')]
    root: bool,

    /// Add HDF5 support
    #[arg(short = 'd')]
    hdf5: bool,

    /// Add ndhist support (turns on -d)
    #[arg(short = 'n')]
    ndhist: bool,

    /// Build a python extension module with this name
    #[arg(short = 'p', value_name = "name")]
    python: Option<String>,

    /// Build every src/<prefix>*.cxx as an executable
    #[arg(short = 'e', value_name = "prefix")]
    exe_prefix: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayVersion => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            // clap already appends the usage line
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    init_tracing(cli.verbose);

    if cli.help {
        let _ = Cli::command().print_help();
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let root = std::env::current_dir().context("cannot determine the current directory")?;

    let options = ScaffoldOptions {
        root,
        flags: Flags {
            root: cli.root,
            hdf5: cli.hdf5,
            ndhist: cli.ndhist,
            python_module: cli.python,
            exe_prefix: cli.exe_prefix,
        },
    };

    execute_scaffold(options)?;
    Ok(())
}

fn report(err: &anyhow::Error) {
    eprintln!("{} {:#}", style("✗").red(), err);

    let is_usage = err
        .downcast_ref::<ScaffoldError>()
        .is_some_and(ScaffoldError::is_usage);
    if is_usage {
        eprintln!("\n{}", Cli::command().render_usage());
        eprintln!("  Use 'cxxinit -h' for all options");
    }
}

fn init_tracing(verbose: bool) {
    // filter comes from --verbose only, never from RUST_LOG
    let filter = if verbose { "cxxinit=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_ansi(console::user_attended_stderr())
        .without_time()
        .with_target(false)
        .init();
}
